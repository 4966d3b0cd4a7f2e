// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::pipeline::Pass;

/// What one pass claimed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    /// The pass.
    pub pass: Pass,
    /// Calls it emitted.
    pub calls: usize,
    /// Pixels those calls explained.
    pub pixels: usize,
}

/// Per-pass accounting for one recovery run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecoveryReport {
    /// Entries in run order.
    pub passes: Vec<PassReport>,
    /// Lit pixels no pass claimed. Zero whenever the pipeline ends with
    /// [`Pass::Pixels`].
    pub unexplained: usize,
}

impl RecoveryReport {
    /// The first entry for `pass`, if it ran.
    pub fn get(&self, pass: Pass) -> Option<&PassReport> {
        self.passes.iter().find(|r| r.pass == pass)
    }

    /// Calls emitted across all passes.
    pub fn total_calls(&self) -> usize {
        self.passes.iter().map(|r| r.calls).sum()
    }

    /// Pixels explained across all passes.
    pub fn total_pixels(&self) -> usize {
        self.passes.iter().map(|r| r.pixels).sum()
    }
}
