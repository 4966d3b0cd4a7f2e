// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use oledkit_gfx::GfxCall;
use oledkit_raster::PixelGrid;

use crate::op::{DrawingOperation, OperationKind};

/// Ordered record of completed drawing operations.
///
/// Insertion order is replay order: [`OperationLog::render`] applied to a
/// blank grid reproduces the editor's grid as long as every pixel change
/// was logged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OperationLog {
    ops: Vec<DrawingOperation>,
}

impl OperationLog {
    /// An empty log.
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Appends an operation.
    pub fn push(&mut self, op: DrawingOperation) {
        self.ops.push(op);
    }

    /// Removes and returns the most recent operation.
    pub fn pop(&mut self) -> Option<DrawingOperation> {
        self.ops.pop()
    }

    /// Drops every operation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Operations in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawingOperation> {
        self.ops.iter()
    }

    /// The operations as a slice.
    pub fn as_slice(&self) -> &[DrawingOperation] {
        &self.ops
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies every operation, in order, to a blank grid.
    pub fn render(&self) -> PixelGrid {
        let mut grid = PixelGrid::new();
        for op in &self.ops {
            op.apply(&mut grid);
        }
        grid
    }

    /// Returns `true` if every operation has a call equivalent.
    pub fn is_replayable(&self) -> bool {
        self.ops.iter().all(|op| op.kind().is_replayable())
    }

    /// Returns `true` if the log is non-empty and holds only image imports.
    pub fn imported_only(&self) -> bool {
        !self.ops.is_empty()
            && self
                .ops
                .iter()
                .all(|op| op.kind() == OperationKind::ImportImage)
    }

    /// Replay calls, in order, skipping operations without one.
    pub fn calls(&self) -> impl Iterator<Item = GfxCall> + '_ {
        self.ops.iter().filter_map(DrawingOperation::to_call)
    }

    pub(crate) fn truncate(&mut self, len: usize) -> Vec<DrawingOperation> {
        self.ops.split_off(len.min(self.ops.len()))
    }
}

impl FromIterator<DrawingOperation> for OperationLog {
    fn from_iter<I: IntoIterator<Item = DrawingOperation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<DrawingOperation> for OperationLog {
    fn extend<I: IntoIterator<Item = DrawingOperation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a DrawingOperation;
    type IntoIter = core::slice::Iter<'a, DrawingOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for OperationLog {
    type Item = DrawingOperation;
    type IntoIter = alloc::vec::IntoIter<DrawingOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
