// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use oledkit_gfx::{GfxBackend, GfxCall};
use oledkit_gfx_source::{Dialect, SourceBackend, format_frames};
use oledkit_ops::OperationLog;
use oledkit_raster::PixelGrid;
use oledkit_recover::{Pipeline, RecoverConfig};
use tracing::debug;

/// Where the drawing calls come from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Replay a non-empty log, otherwise recover shapes from the grid.
    #[default]
    Auto,
    /// Always replay the log, skipping operations without a call.
    Replay,
    /// Always recover shapes from the grid, ignoring the log.
    Recover,
    /// Replay only when every logged operation has a call and the log is
    /// more than a bare image import; otherwise recover.
    PreferReplayable,
}

/// Where a resolved strategy takes its calls from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Source {
    Log,
    Grid,
}

/// What the generated text contains.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputMode {
    /// One drawing call per line.
    #[default]
    Calls,
    /// The grid as a page-packed `PROGMEM` array.
    Bitmap,
}

/// Code generation settings.
///
/// ```
/// use oledkit_codegen::{Generator, Strategy};
/// use oledkit_ops::OperationLog;
/// use oledkit_raster::{PixelGrid, Point};
///
/// let mut grid = PixelGrid::new();
/// grid.set(Point::new(3, 4), true);
/// let code = Generator::new()
///     .with_strategy(Strategy::Recover)
///     .generate(&grid, &OperationLog::new());
/// assert!(code.contains("display.drawPixel(3, 4, SSD1306_WHITE);"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Generator {
    /// How calls are chosen.
    pub strategy: Strategy,
    /// Calls or bitmap text.
    pub mode: OutputMode,
    /// Identifiers for emitted calls.
    pub dialect: Dialect,
    /// Thresholds for shape recovery.
    pub recover: RecoverConfig,
}

impl Generator {
    /// Default settings: [`Strategy::Auto`], [`OutputMode::Calls`], and the
    /// SSD1306 dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the output mode.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the recovery thresholds.
    #[must_use]
    pub fn with_recover_config(mut self, config: RecoverConfig) -> Self {
        self.recover = config;
        self
    }

    /// Resolves the strategy for `log` to [`Strategy::Replay`] or
    /// [`Strategy::Recover`].
    pub fn resolve(&self, log: &OperationLog) -> Strategy {
        match self.source(log) {
            Source::Log => Strategy::Replay,
            Source::Grid => Strategy::Recover,
        }
    }

    fn source(&self, log: &OperationLog) -> Source {
        match self.strategy {
            Strategy::Auto if log.is_empty() => Source::Grid,
            Strategy::Auto => Source::Log,
            Strategy::Replay => Source::Log,
            Strategy::Recover => Source::Grid,
            Strategy::PreferReplayable
                if log.is_empty() || log.imported_only() || !log.is_replayable() =>
            {
                Source::Grid
            }
            Strategy::PreferReplayable => Source::Log,
        }
    }

    /// The full call sequence, framed by `clearDisplay` and `display`.
    pub fn calls(&self, grid: &PixelGrid, log: &OperationLog) -> Vec<GfxCall> {
        let source = self.source(log);
        debug!(?source, ops = log.len(), lit = grid.count_on(), "generating calls");
        let mut out = Vec::new();
        out.push(GfxCall::ClearDisplay);
        match source {
            Source::Log => out.extend(log.calls()),
            Source::Grid => out.extend(Pipeline::new(self.recover.clone()).run(grid)),
        }
        out.push(GfxCall::Display);
        out
    }

    /// Generates source text for `grid`, consulting `log` when replaying.
    ///
    /// In [`OutputMode::Bitmap`] the log is ignored and the grid is packed
    /// as a single frame.
    pub fn generate(&self, grid: &PixelGrid, log: &OperationLog) -> String {
        match self.mode {
            OutputMode::Calls => {
                let mut backend = SourceBackend::new(self.dialect.clone());
                for call in self.calls(grid, log) {
                    backend.call(call);
                }
                backend.into_source()
            }
            OutputMode::Bitmap => format_frames(core::slice::from_ref(grid)),
        }
    }

    /// Packs an animation as a `PROGMEM` frame array.
    pub fn generate_frames(&self, frames: &[PixelGrid]) -> String {
        debug!(frames = frames.len(), "packing frames");
        format_frames(frames)
    }
}
