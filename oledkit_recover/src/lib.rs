// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit Recover: turn a raw bitmap back into drawing calls.
//!
//! Recovery runs a fixed, ordered list of greedy passes over a private
//! working copy of the grid:
//!
//! 1. circle outlines
//! 2. filled circles
//! 3. triangles, outlined or filled
//! 4. rounded rectangles, outlined or filled
//! 5. filled rectangles
//! 6. rectangle outlines
//! 7. fast horizontal then vertical lines
//! 8. remaining horizontal then vertical runs as `drawLine`
//! 9. single pixels
//!
//! A pass only claims a shape when every pixel the shape would draw is still
//! lit in the working copy, and then erases exactly those pixels. Replaying
//! the recovered calls onto a blank grid therefore reproduces the input, and
//! no pixel is explained twice. Detection is a heuristic: the output is
//! always correct but not always the shortest.
//!
//! ```rust
//! use oledkit_gfx::{Color, GfxCall, RecordedCalls};
//! use oledkit_raster::{PixelGrid, Point, circle_outline};
//!
//! let grid = PixelGrid::mask(|plot| circle_outline(Point::new(64, 32), 10, plot));
//! let calls = oledkit_recover::recover(&grid);
//! assert_eq!(calls, [GfxCall::DrawCircle { x: 64, y: 32, r: 10, color: Color::On }]);
//! assert_eq!(RecordedCalls::from(calls).render(), grid);
//! ```
//!
//! Thresholds live in [`RecoverConfig`]; pass order is a [`Pipeline`].
//!
//! ## Features
//!
//! - `std` (default): forwarded to kurbo and tracing.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`RecoverConfig`], [`Pass`] and
//!   the report types.

#![no_std]

extern crate alloc;

mod circle;
mod config;
mod pipeline;
mod rect;
mod report;
mod runs;
mod scan;
mod triangle;

use alloc::vec::Vec;

use oledkit_gfx::GfxCall;
use oledkit_raster::PixelGrid;

pub use circle::{is_circle, is_filled_circle};
pub use config::RecoverConfig;
pub use pipeline::{Pass, Pipeline};
pub use report::{PassReport, RecoveryReport};
pub use triangle::{is_triangle, line_coverage, point_in_triangle};

/// Recovers drawing calls from `grid` with the default pipeline.
pub fn recover(grid: &PixelGrid) -> Vec<GfxCall> {
    Pipeline::default().run(grid)
}

/// Like [`recover`], also reporting what each pass claimed.
pub fn recover_with_report(grid: &PixelGrid) -> (Vec<GfxCall>, RecoveryReport) {
    Pipeline::default().run_with_report(grid)
}
