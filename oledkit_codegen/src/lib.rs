// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit Codegen: drawing code for a 128x64 monochrome display.
//!
//! [`generate`] turns a grid, and optionally the log of edits that produced
//! it, into Adafruit GFX source lines. The output always starts with
//! `clearDisplay` and ends with `display`:
//!
//! - With a non-empty log the operations are replayed one call each.
//!   Operations without a call equivalent (flood fill, image import) are
//!   skipped.
//! - With an empty log, shapes are recovered from the pixels by
//!   [`oledkit_recover`].
//!
//! [`Generator`] exposes the choice as a [`Strategy`], swaps the emitted
//! identifiers through a [`Dialect`], and can emit the grid as a
//! page-packed bitmap instead ([`OutputMode::Bitmap`]).
//!
//! ```rust
//! use oledkit_codegen::generate;
//! use oledkit_ops::OperationLog;
//! use oledkit_raster::{PixelGrid, Point};
//!
//! let mut grid = PixelGrid::new();
//! grid.set(Point::new(5, 5), true);
//! assert_eq!(
//!     generate(&grid, &OperationLog::new()),
//!     "display.clearDisplay();\n\
//!      display.drawPixel(5, 5, SSD1306_WHITE);\n\
//!      display.display();"
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to every oledkit crate and tracing.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`Generator`] and its enums.

#![no_std]

extern crate alloc;

mod generator;

use alloc::string::String;

pub use generator::{Generator, OutputMode, Strategy};
pub use oledkit_gfx_source::Dialect;

use oledkit_ops::OperationLog;
use oledkit_raster::PixelGrid;

/// Generates drawing calls for `grid` with the default [`Generator`].
pub fn generate(grid: &PixelGrid, log: &OperationLog) -> String {
    Generator::new().generate(grid, log)
}
