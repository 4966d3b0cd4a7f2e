// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit Raster: the pixel grid and integer rasterizers for a 128x64 monochrome display.
//!
//! This crate is the leaf of the oledkit stack. It owns:
//!
//! - [`PixelGrid`]: a fixed [`WIDTH`] by [`HEIGHT`] bit matrix with
//!   value semantics, plus [`Point`] for integer coordinates.
//! - Rasterizers for every primitive the drawing API knows: [`line`],
//!   [`rect_outline`], [`rect_filled`], [`circle_outline`],
//!   [`circle_filled`], [`rounded_rect_outline`], [`rounded_rect_filled`],
//!   [`triangle_outline`] and [`triangle_filled`].
//! - [`flood_fill`] for the editor's bucket tool.
//! - SSD1306 page packing via [`PixelGrid::to_pages`] and
//!   [`PixelGrid::from_pages`].
//!
//! Rasterizers are visitors: they call `plot` for each on-grid pixel of the
//! shape and never fail. Arguments may be any `i32`; shapes are clipped to
//! the grid before their loops run, so even a huge or far-off shape costs at
//! most a screenful of work. The same routine can paint a grid, build a
//! mask, or count coverage.
//!
//! ```rust
//! use oledkit_raster::{PixelGrid, Point, circle_outline};
//!
//! let mut grid = PixelGrid::new();
//! grid.paint(true, |plot| circle_outline(Point::new(64, 32), 10, plot));
//! assert!(grid.get(Point::new(74, 32)));
//! assert!(!grid.get(Point::new(64, 32)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: float math through `libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`Point`] and [`PixelGrid`].

#![no_std]

extern crate alloc;

mod circle;
mod clip;
mod fill;
mod grid;
mod line;
mod pages;
mod rect;
mod triangle;

pub use circle::{circle_filled, circle_outline, radius_between};
pub use fill::flood_fill;
pub use grid::{FRAME_BYTES, GridError, HEIGHT, Neighbors, PAGES, PixelGrid, Point, WIDTH};
pub use line::{hline, line, vline};
pub use rect::{corner_radius, rect_filled, rect_outline, rounded_rect_filled, rounded_rect_outline};
pub use triangle::{triangle_filled, triangle_outline, triangle_vertices};
