// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit GFX Source: text surfaces for the drawing-call IR.
//!
//! - [`SourceBackend`] implements [`GfxBackend`](oledkit_gfx::GfxBackend)
//!   by writing one `display.<method>(...);` line per call. Identifiers come
//!   from a [`Dialect`].
//! - [`parse_line`] and [`parse_listing`] read that syntax back into
//!   [`GfxCall`](oledkit_gfx::GfxCall)s, reporting a [`ParseCallError`] on
//!   malformed input.
//! - [`format_frame`] and [`format_frames`] write page-packed frames as C
//!   arrays for SSD1306 firmware that copies straight into the display
//!   buffer.
//!
//! This is a text contract only: nothing here checks that the output
//! compiles against a particular display library.
//!
//! ```rust
//! use oledkit_gfx::{Color, GfxBackendExt};
//! use oledkit_gfx_source::{Dialect, SourceBackend, parse_listing};
//! use oledkit_raster::Point;
//!
//! let mut backend = SourceBackend::new(Dialect::default());
//! backend.clear_display();
//! backend.draw_pixel(Point::new(5, 5), Color::On);
//! backend.flush();
//! let source = backend.to_source();
//! assert_eq!(source.lines().nth(1), Some("display.drawPixel(5, 5, SSD1306_WHITE);"));
//!
//! let calls = parse_listing(&source, backend.dialect()).unwrap();
//! assert_eq!(calls, backend.calls());
//! ```

#![no_std]

extern crate alloc;

mod backend;
mod bitmap;
mod dialect;
mod parse;

pub use backend::SourceBackend;
pub use bitmap::{format_frame, format_frames};
pub use dialect::Dialect;
pub use parse::{ParseCallError, ParseErrorKind, parse_line, parse_listing};
