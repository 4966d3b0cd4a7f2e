// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit GFX: a typed intermediate representation of Adafruit GFX drawing calls.
//!
//! [`GfxCall`] is plain data: one variant per call the display library
//! offers, with integer arguments and a [`Color`]. Calls can be:
//!
//! - interpreted against a [`PixelGrid`] with [`GfxCall::apply`], using the
//!   same rasterizers as the editor so a replayed listing lands on exactly
//!   the pixels the editor drew;
//! - turned into masks with [`GfxCall::mask`] for coverage checks;
//! - sent to any [`GfxBackend`], which may execute, serialize, or record them.
//!
//! Backends are sinks. [`GridBackend`] paints a framebuffer and
//! [`RecordingBackend`] keeps a call list. [`record_calls`] captures
//! what a closure issues without changing how the backend executes it.
//!
//! ```rust
//! use oledkit_gfx::{Color, GfxBackendExt, GridBackend, record_calls};
//! use oledkit_raster::Point;
//!
//! let mut backend = GridBackend::new();
//! let rec = record_calls(&mut backend, |b| {
//!     b.clear_display();
//!     b.circle(Point::new(64, 32), 10, false, Color::On);
//!     b.flush();
//! });
//! assert_eq!(rec.len(), 3);
//! assert_eq!(rec.render(), *backend.grid());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `oledkit_raster`.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for calls and recordings.

#![no_std]

extern crate alloc;

mod backend;
mod call;

pub use backend::{GfxBackend, GfxBackendExt, GridBackend, RecordedCalls, RecordingBackend, record_calls};
pub use call::{CallKind, Color, GfxCall};

pub use oledkit_raster::{PixelGrid, Point};
