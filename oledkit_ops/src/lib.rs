// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oledkit Ops: the drawing operation log and the editor session that records it.
//!
//! Each completed editor action becomes one typed [`DrawingOperation`].
//! The [`OperationLog`] keeps them in causal order, which is also replay
//! order: applying the log to a blank grid reproduces the editor's grid
//! bit for bit. [`DrawingOperation::to_call`] maps each operation to the
//! drawing call that replays it; flood fills and image imports have none.
//!
//! [`Session`] is the imperative shell around the log: pixel, line,
//! rectangle, circle, rounded rectangle, triangle, freehand, bucket,
//! fill-all, clear and import tools, plus bounded undo/redo that moves the
//! grid and the log together.
//!
//! ```rust
//! use oledkit_ops::{OperationKind, Session};
//! use oledkit_raster::Point;
//!
//! let mut session = Session::default();
//! session.circle(Point::new(64, 32), Point::new(74, 32), false);
//! session.set_pixel(Point::new(0, 0));
//! assert_eq!(session.log().render(), *session.grid());
//!
//! session.undo();
//! let kinds: Vec<_> = session.log().iter().map(|op| op.kind()).collect();
//! assert_eq!(kinds, [OperationKind::Circle]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to the raster and tracing crates.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for operations, logs and
//!   [`SessionConfig`].

#![no_std]

extern crate alloc;

mod log;
mod op;
mod session;

pub use log::OperationLog;
pub use op::{DrawingOperation, OperationKind};
pub use session::{Session, SessionConfig, SessionError};
