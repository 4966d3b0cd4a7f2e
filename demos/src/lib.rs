// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the oledkit demos.

use oledkit_ops::Session;
use oledkit_raster::Point;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber.
///
/// `verbose` starts at `debug` instead of `info`; `RUST_LOG` overrides
/// either.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns `true` if `flag` was passed on the command line.
pub fn has_flag(flag: &str) -> bool {
    std::env::args().skip(1).any(|a| a == flag)
}

/// A small editor session touching every drawing tool.
pub fn sample_session() -> Session {
    let mut s = Session::default();
    s.circle(Point::new(20, 20), Point::new(28, 20), false);
    s.circle(Point::new(100, 16), Point::new(106, 16), true);
    s.rectangle(Point::new(50, 5), Point::new(79, 24), false);
    s.rounded_rectangle(Point::new(84, 34), Point::new(113, 53), true);
    s.triangle(Point::new(30, 34), Point::new(50, 60), false);
    s.line(Point::new(0, 63), Point::new(127, 40));
    s.set_fill_value(false);
    s.line(Point::new(84, 44), Point::new(113, 44));
    s.set_fill_value(true);
    s.toggle_pixel(Point::new(64, 2));
    s
}
