// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::clip;
use crate::grid::Point;

/// Visits the on-grid pixels of the 8-connected Bresenham path from `from`
/// to `to`.
///
/// Pixels come in path order from `from`, endpoints included. Only the
/// stretch of the path that crosses the grid is walked.
pub fn line(from: Point, to: Point, mut plot: impl FnMut(Point)) {
    let (x0, y0) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    if dx >= dy {
        for t in clip::steps(x0, sx, dx, clip::MAX_X) {
            clip::plot_at(&mut plot, x0 + sx * t, y0 + sy * minor_steps(t, dy, dx));
        }
    } else {
        for t in clip::steps(y0, sy, dy, clip::MAX_Y) {
            clip::plot_at(&mut plot, x0 + sx * minor_steps(t, dx, dy), y0 + sy * t);
        }
    }
}

/// Minor-axis steps the error-accumulating walk has taken after `t` major
/// steps: `floor((2 t minor + major) / (2 major))`.
fn minor_steps(t: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let n = 2 * i128::from(t) * i128::from(minor) + i128::from(major);
    i64::try_from(n / (2 * i128::from(major))).unwrap_or(minor)
}

/// Visits the on-grid part of the horizontal run of `len` pixels starting at
/// `start`.
pub fn hline(start: Point, len: i32, mut plot: impl FnMut(Point)) {
    let (x, y) = (i64::from(start.x), i64::from(start.y));
    for i in clip::steps(x, 1, i64::from(len) - 1, clip::MAX_X) {
        clip::plot_at(&mut plot, x + i, y);
    }
}

/// Visits the on-grid part of the vertical run of `len` pixels starting at
/// `start`.
pub fn vline(start: Point, len: i32, mut plot: impl FnMut(Point)) {
    let (x, y) = (i64::from(start.x), i64::from(start.y));
    for i in clip::steps(y, 1, i64::from(len) - 1, clip::MAX_Y) {
        clip::plot_at(&mut plot, x, y + i);
    }
}
