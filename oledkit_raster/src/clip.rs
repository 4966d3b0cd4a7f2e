// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-bounded iteration for the rasterizers.
//!
//! Shape arguments may be any `i32`. Endpoint math happens in `i64`, squared
//! distances in `i128`, and every loop range is intersected with the grid
//! before it is walked, so no shape costs more than a screenful of work.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use core::ops::RangeInclusive;

use crate::grid::{HEIGHT_I32, Point, WIDTH_I32};

/// Last column.
pub(crate) const MAX_X: i64 = WIDTH_I32 as i64 - 1;
/// Last row.
pub(crate) const MAX_Y: i64 = HEIGHT_I32 as i64 - 1;

/// `lo..=hi` intersected with `0..=max`.
pub(crate) fn clamp(lo: i64, hi: i64, max: i64) -> RangeInclusive<i64> {
    lo.max(0)..=hi.min(max)
}

/// Steps `t` in `0..=len` for which `origin + dir * t` lies in `0..=max`.
///
/// `dir` is `1` or `-1`.
pub(crate) fn steps(origin: i64, dir: i64, len: i64, max: i64) -> RangeInclusive<i64> {
    let (lo, hi) = if dir > 0 {
        (-origin, max - origin)
    } else {
        (origin - max, origin)
    };
    lo.max(0)..=hi.min(len)
}

/// Visits `(x, y)` if it addresses a pixel.
pub(crate) fn plot_at(plot: &mut impl FnMut(Point), x: i64, y: i64) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        let p = Point::new(x, y);
        if p.in_bounds() {
            plot(p);
        }
    }
}

/// Smallest `i` in `0..=n` for which `pred` holds, or `n + 1`.
///
/// `pred` must be false then true along the range.
pub(crate) fn partition_point(n: i64, pred: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (0, n + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Indices in `0..=n` whose value under the monotone `f` lies in `lo..=hi`.
pub(crate) fn window(n: i64, lo: i64, hi: i64, f: impl Fn(i64) -> i64) -> RangeInclusive<i64> {
    let (enter, leave) = if f(0) <= f(n) {
        (partition_point(n, |i| f(i) >= lo), partition_point(n, |i| f(i) > hi))
    } else {
        (partition_point(n, |i| f(i) <= hi), partition_point(n, |i| f(i) < lo))
    };
    enter..=leave - 1
}

/// Rounds half away from zero, saturating at the `i64` range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate, and saturated values are off-grid"
)]
pub(crate) fn round_i64(v: f64) -> i64 {
    v.round() as i64
}
