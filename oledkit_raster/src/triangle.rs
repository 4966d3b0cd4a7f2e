// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use smallvec::SmallVec;

use crate::grid::{HEIGHT, Point, WIDTH};
use crate::line::line;

#[expect(clippy::cast_possible_truncation, reason = "grid dimensions are small")]
const MAX_X: i32 = WIDTH as i32 - 1;
#[expect(clippy::cast_possible_truncation, reason = "grid dimensions are small")]
const MAX_Y: i32 = HEIGHT as i32 - 1;

/// Derives an isosceles triangle from its apex and bounding size.
///
/// Returns `[top, bottom_left, bottom_right]`. The base corners sit at
/// `floor(top.x -/+ width / 2)` on row `top.y + height`, clamped to the grid.
/// A non-positive `height` has no triangle.
pub fn triangle_vertices(top: Point, width: i32, height: i32) -> Option<[Point; 3]> {
    if height <= 0 {
        return None;
    }
    let base_y = top.y.saturating_add(height).clamp(0, MAX_Y);
    let (apex, half) = (2 * i64::from(top.x), i64::from(width));
    let column = |v: i64| i32::try_from(v.div_euclid(2).clamp(0, i64::from(MAX_X))).unwrap_or(0);
    Some([
        top,
        Point::new(column(apex - half), base_y),
        Point::new(column(apex + half), base_y),
    ])
}

/// Visits the three edges of a triangle.
///
/// Shared vertices are visited once.
pub fn triangle_outline(vertices: [Point; 3], mut plot: impl FnMut(Point)) {
    let [a, b, c] = vertices;
    line(a, b, &mut plot);
    line(b, c, |p| {
        if p != b {
            plot(p);
        }
    });
    line(c, a, |p| {
        if p != c && p != a && p != b {
            plot(p);
        }
    });
}

/// Visits the scanline fill of a triangle.
///
/// For each row, edges whose vertical extent straddles the row under the
/// half-open rule `a.y <= y < b.y` contribute one intersection; spans between
/// sorted pairs are visited inclusively after rounding. Rows and spans are
/// clipped to the grid.
pub fn triangle_filled(vertices: [Point; 3], mut plot: impl FnMut(Point)) {
    let [a, b, c] = vertices;
    let min_y = a.y.min(b.y).min(c.y).max(0);
    let max_y = a.y.max(b.y).max(c.y).min(MAX_Y);
    for y in min_y..=max_y {
        let mut xs: SmallVec<[f64; 3]> = SmallVec::new();
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if (p.y <= y && q.y > y) || (p.y > y && q.y <= y) {
                let t = (f64::from(y) - f64::from(p.y)) / (f64::from(q.y) - f64::from(p.y));
                xs.push(f64::from(p.x) + t * (f64::from(q.x) - f64::from(p.x)));
            }
        }
        xs.sort_by(f64::total_cmp);
        for pair in xs.chunks_exact(2) {
            let start = round_px(pair[0]).max(0);
            let end = round_px(pair[1]).min(MAX_X);
            for x in start..=end {
                plot(Point::new(x, y));
            }
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate, and the span is clamped to the grid"
)]
fn round_px(v: f64) -> i32 {
    v.round() as i32
}
