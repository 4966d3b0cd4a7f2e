// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::clip::{self, MAX_X, MAX_Y, plot_at};
use crate::grid::Point;

/// Visits the midpoint-circle outline of `radius` around `center`.
///
/// These are the pixels of Adafruit GFX's `drawCircle`, so replayed code
/// draws the same pixels on the device. Some points are visited twice where
/// octants meet. Non-positive radii visit nothing.
///
/// The first octant is evaluated in closed form ([`octant_y`]), so only
/// octant columns whose mirror images land on the grid are visited.
pub fn circle_outline(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius <= 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    let last = clip::partition_point(r + 1, |x| x >= octant_y(x, r));
    for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        for x in clip::steps(cx, sx, last, MAX_X) {
            plot_at(&mut plot, cx + sx * x, cy + sy * octant_y(x, r));
        }
        for x in clip::steps(cy, sy, last, MAX_Y) {
            plot_at(&mut plot, cx + sx * octant_y(x, r), cy + sy * x);
        }
    }
}

/// Row of the midpoint walk at column `x` of the first octant.
///
/// The walk starts at `(0, r)` and steps down one row whenever
/// `x² + y(y - 1) >= r²`. That is the largest `y` with `y(y - 1) < r² - x²`,
/// except that the final column can lag that target by one row.
fn octant_y(x: i64, r: i64) -> i64 {
    let target = |x: i64| -> i64 {
        let t = i128::from(r) * i128::from(r) - i128::from(x) * i128::from(x) - 1;
        if t < 0 {
            return 0;
        }
        i64::try_from(((4 * t + 1).isqrt() + 1) / 2).unwrap_or(r)
    };
    if x == 0 {
        target(0)
    } else {
        target(x).max(target(x - 1) - 1)
    }
}

/// Visits every on-grid pixel whose distance to `center` is at most `radius`.
pub fn circle_filled(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius <= 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(center.x), i64::from(center.y), i64::from(radius));
    let r2 = i128::from(r) * i128::from(r);
    for y in clip::clamp(cy - r, cy + r, MAX_Y) {
        let dy = i128::from(y - cy);
        for x in clip::clamp(cx - r, cx + r, MAX_X) {
            let dx = i128::from(x - cx);
            if dx * dx + dy * dy <= r2 {
                plot_at(&mut plot, x, y);
            }
        }
    }
}

/// Radius the editor derives from a drag: the rounded centre-to-edge distance.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate"
)]
pub fn radius_between(center: Point, edge: Point) -> i32 {
    center.to_kurbo().distance(edge.to_kurbo()).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelGrid;

    #[test]
    fn outline_is_eight_way_symmetric() {
        let c = Point::new(64, 32);
        let g = PixelGrid::mask(|plot| circle_outline(c, 9, plot));
        for p in g.iter_on() {
            let (dx, dy) = (p.x - c.x, p.y - c.y);
            for (mx, my) in [(dx, -dy), (-dx, dy), (dy, dx), (-dy, -dx)] {
                assert!(g.get(c.offset(mx, my)), "mirror of {p:?} missing");
            }
        }
    }

    #[test]
    fn outline_touches_cardinal_points_without_spikes() {
        let c = Point::new(30, 30);
        let g = PixelGrid::mask(|plot| circle_outline(c, 10, plot));
        assert!(g.get(Point::new(40, 30)), "east");
        assert!(g.get(Point::new(30, 20)), "north");
        assert!(!g.get(c), "centre stays off");
        let outside = g.iter_on().filter(|p| {
            let (dx, dy) = (p.x - c.x, p.y - c.y);
            dx * dx + dy * dy > 11 * 11
        });
        assert_eq!(outside.count(), 0, "every point lies near the radius");
    }

    #[test]
    fn filled_circle_includes_boundary() {
        let g = PixelGrid::mask(|plot| circle_filled(Point::new(10, 10), 3, plot));
        assert!(g.get(Point::new(13, 10)), "distance exactly r is inside");
        assert!(!g.get(Point::new(13, 11)), "distance sqrt(10) is outside");
        assert_eq!(g.count_on(), 29, "lattice points within radius 3");
    }

    #[test]
    fn non_positive_radius_draws_nothing() {
        assert!(PixelGrid::mask(|plot| circle_outline(Point::new(5, 5), 0, plot)).is_blank(), "outline");
        assert!(PixelGrid::mask(|plot| circle_filled(Point::new(5, 5), -2, plot)).is_blank(), "fill");
    }

    #[test]
    fn drag_radius_rounds_distance() {
        assert_eq!(radius_between(Point::new(0, 0), Point::new(3, 4)), 5, "3-4-5");
        assert_eq!(radius_between(Point::new(0, 0), Point::new(1, 1)), 1, "sqrt 2 rounds down");
        assert_eq!(radius_between(Point::new(2, 2), Point::new(2, 2)), 0, "click without drag");
    }

    /// Adafruit's incremental formulation, unclipped.
    fn walk(c: Point, r: i32) -> PixelGrid {
        let mut g = PixelGrid::new();
        let (mut f, mut dd_x, mut dd_y, mut x, mut y) = (1 - r, 1, -2 * r, 0, r);
        for (px, py) in [(0, r), (0, -r), (r, 0), (-r, 0)] {
            g.set(c.offset(px, py), true);
        }
        while x < y {
            if f >= 0 {
                y -= 1;
                dd_y += 2;
                f += dd_y;
            }
            x += 1;
            dd_x += 2;
            f += dd_x;
            for (px, py) in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                g.set(c.offset(px, py), true);
            }
        }
        g
    }

    #[test]
    fn closed_form_outline_matches_the_incremental_walk() {
        for c in [Point::new(64, 32), Point::new(0, 0), Point::new(-20, 70), Point::new(150, 10)] {
            for r in (1..60).chain([64, 100, 143, 200]) {
                let g = PixelGrid::mask(|plot| circle_outline(c, r, plot));
                assert_eq!(g, walk(c, r), "centre {c:?}, radius {r}");
            }
        }
    }

    #[test]
    fn extreme_circles_stay_bounded() {
        let g = PixelGrid::mask(|plot| circle_filled(Point::new(64, 32), i32::MAX, plot));
        assert_eq!(g, PixelGrid::filled(), "disc covers the screen");
        let g = PixelGrid::mask(|plot| circle_outline(Point::new(64, 32), i32::MAX, plot));
        assert!(g.is_blank(), "ring passes far outside the screen");
        let g = PixelGrid::mask(|plot| circle_filled(Point::new(i32::MIN, i32::MIN), i32::MAX, plot));
        assert!(g.is_blank(), "disc ends short of the screen");
        // A ring centred far to the left whose edge sweeps across column 27.
        let far = 1_000_000_000;
        let g = PixelGrid::mask(|plot| circle_outline(Point::new(-far, 32), far + 27, plot));
        assert!(g.get(Point::new(27, 32)), "rightmost point on the screen");
        assert!(g.iter_on().all(|p| (26..=27).contains(&p.x)), "nearly vertical edge");
    }
}

