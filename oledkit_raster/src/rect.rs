// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::Vec2;

use crate::clip::{self, MAX_X, MAX_Y, plot_at};
use crate::grid::Point;

/// Visits the border of the rectangle spanned by two opposite corners.
///
/// Corners are normalized, so any pair works. A one-pixel-wide or tall
/// rectangle still visits its available edges.
pub fn rect_outline(a: Point, b: Point, plot: impl FnMut(Point)) {
    let (left, right) = (a.x.min(b.x), a.x.max(b.x));
    let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));
    box_outline(
        i64::from(left),
        i64::from(top),
        i64::from(right),
        i64::from(bottom),
        plot,
    );
}

/// Border of the box with inclusive, normalized corners.
fn box_outline(left: i64, top: i64, right: i64, bottom: i64, mut plot: impl FnMut(Point)) {
    for x in clip::clamp(left, right, MAX_X) {
        plot_at(&mut plot, x, top);
        if bottom != top {
            plot_at(&mut plot, x, bottom);
        }
    }
    for y in clip::clamp(top + 1, bottom - 1, MAX_Y) {
        plot_at(&mut plot, left, y);
        if right != left {
            plot_at(&mut plot, right, y);
        }
    }
}

/// Visits every on-grid pixel in the `width` by `height` box at `(left, top)`.
pub fn rect_filled(left: i32, top: i32, width: i32, height: i32, mut plot: impl FnMut(Point)) {
    let (left, top) = (i64::from(left), i64::from(top));
    for y in clip::clamp(top, top + i64::from(height) - 1, MAX_Y) {
        for x in clip::clamp(left, left + i64::from(width) - 1, MAX_X) {
            plot_at(&mut plot, x, y);
        }
    }
}

/// Corner radius used for rounded rectangles of the given size.
///
/// Proportional to the smaller side and capped at five pixels.
pub fn corner_radius(width: i32, height: i32) -> i32 {
    (width.min(height).div_euclid(4)).min(5)
}

/// Visits a quarter arc of `radius` around `(cx, cy)`, from `start` radians
/// through `start + pi/2`, in steps of `pi / (6 * radius)`.
///
/// Both coordinates move monotonically along a quarter, so the samples that
/// land on the grid form one run of indices, found by bisection.
fn quarter_arc(cx: i64, cy: i64, radius: i64, start: f64, plot: &mut impl FnMut(Point)) {
    let r = radius as f64;
    let step = PI / (6.0 * r);
    let (fx, fy) = (cx as f64, cy as f64);
    let sample = |i: i64| {
        let v = Vec2::from_angle(start + i as f64 * step) * r;
        (clip::round_i64(fx + v.x), clip::round_i64(fy + v.y))
    };
    let last = 3 * radius;
    let cols = clip::window(last, 0, MAX_X, |i| sample(i).0);
    let rows = clip::window(last, 0, MAX_Y, |i| sample(i).1);
    for i in *cols.start().max(rows.start())..=*cols.end().min(rows.end()) {
        let (x, y) = sample(i);
        plot_at(plot, x, y);
    }
}

/// Visits the outline of a rounded rectangle with an explicit corner radius.
///
/// Radii of one or less degrade to a plain rectangle outline. Non-positive
/// sizes visit nothing.
pub fn rounded_rect_outline(
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    radius: i32,
    mut plot: impl FnMut(Point),
) {
    if width <= 0 || height <= 0 {
        return;
    }
    let (left, top) = (i64::from(left), i64::from(top));
    let right = left + i64::from(width) - 1;
    let bottom = top + i64::from(height) - 1;
    if radius <= 1 {
        box_outline(left, top, right, bottom, plot);
        return;
    }

    let r = i64::from(radius);
    for x in clip::clamp(left + r, right - r, MAX_X) {
        plot_at(&mut plot, x, top);
        plot_at(&mut plot, x, bottom);
    }
    for y in clip::clamp(top + r, bottom - r, MAX_Y) {
        plot_at(&mut plot, left, y);
        plot_at(&mut plot, right, y);
    }

    quarter_arc(left + r, top + r, r, PI, &mut plot);
    quarter_arc(right - r, top + r, r, PI + FRAC_PI_2, &mut plot);
    quarter_arc(right - r, bottom - r, r, 0.0, &mut plot);
    quarter_arc(left + r, bottom - r, r, FRAC_PI_2, &mut plot);
}

/// Visits the pixels of a filled rounded rectangle with an explicit radius.
///
/// Every box pixel is visited except those in an `r` by `r` corner square
/// lying farther than `r` from that corner's arc centre.
pub fn rounded_rect_filled(
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    radius: i32,
    mut plot: impl FnMut(Point),
) {
    if width <= 0 || height <= 0 {
        return;
    }
    if radius <= 1 {
        rect_filled(left, top, width, height, plot);
        return;
    }
    let (left, top) = (i64::from(left), i64::from(top));
    let right = left + i64::from(width) - 1;
    let bottom = top + i64::from(height) - 1;
    let r = i64::from(radius);
    let r2 = i128::from(r) * i128::from(r);
    for y in clip::clamp(top, bottom, MAX_Y) {
        let cy = if y < top + r {
            Some(top + r)
        } else if y > bottom - r {
            Some(bottom - r)
        } else {
            None
        };
        for x in clip::clamp(left, right, MAX_X) {
            let cx = if x < left + r {
                Some(left + r)
            } else if x > right - r {
                Some(right - r)
            } else {
                None
            };
            if let (Some(cx), Some(cy)) = (cx, cy) {
                let (dx, dy) = (i128::from(x - cx), i128::from(y - cy));
                if dx * dx + dy * dy > r2 {
                    continue;
                }
            }
            plot_at(&mut plot, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelGrid;

    #[test]
    fn outline_normalizes_corners() {
        let a = PixelGrid::mask(|plot| rect_outline(Point::new(9, 7), Point::new(2, 3), plot));
        let b = PixelGrid::mask(|plot| rect_outline(Point::new(2, 3), Point::new(9, 7), plot));
        assert_eq!(a, b, "corner order does not matter");
        assert_eq!(a.count_on(), 2 * 8 + 2 * 3, "border only");
        assert!(!a.get(Point::new(5, 5)), "interior untouched");
    }

    #[test]
    fn degenerate_outline_draws_available_edge() {
        let g = PixelGrid::mask(|plot| rect_outline(Point::new(4, 4), Point::new(4, 9), plot));
        assert_eq!(g.count_on(), 6, "one-pixel-wide rect is a column");
    }

    #[test]
    fn filled_rect_ignores_non_positive_sizes() {
        let g = PixelGrid::mask(|plot| rect_filled(0, 0, 0, 5, plot));
        assert!(g.is_blank(), "zero width");
        let g = PixelGrid::mask(|plot| rect_filled(3, 3, 4, -1, plot));
        assert!(g.is_blank(), "negative height");
        let g = PixelGrid::mask(|plot| rect_filled(126, 62, 5, 5, plot));
        assert_eq!(g.count_on(), 4, "clipped at the grid edge");
    }

    #[test]
    fn corner_radius_scales_and_caps() {
        assert_eq!(corner_radius(8, 30), 2, "quarter of the short side");
        assert_eq!(corner_radius(100, 60), 5, "capped at five");
        assert_eq!(corner_radius(7, 7), 1, "small boxes round to one");
    }

    #[test]
    fn small_radius_degrades_to_rectangle() {
        let rounded = PixelGrid::mask(|plot| rounded_rect_outline(2, 2, 6, 6, 1, plot));
        let plain = PixelGrid::mask(|plot| rect_outline(Point::new(2, 2), Point::new(7, 7), plot));
        assert_eq!(rounded, plain, "radius 1 is a plain outline");
    }

    #[test]
    fn rounded_outline_skips_the_corner_pixels() {
        let g = PixelGrid::mask(|plot| rounded_rect_outline(10, 10, 30, 20, 5, plot));
        for corner in [
            Point::new(10, 10),
            Point::new(39, 10),
            Point::new(10, 29),
            Point::new(39, 29),
        ] {
            assert!(!g.get(corner), "corner {corner:?} is rounded off");
        }
        assert!(g.get(Point::new(25, 10)), "top edge");
        assert!(g.get(Point::new(10, 20)), "left edge");
        assert!(!g.get(Point::new(25, 20)), "hollow");
    }

    #[test]
    fn rounded_fill_contains_its_outline_extent() {
        let fill = PixelGrid::mask(|plot| rounded_rect_filled(10, 10, 30, 20, 5, plot));
        assert!(!fill.get(Point::new(10, 10)), "corner cleared");
        assert!(fill.get(Point::new(15, 10)), "top edge starts at left + r");
        assert!(fill.get(Point::new(10, 15)), "left edge starts at top + r");
        assert!(fill.get(Point::new(25, 20)), "interior filled");
        assert!(fill.count_on() < 30 * 20, "corners removed");
    }

    #[test]
    fn huge_boxes_clip_without_overflow() {
        let g = PixelGrid::mask(|plot| rect_filled(i32::MIN, i32::MIN, i32::MAX, i32::MAX, plot));
        assert!(g.is_blank(), "ends just above and left of the grid");
        let g = PixelGrid::mask(|plot| rect_filled(-5, -5, i32::MAX, i32::MAX, plot));
        assert_eq!(g, PixelGrid::filled(), "covers the screen");
        let g = PixelGrid::mask(|plot| rect_filled(i32::MAX - 2, 0, 10, 10, plot));
        assert!(g.is_blank(), "far to the right");
        let g = PixelGrid::mask(|plot| {
            rect_outline(Point::new(i32::MIN, 10), Point::new(i32::MAX, 20), plot);
        });
        assert_eq!(g.count_on(), 2 * 128, "only the two long edges are visible");
    }

    #[test]
    fn huge_rounded_boxes_clip_to_their_visible_edges() {
        let g = PixelGrid::mask(|plot| rounded_rect_outline(-1000, 10, 1_000_000, 1_000_000, 5, plot));
        assert_eq!(g.row_bits(10), u128::MAX, "top edge spans the screen");
        assert_eq!(g.count_on(), 128, "nothing else is visible");
        let g = PixelGrid::mask(|plot| rounded_rect_filled(-10, -10, 1000, 1000, 5, plot));
        assert_eq!(g, PixelGrid::filled(), "corners are off-grid");
        let g = PixelGrid::mask(|plot| {
            rounded_rect_outline(i32::MAX, i32::MAX, i32::MAX, i32::MAX, i32::MAX, plot);
        });
        assert!(g.is_blank(), "entirely off-grid");
    }
}

