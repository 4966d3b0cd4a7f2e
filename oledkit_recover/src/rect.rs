// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle detection: rounded, filled, and outlined boxes.

use alloc::vec::Vec;

use oledkit_gfx::{Color, GfxCall};
use oledkit_raster::{PixelGrid, Point, rounded_rect_filled, rounded_rect_outline};

use crate::scan::{H, Scan, W};

/// How far the rasterizer pulls a rounded box's straight edges in from the
/// bounding box.
///
/// Measured on a sample box so detection always agrees with drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Insets {
    /// First lit column of the top row.
    top: i32,
    /// Unlit columns at the right end of the top row.
    right: i32,
    /// First lit row of the left column.
    left: i32,
    /// Unlit rows at the bottom of the left column.
    bottom: i32,
}

impl Insets {
    fn measure(radius: i32, filled: bool) -> Self {
        let side = (4 * radius).max(7);
        let mask = if filled {
            PixelGrid::mask(|plot| rounded_rect_filled(0, 0, side, side, radius, plot))
        } else {
            PixelGrid::mask(|plot| rounded_rect_outline(0, 0, side, side, radius, plot))
        };
        let top_row: Vec<i32> = (0..side).filter(|&x| mask.get(Point::new(x, 0))).collect();
        let left_col: Vec<i32> = (0..side).filter(|&y| mask.get(Point::new(0, y))).collect();
        Self {
            top: top_row.first().copied().unwrap_or(0),
            right: side - 1 - top_row.last().copied().unwrap_or(side - 1),
            left: left_col.first().copied().unwrap_or(0),
            bottom: side - 1 - left_col.last().copied().unwrap_or(side - 1),
        }
    }
}

fn corners_missing(scan: &Scan<'_>, x: i32, y: i32, w: i32, h: i32) -> usize {
    [
        Point::new(x, y),
        Point::new(x + w - 1, y),
        Point::new(x, y + h - 1),
        Point::new(x + w - 1, y + h - 1),
    ]
    .into_iter()
    .filter(|&p| !scan.on(p))
    .count()
}

fn all_on(scan: &Scan<'_>, x: i32, y: i32, w: i32, h: i32) -> bool {
    (y..y + h).all(|py| (x..x + w).all(|px| scan.on(Point::new(px, py))))
}

fn positions() -> impl Iterator<Item = Point> {
    (0..H).flat_map(|y| (0..W).map(move |x| Point::new(x, y)))
}

/// Pass 4: rounded rectangles, largest radius first, filled before outline.
///
/// A lit pixel is taken as the left end of the top edge. The box is then
/// reconstructed from the top run and the left column, each extended by the
/// rasterizer's insets for the radius under test. The box must fit the grid,
/// otherwise the off-grid corners would always read as rounded.
pub(crate) fn rounded_pass(scan: &mut Scan<'_>) {
    let config = scan.config;
    let shapes: Vec<(i32, bool, Insets)> = (config.min_corner_radius..=config.max_corner_radius)
        .rev()
        .flat_map(|r| [true, false].map(|filled| (r, filled, Insets::measure(r, filled))))
        .collect();

    for p in positions() {
        if !scan.on(p) {
            continue;
        }
        let run = scan.working.run_right(p);
        for &(r, filled, ins) in &shapes {
            let x = p.x - ins.top;
            let side_start = Point::new(x, p.y + ins.left);
            if x < 0 || !scan.on(side_start) {
                continue;
            }
            let bottom_edge = side_start.y + scan.working.run_down(side_start) - 1;
            let w = ins.top + run + ins.right;
            let h = bottom_edge - p.y + 1 + ins.bottom;
            if w < config.min_rounded_rect_size
                || h < config.min_rounded_rect_size
                || r > w.min(h) / 4
                || x + w > W
                || p.y + h > H
                || corners_missing(scan, x, p.y, w, h) < config.min_missing_corners
            {
                continue;
            }
            let call = if filled {
                if !all_on(scan, x + r, p.y + r, w - 2 * r, h - 2 * r) {
                    continue;
                }
                GfxCall::FillRoundRect { x, y: p.y, w, h, r, color: Color::On }
            } else {
                GfxCall::DrawRoundRect { x, y: p.y, w, h, r, color: Color::On }
            };
            if scan.accept(call) {
                break;
            }
        }
    }
}

/// Pass 5: solid boxes grown from their top-left pixel.
pub(crate) fn filled_pass(scan: &mut Scan<'_>) {
    let min = scan.config.min_rect_size;
    for p in positions() {
        if !scan.on(p) {
            continue;
        }
        let w = scan.working.run_right(p);
        let h = scan.working.run_down(p);
        if w >= min && h >= min && all_on(scan, p.x, p.y, w, h) {
            scan.accept(GfxCall::FillRect { x: p.x, y: p.y, w, h, color: Color::On });
        }
    }
}

/// Pass 6: one-pixel box outlines.
///
/// The candidate corner must continue both right and down.
pub(crate) fn outline_pass(scan: &mut Scan<'_>) {
    let min = scan.config.min_rect_size;
    for p in positions() {
        if !(scan.on(p) && scan.on(p.offset(1, 0)) && scan.on(p.offset(0, 1))) {
            continue;
        }
        let w = scan.working.run_right(p);
        let h = scan.working.run_down(p);
        if w >= min && h >= min {
            scan.accept(GfxCall::DrawRect { x: p.x, y: p.y, w, h, color: Color::On });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecoverConfig;
    use oledkit_raster::{corner_radius, rect_filled, rect_outline};

    #[test]
    fn insets_follow_the_rasterizer() {
        assert_eq!(
            Insets::measure(5, true),
            Insets { top: 5, right: 5, left: 5, bottom: 5 },
            "filled radius 5"
        );
        assert_eq!(
            Insets::measure(3, false),
            Insets { top: 1, right: 1, left: 2, bottom: 1 },
            "outline arcs reach past the straight edge"
        );
        assert_eq!(
            Insets::measure(2, false),
            Insets { top: 1, right: 1, left: 1, bottom: 1 },
            "outline radius 2"
        );
    }

    fn run_all(g: &PixelGrid) -> Vec<GfxCall> {
        let config = RecoverConfig::default();
        let mut scan = Scan::new(g, &config);
        rounded_pass(&mut scan);
        filled_pass(&mut scan);
        outline_pass(&mut scan);
        assert!(scan.working.is_blank(), "everything claimed: {:?}", scan.calls);
        scan.calls
    }

    #[test]
    fn rounded_boxes_recover_with_their_radius() {
        for (w, h) in [(30, 20), (12, 9), (8, 8), (40, 30)] {
            let r = corner_radius(w, h);
            let outline = PixelGrid::mask(|plot| rounded_rect_outline(10, 10, w, h, r, plot));
            assert_eq!(
                run_all(&outline),
                [GfxCall::DrawRoundRect { x: 10, y: 10, w, h, r, color: Color::On }],
                "outline {w}x{h}"
            );
            let filled = PixelGrid::mask(|plot| rounded_rect_filled(10, 10, w, h, r, plot));
            assert_eq!(
                run_all(&filled),
                [GfxCall::FillRoundRect { x: 10, y: 10, w, h, r, color: Color::On }],
                "filled {w}x{h}"
            );
        }
    }

    #[test]
    fn square_boxes_are_plain_rects() {
        let solid = PixelGrid::mask(|plot| rect_filled(10, 10, 20, 10, plot));
        assert_eq!(
            run_all(&solid),
            [GfxCall::FillRect { x: 10, y: 10, w: 20, h: 10, color: Color::On }],
            "solid"
        );
        let outline = PixelGrid::mask(|plot| rect_outline(Point::new(10, 10), Point::new(29, 19), plot));
        assert_eq!(
            run_all(&outline),
            [GfxCall::DrawRect { x: 10, y: 10, w: 20, h: 10, color: Color::On }],
            "outline"
        );
    }
}
