// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned runs and the single-pixel fallback.

use oledkit_gfx::{Color, GfxCall};
use oledkit_raster::Point;

use crate::scan::{H, Scan, W};

/// Which call a run becomes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RunStyle {
    /// `drawFastHLine` / `drawFastVLine`.
    Fast,
    /// `drawLine`.
    Line,
}

fn horizontal(style: RunStyle, start: Point, len: i32) -> GfxCall {
    match style {
        RunStyle::Fast => GfxCall::DrawFastHLine { x: start.x, y: start.y, w: len, color: Color::On },
        RunStyle::Line => GfxCall::DrawLine {
            x0: start.x,
            y0: start.y,
            x1: start.x + len - 1,
            y1: start.y,
            color: Color::On,
        },
    }
}

fn vertical(style: RunStyle, start: Point, len: i32) -> GfxCall {
    match style {
        RunStyle::Fast => GfxCall::DrawFastVLine { x: start.x, y: start.y, h: len, color: Color::On },
        RunStyle::Line => GfxCall::DrawLine {
            x0: start.x,
            y0: start.y,
            x1: start.x,
            y1: start.y + len - 1,
            color: Color::On,
        },
    }
}

/// Claims every horizontal run, then every vertical run, of at least
/// `min_run` pixels.
pub(crate) fn pass(scan: &mut Scan<'_>, style: RunStyle) {
    let min = scan.config.min_run;
    for y in 0..H {
        let mut x = 0;
        while x < W {
            let start = Point::new(x, y);
            let len = scan.working.run_right(start);
            if len >= min {
                scan.accept(horizontal(style, start, len));
            }
            x += len.max(1);
        }
    }
    for x in 0..W {
        let mut y = 0;
        while y < H {
            let start = Point::new(x, y);
            let len = scan.working.run_down(start);
            if len >= min {
                scan.accept(vertical(style, start, len));
            }
            y += len.max(1);
        }
    }
}

/// Claims each remaining lit pixel on its own.
pub(crate) fn pixel_pass(scan: &mut Scan<'_>) {
    let left: alloc::vec::Vec<Point> = scan.working.iter_on().collect();
    for p in left {
        scan.accept(GfxCall::DrawPixel { x: p.x, y: p.y, color: Color::On });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecoverConfig;
    use oledkit_raster::{PixelGrid, line};

    #[test]
    fn runs_become_fast_lines_and_strays_become_pixels() {
        let mut g = PixelGrid::mask(|plot| line(Point::new(2, 3), Point::new(9, 3), plot));
        g.paint(true, |plot| line(Point::new(20, 10), Point::new(20, 14), plot));
        g.set(Point::new(40, 40), true);
        let config = RecoverConfig::default();
        let mut scan = Scan::new(&g, &config);
        pass(&mut scan, RunStyle::Fast);
        pixel_pass(&mut scan);
        assert_eq!(
            scan.calls,
            [
                GfxCall::DrawFastHLine { x: 2, y: 3, w: 8, color: Color::On },
                GfxCall::DrawFastVLine { x: 20, y: 10, h: 5, color: Color::On },
                GfxCall::DrawPixel { x: 40, y: 40, color: Color::On },
            ],
            "runs then pixels"
        );
        assert!(scan.working.is_blank(), "all claimed");
    }

    #[test]
    fn line_style_spans_the_run() {
        let g = PixelGrid::mask(|plot| line(Point::new(5, 0), Point::new(5, 6), plot));
        let config = RecoverConfig::default();
        let mut scan = Scan::new(&g, &config);
        pass(&mut scan, RunStyle::Line);
        assert_eq!(
            scan.calls,
            [GfxCall::DrawLine { x0: 5, y0: 0, x1: 5, y1: 6, color: Color::On }],
            "vertical drawLine"
        );
    }
}
