// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The working copy shared by every pass.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Vec2;
use oledkit_gfx::GfxCall;
use oledkit_raster::{HEIGHT, PixelGrid, Point, WIDTH};
use tracing::trace;

use crate::config::RecoverConfig;

#[expect(clippy::cast_possible_truncation, reason = "WIDTH and HEIGHT are small")]
pub(crate) const W: i32 = WIDTH as i32;
#[expect(clippy::cast_possible_truncation, reason = "WIDTH and HEIGHT are small")]
pub(crate) const H: i32 = HEIGHT as i32;

/// Lit and sampled counts for a set of sample points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Coverage {
    pub(crate) hits: u32,
    pub(crate) total: u32,
}

impl Coverage {
    /// Samples `points`, counting only the ones on the grid.
    pub(crate) fn sample(grid: &PixelGrid, points: impl IntoIterator<Item = Point>) -> Self {
        let mut out = Self::default();
        for p in points {
            if p.in_bounds() {
                out.total += 1;
                out.hits += u32::from(grid.get(p));
            }
        }
        out
    }

    /// `hits / total > ratio`, false when nothing was sampled.
    pub(crate) fn above(self, ratio: f64) -> bool {
        self.total > 0 && f64::from(self.hits) > ratio * f64::from(self.total)
    }

    /// `hits / total <= ratio`, true when nothing was sampled.
    pub(crate) fn at_most(self, ratio: f64) -> bool {
        f64::from(self.hits) <= ratio * f64::from(self.total)
    }
}

/// Offsets of `samples` evenly spaced points on a circle of `radius`.
pub(crate) fn ring(radius: i32, samples: u32) -> impl Iterator<Item = Point> {
    let r = f64::from(radius);
    let n = f64::from(samples);
    (0..samples).map(move |i| {
        let theta = f64::from(i) / n * core::f64::consts::TAU;
        Point::from_kurbo(kurbo::Point::ORIGIN + Vec2::from_angle(theta) * r)
    })
}

/// Memoized [`ring`] offsets, keyed by radius and sample count.
#[derive(Debug, Default)]
pub(crate) struct RingCache {
    rings: HashMap<(i32, u32), Vec<Point>>,
}

impl RingCache {
    pub(crate) fn get(&mut self, radius: i32, samples: u32) -> &[Point] {
        self.rings
            .entry((radius, samples))
            .or_insert_with(|| ring(radius, samples).collect())
    }
}

/// The working copy, the calls claimed so far, and detector state.
#[derive(Debug)]
pub(crate) struct Scan<'a> {
    pub(crate) working: PixelGrid,
    pub(crate) config: &'a RecoverConfig,
    pub(crate) rings: RingCache,
    pub(crate) calls: Vec<GfxCall>,
}

impl<'a> Scan<'a> {
    pub(crate) fn new(grid: &PixelGrid, config: &'a RecoverConfig) -> Self {
        Self {
            working: grid.clone(),
            config,
            rings: RingCache::default(),
            calls: Vec::new(),
        }
    }

    /// Claims `call` if every pixel it paints is still unexplained.
    ///
    /// On success the call's pixels are erased from the working copy.
    pub(crate) fn accept(&mut self, call: GfxCall) -> bool {
        let mask = call.mask();
        if mask.is_blank() || !self.working.covers(&mask) {
            return false;
        }
        self.working.erase(&mask);
        trace!(?call, pixels = mask.count_on(), "claimed");
        self.calls.push(call);
        true
    }

    #[inline]
    pub(crate) fn on(&self, p: Point) -> bool {
        self.working.get(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oledkit_gfx::Color;

    #[test]
    fn accept_erases_only_fully_covered_shapes() {
        let mut grid = PixelGrid::new();
        grid.paint(true, |plot| oledkit_raster::rect_filled(0, 0, 4, 1, plot));
        let config = RecoverConfig::default();
        let mut scan = Scan::new(&grid, &config);
        let too_long = GfxCall::DrawFastHLine { x: 0, y: 0, w: 5, color: Color::On };
        assert!(!scan.accept(too_long), "one pixel is off");
        let exact = GfxCall::DrawFastHLine { x: 0, y: 0, w: 4, color: Color::On };
        assert!(scan.accept(exact), "fully lit run");
        assert!(scan.working.is_blank(), "run erased");
        assert!(!scan.accept(GfxCall::DrawPixel { x: -1, y: 0, color: Color::On }), "off-grid call is empty");
    }

    #[test]
    fn ring_samples_round_to_the_nearest_pixel() {
        let quarter: Vec<_> = ring(10, 4).collect();
        assert_eq!(
            quarter,
            [Point::new(10, 0), Point::new(0, 10), Point::new(-10, 0), Point::new(0, -10)],
            "axis points"
        );
        let mut cache = RingCache::default();
        assert_eq!(cache.get(3, 24).len(), 24, "cached sample count");
    }

    #[test]
    fn coverage_counts_in_bounds_samples_only() {
        let mut grid = PixelGrid::new();
        grid.set(Point::new(0, 0), true);
        let c = Coverage::sample(&grid, [Point::new(0, 0), Point::new(1, 0), Point::new(-1, 0)]);
        assert_eq!(c, Coverage { hits: 1, total: 2 }, "off-grid sample dropped");
        assert!(!c.above(0.5), "strict ratio");
        assert!(c.at_most(0.5), "inclusive ratio");
        assert!(!Coverage::default().above(0.0), "nothing sampled");
    }
}
