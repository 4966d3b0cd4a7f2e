// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hollow and filled circle detection.

use oledkit_gfx::{Color, GfxCall};
use oledkit_raster::{PixelGrid, Point};

use crate::config::RecoverConfig;
use crate::scan::{Coverage, H, RingCache, Scan, W, ring};

fn perimeter_samples(radius: i32, config: &RecoverConfig) -> u32 {
    let per = config.circle_samples_per_radius.saturating_mul(radius.unsigned_abs());
    config.circle_min_samples.max(per)
}

fn perimeter_ok(c: Coverage, config: &RecoverConfig) -> bool {
    c.above(config.circle_coverage) && c.hits >= config.circle_min_hits
}

/// Returns `true` if the circumference of `radius` around `center` is lit.
///
/// Samples `max(24, 6 * radius)` evenly spaced points; samples that fall off
/// the grid are ignored. More than [`RecoverConfig::circle_coverage`] of the
/// remaining samples, and at least [`RecoverConfig::circle_min_hits`] of them,
/// must be on.
///
/// ```
/// use oledkit_raster::{PixelGrid, Point, circle_outline};
/// use oledkit_recover::{RecoverConfig, is_circle};
///
/// let c = Point::new(64, 32);
/// let g = PixelGrid::mask(|plot| circle_outline(c, 10, plot));
/// assert!(is_circle(&g, c, 10, &RecoverConfig::default()));
/// assert!(!is_circle(&g, c, 8, &RecoverConfig::default()));
/// ```
pub fn is_circle(grid: &PixelGrid, center: Point, radius: i32, config: &RecoverConfig) -> bool {
    let samples = perimeter_samples(radius, config);
    let c = Coverage::sample(grid, ring(radius, samples).map(|d| center.offset(d.x, d.y)));
    perimeter_ok(c, config)
}

/// Returns `true` if `radius` around `center` looks like a solid disc.
///
/// The perimeter must pass [`is_circle`], the centre must be on, and
/// concentric rings every `max(1, radius / 5)` pixels must be fully on.
pub fn is_filled_circle(
    grid: &PixelGrid,
    center: Point,
    radius: i32,
    config: &RecoverConfig,
) -> bool {
    is_circle(grid, center, radius, config)
        && interior_filled(grid, &mut RingCache::default(), center, radius, config)
}

fn circle_cached(
    grid: &PixelGrid,
    rings: &mut RingCache,
    center: Point,
    radius: i32,
    config: &RecoverConfig,
) -> bool {
    let samples = perimeter_samples(radius, config);
    let c = Coverage::sample(
        grid,
        rings
            .get(radius, samples)
            .iter()
            .map(|d| center.offset(d.x, d.y)),
    );
    perimeter_ok(c, config)
}

fn interior_filled(
    grid: &PixelGrid,
    rings: &mut RingCache,
    center: Point,
    radius: i32,
    config: &RecoverConfig,
) -> bool {
    if !grid.get(center) {
        return false;
    }
    let step = (radius / config.interior_ring_divisor.max(1)).max(1);
    let mut rr = 1;
    while rr < radius {
        let samples = config
            .interior_min_samples
            .max(config.interior_samples_per_radius.saturating_mul(rr.unsigned_abs()));
        let hole = rings.get(rr, samples).iter().any(|d| {
            let p = center.offset(d.x, d.y);
            p.in_bounds() && !grid.get(p)
        });
        if hole {
            return false;
        }
        rr += step;
    }
    true
}

/// The one-pixel band just outside a disc must be mostly off.
fn shell_ok(grid: &PixelGrid, center: Point, radius: i32, config: &RecoverConfig) -> bool {
    let inner = radius * radius;
    let outer = (radius + 1) * (radius + 1);
    let reach = radius + 1;
    let band = (-reach..=reach).flat_map(|dy| {
        (-reach..=reach).filter_map(move |dx| {
            let d = dx * dx + dy * dy;
            (d > inner && d <= outer).then(|| center.offset(dx, dy))
        })
    });
    Coverage::sample(grid, band).at_most(config.filled_circle_shell)
}

fn centers(margin: i32) -> impl Iterator<Item = Point> {
    (margin..H - margin).flat_map(move |y| (margin..W - margin).map(move |x| Point::new(x, y)))
}

/// Pass 1: circle outlines, smallest accepted radius first.
///
/// Every position is a candidate centre, lit or not. A radius whose interior
/// is also full is left for [`filled_pass`].
pub(crate) fn outline_pass(scan: &mut Scan<'_>) {
    let config = scan.config;
    for center in centers(config.min_circle_radius) {
        for r in config.min_circle_radius..config.max_circle_radius {
            if !circle_cached(&scan.working, &mut scan.rings, center, r, config)
                || interior_filled(&scan.working, &mut scan.rings, center, r, config)
            {
                continue;
            }
            let call = GfxCall::DrawCircle { x: center.x, y: center.y, r, color: Color::On };
            if scan.accept(call) {
                break;
            }
        }
    }
}

/// Pass 2: filled discs, centred on a lit pixel.
///
/// The largest radius up to [`RecoverConfig::max_filled_circle_radius`] that
/// keeps passing [`is_filled_circle`] is refined by one, never past that
/// limit, and checked against the surrounding shell before the disc is
/// claimed.
pub(crate) fn filled_pass(scan: &mut Scan<'_>) {
    let config = scan.config;
    let limit = config.max_filled_circle_radius;
    for center in centers(config.min_circle_radius) {
        if !scan.on(center) {
            continue;
        }
        let mut best = None;
        for r in config.min_circle_radius..=limit {
            if circle_cached(&scan.working, &mut scan.rings, center, r, config)
                && interior_filled(&scan.working, &mut scan.rings, center, r, config)
            {
                best = Some(r);
            } else {
                break;
            }
        }
        let Some(best) = best else {
            continue;
        };
        for r in [best + 1, best] {
            if r <= limit && shell_ok(&scan.working, center, r, config) {
                let call = GfxCall::FillCircle { x: center.x, y: center.y, r, color: Color::On };
                if scan.accept(call) {
                    break;
                }
            }
        }
    }
}
