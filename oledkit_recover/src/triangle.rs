// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triangle detection from vertex candidates.

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Vec2;
use oledkit_gfx::{Color, GfxCall};
use oledkit_raster::{PixelGrid, Point, line};
use tracing::debug;

use crate::config::RecoverConfig;
use crate::scan::{Coverage, H, Scan, W};

/// Slack allowed between the triangle's area and the sum of the three
/// sub-triangles formed with the sample point.
const AREA_TOLERANCE: f64 = 0.1;

/// Twice the signed area of `abc`.
fn area2(a: Point, b: Point, c: Point) -> i32 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

fn dist(a: Point, b: Point) -> f64 {
    a.to_kurbo().distance(b.to_kurbo())
}

/// Fraction of the Bresenham pixels from `a` to `b` that are on.
///
/// Endpoints count. Off-grid pixels are not sampled.
pub fn line_coverage(grid: &PixelGrid, a: Point, b: Point) -> f64 {
    let mut path = Vec::new();
    line(a, b, |p| path.push(p));
    let c = Coverage::sample(grid, path);
    if c.total == 0 {
        return 0.0;
    }
    f64::from(c.hits) / f64::from(c.total)
}

/// Returns `true` if `p` lies inside or on the edge of the triangle.
///
/// Uses the area test: the three triangles `p` forms with each edge must sum
/// to the whole.
pub fn point_in_triangle(p: Point, vertices: [Point; 3]) -> bool {
    let [a, b, c] = vertices;
    let whole = f64::from(area2(a, b, c).abs()) / 2.0;
    let parts = f64::from(area2(p, b, c).abs() + area2(a, p, c).abs() + area2(a, b, p).abs()) / 2.0;
    (whole - parts).abs() < AREA_TOLERANCE
}

/// Samples just outside each edge must be mostly off.
///
/// Filters out triangles that are really three points on a larger shape.
#[expect(
    clippy::cast_possible_truncation,
    reason = "edge lengths are bounded by the grid diagonal"
)]
fn isolated(grid: &PixelGrid, vertices: [Point; 3], config: &RecoverConfig) -> bool {
    let [a, b, c] = vertices;
    let mut samples = Vec::new();
    for (p, q, opposite) in [(a, b, c), (b, c, a), (c, a, b)] {
        let (p, q, opposite) = (p.to_kurbo(), q.to_kurbo(), opposite.to_kurbo());
        let edge = q - p;
        let len = edge.hypot();
        let mut normal = Vec2::new(-edge.y / len, edge.x / len);
        if (opposite - p.midpoint(q)).dot(normal) > 0.0 {
            normal = -normal;
        }
        let n = (len as u32).max(2);
        for i in 0..=n {
            let t = 0.2 + 0.6 * f64::from(i) / f64::from(n);
            samples.push(Point::from_kurbo(p + edge * t + normal * config.isolation_offset));
        }
    }
    Coverage::sample(grid, samples).at_most(config.isolation_coverage)
}

/// Returns `true` if the three vertices outline a triangle in `grid`.
///
/// The triangle must be large enough (area, side length, and altitude), each
/// edge must be mostly lit, and the pixels just outside the edges must be
/// mostly dark.
///
/// ```
/// use oledkit_raster::{PixelGrid, Point, triangle_outline};
/// use oledkit_recover::{RecoverConfig, is_triangle};
///
/// let v = [Point::new(60, 10), Point::new(40, 40), Point::new(80, 40)];
/// let g = PixelGrid::mask(|plot| triangle_outline(v, plot));
/// assert!(is_triangle(&g, v, &RecoverConfig::default()));
/// ```
pub fn is_triangle(grid: &PixelGrid, vertices: [Point; 3], config: &RecoverConfig) -> bool {
    let [a, b, c] = vertices;
    let twice = f64::from(area2(a, b, c).abs());
    if twice / 2.0 < config.min_triangle_area {
        return false;
    }
    let sides = [dist(a, b), dist(b, c), dist(c, a)];
    if sides.iter().any(|&s| s < config.min_vertex_distance) {
        return false;
    }
    let edges_lit = [(a, b), (b, c), (c, a)]
        .into_iter()
        .all(|(p, q)| line_coverage(grid, p, q) > config.edge_coverage);
    if !edges_lit {
        return false;
    }
    if sides.iter().any(|&s| twice / s < config.min_triangle_altitude) {
        return false;
    }
    isolated(grid, vertices, config)
}

fn interior_coverage(grid: &PixelGrid, vertices: [Point; 3]) -> Coverage {
    let [a, b, c] = vertices;
    let (x0, x1) = (a.x.min(b.x).min(c.x), a.x.max(b.x).max(c.x));
    let (y0, y1) = (a.y.min(b.y).min(c.y), a.y.max(b.y).max(c.y));
    let inside = (y0..=y1)
        .flat_map(|y| (x0..=x1).map(move |x| Point::new(x, y)))
        .filter(|&p| point_in_triangle(p, vertices));
    Coverage::sample(grid, inside)
}

/// Lit pixels that could be triangle corners, in row-major order.
///
/// A pixel qualifies if it has few lit neighbours, or if its neighbourhood
/// looks like a change of direction.
fn candidates(grid: &PixelGrid, config: &RecoverConfig) -> Vec<Point> {
    let mut set = HashSet::new();
    for p in grid.iter_on() {
        let n = grid.neighbors(p).count();
        let sparse = (1..W - 1).contains(&p.x)
            && (1..H - 1).contains(&p.y)
            && n <= config.max_vertex_neighbors;
        let turning = (2..W - 2).contains(&p.x)
            && (2..H - 2).contains(&p.y)
            && (config.corner_directions_min..=config.corner_directions_max).contains(&n);
        if sparse || turning {
            set.insert(p);
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort_unstable_by_key(|p| (p.y, p.x));
    out
}

/// Pass 3: outline and filled triangles.
pub(crate) fn pass(scan: &mut Scan<'_>) {
    let config = scan.config;
    let cands = candidates(&scan.working, config);
    if cands.len() > config.max_triangle_candidates {
        debug!(
            candidates = cands.len(),
            limit = config.max_triangle_candidates,
            "too many triangle candidates, skipping"
        );
        return;
    }
    for (i, &a) in cands.iter().enumerate() {
        for (j, &b) in cands.iter().enumerate().skip(i + 1) {
            for &c in &cands[j + 1..] {
                if !(scan.on(a) && scan.on(b) && scan.on(c)) {
                    continue;
                }
                let v = [a, b, c];
                if !is_triangle(&scan.working, v, config) {
                    continue;
                }
                if interior_coverage(&scan.working, v).above(config.filled_triangle_coverage)
                    && scan.accept(GfxCall::FillTriangle { a, b, c, color: Color::On })
                {
                    continue;
                }
                scan.accept(GfxCall::DrawTriangle { a, b, c, color: Color::On });
            }
        }
    }
}
