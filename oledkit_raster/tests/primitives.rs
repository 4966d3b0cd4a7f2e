// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `oledkit_raster` crate.
//!
//! These check the rasterizers through the public visitor API the way the
//! drawing layers use them: painting into a grid, clipping at the borders,
//! and packing the result for the display controller.

use oledkit_raster::{
    FRAME_BYTES, PixelGrid, Point, circle_filled, circle_outline, corner_radius, line,
    rect_filled, rect_outline, rounded_rect_filled, rounded_rect_outline, triangle_filled,
    triangle_outline, triangle_vertices,
};

#[test]
fn primitives_clip_at_every_border() {
    let mut g = PixelGrid::new();
    g.paint(true, |plot| line(Point::new(-20, -20), Point::new(200, 100), plot));
    g.paint(true, |plot| circle_outline(Point::new(0, 0), 12, plot));
    g.paint(true, |plot| rect_filled(120, 60, 50, 50, plot));
    g.paint(true, |plot| {
        triangle_filled([Point::new(64, -30), Point::new(-10, 90), Point::new(140, 90)], plot);
    });
    assert!(g.get(Point::new(127, 63)), "clipped fill reaches the corner");
    assert!(g.count_on() > 0, "visible parts drawn");
}

#[test]
fn circle_outline_stays_within_a_pixel_of_the_radius() {
    let c = Point::new(64, 32);
    for r in 3..20 {
        let outline = PixelGrid::mask(|plot| circle_outline(c, r, plot));
        for p in outline.iter_on() {
            let d2 = (p.x - c.x).pow(2) + (p.y - c.y).pow(2);
            assert!(
                (r - 1).pow(2) < d2 && d2 <= (r + 1).pow(2),
                "radius {r}: {p:?} strays from the circle"
            );
        }
        let fill = PixelGrid::mask(|plot| circle_filled(c, r, plot));
        assert!(fill.get(c), "radius {r}: disc contains its centre");
    }
}

#[test]
fn rounded_rect_edges_meet_their_arcs() {
    let (w, h) = (30, 20);
    let r = corner_radius(w, h);
    let g = PixelGrid::mask(|plot| rounded_rect_outline(10, 10, w, h, r, plot));
    // Walk the outline as an 8-connected loop: every pixel has at least two
    // neighbours.
    for p in g.iter_on() {
        assert!(g.neighbors(p).count() >= 2, "{p:?} dangles");
    }
    let fill = PixelGrid::mask(|plot| rounded_rect_filled(10, 10, w, h, r, plot));
    for y in [10, 29] {
        let (o, f) = (g.row_bits(y), fill.row_bits(y));
        assert_eq!(o & f, f, "row {y}: straight edge of the fill is on the outline");
    }
    assert_eq!(fill.row_bits(9) | fill.row_bits(30), 0, "fill keeps to the box");
}

#[test]
fn rect_outline_and_fill_share_a_border() {
    let outline = PixelGrid::mask(|plot| rect_outline(Point::new(3, 3), Point::new(12, 9), plot));
    let mut fill = PixelGrid::mask(|plot| rect_filled(3, 3, 10, 7, plot));
    assert!(fill.covers(&outline), "border contained in box");
    fill.erase(&outline);
    assert_eq!(fill.count_on(), 8 * 5, "interior is what remains");
}

#[test]
fn triangle_outline_encloses_its_fill() {
    let v = triangle_vertices(Point::new(60, 10), 40, 30).unwrap();
    let outline = PixelGrid::mask(|plot| triangle_outline(v, plot));
    let fill = PixelGrid::mask(|plot| triangle_filled(v, plot));
    let mut union = fill.clone();
    union.union_with(&outline);
    assert!(union.count_on() >= fill.count_on(), "union grows");
    assert!(fill.get(Point::new(60, 30)), "centroid region filled");
    assert!(!outline.get(Point::new(60, 30)), "outline hollow");
}

#[test]
fn drawn_frame_packs_to_frame_bytes() {
    let mut g = PixelGrid::new();
    g.paint(true, |plot| rect_filled(0, 0, 128, 8, plot));
    let pages = g.to_pages();
    assert_eq!(pages.len(), FRAME_BYTES, "fixed frame size");
    assert!(pages[..128].iter().all(|&b| b == 0xff), "first page solid");
    assert!(pages[128..].iter().all(|&b| b == 0), "rest blank");
}
