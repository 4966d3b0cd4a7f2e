// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;

use crate::grid::{Neighbors, PixelGrid, Point};

/// Replaces the 4-connected region containing `seed` with `value`.
///
/// Returns the number of pixels changed. Nothing happens when the seed is
/// off-grid or already holds `value`.
pub fn flood_fill(grid: &mut PixelGrid, seed: Point, value: bool) -> usize {
    if !seed.in_bounds() || grid.get(seed) == value {
        return 0;
    }
    let target = !value;
    let mut changed = 0;
    let mut queue = VecDeque::new();
    grid.set(seed, value);
    queue.push_back(seed);
    while let Some(p) = queue.pop_front() {
        changed += 1;
        for (dir, dx, dy) in Neighbors::OFFSETS {
            if !Neighbors::ORTHOGONAL.contains(dir) {
                continue;
            }
            let n = p.offset(dx, dy);
            if n.in_bounds() && grid.get(n) == target {
                grid.set(n, value);
                queue.push_back(n);
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_enclosed_region_only() {
        let mut g = PixelGrid::from_ascii(
            "
            #####
            #...#
            #...#
            #####
            ",
        )
        .unwrap();
        let n = flood_fill(&mut g, Point::new(2, 2), true);
        assert_eq!(n, 6, "interior of the box");
        assert_eq!(g.count_on(), 20, "box is now solid");
        assert!(!g.get(Point::new(6, 0)), "outside untouched");
    }

    #[test]
    fn does_not_leak_through_diagonals() {
        let mut g = PixelGrid::from_ascii(
            "
            .#
            #.
            ",
        )
        .unwrap();
        flood_fill(&mut g, Point::new(0, 0), true);
        assert!(g.get(Point::new(0, 0)), "seed filled");
        assert!(!g.get(Point::new(1, 1)), "diagonal gap is a wall");
    }

    #[test]
    fn same_value_and_off_grid_are_no_ops() {
        let mut g = PixelGrid::new();
        assert_eq!(flood_fill(&mut g, Point::new(3, 3), false), 0, "already off");
        assert_eq!(flood_fill(&mut g, Point::new(-1, 3), true), 0, "off grid");
        assert!(g.is_blank(), "nothing changed");
    }

    #[test]
    fn erasing_fill_clears_a_region() {
        let mut g = PixelGrid::filled();
        assert_eq!(flood_fill(&mut g, Point::new(0, 0), false), 128 * 64, "whole screen");
        assert!(g.is_blank(), "cleared");
    }
}
