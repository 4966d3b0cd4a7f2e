// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by the detectors.
///
/// The defaults are tuned for shapes drawn with the editor's rasterizers.
/// Ratios are compared strictly (`hits / total > ratio`) unless noted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecoverConfig {
    /// Smallest circle radius tried, and the margin kept from the grid edge
    /// when scanning for centres.
    pub min_circle_radius: i32,
    /// Hollow-circle radii are tried below this bound.
    pub max_circle_radius: i32,
    /// Largest filled-circle radius tried, inclusive.
    pub max_filled_circle_radius: i32,
    /// Minimum number of circumference samples.
    pub circle_min_samples: u32,
    /// Circumference samples per pixel of radius.
    pub circle_samples_per_radius: u32,
    /// Fraction of in-bounds circumference samples that must be lit.
    pub circle_coverage: f64,
    /// Absolute number of lit circumference samples required.
    pub circle_min_hits: u32,
    /// Interior rings are spaced `max(1, r / interior_ring_divisor)` apart.
    pub interior_ring_divisor: i32,
    /// Minimum number of samples on an interior ring.
    pub interior_min_samples: u32,
    /// Interior ring samples per pixel of ring radius.
    pub interior_samples_per_radius: u32,
    /// Largest lit fraction allowed in the one-pixel shell around a disc
    /// (inclusive).
    pub filled_circle_shell: f64,

    /// Largest 8-neighbour count for a triangle vertex candidate.
    pub max_vertex_neighbors: u32,
    /// Smallest neighbour count for the corner-signature candidate rule.
    pub corner_directions_min: u32,
    /// Largest neighbour count for the corner-signature candidate rule.
    pub corner_directions_max: u32,
    /// The triangle pass is skipped when more candidates than this are found.
    pub max_triangle_candidates: usize,
    /// Smallest triangle area (inclusive).
    pub min_triangle_area: f64,
    /// Smallest distance between two vertices (inclusive).
    pub min_vertex_distance: f64,
    /// Smallest altitude onto any edge (inclusive).
    pub min_triangle_altitude: f64,
    /// Fraction of each edge's Bresenham pixels that must be lit.
    pub edge_coverage: f64,
    /// Outward distance of the samples that check an edge stands alone.
    pub isolation_offset: f64,
    /// Largest lit fraction allowed among those samples (inclusive).
    pub isolation_coverage: f64,
    /// Fraction of interior lattice points that must be lit for a filled
    /// triangle.
    pub filled_triangle_coverage: f64,

    /// Smallest width and height of a rounded rectangle.
    pub min_rounded_rect_size: i32,
    /// Corner radii tried, largest first, down to [`RecoverConfig::min_corner_radius`].
    pub max_corner_radius: i32,
    /// Smallest corner radius tried.
    pub min_corner_radius: i32,
    /// Box corners that must be unlit for a rounded rectangle.
    pub min_missing_corners: usize,

    /// Smallest width and height of a plain rectangle.
    pub min_rect_size: i32,
    /// Shortest axis-aligned run emitted as a line.
    pub min_run: i32,
}

impl Default for RecoverConfig {
    fn default() -> Self {
        Self {
            min_circle_radius: 3,
            max_circle_radius: 32,
            max_filled_circle_radius: 21,
            circle_min_samples: 24,
            circle_samples_per_radius: 6,
            circle_coverage: 0.75,
            circle_min_hits: 12,
            interior_ring_divisor: 5,
            interior_min_samples: 8,
            interior_samples_per_radius: 4,
            filled_circle_shell: 0.1,

            max_vertex_neighbors: 4,
            corner_directions_min: 2,
            corner_directions_max: 3,
            max_triangle_candidates: 256,
            min_triangle_area: 9.0,
            min_vertex_distance: 5.0,
            min_triangle_altitude: 3.0,
            edge_coverage: 0.7,
            isolation_offset: 2.0,
            isolation_coverage: 0.3,
            filled_triangle_coverage: 0.8,

            min_rounded_rect_size: 7,
            max_corner_radius: 5,
            min_corner_radius: 2,
            min_missing_corners: 3,

            min_rect_size: 3,
            min_run: 2,
        }
    }
}
