// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use oledkit_gfx::GfxCall;
use oledkit_raster::PixelGrid;
use tracing::debug;

use crate::config::RecoverConfig;
use crate::report::{PassReport, RecoveryReport};
use crate::runs::RunStyle;
use crate::scan::Scan;
use crate::{circle, rect, runs, triangle};

/// One detect-and-erase step of recovery.
///
/// Each pass scans the working copy top-to-bottom, left-to-right, and only
/// sees pixels earlier passes left unexplained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pass {
    /// `drawCircle`.
    CircleOutlines,
    /// `fillCircle`.
    FilledCircles,
    /// `drawTriangle` and `fillTriangle`.
    Triangles,
    /// `drawRoundRect` and `fillRoundRect`.
    RoundedRects,
    /// `fillRect`.
    FilledRects,
    /// `drawRect`.
    RectOutlines,
    /// `drawFastHLine` then `drawFastVLine`.
    FastLines,
    /// Axis-aligned `drawLine` runs.
    Lines,
    /// `drawPixel` for whatever is left.
    Pixels,
}

impl Pass {
    /// Most specific shapes first, single pixels last.
    pub const DEFAULT_ORDER: [Self; 9] = [
        Self::CircleOutlines,
        Self::FilledCircles,
        Self::Triangles,
        Self::RoundedRects,
        Self::FilledRects,
        Self::RectOutlines,
        Self::FastLines,
        Self::Lines,
        Self::Pixels,
    ];

    /// A short stable name, used in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CircleOutlines => "circle-outlines",
            Self::FilledCircles => "filled-circles",
            Self::Triangles => "triangles",
            Self::RoundedRects => "rounded-rects",
            Self::FilledRects => "filled-rects",
            Self::RectOutlines => "rect-outlines",
            Self::FastLines => "fast-lines",
            Self::Lines => "lines",
            Self::Pixels => "pixels",
        }
    }

    fn run(self, scan: &mut Scan<'_>) {
        match self {
            Self::CircleOutlines => circle::outline_pass(scan),
            Self::FilledCircles => circle::filled_pass(scan),
            Self::Triangles => triangle::pass(scan),
            Self::RoundedRects => rect::rounded_pass(scan),
            Self::FilledRects => rect::filled_pass(scan),
            Self::RectOutlines => rect::outline_pass(scan),
            Self::FastLines => runs::pass(scan, RunStyle::Fast),
            Self::Lines => runs::pass(scan, RunStyle::Line),
            Self::Pixels => runs::pixel_pass(scan),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered list of passes and the thresholds they share.
///
/// Recovery is lossless as long as the list ends with [`Pass::Pixels`]:
/// every call is only accepted if all of its pixels are still unexplained,
/// and the pixel pass mops up the rest.
///
/// ```
/// use oledkit_raster::{PixelGrid, Point};
/// use oledkit_recover::{Pass, Pipeline};
///
/// let mut grid = PixelGrid::new();
/// grid.set(Point::new(1, 1), true);
/// grid.set(Point::new(2, 1), true);
///
/// let only_pixels = Pipeline::default().with_passes([Pass::Pixels]);
/// assert_eq!(only_pixels.run(&grid).len(), 2);
/// assert_eq!(Pipeline::default().run(&grid).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Pipeline {
    passes: Vec<Pass>,
    config: RecoverConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RecoverConfig::default())
    }
}

impl Pipeline {
    /// The default pass order with custom thresholds.
    pub fn new(config: RecoverConfig) -> Self {
        Self {
            passes: Pass::DEFAULT_ORDER.to_vec(),
            config,
        }
    }

    /// Replaces the pass list.
    #[must_use]
    pub fn with_passes(mut self, passes: impl IntoIterator<Item = Pass>) -> Self {
        self.passes = passes.into_iter().collect();
        self
    }

    /// Passes in run order.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// The shared thresholds.
    pub fn config(&self) -> &RecoverConfig {
        &self.config
    }

    /// Recovers drawing calls from `grid`.
    pub fn run(&self, grid: &PixelGrid) -> Vec<GfxCall> {
        self.run_with_report(grid).0
    }

    /// Recovers drawing calls and reports what each pass claimed.
    pub fn run_with_report(&self, grid: &PixelGrid) -> (Vec<GfxCall>, RecoveryReport) {
        let mut scan = Scan::new(grid, &self.config);
        let mut report = RecoveryReport::default();
        for &pass in &self.passes {
            let calls_before = scan.calls.len();
            let lit_before = scan.working.count_on();
            pass.run(&mut scan);
            let entry = PassReport {
                pass,
                calls: scan.calls.len() - calls_before,
                pixels: lit_before - scan.working.count_on(),
            };
            debug!(
                pass = pass.name(),
                calls = entry.calls,
                pixels = entry.pixels,
                "pass finished"
            );
            report.passes.push(entry);
        }
        report.unexplained = scan.working.count_on();
        if report.unexplained > 0 {
            debug!(unexplained = report.unexplained, "pixels left after the last pass");
        }
        (scan.calls, report)
    }
}
