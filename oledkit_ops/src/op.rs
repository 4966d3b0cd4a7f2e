// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use oledkit_gfx::{Color, GfxCall};
use oledkit_raster::{
    PixelGrid, Point, circle_filled, circle_outline, corner_radius, flood_fill, line, rect_filled,
    rect_outline, rounded_rect_filled, rounded_rect_outline, triangle_filled, triangle_outline,
    triangle_vertices,
};

/// Fieldless tag for each [`DrawingOperation`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationKind {
    /// [`DrawingOperation::Pixel`].
    Pixel,
    /// [`DrawingOperation::Line`].
    Line,
    /// [`DrawingOperation::FreehandSegment`].
    FreehandSegment,
    /// [`DrawingOperation::FreehandComplete`].
    FreehandComplete,
    /// [`DrawingOperation::Rectangle`].
    Rectangle,
    /// [`DrawingOperation::FilledRectangle`].
    FilledRectangle,
    /// [`DrawingOperation::RoundedRectangle`].
    RoundedRectangle,
    /// [`DrawingOperation::FilledRoundedRectangle`].
    FilledRoundedRectangle,
    /// [`DrawingOperation::Circle`].
    Circle,
    /// [`DrawingOperation::FilledCircle`].
    FilledCircle,
    /// [`DrawingOperation::Triangle`].
    Triangle,
    /// [`DrawingOperation::FilledTriangle`].
    FilledTriangle,
    /// [`DrawingOperation::FillAll`].
    FillAll,
    /// [`DrawingOperation::FloodFill`].
    FloodFill,
    /// [`DrawingOperation::ImportImage`].
    ImportImage,
}

impl OperationKind {
    /// The log tag, e.g. `FILLED_ROUNDED_RECTANGLE`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pixel => "PIXEL",
            Self::Line => "LINE",
            Self::FreehandSegment => "FREEHAND_SEGMENT",
            Self::FreehandComplete => "FREEHAND_COMPLETE",
            Self::Rectangle => "RECTANGLE",
            Self::FilledRectangle => "FILLED_RECTANGLE",
            Self::RoundedRectangle => "ROUNDED_RECTANGLE",
            Self::FilledRoundedRectangle => "FILLED_ROUNDED_RECTANGLE",
            Self::Circle => "CIRCLE",
            Self::FilledCircle => "FILLED_CIRCLE",
            Self::Triangle => "TRIANGLE",
            Self::FilledTriangle => "FILLED_TRIANGLE",
            Self::FillAll => "FILL_ALL",
            Self::FloodFill => "FLOOD_FILL",
            Self::ImportImage => "IMPORT_IMAGE",
        }
    }

    /// Returns `true` if replay has a call for this kind.
    ///
    /// `FreehandComplete` is replayable: it is a gesture marker with no
    /// pixels, so skipping it loses nothing.
    pub const fn is_replayable(self) -> bool {
        !matches!(self, Self::FloodFill | Self::ImportImage)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One completed editor action.
///
/// Every variant that writes pixels carries the `value` it wrote.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawingOperation {
    /// A single pixel set or toggled.
    Pixel {
        /// The pixel.
        at: Point,
        /// Its new value.
        value: bool,
    },
    /// A straight line drag.
    Line {
        /// Drag start.
        from: Point,
        /// Drag end.
        to: Point,
        /// Value written.
        value: bool,
    },
    /// One segment of a freehand stroke.
    FreehandSegment {
        /// Previous pointer position.
        from: Point,
        /// Current pointer position.
        to: Point,
        /// Value written.
        value: bool,
    },
    /// End-of-stroke marker; writes nothing.
    FreehandComplete {
        /// Where the stroke began.
        start: Point,
        /// Where it ended.
        end: Point,
        /// Value the stroke wrote.
        value: bool,
    },
    /// Rectangle border.
    Rectangle {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Solid rectangle.
    FilledRectangle {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Rounded rectangle border; the radius follows [`corner_radius`].
    RoundedRectangle {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Solid rounded rectangle; the radius follows [`corner_radius`].
    FilledRoundedRectangle {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Circle outline.
    Circle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: i32,
        /// Value written.
        value: bool,
    },
    /// Solid disc.
    FilledCircle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: i32,
        /// Value written.
        value: bool,
    },
    /// Isosceles triangle outline hanging from its apex.
    Triangle {
        /// Apex.
        top: Point,
        /// Base width.
        width: i32,
        /// Apex-to-base height.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Solid isosceles triangle hanging from its apex.
    FilledTriangle {
        /// Apex.
        top: Point,
        /// Base width.
        width: i32,
        /// Apex-to-base height.
        height: i32,
        /// Value written.
        value: bool,
    },
    /// Every pixel set to `value`.
    FillAll {
        /// Value written.
        value: bool,
    },
    /// Bucket fill of the 4-connected region around `seed`.
    FloodFill {
        /// Clicked pixel.
        seed: Point,
        /// Value the region held.
        target: bool,
        /// Value it was replaced with.
        replacement: bool,
    },
    /// The whole grid replaced by an imported image.
    ImportImage(Box<PixelGrid>),
}

impl DrawingOperation {
    /// The variant tag.
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Pixel { .. } => OperationKind::Pixel,
            Self::Line { .. } => OperationKind::Line,
            Self::FreehandSegment { .. } => OperationKind::FreehandSegment,
            Self::FreehandComplete { .. } => OperationKind::FreehandComplete,
            Self::Rectangle { .. } => OperationKind::Rectangle,
            Self::FilledRectangle { .. } => OperationKind::FilledRectangle,
            Self::RoundedRectangle { .. } => OperationKind::RoundedRectangle,
            Self::FilledRoundedRectangle { .. } => OperationKind::FilledRoundedRectangle,
            Self::Circle { .. } => OperationKind::Circle,
            Self::FilledCircle { .. } => OperationKind::FilledCircle,
            Self::Triangle { .. } => OperationKind::Triangle,
            Self::FilledTriangle { .. } => OperationKind::FilledTriangle,
            Self::FillAll { .. } => OperationKind::FillAll,
            Self::FloodFill { .. } => OperationKind::FloodFill,
            Self::ImportImage(_) => OperationKind::ImportImage,
        }
    }

    /// Reproduces the operation's effect on `grid`.
    pub fn apply(&self, grid: &mut PixelGrid) {
        match *self {
            Self::Pixel { at, value } => grid.set(at, value),
            Self::Line { from, to, value } | Self::FreehandSegment { from, to, value } => {
                grid.paint(value, |plot| line(from, to, plot));
            }
            Self::FreehandComplete { .. } => {}
            Self::Rectangle { x, y, width, height, value } => {
                if width > 0 && height > 0 {
                    let far = Point::new(x.saturating_add(width - 1), y.saturating_add(height - 1));
                    grid.paint(value, |plot| rect_outline(Point::new(x, y), far, plot));
                }
            }
            Self::FilledRectangle { x, y, width, height, value } => {
                grid.paint(value, |plot| rect_filled(x, y, width, height, plot));
            }
            Self::RoundedRectangle { x, y, width, height, value } => {
                let r = corner_radius(width, height);
                grid.paint(value, |plot| rounded_rect_outline(x, y, width, height, r, plot));
            }
            Self::FilledRoundedRectangle { x, y, width, height, value } => {
                let r = corner_radius(width, height);
                grid.paint(value, |plot| rounded_rect_filled(x, y, width, height, r, plot));
            }
            Self::Circle { center, radius, value } => {
                grid.paint(value, |plot| circle_outline(center, radius, plot));
            }
            Self::FilledCircle { center, radius, value } => {
                grid.paint(value, |plot| circle_filled(center, radius, plot));
            }
            Self::Triangle { top, width, height, value } => {
                if let Some(v) = triangle_vertices(top, width, height) {
                    grid.paint(value, |plot| triangle_outline(v, plot));
                }
            }
            Self::FilledTriangle { top, width, height, value } => {
                if let Some(v) = triangle_vertices(top, width, height) {
                    grid.paint(value, |plot| triangle_filled(v, plot));
                }
            }
            Self::FillAll { value } => grid.fill(value),
            Self::FloodFill { seed, target, replacement } => {
                if grid.get(seed) == target {
                    flood_fill(grid, seed, replacement);
                }
            }
            Self::ImportImage(ref image) => grid.clone_from(image),
        }
    }

    /// The drawing call that replays this operation.
    ///
    /// `None` for operations with no call equivalent (flood fills, image
    /// imports) and for ones that draw nothing (stroke markers, triangles of
    /// non-positive height). Off-valued operations replay in the off colour.
    pub fn to_call(&self) -> Option<GfxCall> {
        let color = |value: bool| Color::from_bool(value);
        Some(match *self {
            Self::Pixel { at, value } => GfxCall::DrawPixel {
                x: at.x,
                y: at.y,
                color: color(value),
            },
            Self::Line { from, to, value } | Self::FreehandSegment { from, to, value } => {
                GfxCall::DrawLine {
                    x0: from.x,
                    y0: from.y,
                    x1: to.x,
                    y1: to.y,
                    color: color(value),
                }
            }
            Self::Rectangle { x, y, width, height, value } => GfxCall::DrawRect {
                x,
                y,
                w: width,
                h: height,
                color: color(value),
            },
            Self::FilledRectangle { x, y, width, height, value } => GfxCall::FillRect {
                x,
                y,
                w: width,
                h: height,
                color: color(value),
            },
            Self::RoundedRectangle { x, y, width, height, value } => GfxCall::DrawRoundRect {
                x,
                y,
                w: width,
                h: height,
                r: corner_radius(width, height),
                color: color(value),
            },
            Self::FilledRoundedRectangle { x, y, width, height, value } => GfxCall::FillRoundRect {
                x,
                y,
                w: width,
                h: height,
                r: corner_radius(width, height),
                color: color(value),
            },
            Self::Circle { center, radius, value } => GfxCall::DrawCircle {
                x: center.x,
                y: center.y,
                r: radius,
                color: color(value),
            },
            Self::FilledCircle { center, radius, value } => GfxCall::FillCircle {
                x: center.x,
                y: center.y,
                r: radius,
                color: color(value),
            },
            Self::Triangle { top, width, height, value } => {
                let [a, b, c] = triangle_vertices(top, width, height)?;
                GfxCall::DrawTriangle { a, b, c, color: color(value) }
            }
            Self::FilledTriangle { top, width, height, value } => {
                let [a, b, c] = triangle_vertices(top, width, height)?;
                GfxCall::FillTriangle { a, b, c, color: color(value) }
            }
            Self::FillAll { value } => GfxCall::FillScreen { color: color(value) },
            Self::FreehandComplete { .. } | Self::FloodFill { .. } | Self::ImportImage(_) => {
                return None;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> [DrawingOperation; 12] {
        [
            DrawingOperation::Pixel { at: Point::new(5, 5), value: true },
            DrawingOperation::Line { from: Point::new(0, 0), to: Point::new(20, 9), value: true },
            DrawingOperation::FreehandSegment { from: Point::new(3, 40), to: Point::new(9, 44), value: true },
            DrawingOperation::Rectangle { x: 10, y: 10, width: 20, height: 10, value: true },
            DrawingOperation::FilledRectangle { x: 12, y: 12, width: 4, height: 4, value: false },
            DrawingOperation::RoundedRectangle { x: 40, y: 5, width: 30, height: 20, value: true },
            DrawingOperation::FilledRoundedRectangle { x: 40, y: 30, width: 12, height: 9, value: true },
            DrawingOperation::Circle { center: Point::new(100, 20), radius: 10, value: true },
            DrawingOperation::FilledCircle { center: Point::new(100, 50), radius: 6, value: true },
            DrawingOperation::Triangle { top: Point::new(60, 30), width: 20, height: 20, value: true },
            DrawingOperation::FilledTriangle { top: Point::new(20, 30), width: 16, height: 12, value: true },
            DrawingOperation::Pixel { at: Point::new(5, 5), value: false },
        ]
    }

    #[test]
    fn every_replayable_op_paints_like_its_call() {
        for op in sample() {
            let call = op.to_call().unwrap();
            let mut by_op = PixelGrid::filled();
            op.apply(&mut by_op);
            let mut by_call = PixelGrid::filled();
            call.apply(&mut by_call);
            assert_eq!(by_op, by_call, "{} from a lit grid", op.kind());
            let (mut by_op, mut by_call) = (PixelGrid::new(), PixelGrid::new());
            op.apply(&mut by_op);
            call.apply(&mut by_call);
            assert_eq!(by_op, by_call, "{} from a blank grid", op.kind());
        }
    }

    #[test]
    fn off_values_replay_in_the_off_colour() {
        let op = DrawingOperation::Pixel { at: Point::new(1, 2), value: false };
        assert_eq!(
            op.to_call(),
            Some(GfxCall::DrawPixel { x: 1, y: 2, color: Color::Off }),
            "not dropped"
        );
    }

    #[test]
    fn markers_and_non_call_ops_have_no_call() {
        let none = [
            DrawingOperation::FreehandComplete {
                start: Point::new(0, 0),
                end: Point::new(1, 1),
                value: true,
            },
            DrawingOperation::FloodFill { seed: Point::new(0, 0), target: false, replacement: true },
            DrawingOperation::ImportImage(Box::default()),
            DrawingOperation::Triangle { top: Point::new(5, 5), width: 10, height: 0, value: true },
        ];
        for op in none {
            assert_eq!(op.to_call(), None, "{}", op.kind());
        }
        assert!(!OperationKind::FloodFill.is_replayable(), "flood fill");
        assert!(OperationKind::FreehandComplete.is_replayable(), "marker");
    }

    #[test]
    fn rounded_rect_call_carries_the_derived_radius() {
        let op = DrawingOperation::FilledRoundedRectangle {
            x: 10,
            y: 10,
            width: 8,
            height: 8,
            value: true,
        };
        let Some(GfxCall::FillRoundRect { r, .. }) = op.to_call() else {
            panic!("expected fillRoundRect");
        };
        assert_eq!(r, 2, "min(5, 8 / 4)");
    }

    #[test]
    fn flood_fill_only_applies_to_its_target_region() {
        let mut g = PixelGrid::new();
        g.paint(true, |plot| rect_outline(Point::new(0, 0), Point::new(9, 9), plot));
        let op = DrawingOperation::FloodFill { seed: Point::new(5, 5), target: false, replacement: true };
        op.apply(&mut g);
        assert_eq!(g.count_on(), 100, "interior filled");
        let mut lit = PixelGrid::filled();
        op.apply(&mut lit);
        assert_eq!(lit, PixelGrid::filled(), "seed not on target value");
    }

    #[test]
    fn import_replaces_the_grid() {
        let mut image = PixelGrid::new();
        image.set(Point::new(7, 7), true);
        let mut g = PixelGrid::filled();
        DrawingOperation::ImportImage(Box::new(image.clone())).apply(&mut g);
        assert_eq!(g, image, "grid replaced");
    }
}
