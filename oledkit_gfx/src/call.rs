// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use oledkit_raster::{
    PixelGrid, Point, circle_filled, circle_outline, hline, line, rect_filled, rect_outline,
    rounded_rect_filled, rounded_rect_outline, triangle_filled, triangle_outline, vline,
};

/// Pixel value written by a call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Lit pixel.
    #[default]
    On,
    /// Dark pixel.
    Off,
}

impl Color {
    /// `On` for `true`, `Off` for `false`.
    pub const fn from_bool(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    /// Returns `true` for [`Color::On`].
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        Self::from_bool(on)
    }
}

/// Fieldless tag for each [`GfxCall`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    /// [`GfxCall::ClearDisplay`].
    ClearDisplay,
    /// [`GfxCall::DrawPixel`].
    DrawPixel,
    /// [`GfxCall::DrawLine`].
    DrawLine,
    /// [`GfxCall::DrawRect`].
    DrawRect,
    /// [`GfxCall::FillRect`].
    FillRect,
    /// [`GfxCall::DrawCircle`].
    DrawCircle,
    /// [`GfxCall::FillCircle`].
    FillCircle,
    /// [`GfxCall::DrawRoundRect`].
    DrawRoundRect,
    /// [`GfxCall::FillRoundRect`].
    FillRoundRect,
    /// [`GfxCall::DrawTriangle`].
    DrawTriangle,
    /// [`GfxCall::FillTriangle`].
    FillTriangle,
    /// [`GfxCall::FillScreen`].
    FillScreen,
    /// [`GfxCall::DrawFastHLine`].
    DrawFastHLine,
    /// [`GfxCall::DrawFastVLine`].
    DrawFastVLine,
    /// [`GfxCall::Display`].
    Display,
}

impl CallKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::ClearDisplay,
        Self::DrawPixel,
        Self::DrawLine,
        Self::DrawRect,
        Self::FillRect,
        Self::DrawCircle,
        Self::FillCircle,
        Self::DrawRoundRect,
        Self::FillRoundRect,
        Self::DrawTriangle,
        Self::FillTriangle,
        Self::FillScreen,
        Self::DrawFastHLine,
        Self::DrawFastVLine,
        Self::Display,
    ];

    /// The method name used by the GFX API.
    pub const fn method(self) -> &'static str {
        match self {
            Self::ClearDisplay => "clearDisplay",
            Self::DrawPixel => "drawPixel",
            Self::DrawLine => "drawLine",
            Self::DrawRect => "drawRect",
            Self::FillRect => "fillRect",
            Self::DrawCircle => "drawCircle",
            Self::FillCircle => "fillCircle",
            Self::DrawRoundRect => "drawRoundRect",
            Self::FillRoundRect => "fillRoundRect",
            Self::DrawTriangle => "drawTriangle",
            Self::FillTriangle => "fillTriangle",
            Self::FillScreen => "fillScreen",
            Self::DrawFastHLine => "drawFastHLine",
            Self::DrawFastVLine => "drawFastVLine",
            Self::Display => "display",
        }
    }

    /// Looks a kind up by its GFX method name.
    pub fn from_method(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.method() == name)
    }

    /// Number of integer arguments before the colour argument.
    pub const fn arity(self) -> usize {
        match self {
            Self::ClearDisplay | Self::Display | Self::FillScreen => 0,
            Self::DrawPixel => 2,
            Self::DrawCircle | Self::FillCircle | Self::DrawFastHLine | Self::DrawFastVLine => 3,
            Self::DrawLine | Self::DrawRect | Self::FillRect => 4,
            Self::DrawRoundRect | Self::FillRoundRect => 5,
            Self::DrawTriangle | Self::FillTriangle => 6,
        }
    }

    /// Returns `true` if the call takes a trailing colour argument.
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::ClearDisplay | Self::Display)
    }
}

/// One drawing-primitive call of the GFX API.
///
/// Coordinates are signed so calls can describe shapes that are partly off
/// screen; the interpreter clips like the device does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GfxCall {
    /// Turn every pixel off.
    ClearDisplay,
    /// Set one pixel.
    DrawPixel {
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// Value written.
        color: Color,
    },
    /// Bresenham line between two points, both inclusive.
    DrawLine {
        /// Start column.
        x0: i32,
        /// Start row.
        y0: i32,
        /// End column.
        x1: i32,
        /// End row.
        y1: i32,
        /// Value written.
        color: Color,
    },
    /// Rectangle border.
    DrawRect {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        w: i32,
        /// Height in pixels.
        h: i32,
        /// Value written.
        color: Color,
    },
    /// Solid rectangle.
    FillRect {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        w: i32,
        /// Height in pixels.
        h: i32,
        /// Value written.
        color: Color,
    },
    /// Circle outline.
    DrawCircle {
        /// Centre column.
        x: i32,
        /// Centre row.
        y: i32,
        /// Radius in pixels.
        r: i32,
        /// Value written.
        color: Color,
    },
    /// Solid disc.
    FillCircle {
        /// Centre column.
        x: i32,
        /// Centre row.
        y: i32,
        /// Radius in pixels.
        r: i32,
        /// Value written.
        color: Color,
    },
    /// Rounded rectangle border.
    DrawRoundRect {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        w: i32,
        /// Height in pixels.
        h: i32,
        /// Corner radius.
        r: i32,
        /// Value written.
        color: Color,
    },
    /// Solid rounded rectangle.
    FillRoundRect {
        /// Left column.
        x: i32,
        /// Top row.
        y: i32,
        /// Width in pixels.
        w: i32,
        /// Height in pixels.
        h: i32,
        /// Corner radius.
        r: i32,
        /// Value written.
        color: Color,
    },
    /// Triangle outline.
    DrawTriangle {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
        /// Value written.
        color: Color,
    },
    /// Solid triangle.
    FillTriangle {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
        /// Value written.
        color: Color,
    },
    /// Set every pixel.
    FillScreen {
        /// Value written.
        color: Color,
    },
    /// Horizontal run starting at `(x, y)`.
    DrawFastHLine {
        /// Start column.
        x: i32,
        /// Row.
        y: i32,
        /// Run length.
        w: i32,
        /// Value written.
        color: Color,
    },
    /// Vertical run starting at `(x, y)`.
    DrawFastVLine {
        /// Column.
        x: i32,
        /// Start row.
        y: i32,
        /// Run length.
        h: i32,
        /// Value written.
        color: Color,
    },
    /// Flush the framebuffer to the panel.
    Display,
}

impl GfxCall {
    /// The variant tag.
    pub const fn kind(&self) -> CallKind {
        match self {
            Self::ClearDisplay => CallKind::ClearDisplay,
            Self::DrawPixel { .. } => CallKind::DrawPixel,
            Self::DrawLine { .. } => CallKind::DrawLine,
            Self::DrawRect { .. } => CallKind::DrawRect,
            Self::FillRect { .. } => CallKind::FillRect,
            Self::DrawCircle { .. } => CallKind::DrawCircle,
            Self::FillCircle { .. } => CallKind::FillCircle,
            Self::DrawRoundRect { .. } => CallKind::DrawRoundRect,
            Self::FillRoundRect { .. } => CallKind::FillRoundRect,
            Self::DrawTriangle { .. } => CallKind::DrawTriangle,
            Self::FillTriangle { .. } => CallKind::FillTriangle,
            Self::FillScreen { .. } => CallKind::FillScreen,
            Self::DrawFastHLine { .. } => CallKind::DrawFastHLine,
            Self::DrawFastVLine { .. } => CallKind::DrawFastVLine,
            Self::Display => CallKind::Display,
        }
    }

    /// The colour argument, if the call has one.
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::ClearDisplay | Self::Display => None,
            Self::DrawPixel { color, .. }
            | Self::DrawLine { color, .. }
            | Self::DrawRect { color, .. }
            | Self::FillRect { color, .. }
            | Self::DrawCircle { color, .. }
            | Self::FillCircle { color, .. }
            | Self::DrawRoundRect { color, .. }
            | Self::FillRoundRect { color, .. }
            | Self::DrawTriangle { color, .. }
            | Self::FillTriangle { color, .. }
            | Self::FillScreen { color }
            | Self::DrawFastHLine { color, .. }
            | Self::DrawFastVLine { color, .. } => Some(*color),
        }
    }

    /// The integer arguments in GFX argument order, without the colour.
    pub fn args(&self) -> ([i32; 6], usize) {
        let mut out = [0; 6];
        let args: &[i32] = match *self {
            Self::ClearDisplay | Self::Display | Self::FillScreen { .. } => &[],
            Self::DrawPixel { x, y, .. } => &[x, y],
            Self::DrawLine { x0, y0, x1, y1, .. } => &[x0, y0, x1, y1],
            Self::DrawRect { x, y, w, h, .. } | Self::FillRect { x, y, w, h, .. } => &[x, y, w, h],
            Self::DrawCircle { x, y, r, .. } | Self::FillCircle { x, y, r, .. } => &[x, y, r],
            Self::DrawRoundRect { x, y, w, h, r, .. } | Self::FillRoundRect { x, y, w, h, r, .. } => {
                &[x, y, w, h, r]
            }
            Self::DrawTriangle { a, b, c, .. } | Self::FillTriangle { a, b, c, .. } => {
                &[a.x, a.y, b.x, b.y, c.x, c.y]
            }
            Self::DrawFastHLine { x, y, w, .. } => &[x, y, w],
            Self::DrawFastVLine { x, y, h, .. } => &[x, y, h],
        };
        out[..args.len()].copy_from_slice(args);
        (out, args.len())
    }

    /// Builds a call from its kind, integer arguments and colour.
    ///
    /// Returns `None` when `args` does not match [`CallKind::arity`].
    pub fn from_args(kind: CallKind, args: &[i32], color: Color) -> Option<Self> {
        if args.len() != kind.arity() {
            return None;
        }
        let a = |i: usize| args[i];
        Some(match kind {
            CallKind::ClearDisplay => Self::ClearDisplay,
            CallKind::Display => Self::Display,
            CallKind::FillScreen => Self::FillScreen { color },
            CallKind::DrawPixel => Self::DrawPixel { x: a(0), y: a(1), color },
            CallKind::DrawLine => Self::DrawLine {
                x0: a(0),
                y0: a(1),
                x1: a(2),
                y1: a(3),
                color,
            },
            CallKind::DrawRect => Self::DrawRect { x: a(0), y: a(1), w: a(2), h: a(3), color },
            CallKind::FillRect => Self::FillRect { x: a(0), y: a(1), w: a(2), h: a(3), color },
            CallKind::DrawCircle => Self::DrawCircle { x: a(0), y: a(1), r: a(2), color },
            CallKind::FillCircle => Self::FillCircle { x: a(0), y: a(1), r: a(2), color },
            CallKind::DrawRoundRect => Self::DrawRoundRect {
                x: a(0),
                y: a(1),
                w: a(2),
                h: a(3),
                r: a(4),
                color,
            },
            CallKind::FillRoundRect => Self::FillRoundRect {
                x: a(0),
                y: a(1),
                w: a(2),
                h: a(3),
                r: a(4),
                color,
            },
            CallKind::DrawTriangle => Self::DrawTriangle {
                a: Point::new(a(0), a(1)),
                b: Point::new(a(2), a(3)),
                c: Point::new(a(4), a(5)),
                color,
            },
            CallKind::FillTriangle => Self::FillTriangle {
                a: Point::new(a(0), a(1)),
                b: Point::new(a(2), a(3)),
                c: Point::new(a(4), a(5)),
                color,
            },
            CallKind::DrawFastHLine => Self::DrawFastHLine { x: a(0), y: a(1), w: a(2), color },
            CallKind::DrawFastVLine => Self::DrawFastVLine { x: a(0), y: a(1), h: a(2), color },
        })
    }

    /// Visits the pixels the call writes; screen-wide calls visit nothing.
    pub fn visit(&self, mut plot: impl FnMut(Point)) {
        match *self {
            Self::ClearDisplay | Self::Display | Self::FillScreen { .. } => {}
            Self::DrawPixel { x, y, .. } => plot(Point::new(x, y)),
            Self::DrawLine { x0, y0, x1, y1, .. } => line(Point::new(x0, y0), Point::new(x1, y1), plot),
            Self::DrawRect { x, y, w, h, .. } => {
                if w > 0 && h > 0 {
                    let far = Point::new(x.saturating_add(w - 1), y.saturating_add(h - 1));
                    rect_outline(Point::new(x, y), far, plot);
                }
            }
            Self::FillRect { x, y, w, h, .. } => rect_filled(x, y, w, h, plot),
            Self::DrawCircle { x, y, r, .. } => circle_outline(Point::new(x, y), r, plot),
            Self::FillCircle { x, y, r, .. } => circle_filled(Point::new(x, y), r, plot),
            Self::DrawRoundRect { x, y, w, h, r, .. } => rounded_rect_outline(x, y, w, h, r, plot),
            Self::FillRoundRect { x, y, w, h, r, .. } => rounded_rect_filled(x, y, w, h, r, plot),
            Self::DrawTriangle { a, b, c, .. } => triangle_outline([a, b, c], plot),
            Self::FillTriangle { a, b, c, .. } => triangle_filled([a, b, c], plot),
            Self::DrawFastHLine { x, y, w, .. } => hline(Point::new(x, y), w, plot),
            Self::DrawFastVLine { x, y, h, .. } => vline(Point::new(x, y), h, plot),
        }
    }

    /// The pixels the call writes, as a mask.
    ///
    /// `FillScreen` covers the whole grid; `ClearDisplay` and `Display` are empty.
    pub fn mask(&self) -> PixelGrid {
        match self {
            Self::FillScreen { .. } => PixelGrid::filled(),
            _ => PixelGrid::mask(|plot| self.visit(plot)),
        }
    }

    /// Interprets the call against `grid`.
    pub fn apply(&self, grid: &mut PixelGrid) {
        match *self {
            Self::ClearDisplay => grid.clear(),
            Self::Display => {}
            Self::FillScreen { color } => grid.fill(color.is_on()),
            _ => {
                let on = self.color().is_some_and(Color::is_on);
                grid.paint(on, |plot| self.visit(plot));
            }
        }
    }
}
