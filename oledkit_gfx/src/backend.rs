// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use oledkit_raster::{PixelGrid, Point};

use crate::call::{Color, GfxCall};

/// A captured sequence of drawing calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordedCalls {
    /// Calls in issue order.
    pub calls: Vec<GfxCall>,
}

impl RecordedCalls {
    /// Issues every recorded call to `backend`, in order.
    pub fn replay<B: GfxBackend + ?Sized>(&self, backend: &mut B) {
        for call in &self.calls {
            backend.call(call.clone());
        }
    }

    /// Interprets the recording against a blank grid.
    pub fn render(&self) -> PixelGrid {
        let mut grid = PixelGrid::new();
        for call in &self.calls {
            call.apply(&mut grid);
        }
        grid
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl From<Vec<GfxCall>> for RecordedCalls {
    fn from(calls: Vec<GfxCall>) -> Self {
        Self { calls }
    }
}

/// Sink for drawing calls.
///
/// A backend either executes calls (painting a grid), serializes them
/// (source text), or both. Recording captures calls without changing how
/// they are executed.
pub trait GfxBackend {
    /// Issue one call.
    ///
    /// Inside an active recording the call is both executed and appended to
    /// the recording.
    fn call(&mut self, call: GfxCall);

    /// Begin capturing subsequent calls.
    ///
    /// Callers should assume at most one active recording.
    fn begin_record(&mut self);

    /// End the current recording and return what it captured.
    fn end_record(&mut self) -> RecordedCalls;
}

/// Typed shorthands for [`GfxBackend::call`].
///
/// Kept apart from [`GfxBackend`] so `&mut dyn GfxBackend` stays usable.
pub trait GfxBackendExt: GfxBackend {
    /// `clearDisplay()`.
    #[inline]
    fn clear_display(&mut self) {
        self.call(GfxCall::ClearDisplay);
    }

    /// `display()`.
    #[inline]
    fn flush(&mut self) {
        self.call(GfxCall::Display);
    }

    /// `drawPixel(x, y, color)`.
    #[inline]
    fn draw_pixel(&mut self, p: Point, color: Color) {
        self.call(GfxCall::DrawPixel { x: p.x, y: p.y, color });
    }

    /// `drawLine(x0, y0, x1, y1, color)`.
    #[inline]
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.call(GfxCall::DrawLine {
            x0: from.x,
            y0: from.y,
            x1: to.x,
            y1: to.y,
            color,
        });
    }

    /// `drawRect` or `fillRect`, depending on `filled`.
    #[inline]
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, filled: bool, color: Color) {
        self.call(if filled {
            GfxCall::FillRect { x, y, w, h, color }
        } else {
            GfxCall::DrawRect { x, y, w, h, color }
        });
    }

    /// `drawCircle` or `fillCircle`, depending on `filled`.
    #[inline]
    fn circle(&mut self, center: Point, r: i32, filled: bool, color: Color) {
        let (x, y) = (center.x, center.y);
        self.call(if filled {
            GfxCall::FillCircle { x, y, r, color }
        } else {
            GfxCall::DrawCircle { x, y, r, color }
        });
    }

    /// `fillScreen(color)`.
    #[inline]
    fn fill_screen(&mut self, color: Color) {
        self.call(GfxCall::FillScreen { color });
    }

    /// Run `f` inside a recording and return the captured calls.
    ///
    /// Note: if `f` panics, the recording is left open.
    #[inline]
    fn with_recording(&mut self, f: impl FnOnce(&mut Self)) -> RecordedCalls {
        self.begin_record();
        f(self);
        self.end_record()
    }
}

impl<B: GfxBackend + ?Sized> GfxBackendExt for B {}

/// Record the calls `f` issues against `backend`.
///
/// The calls still reach `backend` normally.
pub fn record_calls<B, F>(backend: &mut B, f: F) -> RecordedCalls
where
    B: GfxBackend + ?Sized,
    F: FnOnce(&mut B),
{
    backend.begin_record();
    f(backend);
    backend.end_record()
}

/// Recording state shared by the in-crate backends.
#[derive(Clone, Debug, Default)]
struct Recorder {
    active: Option<Vec<GfxCall>>,
}

impl Recorder {
    fn note(&mut self, call: &GfxCall) {
        if let Some(calls) = &mut self.active {
            calls.push(call.clone());
        }
    }

    fn begin(&mut self) {
        self.active = Some(Vec::new());
    }

    fn end(&mut self) -> RecordedCalls {
        RecordedCalls {
            calls: self.active.take().unwrap_or_default(),
        }
    }
}

/// Backend that interprets calls into a [`PixelGrid`].
#[derive(Clone, Debug, Default)]
pub struct GridBackend {
    grid: PixelGrid,
    recorder: Recorder,
}

impl GridBackend {
    /// Starts from a blank grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing grid.
    pub fn with_grid(grid: PixelGrid) -> Self {
        Self {
            grid,
            recorder: Recorder::default(),
        }
    }

    /// The current framebuffer.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Consumes the backend, returning the framebuffer.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }
}

impl GfxBackend for GridBackend {
    fn call(&mut self, call: GfxCall) {
        self.recorder.note(&call);
        call.apply(&mut self.grid);
    }

    fn begin_record(&mut self) {
        self.recorder.begin();
    }

    fn end_record(&mut self) -> RecordedCalls {
        self.recorder.end()
    }
}

/// Backend that keeps every call it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<GfxCall>,
    recorder: Recorder,
}

impl RecordingBackend {
    /// An empty call list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far.
    pub fn calls(&self) -> &[GfxCall] {
        &self.calls
    }

    /// Consumes the backend, returning its calls.
    pub fn into_calls(self) -> Vec<GfxCall> {
        self.calls
    }
}

impl GfxBackend for RecordingBackend {
    fn call(&mut self, call: GfxCall) {
        self.recorder.note(&call);
        self.calls.push(call);
    }

    fn begin_record(&mut self) {
        self.recorder.begin();
    }

    fn end_record(&mut self) -> RecordedCalls {
        self.recorder.end()
    }
}
