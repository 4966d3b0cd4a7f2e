// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor shell: tools that mutate a grid and log what they did.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use oledkit_raster::{GridError, PixelGrid, Point, radius_between};
use tracing::{debug, trace};

use crate::log::OperationLog;
use crate::op::DrawingOperation;

/// Editor settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Maximum number of undo steps kept; `0` disables history.
    pub history_limit: usize,
    /// Value written by drawing tools until changed.
    pub fill_value: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 64,
            fill_value: true,
        }
    }
}

/// Errors raised by [`Session`] tools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Imported pixels did not have the grid's dimensions.
    Import(GridError),
    /// A freehand call arrived with no stroke in progress.
    NoStroke,
    /// A freehand stroke was begun while another was in progress.
    StrokeInProgress,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import(e) => write!(f, "cannot import image: {e}"),
            Self::NoStroke => f.write_str("no freehand stroke in progress"),
            Self::StrokeInProgress => f.write_str("a freehand stroke is already in progress"),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Import(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        Self::Import(e)
    }
}

/// How one undo step changed the log.
#[derive(Clone, Debug)]
enum LogEdit {
    /// The step appended this many operations.
    Appended(usize),
    /// Reverting the step removed these operations.
    Removed(Vec<DrawingOperation>),
    /// The step replaced the whole log; this is the other version.
    Swapped(OperationLog),
}

impl LogEdit {
    /// Undoes the edit on `log`, returning the edit that redoes it.
    fn revert(self, log: &mut OperationLog) -> Self {
        match self {
            Self::Appended(n) => Self::Removed(log.truncate(log.len().saturating_sub(n))),
            Self::Removed(ops) => {
                let n = ops.len();
                log.extend(ops);
                Self::Appended(n)
            }
            Self::Swapped(mut other) => {
                mem::swap(log, &mut other);
                Self::Swapped(other)
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Step {
    grid: PixelGrid,
    edit: LogEdit,
}

impl Step {
    fn revert(self, grid: &mut PixelGrid, log: &mut OperationLog) -> Self {
        Self {
            grid: mem::replace(grid, self.grid),
            edit: self.edit.revert(log),
        }
    }
}

#[derive(Clone, Debug)]
struct Stroke {
    start: Point,
    last: Point,
    before: PixelGrid,
    logged: usize,
    value: bool,
}

/// A drawing session: the grid, its operation log, and undo history.
///
/// Every tool that changes pixels appends the matching
/// [`DrawingOperation`]s, so `session.log().render() == *session.grid()`
/// holds between calls.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    fill_value: bool,
    grid: PixelGrid,
    log: OperationLog,
    undo: VecDeque<Step>,
    redo: Vec<Step>,
    stroke: Option<Stroke>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// A blank session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            fill_value: config.fill_value,
            config,
            grid: PixelGrid::new(),
            log: OperationLog::new(),
            undo: VecDeque::new(),
            redo: Vec::new(),
            stroke: None,
        }
    }

    /// The current grid.
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Everything drawn so far.
    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// The settings the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Value the drawing tools write.
    pub fn fill_value(&self) -> bool {
        self.fill_value
    }

    /// Changes the value the drawing tools write.
    pub fn set_fill_value(&mut self, value: bool) {
        self.fill_value = value;
    }

    /// Flips one pixel; returns its new value, or `None` off-grid.
    pub fn toggle_pixel(&mut self, at: Point) -> Option<bool> {
        self.finish_stroke();
        if !at.in_bounds() {
            return None;
        }
        let value = !self.grid.get(at);
        self.commit(DrawingOperation::Pixel { at, value });
        Some(value)
    }

    /// Sets one pixel to the fill value; returns `false` off-grid.
    pub fn set_pixel(&mut self, at: Point) -> bool {
        if !at.in_bounds() {
            return false;
        }
        let value = self.fill_value;
        self.commit(DrawingOperation::Pixel { at, value });
        true
    }

    /// Line tool.
    pub fn line(&mut self, from: Point, to: Point) {
        let value = self.fill_value;
        self.commit(DrawingOperation::Line { from, to, value });
    }

    /// Rectangle tool dragged between two opposite corners.
    pub fn rectangle(&mut self, a: Point, b: Point, filled: bool) {
        let (x, y) = (a.x.min(b.x), a.y.min(b.y));
        let (width, height) = (span(a.x, b.x), span(a.y, b.y));
        let value = self.fill_value;
        self.commit(if filled {
            DrawingOperation::FilledRectangle { x, y, width, height, value }
        } else {
            DrawingOperation::Rectangle { x, y, width, height, value }
        });
    }

    /// Circle tool dragged from the centre to a point on the edge.
    pub fn circle(&mut self, center: Point, edge: Point, filled: bool) {
        let radius = radius_between(center, edge);
        let value = self.fill_value;
        self.commit(if filled {
            DrawingOperation::FilledCircle { center, radius, value }
        } else {
            DrawingOperation::Circle { center, radius, value }
        });
    }

    /// Rounded rectangle tool dragged between two opposite corners.
    pub fn rounded_rectangle(&mut self, a: Point, b: Point, filled: bool) {
        let (x, y) = (a.x.min(b.x), a.y.min(b.y));
        let (width, height) = (span(a.x, b.x), span(a.y, b.y));
        let value = self.fill_value;
        self.commit(if filled {
            DrawingOperation::FilledRoundedRectangle { x, y, width, height, value }
        } else {
            DrawingOperation::RoundedRectangle { x, y, width, height, value }
        });
    }

    /// Triangle tool dragged from the apex.
    ///
    /// The base is twice the horizontal drag wide and sits at the drag's
    /// row. Dragging upwards records a triangle that draws nothing.
    pub fn triangle(&mut self, top: Point, drag: Point, filled: bool) {
        let width = i32::try_from(drag.x.abs_diff(top.x).saturating_mul(2)).unwrap_or(i32::MAX);
        let height = drag.y.saturating_sub(top.y);
        let value = self.fill_value;
        self.commit(if filled {
            DrawingOperation::FilledTriangle { top, width, height, value }
        } else {
            DrawingOperation::Triangle { top, width, height, value }
        });
    }

    /// Starts a freehand stroke, setting the pixel under the pointer.
    pub fn begin_freehand(&mut self, at: Point) -> Result<(), SessionError> {
        if self.stroke.is_some() {
            return Err(SessionError::StrokeInProgress);
        }
        let before = self.grid.clone();
        let value = self.fill_value;
        self.grid.set(at, value);
        self.stroke = Some(Stroke {
            start: at,
            last: at,
            before,
            logged: 0,
            value,
        });
        Ok(())
    }

    /// Extends the stroke to `to`, logging one segment.
    pub fn extend_freehand(&mut self, to: Point) -> Result<(), SessionError> {
        let mut stroke = self.stroke.take().ok_or(SessionError::NoStroke)?;
        if to != stroke.last {
            self.segment(&mut stroke, to);
        }
        self.stroke = Some(stroke);
        Ok(())
    }

    /// Ends the stroke at `end`.
    ///
    /// The whole stroke is one undo step.
    pub fn end_freehand(&mut self, end: Point) -> Result<(), SessionError> {
        let stroke = self.stroke.take().ok_or(SessionError::NoStroke)?;
        self.close_stroke(stroke, end);
        Ok(())
    }

    /// Returns `true` while a freehand stroke is open.
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Bucket tool; returns the number of pixels changed.
    ///
    /// Nothing is logged when the seed is off-grid or already holds the
    /// fill value.
    pub fn flood_fill(&mut self, seed: Point) -> usize {
        self.finish_stroke();
        if !seed.in_bounds() {
            return 0;
        }
        let target = self.grid.get(seed);
        let replacement = self.fill_value;
        if target == replacement {
            return 0;
        }
        let before = self.grid.clone();
        let op = DrawingOperation::FloodFill { seed, target, replacement };
        let changed = oledkit_raster::flood_fill(&mut self.grid, seed, replacement);
        trace!(?seed, changed, "flood fill");
        self.log.push(op);
        self.remember(before, LogEdit::Appended(1));
        changed
    }

    /// Lights every pixel.
    pub fn fill_all(&mut self) {
        self.commit(DrawingOperation::FillAll { value: true });
    }

    /// Blanks the grid and empties the log.
    pub fn clear(&mut self) {
        self.finish_stroke();
        let before = mem::take(&mut self.grid);
        let old = mem::take(&mut self.log);
        debug!(dropped = old.len(), "cleared session");
        self.remember(before, LogEdit::Swapped(old));
    }

    /// Replaces the grid with an imported image.
    pub fn import_image(&mut self, image: PixelGrid) {
        debug!(on = image.count_on(), "imported image");
        self.commit(DrawingOperation::ImportImage(Box::new(image)));
    }

    /// Imports rows of pixels, rejecting anything not 64 by 128.
    pub fn import_rows<R: AsRef<[bool]>>(&mut self, rows: &[R]) -> Result<(), SessionError> {
        let image = PixelGrid::from_rows(rows)?;
        self.import_image(image);
        Ok(())
    }

    /// Returns `true` if there is a step to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty() || self.stroke.is_some()
    }

    /// Returns `true` if there is a step to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty() && self.stroke.is_none()
    }

    /// Reverts the last step, grid and log together.
    pub fn undo(&mut self) -> bool {
        self.finish_stroke();
        let Some(step) = self.undo.pop_back() else {
            return false;
        };
        let step = step.revert(&mut self.grid, &mut self.log);
        debug!(remaining = self.undo.len(), "undo");
        self.redo.push(step);
        true
    }

    /// Re-applies the last undone step, grid and log together.
    pub fn redo(&mut self) -> bool {
        self.finish_stroke();
        let Some(step) = self.redo.pop() else {
            return false;
        };
        let step = step.revert(&mut self.grid, &mut self.log);
        debug!(remaining = self.redo.len(), "redo");
        self.push_undo(step);
        true
    }

    fn commit(&mut self, op: DrawingOperation) {
        self.finish_stroke();
        let before = self.grid.clone();
        op.apply(&mut self.grid);
        trace!(kind = %op.kind(), "operation");
        self.log.push(op);
        self.remember(before, LogEdit::Appended(1));
    }

    fn segment(&mut self, stroke: &mut Stroke, to: Point) {
        let op = DrawingOperation::FreehandSegment {
            from: stroke.last,
            to,
            value: stroke.value,
        };
        op.apply(&mut self.grid);
        self.log.push(op);
        stroke.logged += 1;
        stroke.last = to;
    }

    fn close_stroke(&mut self, mut stroke: Stroke, end: Point) {
        if end != stroke.last {
            self.segment(&mut stroke, end);
        } else if stroke.logged == 0 {
            // A click without movement still has to replay its start pixel.
            let start = stroke.start;
            self.segment(&mut stroke, start);
        }
        self.log.push(DrawingOperation::FreehandComplete {
            start: stroke.start,
            end,
            value: stroke.value,
        });
        stroke.logged += 1;
        trace!(ops = stroke.logged, "freehand stroke");
        self.remember(stroke.before, LogEdit::Appended(stroke.logged));
    }

    fn finish_stroke(&mut self) {
        if let Some(stroke) = self.stroke.take() {
            let last = stroke.last;
            self.close_stroke(stroke, last);
        }
    }

    fn remember(&mut self, grid: PixelGrid, edit: LogEdit) {
        self.redo.clear();
        self.push_undo(Step { grid, edit });
    }

    fn push_undo(&mut self, step: Step) {
        if self.config.history_limit == 0 {
            return;
        }
        self.undo.push_back(step);
        while self.undo.len() > self.config.history_limit {
            self.undo.pop_front();
        }
    }
}

/// Inclusive pixel count between two drag coordinates, saturating.
fn span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b).saturating_add(1)).unwrap_or(i32::MAX)
}
