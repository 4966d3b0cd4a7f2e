// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use oledkit_gfx::{GfxBackend, GfxCall, RecordedCalls};

use crate::dialect::Dialect;

/// A backend that writes each call as one line of GFX source.
#[derive(Clone, Debug, Default)]
pub struct SourceBackend {
    dialect: Dialect,
    calls: Vec<GfxCall>,
    lines: Vec<String>,
    recording_start: Option<usize>,
}

impl SourceBackend {
    /// A backend using `dialect` for identifiers.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// The dialect in use.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Emitted lines, one per call.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Calls received, parallel to [`SourceBackend::lines`].
    pub fn calls(&self) -> &[GfxCall] {
        &self.calls
    }

    /// Drops emitted lines and any active recording.
    pub fn clear_lines(&mut self) {
        self.calls.clear();
        self.lines.clear();
        self.recording_start = None;
    }

    /// The listing: lines joined with `\n`, no trailing newline.
    pub fn to_source(&self) -> String {
        self.lines.join("\n")
    }

    /// Consumes the backend, returning the listing.
    pub fn into_source(self) -> String {
        self.to_source()
    }
}

impl GfxBackend for SourceBackend {
    fn call(&mut self, call: GfxCall) {
        self.lines.push(self.dialect.call_line(&call));
        self.calls.push(call);
    }

    fn begin_record(&mut self) {
        self.recording_start = Some(self.calls.len());
    }

    fn end_record(&mut self) -> RecordedCalls {
        let start = self.recording_start.take().unwrap_or(self.calls.len());
        RecordedCalls {
            calls: self.calls.get(start..).map(<[_]>::to_vec).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oledkit_gfx::{Color, GfxBackendExt, record_calls};
    use oledkit_raster::Point;

    #[test]
    fn listing_is_newline_joined_without_trailer() {
        let mut backend = SourceBackend::new(Dialect::with_colors("ON", "OFF"));
        backend.clear_display();
        backend.draw_pixel(Point::new(5, 5), Color::On);
        backend.flush();
        assert_eq!(
            backend.to_source(),
            "display.clearDisplay();\ndisplay.drawPixel(5, 5, ON);\ndisplay.display();",
            "three lines"
        );
    }

    #[test]
    fn recording_returns_the_tail() {
        let mut backend = SourceBackend::default();
        backend.clear_display();
        let rec = record_calls(&mut backend, |b| b.fill_screen(Color::On));
        assert_eq!(rec.calls, [GfxCall::FillScreen { color: Color::On }], "tail only");
        assert_eq!(backend.lines().len(), 2, "both lines emitted");
        backend.clear_lines();
        assert!(backend.to_source().is_empty(), "cleared");
    }
}
