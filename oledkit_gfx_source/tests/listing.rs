// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `oledkit_gfx_source` crate.
//!
//! A listing written by [`SourceBackend`] must parse back to the same calls
//! and therefore paint the same pixels.

use oledkit_gfx::{Color, GfxBackend, GfxBackendExt, GfxCall, RecordedCalls};
use oledkit_gfx_source::{Dialect, SourceBackend, format_frames, parse_listing};
use oledkit_raster::{PixelGrid, Point};

fn sample_calls() -> Vec<GfxCall> {
    vec![
        GfxCall::ClearDisplay,
        GfxCall::DrawCircle { x: 20, y: 20, r: 8, color: Color::On },
        GfxCall::FillRoundRect { x: 50, y: 5, w: 30, h: 20, r: 5, color: Color::On },
        GfxCall::DrawTriangle {
            a: Point::new(100, 10),
            b: Point::new(90, 40),
            c: Point::new(120, 40),
            color: Color::On,
        },
        GfxCall::DrawFastHLine { x: 0, y: 63, w: 128, color: Color::On },
        GfxCall::DrawPixel { x: 60, y: 12, color: Color::Off },
        GfxCall::Display,
    ]
}

#[test]
fn emitted_listing_parses_back_to_the_same_calls() {
    let calls = sample_calls();
    for dialect in [Dialect::default(), Dialect::with_colors("ON", "OFF")] {
        let mut backend = SourceBackend::new(dialect.clone());
        RecordedCalls::from(calls.clone()).replay(&mut backend);
        let parsed = parse_listing(&backend.to_source(), &dialect).unwrap();
        assert_eq!(parsed, calls, "round trip under {dialect:?}");
    }
}

#[test]
fn parsed_listing_paints_what_the_calls_paint() {
    let calls = sample_calls();
    let mut backend = SourceBackend::default();
    for call in &calls {
        backend.call(call.clone());
    }
    let parsed = parse_listing(&backend.to_source(), backend.dialect()).unwrap();
    let expected = RecordedCalls::from(calls).render();
    assert_eq!(RecordedCalls::from(parsed).render(), expected, "same pixels");
    assert!(!expected.is_blank(), "sample draws something");
}

#[test]
fn listing_starts_and_ends_with_framing_calls() {
    let mut backend = SourceBackend::default();
    backend.clear_display();
    backend.fill_screen(Color::On);
    backend.flush();
    let source = backend.into_source();
    let lines: Vec<_> = source.lines().collect();
    assert_eq!(
        lines,
        ["display.clearDisplay();", "display.fillScreen(SSD1306_WHITE);", "display.display();"],
        "framing"
    );
}

#[test]
fn empty_animation_still_has_a_valid_document() {
    let doc = format_frames(&[]);
    assert!(
        doc.contains("frame_data[0][1024] = {\n};"),
        "empty initializer"
    );
    let one = format_frames(&[PixelGrid::new()]);
    assert_eq!(one.matches("// Frame").count(), 1, "one frame block");
}
