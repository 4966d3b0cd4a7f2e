// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `oledkit_codegen` crate.
//!
//! Generated listings are parsed back and replayed: whichever strategy
//! produced them, they must paint the grid they were generated from.

use oledkit_codegen::{Dialect, Generator, OutputMode, Strategy, generate};
use oledkit_gfx::RecordedCalls;
use oledkit_gfx_source::parse_listing;
use oledkit_ops::{OperationLog, Session};
use oledkit_raster::{PixelGrid, Point, circle_outline, rect_filled};

fn replayed(source: &str, dialect: &Dialect) -> PixelGrid {
    let calls = parse_listing(source, dialect).unwrap();
    RecordedCalls::from(calls).render()
}

#[test]
fn single_pixel_listing_is_exact() {
    let mut grid = PixelGrid::new();
    grid.set(Point::new(5, 5), true);
    let code = Generator::new()
        .with_dialect(Dialect::with_colors("ON", "OFF"))
        .generate(&grid, &OperationLog::new());
    let lines: Vec<_> = code.lines().collect();
    assert_eq!(
        lines,
        ["display.clearDisplay();", "display.drawPixel(5, 5, ON);", "display.display();"],
        "framed pixel"
    );
}

#[test]
fn recovered_circle_is_one_line() {
    let grid = PixelGrid::mask(|plot| circle_outline(Point::new(64, 32), 10, plot));
    let dialect = Dialect::with_colors("ON", "OFF");
    let code = Generator::new()
        .with_dialect(dialect.clone())
        .generate(&grid, &OperationLog::new());
    let circles = code.lines().filter(|l| l.contains("drawCircle")).count();
    assert_eq!(circles, 1, "{code}");
    assert!(code.contains("display.drawCircle(64, 32, 10, ON);"), "{code}");
    assert!(!code.contains("drawPixel"), "no leftover pixels");
    assert_eq!(replayed(&code, &dialect), grid, "listing paints the grid");
}

#[test]
fn block_at_origin_is_one_fill_rect() {
    let grid = PixelGrid::mask(|plot| rect_filled(0, 0, 3, 3, plot));
    let code = generate(&grid, &OperationLog::new());
    assert_eq!(
        code.lines().nth(1),
        Some("display.fillRect(0, 0, 3, 3, SSD1306_WHITE);"),
        "{code}"
    );
    assert_eq!(code.lines().count(), 3, "one call between the framing");
}

#[test]
fn session_replay_paints_the_session_grid() {
    let mut s = Session::default();
    s.rectangle(Point::new(2, 2), Point::new(40, 30), false);
    s.circle(Point::new(80, 32), Point::new(92, 32), true);
    s.set_fill_value(false);
    s.line(Point::new(70, 20), Point::new(100, 44));
    s.set_fill_value(true);
    s.triangle(Point::new(20, 35), Point::new(30, 60), true);
    s.begin_freehand(Point::new(110, 5)).unwrap();
    s.extend_freehand(Point::new(120, 15)).unwrap();
    s.end_freehand(Point::new(125, 5)).unwrap();

    let dialect = Dialect::default();
    let code = generate(s.grid(), s.log());
    assert!(code.contains("drawRect(2, 2,"), "rectangle replayed: {code}");
    assert!(code.contains("SSD1306_BLACK"), "erasing line keeps its colour");
    assert_eq!(replayed(&code, &dialect), *s.grid(), "replay is exact");
}

#[test]
fn flood_filled_session_prefers_recovery() {
    let mut s = Session::default();
    s.rectangle(Point::new(10, 10), Point::new(29, 19), false);
    s.flood_fill(Point::new(15, 15));
    let auto = generate(s.grid(), s.log());
    assert_ne!(
        replayed(&auto, &Dialect::default()),
        *s.grid(),
        "plain replay drops the fill"
    );
    let preferred = Generator::new()
        .with_strategy(Strategy::PreferReplayable)
        .generate(s.grid(), s.log());
    assert_eq!(replayed(&preferred, &Dialect::default()), *s.grid(), "recovered");
    assert!(preferred.contains("fillRect(10, 10, 20, 10,"), "{preferred}");
}

#[test]
fn bitmap_mode_packs_a_blank_grid_as_zero_pages() {
    let code = Generator::new()
        .with_mode(OutputMode::Bitmap)
        .generate(&PixelGrid::new(), &OperationLog::new());
    assert_eq!(code.matches("0x00, ").count(), 1024, "8 pages x 128 bytes");
    assert!(!code.contains("0xff"), "nothing lit");
    assert!(code.contains("frame_data[1][1024]"), "one frame");
}

#[test]
fn frames_are_numbered_in_order() {
    let frames = [PixelGrid::new(), PixelGrid::filled()];
    let code = Generator::new().generate_frames(&frames);
    let first = code.find("// Frame 1").unwrap();
    let second = code.find("// Frame 2").unwrap();
    assert!(first < second, "frame order");
    assert_eq!(code.matches("0xff, ").count(), 1024, "second frame fully lit");
}

#[cfg(feature = "serde")]
#[test]
fn generator_settings_deserialize_with_defaults() {
    let g: Generator = serde_json::from_str(r#"{ "strategy": "Recover" }"#).unwrap();
    assert_eq!(g.strategy, Strategy::Recover, "override");
    assert_eq!(g.mode, OutputMode::Calls, "default mode");
    assert_eq!(g.dialect, Dialect::default(), "default dialect");
}
