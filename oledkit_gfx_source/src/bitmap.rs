// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Write as _;

use oledkit_raster::{FRAME_BYTES, HEIGHT, PAGES, PixelGrid, WIDTH};

const BYTES_PER_LINE: usize = 16;

/// Formats one frame's page bytes as C array rows.
///
/// Each page is one row group of `0x%02x, ` bytes, broken every 16 bytes;
/// every line is indented by four spaces. Page groups are joined with `\n`
/// and the result has no trailing newline.
pub fn format_frame(grid: &PixelGrid) -> String {
    let mut out = String::new();
    for page in 0..PAGES {
        if page > 0 {
            out.push('\n');
        }
        out.push_str("    ");
        for x in 0..WIDTH {
            let _ = write!(out, "0x{:02x}, ", grid.page_byte(page, x));
            if (x + 1) % BYTES_PER_LINE == 0 && x < WIDTH - 1 {
                out.push_str("\n    ");
            }
        }
    }
    out
}

/// Formats a frame sequence as a `PROGMEM` array for SSD1306 firmware.
///
/// The document has a size header, one `{ ... }` block per frame numbered
/// from 1, and a commented footer showing `drawBitmap` and direct buffer
/// copies.
pub fn format_frames(frames: &[PixelGrid]) -> String {
    let n = frames.len();
    let mut out = String::new();
    let _ = writeln!(out, "// Generated bitmap arrays for {n} frames");
    let _ = writeln!(out, "// Each frame is {WIDTH}x{HEIGHT} pixels");
    let _ = writeln!(
        out,
        "// Total size: {n} frames * {FRAME_BYTES} bytes = {} bytes",
        n * FRAME_BYTES
    );
    out.push('\n');
    out.push_str("// For Adafruit SSD1306 OLED displays\n");
    let _ = writeln!(
        out,
        "static const unsigned char PROGMEM frame_data[{n}][{FRAME_BYTES}] = {{"
    );
    for (i, frame) in frames.iter().enumerate() {
        let _ = writeln!(out, "  {{ // Frame {}", i + 1);
        out.push_str(&format_frame(frame));
        out.push_str("\n  }");
        if i + 1 < n {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n\n");

    out.push_str("/*\n");
    out.push_str("// EXAMPLE 1: Using Adafruit GFX library drawBitmap function:\n");
    out.push_str("void displayFrame(int frameIndex) {\n");
    out.push_str("  display.clearDisplay();\n");
    let _ = writeln!(
        out,
        "  display.drawBitmap(0, 0, frame_data[frameIndex], {WIDTH}, {HEIGHT}, SSD1306_WHITE);"
    );
    out.push_str("  display.display();\n");
    out.push_str("}\n\n");
    out.push_str("// EXAMPLE 2: Direct buffer manipulation (faster):\n");
    out.push_str("void displayFrameDirect(int frameIndex) {\n");
    out.push_str("  // Copy the frame data directly to the display buffer\n");
    let _ = writeln!(
        out,
        "  memcpy(display.getBuffer(), frame_data[frameIndex], {FRAME_BYTES});"
    );
    out.push_str("  display.display();\n");
    out.push_str("}\n*/");
    out
}
