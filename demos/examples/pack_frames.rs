// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pack a short animation as SSD1306 page arrays.
//!
//! Each frame grows a circle by two pixels.
//!
//! Run:
//! - `cargo run -p oledkit_demos --example pack_frames`

use oledkit_codegen::Generator;
use oledkit_demos::{has_flag, init_logging};
use oledkit_raster::{PixelGrid, Point, circle_outline};

fn main() {
    init_logging(has_flag("--verbose"));

    let frames: Vec<PixelGrid> = (1..=8)
        .map(|i| PixelGrid::mask(|plot| circle_outline(Point::new(64, 32), 2 * i + 2, plot)))
        .collect();
    println!("{}", Generator::new().generate_frames(&frames));
}
