// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recover drawing calls from ASCII art read on stdin.
//!
//! Input uses `#` for lit pixels and `.` for dark ones, anchored at the top
//! left; missing rows and columns are dark. Without input on stdin, a
//! built-in scene is used. Prints the
//! recovered listing and a per-pass summary.
//!
//! Run:
//! - `cargo run -p oledkit_demos --example recover_ascii < art.txt`

use std::io::{IsTerminal, Read};

use oledkit_gfx::{GfxBackend, RecordedCalls};
use oledkit_gfx_source::SourceBackend;
use oledkit_demos::{has_flag, init_logging, sample_session};
use oledkit_raster::PixelGrid;
use oledkit_recover::recover_with_report;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(has_flag("--verbose"));

    let stdin = std::io::stdin();
    let grid = if stdin.is_terminal() {
        sample_session().grid().clone()
    } else {
        let mut art = String::new();
        stdin.lock().read_to_string(&mut art)?;
        PixelGrid::from_ascii(&art).inspect_err(|e| error!(%e, "bad ASCII art"))?
    };

    let (calls, report) = recover_with_report(&grid);
    for entry in &report.passes {
        info!(pass = %entry.pass, calls = entry.calls, pixels = entry.pixels, "pass");
    }
    let replayed = RecordedCalls::from(calls.clone()).render();
    info!(lossless = replayed == grid, calls = calls.len(), "recovered");

    let mut backend = SourceBackend::default();
    for call in calls {
        backend.call(call);
    }
    println!("{}", backend.into_source());
    Ok(())
}
