// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate display code for a scripted editor session.
//!
//! The default strategy replays the session's operation log. Flags:
//!   - `--recover`: ignore the log and recover shapes from the pixels
//!   - `--bitmap`: print the grid as a page-packed array instead
//!   - `--verbose`: debug logging (or set `RUST_LOG`)
//!
//! Run:
//! - `cargo run -p oledkit_demos --example generate_code -- --recover`

use oledkit_codegen::{Generator, OutputMode, Strategy};
use oledkit_demos::{has_flag, init_logging, sample_session};
use tracing::info;

fn main() {
    init_logging(has_flag("--verbose"));

    let session = sample_session();
    let strategy = if has_flag("--recover") {
        Strategy::Recover
    } else {
        Strategy::Auto
    };
    let mode = if has_flag("--bitmap") {
        OutputMode::Bitmap
    } else {
        OutputMode::Calls
    };
    let generator = Generator::new().with_strategy(strategy).with_mode(mode);
    info!(
        ops = session.log().len(),
        lit = session.grid().count_on(),
        strategy = ?generator.resolve(session.log()),
        "session ready"
    );
    println!("{}", generator.generate(session.grid(), session.log()));
}
