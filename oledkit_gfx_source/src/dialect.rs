// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt::Write as _;

use oledkit_gfx::{CallKind, Color, GfxCall};

/// Naming choices for emitted source.
///
/// Only the identifiers vary; the call syntax is fixed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dialect {
    /// Receiver the methods are called on.
    pub target: String,
    /// Constant for a lit pixel.
    pub on: String,
    /// Constant for a dark pixel.
    pub off: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            target: "display".into(),
            on: "SSD1306_WHITE".into(),
            off: "SSD1306_BLACK".into(),
        }
    }
}

impl Dialect {
    /// Default receiver with custom colour constants.
    pub fn with_colors(on: impl Into<String>, off: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            off: off.into(),
            ..Self::default()
        }
    }

    /// The constant written for `color`.
    pub fn color_token(&self, color: Color) -> &str {
        match color {
            Color::On => &self.on,
            Color::Off => &self.off,
        }
    }

    /// The colour a constant stands for, if any.
    ///
    /// `1` and `0` are accepted alongside the dialect's own names.
    pub fn parse_color(&self, token: &str) -> Option<Color> {
        if token == self.on || token == "1" {
            Some(Color::On)
        } else if token == self.off || token == "0" {
            Some(Color::Off)
        } else {
            None
        }
    }

    /// Appends the source line for `call`, without a trailing newline.
    pub fn write_call(&self, out: &mut String, call: &GfxCall) {
        let kind = call.kind();
        let (args, n) = call.args();
        let _ = write!(out, "{}.{}(", self.target, kind.method());
        // Triangle vertices are packed without spaces.
        let sep = if matches!(kind, CallKind::DrawTriangle | CallKind::FillTriangle) {
            ","
        } else {
            ", "
        };
        for (i, v) in args[..n].iter().enumerate() {
            if i > 0 {
                out.push_str(sep);
            }
            let _ = write!(out, "{v}");
        }
        if let Some(color) = call.color() {
            if n > 0 {
                out.push_str(", ");
            }
            out.push_str(self.color_token(color));
        }
        out.push_str(");");
    }

    /// The source line for `call`.
    pub fn call_line(&self, call: &GfxCall) -> String {
        let mut out = String::new();
        self.write_call(&mut out, call);
        out
    }
}
