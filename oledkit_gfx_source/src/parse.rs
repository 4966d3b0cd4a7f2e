// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use oledkit_gfx::{CallKind, Color, GfxCall};

use crate::dialect::Dialect;

/// The ways a source line can fail to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line is not `<target>.<method>(<args>);`.
    Syntax,
    /// The receiver differs from the dialect's target.
    Target(String),
    /// The method is not a known GFX call.
    UnknownMethod(String),
    /// Wrong number of arguments for the method.
    Arity {
        /// Arguments the method takes, colour included.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },
    /// A coordinate was not an integer.
    Integer(String),
    /// The colour argument was not a known constant.
    Color(String),
}

/// A source line that could not be turned into a [`GfxCall`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCallError {
    /// One-based line number within the listing.
    pub line: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl fmt::Display for ParseCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::Syntax => f.write_str("expected `<target>.<method>(<args>);`"),
            ParseErrorKind::Target(t) => write!(f, "unexpected receiver {t:?}"),
            ParseErrorKind::UnknownMethod(m) => write!(f, "unknown method {m:?}"),
            ParseErrorKind::Arity { expected, found } => {
                write!(f, "expected {expected} arguments, found {found}")
            }
            ParseErrorKind::Integer(s) => write!(f, "expected an integer, found {s:?}"),
            ParseErrorKind::Color(s) => write!(f, "unknown colour {s:?}"),
        }
    }
}

impl core::error::Error for ParseCallError {}

/// Parses one source line into a call.
///
/// Surrounding whitespace and the trailing `;` are optional. Errors report
/// line 1.
pub fn parse_line(line: &str, dialect: &Dialect) -> Result<GfxCall, ParseCallError> {
    parse_numbered(line, 1, dialect)
}

/// Parses a listing, one call per line.
///
/// Blank lines and `//` comment lines are skipped.
pub fn parse_listing(text: &str, dialect: &Dialect) -> Result<Vec<GfxCall>, ParseCallError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with("//")
        })
        .map(|(i, l)| parse_numbered(l, i + 1, dialect))
        .collect()
}

fn parse_numbered(line: &str, number: usize, dialect: &Dialect) -> Result<GfxCall, ParseCallError> {
    let err = |kind| ParseCallError { line: number, kind };
    let body = line.trim();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();
    let (head, rest) = body.split_once('(').ok_or(err(ParseErrorKind::Syntax))?;
    let args = rest.strip_suffix(')').ok_or(err(ParseErrorKind::Syntax))?;
    let (target, method) = head.trim().rsplit_once('.').ok_or(err(ParseErrorKind::Syntax))?;
    if target != dialect.target {
        return Err(err(ParseErrorKind::Target(target.to_string())));
    }
    let kind = CallKind::from_method(method)
        .ok_or_else(|| err(ParseErrorKind::UnknownMethod(method.to_string())))?;

    let tokens: Vec<&str> = if args.trim().is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::trim).collect()
    };
    let expected = kind.arity() + usize::from(kind.has_color());
    if tokens.len() != expected {
        return Err(err(ParseErrorKind::Arity {
            expected,
            found: tokens.len(),
        }));
    }

    let (ints, color) = if kind.has_color() {
        let (last, ints) = tokens.split_last().ok_or(err(ParseErrorKind::Syntax))?;
        let color = dialect
            .parse_color(last)
            .ok_or_else(|| err(ParseErrorKind::Color((*last).to_string())))?;
        (ints, color)
    } else {
        (&tokens[..], Color::default())
    };
    let values = ints
        .iter()
        .map(|t| {
            t.parse::<i32>()
                .map_err(|_| err(ParseErrorKind::Integer((*t).to_string())))
        })
        .collect::<Result<Vec<_>, _>>()?;
    GfxCall::from_args(kind, &values, color).ok_or(err(ParseErrorKind::Syntax))
}
