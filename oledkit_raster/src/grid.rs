// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed-size monochrome pixel grid.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;

/// Display width in pixels.
pub const WIDTH: usize = 128;
/// Display height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-pixel-tall pages the display is split into.
pub const PAGES: usize = HEIGHT / 8;
/// Size in bytes of one page-packed frame.
pub const FRAME_BYTES: usize = WIDTH * PAGES;

#[expect(clippy::cast_possible_truncation, reason = "WIDTH and HEIGHT are small")]
pub(crate) const WIDTH_I32: i32 = WIDTH as i32;
#[expect(clippy::cast_possible_truncation, reason = "WIDTH and HEIGHT are small")]
pub(crate) const HEIGHT_I32: i32 = HEIGHT as i32;

/// An integer pixel coordinate.
///
/// Points may lie outside the grid; every grid operation clips them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the point addresses a pixel of the grid.
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < WIDTH_I32 && self.y >= 0 && self.y < HEIGHT_I32
    }

    /// Translate by `(dx, dy)`, saturating at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The same point in floating-point geometry.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Round a floating-point position to the nearest pixel, halves away from zero.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "callers sample positions within a few radii of the grid"
    )]
    pub fn from_kurbo(p: kurbo::Point) -> Self {
        let p = p.round();
        Self::new(p.x as i32, p.y as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

bitflags! {
    /// Which of the eight neighbours of a pixel are on.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Neighbors: u8 {
        /// `(x - 1, y)`.
        const WEST = 1 << 0;
        /// `(x + 1, y)`.
        const EAST = 1 << 1;
        /// `(x, y - 1)`.
        const NORTH = 1 << 2;
        /// `(x, y + 1)`.
        const SOUTH = 1 << 3;
        /// `(x - 1, y - 1)`.
        const NORTH_WEST = 1 << 4;
        /// `(x + 1, y - 1)`.
        const NORTH_EAST = 1 << 5;
        /// `(x - 1, y + 1)`.
        const SOUTH_WEST = 1 << 6;
        /// `(x + 1, y + 1)`.
        const SOUTH_EAST = 1 << 7;

        /// The four edge-sharing neighbours.
        const ORTHOGONAL = Self::WEST.bits() | Self::EAST.bits() | Self::NORTH.bits() | Self::SOUTH.bits();
    }
}

impl Neighbors {
    /// Each direction paired with its offset.
    pub const OFFSETS: [(Self, i32, i32); 8] = [
        (Self::WEST, -1, 0),
        (Self::EAST, 1, 0),
        (Self::NORTH, 0, -1),
        (Self::SOUTH, 0, 1),
        (Self::NORTH_WEST, -1, -1),
        (Self::NORTH_EAST, 1, -1),
        (Self::SOUTH_WEST, -1, 1),
        (Self::SOUTH_EAST, 1, 1),
    ];

    /// Number of neighbours that are on.
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

/// Errors raised when building a grid from external data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input did not have [`HEIGHT`] rows.
    RowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// A row did not have [`WIDTH`] columns.
    RowWidth {
        /// Index of the offending row.
        row: usize,
        /// Number of columns supplied.
        found: usize,
    },
    /// A packed frame did not have [`FRAME_BYTES`] bytes.
    ByteCount {
        /// Number of bytes supplied.
        found: usize,
    },
    /// An ASCII-art grid contained a character other than `#` or `.`.
    Glyph {
        /// Row of the character.
        row: usize,
        /// Column of the character.
        column: usize,
        /// The character found.
        found: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCount { found } => {
                write!(f, "expected {HEIGHT} rows, found {found}")
            }
            Self::RowWidth { row, found } => {
                write!(f, "row {row}: expected {WIDTH} columns, found {found}")
            }
            Self::ByteCount { found } => {
                write!(f, "expected {FRAME_BYTES} frame bytes, found {found}")
            }
            Self::Glyph { row, column, found } => {
                write!(f, "row {row}, column {column}: unexpected {found:?}")
            }
        }
    }
}

impl core::error::Error for GridError {}

/// A 128x64 one-bit-per-pixel image; `(0, 0)` is the top-left pixel.
///
/// Each row is stored as a `u128` where bit `x` holds column `x`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    rows: [u128; HEIGHT],
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelGrid")
            .field("on", &self.count_on())
            .finish_non_exhaustive()
    }
}

impl PixelGrid {
    /// An all-off grid.
    pub const fn new() -> Self {
        Self { rows: [0; HEIGHT] }
    }

    /// An all-on grid.
    pub const fn filled() -> Self {
        Self {
            rows: [u128::MAX; HEIGHT],
        }
    }

    /// Rasterizes a visitor-style primitive into a fresh grid.
    ///
    /// ```
    /// use oledkit_raster::{PixelGrid, Point, line};
    ///
    /// let g = PixelGrid::mask(|plot| line(Point::new(0, 0), Point::new(4, 0), plot));
    /// assert_eq!(g.count_on(), 5);
    /// ```
    pub fn mask(draw: impl FnOnce(&mut dyn FnMut(Point))) -> Self {
        let mut grid = Self::new();
        grid.paint(true, draw);
        grid
    }

    /// Runs a visitor-style primitive, setting each visited pixel to `on`.
    pub fn paint(&mut self, on: bool, draw: impl FnOnce(&mut dyn FnMut(Point))) {
        draw(&mut |p| self.set(p, on));
    }

    /// Returns the pixel at `p`; off-grid points read as off.
    #[inline]
    pub fn get(&self, p: Point) -> bool {
        p.in_bounds() && self.rows[p.y as usize] & (1 << p.x) != 0
    }

    /// Sets the pixel at `p`; off-grid points are ignored.
    #[inline]
    pub fn set(&mut self, p: Point, on: bool) {
        if !p.in_bounds() {
            return;
        }
        let bit = 1_u128 << p.x;
        let row = &mut self.rows[p.y as usize];
        if on {
            *row |= bit;
        } else {
            *row &= !bit;
        }
    }

    /// Flips the pixel at `p` and returns its new value.
    ///
    /// Off-grid points are left alone and report `false`.
    pub fn toggle(&mut self, p: Point) -> bool {
        let next = !self.get(p);
        self.set(p, next);
        next && p.in_bounds()
    }

    /// Sets every pixel to `on`.
    pub fn fill(&mut self, on: bool) {
        self.rows = [if on { u128::MAX } else { 0 }; HEIGHT];
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Flips every pixel.
    pub fn invert(&mut self) {
        for row in &mut self.rows {
            *row = !*row;
        }
    }

    /// The packed bits of row `y` (bit `x` is column `x`), or zero off-grid.
    pub fn row_bits(&self, y: i32) -> u128 {
        if (0..HEIGHT_I32).contains(&y) {
            self.rows[y as usize]
        } else {
            0
        }
    }

    /// Number of pixels that are on.
    pub fn count_on(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    /// Returns `true` when no pixel is on.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    /// Iterates the on pixels, top-to-bottom then left-to-right.
    pub fn iter_on(&self) -> impl Iterator<Item = Point> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, &row)| {
            (0..WIDTH)
                .filter(move |&x| row & (1 << x) != 0)
                .map(move |x| Point::new(x as i32, y as i32))
        })
    }

    /// Turns on every pixel that is on in `other`.
    pub fn union_with(&mut self, other: &Self) {
        for (row, o) in self.rows.iter_mut().zip(other.rows.iter()) {
            *row |= *o;
        }
    }

    /// Returns `true` if every on pixel of `mask` is also on here.
    pub fn covers(&self, mask: &Self) -> bool {
        self.rows
            .iter()
            .zip(mask.rows.iter())
            .all(|(row, m)| row & m == *m)
    }

    /// Turns off every pixel that is on in `mask`.
    pub fn erase(&mut self, mask: &Self) {
        for (row, m) in self.rows.iter_mut().zip(mask.rows.iter()) {
            *row &= !*m;
        }
    }

    /// Reports which neighbours of `p` are on.
    pub fn neighbors(&self, p: Point) -> Neighbors {
        let mut out = Neighbors::empty();
        for (dir, dx, dy) in Neighbors::OFFSETS {
            if self.get(p.offset(dx, dy)) {
                out |= dir;
            }
        }
        out
    }

    /// Length of the run of on pixels starting at `p` and going right.
    pub fn run_right(&self, p: Point) -> i32 {
        if !p.in_bounds() {
            return 0;
        }
        let shifted = self.rows[p.y as usize] >> p.x;
        (shifted.trailing_ones() as i32).min(WIDTH_I32 - p.x)
    }

    /// Length of the run of on pixels starting at `p` and going down.
    pub fn run_down(&self, p: Point) -> i32 {
        let mut n = 0;
        while self.get(p.offset(0, n)) {
            n += 1;
        }
        n
    }

    /// Builds a grid from a row-major boolean matrix.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        if rows.len() != HEIGHT {
            return Err(GridError::RowCount { found: rows.len() });
        }
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != WIDTH {
                return Err(GridError::RowWidth {
                    row: y,
                    found: row.len(),
                });
            }
            for (x, &on) in row.iter().enumerate() {
                if on {
                    grid.rows[y] |= 1 << x;
                }
            }
        }
        Ok(grid)
    }

    /// The grid as a row-major boolean matrix.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|&row| (0..WIDTH).map(|x| row & (1 << x) != 0).collect())
            .collect()
    }

    /// Parses ASCII art where `#` is on and `.` is off.
    ///
    /// Missing trailing rows and columns are treated as off, so small
    /// sketches anchored at the origin are accepted. Blank lines are skipped.
    pub fn from_ascii(art: &str) -> Result<Self, GridError> {
        let mut grid = Self::new();
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() > HEIGHT {
            return Err(GridError::RowCount { found: lines.len() });
        }
        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width > WIDTH {
                return Err(GridError::RowWidth {
                    row: y,
                    found: width,
                });
            }
            for (x, c) in line.chars().enumerate() {
                match c {
                    '#' => grid.rows[y] |= 1 << x,
                    '.' => {}
                    found => {
                        return Err(GridError::Glyph {
                            row: y,
                            column: x,
                            found,
                        });
                    }
                }
            }
        }
        Ok(grid)
    }

    /// Renders the grid as [`HEIGHT`] lines of `#`/`.` art.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for &row in &self.rows {
            for x in 0..WIDTH {
                out.push(if row & (1 << x) != 0 { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::PixelGrid;
    use alloc::string::String;
    use alloc::vec::Vec;

    impl serde::Serialize for PixelGrid {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let ascii = self.to_ascii();
            let lines: Vec<&str> = ascii.lines().collect();
            lines.serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for PixelGrid {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let lines = Vec::<String>::deserialize(deserializer)?;
            let mut art = String::new();
            for line in &lines {
                art.push_str(line);
                art.push('\n');
            }
            Self::from_ascii(&art).map_err(serde::de::Error::custom)
        }
    }
}
