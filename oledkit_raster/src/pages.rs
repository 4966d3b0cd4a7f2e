// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SSD1306 page packing.
//!
//! The controller's framebuffer is split into [`PAGES`] horizontal bands of
//! eight rows. Each band stores one byte per column, least significant bit
//! on top, and bands follow each other in memory. A full frame is therefore
//! [`FRAME_BYTES`] bytes long and can be copied straight into the display
//! buffer.

use crate::grid::{FRAME_BYTES, GridError, HEIGHT, PAGES, PixelGrid, Point, WIDTH};

impl PixelGrid {
    /// The byte for column `x` of `page`.
    ///
    /// Bit `b` holds the pixel at `(x, page * 8 + b)`.
    pub fn page_byte(&self, page: usize, x: usize) -> u8 {
        let mut byte = 0_u8;
        for bit in 0..8 {
            let y = page * 8 + bit;
            if y < HEIGHT && x < WIDTH && self.row_bits(y as i32) & (1 << x) != 0 {
                byte |= 1 << bit;
            }
        }
        byte
    }

    /// Packs the grid into page-major framebuffer order.
    pub fn to_pages(&self) -> [u8; FRAME_BYTES] {
        let mut out = [0_u8; FRAME_BYTES];
        for page in 0..PAGES {
            for x in 0..WIDTH {
                out[page * WIDTH + x] = self.page_byte(page, x);
            }
        }
        out
    }

    /// Unpacks a framebuffer produced by [`PixelGrid::to_pages`].
    pub fn from_pages(bytes: &[u8]) -> Result<Self, GridError> {
        if bytes.len() != FRAME_BYTES {
            return Err(GridError::ByteCount { found: bytes.len() });
        }
        let mut grid = Self::new();
        for (i, &byte) in bytes.iter().enumerate() {
            let page = i / WIDTH;
            let x = i % WIDTH;
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    grid.set(Point::new(x as i32, (page * 8 + bit) as i32), true);
                }
            }
        }
        Ok(grid)
    }
}
