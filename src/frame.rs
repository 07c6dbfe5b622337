//! Frame buffer for the 8x8 matrix
//!
//! The [`FrameBuffer`] holds the logical bitmap: one byte per row, row 0 at
//! the top, column 0 in the most significant bit. It never talks to the bus;
//! [`Matrix`](crate::display::Matrix) mutates it and then transmits the
//! affected rows.
//!
//! ## Example
//!
//! ```
//! use ht16k33_matrix::FrameBuffer;
//!
//! let mut frame = FrameBuffer::new();
//! frame.set_pixel(3, 5);
//! assert_eq!(frame.row(3), 0x04);
//!
//! frame.set_column(0, 0b1010_0000);
//! assert_eq!(frame.column(0), 0b1010_0000);
//! assert_eq!(frame.row(0), 0x80);
//! ```
//!
//! All index arguments must be within `0..=SIZE - 1`; the driver validates
//! them before calling in here.

use crate::command::{DISPLAY_RAM_LEN, DISPLAY_RAM_START, row_address};
use crate::rotation::rotate_right;

/// Matrix edge length in pixels (rows and columns)
pub const SIZE: usize = 8;

/// Bit mask selecting `column` within a row byte
pub const fn column_mask(column: u8) -> u8 {
    0x80 >> column
}

/// Logical 8x8 bitmap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: [u8; SIZE],
}

impl FrameBuffer {
    /// Create an all-off frame
    pub const fn new() -> Self {
        Self { rows: [0; SIZE] }
    }

    /// Create a frame from eight row bytes
    pub const fn from_rows(rows: [u8; SIZE]) -> Self {
        Self { rows }
    }

    /// All row bytes, top to bottom
    pub const fn rows(&self) -> &[u8; SIZE] {
        &self.rows
    }

    /// Replace every row
    pub fn set_rows(&mut self, rows: [u8; SIZE]) {
        self.rows = rows;
    }

    /// Turn every pixel off in place
    pub fn clear(&mut self) {
        self.rows.fill(0);
    }

    /// Row byte for `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`SIZE`].
    pub fn row(&self, row: u8) -> u8 {
        self.rows[row as usize]
    }

    /// Replace the byte for `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`SIZE`].
    pub fn set_row(&mut self, row: u8, byte: u8) {
        self.rows[row as usize] = byte;
    }

    /// Whether the pixel at (`row`, `column`) is lit
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below [`SIZE`].
    pub fn pixel(&self, row: u8, column: u8) -> bool {
        self.rows[row as usize] & column_mask(column) != 0
    }

    /// Light the pixel at (`row`, `column`)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below [`SIZE`].
    pub fn set_pixel(&mut self, row: u8, column: u8) {
        self.rows[row as usize] |= column_mask(column);
    }

    /// Turn off the pixel at (`row`, `column`)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not below [`SIZE`].
    pub fn clear_pixel(&mut self, row: u8, column: u8) {
        self.rows[row as usize] &= !column_mask(column);
    }

    /// Read `column` back as a byte, row 0 in the MSB
    pub fn column(&self, column: u8) -> u8 {
        let mask = column_mask(column);
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, byte)| *byte & mask != 0)
            .fold(0, |acc, (row, _)| acc | column_mask(row as u8))
    }

    /// Turn off every pixel in `column`
    pub fn clear_column(&mut self, column: u8) {
        let mask = column_mask(column);
        for byte in &mut self.rows {
            *byte &= !mask;
        }
    }

    /// Write `byte` vertically into `column`
    ///
    /// Bit `k` of `byte` (MSB first) lands in row `k`. Other columns keep
    /// their pixels.
    pub fn set_column(&mut self, column: u8, byte: u8) {
        self.clear_column(column);
        if byte == 0 {
            return;
        }
        let mask = column_mask(column);
        for (row, slot) in self.rows.iter_mut().enumerate() {
            if byte & column_mask(row as u8) != 0 {
                *slot |= mask;
            }
        }
    }

    /// Single-row display RAM write: `[row address, wire byte]`
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below [`SIZE`].
    pub fn row_bytes(&self, row: u8) -> [u8; 2] {
        [row_address(row), rotate_right(self.rows[row as usize])]
    }

    /// Full display RAM write starting at address 0
    ///
    /// The leading byte is the start address. Each rotated row byte is
    /// followed by a zero for the unused odd register.
    pub fn wire_bytes(&self) -> [u8; DISPLAY_RAM_LEN] {
        let mut data = [0u8; DISPLAY_RAM_LEN];
        data[0] = DISPLAY_RAM_START;
        for (row, byte) in self.rows.iter().enumerate() {
            data[row * 2 + 1] = rotate_right(*byte);
        }
        data
    }
}

impl From<[u8; SIZE]> for FrameBuffer {
    fn from(rows: [u8; SIZE]) -> Self {
        Self::from_rows(rows)
    }
}
