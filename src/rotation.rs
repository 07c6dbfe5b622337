//! Bit rotation utilities
//!
//! The backpack wires the LED columns to the HT16K33 row outputs shifted by
//! one position, so a logical row byte must be rotated right by one bit
//! before it is written to display RAM.
//!
//! ## Bit Order
//!
//! Logical row bytes are MSB-first: column 0 is `0x80`, column 7 is `0x01`.
//! After rotation column 7 moves to `0x80` and every other column shifts down
//! by one.
//!
//! ## Example
//!
//! ```
//! use ht16k33_matrix::rotation::{rotate_left, rotate_right};
//!
//! // Column 5 (0x04) lands on wire bit 0x02
//! assert_eq!(rotate_right(0x04), 0x02);
//!
//! // Column 7 (0x01) wraps around to 0x80
//! assert_eq!(rotate_right(0x01), 0x80);
//!
//! assert_eq!(rotate_left(rotate_right(0xA5)), 0xA5);
//! ```

/// Rotate a logical row byte into the wire format
///
/// Bit 0 moves to bit 7, every other bit shifts down by one.
pub const fn rotate_right(byte: u8) -> u8 {
    byte.rotate_right(1)
}

/// Rotate a wire byte back into the logical row format
///
/// Inverse of [`rotate_right`].
pub const fn rotate_left(byte: u8) -> u8 {
    byte.rotate_left(1)
}
