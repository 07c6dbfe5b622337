//! HT16K33 command definitions
//!
//! This module defines the command bytes used to control the HT16K33 LED
//! driver, plus small pure encoders that combine an opcode with its argument
//! bits. Every command is a single I2C write to the device address; there is
//! no data/command pin and nothing can be read back.
//!
//! ## Command Structure
//!
//! | Register        | Byte        | Argument bits                        |
//! |-----------------|-------------|--------------------------------------|
//! | System setup    | `0010_000S` | S = oscillator on                    |
//! | Display setup   | `1000_0BBD` | BB = blink rate, D = display on      |
//! | Dimming         | `1110_PPPP` | PPPP = brightness 0..=15             |
//! | Display RAM     | `0000_AAAA` | AAAA = start address, data follows   |
//!
//! ## Example
//!
//! ```
//! use ht16k33_matrix::command;
//! use ht16k33_matrix::BlinkRate;
//!
//! assert_eq!(command::brightness(7), 0xE7);
//! assert_eq!(command::display_on(BlinkRate::Hz1), 0x85);
//! assert_eq!(command::row_address(3), 0x06);
//! ```

use crate::config::BlinkRate;
use crate::frame::SIZE;

// System setup

/// System setup register (0x20)
///
/// Bit 0 enables the internal oscillator.
pub const SYSTEM_SETUP: u8 = 0x20;

/// Oscillator enable bit for [`SYSTEM_SETUP`]
pub const OSCILLATOR_ON: u8 = 0x01;

// Display setup

/// Display setup register (0x80)
///
/// Bit 0 turns the display on, bits 1-2 carry the blink rate.
pub const DISPLAY_SETUP: u8 = 0x80;

/// Display-on bit for [`DISPLAY_SETUP`]
pub const DISPLAY_ON: u8 = 0x01;

// Dimming

/// Dimming register (0xE0)
///
/// The low nibble selects one of 16 brightness levels.
pub const DIMMING: u8 = 0xE0;

/// Highest brightness level accepted by [`DIMMING`]
pub const MAX_BRIGHTNESS: u8 = 15;

// Display RAM

/// First display RAM address
///
/// Row `n` lives at address `2 * n`. The odd addresses drive the second
/// common bank, which this backpack does not wire up.
pub const DISPLAY_RAM_START: u8 = 0x00;

/// Display RAM addresses for rows 0..=7
pub const ROW_ADDRESSES: [u8; SIZE] = [0x00, 0x02, 0x04, 0x06, 0x08, 0x0A, 0x0C, 0x0E];

/// Length of a full display RAM write (two bytes per row)
pub const DISPLAY_RAM_LEN: usize = SIZE * 2;

/// Oscillator-on command byte (0x21)
pub const fn oscillator_on() -> u8 {
    SYSTEM_SETUP | OSCILLATOR_ON
}

/// Brightness command byte
///
/// `level` must already be within `0..=15`; higher bits would spill into the
/// opcode.
pub const fn brightness(level: u8) -> u8 {
    DIMMING | level
}

/// Display-on command byte with the blink rate packed into bits 1-2
pub const fn display_on(blink: BlinkRate) -> u8 {
    DISPLAY_SETUP | DISPLAY_ON | (blink.bits() << 1)
}

/// Display-off command byte (0x80)
///
/// Carries no blink bits; the cached rate is re-applied on the next
/// [`display_on`].
pub const fn display_off() -> u8 {
    DISPLAY_SETUP
}

/// Display RAM address of `row`
///
/// `row` must be within `0..=7`.
pub const fn row_address(row: u8) -> u8 {
    ROW_ADDRESSES[row as usize]
}
