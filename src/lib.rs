//! HT16K33 8x8 LED Matrix Driver
//!
//! A driver for 8x8 LED matrices mounted on an HT16K33 I2C backpack.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 I2C support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Row and pixel updates that only rewrite the affected row
//! - Brightness (16 levels) and hardware blinking
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ht16k33_matrix::{Builder, Interface, Matrix};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = Interface::new(i2c);
//! let config = match Builder::new().address(0x70).brightness(15).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Matrix::new(interface, config);
//! let _ = display.init();
//!
//! let _ = display.set(&[0xFF; 8]); // turn on all LEDs
//! let _ = display.clear(); // turn off all LEDs
//! let _ = display.set_row(2, 0xFF); // turn on all LEDs in row 2
//! let _ = display.set_column(3, 0xFF); // turn on all LEDs in column 3
//! let _ = display.set_pixel(7, 6); // turn on LED at row 7, column 6
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// HT16K33 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Frame buffer and row/column/pixel manipulation
pub mod frame;
/// Hardware interface abstraction
pub mod interface;
/// Bit rotation between logical rows and display RAM
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use config::{BlinkRate, Builder, Config, DEFAULT_ADDRESS, MAX_ADDRESS, MIN_ADDRESS};
pub use display::{DeviceState, Matrix};
pub use error::{BuilderError, Error};
pub use frame::{FrameBuffer, SIZE};
pub use interface::{DisplayInterface, Interface};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
