//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the HT16K33 over I2C.
//!
//! ## Hardware Requirements
//!
//! The HT16K33 only needs the I2C bus (SDA + SCL). Bus setup, clock speed and
//! pull-ups are the caller's business; the driver just issues writes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use ht16k33_matrix::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockI2c);
//!
//! // Oscillator on
//! let _ = interface.send(0x70, &[0x21]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the HT16K33 controller
///
/// This trait abstracts over different bus implementations, allowing the
/// [`Matrix`](crate::display::Matrix) to work with any I2C implementation
/// or with a recording mock in tests.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself when the bus is shared or proxied.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `bytes` to the device at 7-bit `address` in a single transfer
    ///
    /// # Errors
    ///
    /// Returns an error if the bus is not available or the device does not
    /// acknowledge.
    fn send(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Hardware interface implementation for the HT16K33
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`]
pub struct Interface<I2C> {
    /// I2C bus
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c,
{
    /// Create a new Interface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the underlying I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn send(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(address, bytes)
    }
}
