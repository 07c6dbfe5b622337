//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! Arguments are validated before the frame buffer is touched, so a rejected
//! call leaves the driver state unchanged. Bus errors are returned as-is and
//! never retried.
//!
//! ## Example
//!
//! ```
//! use ht16k33_matrix::{Builder, BuilderError};
//!
//! let result = Builder::new().brightness(20).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness(20))));
//! ```

use crate::config::{MAX_ADDRESS, MIN_ADDRESS};
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Row index outside 0..=7
    InvalidRow(u8),
    /// Column index outside 0..=7
    InvalidColumn(u8),
    /// Brightness outside 0..=15
    InvalidBrightness(u8),
    /// Blink mode outside 0..=3
    InvalidBlinkRate(u8),
    /// Bitmap is not exactly one byte per row
    InvalidBitmapLength {
        /// Required bitmap length in bytes
        expected: usize,
        /// Provided bitmap length in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidRow(row) => write!(f, "Invalid row: {row} (expected 0..=7)"),
            Self::InvalidColumn(column) => {
                write!(f, "Invalid column: {column} (expected 0..=7)")
            }
            Self::InvalidBrightness(level) => {
                write!(f, "Invalid brightness: {level} (expected 0..=15)")
            }
            Self::InvalidBlinkRate(mode) => {
                write!(f, "Invalid blink mode: {mode} (expected 0..=3)")
            }
            Self::InvalidBitmapLength { expected, provided } => {
                write!(
                    f,
                    "Invalid bitmap length: expected {expected} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Address is not one the HT16K33 answers on
    InvalidAddress(u8),
    /// Initial brightness outside 0..=15
    InvalidBrightness(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address {address:#04x} (expected {MIN_ADDRESS:#04x}..={MAX_ADDRESS:#04x})"
            ),
            Self::InvalidBrightness(level) => {
                write!(f, "Invalid brightness {level} (expected 0..=15)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
