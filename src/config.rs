//! Display configuration types and builder

use crate::command::MAX_BRIGHTNESS;
pub use crate::error::BuilderError;

/// Default I2C address of the backpack (no address jumpers bridged)
pub const DEFAULT_ADDRESS: u8 = 0x70;

/// Lowest address selectable with the backpack jumpers
pub const MIN_ADDRESS: u8 = 0x70;

/// Highest address selectable with the backpack jumpers
pub const MAX_ADDRESS: u8 = 0x77;

/// Display blink rate
///
/// Packed into bits 1-2 of the display setup command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkRate {
    /// No blinking
    #[default]
    Off = 0,
    /// Blink at 2 Hz
    Hz2 = 1,
    /// Blink at 1 Hz
    Hz1 = 2,
    /// Blink at 0.5 Hz
    HalfHz = 3,
}

impl BlinkRate {
    /// Map a raw mode (0..=3) to a blink rate
    pub const fn from_bits(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(Self::Off),
            1 => Some(Self::Hz2),
            2 => Some(Self::Hz1),
            3 => Some(Self::HalfHz),
            _ => None,
        }
    }

    /// Raw mode value (0..=3)
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// 7-bit I2C address of the HT16K33
    pub address: u8,
    /// Brightness applied during initialization (0..=15)
    pub brightness: u8,
    /// Blink rate applied when the display is first turned on
    pub blink_rate: BlinkRate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            brightness: MAX_BRIGHTNESS,
            blink_rate: BlinkRate::Off,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ht16k33_matrix::{BlinkRate, Builder};
///
/// let config = match Builder::new().address(0x71).brightness(4).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.address, 0x71);
/// assert_eq!(config.blink_rate, BlinkRate::Off);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the I2C address (0x70..=0x77)
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Set the initial brightness (0..=15)
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Set the initial blink rate
    pub fn blink_rate(mut self, blink_rate: BlinkRate) -> Self {
        self.config.blink_rate = blink_rate;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address is outside
    /// 0x70..=0x77, or `BuilderError::InvalidBrightness` if brightness is
    /// above 15.
    pub fn build(self) -> Result<Config, BuilderError> {
        let Config {
            address,
            brightness,
            ..
        } = self.config;
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
            return Err(BuilderError::InvalidAddress(address));
        }
        if brightness > MAX_BRIGHTNESS {
            return Err(BuilderError::InvalidBrightness(brightness));
        }
        Ok(self.config)
    }
}
