//! Core display operations

use log::{debug, trace};

use crate::command::{self, MAX_BRIGHTNESS};
use crate::config::{BlinkRate, Config};
use crate::error::Error;
use crate::frame::{FrameBuffer, SIZE};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Shadow of the device's display setup register
///
/// The HT16K33 cannot be read back, so the driver remembers what it last
/// sent. `on()` always re-encodes from both fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceState {
    /// Whether the display output is enabled
    pub is_on: bool,
    /// Cached blink rate, applied whenever the display is on
    pub blink_rate: BlinkRate,
    /// Last brightness level sent
    pub brightness: u8,
}

/// Core display driver for an HT16K33 8x8 matrix backpack
///
/// Every mutating operation updates the frame buffer, then writes the
/// affected display RAM before returning. Row and pixel operations send only
/// their row; column and whole-frame operations resend all eight rows.
pub struct Matrix<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Logical bitmap
    frame: FrameBuffer,
    /// Device register shadow
    state: DeviceState,
}

impl<I> Matrix<I>
where
    I: DisplayInterface,
{
    /// Create a new Matrix instance
    ///
    /// Nothing is sent until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            state: DeviceState {
                is_on: false,
                blink_rate: config.blink_rate,
                brightness: config.brightness,
            },
            config,
            frame: FrameBuffer::new(),
        }
    }

    /// Create a Matrix at the default address and full brightness
    pub fn with_defaults(interface: I) -> Self {
        Self::new(interface, Config::default())
    }

    /// Bring the controller up
    ///
    /// Enables the oscillator, applies the configured brightness, clears the
    /// display RAM and turns the display on with the configured blink rate.
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use embedded_hal::i2c::{I2c, Operation};
    /// use ht16k33_matrix::{Builder, Interface, Matrix};
    /// # use core::convert::Infallible;
    /// # struct MockI2c;
    /// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
    /// # impl I2c for MockI2c {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _address: u8,
    /// #         _operations: &mut [Operation<'_>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// let config = match Builder::new().brightness(8).build() {
    ///     Ok(config) => config,
    ///     Err(_) => return,
    /// };
    /// let mut matrix = Matrix::new(Interface::new(MockI2c), config);
    /// if matrix.init().is_err() {
    ///     return;
    /// }
    /// let _ = matrix.set_pixel(7, 6);
    /// ```
    pub fn init(&mut self) -> DisplayResult<I> {
        debug!(
            "ht16k33: init at {:#04x}, brightness {}, blink {:?}",
            self.config.address, self.config.brightness, self.config.blink_rate
        );
        self.send(&[command::oscillator_on()])?;
        self.set_brightness(self.config.brightness)?;
        self.clear()?;
        self.on()
    }

    /// Turn the display on with the cached blink rate
    pub fn on(&mut self) -> DisplayResult<I> {
        self.state.is_on = true;
        debug!("ht16k33: display on, blink {:?}", self.state.blink_rate);
        self.send(&[command::display_on(self.state.blink_rate)])
    }

    /// Turn the display off
    ///
    /// The frame buffer, brightness and blink rate can still be changed
    /// while off; they show up on the next [`on`](Self::on).
    pub fn off(&mut self) -> DisplayResult<I> {
        self.state.is_on = false;
        debug!("ht16k33: display off");
        self.send(&[command::display_off()])
    }

    /// Set brightness, 0 (dimmest, not off) to 15
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBrightness` if `level` is above 15.
    pub fn set_brightness(&mut self, level: u8) -> DisplayResult<I> {
        if level > MAX_BRIGHTNESS {
            return Err(Error::InvalidBrightness(level));
        }
        self.state.brightness = level;
        debug!("ht16k33: brightness {}", level);
        self.send(&[command::brightness(level)])
    }

    /// Set the blink mode from its raw value
    ///
    /// * 0 - blinking off
    /// * 1 - 2 Hz
    /// * 2 - 1 Hz
    /// * 3 - 0.5 Hz
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBlinkRate` if `mode` is above 3.
    pub fn set_blinking(&mut self, mode: u8) -> DisplayResult<I> {
        let rate = BlinkRate::from_bits(mode).ok_or(Error::InvalidBlinkRate(mode))?;
        self.set_blink_rate(rate)
    }

    /// Set the blink rate
    ///
    /// Applied immediately when the display is on. When it is off the rate
    /// is only cached and takes effect at the next [`on`](Self::on).
    pub fn set_blink_rate(&mut self, rate: BlinkRate) -> DisplayResult<I> {
        self.state.blink_rate = rate;
        if self.state.is_on {
            self.on()
        } else {
            debug!("ht16k33: blink {:?} latched until display on", rate);
            Ok(())
        }
    }

    /// Show a bitmap, one byte per row
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBitmapLength` unless `bitmap` is exactly 8 bytes.
    pub fn set(&mut self, bitmap: &[u8]) -> DisplayResult<I> {
        let rows: [u8; SIZE] = bitmap
            .try_into()
            .map_err(|_| Error::InvalidBitmapLength {
                expected: SIZE,
                provided: bitmap.len(),
            })?;
        self.set_frame(rows)
    }

    /// Show a bitmap, one byte per row
    pub fn set_frame(&mut self, rows: [u8; SIZE]) -> DisplayResult<I> {
        self.frame.set_rows(rows);
        self.flush()
    }

    /// Turn every LED off
    pub fn clear(&mut self) -> DisplayResult<I> {
        self.frame.clear();
        self.flush()
    }

    /// Replace a whole row
    pub fn set_row(&mut self, row: u8, byte: u8) -> DisplayResult<I> {
        Self::check_row(row)?;
        self.frame.set_row(row, byte);
        self.send_row(row)
    }

    /// Turn off a whole row
    pub fn clear_row(&mut self, row: u8) -> DisplayResult<I> {
        self.set_row(row, 0)
    }

    /// Write `byte` vertically into `column`, row 0 from the MSB
    pub fn set_column(&mut self, column: u8, byte: u8) -> DisplayResult<I> {
        Self::check_column(column)?;
        self.frame.set_column(column, byte);
        self.flush()
    }

    /// Turn off a whole column
    pub fn clear_column(&mut self, column: u8) -> DisplayResult<I> {
        Self::check_column(column)?;
        self.frame.clear_column(column);
        self.flush()
    }

    /// Turn on the LED at (`row`, `column`)
    pub fn set_pixel(&mut self, row: u8, column: u8) -> DisplayResult<I> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        self.frame.set_pixel(row, column);
        self.send_row(row)
    }

    /// Turn off the LED at (`row`, `column`)
    pub fn clear_pixel(&mut self, row: u8, column: u8) -> DisplayResult<I> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        self.frame.clear_pixel(row, column);
        self.send_row(row)
    }

    /// Resend the whole frame buffer
    ///
    /// Useful after a failed write left the device out of sync, or after
    /// drawing into [`frame_mut`](Self::frame_mut).
    pub fn flush(&mut self) -> DisplayResult<I> {
        let data = self.frame.wire_bytes();
        trace!("ht16k33: write frame {:02x?}", self.frame.rows());
        self.send(&data)
    }

    /// Row byte currently held for `row`
    pub fn row(&self, row: u8) -> Result<u8, Error<I>> {
        Self::check_row(row)?;
        Ok(self.frame.row(row))
    }

    /// Column `column` read back as a byte, row 0 in the MSB
    pub fn column(&self, column: u8) -> Result<u8, Error<I>> {
        Self::check_column(column)?;
        Ok(self.frame.column(column))
    }

    /// Whether the LED at (`row`, `column`) is on in the frame buffer
    pub fn pixel(&self, row: u8, column: u8) -> Result<bool, Error<I>> {
        Self::check_row(row)?;
        Self::check_column(column)?;
        Ok(self.frame.pixel(row, column))
    }

    /// All row bytes, top to bottom
    pub fn buffer(&self) -> &[u8; SIZE] {
        self.frame.rows()
    }

    /// The frame buffer
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// The frame buffer, for batched edits followed by [`flush`](Self::flush)
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Whether the display was last turned on
    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Cached blink rate
    pub fn blink_rate(&self) -> BlinkRate {
        self.state.blink_rate
    }

    /// Last brightness level sent
    pub fn brightness(&self) -> u8 {
        self.state.brightness
    }

    /// Shadow of the device registers
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// I2C address of the controller
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and hand back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn send_row(&mut self, row: u8) -> DisplayResult<I> {
        let data = self.frame.row_bytes(row);
        trace!("ht16k33: write row {} = {:#04x}", row, self.frame.row(row));
        self.send(&data)
    }

    fn send(&mut self, bytes: &[u8]) -> DisplayResult<I> {
        self.interface
            .send(self.config.address, bytes)
            .map_err(Error::Interface)
    }

    fn check_row(row: u8) -> DisplayResult<I> {
        if usize::from(row) < SIZE {
            Ok(())
        } else {
            Err(Error::InvalidRow(row))
        }
    }

    fn check_column(column: u8) -> DisplayResult<I> {
        if usize::from(column) < SIZE {
            Ok(())
        } else {
            Err(Error::InvalidColumn(column))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::rotation::rotate_right;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl MockInterface {
        fn last(&self) -> &[u8] {
            self.writes
                .last()
                .map(|(_, bytes)| bytes.as_slice())
                .unwrap_or_default()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            self.writes.push((address, bytes.to_vec()));
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    struct BusError;

    #[derive(Debug)]
    struct FailingInterface;

    impl DisplayInterface for FailingInterface {
        type Error = BusError;

        fn send(&mut self, _address: u8, _bytes: &[u8]) -> Result<(), Self::Error> {
            Err(BusError)
        }
    }

    fn test_matrix() -> Matrix<MockInterface> {
        let mut matrix = Matrix::with_defaults(MockInterface::default());
        matrix.init().unwrap();
        matrix.interface.writes.clear();
        matrix
    }

    #[test]
    fn test_init_sequence() {
        let config = Builder::new().address(0x71).brightness(3).build().unwrap();
        let mut matrix = Matrix::new(MockInterface::default(), config);
        matrix.init().unwrap();

        let writes = &matrix.interface.writes;
        assert_eq!(writes.len(), 4);
        assert!(writes.iter().all(|(address, _)| *address == 0x71));
        assert_eq!(writes[0].1, [0x21]);
        assert_eq!(writes[1].1, [0xE3]);
        assert_eq!(writes[2].1, [0u8; 16]);
        assert_eq!(writes[3].1, [0x81]);
        assert!(matrix.is_on());
        assert_eq!(matrix.blink_rate(), BlinkRate::Off);
        assert_eq!(matrix.brightness(), 3);
    }

    #[test]
    fn test_init_applies_configured_blink_rate() {
        let config = Builder::new().blink_rate(BlinkRate::HalfHz).build().unwrap();
        let mut matrix = Matrix::new(MockInterface::default(), config);
        matrix.init().unwrap();
        assert_eq!(matrix.interface.last(), [0x87]);
    }

    #[test]
    fn test_new_sends_nothing() {
        let matrix = Matrix::with_defaults(MockInterface::default());
        assert!(matrix.interface.writes.is_empty());
        assert!(!matrix.is_on());
        assert_eq!(matrix.address(), 0x70);
    }

    #[test]
    fn test_set_row_sends_single_rotated_row() {
        let mut matrix = test_matrix();
        for row in 0..SIZE as u8 {
            matrix.set_row(row, 0x35).unwrap();
            assert_eq!(matrix.row(row).unwrap(), 0x35);
            assert_eq!(matrix.interface.last(), [row * 2, rotate_right(0x35)]);
        }
        assert_eq!(matrix.interface.writes.len(), SIZE);
    }

    #[test]
    fn test_clear_row() {
        let mut matrix = test_matrix();
        matrix.set_row(4, 0xFF).unwrap();
        matrix.clear_row(4).unwrap();
        assert_eq!(matrix.row(4).unwrap(), 0x00);
        assert_eq!(matrix.interface.last(), [0x08, 0x00]);
    }

    #[test]
    fn test_set_pixel_on_cleared_buffer() {
        let mut matrix = test_matrix();
        matrix.set_pixel(3, 5).unwrap();
        assert_eq!(matrix.buffer()[3], 0x04);
        assert_eq!(matrix.interface.last(), [0x06, 0x02]);
        assert!(matrix.pixel(3, 5).unwrap());
    }

    #[test]
    fn test_clear_pixel() {
        let mut matrix = test_matrix();
        matrix.set_row(0, 0xFF).unwrap();
        matrix.clear_pixel(0, 0).unwrap();
        assert_eq!(matrix.row(0).unwrap(), 0x7F);
        assert_eq!(matrix.interface.last(), [0x00, rotate_right(0x7F)]);
    }

    #[test]
    fn test_set_column_flushes_whole_frame() {
        let mut matrix = test_matrix();
        matrix.set_column(6, 0xFF).unwrap();
        assert_eq!(matrix.interface.writes.len(), 1);

        let data = matrix.interface.last();
        assert_eq!(data.len(), 16);
        for row in 0..SIZE {
            assert_eq!(data[row * 2 + 1], rotate_right(0x02));
        }
        assert_eq!(matrix.column(6).unwrap(), 0xFF);
    }

    #[test]
    fn test_clear_column_leaves_other_columns() {
        let mut matrix = test_matrix();
        matrix.set_frame([0x5A; SIZE]).unwrap();
        matrix.set_column(1, 0xFF).unwrap();
        matrix.clear_column(1).unwrap();
        assert_eq!(matrix.buffer(), &[0x1A; SIZE]);
        assert_eq!(matrix.column(1).unwrap(), 0x00);
    }

    #[test]
    fn test_set_transmits_rotated_rows() {
        let mut matrix = test_matrix();
        matrix
            .set(b"\xFF\x00\xFF\x00\xFF\x00\xFF\x00")
            .unwrap();

        let data = matrix.interface.last();
        assert_eq!(data.len(), 16);
        for row in 0..SIZE {
            let expected = if row % 2 == 0 { 0xFF } else { 0x00 };
            assert_eq!(data[row * 2 + 1], expected);
        }
    }

    #[test]
    fn test_set_rejects_wrong_length() {
        let mut matrix = test_matrix();
        let result = matrix.set(&[0xFF; 7]);
        assert!(matches!(
            result,
            Err(Error::InvalidBitmapLength {
                expected: 8,
                provided: 7
            })
        ));
        assert!(matrix.interface.writes.is_empty());
        assert_eq!(matrix.buffer(), &[0u8; SIZE]);
    }

    #[test]
    fn test_clear_sends_single_zero_frame() {
        let mut matrix = test_matrix();
        matrix.set_frame([0xFF; SIZE]).unwrap();
        matrix.interface.writes.clear();

        matrix.clear().unwrap();
        assert_eq!(matrix.buffer(), &[0u8; SIZE]);
        assert_eq!(matrix.interface.writes.len(), 1);
        assert_eq!(matrix.interface.last(), [0u8; 16]);
    }

    #[test]
    fn test_off_then_on_reproduces_initial_command() {
        let mut matrix = test_matrix();
        matrix.off().unwrap();
        assert_eq!(matrix.interface.last(), [0x80]);
        assert!(!matrix.is_on());

        matrix.on().unwrap();
        assert_eq!(matrix.interface.last(), [0x81]);
        assert!(matrix.is_on());
    }

    #[test]
    fn test_blinking_latched_while_off() {
        let mut matrix = test_matrix();
        matrix.off().unwrap();
        matrix.interface.writes.clear();

        matrix.set_blinking(2).unwrap();
        assert!(matrix.interface.writes.is_empty());
        assert_eq!(matrix.blink_rate(), BlinkRate::Hz1);

        matrix.on().unwrap();
        assert_eq!(matrix.interface.last(), [0x85]);
    }

    #[test]
    fn test_blinking_applied_while_on() {
        let mut matrix = test_matrix();
        matrix.set_blinking(1).unwrap();
        assert_eq!(matrix.interface.last(), [0x83]);

        matrix.set_blink_rate(BlinkRate::Off).unwrap();
        assert_eq!(matrix.interface.last(), [0x81]);
    }

    #[test]
    fn test_off_keeps_blink_rate() {
        let mut matrix = test_matrix();
        matrix.set_blink_rate(BlinkRate::HalfHz).unwrap();
        matrix.off().unwrap();
        assert_eq!(matrix.interface.last(), [0x80]);
        matrix.on().unwrap();
        assert_eq!(matrix.interface.last(), [0x87]);
    }

    #[test]
    fn test_set_brightness() {
        let mut matrix = test_matrix();
        matrix.set_brightness(0).unwrap();
        assert_eq!(matrix.interface.last(), [0xE0]);
        matrix.set_brightness(15).unwrap();
        assert_eq!(matrix.interface.last(), [0xEF]);
        assert_eq!(matrix.brightness(), 15);
    }

    #[test]
    fn test_invalid_arguments_send_nothing() {
        let mut matrix = test_matrix();
        assert!(matches!(matrix.set_brightness(16), Err(Error::InvalidBrightness(16))));
        assert!(matches!(matrix.set_blinking(4), Err(Error::InvalidBlinkRate(4))));
        assert!(matches!(matrix.set_row(8, 0xFF), Err(Error::InvalidRow(8))));
        assert!(matches!(matrix.set_column(8, 0xFF), Err(Error::InvalidColumn(8))));
        assert!(matches!(matrix.clear_column(9), Err(Error::InvalidColumn(9))));
        assert!(matches!(matrix.set_pixel(0, 8), Err(Error::InvalidColumn(8))));
        assert!(matches!(matrix.clear_pixel(8, 0), Err(Error::InvalidRow(8))));
        assert!(matches!(matrix.pixel(0, 200), Err(Error::InvalidColumn(200))));
        assert!(matrix.interface.writes.is_empty());
        assert_eq!(matrix.brightness(), 15);
        assert_eq!(matrix.blink_rate(), BlinkRate::Off);
    }

    #[test]
    fn test_interface_error_propagates() {
        let mut matrix = Matrix::with_defaults(FailingInterface);
        assert!(matches!(matrix.init(), Err(Error::Interface(BusError))));
        assert!(matches!(matrix.set_pixel(1, 1), Err(Error::Interface(BusError))));
        // Buffer keeps the edit; the next successful write resyncs the device
        assert_eq!(matrix.row(1).unwrap(), 0x40);
    }

    #[test]
    fn test_frame_mut_then_flush() {
        let mut matrix = test_matrix();
        matrix.frame_mut().set_pixel(0, 7);
        matrix.frame_mut().set_pixel(7, 0);
        assert!(matrix.interface.writes.is_empty());

        matrix.flush().unwrap();
        let data = matrix.interface.last();
        assert_eq!(data[1], rotate_right(0x01));
        assert_eq!(data[15], rotate_right(0x80));
    }

    #[test]
    fn test_release_returns_interface() {
        let mut matrix = test_matrix();
        matrix.set_row(0, 1).unwrap();
        let interface = matrix.release();
        assert_eq!(interface.writes.len(), 1);
    }
}
