//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Matrix`]
//! and implements the [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! Drawing only touches the frame buffer. Call [`GraphicDisplay::update`] to
//! push the result to the LEDs in one write. `x` maps to the column and `y`
//! to the row, with (0, 0) at the top left.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use ht16k33_matrix::{GraphicDisplay, Interface, Matrix};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
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
//! let mut matrix = Matrix::with_defaults(Interface::new(MockI2c));
//! if matrix.init().is_err() {
//!     return;
//! }
//! let mut display = GraphicDisplay::new(matrix);
//!
//! // Diagonal from top left to bottom right
//! let _ = Line::new(Point::new(0, 0), Point::new(7, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.update();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Matrix;
use crate::error::Error;
use crate::frame::SIZE;
use crate::interface::DisplayInterface;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

/// Matrix with embedded-graphics support
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
pub struct GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// The underlying display driver
    matrix: Matrix<I>,
}

impl<I> GraphicDisplay<I>
where
    I: DisplayInterface,
{
    /// Create a new GraphicDisplay
    pub fn new(matrix: Matrix<I>) -> Self {
        Self { matrix }
    }

    /// Fill the frame buffer with one color
    ///
    /// Like drawing, this does not transmit anything.
    pub fn fill(&mut self, color: BinaryColor) {
        let byte = match color {
            BinaryColor::Off => 0x00,
            BinaryColor::On => 0xFF,
        };
        self.matrix.frame_mut().set_rows([byte; SIZE]);
    }

    /// Send the frame buffer to the display
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if there's a communication error.
    pub fn update(&mut self) -> GraphicsResult<I> {
        self.matrix.flush()
    }

    /// Access the underlying Matrix
    pub fn matrix(&self) -> &Matrix<I> {
        &self.matrix
    }

    /// Access the underlying Matrix mutably
    ///
    /// Row, column and pixel calls made through here transmit immediately.
    pub fn matrix_mut(&mut self) -> &mut Matrix<I> {
        &mut self.matrix
    }

    /// Unwrap the Matrix
    pub fn into_inner(self) -> Matrix<I> {
        self.matrix
    }
}

impl<I> DrawTarget for GraphicDisplay<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let frame = self.matrix.frame_mut();

        for Pixel(Point { x, y }, color) in pixels {
            let (Ok(column), Ok(row)) = (u8::try_from(x), u8::try_from(y)) else {
                continue;
            };
            if usize::from(column) >= SIZE || usize::from(row) >= SIZE {
                continue;
            }

            match color {
                BinaryColor::On => frame.set_pixel(row, column),
                BinaryColor::Off => frame.clear_pixel(row, column),
            }
        }

        Ok(())
    }
}

impl<I> OriginDimensions for GraphicDisplay<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(SIZE as u32, SIZE as u32)
    }
}
