use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// An axis-aligned rectangle on the complex plane.
///
/// `top_left` holds the minimum real and imaginary parts. Pixel row 0 maps
/// onto the minimum imaginary part, so "top" follows screen orientation
/// rather than the usual mathematical one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // `!(x > 0.0)` also rejects NaN spans
        if !(width > 0.0) || !(height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(min_x, min_y), Complex::new(max_x, max_y))
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            (self.top_left.real + self.bottom_right.real) / 2.0,
            (self.top_left.imag + self.bottom_right.imag) / 2.0,
        )
    }
}
