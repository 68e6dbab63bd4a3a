use crate::core::actions::render::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::ops::ControlFlow;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration for a single point.
///
/// Iterates `z ← z² + c` from `z = 0` and returns the zero-based index of the
/// first step whose result has `|z|² > 4`. Points that never escape within
/// `max_iterations` steps return `max_iterations`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let outcome = (0..max_iterations).try_fold(Complex::ZERO, |z, iteration| {
        let next = z.square() + c;

        if next.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

/// The kernel bound to one frame: a pixel grid laid over a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: PixelSize,
    region: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.size, self.region);

        escape_iterations(c, self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        size: PixelSize,
        region: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            size,
            region,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
