use std::time::Duration;

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

/// A finished frame. The buffer is complete and now belongs to whoever
/// receives it.
#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub region: ComplexRect,
    pub colour_scheme: ColourScheme,
    pub render_duration: Duration,
}
