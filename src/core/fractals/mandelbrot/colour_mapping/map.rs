use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;

pub trait MandelbrotColourMap: ColourMap {
    fn kind(&self) -> ColourScheme;
}

impl ColourMap for Box<dyn MandelbrotColourMap> {
    fn map(&self, iterations: u32) -> Colour {
        (**self).map(iterations)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// `iterations / max_iterations` in single precision, or `None` for points
/// that never escaped (which every scheme paints black).
#[must_use]
pub fn escape_fraction(iterations: u32, max_iterations: u32) -> Option<f32> {
    if iterations >= max_iterations {
        None
    } else {
        Some(iterations as f32 / max_iterations as f32)
    }
}
