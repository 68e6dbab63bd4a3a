use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

#[derive(Debug)]
pub struct MandelbrotGrayscale {
    max_iterations: u32,
}

impl ColourMap for MandelbrotGrayscale {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => hsb_to_rgb(0.0, 0.0, t),
        }
    }

    fn display_name(&self) -> &str {
        ColourScheme::Grayscale.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
