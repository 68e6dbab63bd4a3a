use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

/// Hue sweeps with the escape fraction while brightness rises as its square
/// root, so fast-escaping points fade to black.
#[derive(Debug)]
pub struct MandelbrotDefaultHsb {
    max_iterations: u32,
}

impl ColourMap for MandelbrotDefaultHsb {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => {
                let brightness =
                    (f64::from(iterations) / f64::from(self.max_iterations)).sqrt() as f32;
                hsb_to_rgb(t, 1.0, brightness)
            }
        }
    }

    fn display_name(&self) -> &str {
        ColourScheme::Default.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotDefaultHsb {
    fn kind(&self) -> ColourScheme {
        ColourScheme::Default
    }
}

impl MandelbrotDefaultHsb {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
