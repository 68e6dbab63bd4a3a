use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

const BLUE_HUE: f32 = 0.6;

#[derive(Debug)]
pub struct MandelbrotBlueGradient {
    max_iterations: u32,
}

impl ColourMap for MandelbrotBlueGradient {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => hsb_to_rgb(BLUE_HUE, t, 1.0),
        }
    }

    fn display_name(&self) -> &str {
        ColourScheme::BlueGradient.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueGradient {
    fn kind(&self) -> ColourScheme {
        ColourScheme::BlueGradient
    }
}

impl MandelbrotBlueGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
