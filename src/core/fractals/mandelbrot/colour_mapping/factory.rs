use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    blue_gradient::MandelbrotBlueGradient, default_hsb::MandelbrotDefaultHsb,
    grayscale::MandelbrotGrayscale, warm_tones::MandelbrotWarmTones,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    scheme: ColourScheme,
    max_iterations: u32,
) -> Box<dyn MandelbrotColourMap> {
    match scheme {
        ColourScheme::Default => Box::new(MandelbrotDefaultHsb::new(max_iterations)),
        ColourScheme::BlueGradient => Box::new(MandelbrotBlueGradient::new(max_iterations)),
        ColourScheme::WarmTones => Box::new(MandelbrotWarmTones::new(max_iterations)),
        ColourScheme::Grayscale => Box::new(MandelbrotGrayscale::new(max_iterations)),
    }
}
