use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::colour_mapping::map::{MandelbrotColourMap, escape_fraction};
use crate::core::util::hsb_to_rgb::hsb_to_rgb;

/// Fully saturated, full brightness hue sweep.
#[derive(Debug)]
pub struct MandelbrotWarmTones {
    max_iterations: u32,
}

impl ColourMap for MandelbrotWarmTones {
    fn map(&self, iterations: u32) -> Colour {
        match escape_fraction(iterations, self.max_iterations) {
            None => Colour::BLACK,
            Some(t) => hsb_to_rgb(t, 1.0, 1.0),
        }
    }

    fn display_name(&self) -> &str {
        ColourScheme::WarmTones.display_name()
    }
}

impl MandelbrotColourMap for MandelbrotWarmTones {
    fn kind(&self) -> ColourScheme {
        ColourScheme::WarmTones
    }
}

impl MandelbrotWarmTones {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        assert_eq!(MandelbrotWarmTones::new(1000).map(1000), Colour::BLACK);
    }

    #[test]
    fn test_fast_escape_is_red() {
        assert_eq!(
            MandelbrotWarmTones::new(1000).map(0),
            Colour { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_halfway_is_cyan() {
        assert_eq!(
            MandelbrotWarmTones::new(1000).map(500),
            Colour {
                r: 0,
                g: 255,
                b: 255
            }
        );
    }
}
