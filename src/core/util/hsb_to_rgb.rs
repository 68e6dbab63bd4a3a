use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Converts a hue/saturation/brightness triple, each nominally in `[0, 1]`,
/// to 8-bit RGB.
///
/// Hue wraps, so `1.0` is the same red as `0.0`. Works in single precision
/// and rounds each channel half-up, which keeps results identical to the
/// common `HSBtoRGB` formulation used by desktop toolkits.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let sector = (hue - hue.floor()) * 6.0;
    let f = sector - sector.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}
