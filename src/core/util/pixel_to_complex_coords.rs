use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::point::Point;

/// Maps a pixel onto the complex plane.
///
/// Pixel `(0, 0)` lands exactly on the rectangle's top-left corner and each
/// pixel step advances by `range / extent`, so the right and bottom edges are
/// one step past the last pixel. Points outside the grid extrapolate along
/// the same lines, which is what drag deltas rely on.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, size: PixelSize, region: ComplexRect) -> Complex {
    let real = region.min_x()
        + f64::from(pixel.x) * (region.max_x() - region.min_x()) / f64::from(size.width());
    let imag = region.min_y()
        + f64::from(pixel.y) * (region.max_y() - region.min_y()) / f64::from(size.height());

    Complex { real, imag }
}
