use crate::core::data::point::Point;

/// Per-pixel computation run by the renderer's workers.
pub trait FractalAlgorithm: Sync {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
