use thiserror::Error;

use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(
        "pixel buffer is {}x{} but the viewport is {}x{}",
        .buffer.width(), .buffer.height(), .viewport.width(), .viewport.height()
    )]
    DimensionMismatch {
        viewport: PixelSize,
        buffer: PixelSize,
    },
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
}

#[derive(Debug, Error)]
pub enum RendererBuildError {
    #[error(transparent)]
    Algorithm(#[from] MandelbrotError),
    #[error("failed to start render worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
