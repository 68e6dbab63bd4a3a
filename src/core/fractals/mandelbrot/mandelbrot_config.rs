use std::num::NonZeroUsize;

use crate::core::actions::render::errors::RendererBuildError;
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_size::PixelSize;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::util::available_workers::available_workers;
use crate::core::viewport::viewport::Viewport;
use crate::core::viewport::zoom_mode::ZoomMode;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

pub const DEFAULT_MIN_X: f64 = -2.0;
pub const DEFAULT_MAX_X: f64 = 1.0;
pub const DEFAULT_MIN_Y: f64 = -1.5;
pub const DEFAULT_MAX_Y: f64 = 1.5;

#[must_use]
pub fn default_region() -> ComplexRect {
    ComplexRect::from_bounds(DEFAULT_MIN_X, DEFAULT_MAX_X, DEFAULT_MIN_Y, DEFAULT_MAX_Y)
        .unwrap_or_else(|_| unreachable!("default region bounds are ordered and finite"))
}

#[must_use]
pub fn default_size() -> PixelSize {
    PixelSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .unwrap_or_else(|_| unreachable!("default grid size is non-zero"))
}

/// Everything needed to start exploring: where the view opens, how big the
/// grid is and how the renderer is set up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub size: PixelSize,
    pub max_iterations: u32,
    pub colour_scheme: ColourScheme,
    pub zoom_mode: ZoomMode,
    /// `None` samples the available parallelism when the renderer is built.
    pub workers: Option<NonZeroUsize>,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            size: default_size(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourScheme::default(),
            zoom_mode: ZoomMode::default(),
            workers: None,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn build_viewport(&self) -> Viewport {
        Viewport::new(self.region, self.size).with_zoom_mode(self.zoom_mode)
    }

    pub fn build_renderer(&self) -> Result<Renderer, RendererBuildError> {
        let workers = self.workers.unwrap_or_else(available_workers);

        Renderer::with_workers(self.max_iterations, workers)
    }
}
