use crate::core::actions::render::errors::RenderError;
use crate::core::actions::render::renderer::Renderer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::viewport::viewport::Viewport;

/// Whatever fills a frame buffer for the controller's worker.
pub trait FrameRenderer: Send + Sync {
    fn render_frame(
        &self,
        viewport: &Viewport,
        colour_scheme: ColourScheme,
        buffer: &mut PixelBuffer,
    ) -> Result<(), RenderError>;
}

impl FrameRenderer for Renderer {
    fn render_frame(
        &self,
        viewport: &Viewport,
        colour_scheme: ColourScheme,
        buffer: &mut PixelBuffer,
    ) -> Result<(), RenderError> {
        self.render(viewport, colour_scheme, buffer)
    }
}
