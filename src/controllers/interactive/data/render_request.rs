use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::viewport::viewport::Viewport;

/// Snapshot of everything one render needs. Later edits to the live viewport
/// do not reach a request that has already been submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub colour_scheme: ColourScheme,
}

impl RenderRequest {
    #[must_use]
    pub fn new(viewport: &Viewport, colour_scheme: ColourScheme) -> Self {
        Self {
            viewport: viewport.clone(),
            colour_scheme,
        }
    }
}
