use thiserror::Error;

use crate::controllers::interactive::errors::controller_error::ControllerError;
use crate::controllers::interactive::errors::frame_error::FrameError;
use crate::controllers::ports::file_presenter::ExportError;
use crate::core::actions::render::errors::RendererBuildError;
use crate::core::data::pixel_size::PixelSizeError;
use crate::core::viewport::errors::ViewportError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid image size: {0}")]
    Size(#[from] PixelSizeError),
    #[error(transparent)]
    Renderer(#[from] RendererBuildError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    #[error("step {step} was rejected: {source}")]
    Step {
        step: usize,
        #[source]
        source: ViewportError,
    },
    #[error("no frame finished within {0} seconds")]
    Timeout(u64),
    #[error("renderer finished without producing a frame")]
    NoFrame,
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
