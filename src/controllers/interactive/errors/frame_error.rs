use thiserror::Error;

/// A render that finished without producing a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render {generation} failed: {message}")]
pub struct FrameError {
    pub generation: u64,
    pub message: String,
}
