use crate::core::data::complex_rect::ComplexRectError;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom factor must be finite and positive, got {factor}")]
    InvalidZoomFactor { factor: f64 },
    #[error("viewport would collapse: {0}")]
    Degenerate(#[from] ComplexRectError),
}
