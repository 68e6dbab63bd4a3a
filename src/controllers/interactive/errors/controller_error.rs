use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("failed to spawn render controller thread: {0}")]
    Spawn(#[from] std::io::Error),
}
