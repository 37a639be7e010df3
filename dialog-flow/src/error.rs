use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Context error: {0}")]
    ContextError(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;
