use thiserror::Error;

/// Crate-level errors. String payloads keep the variants cloneable so they
/// can cross the loader thread's channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChanhopError {
    #[error("Workspace file not found: {0}")]
    WorkspaceNotFound(String),

    #[error("Invalid workspace snapshot: {0}")]
    InvalidWorkspace(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ChanhopError {
    fn from(e: std::io::Error) -> Self {
        ChanhopError::Io(e.to_string())
    }
}
