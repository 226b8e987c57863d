//! Error type shared by every wordgen crate.

use std::io;

/// Error type for wordlist generation.
#[derive(Debug, thiserror::Error)]
pub enum WordgenError {
    /// Parameters were rejected before any work started.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The sink could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The worker pool could not be started.
    #[error("worker pool error: {0}")]
    WorkerPool(String),

    /// Generation was interrupted by the user.
    #[error("generation interrupted")]
    Interrupted,
}

impl WordgenError {
    /// Shorthand for building an [`WordgenError::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
