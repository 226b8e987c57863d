//! Progress tracking and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::WordgenError;

/// Progress update sent from the writer to reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Words written so far.
    pub written: u64,
    /// Words expected in total (already clamped to the limit).
    pub expected: u64,
}

impl ProgressUpdate {
    #[must_use]
    pub fn new(written: u64, expected: u64) -> Self {
        Self { written, expected }
    }

    /// Completed fraction in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.expected == 0 {
            return 1.0;
        }
        (self.written as f64 / self.expected as f64).min(1.0)
    }
}

/// Cooperative cancellation token.
///
/// Clones share the same flag, so a token handed to a signal handler
/// cancels every worker holding a clone.
///
/// ```
/// use wordgen_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// handle.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Return [`WordgenError::Interrupted`] if cancellation was requested.
    pub fn check_cancelled(&self) -> Result<(), WordgenError> {
        if self.is_cancelled() {
            Err(WordgenError::Interrupted)
        } else {
            Ok(())
        }
    }
}
