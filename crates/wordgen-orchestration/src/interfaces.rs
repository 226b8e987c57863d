//! Orchestration interfaces.

use wordgen_core::progress::{CancellationToken, ProgressUpdate};
use wordgen_core::request::GenerationRequest;

use crate::report::GenerationReport;

/// Trait for reporting progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Called once before the first word, with the expected total.
    fn begin(&self, expected: u64);

    /// Report a progress update. Called once per written word.
    fn report(&self, update: &ProgressUpdate);

    /// Report completion, whatever the outcome.
    fn complete(&self);
}

/// Trait for presenting run information to the user.
pub trait ResultPresenter: Send + Sync {
    /// Describe the request before generation starts.
    fn present_description(&self, request: &GenerationRequest);

    /// Present a non-fatal advisory.
    fn present_warning(&self, message: &str);

    /// Present the final summary for `destination`.
    fn present_summary(&self, report: &GenerationReport, destination: &str);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Everything a run needs besides the request and the sink.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub cancel: &'a CancellationToken,
    pub progress: &'a dyn ProgressReporter,
    pub presenter: &'a dyn ResultPresenter,
}

impl<'a> GenerationContext<'a> {
    #[must_use]
    pub fn new(
        cancel: &'a CancellationToken,
        progress: &'a dyn ProgressReporter,
        presenter: &'a dyn ResultPresenter,
    ) -> Self {
        Self {
            cancel,
            progress,
            presenter,
        }
    }
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn begin(&self, _expected: u64) {}
    fn report(&self, _update: &ProgressUpdate) {}
    fn complete(&self) {}
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_description(&self, _request: &GenerationRequest) {}
    fn present_warning(&self, _message: &str) {}
    fn present_summary(&self, _report: &GenerationReport, _destination: &str) {}
    fn present_error(&self, _error: &str) {}
}
