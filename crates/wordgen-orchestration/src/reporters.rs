//! Concrete progress reporters that do not need a terminal.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use wordgen_core::constants::PROGRESS_REPORT_THRESHOLD;
use wordgen_core::progress::ProgressUpdate;

use crate::interfaces::ProgressReporter;

/// Reporter that logs progress through `tracing`, at most once per
/// [`PROGRESS_REPORT_THRESHOLD`] of completion.
pub struct LoggingProgressReporter {
    last_reported: AtomicU64,
    last_written: AtomicU64,
}

impl LoggingProgressReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_reported: AtomicU64::new(0f64.to_bits()),
            last_written: AtomicU64::new(0),
        }
    }

    /// Whether an update at `fraction` would be logged.
    #[must_use]
    pub fn should_report(&self, fraction: f64) -> bool {
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        (fraction - last) >= PROGRESS_REPORT_THRESHOLD
    }
}

impl Default for LoggingProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for LoggingProgressReporter {
    fn begin(&self, expected: u64) {
        self.last_reported.store(0f64.to_bits(), Ordering::Relaxed);
        self.last_written.store(0, Ordering::Relaxed);
        info!(expected, "Generation started");
    }

    fn report(&self, update: &ProgressUpdate) {
        self.last_written.store(update.written, Ordering::Relaxed);
        let fraction = update.fraction();
        if self.should_report(fraction) {
            debug!(
                progress = format!("{:.1}%", fraction * 100.0),
                written = update.written,
                expected = update.expected,
                "Progress update"
            );
            self.last_reported.store(fraction.to_bits(), Ordering::Relaxed);
        }
    }

    fn complete(&self) {
        info!(
            written = self.last_written.load(Ordering::Relaxed),
            "Generation finished"
        );
    }
}
