//! Run report: written count, timing, and how the run ended.

use std::time::{Duration, Instant};

/// How a generation run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every candidate was written.
    Completed,
    /// The configured limit was hit.
    LimitReached,
    /// The user interrupted the run.
    Interrupted,
    /// The sink or the worker pool failed.
    Failed(String),
}

impl Outcome {
    /// Whether the file holds fewer lines than the request would produce.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Failed(_))
    }
}

/// Counters for one run. Mutated only by the writer.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    written: u64,
    expected: u64,
    limit: u64,
    started: Instant,
    elapsed: Option<Duration>,
    outcome: Outcome,
}

impl GenerationReport {
    /// Start a report for a run expected to write `expected` words.
    #[must_use]
    pub fn new(expected: u64, limit: u64) -> Self {
        Self {
            written: 0,
            expected,
            limit,
            started: Instant::now(),
            elapsed: None,
            outcome: Outcome::Completed,
        }
    }

    /// A report for a run that failed before writing anything.
    #[must_use]
    pub fn failed(expected: u64, limit: u64, error: String) -> Self {
        let mut report = Self::new(expected, limit);
        report.finish(Outcome::Failed(error));
        report
    }

    /// Count one written word and return the new total.
    pub fn record_write(&mut self) -> u64 {
        self.written += 1;
        self.written
    }

    /// Freeze the elapsed time and record the outcome.
    pub fn finish(&mut self, outcome: Outcome) {
        self.elapsed = Some(self.started.elapsed());
        self.outcome = outcome;
    }

    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    #[must_use]
    pub fn expected(&self) -> u64 {
        self.expected
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Wall-clock time of the run; still ticking until [`finish`](Self::finish).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_write_counts_up() {
        let mut report = GenerationReport::new(3, 0);
        assert_eq!(report.record_write(), 1);
        assert_eq!(report.record_write(), 2);
        assert_eq!(report.written(), 2);
        assert_eq!(report.expected(), 3);
    }

    #[test]
    fn finish_freezes_elapsed() {
        let mut report = GenerationReport::new(0, 0);
        assert!(report.elapsed.is_none());
        report.finish(Outcome::Completed);
        assert!(report.elapsed.is_some());
        let first = report.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(report.elapsed(), first);
    }

    #[test]
    fn failed_report() {
        let report = GenerationReport::failed(10, 5, "disk full".into());
        assert_eq!(report.written(), 0);
        assert_eq!(report.limit(), 5);
        assert_eq!(report.outcome(), &Outcome::Failed("disk full".into()));
        assert!(report.elapsed.is_some());
    }

    #[test]
    fn partial_outcomes() {
        assert!(!Outcome::Completed.is_partial());
        assert!(!Outcome::LimitReached.is_partial());
        assert!(Outcome::Interrupted.is_partial());
        assert!(Outcome::Failed(String::new()).is_partial());
    }
}
