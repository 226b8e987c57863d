//! CLI presenter and progress bar.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use wordgen_core::progress::ProgressUpdate;
use wordgen_core::request::GenerationRequest;
use wordgen_orchestration::interfaces::{ProgressReporter, ResultPresenter};
use wordgen_orchestration::report::{GenerationReport, Outcome};

use crate::output::{describe, elapsed_line, outcome_notice, summary_line};
use crate::ui;

const BAR_TEMPLATE: &str =
    "{spinner:.cyan} Generating words... [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA {eta}";

/// How a presenter line is styled and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn description_lines(&self, request: &GenerationRequest) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }
        describe(request).lines().map(str::to_string).collect()
    }

    /// Interrupt and failure notices survive quiet mode; everything else
    /// is suppressed by it.
    fn summary_lines(
        &self,
        report: &GenerationReport,
        destination: &str,
    ) -> Vec<(Level, String)> {
        let mut lines = Vec::new();
        if let Some(notice) = outcome_notice(report) {
            match report.outcome() {
                Outcome::LimitReached if self.quiet => {}
                Outcome::LimitReached => lines.push((Level::Success, notice)),
                _ => lines.push((Level::Warning, notice)),
            }
        }
        if !self.quiet {
            lines.push((Level::Success, summary_line(report, destination)));
            lines.push((Level::Info, elapsed_line(report)));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_description(&self, request: &GenerationRequest) {
        let lines = self.description_lines(request);
        if lines.is_empty() {
            return;
        }
        ui::print_header("Wordlist Details");
        for line in &lines {
            ui::print_info(line);
        }
        println!();
    }

    fn present_warning(&self, message: &str) {
        if !self.quiet {
            ui::print_warning(message);
        }
    }

    fn present_summary(&self, report: &GenerationReport, destination: &str) {
        for (level, line) in self.summary_lines(report, destination) {
            match level {
                Level::Info => ui::print_info(&line),
                Level::Success => ui::print_success(&line),
                Level::Warning => ui::print_warning(&line),
            }
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// Progress reporter backed by an `indicatif` bar on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
    visible: bool,
}

impl CLIProgressReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible: true,
        }
    }
}

#[cfg(test)]
impl CLIProgressReporter {
    fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible: false,
        }
    }

    fn position(&self) -> u64 {
        self.bar.position()
    }

    fn length(&self) -> Option<u64> {
        self.bar.length()
    }
}

impl Default for CLIProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn begin(&self, expected: u64) {
        self.bar.set_length(expected);
        self.bar.set_position(0);
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            self.bar.set_style(style.progress_chars("=>-"));
        }
        if self.visible {
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }
    }

    fn report(&self, update: &ProgressUpdate) {
        self.bar.set_position(update.written);
    }

    fn complete(&self) {
        // Leave the bar where it stopped; an interrupted run is not 100%.
        self.bar.abandon();
    }
}
