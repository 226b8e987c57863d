//! CLI output formatting.

use std::time::Duration;

use wordgen_core::request::GenerationRequest;
use wordgen_orchestration::report::{GenerationReport, Outcome};

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Human-readable description of a request, one detail per line.
#[must_use]
pub fn describe(request: &GenerationRequest) -> String {
    let charset: String = request.charset().iter().collect();
    let mut lines = vec![
        format!("Charset used: {charset}"),
        format!(
            "Word lengths: {} to {}",
            request.min_length(),
            request.max_length()
        ),
    ];
    lines.push(if request.prefix().is_empty() {
        "No prefix".to_string()
    } else {
        format!("Prefix: {}", request.prefix())
    });
    lines.push(if request.suffix().is_empty() {
        "No suffix".to_string()
    } else {
        format!("Suffix: {}", request.suffix())
    });
    if request.limit() > 0 {
        lines.push(format!("Limit: {} words", format_number(request.limit())));
    }
    lines.push(format!(
        "Using {} threads for generation.",
        request.worker_count()
    ));
    lines.join("\n")
}

/// Line explaining why a run stopped early, if it did.
#[must_use]
pub fn outcome_notice(report: &GenerationReport) -> Option<String> {
    match report.outcome() {
        Outcome::Completed => None,
        Outcome::LimitReached => Some(format!(
            "Wordlist limit reached: {} words saved.",
            format_number(report.limit())
        )),
        Outcome::Interrupted => Some("Generation interrupted by user.".to_string()),
        Outcome::Failed(_) => Some("Generation stopped after an error.".to_string()),
    }
}

/// Final summary: words written and destination.
#[must_use]
pub fn summary_line(report: &GenerationReport, destination: &str) -> String {
    format!(
        "Wordlist saved to {destination} with {} words.",
        format_number(report.written())
    )
}

/// Elapsed wall-clock time line.
#[must_use]
pub fn elapsed_line(report: &GenerationReport) -> String {
    format!("Elapsed time: {}", format_duration(report.elapsed()))
}
