//! Application entry point and dispatch.

use std::path::Path;

use anyhow::{Context, Result};

use wordgen_cli::presenter::{CLIProgressReporter, CLIResultPresenter};
use wordgen_core::constants::exit_codes;
use wordgen_core::progress::CancellationToken;
use wordgen_core::request::GenerationRequest;
use wordgen_orchestration::interfaces::{GenerationContext, ProgressReporter, ResultPresenter};
use wordgen_orchestration::report::GenerationReport;
use wordgen_orchestration::reporters::LoggingProgressReporter;
use wordgen_orchestration::scheduler::generate_to_file;

use crate::config::AppConfig;
use crate::errors::{handle_error, outcome_exit_code};

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        wordgen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let presenter = CLIResultPresenter::new(config.quiet);

    // Validation happens before the output file is touched.
    let request = match config.to_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected parameters");
            presenter.present_error(&e.to_string());
            return Ok(handle_error(&e));
        }
    };

    presenter.present_description(&request);

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let progress: Box<dyn ProgressReporter> = if config.quiet {
        Box::new(LoggingProgressReporter::new())
    } else {
        Box::new(CLIProgressReporter::new())
    };
    let report = generate_wordlist(
        &request,
        &config.output,
        &cancel,
        progress.as_ref(),
        &presenter,
    );

    presenter.present_summary(&report, &config.output.display().to_string());
    Ok(outcome_exit_code(report.outcome()))
}

/// Generate `request` into `output` with the given reporters.
pub fn generate_wordlist(
    request: &GenerationRequest,
    output: &Path,
    cancel: &CancellationToken,
    progress: &dyn ProgressReporter,
    presenter: &dyn ResultPresenter,
) -> GenerationReport {
    let ctx = GenerationContext::new(cancel, progress, presenter);
    generate_to_file(request, output, &ctx)
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("Error setting Ctrl+C handler")
}
