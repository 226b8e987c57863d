//! Error handling and exit codes.

use wordgen_core::constants::exit_codes;
use wordgen_core::error::WordgenError;
use wordgen_orchestration::report::Outcome;

/// Exit code for an error raised before generation started.
pub fn handle_error(err: &WordgenError) -> i32 {
    match err {
        WordgenError::InvalidInput(_) => exit_codes::ERROR_INVALID_INPUT,
        WordgenError::Io(_) => exit_codes::ERROR_IO,
        WordgenError::Interrupted => exit_codes::ERROR_CANCELED,
        WordgenError::WorkerPool(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for how a run ended.
pub fn outcome_exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Completed | Outcome::LimitReached => exit_codes::SUCCESS,
        Outcome::Interrupted => exit_codes::ERROR_CANCELED,
        Outcome::Failed(_) => exit_codes::ERROR_IO,
    }
}
