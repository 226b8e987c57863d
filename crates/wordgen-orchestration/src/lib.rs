//! # wordgen-orchestration
//!
//! Parallel per-length generation, the single-writer output path, and the
//! interfaces used to report on a run.

pub mod interfaces;
pub mod report;
pub mod reporters;
pub mod scheduler;
pub mod sink;

pub use interfaces::{GenerationContext, ProgressReporter, ResultPresenter};
pub use report::{GenerationReport, Outcome};
pub use scheduler::{generate, generate_to_file};
