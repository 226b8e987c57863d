//! # wordgen-core
//!
//! Core library for the wordgen wordlist generator: parameter validation,
//! predefined charsets, generation requests, and lazy odometer-order
//! enumeration of fixed-length words.

pub mod charset;
pub mod constants;
pub mod enumerator;
pub mod error;
pub mod progress;
pub mod request;
pub mod validator;

// Re-exports
pub use charset::PredefinedCharset;
pub use constants::{exit_codes, DEFAULT_OUTPUT, DEFAULT_WORKERS, LARGE_OUTPUT_THRESHOLD};
pub use enumerator::{enumerate, Candidates};
pub use error::WordgenError;
pub use progress::{CancellationToken, ProgressUpdate};
pub use request::{GenerationRequest, LengthTask};
pub use validator::validate;
