//! Defaults and thresholds for wordlist generation.

/// Expected output above which an advisory is shown before starting.
pub const LARGE_OUTPUT_THRESHOLD: u64 = 1_000_000;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "wordlist.txt";

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 4;

/// Number of candidates a producer hands to the writer at once.
pub const BATCH_SIZE: usize = 4096;

/// Batches buffered per worker before producers block.
pub const CHANNEL_DEPTH_PER_WORKER: usize = 2;

/// Minimum progress change (1%) before a logged progress update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution (including a reached limit).
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The output file could not be opened or written.
    pub const ERROR_IO: i32 = 3;
    /// Parameters were rejected.
    pub const ERROR_INVALID_INPUT: i32 = 4;
    /// Generation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
