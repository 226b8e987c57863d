//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use wordgen_core::charset;
use wordgen_core::constants::{DEFAULT_OUTPUT, DEFAULT_WORKERS};
use wordgen_core::error::WordgenError;
use wordgen_core::request::GenerationRequest;

/// wordgen — Parallel brute-force wordlist generator.
#[derive(Parser, Debug)]
#[command(name = "wordgen", version, about)]
pub struct AppConfig {
    /// Character set (e.g. "abc123!@#").
    #[arg(
        short,
        long,
        conflicts_with = "predefined",
        required_unless_present_any = ["predefined", "completion"]
    )]
    pub charset: Option<String>,

    /// Use a predefined character set: alpha, alphanumeric, digits, special, lower, upper.
    #[arg(long)]
    pub predefined: Option<String>,

    /// Minimum word length.
    #[arg(
        short = 'm',
        long = "min-length",
        visible_alias = "min",
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub min_length: Option<i64>,

    /// Maximum word length.
    #[arg(
        short = 'M',
        long = "max-length",
        visible_alias = "max",
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub max_length: Option<i64>,

    /// Prefix added to every word.
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Suffix added to every word.
    #[arg(short, long, default_value = "")]
    pub suffix: String,

    /// Output file name.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Limit the number of words (0 for no limit).
    #[arg(short, long, default_value = "0")]
    pub limit: u64,

    /// Number of worker threads.
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, env = "WORDGEN_THREADS")]
    pub threads: usize,

    /// Quiet mode (no description, progress bar, or summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The literal charset, resolving `--predefined` if given.
    pub fn resolve_charset(&self) -> Result<String, WordgenError> {
        match (&self.predefined, &self.charset) {
            (Some(name), _) => charset::lookup(name).map(str::to_string),
            (None, Some(literal)) => Ok(literal.clone()),
            (None, None) => Err(WordgenError::invalid("Character set cannot be empty.")),
        }
    }

    /// Validate the flags and build the generation request.
    pub fn to_request(&self) -> Result<GenerationRequest, WordgenError> {
        let charset = self.resolve_charset()?;
        let (Some(min), Some(max)) = (self.min_length, self.max_length) else {
            return Err(WordgenError::invalid(
                "Both --min-length and --max-length are required.",
            ));
        };
        GenerationRequest::new(&charset, min, max)?
            .with_affixes(self.prefix.as_str(), self.suffix.as_str())
            .with_limit(self.limit)
            .with_workers(self.threads)
    }

    /// Default log level for the tracing subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
