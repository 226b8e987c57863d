//! Generation requests and the per-length tasks derived from them.

use std::ops::RangeInclusive;
use std::sync::Arc;

use tracing::debug;

use crate::constants::DEFAULT_WORKERS;
use crate::enumerator::{enumerate, product_size, Candidates};
use crate::error::WordgenError;
use crate::validator::{validate, validate_workers};

/// A validated, immutable description of one wordlist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    charset: Arc<[char]>,
    min_length: usize,
    max_length: usize,
    prefix: String,
    suffix: String,
    limit: u64,
    worker_count: usize,
}

impl GenerationRequest {
    /// Validate the parameters and build a request with no affixes, no
    /// limit and the default worker count.
    pub fn new(charset: &str, min_length: i64, max_length: i64) -> Result<Self, WordgenError> {
        validate(min_length, max_length, charset)?;
        let to_len = |n: i64| {
            usize::try_from(n).map_err(|_| WordgenError::invalid(format!("length {n} is too large")))
        };
        Ok(Self {
            charset: charset.chars().collect(),
            min_length: to_len(min_length)?,
            max_length: to_len(max_length)?,
            prefix: String::new(),
            suffix: String::new(),
            limit: 0,
            worker_count: DEFAULT_WORKERS,
        })
    }

    /// Set the strings wrapped around every generated word.
    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Cap the number of written words. `0` means unbounded.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the size of the worker pool.
    pub fn with_workers(mut self, workers: usize) -> Result<Self, WordgenError> {
        validate_workers(workers)?;
        self.worker_count = workers;
        Ok(self)
    }

    #[must_use]
    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Number of distinct lengths, one task each.
    #[must_use]
    pub fn length_count(&self) -> usize {
        (self.max_length - self.min_length).saturating_add(1)
    }

    /// Threads worth starting: never more than there are length tasks.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.worker_count.min(self.length_count())
    }

    /// Total number of words across every length, ignoring the limit.
    /// Saturates at `u128::MAX`.
    #[must_use]
    pub fn product_total(&self) -> u128 {
        self.lengths()
            .map(|len| product_size(self.charset.len(), len))
            .fold(0u128, u128::saturating_add)
    }

    /// Number of words this request will write: the product total,
    /// clamped to the limit when one is set.
    #[must_use]
    pub fn expected_total(&self) -> u64 {
        let total = u64::try_from(self.product_total()).unwrap_or(u64::MAX);
        if self.limit > 0 {
            total.min(self.limit)
        } else {
            total
        }
    }

    /// Split the request into one task per length, shortest first.
    #[must_use]
    pub fn tasks(self: &Arc<Self>) -> Vec<LengthTask> {
        let tasks: Vec<LengthTask> = self
            .lengths()
            .map(|length| LengthTask {
                request: Arc::clone(self),
                length,
            })
            .collect();
        debug!(count = tasks.len(), "Created length tasks");
        tasks
    }
}

/// All words of one fixed length for a shared request.
#[derive(Debug, Clone)]
pub struct LengthTask {
    request: Arc<GenerationRequest>,
    length: usize,
}

impl LengthTask {
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of words this task produces.
    #[must_use]
    pub fn size(&self) -> u128 {
        product_size(self.request.charset.len(), self.length)
    }

    /// Lazily enumerate this task's words.
    #[must_use]
    pub fn candidates(&self) -> Candidates<'_> {
        enumerate(
            &self.request.charset,
            self.length,
            &self.request.prefix,
            &self.request.suffix,
        )
    }
}
