//! Parameter validation.
//!
//! Runs before any file is opened or worker is spawned; a rejected
//! request never produces output.

use std::collections::HashSet;

use crate::error::WordgenError;

/// Check that the length range and charset describe a valid generation.
///
/// Lengths are taken as signed integers so that negative user input is
/// reported here rather than by the argument parser.
pub fn validate(min_length: i64, max_length: i64, charset: &str) -> Result<(), WordgenError> {
    if min_length <= 0 || max_length <= 0 {
        return Err(WordgenError::invalid(
            "Word lengths must be positive integers.",
        ));
    }
    if min_length > max_length {
        return Err(WordgenError::invalid(
            "Minimum length cannot be greater than maximum length.",
        ));
    }
    if charset.is_empty() {
        return Err(WordgenError::invalid("Character set cannot be empty."));
    }
    let distinct: HashSet<char> = charset.chars().collect();
    if distinct.len() != charset.chars().count() {
        return Err(WordgenError::invalid(
            "Character set contains duplicate characters.",
        ));
    }
    Ok(())
}

/// Check that at least one worker was requested.
pub fn validate_workers(workers: usize) -> Result<(), WordgenError> {
    if workers == 0 {
        return Err(WordgenError::invalid(
            "Worker count must be a positive integer.",
        ));
    }
    Ok(())
}
