//! Cross-crate integration tests for wordgen live in `tests/`.
