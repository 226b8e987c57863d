//! wordgen library — application logic for the wordlist generator.

pub mod app;
pub mod config;
pub mod errors;
