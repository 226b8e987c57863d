//! Predefined character sets.

use std::fmt;
use std::str::FromStr;

use crate::error::WordgenError;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SPECIAL: &str = "!@#$%^&*()_+[]{}|;:,.<>?/~`";

/// A named character set that can be used instead of a literal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedCharset {
    Alpha,
    Alphanumeric,
    Digits,
    Special,
    Lower,
    Upper,
}

impl PredefinedCharset {
    /// All predefined sets, in the order they are listed to users.
    pub const ALL: [Self; 6] = [
        Self::Alpha,
        Self::Alphanumeric,
        Self::Digits,
        Self::Special,
        Self::Lower,
        Self::Upper,
    ];

    /// The literal symbols of this set, in enumeration order.
    #[must_use]
    pub fn symbols(self) -> &'static str {
        match self {
            Self::Alpha => ALPHA,
            Self::Alphanumeric => ALPHANUMERIC,
            Self::Digits => DIGITS,
            Self::Special => SPECIAL,
            Self::Lower => LOWER,
            Self::Upper => UPPER,
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
            Self::Digits => "digits",
            Self::Special => "special",
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

impl fmt::Display for PredefinedCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedCharset {
    type Err = WordgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|set| set.name() == s)
            .ok_or_else(|| WordgenError::invalid(format!("Invalid predefined charset: {s}")))
    }
}

/// Resolve a predefined set name to its literal symbols.
pub fn lookup(name: &str) -> Result<&'static str, WordgenError> {
    name.parse::<PredefinedCharset>().map(PredefinedCharset::symbols)
}
