//! Lazy enumeration of fixed-length words over a charset.
//!
//! [`Candidates`] walks the Cartesian product `charset^length` in odometer
//! order: the rightmost position cycles fastest, the leftmost slowest.
//! State is a single index vector, so memory stays O(length) no matter
//! how many words the product contains.

use std::iter::FusedIterator;

/// Iterator over `prefix + word + suffix` for every word of one length.
///
/// # Example
/// ```
/// use wordgen_core::enumerator::enumerate;
///
/// let charset: Vec<char> = "ab".chars().collect();
/// let words: Vec<String> = enumerate(&charset, 2, "", "").collect();
/// assert_eq!(words, ["aa", "ab", "ba", "bb"]);
/// ```
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    charset: &'a [char],
    prefix: &'a str,
    suffix: &'a str,
    indices: Vec<usize>,
    remaining: u128,
}

/// Enumerate every word of exactly `length` symbols drawn from `charset`.
///
/// Calling this twice with the same arguments yields the same sequence.
#[must_use]
pub fn enumerate<'a>(
    charset: &'a [char],
    length: usize,
    prefix: &'a str,
    suffix: &'a str,
) -> Candidates<'a> {
    Candidates {
        charset,
        prefix,
        suffix,
        indices: vec![0; length],
        remaining: product_size(charset.len(), length),
    }
}

/// Number of words of `length` symbols over an alphabet of `radix`
/// symbols, saturating at `u128::MAX`.
#[must_use]
pub fn product_size(radix: usize, length: usize) -> u128 {
    let Ok(exp) = u32::try_from(length) else {
        return if radix <= 1 { radix as u128 } else { u128::MAX };
    };
    (radix as u128).checked_pow(exp).unwrap_or(u128::MAX)
}

impl Candidates<'_> {
    /// Number of words not yet yielded.
    #[must_use]
    pub fn remaining(&self) -> u128 {
        self.remaining
    }

    fn render(&self) -> String {
        let mut word = String::with_capacity(
            self.prefix.len() + self.indices.len() * 4 + self.suffix.len(),
        );
        word.push_str(self.prefix);
        word.extend(self.indices.iter().map(|&i| self.charset[i]));
        word.push_str(self.suffix);
        word
    }

    /// Advance the odometer by one. Carries ripple right to left.
    fn advance(&mut self) {
        let radix = self.charset.len();
        for digit in self.indices.iter_mut().rev() {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let word = self.render();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Candidates<'_> {}
