#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

use wordgen_core::enumerator::{enumerate, product_size};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the length (1..=4), the rest become the charset,
    // deduplicated and capped at 8 symbols to keep runs short.
    let length = usize::from(data[0] % 4) + 1;
    let mut seen = HashSet::new();
    let charset: Vec<char> = data[1..]
        .iter()
        .map(|&b| char::from(b))
        .filter(|c| seen.insert(*c))
        .take(8)
        .collect();

    let words: Vec<String> = enumerate(&charset, length, "", "").collect();
    assert_eq!(words.len() as u128, product_size(charset.len(), length));
    let unique: HashSet<&String> = words.iter().collect();
    assert_eq!(unique.len(), words.len());
});
