#![no_main]

use libfuzzer_sys::fuzz_target;

use wordgen_core::request::GenerationRequest;
use wordgen_core::validator::validate;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let min = i64::from(data[0] as i8);
    let max = i64::from(data[1] as i8);
    let charset = String::from_utf8_lossy(&data[2..]);

    // Validation and request construction must agree and never panic.
    let valid = validate(min, max, &charset).is_ok();
    let request = GenerationRequest::new(&charset, min, max);
    assert_eq!(valid, request.is_ok());
    if let Ok(request) = request {
        let _ = request.expected_total();
    }
});
