#![no_main]

use latency_cdf::{samples, Cdf};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // Any byte stream must yield samples or an error, never a panic
    if let Ok(parsed) = samples::parse_samples(data, Path::new("fuzz")) {
        if let Some(cdf) = Cdf::from_samples(parsed) {
            assert_eq!(cdf.probabilities().last(), Some(&1.0));
        }
    }
});
