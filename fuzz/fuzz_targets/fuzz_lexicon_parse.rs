//! Fuzz target for lexicon and stop-word parsing.
//!
//! Parses arbitrary text both ways and checks that every row is accounted
//! for at most once and that no stored weight is NaN or infinite.

#![no_main]
use libfuzzer_sys::fuzz_target;
use sentmd_lexicon::{parse_lexicon, parse_stopwords};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let rows = text.lines().count();

    let load = parse_lexicon(text);
    assert!(load.lexicon.len() + load.skipped_rows() <= rows);
    for line in text.lines() {
        let Some(word) = line.trim().split('\t').next() else {
            continue;
        };
        if let Some(w) = load.lexicon.weight(&word.trim().to_lowercase()) {
            assert!(w.is_finite(), "stored weight must be finite");
        }
    }

    let stopwords = parse_stopwords(text);
    assert!(stopwords.len() <= rows);
});
