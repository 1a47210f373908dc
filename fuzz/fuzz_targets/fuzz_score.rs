//! Fuzz target for the scorer.
//!
//! Scores arbitrary text against a small fixed store and checks the
//! invariants that must hold for every input: the stored sentiment is finite
//! and inside `[-1, 1]`, normalizing first changes nothing, and `explain`
//! agrees with `score`.

#![no_main]
use libfuzzer_sys::fuzz_target;
use sentmd_lexicon::{Lexicon, LexiconStore, StopwordSet};
use sentmd_score::{explain, normalize, score, score_text};

const MAX_INPUT_SIZE: usize = 16 * 1024;

fn store() -> LexiconStore {
    let stopwords: StopwordSet = ["the", "of", "a", "and"].into_iter().collect();
    let lexicon: Lexicon = [
        ("great", 0.8),
        ("terrible", -0.6),
        ("day", 0.2),
        ("love", 3.2),
        ("hate", -2.7),
    ]
    .into_iter()
    .collect();
    LexiconStore::new(stopwords, lexicon)
}

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let store = store();

    let raw = score(text, &store);
    assert!(raw.is_finite(), "raw score must be finite: {raw}");

    let record = score_text(text, &store).expect("finite scores never fail");
    let s = record.sentiment();
    assert!((-1.0..=1.0).contains(&s), "clamped score out of range: {s}");
    assert_eq!(record.text(), text);

    assert_eq!(score(&normalize(text), &store), raw);

    let trace = explain(text, &store).expect("finite scores never fail");
    assert_eq!(trace.raw_score, raw);
    assert_eq!(trace.score, s);
    assert!(trace.matched <= trace.tokens.len());
});
