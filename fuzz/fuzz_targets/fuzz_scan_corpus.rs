//! Fuzz target for corpus scanning and aggregation.
//!
//! Feeds arbitrary bytes (including invalid UTF-8) through `scan_bytes` and
//! `build_report`, and checks the bookkeeping invariants.

#![no_main]
use libfuzzer_sys::fuzz_target;
use sentmd_lexicon::{Lexicon, LexiconStore, StopwordSet};
use sentmd_model::{Tally, build_report};
use sentmd_scan::scan_bytes;
use sentmd_settings::ScanOptions;

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let stopwords: StopwordSet = ["the", "a"].into_iter().collect();
    let lexicon: Lexicon = [("good", 0.6), ("bad", -0.7)].into_iter().collect();
    let store = LexiconStore::new(stopwords, lexicon);

    let scan = scan_bytes(data, &store, &ScanOptions::default(), |_| {});
    let stats = scan.stats;
    assert_eq!(
        stats.lines_seen,
        stats.analyzed + stats.blank_lines + stats.failed,
        "every line is analyzed, blank or failed"
    );
    assert_eq!(stats.analyzed, scan.entries.len());
    assert_eq!(stats.failed, scan.failures.len());

    let report = build_report(&scan.entries, stats, 100);
    if let Some(c) = report.categories {
        assert_eq!(
            c.positive.count + c.negative.count + c.neutral.count,
            stats.analyzed
        );
    }

    // Split the entries anywhere: merged tallies keep the same extremes.
    let mid = scan.entries.len() / 2;
    let (left, right) = scan.entries.split_at(mid);
    let merged = Tally::from_entries(left).merge(Tally::from_entries(right));
    let whole = Tally::from_entries(&scan.entries);
    assert_eq!(merged.max, whole.max);
    assert_eq!(merged.min, whole.min);
    assert_eq!(merged.count, whole.count);
});
