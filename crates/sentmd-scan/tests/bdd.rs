//! BDD-style scenarios for corpus scanning.

use std::fs;

use sentmd_lexicon::{Lexicon, LexiconStore, StopwordSet};
use sentmd_scan::{ScanError, scan_bytes, scan_path};
use sentmd_settings::ScanOptions;
use tempfile::tempdir;

// ── helpers ──────────────────────────────────────────────────────────

fn store() -> LexiconStore {
    let stopwords: StopwordSet = ["the", "of", "a"].into_iter().collect();
    let lexicon: Lexicon = [("great", 0.8), ("terrible", -0.6), ("day", 0.2)]
        .into_iter()
        .collect();
    LexiconStore::new(stopwords, lexicon)
}

fn opts(label: &str, progress_every: usize) -> ScanOptions {
    ScanOptions {
        label: label.to_string(),
        progress_every,
    }
}

// ── Scenario: the reference corpus ───────────────────────────────────

#[test]
fn given_reference_corpus_then_each_line_is_scored_in_order() {
    let corpus = b"great day\nterrible news\nthe of a\n";

    let scan = scan_bytes(corpus, &store(), &opts("Potus", 0), |_| {});

    let scores: Vec<f64> = scan.entries.iter().map(|e| e.record.sentiment()).collect();
    assert_eq!(scores, vec![0.5, -0.6, 0.0]);
    assert!(scan.entries.iter().all(|e| e.label == "Potus"));
    assert_eq!(scan.stats.lines_seen, 3);
    assert_eq!(scan.stats.analyzed, 3);
    assert!(!scan.is_partial());
}

// ── Scenario: blank lines ────────────────────────────────────────────

#[test]
fn given_blank_lines_then_they_are_seen_but_not_analyzed_or_failed() {
    let corpus = b"great day\n\n   \nterrible news\n";

    let scan = scan_bytes(corpus, &store(), &opts("feed", 0), |_| {});

    assert_eq!(scan.stats.lines_seen, 4);
    assert_eq!(scan.stats.blank_lines, 2);
    assert_eq!(scan.stats.analyzed, 2);
    assert_eq!(scan.stats.failed, 0);
    assert_eq!(scan.entries[1].line, 4);
}

// ── Scenario: duplicates are kept ────────────────────────────────────

#[test]
fn given_identical_messages_then_each_gets_its_own_entry() {
    let corpus = b"great day\ngreat day\ngreat day\n";

    let scan = scan_bytes(corpus, &store(), &opts("feed", 0), |_| {});

    assert_eq!(scan.entries.len(), 3);
    let indices: Vec<usize> = scan.entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

// ── Scenario: text is kept verbatim (after trimming) ─────────────────

#[test]
fn given_noisy_text_then_original_is_stored_not_normalized() {
    let corpus = b"  GREAT Day!!! 2017  \n";

    let scan = scan_bytes(corpus, &store(), &opts("feed", 0), |_| {});

    assert_eq!(scan.entries[0].record.text(), "GREAT Day!!! 2017");
    assert_eq!(scan.entries[0].record.sentiment(), 0.5);
}

// ── Scenario: progress checkpoints ───────────────────────────────────

#[test]
fn given_progress_interval_then_callback_fires_on_multiples() {
    let corpus = "great day\n".repeat(7);
    let mut seen = Vec::new();

    scan_bytes(corpus.as_bytes(), &store(), &opts("feed", 3), |n| seen.push(n));

    assert_eq!(seen, vec![3, 6]);
}

#[test]
fn given_zero_interval_then_callback_never_fires() {
    let corpus = "great day\n".repeat(5);
    let mut calls = 0;

    scan_bytes(corpus.as_bytes(), &store(), &opts("feed", 0), |_| calls += 1);

    assert_eq!(calls, 0);
}

// ── Scenario: corpus on disk ─────────────────────────────────────────

#[test]
fn given_corpus_file_then_scan_path_reads_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tweets.csv");
    fs::write(&path, "great day\nterrible news\n").unwrap();

    let scan = scan_path(&path, &store(), &opts("feed", 0), |_| {}).unwrap();

    assert_eq!(scan.stats.analyzed, 2);
}

#[test]
fn given_missing_corpus_then_scan_fails_with_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = scan_path(&path, &store(), &opts("feed", 0), |_| {}).unwrap_err();

    assert!(matches!(err, ScanError::NotFound { .. }));
    assert!(err.to_string().contains("corpus file not found"));
}

// ── Scenario: empty corpus ───────────────────────────────────────────

#[test]
fn given_empty_corpus_then_nothing_is_analyzed() {
    let scan = scan_bytes(b"", &store(), &opts("feed", 1), |_| panic!("no progress"));

    assert_eq!(scan.stats.lines_seen, 0);
    assert!(scan.entries.is_empty());
}
