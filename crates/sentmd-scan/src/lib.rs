//! # sentmd-scan
//!
//! **Tier 2 (Ingestion)**
//!
//! Reads a corpus (one message per line) and scores every record against a
//! [`LexiconStore`].
//!
//! * Blank lines are skipped and are not errors.
//! * A record that cannot be scored (invalid UTF-8, NaN score) is logged with
//!   its line number and skipped; the batch continues.
//! * Every line, including blanks and failures, counts toward
//!   [`ScanStats::lines_seen`].
//!
//! Only a missing or unreadable corpus fails the scan.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use sentmd_lexicon::LexiconStore;
use sentmd_settings::ScanOptions;
use sentmd_types::{CorpusEntry, RecordFailure, ScanStats};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("corpus file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read corpus {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result of one corpus pass, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusScan {
    pub entries: Vec<CorpusEntry>,
    pub failures: Vec<RecordFailure>,
    pub stats: ScanStats,
}

impl CorpusScan {
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Read the whole corpus file into memory.
pub fn read_corpus(path: &Path) -> Result<Vec<u8>, ScanError> {
    fs::read(path).map_err(|source| {
        let path = path.display().to_string();
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound { path }
        } else {
            ScanError::Read { path, source }
        }
    })
}

/// Read the whole corpus from any reader (e.g. stdin).
pub fn read_corpus_from<R: Read>(mut reader: R, name: &str) -> Result<Vec<u8>, ScanError> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| ScanError::Read {
            path: name.to_string(),
            source,
        })?;
    Ok(buf)
}

/// Split raw bytes into lines ending in `\n`, `\r\n` or a lone `\r`.
/// A trailing line ending does not start a new line.
pub fn raw_lines(bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&bytes[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&bytes[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&bytes[start..]);
    }
    lines
}

/// Score every line of `bytes`.
///
/// `on_progress` is called with the running analyzed count every
/// `opts.progress_every` records (never when it is 0).
pub fn scan_bytes(
    bytes: &[u8],
    store: &LexiconStore,
    opts: &ScanOptions,
    mut on_progress: impl FnMut(usize),
) -> CorpusScan {
    let mut scan = CorpusScan::default();

    for (idx, raw) in raw_lines(bytes).into_iter().enumerate() {
        let line_no = idx + 1;
        scan.stats.lines_seen += 1;

        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(err) => {
                record_failure(&mut scan, line_no, format!("invalid UTF-8: {err}"));
                continue;
            }
        };

        if line.is_empty() {
            scan.stats.blank_lines += 1;
            continue;
        }

        let record = match sentmd_score::score_text(line, store) {
            Ok(record) => record,
            Err(err) => {
                record_failure(&mut scan, line_no, err.to_string());
                continue;
            }
        };

        scan.entries.push(CorpusEntry {
            index: scan.entries.len(),
            line: line_no,
            label: opts.label.clone(),
            record,
        });
        scan.stats.analyzed += 1;

        let analyzed = scan.stats.analyzed;
        if opts.progress_every > 0 && analyzed % opts.progress_every == 0 {
            info!("analyzed {analyzed} messages");
            on_progress(analyzed);
        }
    }

    info!(
        analyzed = scan.stats.analyzed,
        lines_seen = scan.stats.lines_seen,
        failed = scan.stats.failed,
        "corpus scanned"
    );
    scan
}

fn record_failure(scan: &mut CorpusScan, line: usize, reason: String) {
    warn!("error in message {line}: {reason}");
    scan.stats.failed += 1;
    scan.failures.push(RecordFailure { line, reason });
}

/// Read and score a corpus file.
pub fn scan_path(
    path: &Path,
    store: &LexiconStore,
    opts: &ScanOptions,
    on_progress: impl FnMut(usize),
) -> Result<CorpusScan, ScanError> {
    let bytes = read_corpus(path)?;
    Ok(scan_bytes(&bytes, store, opts, on_progress))
}
