//! # sentmd-core
//!
//! This crate is the **primary library interface** for `sentmd`.
//! It coordinates resource loading, corpus scanning and aggregation to
//! produce sentiment receipts.
//!
//! If you are embedding `sentmd` into another Rust application, depend on this
//! crate and `sentmd-types`. Avoid depending on `sentmd-scan` or
//! `sentmd-model` directly unless necessary.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sentmd_core::analyze_workflow;
//! use sentmd_settings::AnalyzeSettings;
//!
//! let mut settings = AnalyzeSettings::for_corpus("tweets.csv");
//! settings.scan.label = "Potus".into();
//!
//! let receipt = analyze_workflow(&settings).expect("analysis failed");
//! if let Some(overall) = &receipt.report.overall {
//!     println!("{} ({:.6})", overall.label, overall.average);
//! }
//! ```

pub mod error;

use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

pub use error::{ErrorCode, SentmdError};
pub use sentmd_settings as settings;
pub use sentmd_types as types;

use sentmd_lexicon::{LexiconStore, LexiconWarning, StoreLoad};
use sentmd_settings::{AnalyzeSettings, ExportSettings, ResourceSettings};
use sentmd_types::{
    AnalyzeArgsMeta, ExportRow, ReceiptStatus, ReportFormat, ResourceInfo, ScoreTrace,
    ScoredText, SentimentReceipt, ToolInfo,
};

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// BLAKE3 hex digest of the raw corpus bytes.
pub fn corpus_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Load stop-words and lexicon. Missing or unreadable files yield empty sets
/// plus warnings; this never fails.
pub fn load_store(resources: &ResourceSettings) -> StoreLoad {
    let loaded = LexiconStore::load(
        Path::new(&resources.stopwords),
        Path::new(&resources.lexicon),
    );
    info!(
        stopwords = loaded.store.stopwords().len(),
        lexicon_words = loaded.store.lexicon().len(),
        skipped_rows = loaded.skipped_rows(),
        "resources loaded"
    );
    loaded
}

fn read_input(corpus: &str, stdin: bool) -> Result<Vec<u8>, SentmdError> {
    let bytes = if stdin {
        sentmd_scan::read_corpus_from(io::stdin().lock(), "stdin")?
    } else {
        sentmd_scan::read_corpus(Path::new(corpus))?
    };
    Ok(bytes)
}

/// Receipt warnings: one per missing/unreadable resource, and a single
/// summary line for skipped lexicon rows.
fn receipt_warnings(loaded: &StoreLoad) -> Vec<String> {
    let mut warnings: Vec<String> = loaded
        .warnings
        .iter()
        .filter(|w| !matches!(w, LexiconWarning::BadWeight { .. }))
        .map(ToString::to_string)
        .collect();
    let skipped = loaded.skipped_rows();
    if skipped > 0 {
        warnings.push(format!(
            "skipped {skipped} lexicon row(s) with an invalid sentiment weight"
        ));
    }
    warnings
}

fn report_format_name(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Text => "text",
        ReportFormat::Md => "md",
        ReportFormat::Json => "json",
    }
}

/// Runs the complete analysis: Load -> Scan -> Aggregate -> Receipt.
pub fn analyze_workflow(settings: &AnalyzeSettings) -> Result<SentimentReceipt, SentmdError> {
    analyze_workflow_with_progress(settings, |_| {})
}

/// [`analyze_workflow`] with a callback fired at every progress checkpoint.
pub fn analyze_workflow_with_progress(
    settings: &AnalyzeSettings,
    on_progress: impl FnMut(usize),
) -> Result<SentimentReceipt, SentmdError> {
    settings.validate()?;

    // 1. Resources (never fatal)
    let loaded = load_store(&settings.resources);

    // 2. Corpus (fatal when missing)
    let bytes = read_input(&settings.corpus, settings.reads_stdin())?;

    // 3. Score every line
    let scan = sentmd_scan::scan_bytes(&bytes, &loaded.store, &settings.scan, on_progress);

    // 4. Aggregate
    let report =
        sentmd_model::build_report(&scan.entries, scan.stats, settings.report.display_cap);

    let status = if scan.is_partial() {
        ReceiptStatus::Partial
    } else {
        ReceiptStatus::Complete
    };

    Ok(SentimentReceipt {
        schema_version: sentmd_types::SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: "analyze".to_string(),
        status,
        warnings: receipt_warnings(&loaded),
        failures: scan.failures,
        resources: ResourceInfo {
            corpus: settings.corpus.clone(),
            corpus_hash: corpus_hash(&bytes),
            lexicon: settings.resources.lexicon.clone(),
            lexicon_words: loaded.store.lexicon().len(),
            lexicon_skipped_rows: loaded.skipped_rows(),
            stopwords: settings.resources.stopwords.clone(),
            stopword_count: loaded.store.stopwords().len(),
        },
        args: AnalyzeArgsMeta {
            format: report_format_name(settings.report.format).to_string(),
            label: settings.scan.label.clone(),
            display_cap: settings.report.display_cap,
            progress_every: settings.scan.progress_every,
        },
        report,
    })
}

/// Score a corpus and return one export row per analyzed record.
pub fn export_workflow(settings: &ExportSettings) -> Result<Vec<ExportRow>, SentmdError> {
    export_workflow_with_progress(settings, |_| {})
}

pub fn export_workflow_with_progress(
    settings: &ExportSettings,
    on_progress: impl FnMut(usize),
) -> Result<Vec<ExportRow>, SentmdError> {
    settings.validate()?;
    let loaded = load_store(&settings.resources);
    let bytes = read_input(&settings.corpus, settings.reads_stdin())?;
    let scan = sentmd_scan::scan_bytes(&bytes, &loaded.store, &settings.scan, on_progress);
    Ok(scan.entries.iter().map(ExportRow::from).collect())
}

/// Score each text independently.
pub fn score_texts<S: AsRef<str>>(
    texts: &[S],
    store: &LexiconStore,
) -> Result<Vec<ScoredText>, SentmdError> {
    texts
        .iter()
        .map(|t| sentmd_score::score_text(t.as_ref(), store).map_err(SentmdError::from))
        .collect()
}

/// Token-by-token trace of how `text` is scored.
pub fn explain_text(text: &str, store: &LexiconStore) -> Result<ScoreTrace, SentmdError> {
    Ok(sentmd_score::explain(text, store)?)
}
