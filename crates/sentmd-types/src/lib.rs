//! # sentmd-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures and contracts for `sentmd`.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: The primary contract is the JSON receipt, not Rust
//! struct literals. New fields get sensible defaults; removed or renamed fields
//! bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (records, reports, receipts, traces)
//! * The clamped [`ScoredText`] value object and its ordering
//! * Serialization/Deserialization logic
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Scoring or aggregation logic

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Averages strictly above this value are labelled [`OverallLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Averages strictly below this value are labelled [`OverallLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Lower bound of every stored sentiment.
pub const SENTIMENT_MIN: f64 = -1.0;

/// Upper bound of every stored sentiment.
pub const SENTIMENT_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SentimentError {
    /// NaN has no place on the sentiment scale and cannot be clamped.
    #[error("sentiment score is NaN")]
    NotANumber,
}

// -----------
// ScoredText
// -----------

/// Original message text paired with its clamped sentiment.
///
/// The sentiment always lies in `[-1.0, 1.0]`: every assignment goes through
/// [`ScoredText::set_sentiment`], which clamps out-of-range values and rejects
/// NaN.
///
/// Equality and ordering agree: sentiment first (via [`f64::total_cmp`]), then
/// text lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawScoredText")]
pub struct ScoredText {
    text: String,
    sentiment: f64,
}

#[derive(Deserialize)]
struct RawScoredText {
    text: String,
    sentiment: f64,
}

impl TryFrom<RawScoredText> for ScoredText {
    type Error = SentimentError;

    fn try_from(raw: RawScoredText) -> Result<Self, Self::Error> {
        ScoredText::scored(raw.text, raw.sentiment)
    }
}

impl ScoredText {
    /// Create an unscored record (sentiment `0.0`).
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: 0.0,
        }
    }

    /// Create a record and assign its sentiment in one step.
    pub fn scored(text: impl Into<String>, sentiment: f64) -> Result<Self, SentimentError> {
        let mut record = Self::new(text);
        record.set_sentiment(sentiment)?;
        Ok(record)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentiment(&self) -> f64 {
        self.sentiment
    }

    /// Assign a sentiment, clamping it into `[-1.0, 1.0]`.
    pub fn set_sentiment(&mut self, value: f64) -> Result<(), SentimentError> {
        self.sentiment = clamp_sentiment(value)?;
        Ok(())
    }

    pub fn is_positive(&self) -> bool {
        self.sentiment > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.sentiment < 0.0
    }

    /// Exact comparison with zero, no epsilon.
    pub fn is_neutral(&self) -> bool {
        self.sentiment == 0.0
    }

    pub fn class(&self) -> SentimentClass {
        if self.is_positive() {
            SentimentClass::Positive
        } else if self.is_negative() {
            SentimentClass::Negative
        } else {
            SentimentClass::Neutral
        }
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl PartialEq for ScoredText {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredText {}

impl PartialOrd for ScoredText {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredText {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sentiment
            .total_cmp(&other.sentiment)
            .then_with(|| self.text.cmp(&other.text))
    }
}

/// Clamp a raw score into `[-1.0, 1.0]`. Idempotent on in-range values.
pub fn clamp_sentiment(value: f64) -> Result<f64, SentimentError> {
    if value.is_nan() {
        return Err(SentimentError::NotANumber);
    }
    Ok(if value < SENTIMENT_MIN {
        SENTIMENT_MIN
    } else if value > SENTIMENT_MAX {
        SENTIMENT_MAX
    } else {
        value
    })
}

// ---------------
// Classification
// ---------------

/// Per-record class derived from the sign of the sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Negative => "negative",
            SentimentClass::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corpus-level verdict derived from the average sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallLabel {
    Positive,
    Negative,
    Neutral,
}

impl OverallLabel {
    /// Apply the fixed ±0.1 band; both bounds are exclusive.
    pub fn from_average(average: f64) -> Self {
        if average > POSITIVE_THRESHOLD {
            OverallLabel::Positive
        } else if average < NEGATIVE_THRESHOLD {
            OverallLabel::Negative
        } else {
            OverallLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallLabel::Positive => "POSITIVE",
            OverallLabel::Negative => "NEGATIVE",
            OverallLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for OverallLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -------
// Corpus
// -------

/// One analyzed input record.
///
/// `index` is the position among analyzed records (0-based) and drives
/// tie-breaks; `line` is the 1-based line number in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub index: usize,
    pub line: usize,
    pub label: String,
    pub record: ScoredText,
}

/// A record that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    pub line: usize,
    pub reason: String,
}

/// Line accounting for one corpus pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Every line read, including blanks and failures.
    pub lines_seen: usize,
    pub blank_lines: usize,
    pub analyzed: usize,
    pub failed: usize,
}

// -------
// Report
// -------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSentiment {
    pub total: f64,
    pub average: f64,
    pub label: OverallLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub count: usize,
    /// Share of analyzed records, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub positive: CategoryCount,
    pub negative: CategoryCount,
    pub neutral: CategoryCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeEntry {
    pub index: usize,
    pub line: usize,
    pub label: String,
    pub sentiment: f64,
    pub text: String,
    /// `text` cut to the report's display cap.
    pub display_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremes {
    pub most_positive: ExtremeEntry,
    pub most_negative: ExtremeEntry,
}

/// Corpus-level statistics. The optional sections are `None` for an empty corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub stats: ScanStats,
    pub overall: Option<OverallSentiment>,
    pub categories: Option<CategoryBreakdown>,
    pub extremes: Option<Extremes>,
    pub display_cap: usize,
}

impl SentimentReport {
    pub fn has_data(&self) -> bool {
        self.overall.is_some()
    }
}

// --------
// Receipt
// --------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "sentmd".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Complete,
    /// At least one record failed and was skipped.
    Partial,
}

/// What the lexicon store and corpus were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub corpus: String,
    /// BLAKE3 of the raw corpus bytes.
    pub corpus_hash: String,
    pub lexicon: String,
    pub lexicon_words: usize,
    #[serde(default)]
    pub lexicon_skipped_rows: usize,
    pub stopwords: String,
    pub stopword_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeArgsMeta {
    pub format: String,
    pub label: String,
    pub display_cap: usize,
    pub progress_every: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String, // "analyze"
    pub status: ReceiptStatus,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<RecordFailure>,
    pub resources: ResourceInfo,
    pub args: AnalyzeArgsMeta,
    pub report: SentimentReport,
}

// -------
// Export
// -------

/// Flat per-record row for TSV/CSV/JSONL export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub index: usize,
    pub line: usize,
    pub label: String,
    pub sentiment: f64,
    pub class: SentimentClass,
    pub text: String,
}

impl From<&CorpusEntry> for ExportRow {
    fn from(entry: &CorpusEntry) -> Self {
        Self {
            index: entry.index,
            line: entry.line,
            label: entry.label.clone(),
            sentiment: entry.record.sentiment(),
            class: entry.record.class(),
            text: entry.record.text().to_string(),
        }
    }
}

// ------
// Trace
// ------

/// What the scorer did with one token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenVerdict {
    Stopword,
    Matched { weight: f64 },
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTrace {
    pub token: String,
    pub verdict: TokenVerdict,
}

/// Token-by-token account of how a text was scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrace {
    pub text: String,
    pub normalized: String,
    pub tokens: Vec<TokenTrace>,
    pub matched: usize,
    /// Mean of matched weights before clamping.
    pub raw_score: f64,
    /// `raw_score` clamped into `[-1.0, 1.0]`.
    pub score: f64,
}

// --------
// Formats
// --------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Plain console report.
    #[default]
    Text,
    /// Markdown tables.
    Md,
    /// JSON receipt (compact).
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Tab-separated values with a header row.
    #[default]
    Tsv,
    /// CSV with a header row.
    Csv,
    /// One JSON object per line.
    Jsonl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_neutral() {
        let record = ScoredText::new("hello");
        assert_eq!(record.sentiment(), 0.0);
        assert!(record.is_neutral());
        assert_eq!(record.class(), SentimentClass::Neutral);
    }

    #[test]
    fn set_sentiment_clamps_both_ends() {
        let mut record = ScoredText::new("x");
        record.set_sentiment(3.2).unwrap();
        assert_eq!(record.sentiment(), 1.0);
        record.set_sentiment(-1.5).unwrap();
        assert_eq!(record.sentiment(), -1.0);
        record.set_sentiment(0.25).unwrap();
        assert_eq!(record.sentiment(), 0.25);
    }

    #[test]
    fn set_sentiment_rejects_nan_and_keeps_previous_value() {
        let mut record = ScoredText::scored("x", 0.5).unwrap();
        assert_eq!(
            record.set_sentiment(f64::NAN),
            Err(SentimentError::NotANumber)
        );
        assert_eq!(record.sentiment(), 0.5);
    }

    #[test]
    fn infinities_clamp_to_bounds() {
        assert_eq!(clamp_sentiment(f64::INFINITY), Ok(1.0));
        assert_eq!(clamp_sentiment(f64::NEG_INFINITY), Ok(-1.0));
    }

    #[test]
    fn ordering_is_sentiment_then_text() {
        let a = ScoredText::scored("zzz", -0.5).unwrap();
        let b = ScoredText::scored("aaa", 0.5).unwrap();
        assert!(a < b);

        let c = ScoredText::scored("apple", 0.2).unwrap();
        let d = ScoredText::scored("banana", 0.2).unwrap();
        assert!(c < d);
        assert_eq!(c.cmp(&c.clone()), Ordering::Equal);
    }

    #[test]
    fn equality_needs_text_and_sentiment() {
        let a = ScoredText::scored("same", 0.3).unwrap();
        let b = ScoredText::scored("same", 0.3).unwrap();
        let c = ScoredText::scored("same", 0.4).unwrap();
        let d = ScoredText::scored("other", 0.3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn overall_label_band_is_exclusive() {
        assert_eq!(OverallLabel::from_average(0.1), OverallLabel::Neutral);
        assert_eq!(OverallLabel::from_average(-0.1), OverallLabel::Neutral);
        assert_eq!(OverallLabel::from_average(0.1001), OverallLabel::Positive);
        assert_eq!(OverallLabel::from_average(-0.1001), OverallLabel::Negative);
    }

    #[test]
    fn deserialize_clamps_out_of_range_sentiment() {
        let record: ScoredText =
            serde_json::from_str(r#"{"text":"loud","sentiment":4.0}"#).unwrap();
        assert_eq!(record.sentiment(), 1.0);
    }

    #[test]
    fn overall_label_serializes_upper_case() {
        let json = serde_json::to_string(&OverallLabel::Negative).unwrap();
        assert_eq!(json, "\"NEGATIVE\"");
    }

    #[test]
    fn token_verdict_is_tagged() {
        let json = serde_json::to_string(&TokenVerdict::Matched { weight: 0.5 }).unwrap();
        assert_eq!(json, r#"{"kind":"matched","weight":0.5}"#);
    }
}
