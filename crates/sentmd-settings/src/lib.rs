//! # sentmd-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings types for the scan, model and format layers, plus the
//! `sentmd.toml` file schema. These types mirror CLI arguments without Clap
//! dependencies, so library consumers can drive the workflows directly.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Default values and validation
//! * `sentmd.toml` parsing
//!
//! ## What does NOT belong here
//! * Clap parsing (use sentmd-config)
//! * Business logic

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use sentmd_types::{ExportFormat, ReportFormat};

/// Default lexicon file (VADER layout: `word\tweight\t...`).
pub const DEFAULT_LEXICON: &str = "vader_lexicon.txt";

/// Default stop-word file (one word per line).
pub const DEFAULT_STOPWORDS: &str = "SmartStoplist.txt";

/// Default number of characters shown for extreme messages.
pub const DEFAULT_DISPLAY_CAP: usize = 100;

/// Smallest display cap that still shows one character before `...`.
pub const MIN_DISPLAY_CAP: usize = 4;

/// Default progress checkpoint interval, in analyzed records.
pub const DEFAULT_PROGRESS_EVERY: usize = 100;

/// Corpus path meaning "read standard input".
pub const STDIN_CORPUS: &str = "-";

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sentmd.toml";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("display cap must be at least 4, got {0}")]
    DisplayCapTooSmall(usize),

    #[error("{0} path must not be empty")]
    EmptyPath(&'static str),

    #[error("source label must not be empty")]
    EmptyLabel,
}

/// Where the stop-words and lexicon come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSettings {
    #[serde(default = "default_lexicon")]
    pub lexicon: String,

    #[serde(default = "default_stopwords")]
    pub stopwords: String,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            lexicon: default_lexicon(),
            stopwords: default_stopwords(),
        }
    }
}

fn default_lexicon() -> String {
    DEFAULT_LEXICON.to_string()
}

fn default_stopwords() -> String {
    DEFAULT_STOPWORDS.to_string()
}

/// Options for one corpus pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Source label attached to every record (e.g. an account name).
    #[serde(default = "default_label")]
    pub label: String,

    /// Emit a progress checkpoint every N analyzed records (0 = never).
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            label: default_label(),
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

fn default_label() -> String {
    "corpus".to_string()
}

fn default_progress_every() -> usize {
    DEFAULT_PROGRESS_EVERY
}

/// Report rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_display_cap")]
    pub display_cap: usize,

    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
            format: ReportFormat::Text,
        }
    }
}

fn default_display_cap() -> usize {
    DEFAULT_DISPLAY_CAP
}

/// Everything `sentmd analyze` needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSettings {
    /// Corpus path, or `-` for stdin.
    pub corpus: String,

    #[serde(default)]
    pub resources: ResourceSettings,

    #[serde(default)]
    pub scan: ScanOptions,

    #[serde(default)]
    pub report: ReportSettings,
}

impl AnalyzeSettings {
    /// Settings for `corpus` with every other option at its default.
    pub fn for_corpus(corpus: impl Into<String>) -> Self {
        Self {
            corpus: corpus.into(),
            resources: ResourceSettings::default(),
            scan: ScanOptions::default(),
            report: ReportSettings::default(),
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.corpus == STDIN_CORPUS
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.corpus.trim().is_empty() {
            return Err(SettingsError::EmptyPath("corpus"));
        }
        if self.resources.lexicon.trim().is_empty() {
            return Err(SettingsError::EmptyPath("lexicon"));
        }
        if self.resources.stopwords.trim().is_empty() {
            return Err(SettingsError::EmptyPath("stop-word"));
        }
        if self.scan.label.trim().is_empty() {
            return Err(SettingsError::EmptyLabel);
        }
        if self.report.display_cap < MIN_DISPLAY_CAP {
            return Err(SettingsError::DisplayCapTooSmall(self.report.display_cap));
        }
        Ok(())
    }
}

/// Everything `sentmd export` needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub corpus: String,

    #[serde(default)]
    pub resources: ResourceSettings,

    #[serde(default)]
    pub scan: ScanOptions,

    #[serde(default)]
    pub format: ExportFormat,
}

impl ExportSettings {
    pub fn for_corpus(corpus: impl Into<String>) -> Self {
        Self {
            corpus: corpus.into(),
            resources: ResourceSettings::default(),
            scan: ScanOptions::default(),
            format: ExportFormat::default(),
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.corpus == STDIN_CORPUS
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.corpus.trim().is_empty() {
            return Err(SettingsError::EmptyPath("corpus"));
        }
        if self.resources.lexicon.trim().is_empty() {
            return Err(SettingsError::EmptyPath("lexicon"));
        }
        if self.resources.stopwords.trim().is_empty() {
            return Err(SettingsError::EmptyPath("stop-word"));
        }
        if self.scan.label.trim().is_empty() {
            return Err(SettingsError::EmptyLabel);
        }
        Ok(())
    }
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root `sentmd.toml` structure. Every field is optional; CLI flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub resources: ResourcesConfig,
    pub scan: ScanConfig,
    pub report: ReportConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Lexicon TSV path.
    pub lexicon: Option<String>,

    /// Stop-word list path.
    pub stopwords: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Source label for every record.
    pub label: Option<String>,

    /// Progress checkpoint interval (0 disables).
    pub progress_every: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Characters shown for extreme messages.
    pub display_cap: Option<usize>,

    /// "text", "md" or "json".
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// "tsv", "csv" or "jsonl".
    pub format: Option<ExportFormat>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let s = AnalyzeSettings::for_corpus("tweets.csv");
        assert_eq!(s.resources.lexicon, DEFAULT_LEXICON);
        assert_eq!(s.resources.stopwords, DEFAULT_STOPWORDS);
        assert_eq!(s.report.display_cap, 100);
        assert_eq!(s.scan.progress_every, 100);
        assert_eq!(s.report.format, ReportFormat::Text);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn stdin_marker_is_detected() {
        assert!(AnalyzeSettings::for_corpus("-").reads_stdin());
        assert!(!AnalyzeSettings::for_corpus("feed.txt").reads_stdin());
    }

    #[test]
    fn tiny_display_cap_is_rejected() {
        let mut s = AnalyzeSettings::for_corpus("x");
        s.report.display_cap = 3;
        assert_eq!(s.validate(), Err(SettingsError::DisplayCapTooSmall(3)));
        s.report.display_cap = 4;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn export_settings_skip_display_cap_check() {
        let mut s = ExportSettings::for_corpus("-");
        assert!(s.reads_stdin());
        assert_eq!(s.format, ExportFormat::Tsv);
        assert!(s.validate().is_ok());
        s.scan.label = "  ".into();
        assert_eq!(s.validate(), Err(SettingsError::EmptyLabel));
    }

    #[test]
    fn empty_paths_are_rejected() {
        let mut s = AnalyzeSettings::for_corpus("  ");
        assert_eq!(s.validate(), Err(SettingsError::EmptyPath("corpus")));
        s.corpus = "x".into();
        s.resources.lexicon = String::new();
        assert_eq!(s.validate(), Err(SettingsError::EmptyPath("lexicon")));
    }

    #[test]
    fn empty_toml_is_all_none() {
        let cfg = TomlConfig::parse("").unwrap();
        assert_eq!(cfg, TomlConfig::default());
    }
}
