//! Structured error types for the library API.
//!
//! Errors carry a stable snake_case code plus a human message, and convert
//! to JSON for callers that want machine-readable failures.

use serde::{Deserialize, Serialize};
use std::fmt;

use sentmd_scan::ScanError;
use sentmd_settings::SettingsError;
use sentmd_types::SentimentError;

/// Error codes for sentmd operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Corpus file does not exist.
    CorpusNotFound,
    /// I/O error while reading input.
    IoError,
    /// Invalid settings/arguments.
    InvalidSettings,
    /// Config file present but unparseable.
    InvalidConfig,
    /// A text could not be scored.
    AnalysisError,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::CorpusNotFound => write!(f, "corpus_not_found"),
            ErrorCode::IoError => write!(f, "io_error"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
            ErrorCode::InvalidConfig => write!(f, "invalid_config"),
            ErrorCode::AnalysisError => write!(f, "analysis_error"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error for library callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentmdError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SentmdError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn corpus_not_found(path: &str) -> Self {
        Self::new(
            ErrorCode::CorpusNotFound,
            format!("corpus file not found: {}", path),
        )
    }

    pub fn invalid_settings(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidSettings, format!("Invalid settings: {}", err))
    }

    pub fn invalid_config(path: &str, err: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::InvalidConfig,
            format!("Invalid config file: {}", path),
            err.to_string(),
        )
    }

    pub fn analysis_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::AnalysisError, format!("Analysis failed: {}", err))
    }

    pub fn io_error(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::IoError, format!("I/O error: {}", err))
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {}", err))
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for SentmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for SentmdError {}

impl From<ScanError> for SentmdError {
    fn from(err: ScanError) -> Self {
        match &err {
            ScanError::NotFound { path } => Self::corpus_not_found(path),
            ScanError::Read { path, source } => Self::with_details(
                ErrorCode::IoError,
                format!("failed to read corpus {}", path),
                source.to_string(),
            ),
        }
    }
}

impl From<SettingsError> for SentmdError {
    fn from(err: SettingsError) -> Self {
        Self::invalid_settings(err)
    }
}

impl From<SentimentError> for SentmdError {
    fn from(err: SentimentError) -> Self {
        Self::analysis_error(err)
    }
}

impl From<std::io::Error> for SentmdError {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err)
    }
}

impl From<serde_json::Error> for SentmdError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_to_snake_case() {
        let err = SentmdError::corpus_not_found("tweets.csv");
        let json = err.to_json();
        assert!(json.contains("\"code\":\"corpus_not_found\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_display_includes_code() {
        let err = SentmdError::new(ErrorCode::AnalysisError, "test message");
        let display = err.to_string();
        assert!(display.contains("[analysis_error]"));
        assert!(display.contains("test message"));
    }

    #[test]
    fn details_are_appended() {
        let err = SentmdError::invalid_config("sentmd.toml", "unknown field `colour`");
        assert_eq!(
            err.to_string(),
            "[invalid_config] Invalid config file: sentmd.toml: unknown field `colour`"
        );
    }

    #[test]
    fn scan_not_found_maps_to_corpus_not_found() {
        let err: SentmdError = ScanError::NotFound {
            path: "gone.csv".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CorpusNotFound);
        assert!(err.message.contains("gone.csv"));
    }

    #[test]
    fn settings_errors_map_to_invalid_settings() {
        let err: SentmdError = SettingsError::DisplayCapTooSmall(2).into();
        assert_eq!(err.code, ErrorCode::InvalidSettings);
        assert!(err.message.contains("at least 4"));
    }
}
