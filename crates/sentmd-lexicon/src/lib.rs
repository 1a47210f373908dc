//! # sentmd-lexicon
//!
//! **Tier 1 (Resources)**
//!
//! In-memory stop-word set and word→weight lexicon, plus the loaders that
//! build them from newline- and tab-delimited text.
//!
//! A [`LexiconStore`] is built once per run and is read-only afterwards. It is
//! `Send + Sync`, so scorers may share it by reference or behind an `Arc`.
//!
//! Loading never fails: a missing or unreadable resource degrades to an empty
//! collection and a [`LexiconWarning`]; a row with a bad weight is dropped
//! with a warning. Bytes that are not valid UTF-8 are replaced, not fatal.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

/// Recoverable problems found while building the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconWarning {
    #[error("{kind} file not found: {path}")]
    Missing { kind: ResourceKind, path: String },

    #[error("failed to read {kind} file {path}: {reason}")]
    Unreadable {
        kind: ResourceKind,
        path: String,
        reason: String,
    },

    #[error("invalid sentiment weight for word '{word}' at row {row}: '{value}'")]
    BadWeight {
        row: usize,
        word: String,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Stopwords,
    Lexicon,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Stopwords => f.write_str("stop-word"),
            ResourceKind::Lexicon => f.write_str("lexicon"),
        }
    }
}

// ---------
// Stopwords
// ---------

/// Lowercase words excluded from scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Parse newline-delimited stop-words: trim, lowercase, drop blanks.
pub fn parse_stopwords(text: &str) -> StopwordSet {
    text.lines().collect()
}

// -------
// Lexicon
// -------

/// Lowercase word → signed weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    weights: HashMap<String, f64>,
}

impl Lexicon {
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Insert a normalized entry; later entries for the same word win.
    pub fn insert(&mut self, word: &str, weight: f64) {
        let key = word.trim().to_lowercase();
        if !key.is_empty() {
            self.weights.insert(key, weight);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::default();
        for (word, weight) in iter {
            lexicon.insert(word.as_ref(), weight);
        }
        lexicon
    }
}

/// Result of parsing lexicon text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconLoad {
    pub lexicon: Lexicon,
    pub warnings: Vec<LexiconWarning>,
}

impl LexiconLoad {
    pub fn skipped_rows(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, LexiconWarning::BadWeight { .. }))
            .count()
    }
}

/// Parse `word\tweight\t...` rows. Extra columns are ignored.
///
/// Rows are trimmed; blank rows and rows without a weight column are ignored.
/// A weight that is not a finite number drops the row with a
/// [`LexiconWarning::BadWeight`].
pub fn parse_lexicon(text: &str) -> LexiconLoad {
    let mut load = LexiconLoad::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split('\t');
        let (Some(word), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };

        match parse_weight(value) {
            Some(weight) => load.lexicon.insert(word, weight),
            None => {
                let warning = LexiconWarning::BadWeight {
                    row: idx + 1,
                    word: word.to_string(),
                    value: value.to_string(),
                };
                warn!("{warning}");
                load.warnings.push(warning);
            }
        }
    }

    load
}

fn parse_weight(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
}

// -------
// Loading
// -------

/// Read a stop-word file. Missing or unreadable files yield an empty set.
pub fn load_stopwords(path: &Path) -> (StopwordSet, Option<LexiconWarning>) {
    match read_resource(path, ResourceKind::Stopwords) {
        Ok(text) => {
            let set = parse_stopwords(&text);
            info!(count = set.len(), path = %path.display(), "stop-words loaded");
            (set, None)
        }
        Err(warning) => (StopwordSet::default(), Some(warning)),
    }
}

/// Read a lexicon file. Missing or unreadable files yield an empty lexicon.
pub fn load_lexicon(path: &Path) -> LexiconLoad {
    match read_resource(path, ResourceKind::Lexicon) {
        Ok(text) => {
            let load = parse_lexicon(&text);
            info!(
                words = load.lexicon.len(),
                skipped = load.skipped_rows(),
                path = %path.display(),
                "sentiment lexicon loaded"
            );
            load
        }
        Err(warning) => LexiconLoad {
            lexicon: Lexicon::default(),
            warnings: vec![warning],
        },
    }
}

fn read_resource(path: &Path, kind: ResourceKind) -> Result<String, LexiconWarning> {
    let bytes = fs::read(path).map_err(|err| {
        let path = path.display().to_string();
        let warning = if err.kind() == io::ErrorKind::NotFound {
            LexiconWarning::Missing { kind, path }
        } else {
            LexiconWarning::Unreadable {
                kind,
                path,
                reason: err.to_string(),
            }
        };
        warn!("{warning}");
        warning
    })?;

    // Undecodable bytes become U+FFFD; every other row still loads.
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                path = %path.display(),
                "{kind} file is not valid UTF-8; undecodable bytes were replaced"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(text)
}

// -----
// Store
// -----

/// Immutable scoring context: stop-words plus lexicon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexiconStore {
    stopwords: StopwordSet,
    lexicon: Lexicon,
}

/// A freshly loaded store with everything that went wrong along the way.
#[derive(Debug, Clone)]
pub struct StoreLoad {
    pub store: LexiconStore,
    pub warnings: Vec<LexiconWarning>,
}

impl StoreLoad {
    pub fn skipped_rows(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, LexiconWarning::BadWeight { .. }))
            .count()
    }
}

impl LexiconStore {
    pub fn new(stopwords: StopwordSet, lexicon: Lexicon) -> Self {
        Self { stopwords, lexicon }
    }

    /// Load both resources once. Never fails; see [`StoreLoad::warnings`].
    pub fn load(stopwords_path: &Path, lexicon_path: &Path) -> StoreLoad {
        let (stopwords, stop_warning) = load_stopwords(stopwords_path);
        let lexicon_load = load_lexicon(lexicon_path);

        let mut warnings: Vec<LexiconWarning> = stop_warning.into_iter().collect();
        warnings.extend(lexicon_load.warnings);

        StoreLoad {
            store: Self::new(stopwords, lexicon_load.lexicon),
            warnings,
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.lexicon.weight(word)
    }
}
