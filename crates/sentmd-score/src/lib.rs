//! # sentmd-score
//!
//! **Tier 2 (Scoring)**
//!
//! Maps raw text to a sentiment score with a stop-word filter and a
//! word→weight lexicon:
//!
//! 1. Empty or whitespace-only text scores exactly `0.0`.
//! 2. Lowercase, then strip everything that is not an ASCII letter or
//!    whitespace.
//! 3. Split on whitespace runs.
//! 4. Skip stop-words; sum the weights of lexicon words and count them.
//! 5. Return the mean of the matched weights, or `0.0` when nothing matched.
//!
//! [`score`] returns the raw mean; [`score_text`] wraps it in a clamped
//! [`ScoredText`].

use sentmd_lexicon::LexiconStore;
use sentmd_types::{
    ScoreTrace, ScoredText, SentimentError, TokenTrace, TokenVerdict, clamp_sentiment,
};
use tracing::debug;

/// Whitespace as understood by the normalizer (ASCII only).
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Lowercase `text`, then drop every character that is not an ASCII letter or
/// ASCII whitespace. Digits and all punctuation are removed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || is_separator(*c))
        .collect()
}

/// Split normalized text into non-empty tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(is_separator).filter(|t| !t.is_empty())
}

/// Classify one normalized token against the store.
pub fn verdict(token: &str, store: &LexiconStore) -> TokenVerdict {
    if store.is_stopword(token) {
        TokenVerdict::Stopword
    } else if let Some(weight) = store.weight(token) {
        TokenVerdict::Matched { weight }
    } else {
        TokenVerdict::Unmatched
    }
}

/// Mean weight of the matched, non-stop-word tokens of `text`.
///
/// The result is not clamped; it can leave `[-1.0, 1.0]` when the lexicon
/// carries larger weights (VADER uses roughly `[-4, 4]`).
pub fn score(text: &str, store: &LexiconStore) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let normalized = normalize(text);
    let mut total = 0.0;
    let mut matched = 0usize;

    for token in tokens(&normalized) {
        if let TokenVerdict::Matched { weight } = verdict(token, store) {
            total += weight;
            matched += 1;
        }
    }

    sentmd_math::mean(total, matched).unwrap_or(0.0)
}

/// Score `text` and store the clamped result in a new [`ScoredText`].
pub fn score_text(text: &str, store: &LexiconStore) -> Result<ScoredText, SentimentError> {
    let mut record = ScoredText::new(text);
    record.set_sentiment(score(text, store))?;
    Ok(record)
}

/// Token-by-token account of [`score`]. `raw_score` always equals `score(text)`.
pub fn explain(text: &str, store: &LexiconStore) -> Result<ScoreTrace, SentimentError> {
    let normalized = if text.trim().is_empty() {
        String::new()
    } else {
        normalize(text)
    };

    let mut total = 0.0;
    let mut matched = 0usize;
    let mut traced = Vec::new();

    for token in tokens(&normalized) {
        let v = verdict(token, store);
        debug!(token, verdict = ?v, "token");
        if let TokenVerdict::Matched { weight } = v {
            total += weight;
            matched += 1;
        }
        traced.push(TokenTrace {
            token: token.to_string(),
            verdict: v,
        });
    }

    let raw_score = sentmd_math::mean(total, matched).unwrap_or(0.0);

    Ok(ScoreTrace {
        text: text.to_string(),
        normalized,
        tokens: traced,
        matched,
        raw_score,
        score: clamp_sentiment(raw_score)?,
    })
}
