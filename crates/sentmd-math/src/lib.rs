//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Arithmetic mean of a running sum, or `None` when nothing was counted.
#[must_use]
pub fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Share of `part` in `whole` as a 0..=100 percentage, 4-decimal rounded.
///
/// Returns `None` for an empty whole instead of dividing by zero.
#[must_use]
pub fn percent(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(round_f64(part as f64 * 100.0 / whole as f64, 4))
    }
}

/// Number of characters (Unicode scalar values) in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
