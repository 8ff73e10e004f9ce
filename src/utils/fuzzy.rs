//! Fuzzy matching utilities
//!
//! Word-level similarity used to tolerate typos in chat messages.

use strsim::levenshtein;

/// Default similarity a word pair needs to count as the same word
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Normalized edit-distance similarity in `[0, 1]`.
///
/// `(longest - distance) / longest`, counted in chars. Two empty strings
/// are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b);
    (longest - distance) as f64 / longest as f64
}

/// Whether two words are similar enough to be treated as equal
pub fn fuzzy_eq(a: &str, b: &str, threshold: f64) -> bool {
    // similarity can never exceed shorter/longer, skip the DP when that
    // bound already falls below the threshold
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    let longest = len_a.max(len_b);
    if longest > 0 && (len_a.min(len_b) as f64 / longest as f64) < threshold {
        return false;
    }

    similarity(a, b) >= threshold
}
