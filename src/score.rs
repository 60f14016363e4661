//! # Plaintext Scoring
//!
//! Printability filter and an English-likeness heuristic used to rank hits.
//! The score is a ranking aid only: near-ties are expected.

use crate::consts::{ALLOWED_PUNCTUATION, SCORE_WORDS, SYMBOL_PENALTY, VOWEL_WEIGHT};

/// `true` when every byte is printable ASCII (`0x20..=0x7E`).
///
/// The empty sequence is trivially printable; the search drops empty
/// plaintexts separately.
#[inline]
#[must_use]
pub fn is_printable(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (0x20..=0x7E).contains(&b))
}

/// Heuristic plausibility of `text` as English.
///
/// - `+1` per (lowercased, non-overlapping) occurrence of each of
///   `" the "`, `" and "`, `" is "`, `" you "`, `" password"`, `" pass"`, `" "`
/// - `+0.1 ×` the fraction of vowels
/// - `-0.05` per character that is neither alphanumeric nor one of ``" .,:;'-_@#"``
///
/// # Example
///
/// ```
/// use cipherprobe_rs::score;
///
/// assert!(score("the password is secret") > score("x#$%&*!y"));
/// ```
#[must_use]
pub fn score(text: &str) -> f64 {
    let lower = text.to_lowercase();

    let words: usize = SCORE_WORDS
        .iter()
        .map(|word| lower.matches(word).count())
        .sum();

    let total = lower.chars().count().max(1);
    let vowels = lower.chars().filter(|c| "aeiou".contains(*c)).count();
    let vowel_fraction = vowels as f64 / total as f64;

    let symbols = text
        .chars()
        .filter(|&c| !c.is_alphanumeric() && !ALLOWED_PUNCTUATION.contains(c))
        .count();

    words as f64 + vowel_fraction * VOWEL_WEIGHT - symbols as f64 * SYMBOL_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_bounds() {
        assert!(is_printable(b" ~"));
        assert!(!is_printable(b"\x1f"));
        assert!(!is_printable(b"\x7f"));
        assert!(!is_printable(b"ok\n"));
    }

    #[test]
    fn word_counts_dominate() {
        // " is ", " password", " pass" and three spaces
        let s = score("the password is secret");
        assert!(s > 6.0 && s < 6.1, "score was {s}");
    }

    #[test]
    fn symbols_are_penalised() {
        assert!((score("$$$$") + 0.2).abs() < 1e-9);
        assert!((score("a.b,c") - score("a-b_c")).abs() < 1e-9);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score(""), 0.0);
    }
}
