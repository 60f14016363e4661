//! src/keyspace/brute.rs
//! Lexicographic product enumeration, shortest length first.

use super::charset::Charset;

/// Every string over a [`Charset`] of length `1..=max_len`.
///
/// Order matches a nested product: the last position turns fastest, and all
/// strings of length `L` come before any of length `L + 1`. Yields raw bytes.
#[derive(Debug, Clone)]
pub struct BruteForce<'a> {
    symbols: &'a [u8],
    max_len: usize,
    odometer: Vec<usize>,
    exhausted: bool,
}

impl<'a> BruteForce<'a> {
    #[must_use]
    pub fn new(charset: &'a Charset, max_len: usize) -> Self {
        Self {
            symbols: charset.symbols(),
            max_len,
            odometer: Vec::new(),
            exhausted: charset.is_empty() || max_len == 0,
        }
    }

    /// Length of the strings currently being produced (0 before the first).
    #[must_use]
    pub fn tier(&self) -> usize {
        self.odometer.len()
    }

    /// Advance to the next string, growing a tier when the current one wraps.
    fn advance(&mut self) -> bool {
        if self.odometer.is_empty() {
            self.odometer.push(0);
            return true;
        }
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < self.symbols.len() {
                return true;
            }
            self.odometer[pos] = 0;
        }
        if self.odometer.len() == self.max_len {
            return false;
        }
        self.odometer.push(0);
        tracing::debug!(tier = self.odometer.len(), "brute force entering next length tier");
        true
    }
}

impl Iterator for BruteForce<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.odometer.iter().map(|&i| self.symbols[i]).collect())
    }
}
