//! src/keyspace/charset.rs
//! Compact charset syntax: `a-z0-9!@#`.

use crate::error::ProbeError;
use crate::utils::latin1_encode;

/// Expand a charset spec into its characters.
///
/// `x-y` expands to every character from `x` to `y` inclusive (nothing when
/// `y < x`); any other character stands for itself. A `-` that cannot start a
/// range (leading, trailing or doubled) is literal.
#[must_use]
pub fn expand_charset(spec: &str) -> Vec<char> {
    let chars: Vec<char> = spec.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == '-' {
            out.extend(chars[i]..=chars[i + 2]);
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// A brute-force alphabet in single-byte form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
}

impl Charset {
    /// Parse and expand `spec`, dropping repeated characters (first wins).
    ///
    /// Characters above `U+00FF` cannot be a single key byte and are rejected.
    pub fn parse(spec: &str) -> Result<Self, ProbeError> {
        let expanded: String = expand_charset(spec).into_iter().collect();
        let encoded = latin1_encode(&expanded)
            .map_err(|e| ProbeError::Config(format!("charset {spec:?}: {e}")))?;

        let mut symbols = Vec::with_capacity(encoded.len());
        for b in encoded {
            if !symbols.contains(&b) {
                symbols.push(b);
            }
        }
        Ok(Self { symbols })
    }

    /// Alphabet bytes in expansion order.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of strings of length `1..=max_len`, saturating at `u128::MAX`.
    #[must_use]
    pub fn keyspace_size(&self, max_len: usize) -> u128 {
        let base = self.symbols.len() as u128;
        let mut tier: u128 = 1;
        let mut total: u128 = 0;
        for _ in 0..max_len {
            tier = tier.saturating_mul(base);
            total = total.saturating_add(tier);
        }
        total
    }
}
