//! # Decode Candidates
//!
//! Turns one textual token into the set of byte sequences it could plausibly
//! stand for. Every scheme is best-effort: a scheme that rejects the token is
//! dropped, never reported.
//!
//! ## Schemes
//!
//! - standard base64 over four alphabet variants of the token (as-is, `*` → `/`,
//!   `*` → `+`, `=` stripped), each retried with 0–3 appended `=`
//! - RFC 1924 base85 and ASCII85 on the original token
//!
//! Identical byte sequences produced by several schemes collapse into one
//! [`DecodeCandidate`] that carries every tag, in the order they were produced.

mod radix64;
mod base85;

pub use self::radix64::base64_lenient;
pub use self::base85::{ascii85_decode, base85_decode};

use std::collections::HashMap;

/// Tag of the RFC 1924 base85 scheme.
pub const TAG_BASE85: &str = "b85";
/// Tag of the ASCII85 scheme.
pub const TAG_ASCII85: &str = "a85";

/// One plausible byte interpretation of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeCandidate {
    bytes: Vec<u8>,
    tags: Vec<String>,
}

impl DecodeCandidate {
    /// Decoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Every scheme that produced these bytes, in production order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tags flattened with [`TAG_SEPARATOR`](crate::consts::TAG_SEPARATOR).
    #[must_use]
    pub fn joined_tags(&self) -> String {
        self.tags.join(crate::consts::TAG_SEPARATOR)
    }
}

/// Alphabet variants of the token, deduplicated, original first.
fn alphabet_variants(token: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::with_capacity(4);
    for variant in [
        token.to_string(),
        token.replace('*', "/"),
        token.replace('*', "+"),
        token.replace('=', ""),
    ] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}

/// Base64 tag: `b64[<variant>]_pad<n>`.
fn base64_tag(variant: &str, pad: usize) -> String {
    format!("b64[{variant}]_pad{pad}")
}

/// Accumulates decodes, merging identical byte sequences.
#[derive(Default)]
struct CandidateSet {
    index: HashMap<Vec<u8>, usize>,
    candidates: Vec<DecodeCandidate>,
}

impl CandidateSet {
    fn insert(&mut self, bytes: Vec<u8>, tag: String) {
        match self.index.get(&bytes) {
            Some(&slot) => self.candidates[slot].tags.push(tag),
            None => {
                self.index.insert(bytes.clone(), self.candidates.len());
                self.candidates.push(DecodeCandidate {
                    bytes,
                    tags: vec![tag],
                });
            }
        }
    }
}

/// Generate every decode candidate of `token`.
///
/// The result may be empty; that is not an error, only zero candidates to try.
/// The empty token yields at most one candidate, the empty byte string.
///
/// # Example
///
/// ```
/// use cipherprobe_rs::decode;
///
/// let candidates = decode("aGk=");
/// assert!(candidates.iter().any(|c| c.bytes() == b"hi"));
/// ```
#[must_use]
pub fn decode(token: &str) -> Vec<DecodeCandidate> {
    let mut set = CandidateSet::default();

    for variant in alphabet_variants(token) {
        for pad in 0..4 {
            let attempt = format!("{variant}{}", "=".repeat(pad));
            if let Ok(bytes) = base64_lenient(&attempt) {
                set.insert(bytes, base64_tag(&variant, pad));
            }
        }
    }

    if let Ok(bytes) = base85_decode(token) {
        set.insert(bytes, TAG_BASE85.to_string());
    }
    if let Ok(bytes) = ascii85_decode(token) {
        set.insert(bytes, TAG_ASCII85.to_string());
    }

    set.candidates
}
