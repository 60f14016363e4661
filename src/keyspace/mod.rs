//! # Key Space
//!
//! Lazy enumeration of the keys tried against one decode candidate.
//!
//! Keys come from two sources, each exhausted in turn:
//!
//! 1. the wordlist: each passphrase's raw bytes, or, with derived keys enabled,
//!    only its [`derive_keys`] expansion
//! 2. charset brute force: every string of length `1..=max_len` in
//!    lexicographic product order; with derived keys enabled each string's
//!    expansion follows the raw string
//!
//! Nothing bounds the brute-force tiers except the caller's charset, maximum
//! length and the search deadline.

mod brute;
mod charset;

pub use brute::BruteForce;
pub use charset::{expand_charset, Charset};

use crate::kdf::{derive_keys, DigestScheme};
use crate::utils::{latin1_decode, latin1_encode};
use std::collections::VecDeque;
use std::fmt;

/// Where a key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOrigin {
    Wordlist,
    BruteForce,
}

impl KeyOrigin {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            KeyOrigin::Wordlist => "wordlist",
            KeyOrigin::BruteForce => "brute",
        }
    }
}

/// A key to try, plus its provenance for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCandidate {
    bytes: Vec<u8>,
    origin: KeyOrigin,
    seed: String,
    scheme: Option<DigestScheme>,
}

impl KeyCandidate {
    /// The seed's own bytes used directly as the key.
    #[must_use]
    pub fn literal(origin: KeyOrigin, seed: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            origin,
            seed: seed.into(),
            scheme: None,
        }
    }

    /// A key derived from `seed` by `scheme`.
    #[must_use]
    pub fn derived(
        origin: KeyOrigin,
        seed: impl Into<String>,
        scheme: DigestScheme,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            bytes,
            origin,
            seed: seed.into(),
            scheme: Some(scheme),
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn origin(&self) -> KeyOrigin {
        self.origin
    }

    /// Passphrase or brute-force string the key was made from.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Derivation scheme, `None` for literal keys.
    #[must_use]
    pub fn scheme(&self) -> Option<DigestScheme> {
        self.scheme
    }

    /// Lowercase hex of the key bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for KeyCandidate {
    /// `origin:seed` or `origin:seed/scheme`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.origin.label(), self.seed)?;
        if let Some(scheme) = self.scheme {
            write!(f, "/{scheme}")?;
        }
        Ok(())
    }
}

/// Iterator over every key for one decode candidate: wordlist first, then brute force.
#[derive(Debug, Clone)]
pub struct KeySpace<'a> {
    wordlist: std::slice::Iter<'a, String>,
    brute: BruteForce<'a>,
    derived: bool,
    pending: VecDeque<KeyCandidate>,
}

impl<'a> KeySpace<'a> {
    #[must_use]
    pub fn new(wordlist: &'a [String], charset: &'a Charset, max_len: usize, derived: bool) -> Self {
        Self {
            wordlist: wordlist.iter(),
            brute: BruteForce::new(charset, max_len),
            derived,
            pending: VecDeque::new(),
        }
    }

    /// Current brute-force length tier (0 while still on the wordlist).
    #[must_use]
    pub fn tier(&self) -> usize {
        self.brute.tier()
    }

    fn push_derived(&mut self, origin: KeyOrigin, seed: &str, secret: &[u8]) {
        for key in derive_keys(secret) {
            self.pending
                .push_back(KeyCandidate::derived(origin, seed, key.scheme, key.bytes));
        }
    }

    fn refill_from_wordlist(&mut self) -> bool {
        while let Some(passphrase) = self.wordlist.next() {
            let secret = match latin1_encode(passphrase) {
                Ok(secret) => secret,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping wordlist entry");
                    continue;
                }
            };
            if self.derived {
                self.push_derived(KeyOrigin::Wordlist, passphrase, &secret);
            } else {
                self.pending.push_back(KeyCandidate::literal(
                    KeyOrigin::Wordlist,
                    passphrase.as_str(),
                    secret,
                ));
            }
            return true;
        }
        false
    }

    fn refill_from_brute(&mut self) -> bool {
        let Some(secret) = self.brute.next() else {
            return false;
        };
        let seed = latin1_decode(&secret);
        if self.derived {
            self.pending.push_back(KeyCandidate::literal(
                KeyOrigin::BruteForce,
                seed.as_str(),
                secret.clone(),
            ));
            self.push_derived(KeyOrigin::BruteForce, &seed, &secret);
        } else {
            self.pending
                .push_back(KeyCandidate::literal(KeyOrigin::BruteForce, seed, secret));
        }
        true
    }
}

impl Iterator for KeySpace<'_> {
    type Item = KeyCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Some(key);
            }
            if !self.refill_from_wordlist() && !self.refill_from_brute() {
                return None;
            }
        }
    }
}
