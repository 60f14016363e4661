//! src/search/record.rs
//! Match records and the search report.

use crate::cipher::{CipherKind, Mode};
use crate::consts::TAG_SEPARATOR;
use crate::decode::DecodeCandidate;
use crate::keyspace::KeyCandidate;
use std::fmt;
use std::time::Duration;

/// One printable decryption. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    token: String,
    tags: Vec<String>,
    cipher: CipherKind,
    mode: Mode,
    key: Vec<u8>,
    key_source: String,
    plaintext: String,
    score: f64,
    padding_valid: bool,
}

impl MatchRecord {
    /// Column order of [`to_row`](Self::to_row).
    pub const COLUMNS: [&'static str; 7] = [
        "ciphertext",
        "decoded_tags",
        "algo",
        "mode",
        "key_hex_or_str",
        "plaintext",
        "score",
    ];

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        token: &str,
        candidate: &DecodeCandidate,
        cipher: CipherKind,
        mode: Mode,
        key: &KeyCandidate,
        plaintext: String,
        score: f64,
        padding_valid: bool,
    ) -> Self {
        Self {
            token: token.to_string(),
            tags: candidate.tags().to_vec(),
            cipher,
            mode,
            key: key.bytes().to_vec(),
            key_source: key.to_string(),
            plaintext,
            score,
            padding_valid,
        }
    }

    /// The ciphertext token as supplied.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Decode tags joined with `|`.
    #[must_use]
    pub fn decode_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    #[must_use]
    pub fn cipher(&self) -> CipherKind {
        self.cipher
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Key bytes as lowercase hex; `hex::decode` restores them.
    #[must_use]
    pub fn key_hex(&self) -> String {
        hex::encode(&self.key)
    }

    /// Provenance such as `wordlist:hunter2/sha256-16` or `brute:abc`.
    #[must_use]
    pub fn key_source(&self) -> &str {
        &self.key_source
    }

    #[must_use]
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Whether PKCS#7 padding was valid and stripped.
    #[must_use]
    pub fn padding_valid(&self) -> bool {
        self.padding_valid
    }

    /// The record in [`COLUMNS`](Self::COLUMNS) order.
    #[must_use]
    pub fn to_row(&self) -> [String; 7] {
        [
            self.token.clone(),
            self.decode_tags(),
            self.cipher.name().to_string(),
            self.mode.name().to_string(),
            self.key_hex(),
            self.plaintext.clone(),
            self.score.to_string(),
        ]
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} {}/{} key={} ({}) [{}] {:?}",
            self.score,
            self.cipher,
            self.mode,
            self.key_hex(),
            self.key_source,
            self.decode_tags(),
            self.plaintext
        )
    }
}

/// Sort highest score first. Stable, so equal scores keep discovery order.
pub fn rank(records: &mut [MatchRecord]) {
    records.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Counters for one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub tokens: usize,
    pub candidates: usize,
    pub keys: u64,
    pub trials: u64,
    pub matches: usize,
    /// The deadline (or cancel flag) ended the search before it was exhausted.
    pub deadline_hit: bool,
    pub elapsed: Duration,
}

impl SearchStats {
    /// Fold a worker's counters into these.
    pub(crate) fn absorb(&mut self, other: &SearchStats) {
        self.keys += other.keys;
        self.trials += other.trials;
        self.deadline_hit |= other.deadline_hit;
    }
}

/// Everything a search produced, in the order trials completed.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub(crate) matches: Vec<MatchRecord>,
    pub(crate) stats: SearchStats,
}

impl SearchReport {
    #[must_use]
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn into_matches(self) -> Vec<MatchRecord> {
        self.matches
    }
}
