//! # Search Orchestration
//!
//! Drives {tokens} × {decode candidates} × {keys} × {ciphers} × {modes} under
//! one wall-clock deadline and collects every printable decryption.
//!
//! ## Flow
//!
//! 1. each token is decoded once ([`decode`](crate::decode))
//! 2. each candidate walks its lazy [`KeySpace`](crate::keyspace::KeySpace):
//!    wordlist keys, then brute-force tiers
//! 3. each key is tried under every enabled cipher in ECB and zero-IV CBC
//! 4. non-empty printable plaintexts are scored and appended as
//!    [`MatchRecord`]s, in the order trials complete
//!
//! The deadline is checked before each token, each candidate and each key.
//! Running out of time is a normal completion: the report keeps every match
//! found so far and sets [`SearchStats::deadline_hit`].
//!
//! ## Example
//!
//! ```
//! use cipherprobe_rs::cipher::{encrypt, CipherKind, Mode};
//! use cipherprobe_rs::SearchBuilder;
//! use base64::Engine as _;
//!
//! let sealed = encrypt(b"you shall pass", CipherKind::Aes, Mode::Ecb, b"0123456789abcdef")?;
//! let token = base64::engine::general_purpose::STANDARD.encode(sealed);
//!
//! let search = SearchBuilder::new()
//!     .with_wordlist(["0123456789abcdef"])
//!     .with_max_key_len(0)
//!     .with_ciphers(["AES"])
//!     .build()?;
//! let report = search.run(&[token]);
//! assert!(report.matches().iter().any(|m| m.plaintext() == "you shall pass"));
//! # Ok::<(), cipherprobe_rs::ProbeError>(())
//! ```

mod builder;
mod deadline;
mod record;
mod run;

pub use builder::SearchBuilder;
pub use deadline::Deadline;
pub use record::{rank, MatchRecord, SearchReport, SearchStats};

use crate::cipher::{CipherKind, CipherTrial, Mode};
use crate::keyspace::Charset;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// A validated, reusable search configuration. Built by [`SearchBuilder`].
#[derive(Debug, Clone)]
pub struct Search {
    pub(crate) wordlist: Vec<String>,
    pub(crate) charset: Charset,
    pub(crate) max_key_len: usize,
    pub(crate) ciphers: Vec<CipherKind>,
    /// Every (cipher, mode) pair tried per key, cipher-major.
    pub(crate) combos: Vec<(CipherKind, Mode)>,
    pub(crate) derived_keys: bool,
    pub(crate) time_limit: Duration,
    pub(crate) trial: CipherTrial,
    pub(crate) cancel: Option<Arc<AtomicBool>>,
}

impl Search {
    /// Ciphers that will actually be tried, in order.
    #[must_use]
    pub fn ciphers(&self) -> &[CipherKind] {
        &self.ciphers
    }

    #[must_use]
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// A fresh deadline for one run.
    pub(crate) fn start_deadline(&self) -> Deadline {
        let deadline = Deadline::after(self.time_limit);
        match &self.cancel {
            Some(flag) => deadline.with_cancel_flag(Arc::clone(flag)),
            None => deadline,
        }
    }
}
