//! src/search/builder.rs
//! Search configuration builder.

use crate::cipher::{Capabilities, CipherKind, CipherTrial, Mode, PaddingPolicy};
use crate::consts::{DEFAULT_CHARSET, DEFAULT_CIPHERS, DEFAULT_MAX_KEY_LEN, DEFAULT_TIME_LIMIT_SECS};
use crate::error::ProbeError;
use crate::keyspace::Charset;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use super::Search;

/// Builder for a [`Search`].
///
/// Defaults: charset `a-z0-9`, keys up to 3
/// characters, every cipher, no derived keys, 600 second budget, lenient
/// padding.
///
/// # Thread Safety
///
/// The built [`Search`] is `Send + Sync`; one instance can serve concurrent runs.
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    wordlist: Vec<String>,
    charset: String,
    max_key_len: usize,
    ciphers: Vec<String>,
    derived_keys: bool,
    time_limit: Duration,
    padding: PaddingPolicy,
    capabilities: Capabilities,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            wordlist: Vec::new(),
            charset: DEFAULT_CHARSET.to_string(),
            max_key_len: DEFAULT_MAX_KEY_LEN,
            ciphers: DEFAULT_CIPHERS.split(',').map(str::to_string).collect(),
            derived_keys: false,
            time_limit: Duration::from_secs(DEFAULT_TIME_LIMIT_SECS),
            padding: PaddingPolicy::default(),
            capabilities: Capabilities::compiled(),
            cancel: None,
        }
    }

    /// Passphrases tried before brute force, in order.
    #[must_use]
    pub fn with_wordlist<I, S>(mut self, wordlist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wordlist = wordlist.into_iter().map(Into::into).collect();
        self
    }

    /// Brute-force alphabet in range syntax, e.g. `a-zA-Z0-9!@#`.
    #[must_use]
    pub fn with_charset(mut self, spec: impl Into<String>) -> Self {
        self.charset = spec.into();
        self
    }

    /// Longest brute-forced key; `0` disables brute force.
    #[must_use]
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    /// Cipher names to try (case-insensitive, `ARC2`/`CAST5` aliases accepted).
    #[must_use]
    pub fn with_ciphers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ciphers = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        self
    }

    /// Expand every passphrase and brute-force string with the hash derivations.
    #[must_use]
    pub fn with_derived_keys(mut self, enabled: bool) -> Self {
        self.derived_keys = enabled;
        self
    }

    /// Total wall-clock budget, measured from the start of each run.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    #[must_use]
    pub fn with_padding_policy(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the compiled capability set (e.g. to disable a backend).
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Stop early once `flag` is set, checked wherever the deadline is.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Resolve ciphers against the capability set.
    ///
    /// Unknown and unavailable names are reported once here and skipped.
    fn resolve_ciphers(&self) -> Vec<CipherKind> {
        let mut kinds: Vec<CipherKind> = Vec::with_capacity(self.ciphers.len());
        for name in &self.ciphers {
            match name.parse::<CipherKind>() {
                Ok(kind) if !self.capabilities.supports(kind) => {
                    tracing::warn!(cipher = %kind, "cipher backend not available, skipping");
                }
                Ok(kind) => {
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "skipping cipher"),
            }
        }
        if kinds.is_empty() {
            tracing::warn!("no usable ciphers configured, search will try nothing");
        }
        kinds
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// [`ProbeError::Config`] when the charset holds characters above `U+00FF`.
    pub fn build(self) -> Result<Search, ProbeError> {
        let charset = Charset::parse(&self.charset)?;
        let ciphers = self.resolve_ciphers();

        let combos: Vec<(CipherKind, Mode)> = ciphers
            .iter()
            .flat_map(|&kind| Mode::ALL.into_iter().map(move |mode| (kind, mode)))
            .collect();

        tracing::info!(
            wordlist = self.wordlist.len(),
            charset = charset.len(),
            max_key_len = self.max_key_len,
            brute_force_keys = %charset.keyspace_size(self.max_key_len),
            derived_keys = self.derived_keys,
            ciphers = ?ciphers,
            "search configured"
        );

        Ok(Search {
            wordlist: self.wordlist,
            charset,
            max_key_len: self.max_key_len,
            ciphers,
            combos,
            derived_keys: self.derived_keys,
            time_limit: self.time_limit,
            trial: CipherTrial::new(self.capabilities).with_padding_policy(self.padding),
            cancel: self.cancel,
        })
    }
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
