//! src/cipher/trial.rs
//! One keyed decryption attempt.

use super::backend::Backend;
use super::padding::pkcs7_unpad;
use super::{Capabilities, CipherKind, Mode};

/// What to do with a decryption whose PKCS#7 padding does not check out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Keep the raw decrypted bytes; the printability filter weeds most out.
    #[default]
    Lenient,
    /// Discard the attempt.
    Strict,
}

/// Plaintext recovered by a trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// Unpadded bytes when the padding was valid, raw decrypted bytes otherwise.
    pub plaintext: Vec<u8>,
    pub padding_valid: bool,
}

/// Runs single decryption attempts against a fixed capability set.
///
/// A trial has exactly two outcomes: recovered bytes or nothing. Key length
/// mismatches, misaligned input, disabled ciphers and backend refusals all
/// produce `None`; none of them are errors worth reporting at this volume.
#[derive(Debug, Clone, Default)]
pub struct CipherTrial {
    capabilities: Capabilities,
    padding: PaddingPolicy,
}

impl CipherTrial {
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            padding: PaddingPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_padding_policy(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[must_use]
    pub fn padding_policy(&self) -> PaddingPolicy {
        self.padding
    }

    /// Decrypt `data` under `kind`/`mode`/`key`.
    ///
    /// Empty input yields `None`: there is nothing to recover.
    #[must_use]
    pub fn attempt(
        &self,
        data: &[u8],
        kind: CipherKind,
        mode: Mode,
        key: &[u8],
    ) -> Option<Recovered> {
        if !self.capabilities.supports(kind) {
            return None;
        }
        let spec = kind.spec();
        if data.is_empty() || data.len() % spec.block_size != 0 {
            return None;
        }
        if !spec.key_sizes.accepts(key.len()) {
            return None;
        }

        let raw = Backend::new(kind, key)?.decrypt(data, mode);
        match pkcs7_unpad(&raw, spec.block_size) {
            Some(body) => Some(Recovered {
                plaintext: body.to_vec(),
                padding_valid: true,
            }),
            None if self.padding == PaddingPolicy::Lenient => Some(Recovered {
                plaintext: raw,
                padding_valid: false,
            }),
            None => None,
        }
    }
}

/// One-off trial with every compiled cipher and lenient padding.
///
/// # Example
///
/// ```
/// use cipherprobe_rs::cipher::{attempt, encrypt, CipherKind, Mode};
///
/// let key = b"0123456789abcdef";
/// let sealed = encrypt(b"attack at dawn", CipherKind::Aes, Mode::Cbc, key)?;
/// let recovered = attempt(&sealed, CipherKind::Aes, Mode::Cbc, key).unwrap();
/// assert_eq!(recovered.plaintext, b"attack at dawn");
/// assert!(recovered.padding_valid);
/// # Ok::<(), cipherprobe_rs::ProbeError>(())
/// ```
#[must_use]
pub fn attempt(data: &[u8], kind: CipherKind, mode: Mode, key: &[u8]) -> Option<Recovered> {
    CipherTrial::default().attempt(data, kind, mode, key)
}
