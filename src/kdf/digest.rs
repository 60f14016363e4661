//! src/kdf/digest.rs
//! Hash-truncation key derivation.

use crate::error::ProbeError;
use crate::utils::latin1_encode;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;

/// One hash-truncation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestScheme {
    Md5,
    Sha1Trunc16,
    Sha1Trunc24,
    Sha256Trunc16,
    Sha256Trunc24,
    Sha256,
}

impl DigestScheme {
    /// Every scheme, in derivation order.
    pub const ALL: [DigestScheme; 6] = [
        DigestScheme::Md5,
        DigestScheme::Sha1Trunc16,
        DigestScheme::Sha1Trunc24,
        DigestScheme::Sha256Trunc16,
        DigestScheme::Sha256Trunc24,
        DigestScheme::Sha256,
    ];

    /// Short label used in key provenance.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DigestScheme::Md5 => "md5",
            DigestScheme::Sha1Trunc16 => "sha1-16",
            DigestScheme::Sha1Trunc24 => "sha1-24",
            DigestScheme::Sha256Trunc16 => "sha256-16",
            DigestScheme::Sha256Trunc24 => "sha256-24",
            DigestScheme::Sha256 => "sha256-32",
        }
    }

    /// Requested truncation length. Digests shorter than this are kept whole.
    #[must_use]
    pub const fn truncate_to(self) -> usize {
        match self {
            DigestScheme::Md5
            | DigestScheme::Sha1Trunc16
            | DigestScheme::Sha256Trunc16 => 16,
            DigestScheme::Sha1Trunc24 | DigestScheme::Sha256Trunc24 => 24,
            DigestScheme::Sha256 => 32,
        }
    }
}

impl fmt::Display for DigestScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A key produced by one [`DigestScheme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    pub scheme: DigestScheme,
    pub bytes: Vec<u8>,
}

/// Derive every distinct key from raw secret bytes.
///
/// Bytes are hashed as given, without normalization. The first scheme that
/// produces a given byte value wins; later duplicates are dropped.
#[must_use]
pub fn derive_keys(secret: &[u8]) -> Vec<DerivedKey> {
    let md5 = Md5::digest(secret);
    let sha1 = Sha1::digest(secret);
    let sha256 = Sha256::digest(secret);

    let mut keys: Vec<DerivedKey> = Vec::with_capacity(DigestScheme::ALL.len());
    for scheme in DigestScheme::ALL {
        let digest: &[u8] = match scheme {
            DigestScheme::Md5 => &md5,
            DigestScheme::Sha1Trunc16 | DigestScheme::Sha1Trunc24 => &sha1,
            DigestScheme::Sha256Trunc16 | DigestScheme::Sha256Trunc24 | DigestScheme::Sha256 => {
                &sha256
            }
        };
        let bytes = &digest[..digest.len().min(scheme.truncate_to())];
        if keys.iter().all(|k| k.bytes != bytes) {
            keys.push(DerivedKey {
                scheme,
                bytes: bytes.to_vec(),
            });
        }
    }
    keys
}

/// Derive keys from a passphrase taken as single-byte Latin-1.
///
/// Fails only when the passphrase holds a character above `U+00FF`.
pub fn derive_passphrase_keys(passphrase: &str) -> Result<Vec<DerivedKey>, ProbeError> {
    Ok(derive_keys(&latin1_encode(passphrase)?))
}
