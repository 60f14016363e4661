//! src/cipher/seal.rs
//! PKCS#7-padded encryption, the inverse of a successful trial.

use super::backend::Backend;
use super::padding::pkcs7_pad;
use super::{CipherKind, Mode};
use crate::error::ProbeError;

/// Encrypt `plaintext` with PKCS#7 padding under `kind`/`mode`/`key` (zero IV for CBC).
///
/// Useful for building known-answer fixtures for the search.
///
/// # Errors
///
/// - [`ProbeError::UnavailableCipher`] when the backend is not compiled
/// - [`ProbeError::InvalidKeyLength`] when the cipher rejects the key
pub fn encrypt(
    plaintext: &[u8],
    kind: CipherKind,
    mode: Mode,
    key: &[u8],
) -> Result<Vec<u8>, ProbeError> {
    if !kind.is_compiled() {
        return Err(ProbeError::UnavailableCipher(kind.name().to_string()));
    }
    let spec = kind.spec();
    let invalid = || ProbeError::InvalidKeyLength {
        cipher: spec.name,
        len: key.len(),
    };
    if !spec.key_sizes.accepts(key.len()) {
        return Err(invalid());
    }

    let backend = Backend::new(kind, key).ok_or_else(invalid)?;
    Ok(backend.encrypt(&pkcs7_pad(plaintext, spec.block_size), mode))
}
