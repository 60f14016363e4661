// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::error::ProbeError;

/// Encodes text as single-byte Latin-1 (one byte per character, no normalization).
///
/// Passphrases and brute-force strings are hashed and used as keys in this form.
/// Any character above `U+00FF` has no single-byte representation and is rejected.
pub fn latin1_encode(text: &str) -> Result<Vec<u8>, ProbeError> {
    text.chars()
        .map(|c| {
            u8::try_from(u32::from(c))
                .map_err(|_| ProbeError::Encoding(format!("{c:?} is not a Latin-1 character")))
        })
        .collect()
}

/// Decodes single-byte Latin-1 into text. Never fails.
#[inline]
pub fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// XORs `mask` into `block` in place.
///
/// Used for CBC chaining on both 8- and 16-byte blocks.
///
/// # Panics (by contract)
///
/// Panics if `mask.len() < block.len()`. Callers always pass the previous
/// ciphertext block (or the zero IV) of the same cipher, so lengths match.
#[inline(always)]
pub fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    let n = block.len();
    for (b, m) in block.iter_mut().zip(&mask[..n]) {
        *b ^= m;
    }
}
