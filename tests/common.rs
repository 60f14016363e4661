//! tests/common.rs
//! Common constants and utilities shared across test files

use base64::Engine as _;
use cipherprobe_rs::cipher::{encrypt, CipherKind, Mode};

/// Plaintext used by the end-to-end scenarios
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &str = "the password is hunter2";

/// 16-byte key built from a single repeated character, so a one-symbol
/// charset reaches it in 16 brute-force tiers
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY16: &[u8; 16] = b"kkkkkkkkkkkkkkkk";

/// Short literal passphrase valid for Blowfish, CAST and RC2
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSPHRASE: &str = "hunter2";

/// Plaintext lengths straddling 8- and 16-byte block boundaries
#[allow(dead_code)] // Used across multiple test files
pub const TEST_LENGTHS: &[usize] = &[1, 7, 8, 9, 15, 16, 17, 31, 32, 33];

/// Encrypt and wrap as a standard base64 token, the way tokens arrive in practice
#[allow(dead_code)] // Used across multiple test files
pub fn seal_token(plaintext: &str, kind: CipherKind, mode: Mode, key: &[u8]) -> String {
    let sealed = encrypt(plaintext.as_bytes(), kind, mode, key).unwrap();
    base64::engine::general_purpose::STANDARD.encode(sealed)
}

/// A valid key length for every cipher
#[allow(dead_code)] // Used across multiple test files
pub fn key_for(kind: CipherKind) -> Vec<u8> {
    let len = match kind {
        CipherKind::Aes | CipherKind::Twofish | CipherKind::Cast => 16,
        CipherKind::Blowfish | CipherKind::Rc2 => 7,
    };
    (0..len as u8).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect()
}
