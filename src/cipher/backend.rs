//! src/cipher/backend.rs
//! Keyed block-cipher instances and the ECB/CBC block loops.

use super::{CipherKind, Mode};
use crate::consts::RC2_EFFECTIVE_KEY_BITS;
use crate::utils::xor_in_place;
use aes::cipher::{Block, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

/// A cipher instance keyed for one trial.
pub(crate) enum Backend {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    #[cfg(feature = "blowfish")]
    Blowfish(blowfish::Blowfish),
    #[cfg(feature = "cast5")]
    Cast(cast5::Cast5),
    #[cfg(feature = "rc2")]
    Rc2(rc2::Rc2),
    #[cfg(feature = "twofish")]
    Twofish(twofish::Twofish),
}

#[inline]
fn keyed<C: KeyInit>(key: &[u8]) -> Option<C> {
    C::new_from_slice(key).ok()
}

/// Zero-pad a 1..=32 byte key to the next Twofish key size (16, 24 or 32).
#[cfg(feature = "twofish")]
fn twofish_key(key: &[u8]) -> Option<Vec<u8>> {
    let size = match key.len() {
        1..=16 => 16,
        17..=24 => 24,
        25..=32 => 32,
        _ => return None,
    };
    let mut padded = key.to_vec();
    padded.resize(size, 0);
    Some(padded)
}

impl Backend {
    /// Key the cipher, or `None` when the key is rejected or the backend is not compiled.
    ///
    /// Callers check the key length against the cipher table first; this only
    /// covers what the backend itself refuses.
    pub(crate) fn new(kind: CipherKind, key: &[u8]) -> Option<Self> {
        match kind {
            CipherKind::Aes => match key.len() {
                16 => keyed(key).map(Backend::Aes128),
                24 => keyed(key).map(Backend::Aes192),
                32 => keyed(key).map(Backend::Aes256),
                _ => None,
            },
            #[cfg(feature = "blowfish")]
            CipherKind::Blowfish => keyed(key).map(Backend::Blowfish),
            #[cfg(feature = "cast5")]
            CipherKind::Cast => keyed(key).map(Backend::Cast),
            #[cfg(feature = "rc2")]
            CipherKind::Rc2 => {
                if key.is_empty() || key.len() > 128 {
                    return None;
                }
                Some(Backend::Rc2(rc2::Rc2::new_with_eff_key_len(
                    key,
                    RC2_EFFECTIVE_KEY_BITS,
                )))
            }
            #[cfg(feature = "twofish")]
            CipherKind::Twofish => keyed(&twofish_key(key)?).map(Backend::Twofish),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Decrypt block-aligned `data` (caller checked alignment).
    pub(crate) fn decrypt(&self, data: &[u8], mode: Mode) -> Vec<u8> {
        match self {
            Backend::Aes128(c) => decrypt_blocks(c, data, mode),
            Backend::Aes192(c) => decrypt_blocks(c, data, mode),
            Backend::Aes256(c) => decrypt_blocks(c, data, mode),
            #[cfg(feature = "blowfish")]
            Backend::Blowfish(c) => decrypt_blocks(c, data, mode),
            #[cfg(feature = "cast5")]
            Backend::Cast(c) => decrypt_blocks(c, data, mode),
            #[cfg(feature = "rc2")]
            Backend::Rc2(c) => decrypt_blocks(c, data, mode),
            #[cfg(feature = "twofish")]
            Backend::Twofish(c) => decrypt_blocks(c, data, mode),
        }
    }

    /// Encrypt block-aligned `data` (caller padded it).
    pub(crate) fn encrypt(&self, data: &[u8], mode: Mode) -> Vec<u8> {
        match self {
            Backend::Aes128(c) => encrypt_blocks(c, data, mode),
            Backend::Aes192(c) => encrypt_blocks(c, data, mode),
            Backend::Aes256(c) => encrypt_blocks(c, data, mode),
            #[cfg(feature = "blowfish")]
            Backend::Blowfish(c) => encrypt_blocks(c, data, mode),
            #[cfg(feature = "cast5")]
            Backend::Cast(c) => encrypt_blocks(c, data, mode),
            #[cfg(feature = "rc2")]
            Backend::Rc2(c) => encrypt_blocks(c, data, mode),
            #[cfg(feature = "twofish")]
            Backend::Twofish(c) => encrypt_blocks(c, data, mode),
        }
    }
}

fn decrypt_blocks<C: BlockDecrypt>(cipher: &C, data: &[u8], mode: Mode) -> Vec<u8> {
    let block_size = C::block_size();
    let mut out = Vec::with_capacity(data.len());
    // zero IV
    let mut previous = vec![0u8; block_size];

    for chunk in data.chunks_exact(block_size) {
        let mut block = Block::<C>::clone_from_slice(chunk);
        cipher.decrypt_block(&mut block);
        if mode == Mode::Cbc {
            xor_in_place(&mut block, &previous);
            previous.copy_from_slice(chunk);
        }
        out.extend_from_slice(&block);
    }
    out
}

fn encrypt_blocks<C: BlockEncrypt>(cipher: &C, data: &[u8], mode: Mode) -> Vec<u8> {
    let block_size = C::block_size();
    let mut out = Vec::with_capacity(data.len());
    let mut previous = vec![0u8; block_size];

    for chunk in data.chunks_exact(block_size) {
        let mut block = Block::<C>::clone_from_slice(chunk);
        if mode == Mode::Cbc {
            xor_in_place(&mut block, &previous);
        }
        cipher.encrypt_block(&mut block);
        if mode == Mode::Cbc {
            previous.copy_from_slice(&block);
        }
        out.extend_from_slice(&block);
    }
    out
}
