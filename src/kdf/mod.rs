//! # Key Derivation
//!
//! Expands a passphrase into fixed-length keys by hashing it and truncating the
//! digest to lengths legacy ciphers accept.
//!
//! ## Schemes
//!
//! - MD5 digest (16 bytes)
//! - SHA-1 digest truncated to 16 and to 24 bytes (the latter is the full
//!   20-byte digest)
//! - SHA-256 digest truncated to 16, 24 and 32 bytes
//!
//! Keys are deduplicated by byte value in the order above, so a passphrase
//! yields between one and six keys.

mod digest;

pub use digest::{derive_keys, derive_passphrase_keys, DerivedKey, DigestScheme};
