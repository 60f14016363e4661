//! # Error Types
//!
//! This module defines the error type used by the fallible helpers of the library.
//!
//! The search itself never fails: decode failures, cipher trial failures and an
//! elapsed deadline are all normal outcomes. [`ProbeError`] only surfaces from
//! configuration, from the individual decoding schemes and from fixture sealing.

use thiserror::Error;

/// The error type for cipherprobe operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// A single decoding scheme rejected the token.
    ///
    /// Returned by [`base64_lenient`](crate::decode::base64_lenient),
    /// [`base85_decode`](crate::decode::base85_decode) and
    /// [`ascii85_decode`](crate::decode::ascii85_decode). [`decode`](crate::decode)
    /// swallows these and simply drops the scheme.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A cipher name did not match any entry of the cipher table.
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    /// The cipher was recognised but its backend is not compiled into this build.
    #[error("Cipher not available in this build: {0}")]
    UnavailableCipher(String),

    /// Key length is not accepted by the cipher.
    #[error("Invalid key length for {cipher}: {len} bytes")]
    InvalidKeyLength {
        /// Canonical cipher name.
        cipher: &'static str,
        /// Offending key length in bytes.
        len: usize,
    },

    /// Text contains a character outside the single-byte Latin-1 range.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Search configuration could not be built.
    #[error("Config error: {0}")]
    Config(String),
}
