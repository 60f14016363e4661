// src/lib.rs

#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod cipher;
pub mod consts;
pub mod decode;
pub mod error;
pub mod kdf;
pub mod keyspace;
pub mod score;
pub mod search;
pub mod utils;

// High-level API: configure a search, run it over tokens
pub use error::ProbeError;
pub use search::{rank, MatchRecord, Search, SearchBuilder, SearchReport, SearchStats};

// Search building blocks, usable on their own
pub use cipher::{attempt, CipherKind, Mode};
pub use decode::{decode, DecodeCandidate};
pub use kdf::derive_keys;
pub use keyspace::{KeyCandidate, KeySpace};
pub use score::{is_printable, score};

#[cfg(feature = "batch-ops")]
pub use batch_ops::search_batch;
