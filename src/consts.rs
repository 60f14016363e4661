//! # Constants
//!
//! Tool defaults and the weights of the plausibility score.

/// Default maximum length of brute-forced charset keys.
///
/// The keyspace grows as `alphabet^len`; three characters of `a-z0-9` is
/// roughly 48k keys, which completes in seconds.
pub const DEFAULT_MAX_KEY_LEN: usize = 3;

/// Default charset specification for brute force.
pub const DEFAULT_CHARSET: &str = "a-z0-9";

/// Default wall-clock limit for a whole search, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 600;

/// Default comma separated cipher list.
pub const DEFAULT_CIPHERS: &str = "Blowfish,AES,CAST,RC2,Twofish";

/// Effective key length in bits used for RC2 (matches common legacy toolkits).
pub const RC2_EFFECTIVE_KEY_BITS: usize = 1024;

/// Substrings counted (lowercased, non-overlapping) when scoring plaintext.
pub const SCORE_WORDS: &[&str] = &[" the ", " and ", " is ", " you ", " password", " pass", " "];

/// Weight of the vowel fraction in the score.
pub const VOWEL_WEIGHT: f64 = 0.1;

/// Penalty per character that is neither alphanumeric nor allow-listed.
pub const SYMBOL_PENALTY: f64 = 0.05;

/// Punctuation that is not penalised by the score.
pub const ALLOWED_PUNCTUATION: &str = " .,:;'-_@#";

/// Separator used when decode tags are flattened into one column.
pub const TAG_SEPARATOR: &str = "|";
