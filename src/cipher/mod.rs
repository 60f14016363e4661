//! # Cipher Table
//!
//! The fixed set of legacy block ciphers and chaining modes the search tries,
//! plus the capability set describing which of them this build can run.
//!
//! | Cipher   | Block | Key lengths        | Backend feature |
//! |----------|-------|--------------------|-----------------|
//! | Blowfish | 8     | 4..=56             | `blowfish`      |
//! | CAST     | 8     | 5..=16             | `cast5`         |
//! | RC2      | 8     | 5..=128            | `rc2`           |
//! | AES      | 16    | 16, 24, 32         | always          |
//! | Twofish  | 16    | 1..=32             | `twofish`       |
//!
//! CBC always uses an all-zero IV of the cipher's block size. Twofish keys
//! shorter than a native size are zero-padded to 16, 24 or 32 bytes.

mod backend;
mod padding;
mod seal;
mod trial;

pub use padding::{pkcs7_pad, pkcs7_unpad};
pub use seal::encrypt;
pub use trial::{attempt, CipherTrial, PaddingPolicy, Recovered};

use crate::error::ProbeError;
use std::fmt;
use std::str::FromStr;

/// Supported cipher identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CipherKind {
    Blowfish,
    Aes,
    Cast,
    Rc2,
    Twofish,
}

impl CipherKind {
    /// Every cipher, in default trial order.
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Blowfish,
        CipherKind::Aes,
        CipherKind::Cast,
        CipherKind::Rc2,
        CipherKind::Twofish,
    ];

    /// Static table entry.
    #[must_use]
    pub fn spec(self) -> &'static CipherSpec {
        &CIPHER_TABLE[self as usize]
    }

    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    #[must_use]
    pub fn block_size(self) -> usize {
        self.spec().block_size
    }

    /// Whether this build carries a backend for the cipher.
    #[must_use]
    pub const fn is_compiled(self) -> bool {
        match self {
            CipherKind::Aes => true,
            CipherKind::Blowfish => cfg!(feature = "blowfish"),
            CipherKind::Cast => cfg!(feature = "cast5"),
            CipherKind::Rc2 => cfg!(feature = "rc2"),
            CipherKind::Twofish => cfg!(feature = "twofish"),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = ProbeError;

    /// Case-insensitive; `ARC2` and `CAST5` are accepted aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blowfish" => Ok(CipherKind::Blowfish),
            "aes" => Ok(CipherKind::Aes),
            "cast" | "cast5" => Ok(CipherKind::Cast),
            "rc2" | "arc2" => Ok(CipherKind::Rc2),
            "twofish" => Ok(CipherKind::Twofish),
            _ => Err(ProbeError::UnknownCipher(s.to_string())),
        }
    }
}

/// Chaining mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ecb,
    /// Block chaining with an all-zero IV.
    Cbc,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Ecb, Mode::Cbc];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted key lengths: `min..=max` in steps of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizes {
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl KeySizes {
    #[must_use]
    pub const fn accepts(&self, len: usize) -> bool {
        len >= self.min && len <= self.max && (len - self.min) % self.step == 0
    }
}

/// One row of the compiled-in cipher table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSpec {
    pub kind: CipherKind,
    pub name: &'static str,
    pub block_size: usize,
    pub key_sizes: KeySizes,
}

/// Static cipher configuration, indexed by [`CipherKind`] discriminant.
pub static CIPHER_TABLE: [CipherSpec; 5] = [
    CipherSpec {
        kind: CipherKind::Blowfish,
        name: "Blowfish",
        block_size: 8,
        key_sizes: KeySizes { min: 4, max: 56, step: 1 },
    },
    CipherSpec {
        kind: CipherKind::Aes,
        name: "AES",
        block_size: 16,
        key_sizes: KeySizes { min: 16, max: 32, step: 8 },
    },
    CipherSpec {
        kind: CipherKind::Cast,
        name: "CAST",
        block_size: 8,
        key_sizes: KeySizes { min: 5, max: 16, step: 1 },
    },
    CipherSpec {
        kind: CipherKind::Rc2,
        name: "RC2",
        block_size: 8,
        key_sizes: KeySizes { min: 5, max: 128, step: 1 },
    },
    CipherSpec {
        kind: CipherKind::Twofish,
        name: "Twofish",
        block_size: 16,
        key_sizes: KeySizes { min: 1, max: 32, step: 1 },
    },
];

/// The ciphers this process can actually run.
///
/// Handed to [`CipherTrial`] at construction; a cipher outside the set is a
/// disabled cipher, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capabilities {
    available: Vec<CipherKind>,
}

impl Capabilities {
    /// Every cipher with a compiled backend.
    #[must_use]
    pub fn compiled() -> Self {
        Self {
            available: CipherKind::ALL
                .into_iter()
                .filter(|kind| kind.is_compiled())
                .collect(),
        }
    }

    /// Restrict to `kinds`; entries without a compiled backend are left out.
    #[must_use]
    pub fn only(kinds: impl IntoIterator<Item = CipherKind>) -> Self {
        let mut available: Vec<CipherKind> = Vec::new();
        for kind in kinds {
            if kind.is_compiled() && !available.contains(&kind) {
                available.push(kind);
            }
        }
        Self { available }
    }

    #[must_use]
    pub fn supports(&self, kind: CipherKind) -> bool {
        self.available.contains(&kind)
    }

    #[must_use]
    pub fn kinds(&self) -> &[CipherKind] {
        &self.available
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::compiled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("aes".parse::<CipherKind>().unwrap(), CipherKind::Aes);
        assert_eq!(" Blowfish ".parse::<CipherKind>().unwrap(), CipherKind::Blowfish);
        assert_eq!("ARC2".parse::<CipherKind>().unwrap(), CipherKind::Rc2);
        assert_eq!("cast5".parse::<CipherKind>().unwrap(), CipherKind::Cast);
        assert!(matches!(
            "DES".parse::<CipherKind>(),
            Err(ProbeError::UnknownCipher(name)) if name == "DES"
        ));
    }

    #[test]
    fn table_matches_kinds() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.spec().kind, kind);
        }
        assert_eq!(CipherKind::Aes.block_size(), 16);
        assert_eq!(CipherKind::Twofish.block_size(), 16);
        assert_eq!(CipherKind::Rc2.block_size(), 8);
    }

    #[test]
    fn key_sizes() {
        let aes = CipherKind::Aes.spec().key_sizes;
        assert!(aes.accepts(16) && aes.accepts(24) && aes.accepts(32));
        assert!(!aes.accepts(20) && !aes.accepts(8) && !aes.accepts(40));
        let cast = CipherKind::Cast.spec().key_sizes;
        assert!(cast.accepts(5) && cast.accepts(16));
        assert!(!cast.accepts(4) && !cast.accepts(17));
        let twofish = CipherKind::Twofish.spec().key_sizes;
        assert!(twofish.accepts(1) && twofish.accepts(3) && twofish.accepts(20));
        assert!(!twofish.accepts(0) && !twofish.accepts(33));
    }

    #[test]
    fn aes_is_always_available() {
        assert!(Capabilities::compiled().supports(CipherKind::Aes));
        let only = Capabilities::only([CipherKind::Aes, CipherKind::Aes]);
        assert_eq!(only.kinds(), &[CipherKind::Aes]);
    }
}
