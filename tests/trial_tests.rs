//! tests/trial_tests.rs
//! Single decryption attempts: known answers, round-trips, refusals

mod common;
use common::{key_for, TEST_LENGTHS};

use cipherprobe_rs::cipher::{
    attempt, encrypt, Capabilities, CipherKind, CipherTrial, Mode, PaddingPolicy,
};
use cipherprobe_rs::ProbeError;
use hex::decode;

fn compiled_kinds() -> Vec<CipherKind> {
    Capabilities::compiled().kinds().to_vec()
}

#[test]
fn aes128_known_answer() {
    let key = decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let ct = decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();
    let pt = decode("00112233445566778899aabbccddeeff").unwrap();

    // trailing 0xff is not valid padding: lenient keeps the raw block
    let recovered = attempt(&ct, CipherKind::Aes, Mode::Ecb, &key).unwrap();
    assert_eq!(recovered.plaintext, pt);
    assert!(!recovered.padding_valid);

    let strict = CipherTrial::default().with_padding_policy(PaddingPolicy::Strict);
    assert!(strict.attempt(&ct, CipherKind::Aes, Mode::Ecb, &key).is_none());
}

#[cfg(feature = "blowfish")]
#[test]
fn blowfish_known_answer() {
    let ct = decode("4ef997456198dd78").unwrap();
    let recovered = attempt(&ct, CipherKind::Blowfish, Mode::Ecb, &[0u8; 8]).unwrap();
    assert_eq!(recovered.plaintext, vec![0u8; 8]);
    assert!(!recovered.padding_valid);
}

#[cfg(feature = "cast5")]
#[test]
fn cast5_known_answer() {
    let key = decode("0123456712345678234567893456789a").unwrap();
    let ct = decode("238b4fe5847e44b2").unwrap();
    let recovered = attempt(&ct, CipherKind::Cast, Mode::Ecb, &key).unwrap();
    assert_eq!(recovered.plaintext, decode("0123456789abcdef").unwrap());
}

#[cfg(feature = "twofish")]
#[test]
fn twofish_known_answer() {
    let ct = decode("9f589f5cf6122c32b6bfec2f2ae8c35a").unwrap();
    let recovered = attempt(&ct, CipherKind::Twofish, Mode::Ecb, &[0u8; 16]).unwrap();
    assert_eq!(recovered.plaintext, vec![0u8; 16]);
}

#[test]
fn roundtrip_every_compiled_cipher_and_mode() {
    for kind in compiled_kinds() {
        let key = key_for(kind);
        for mode in Mode::ALL {
            for &len in TEST_LENGTHS {
                let plaintext: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
                let sealed = encrypt(&plaintext, kind, mode, &key).unwrap();
                assert_eq!(sealed.len() % kind.block_size(), 0);
                assert!(sealed.len() > plaintext.len());

                let recovered = attempt(&sealed, kind, mode, &key)
                    .unwrap_or_else(|| panic!("{kind}/{mode} len {len}: no plaintext"));
                assert_eq!(recovered.plaintext, plaintext, "{kind}/{mode} len {len}");
                assert!(recovered.padding_valid);
            }
        }
    }
}

#[test]
fn single_block_cbc_with_zero_iv_equals_ecb() {
    for kind in compiled_kinds() {
        let key = key_for(kind);
        let plaintext = vec![b'x'; kind.block_size() - 1];
        let ecb = encrypt(&plaintext, kind, Mode::Ecb, &key).unwrap();
        let cbc = encrypt(&plaintext, kind, Mode::Cbc, &key).unwrap();
        assert_eq!(ecb, cbc, "{kind}");
    }
}

#[test]
fn multi_block_cbc_differs_from_ecb() {
    let key = key_for(CipherKind::Aes);
    let plaintext = [b'z'; 40];
    let ecb = encrypt(&plaintext, CipherKind::Aes, Mode::Ecb, &key).unwrap();
    let cbc = encrypt(&plaintext, CipherKind::Aes, Mode::Cbc, &key).unwrap();
    assert_eq!(ecb[..16], cbc[..16]);
    assert_ne!(ecb[16..], cbc[16..]);

    // Decrypting in the wrong mode garbles every block after the first
    let wrong = attempt(&cbc, CipherKind::Aes, Mode::Ecb, &key).unwrap();
    assert_ne!(wrong.plaintext, plaintext);
}

#[test]
fn misaligned_input_yields_nothing() {
    for kind in compiled_kinds() {
        let key = key_for(kind);
        let data = vec![0u8; kind.block_size() + 3];
        for mode in Mode::ALL {
            assert!(attempt(&data, kind, mode, &key).is_none(), "{kind}/{mode}");
        }
    }
}

#[test]
fn empty_input_yields_nothing() {
    for kind in compiled_kinds() {
        assert!(attempt(&[], kind, Mode::Ecb, &key_for(kind)).is_none());
    }
}

#[test]
fn invalid_key_lengths_yield_nothing() {
    let block16 = [0u8; 16];
    assert!(attempt(&block16, CipherKind::Aes, Mode::Ecb, b"short").is_none());
    assert!(attempt(&block16, CipherKind::Aes, Mode::Ecb, &[1u8; 20]).is_none());
    assert!(attempt(&block16, CipherKind::Aes, Mode::Ecb, &[]).is_none());

    #[cfg(feature = "blowfish")]
    {
        assert!(attempt(&block16, CipherKind::Blowfish, Mode::Ecb, b"abc").is_none());
        assert!(attempt(&block16, CipherKind::Blowfish, Mode::Ecb, &[1u8; 57]).is_none());
    }
    #[cfg(feature = "cast5")]
    assert!(attempt(&block16, CipherKind::Cast, Mode::Ecb, &[1u8; 17]).is_none());
    #[cfg(feature = "twofish")]
    {
        assert!(attempt(&block16, CipherKind::Twofish, Mode::Ecb, &[]).is_none());
        assert!(attempt(&block16, CipherKind::Twofish, Mode::Ecb, &[1u8; 33]).is_none());
    }
}

#[cfg(feature = "twofish")]
#[test]
fn short_twofish_keys_are_zero_padded() {
    let plaintext = b"the password is x";
    let mut padded = b"abc".to_vec();
    padded.resize(16, 0);

    let sealed = encrypt(plaintext, CipherKind::Twofish, Mode::Ecb, &padded).unwrap();
    let recovered = attempt(&sealed, CipherKind::Twofish, Mode::Ecb, b"abc").unwrap();
    assert_eq!(recovered.plaintext, plaintext);
    assert!(recovered.padding_valid);

    // and the other way round, including the 20-byte SHA-1 length
    for (len, native) in [(1, 16), (8, 16), (20, 24), (25, 32)] {
        let key = vec![0x5au8; len];
        let mut native_key = key.clone();
        native_key.resize(native, 0);
        let sealed = encrypt(plaintext, CipherKind::Twofish, Mode::Cbc, &key).unwrap();
        let recovered = attempt(&sealed, CipherKind::Twofish, Mode::Cbc, &native_key).unwrap();
        assert_eq!(recovered.plaintext, plaintext, "key length {len}");
    }
}

#[test]
fn derived_key_lengths_fit_aes_except_sha1_24() {
    let block16 = [7u8; 16];
    for len in [16, 24, 32] {
        assert!(attempt(&block16, CipherKind::Aes, Mode::Ecb, &vec![1u8; len]).is_some());
    }
    // the full SHA-1 digest is 20 bytes: no AES key size
    assert!(attempt(&block16, CipherKind::Aes, Mode::Ecb, &[1u8; 20]).is_none());
}

#[test]
fn restricted_capabilities_disable_ciphers() {
    let key = key_for(CipherKind::Aes);
    let sealed = encrypt(b"hello", CipherKind::Aes, Mode::Ecb, &key).unwrap();

    let trial = CipherTrial::new(Capabilities::only(Vec::<CipherKind>::new()));
    assert!(trial.capabilities().kinds().is_empty());
    assert!(trial.attempt(&sealed, CipherKind::Aes, Mode::Ecb, &key).is_none());

    let trial = CipherTrial::new(Capabilities::only([CipherKind::Aes]));
    assert_eq!(
        trial
            .attempt(&sealed, CipherKind::Aes, Mode::Ecb, &key)
            .map(|r| r.plaintext),
        Some(b"hello".to_vec())
    );
}

#[test]
fn strict_policy_keeps_valid_padding() {
    let key = key_for(CipherKind::Aes);
    let sealed = encrypt(b"padded fine", CipherKind::Aes, Mode::Cbc, &key).unwrap();
    let trial = CipherTrial::default().with_padding_policy(PaddingPolicy::Strict);
    assert_eq!(trial.padding_policy(), PaddingPolicy::Strict);

    let recovered = trial.attempt(&sealed, CipherKind::Aes, Mode::Cbc, &key).unwrap();
    assert_eq!(recovered.plaintext, b"padded fine");
}

#[test]
fn encrypt_rejects_bad_keys() {
    assert!(matches!(
        encrypt(b"x", CipherKind::Aes, Mode::Ecb, b"tiny"),
        Err(ProbeError::InvalidKeyLength { cipher: "AES", len: 4 })
    ));
}

#[cfg(not(feature = "twofish"))]
#[test]
fn encrypt_reports_missing_backend() {
    assert!(matches!(
        encrypt(b"x", CipherKind::Twofish, Mode::Ecb, &[0u8; 16]),
        Err(ProbeError::UnavailableCipher(_))
    ));
}
