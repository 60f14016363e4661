//! src/decode/base85.rs
//! Base85 (RFC 1924 alphabet) and ASCII85 decoding.

use crate::error::ProbeError;

/// RFC 1924 / git binary-patch alphabet.
const BASE85_ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

const INVALID: u8 = 0xFF;

const BASE85_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 85 {
        table[BASE85_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Whitespace skipped inside ASCII85 input.
const ASCII85_IGNORED: &[u8] = b" \t\n\r\x0b";

#[inline]
fn pack_group(digits: &[u8; 5]) -> Option<[u8; 4]> {
    let acc = digits
        .iter()
        .fold(0u64, |acc, &d| acc * 85 + u64::from(d));
    u32::try_from(acc).ok().map(u32::to_be_bytes)
}

/// Decode RFC 1924 base85.
///
/// The final partial group is padded with the highest digit and the padding
/// bytes are dropped from the output. Any byte outside the alphabet is an error.
pub fn base85_decode(input: &str) -> Result<Vec<u8>, ProbeError> {
    let bytes = input.as_bytes();
    let padding = (5 - bytes.len() % 5) % 5;
    let mut out = Vec::with_capacity((bytes.len() + padding) / 5 * 4);

    let padded = bytes
        .iter()
        .copied()
        .chain(std::iter::repeat(b'~').take(padding))
        .collect::<Vec<u8>>();

    for (index, chunk) in padded.chunks_exact(5).enumerate() {
        let mut digits = [0u8; 5];
        for (slot, &c) in digits.iter_mut().zip(chunk) {
            let value = BASE85_TABLE[c as usize];
            if value == INVALID {
                return Err(ProbeError::Decode(format!(
                    "base85: bad character {:?} in group {index}",
                    char::from(c)
                )));
            }
            *slot = value;
        }
        let word = pack_group(&digits)
            .ok_or_else(|| ProbeError::Decode(format!("base85: overflow in group {index}")))?;
        out.extend_from_slice(&word);
    }

    out.truncate(out.len() - padding);
    Ok(out)
}

/// Decode ASCII85 (btoa alphabet `!`..=`u`, `z` for a zero group, no `<~ ~>` framing).
///
/// Whitespace is ignored. A trailing group of `n` digits yields `n - 1` bytes.
pub fn ascii85_decode(input: &str) -> Result<Vec<u8>, ProbeError> {
    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    let mut group = [0u8; 5];
    let mut filled = 0usize;

    for c in input.bytes() {
        match c {
            b'!'..=b'u' => {
                group[filled] = c - b'!';
                filled += 1;
                if filled == 5 {
                    let word = pack_group(&group)
                        .ok_or_else(|| ProbeError::Decode("ascii85: overflow".into()))?;
                    out.extend_from_slice(&word);
                    filled = 0;
                }
            }
            b'z' if filled == 0 => out.extend_from_slice(&[0u8; 4]),
            b'z' => {
                return Err(ProbeError::Decode("ascii85: 'z' inside a 5-tuple".into()));
            }
            c if ASCII85_IGNORED.contains(&c) => {}
            c => {
                return Err(ProbeError::Decode(format!(
                    "ascii85: non-ascii85 digit {:?}",
                    char::from(c)
                )));
            }
        }
    }

    if filled > 0 {
        for slot in &mut group[filled..] {
            *slot = b'u' - b'!';
        }
        let word = pack_group(&group)
            .ok_or_else(|| ProbeError::Decode("ascii85: overflow".into()))?;
        out.extend_from_slice(&word[..filled - 1]);
    }

    Ok(out)
}
