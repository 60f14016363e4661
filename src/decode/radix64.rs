//! src/decode/radix64.rs
//! Lenient standard-alphabet base64, as loose tooling decodes it.

use crate::error::ProbeError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Standard alphabet, unpadded input, non-zero trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

#[inline]
fn is_symbol(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'+' || c == b'/'
}

/// Decode base64 the permissive way.
///
/// - characters outside the standard alphabet are skipped
/// - `=` only counts once at least two symbols of the current quad were seen;
///   a quad completed by padding ends decoding, anything after it is ignored
/// - a trailing partial quad that was not closed by padding is an error
///
/// Non-ASCII input is rejected outright.
pub fn base64_lenient(input: &str) -> Result<Vec<u8>, ProbeError> {
    if !input.is_ascii() {
        return Err(ProbeError::Decode("base64 input must be ASCII".into()));
    }

    let mut canonical = String::with_capacity(input.len());
    let mut quad_pos = 0usize;
    let mut pads = 0usize;
    let mut closed = false;

    for c in input.bytes() {
        if c == b'=' {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    closed = true;
                    break;
                }
            }
            continue;
        }
        if !is_symbol(c) {
            continue;
        }
        pads = 0;
        canonical.push(char::from(c));
        quad_pos = (quad_pos + 1) % 4;
    }

    if !closed {
        match quad_pos {
            0 => {}
            1 => {
                return Err(ProbeError::Decode(format!(
                    "base64: {} data characters cannot be 1 more than a multiple of 4",
                    canonical.len()
                )))
            }
            _ => return Err(ProbeError::Decode("base64: incorrect padding".into())),
        }
    }

    LENIENT
        .decode(canonical.as_bytes())
        .map_err(|e| ProbeError::Decode(format!("base64: {e}")))
}
