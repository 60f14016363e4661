//! src/cipher/padding.rs
//! PKCS#7 padding.

/// Append PKCS#7 padding; always adds between 1 and `block` bytes.
#[must_use]
pub fn pkcs7_pad(data: &[u8], block: usize) -> Vec<u8> {
    let pad = block - data.len() % block;
    let mut out = Vec::with_capacity(data.len() + pad);
    out.extend_from_slice(data);
    out.resize(data.len() + pad, pad as u8);
    out
}

/// Strip PKCS#7 padding, or `None` when the padding is malformed.
#[must_use]
pub fn pkcs7_unpad(data: &[u8], block: usize) -> Option<&[u8]> {
    if data.is_empty() || data.len() % block != 0 {
        return None;
    }
    let pad = usize::from(*data.last()?);
    if pad == 0 || pad > block {
        return None;
    }
    let (body, tail) = data.split_at(data.len() - pad);
    tail.iter()
        .all(|&b| usize::from(b) == pad)
        .then_some(body)
}
