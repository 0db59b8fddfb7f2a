//! Wire format
//!
//! Format:
//!   enc_key_len[4, little-endian] || enc_key[enc_key_len] || nonce[12] || aead_ct[16+]
//!
//! aead_ct = ciphertext || tag[16]
//!
//! The key id is carried next to this blob, not inside it.

use crate::error::EnvelopeError;
use crate::types::{EncryptedData, KeyId};

// ---------------------------------------------------------------------------
// Component sizes
// ---------------------------------------------------------------------------

/// Size of the encrypted-key length prefix.
pub const LENGTH_PREFIX_BYTES: usize = 4;

pub const NONCE_BYTES: usize = 12;
pub const TAG_BYTES: usize = 16;
pub const KEY_BYTES: usize = 32;
pub const KEY_ID_BYTES: usize = 16;

/// Smallest well-formed blob: empty encrypted key, nonce and a bare tag.
pub const MIN_BLOB_BYTES: usize = LENGTH_PREFIX_BYTES + NONCE_BYTES + TAG_BYTES;

/// Borrowed view of a framed blob, split at the length prefix.
#[derive(Debug, Clone, Copy)]
pub struct WireComponents<'a> {
    pub encrypted_key: &'a [u8],
    /// nonce || ciphertext || tag, not yet checked for length.
    pub sealed: &'a [u8],
}

/// Split off the length-prefixed encrypted key. Bounds are checked before
/// any slicing.
pub fn decode_wire(data: &[u8]) -> Result<WireComponents<'_>, EnvelopeError> {
    if data.len() < LENGTH_PREFIX_BYTES {
        return Err(EnvelopeError::MalformedInput("missing length prefix"));
    }

    let prefix: [u8; LENGTH_PREFIX_BYTES] = data[..LENGTH_PREFIX_BYTES]
        .try_into()
        .map_err(|_| EnvelopeError::MalformedInput("missing length prefix"))?;
    let key_len = usize::try_from(u32::from_le_bytes(prefix))
        .map_err(|_| EnvelopeError::MalformedInput("encrypted key length out of range"))?;

    let key_end = LENGTH_PREFIX_BYTES
        .checked_add(key_len)
        .filter(|&end| end <= data.len())
        .ok_or(EnvelopeError::MalformedInput("encrypted key length exceeds input"))?;

    Ok(WireComponents {
        encrypted_key: &data[LENGTH_PREFIX_BYTES..key_end],
        sealed: &data[key_end..],
    })
}

/// Split nonce || ciphertext || tag into its nonce and the rest.
pub fn split_nonce(sealed: &[u8]) -> Result<(&[u8; NONCE_BYTES], &[u8]), EnvelopeError> {
    if sealed.len() < NONCE_BYTES {
        return Err(EnvelopeError::MalformedInput("ciphertext shorter than nonce"));
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_BYTES);
    let nonce: &[u8; NONCE_BYTES] = nonce
        .try_into()
        .map_err(|_| EnvelopeError::MalformedInput("ciphertext shorter than nonce"))?;
    Ok((nonce, ciphertext))
}

/// Frame an encrypted key and an already sealed nonce || ciphertext || tag.
pub fn encode_wire(encrypted_key: &[u8], sealed: &[u8]) -> Result<Vec<u8>, EnvelopeError> {
    let key_len = u32::try_from(encrypted_key.len())
        .map_err(|_| EnvelopeError::InvalidArgument("encrypted key longer than u32::MAX"))?;

    let mut out = Vec::with_capacity(LENGTH_PREFIX_BYTES + encrypted_key.len() + sealed.len());
    out.extend_from_slice(&key_len.to_le_bytes());
    out.extend_from_slice(encrypted_key);
    out.extend_from_slice(sealed);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Inspection (for ops/debugging)
// ---------------------------------------------------------------------------

/// Blob metadata, extracted without touching any key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobInfo {
    pub key_id: KeyId,
    pub encrypted_key_bytes: usize,
    pub nonce: [u8; NONCE_BYTES],
    /// Total framed length
    pub total_bytes: usize,
    /// Ciphertext minus tag
    pub plaintext_bytes: usize,
}

impl core::fmt::Display for BlobInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "key_id={} | enc_key={} bytes | AES-256-GCM | {} bytes ({} plaintext)",
            self.key_id, self.encrypted_key_bytes, self.total_bytes, self.plaintext_bytes
        )
    }
}

/// Inspect a blob's framing without decrypting.
///
/// Reveals nothing secret; the nonce and encrypted key are not confidential.
pub fn inspect(data: &EncryptedData) -> Result<BlobInfo, EnvelopeError> {
    let parts = decode_wire(data.data())?;
    let (nonce, ciphertext) = split_nonce(parts.sealed)?;
    if ciphertext.len() < TAG_BYTES {
        return Err(EnvelopeError::MalformedInput("ciphertext shorter than tag"));
    }

    Ok(BlobInfo {
        key_id: data.key_id(),
        encrypted_key_bytes: parts.encrypted_key.len(),
        nonce: *nonce,
        total_bytes: data.data().len(),
        plaintext_bytes: ciphertext.len() - TAG_BYTES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_splits_at_prefix() {
        let framed = encode_wire(b"abcde", &[0xEE; 20]).unwrap();
        assert_eq!(&framed[..4], &[5, 0, 0, 0]);

        let parts = decode_wire(&framed).unwrap();
        assert_eq!(parts.encrypted_key, b"abcde");
        assert_eq!(parts.sealed, &[0xEE; 20]);
    }

    #[test]
    fn decode_rejects_short_prefix() {
        for len in 0..LENGTH_PREFIX_BYTES {
            let err = decode_wire(&vec![0u8; len]).unwrap_err();
            assert!(err.is_malformed());
        }
    }

    #[test]
    fn decode_rejects_length_past_end() {
        let mut framed = encode_wire(b"abc", b"").unwrap();
        framed[0] = 4;
        assert!(decode_wire(&framed).unwrap_err().is_malformed());

        let huge = [0xFF, 0xFF, 0xFF, 0xFF, 1, 2, 3];
        assert!(decode_wire(&huge).unwrap_err().is_malformed());
    }

    #[test]
    fn empty_key_and_empty_tail_decode() {
        let parts = decode_wire(&[0, 0, 0, 0]).unwrap();
        assert!(parts.encrypted_key.is_empty());
        assert!(parts.sealed.is_empty());
    }

    #[test]
    fn split_nonce_needs_twelve_bytes() {
        assert!(split_nonce(&[0u8; NONCE_BYTES - 1]).unwrap_err().is_malformed());

        let (nonce, rest) = split_nonce(&[1u8; NONCE_BYTES + 3]).unwrap();
        assert_eq!(nonce, &[1u8; NONCE_BYTES]);
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn inspect_reports_sizes() {
        let mut sealed = vec![9u8; NONCE_BYTES];
        sealed.extend_from_slice(&[0u8; 5 + TAG_BYTES]);
        let framed = encode_wire(&[1u8; 32], &sealed).unwrap();
        let data = EncryptedData::new(KeyId::new([3u8; KEY_ID_BYTES]), framed);

        let info = inspect(&data).unwrap();
        assert_eq!(info.encrypted_key_bytes, 32);
        assert_eq!(info.nonce, [9u8; NONCE_BYTES]);
        assert_eq!(info.plaintext_bytes, 5);
        assert_eq!(info.total_bytes, 4 + 32 + NONCE_BYTES + 5 + TAG_BYTES);
        assert!(info.to_string().contains(&"03".repeat(KEY_ID_BYTES)));
    }

    #[test]
    fn inspect_rejects_missing_tag() {
        let framed = encode_wire(b"", &[0u8; NONCE_BYTES + TAG_BYTES - 1]).unwrap();
        let data = EncryptedData::new(KeyId::default(), framed);
        assert!(inspect(&data).unwrap_err().is_malformed());
    }
}
