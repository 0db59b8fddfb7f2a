//! AEAD: AES-256-GCM, empty associated data.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use crate::error::EnvelopeError;
use crate::types::Key;
use crate::wire::{NONCE_BYTES, TAG_BYTES};

/// Build the cipher from a data key.
pub fn cipher(key: &Key) -> Result<Aes256Gcm, EnvelopeError> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| EnvelopeError::CipherConstruction("AES-256 needs a 32-byte key"))
}

/// AEAD seal (encrypt path). Returns nonce || ciphertext || tag.
pub fn seal(
    cipher: &Aes256Gcm,
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<Vec<u8>, EnvelopeError> {
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| EnvelopeError::InvalidArgument("plaintext too long for AES-GCM"))?;

    let mut out = Vec::with_capacity(NONCE_BYTES + ciphertext.len());
    out.extend_from_slice(nonce);
    out.extend_from_slice(&ciphertext);
    Ok(out)
}

/// AEAD open (decrypt path). Every failure is the same opaque error.
pub fn open(
    cipher: &Aes256Gcm,
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
) -> Result<Vec<u8>, EnvelopeError> {
    if ciphertext.len() < TAG_BYTES {
        return Err(EnvelopeError::Decryption);
    }
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| EnvelopeError::Decryption)
}
