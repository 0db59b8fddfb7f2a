//! Encrypt and decrypt, plus a façade bundling the three capabilities.

use crate::error::EnvelopeError;
use crate::nonce::OsRandom;
use crate::provider::{KeyCreator, KeyRetriever, NonceCreator};
use crate::types::EncryptedData;
use crate::wire::NONCE_BYTES;
use crate::{aead, wire};

/// Encrypt `plaintext` under a fresh data key from `key_creator`.
///
/// `context` is handed to the key creator and otherwise ignored; it is not
/// part of the output. The nonce source must never repeat a nonce under the
/// same key.
///
/// The data key is wiped when this returns.
pub fn encrypt<C, N>(
    context: &[u8],
    plaintext: &[u8],
    key_creator: &C,
    nonce_creator: &N,
) -> Result<EncryptedData, EnvelopeError>
where
    C: KeyCreator + ?Sized,
    N: NonceCreator + ?Sized,
{
    if plaintext.is_empty() {
        return Err(EnvelopeError::InvalidArgument("plaintext must not be empty"));
    }

    let details = key_creator
        .create_key(context)
        .map_err(EnvelopeError::KeyCreation)?;
    let cipher = aead::cipher(&details.key)?;

    let nonce = nonce_creator
        .create_nonce(NONCE_BYTES)
        .map_err(EnvelopeError::NonceCreation)?;
    let nonce: [u8; NONCE_BYTES] = nonce
        .as_slice()
        .try_into()
        .map_err(|_| EnvelopeError::InvalidNonce {
            expected: NONCE_BYTES,
            actual: nonce.len(),
        })?;

    let sealed = aead::seal(&cipher, &nonce, plaintext)?;
    let data = wire::encode_wire(&details.encrypted.encrypted_key, &sealed)?;

    Ok(EncryptedData::new(details.encrypted.key_id, data))
}

/// Decrypt a blob produced by [`encrypt`].
///
/// An empty blob decrypts to an empty plaintext without consulting the
/// retriever. Authentication failures of any kind (wrong key, tampered
/// nonce, ciphertext or tag) all return [`EnvelopeError::Decryption`].
/// The key id is not authenticated; only the framed bytes are.
pub fn decrypt<R>(data: &EncryptedData, retriever: &R) -> Result<Vec<u8>, EnvelopeError>
where
    R: KeyRetriever + ?Sized,
{
    if data.data().is_empty() {
        return Ok(Vec::new());
    }

    let parts = wire::decode_wire(data.data())?;

    let key = retriever
        .retrieve_key(&data.key_id(), parts.encrypted_key)
        .map_err(EnvelopeError::KeyRetrieval)?;
    if key.is_invalid() {
        return Err(EnvelopeError::CipherConstruction("retriever returned the invalid key"));
    }
    let cipher = aead::cipher(&key)?;

    let (nonce, ciphertext) = wire::split_nonce(parts.sealed)?;
    aead::open(&cipher, nonce, ciphertext)
}

// ---------------------------------------------------------------------------
// Façade
// ---------------------------------------------------------------------------

/// Key creator, key retriever and nonce source held together.
///
/// ```
/// use keyed_envelope::{Envelope, MemoryKeyManager};
///
/// let keys = MemoryKeyManager::new();
/// let envelope = Envelope::new(keys.clone(), keys);
///
/// let sealed = envelope.seal(b"tenant-42", b"secret")?;
/// assert_eq!(envelope.open(&sealed)?, b"secret");
/// # Ok::<(), keyed_envelope::EnvelopeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Envelope<C, R, N = OsRandom> {
    creator: C,
    retriever: R,
    nonces: N,
}

impl<C, R> Envelope<C, R, OsRandom>
where
    C: KeyCreator,
    R: KeyRetriever,
{
    /// Envelope using OS random nonces.
    pub fn new(creator: C, retriever: R) -> Self {
        Self::with_nonce_creator(creator, retriever, OsRandom)
    }
}

impl<C, R, N> Envelope<C, R, N>
where
    C: KeyCreator,
    R: KeyRetriever,
    N: NonceCreator,
{
    pub fn with_nonce_creator(creator: C, retriever: R, nonces: N) -> Self {
        Self {
            creator,
            retriever,
            nonces,
        }
    }

    #[inline]
    pub fn seal(&self, context: &[u8], plaintext: &[u8]) -> Result<EncryptedData, EnvelopeError> {
        encrypt(context, plaintext, &self.creator, &self.nonces)
    }

    #[inline]
    pub fn open(&self, data: &EncryptedData) -> Result<Vec<u8>, EnvelopeError> {
        decrypt(data, &self.retriever)
    }

    pub fn creator(&self) -> &C {
        &self.creator
    }

    pub fn retriever(&self) -> &R {
        &self.retriever
    }
}
