//! Capabilities injected into encrypt and decrypt.
//!
//! Each is a one-method trait so a key manager backed by a KMS, an HSM or a
//! plain map can implement it as an object. Closures with the matching
//! signature implement the traits too.

use crate::error::BoxError;
use crate::types::{Key, KeyDetails, KeyId};

/// Produces a fresh data key for a context.
///
/// The context is opaque to the core. Implementations may use it to pick a
/// key family; it is never written into the output.
pub trait KeyCreator {
    fn create_key(&self, context: &[u8]) -> Result<KeyDetails, BoxError>;
}

/// Turns an encrypted key back into the data key.
pub trait KeyRetriever {
    fn retrieve_key(&self, key_id: &KeyId, encrypted_key: &[u8]) -> Result<Key, BoxError>;
}

/// Supplies GCM nonces.
///
/// Must return exactly `size` bytes, unique per call under a given key.
/// Reusing a nonce under AES-GCM breaks both confidentiality and integrity.
pub trait NonceCreator {
    fn create_nonce(&self, size: usize) -> Result<Vec<u8>, BoxError>;
}

impl<F> KeyCreator for F
where
    F: Fn(&[u8]) -> Result<KeyDetails, BoxError>,
{
    fn create_key(&self, context: &[u8]) -> Result<KeyDetails, BoxError> {
        self(context)
    }
}

impl<F> KeyRetriever for F
where
    F: Fn(&KeyId, &[u8]) -> Result<Key, BoxError>,
{
    fn retrieve_key(&self, key_id: &KeyId, encrypted_key: &[u8]) -> Result<Key, BoxError> {
        self(key_id, encrypted_key)
    }
}

impl<F> NonceCreator for F
where
    F: Fn(usize) -> Result<Vec<u8>, BoxError>,
{
    fn create_nonce(&self, size: usize) -> Result<Vec<u8>, BoxError> {
        self(size)
    }
}
