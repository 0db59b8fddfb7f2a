//! In-memory key manager: both key creator and key retriever.
//!
//! Layout:
//!   KeyId (first 16 bytes of SHA-256(context)) -> handle (SHA-256(key)) -> Key
//!
//! The "encrypted key" handed out is the handle. That stands in for a real
//! wrap under a key-encryption key; this store is for tests and local use.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::error::BoxError;
use crate::provider::{KeyCreator, KeyRetriever};
use crate::types::{EncryptedKeyDetails, Key, KeyDetails, KeyId};
use crate::wire::KEY_ID_BYTES;

type Handle = [u8; 32];

#[derive(Debug, Error)]
pub enum KeyManagerError {
    #[error("unknown key in family {0}")]
    UnknownKey(KeyId),
    #[error("key generation failed: {0}")]
    Generate(#[from] rand_core::Error),
    #[error("key store lock poisoned")]
    Poisoned,
}

/// Shared in-memory key store. Clones share the same keys.
#[derive(Clone, Default)]
pub struct MemoryKeyManager {
    keys: Arc<RwLock<HashMap<KeyId, HashMap<Handle, Key>>>>,
}

impl MemoryKeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a context to its key family. The empty context is the all-zero family.
    pub fn key_id_for(context: &[u8]) -> KeyId {
        if context.is_empty() {
            return KeyId::default();
        }
        let digest = Sha256::digest(context);
        let mut id = [0u8; KEY_ID_BYTES];
        id.copy_from_slice(&digest[..KEY_ID_BYTES]);
        KeyId::new(id)
    }

    fn handle_for(key: &Key) -> Handle {
        let digest = Sha256::digest(key.as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }

    /// Generate and store a data key for `context`.
    pub fn create(&self, context: &[u8]) -> Result<KeyDetails, KeyManagerError> {
        let key_id = Self::key_id_for(context);
        let key = Key::generate()?;
        let handle = Self::handle_for(&key);

        self.keys
            .write()
            .map_err(|_| KeyManagerError::Poisoned)?
            .entry(key_id)
            .or_default()
            .insert(handle, key.clone());

        tracing::debug!(key_id = %key_id, "created data key");
        Ok(KeyDetails::new(key, EncryptedKeyDetails::new(key_id, handle)))
    }

    /// Look a data key up by family and handle.
    pub fn get(&self, key_id: &KeyId, encrypted_key: &[u8]) -> Result<Key, KeyManagerError> {
        let handle: Handle = match encrypted_key.try_into() {
            Ok(h) => h,
            Err(_) => {
                tracing::warn!(key_id = %key_id, len = encrypted_key.len(), "malformed key handle");
                return Err(KeyManagerError::UnknownKey(*key_id));
            }
        };

        let keys = self.keys.read().map_err(|_| KeyManagerError::Poisoned)?;
        match keys.get(key_id).and_then(|family| family.get(&handle)) {
            Some(key) => {
                tracing::debug!(key_id = %key_id, "retrieved data key");
                Ok(key.clone())
            }
            None => {
                tracing::warn!(key_id = %key_id, "unknown data key");
                Err(KeyManagerError::UnknownKey(*key_id))
            }
        }
    }

    /// Number of stored keys across all families.
    pub fn len(&self) -> usize {
        self.keys
            .read()
            .map(|keys| keys.values().map(HashMap::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MemoryKeyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryKeyManager")
            .field("keys", &self.len())
            .finish()
    }
}

impl KeyCreator for MemoryKeyManager {
    fn create_key(&self, context: &[u8]) -> Result<KeyDetails, BoxError> {
        Ok(self.create(context)?)
    }
}

impl KeyRetriever for MemoryKeyManager {
    fn retrieve_key(&self, key_id: &KeyId, encrypted_key: &[u8]) -> Result<Key, BoxError> {
        Ok(self.get(key_id, encrypted_key)?)
    }
}
