//! Core types: KeyId, Key, EncryptedKeyDetails, KeyDetails, EncryptedData.

use core::fmt;
use core::str::FromStr;

use rand_core::{OsRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;
use crate::wire::{KEY_BYTES, KEY_ID_BYTES};

// ---------------------------------------------------------------------------
// Key identifiers
// ---------------------------------------------------------------------------

/// Names a key family chosen by the key manager.
///
/// Not a secret, and not authenticated by the cipher: it travels next to the
/// framed blob and only routes retrieval to the right namespace.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyId([u8; KEY_ID_BYTES]);

impl KeyId {
    pub const fn new(bytes: [u8; KEY_ID_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_ID_BYTES] {
        &self.0
    }
}

impl From<[u8; KEY_ID_BYTES]> for KeyId {
    fn from(bytes: [u8; KEY_ID_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self)
    }
}

impl FromStr for KeyId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = [0u8; KEY_ID_BYTES];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Self(out))
    }
}

// ---------------------------------------------------------------------------
// Data key
// ---------------------------------------------------------------------------

/// 256-bit data key. Wiped on drop; never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_BYTES]);

impl Key {
    /// All-zero sentinel meaning "no valid key".
    pub const INVALID: Key = Key([0u8; KEY_BYTES]);

    pub const fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Fresh key from the OS RNG.
    pub fn generate() -> Result<Self, rand_core::Error> {
        let mut key = Self::INVALID;
        OsRng.try_fill_bytes(&mut key.0)?;
        Ok(key)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }

    /// Constant-time check against the sentinel.
    pub fn is_invalid(&self) -> bool {
        self.0[..].ct_eq(&[0u8; KEY_BYTES][..]).into()
    }
}

impl From<[u8; KEY_BYTES]> for Key {
    fn from(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = EnvelopeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; KEY_BYTES] = bytes
            .try_into()
            .map_err(|_| EnvelopeError::CipherConstruction("key must be 32 bytes"))?;
        Ok(Self(arr))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// Key details
// ---------------------------------------------------------------------------

/// The only form of a data key that leaves the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncryptedKeyDetails {
    pub key_id: KeyId,
    /// Opaque to the core; interpreted only by the retriever.
    pub encrypted_key: Vec<u8>,
}

impl EncryptedKeyDetails {
    pub fn new(key_id: KeyId, encrypted_key: impl Into<Vec<u8>>) -> Self {
        Self {
            key_id,
            encrypted_key: encrypted_key.into(),
        }
    }
}

/// Output of a key creator: the plaintext key for immediate use plus what
/// is needed to get it back later.
#[derive(Clone, Debug)]
pub struct KeyDetails {
    pub key: Key,
    pub encrypted: EncryptedKeyDetails,
}

impl KeyDetails {
    pub fn new(key: Key, encrypted: EncryptedKeyDetails) -> Self {
        Self { key, encrypted }
    }
}

// ---------------------------------------------------------------------------
// Encrypted data
// ---------------------------------------------------------------------------

/// Result of [`encrypt`](crate::encrypt): the key id and the framed blob.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncryptedData {
    key_id: KeyId,
    data: Vec<u8>,
}

impl EncryptedData {
    pub fn new(key_id: KeyId, data: Vec<u8>) -> Self {
        Self { key_id, data }
    }

    pub fn key_id(&self) -> KeyId {
        self.key_id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_parts(self) -> (KeyId, Vec<u8>) {
        (self.key_id, self.data)
    }
}
