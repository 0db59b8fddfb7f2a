//! # Keyed Envelope
//!
//! Envelope encryption with pluggable key management.
//!
//! Each call encrypts under a fresh data key obtained from a [`KeyCreator`].
//! Only the key's encrypted form travels with the ciphertext; a
//! [`KeyRetriever`] turns it back into the data key at decrypt time.
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_envelope::{decrypt, encrypt, MemoryKeyManager, OsRandom};
//!
//! let manager = MemoryKeyManager::new();
//!
//! let sealed = encrypt(b"My Context", b"Hello World", &manager, &OsRandom)?;
//! let plaintext = decrypt(&sealed, &manager)?;
//!
//! assert_eq!(plaintext, b"Hello World");
//! # Ok::<(), keyed_envelope::EnvelopeError>(())
//! ```
//!
//! ## Wire Format
//!
//! ```text
//! enc_key_len[4, LE] || enc_key || nonce[12] || ciphertext || tag[16]
//! ```
//!
//! The [`KeyId`] travels next to the blob in [`EncryptedData`].
//!
//! ## Security Properties
//!
//! - **AES-256-GCM**: confidentiality and integrity of the framed bytes
//! - **Uniform errors**: wrong key and tampering both yield [`EnvelopeError::Decryption`]
//! - **Key hygiene**: data keys are zeroized on drop
//!
//! ## What's NOT Provided
//!
//! - Key rotation or durable key storage
//! - Authentication of the key id
//! - Streaming encryption
//! - Protection against a compromised key manager

#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/keyed-envelope/0.1.0")]

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod aead;
mod envelope;
mod error;
mod memory;
mod nonce;
mod provider;
mod types;

// Framing helpers, public for inspection tooling and fuzzing
pub mod wire;

// ---------------------------------------------------------------------------
// Public interface
// ---------------------------------------------------------------------------

pub use envelope::{decrypt, encrypt, Envelope};
pub use error::{BoxError, EnvelopeError};
pub use memory::{KeyManagerError, MemoryKeyManager};
pub use nonce::{create_random, OsRandom};
pub use provider::{KeyCreator, KeyRetriever, NonceCreator};
pub use types::{EncryptedData, EncryptedKeyDetails, Key, KeyDetails, KeyId};
pub use wire::{inspect, BlobInfo};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
