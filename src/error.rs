//! Error type shared by encrypt and decrypt.

use thiserror::Error;

/// Boxed error returned by key and nonce collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// A required input was empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The key creator failed. No cipher work was done.
    #[error("key creation failed")]
    KeyCreation(#[source] BoxError),

    /// The key retriever failed. No cipher work was done.
    #[error("key retrieval failed")]
    KeyRetrieval(#[source] BoxError),

    /// The nonce source (normally the OS entropy pool) failed.
    #[error("nonce creation failed")]
    NonceCreation(#[source] BoxError),

    /// The nonce source returned the wrong number of bytes.
    #[error("nonce must be {expected} bytes, got {actual}")]
    InvalidNonce { expected: usize, actual: usize },

    /// The key could not be turned into an AES-256 cipher.
    #[error("cipher construction failed: {0}")]
    CipherConstruction(&'static str),

    /// The framed buffer is truncated or its length prefix is out of bounds.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// Authentication failed. Wrong key and tampered ciphertext are
    /// deliberately indistinguishable.
    #[error("decryption failed")]
    Decryption,
}

impl EnvelopeError {
    /// True for the opaque authentication failure.
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }

    /// True when the framed input could not be parsed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}
