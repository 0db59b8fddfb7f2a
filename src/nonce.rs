//! OS entropy nonce source.

use getrandom::getrandom;

use crate::error::{BoxError, EnvelopeError};
use crate::provider::NonceCreator;

/// Fill `size` bytes from the OS secure RNG.
///
/// Entropy failure is returned as-is; there is no retry.
pub fn create_random(size: usize) -> Result<Vec<u8>, EnvelopeError> {
    OsRandom
        .create_nonce(size)
        .map_err(EnvelopeError::NonceCreation)
}

/// Default [`NonceCreator`]: random nonces from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl NonceCreator for OsRandom {
    fn create_nonce(&self, size: usize) -> Result<Vec<u8>, BoxError> {
        let mut values = vec![0u8; size];
        getrandom(&mut values)?;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_requested_length() {
        for size in [0, 1, 12, 64] {
            assert_eq!(create_random(size).unwrap().len(), size);
            assert_eq!(OsRandom.create_nonce(size).unwrap().len(), size);
        }
    }

    #[test]
    fn consecutive_nonces_differ() {
        let a = OsRandom.create_nonce(12).unwrap();
        let b = OsRandom.create_nonce(12).unwrap();
        assert_ne!(a, b);
    }
}
