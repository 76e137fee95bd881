// src/crypto/rng.rs
//! Random bytes for salts and IVs.
//!
//! The default source is the operating system CSPRNG via `rand`'s `OsRng`.
//! Failure is surfaced as [`CryptBufferError::RandomSourceUnavailable`]; there
//! is no fallback to a weaker generator and no retry.

use crate::error::CryptBufferError;
use rand::{rngs::OsRng, TryRngCore};

/// A source of unpredictable bytes.
///
/// [`Context`](crate::Context) is generic over this so tests can inject a
/// fixed or failing source. Production code should use [`SecureRng`].
pub trait RandomSource {
    /// Fill `dest` completely, or fail without partial success.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptBufferError>;
}

/// Operating-system entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    #[inline(always)]
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl RandomSource for SecureRng {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptBufferError> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| CryptBufferError::RandomSourceUnavailable(e.to_string()))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptBufferError> {
        (**self).fill(dest)
    }
}
