//! # Context
//!
//! A [`Context`] owns the scratch buffer and the cipher handle reused by every
//! [`encrypt`](Context::encrypt) and [`decrypt`](Context::decrypt) call.
//!
//! # Aliasing
//!
//! Both operations return a slice borrowed from the scratch buffer. The
//! borrow lives until the next `&mut` call on the same Context, so two results
//! from one Context cannot be held at once; copy the bytes out (`to_vec()`)
//! if they must outlive the next operation.
//!
//! # Thread Safety
//!
//! A Context is `Send` but every operation takes `&mut self`: one owner at a
//! time. Independent Contexts share nothing except the one-time engine
//! initialization in [`crate::crypto::engine`].

use crate::aliases::{Iv16, Salt16};
use crate::builders::ContextBuilder;
use crate::crypto::cipher::CipherHandle;
use crate::crypto::rng::{RandomSource, SecureRng};
use crate::error::CryptBufferError;
use crate::scratch::ScratchBuffer;
use std::fmt;
use tracing::debug;

/// Reusable encryption/decryption state.
pub struct Context<R: RandomSource = SecureRng> {
    pub(crate) scratch: ScratchBuffer,
    pub(crate) cipher: CipherHandle,
    pub(crate) rng: R,
    pub(crate) kdf_iterations: u32,
}

impl Context<SecureRng> {
    /// Create a Context with the OS random source and 5000 PBKDF2 iterations.
    ///
    /// # Errors
    ///
    /// [`CryptBufferError::EngineInitFailed`] if the process-wide engine self
    /// test failed. No partially built Context is ever returned.
    pub fn init() -> Result<Self, CryptBufferError> {
        ContextBuilder::new().build()
    }

    /// Start a [`ContextBuilder`].
    #[must_use]
    pub fn builder() -> ContextBuilder<SecureRng> {
        ContextBuilder::new()
    }
}

impl<R: RandomSource> Context<R> {
    pub(crate) fn from_parts(rng: R, kdf_iterations: u32) -> Result<Self, CryptBufferError> {
        let cipher = CipherHandle::open()?;
        debug!(kdf_iterations, "context opened");
        Ok(Self {
            scratch: ScratchBuffer::new(),
            cipher,
            rng,
            kdf_iterations,
        })
    }

    /// Release the cipher handle and wipe the scratch buffer.
    ///
    /// Consumes the Context, so it cannot be used or released again.
    /// Dropping a Context has the same effect.
    pub fn uninit(self) {
        drop(self);
    }

    /// Grow the scratch buffer to at least `n` bytes and return it.
    ///
    /// The buffer never shrinks. On failure the previous buffer is kept and
    /// [`CryptBufferError::AllocationFailed`] is returned.
    pub fn ensure_capacity(&mut self, n: usize) -> Result<&mut [u8], CryptBufferError> {
        self.scratch.ensure_capacity(n)
    }

    /// Current scratch buffer size.
    pub fn capacity(&self) -> usize {
        self.scratch.len()
    }

    /// PBKDF2 iteration count this Context encrypts and decrypts with.
    pub fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    /// Reset the cipher, derive the key from `password` and `salt`, install
    /// key and IV.
    pub fn configure_cipher(
        &mut self,
        password: &[u8],
        salt: &Salt16,
        iv: &Iv16,
    ) -> Result<(), CryptBufferError> {
        self.cipher
            .configure(password, salt, iv, self.kdf_iterations)
    }
}

impl<R: RandomSource> Drop for Context<R> {
    fn drop(&mut self) {
        self.cipher.reset();
        self.scratch.release();
        debug!("context released");
    }
}

impl<R: RandomSource> fmt::Debug for Context<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("scratch", &self.scratch)
            .field("cipher", &self.cipher)
            .field("kdf_iterations", &self.kdf_iterations)
            .finish_non_exhaustive()
    }
}
