//! src/builders/context_builder.rs
//! Fluent configuration for [`Context`].

use crate::consts::{PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::context::Context;
use crate::crypto::rng::{RandomSource, SecureRng};
use crate::error::CryptBufferError;

/// Builder for [`Context`].
///
/// Defaults: OS random source and [`PBKDF2_ITERATIONS`] (5000). Blobs carry no
/// iteration count, so a Context built with a non-default count can only open
/// blobs sealed with that same count.
///
/// # Example
///
/// ```
/// use crypt_buffer::ContextBuilder;
///
/// let mut ctx = ContextBuilder::new().with_iterations(1_000).build()?;
/// let blob = ctx.encrypt(b"abcd", b"xyz")?.to_vec();
/// assert_eq!(ctx.decrypt(&blob, b"xyz")?, b"abcd");
/// # Ok::<(), crypt_buffer::CryptBufferError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContextBuilder<R: RandomSource = SecureRng> {
    iterations: u32,
    rng: R,
}

impl ContextBuilder<SecureRng> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
            rng: SecureRng::new(),
        }
    }
}

impl Default for ContextBuilder<SecureRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> ContextBuilder<R> {
    /// Set the PBKDF2 iteration count. Validated in [`build`](Self::build).
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Replace the random source used for salts and IVs.
    #[must_use]
    pub fn with_random_source<S: RandomSource>(self, rng: S) -> ContextBuilder<S> {
        ContextBuilder {
            iterations: self.iterations,
            rng,
        }
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Validate the settings and open the Context.
    ///
    /// # Errors
    ///
    /// - [`CryptBufferError::InvalidConfig`] for an iteration count outside
    ///   `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`
    /// - [`CryptBufferError::EngineInitFailed`] if the engine is unusable
    pub fn build(self) -> Result<Context<R>, CryptBufferError> {
        if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&self.iterations) {
            return Err(CryptBufferError::InvalidConfig(format!(
                "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {}",
                self.iterations
            )));
        }
        Context::from_parts(self.rng, self.iterations)
    }
}
