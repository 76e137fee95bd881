//! # Error Types
//!
//! Every operation in this crate returns [`Result<T, CryptBufferError>`](CryptBufferError).
//! Failures are reported at their origin and never retried internally; all of
//! them leave the [`Context`](crate::Context) usable for the next call.

use thiserror::Error;

/// The error type for all crypt-buffer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptBufferError {
    /// The process-wide crypto engine failed its one-time initialization.
    ///
    /// The engine self-test runs once per process; a failure is cached and
    /// returned to every subsequent [`Context::init`](crate::Context::init).
    #[error("Engine init failed: {0}")]
    EngineInitFailed(String),

    /// The scratch buffer could not be grown to the requested size.
    ///
    /// The previous buffer is left untouched.
    #[error("Allocation failed: could not reserve {requested} bytes")]
    AllocationFailed { requested: usize },

    /// The entropy source could not produce the requested bytes.
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// The cipher rejected the key or IV, or key derivation failed.
    #[error("Cipher config failed: {0}")]
    CipherConfigFailed(String),

    /// The block cipher itself refused the operation (unkeyed handle,
    /// region not a multiple of the block size, mismatched buffers).
    #[error("Cipher operation failed: {0}")]
    CipherOperationFailed(String),

    /// The decrypted marker did not match.
    ///
    /// Either the password is wrong or the blob is corrupted; the two cases
    /// cannot be told apart. This is a 4-byte heuristic, not a MAC.
    #[error("Authentication failed: wrong password or corrupted data")]
    AuthenticationFailed,

    /// The stored plaintext length does not fit in the blob.
    #[error("Length inconsistent: stored length {stored} exceeds available {available} bytes")]
    LengthInconsistent { stored: u32, available: usize },

    /// An input violated a documented precondition (e.g. a blob shorter than
    /// the 64-byte frame header).
    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    /// A [`ContextBuilder`](crate::ContextBuilder) setting is out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
