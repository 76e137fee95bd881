// src/lib.rs

//! # crypt-buffer
//!
//! Password-based encryption of in-memory buffers into a self-describing blob.
//!
//! A blob is `64 + ceil32(len)` bytes: a clear 16-byte PBKDF2 salt and 16-byte
//! IV, then AES-256-CBC ciphertext covering a 32-byte load-info block (length,
//! `"TRUE"` marker, reserved) and the plaintext zero-padded to a multiple of 32.
//! The key is PBKDF2-HMAC-SHA256 over the password with 5000 iterations. See
//! [`consts`] for the exact layout.
//!
//! **Not authenticated.** Decryption checks a 4-byte marker to detect a wrong
//! password. It is a heuristic, not a MAC; callers needing integrity must add
//! one.
//!
//! ## Usage
//!
//! ```
//! use crypt_buffer::Context;
//!
//! let mut ctx = Context::init()?;
//!
//! // The returned slice borrows the context; copy it out to keep it.
//! let blob = ctx.encrypt(b"abcd", b"xyz")?.to_vec();
//! assert_eq!(blob.len(), 64);
//!
//! assert_eq!(ctx.decrypt(&blob, b"xyz")?, b"abcd");
//! assert!(ctx.decrypt(&blob, b"xy").is_err());
//!
//! ctx.uninit();
//! # Ok::<(), crypt_buffer::CryptBufferError>(())
//! ```

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod context;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod scratch;
pub mod utils;

// High-level API
pub use builders::ContextBuilder;
pub use context::Context;
pub use decryptor::decrypt_in_place;
pub use error::CryptBufferError;

// Low-level pieces for custom flows and interop tooling
pub use crypto::kdf::pbkdf2::{derive_key, derive_secure_pbkdf2_key};
pub use crypto::rng::{RandomSource, SecureRng};
pub use header::FrameView;
pub use utils::{encrypted_len, padded_len};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
