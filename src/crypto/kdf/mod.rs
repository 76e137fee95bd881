//! # Key Derivation
//!
//! Turns a password into the AES-256 key for one blob.
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, 5000 iterations, 16-byte salt

pub mod pbkdf2;
