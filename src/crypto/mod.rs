// src/crypto/mod.rs

//! Low-level crypto collaborators.
//!
//! - [`engine`] - one-time, process-wide engine initialization
//! - [`cipher`] - AES-256-CBC handle with explicit reset/key/IV steps
//! - [`kdf`] - PBKDF2-HMAC-SHA256 password stretching
//! - [`rng`] - fallible random source used for salts and IVs

pub mod cipher;
pub mod engine;
pub mod kdf;
pub mod rng;
