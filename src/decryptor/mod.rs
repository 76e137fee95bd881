// src/decryptor/mod.rs

//! Decryption facade.
//!
//! Core API: [`Context::decrypt`](crate::Context::decrypt).
//! Context-free variant: [`decrypt_in_place`], which reuses the caller's buffer.

pub(crate) mod decrypt;
pub(crate) mod in_place;

pub use in_place::decrypt_in_place;
