// src/encryptor/mod.rs

//! Encryption facade.
//!
//! Core API: [`Context::encrypt`](crate::Context::encrypt), implemented in
//! [`encrypt`].

pub(crate) mod encrypt;
