//! Parallel encryption/decryption of many buffers.
//!
//! Each rayon worker opens its own [`Context`] and reuses it for every item it
//! processes; Contexts are never shared between threads. Results come back in
//! input order as owned buffers. The first failure aborts the batch.

use rayon::prelude::*;

use crate::{Context, CryptBufferError};

/// Encrypt every buffer in `batch` under `password`.
pub fn encrypt_batch<T>(batch: &[T], password: &[u8]) -> Result<Vec<Vec<u8>>, CryptBufferError>
where
    T: AsRef<[u8]> + Sync,
{
    batch
        .par_iter()
        .map_init(Context::init, |ctx, item| match ctx {
            Ok(ctx) => ctx.encrypt(item.as_ref(), password).map(<[u8]>::to_vec),
            Err(e) => Err(e.clone()),
        })
        .collect()
}

/// Decrypt every blob in `batch` with `password`.
pub fn decrypt_batch<T>(batch: &[T], password: &[u8]) -> Result<Vec<Vec<u8>>, CryptBufferError>
where
    T: AsRef<[u8]> + Sync,
{
    batch
        .par_iter()
        .map_init(Context::init, |ctx, item| match ctx {
            Ok(ctx) => ctx.decrypt(item.as_ref(), password).map(<[u8]>::to_vec),
            Err(e) => Err(e.clone()),
        })
        .collect()
}
