//! src/crypto/engine.rs
//! Process-wide crypto engine initialization.
//!
//! The engine is initialized at most once per process, no matter how many
//! [`Context`](crate::Context)s are created or from how many threads. The
//! initialization runs an AES-256 known-answer self test; its outcome (success
//! or failure) is cached and returned to every later caller.

use crate::error::CryptBufferError;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256, Block as AesBlock};
use once_cell::sync::OnceCell;
use tracing::{debug, error};

static ENGINE: OnceCell<Result<(), CryptBufferError>> = OnceCell::new();

// FIPS-197 appendix C.3 (AES-256)
const KAT_KEY: [u8; 32] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
];
const KAT_PLAINTEXT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
const KAT_CIPHERTEXT: [u8; 16] = [
    0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89,
];

/// Initialize the engine if no caller has done so yet.
///
/// Thread-safe; concurrent first callers block until the single
/// initialization finishes, then all observe the same outcome.
pub fn ensure_initialized() -> Result<(), CryptBufferError> {
    ENGINE
        .get_or_init(|| {
            let outcome = self_test();
            match &outcome {
                Ok(()) => debug!("crypto engine initialized"),
                Err(e) => error!(error = %e, "crypto engine self test failed"),
            }
            outcome
        })
        .clone()
}

/// Whether initialization has already run (successfully or not).
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

fn self_test() -> Result<(), CryptBufferError> {
    let cipher = Aes256::new_from_slice(&KAT_KEY)
        .map_err(|e| CryptBufferError::EngineInitFailed(format!("AES-256 key setup: {e}")))?;

    let mut block = AesBlock::from(KAT_PLAINTEXT);
    cipher.encrypt_block(&mut block);
    if block.as_slice() != KAT_CIPHERTEXT {
        return Err(CryptBufferError::EngineInitFailed(
            "AES-256 encrypt known-answer mismatch".into(),
        ));
    }

    cipher.decrypt_block(&mut block);
    if block.as_slice() != KAT_PLAINTEXT {
        return Err(CryptBufferError::EngineInitFailed(
            "AES-256 decrypt known-answer mismatch".into(),
        ));
    }

    Ok(())
}
