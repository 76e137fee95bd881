//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::{Aes256Key32, HmacSha256, Salt16};
use crate::consts::{KEY_LENGTH, PBKDF2_ITERATIONS, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::CryptBufferError;

use pbkdf2::pbkdf2;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Derive PBKDF2-HMAC-SHA256 directly into an [`Aes256Key32`] buffer.
///
/// Deterministic: the same password, salt and iteration count always yield
/// the same key. The output buffer is zeroized on drop.
#[inline]
pub fn derive_secure_pbkdf2_key(
    password: &[u8],
    salt: &Salt16,
    iterations: u32,
    out_key: &mut Aes256Key32,
) -> Result<(), CryptBufferError> {
    pbkdf2_sha256(password, salt.expose_secret(), iterations, out_key.expose_secret_mut())
}

/// Derive the 32-byte blob key with the fixed iteration count of 5000.
pub fn derive_key(password: &[u8], salt: &Salt16) -> Result<Aes256Key32, CryptBufferError> {
    let mut key = Aes256Key32::new([0u8; KEY_LENGTH]);
    derive_secure_pbkdf2_key(password, salt, PBKDF2_ITERATIONS, &mut key)?;
    Ok(key)
}

fn pbkdf2_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), CryptBufferError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(CryptBufferError::CipherConfigFailed(format!(
            "PBKDF2 iterations must be in {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    pbkdf2::<HmacSha256>(password, salt, iterations, out)
        .map_err(|e| CryptBufferError::CipherConfigFailed(format!("PBKDF2 failed: {e}")))
}
