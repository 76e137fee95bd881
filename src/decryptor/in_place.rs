//! src/decryptor/in_place.rs
//! Context-free decryption that reuses the caller's buffer.

use crate::consts::{CLEAR_HEADER_SIZE, PBKDF2_ITERATIONS};
use crate::crypto::cipher::CipherHandle;
use crate::decryptor::decrypt::payload_range;
use crate::error::CryptBufferError;
use crate::header::FrameView;
use tracing::trace;

/// Decrypt `blob` in place without a [`Context`](crate::Context).
///
/// Opens a one-off cipher handle, decrypts `blob[32..]` where it lies and
/// returns the plaintext as a sub-slice of `blob` (starting at offset 64).
/// After the call the contents of `blob` are unspecified, whether it succeeds
/// or fails. Uses the default 5000 PBKDF2 iterations.
///
/// Errors are the same as [`Context::decrypt`](crate::Context::decrypt).
///
/// # Example
///
/// ```
/// use crypt_buffer::{decrypt_in_place, Context};
///
/// let mut ctx = Context::init()?;
/// let mut blob = ctx.encrypt(b"abcd", b"xyz")?.to_vec();
/// assert_eq!(decrypt_in_place(&mut blob, b"xyz")?, b"abcd");
/// # Ok::<(), crypt_buffer::CryptBufferError>(())
/// ```
pub fn decrypt_in_place<'a>(
    blob: &'a mut [u8],
    password: &[u8],
) -> Result<&'a [u8], CryptBufferError> {
    let (salt, iv, available) = {
        let frame = FrameView::parse(blob)?;
        (frame.salt(), frame.iv(), frame.payload_capacity())
    };

    let mut cipher = CipherHandle::open()?;
    cipher.configure(password, &salt, &iv, PBKDF2_ITERATIONS)?;

    let (_, encrypted) = blob.split_at_mut(CLEAR_HEADER_SIZE);
    cipher.decrypt_in_place(encrypted)?;

    let range = payload_range(encrypted, available)?;
    trace!(plaintext_len = range.len(), "buffer decrypted in place");

    let encrypted: &'a [u8] = encrypted;
    Ok(&encrypted[range])
}
