//! src/decryptor/decrypt.rs
//! Blob decryption through a reusable [`Context`].

use crate::consts::LOAD_INFO_SIZE;
use crate::context::Context;
use crate::crypto::rng::RandomSource;
use crate::error::CryptBufferError;
use crate::header::{FrameView, LoadInfo};
use tracing::{debug, trace};

impl<R: RandomSource> Context<R> {
    /// Decrypt a blob produced by [`Context::encrypt`].
    ///
    /// The ciphertext (blob offset 32 onward) is decrypted into the front of
    /// the scratch buffer, so scratch offset 0 holds the length field and the
    /// returned plaintext starts at scratch offset 32.
    ///
    /// # Security
    ///
    /// The password check is a 4-byte marker comparison, not a MAC. A wrong
    /// password passes it with probability about 2^-32, and a corrupted blob
    /// under the right password is only caught if the corruption reaches the
    /// marker or length field. Layer a MAC on top if integrity matters.
    ///
    /// # Errors
    ///
    /// - [`CryptBufferError::PreconditionViolated`] if `blob` is under 64 bytes
    /// - [`CryptBufferError::AllocationFailed`] if the scratch buffer cannot grow
    /// - [`CryptBufferError::CipherConfigFailed`] if key setup fails
    /// - [`CryptBufferError::CipherOperationFailed`] if the ciphertext is not
    ///   block aligned (e.g. a truncated blob)
    /// - [`CryptBufferError::AuthenticationFailed`] on marker mismatch
    /// - [`CryptBufferError::LengthInconsistent`] if the stored length exceeds
    ///   `blob.len() - 64`
    pub fn decrypt(&mut self, blob: &[u8], password: &[u8]) -> Result<&[u8], CryptBufferError> {
        let frame = FrameView::parse(blob)?;
        let ciphertext = frame.ciphertext();

        self.scratch.ensure_capacity(blob.len())?;
        self.configure_cipher(password, &frame.salt(), &frame.iv())?;

        let decrypted = &mut self.scratch.as_mut_slice()[..ciphertext.len()];
        self.cipher.decrypt(ciphertext, decrypted)?;

        let range = payload_range(
            &self.scratch.as_slice()[..ciphertext.len()],
            frame.payload_capacity(),
        )?;
        trace!(blob_len = blob.len(), plaintext_len = range.len(), "buffer decrypted");
        Ok(&self.scratch.as_slice()[range])
    }
}

/// Check the marker and stored length of a decrypted region that starts with
/// the load-info block, and return where the plaintext lies in it.
pub(crate) fn payload_range(
    decrypted: &[u8],
    available: usize,
) -> Result<std::ops::Range<usize>, CryptBufferError> {
    let info = LoadInfo::from_decrypted(decrypted)?;

    if !info.has_valid_marker() {
        debug!("marker mismatch: wrong password or corrupted blob");
        return Err(CryptBufferError::AuthenticationFailed);
    }

    let stored = info.plaintext_length();
    let length = usize::try_from(stored)
        .ok()
        .filter(|&len| len <= available)
        .ok_or_else(|| {
            debug!(stored, available, "stored length exceeds blob");
            CryptBufferError::LengthInconsistent { stored, available }
        })?;

    Ok(LOAD_INFO_SIZE..LOAD_INFO_SIZE + length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_info(length: u32, marker: &[u8; 4]) -> Vec<u8> {
        let mut bytes = vec![0u8; 64];
        bytes[..4].copy_from_slice(&length.to_le_bytes());
        bytes[4..8].copy_from_slice(marker);
        bytes
    }

    #[test]
    fn range_follows_load_info() {
        let decrypted = load_info(5, b"TRUE");
        assert_eq!(payload_range(&decrypted, 32).unwrap(), 32..37);
    }

    #[test]
    fn bad_marker_is_authentication_failure() {
        let decrypted = load_info(5, b"FALS");
        assert_eq!(
            payload_range(&decrypted, 32).unwrap_err(),
            CryptBufferError::AuthenticationFailed
        );
    }

    #[test]
    fn oversized_length_is_inconsistent() {
        let decrypted = load_info(33, b"TRUE");
        assert_eq!(
            payload_range(&decrypted, 32).unwrap_err(),
            CryptBufferError::LengthInconsistent {
                stored: 33,
                available: 32
            }
        );
        assert!(payload_range(&load_info(u32::MAX, b"TRUE"), 32).is_err());
    }

    #[test]
    fn exact_capacity_is_accepted() {
        let decrypted = load_info(32, b"TRUE");
        assert_eq!(payload_range(&decrypted, 32).unwrap(), 32..64);
    }
}
