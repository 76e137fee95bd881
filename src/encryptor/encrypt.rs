//! src/encryptor/encrypt.rs
//! Buffer encryption into a framed blob.

use crate::aliases::{Iv16, Salt16, SpanBuffer};
use crate::consts::{CLEAR_HEADER_SIZE, FRAME_HEADER_SIZE, SALT_SIZE};
use crate::context::Context;
use crate::crypto::rng::RandomSource;
use crate::error::CryptBufferError;
use crate::header::FrameWriter;
use crate::utils::encrypted_len;
use tracing::trace;
use secure_gate::{RevealSecret, RevealSecretMut};

impl<R: RandomSource> Context<R> {
    /// Encrypt `plaintext` under `password` into a framed blob.
    ///
    /// The blob is `64 + ceil32(plaintext.len())` bytes: 16 bytes of salt and
    /// 16 bytes of IV in the clear, then the encrypted length/marker block and
    /// the zero-padded plaintext. A fresh salt and IV are drawn for every call,
    /// so encrypting the same input twice gives different blobs.
    ///
    /// The returned slice borrows this Context's scratch buffer and is valid
    /// until the next call on the Context.
    ///
    /// # Errors
    ///
    /// - [`CryptBufferError::RandomSourceUnavailable`] if no salt/IV could be drawn
    /// - [`CryptBufferError::PreconditionViolated`] if `plaintext` exceeds `u32::MAX` bytes
    /// - [`CryptBufferError::AllocationFailed`] if the scratch buffer cannot grow
    /// - [`CryptBufferError::CipherConfigFailed`] / [`CryptBufferError::CipherOperationFailed`]
    ///
    /// # Example
    ///
    /// ```
    /// use crypt_buffer::Context;
    ///
    /// let mut ctx = Context::init()?;
    /// let blob = ctx.encrypt(b"abcd", b"xyz")?;
    /// assert_eq!(blob.len(), 64);
    /// # Ok::<(), crypt_buffer::CryptBufferError>(())
    /// ```
    pub fn encrypt(&mut self, plaintext: &[u8], password: &[u8]) -> Result<&[u8], CryptBufferError> {
        if u32::try_from(plaintext.len()).is_err() {
            return Err(CryptBufferError::PreconditionViolated(format!(
                "plaintext of {} bytes does not fit the 32-bit length field",
                plaintext.len()
            )));
        }

        let mut seed = SpanBuffer::<CLEAR_HEADER_SIZE>::new([0u8; CLEAR_HEADER_SIZE]);
        self.rng.fill(seed.expose_secret_mut())?;
        let salt = Salt16::new(std::array::from_fn(|i| seed.expose_secret()[i]));
        let iv = Iv16::new(std::array::from_fn(|i| seed.expose_secret()[SALT_SIZE + i]));

        let total = encrypted_len(plaintext.len()).ok_or_else(|| {
            CryptBufferError::PreconditionViolated("encrypted length overflows usize".into())
        })?;
        self.scratch.ensure_capacity(total)?;

        // Keyed before the plaintext is copied in, so a config failure leaves
        // no cleartext in the scratch buffer.
        self.configure_cipher(password, &salt, &iv)?;

        let mut frame = FrameWriter::new(&mut self.scratch.as_mut_slice()[..total])?;
        frame.write(&salt, &iv, plaintext)?;
        self.cipher.encrypt(frame.encrypted_region_mut())?;

        trace!(
            plaintext_len = plaintext.len(),
            blob_len = total,
            padding = total - FRAME_HEADER_SIZE - plaintext.len(),
            "buffer encrypted"
        );
        Ok(&self.scratch.as_slice()[..total])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAGIC_STRING;

    struct FixedSource(u8);

    impl RandomSource for FixedSource {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptBufferError> {
            dest.fill(self.0);
            Ok(())
        }
    }

    #[test]
    fn clear_header_holds_salt_and_iv() {
        let mut ctx = Context::builder()
            .with_random_source(FixedSource(0x7f))
            .build()
            .unwrap();
        let blob = ctx.encrypt(b"abcd", b"xyz").unwrap();
        assert_eq!(&blob[..CLEAR_HEADER_SIZE], &[0x7f; CLEAR_HEADER_SIZE]);
    }

    #[test]
    fn marker_is_not_visible_in_ciphertext() {
        let mut ctx = Context::init().unwrap();
        let blob = ctx.encrypt(b"abcd", b"xyz").unwrap();
        assert_ne!(&blob[36..40], MAGIC_STRING);
        assert_ne!(&blob[64..68], b"abcd");
    }

    #[test]
    fn stale_scratch_bytes_do_not_leak_into_padding() {
        let mut ctx = Context::builder()
            .with_random_source(FixedSource(0x01))
            .build()
            .unwrap();
        let first = ctx.encrypt(b"a", b"pw").unwrap().to_vec();

        ctx.ensure_capacity(256).unwrap().fill(0xAA);
        let second = ctx.encrypt(b"a", b"pw").unwrap().to_vec();

        assert_eq!(first, second);
    }
}
