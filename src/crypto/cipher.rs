//! src/crypto/cipher.rs
//! AES-256-CBC cipher handle, no implicit padding.
//!
//! The handle keeps its CBC chaining block between calls, so two consecutive
//! `encrypt` calls behave like one call over the concatenated input. Every
//! blob operation starts with [`CipherHandle::configure`], which resets the
//! handle before installing a freshly derived key and the blob's IV.

use crate::aliases::{Aes256Key32, Block16, Iv16, Salt16};
use crate::consts::{AES_BLOCK_SIZE, IV_SIZE, KEY_LENGTH};
use crate::crypto::engine;
use crate::crypto::kdf::pbkdf2::derive_secure_pbkdf2_key;
use crate::error::CryptBufferError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256, Block as AesBlock};
use std::fmt;
use secure_gate::{RevealSecret, RevealSecretMut};

/// A block-cipher engine instance owned by one [`Context`](crate::Context).
pub struct CipherHandle {
    cipher: Option<Aes256>,
    chain: Block16,
    iv_set: bool,
}

impl CipherHandle {
    /// Open an unkeyed AES-256-CBC handle.
    ///
    /// Triggers the process-wide engine initialization on first use.
    pub fn open() -> Result<Self, CryptBufferError> {
        engine::ensure_initialized()?;
        Ok(Self {
            cipher: None,
            chain: Block16::new([0u8; AES_BLOCK_SIZE]),
            iv_set: false,
        })
    }

    /// Drop the installed key and clear the chaining state.
    pub fn reset(&mut self) {
        self.cipher = None;
        *self.chain.expose_secret_mut() = [0u8; AES_BLOCK_SIZE];
        self.iv_set = false;
    }

    /// Whether both a key and an IV are installed.
    pub fn is_ready(&self) -> bool {
        self.cipher.is_some() && self.iv_set
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CryptBufferError> {
        let cipher = Aes256::new_from_slice(key).map_err(|_| {
            CryptBufferError::CipherConfigFailed(format!(
                "key must be {KEY_LENGTH} bytes, got {}",
                key.len()
            ))
        })?;
        self.cipher = Some(cipher);
        Ok(())
    }

    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), CryptBufferError> {
        if iv.len() != IV_SIZE {
            return Err(CryptBufferError::CipherConfigFailed(format!(
                "IV must be {IV_SIZE} bytes, got {}",
                iv.len()
            )));
        }
        self.chain.expose_secret_mut().copy_from_slice(iv);
        self.iv_set = true;
        Ok(())
    }

    /// Reset, derive the key from `password` and `salt`, then install key and IV.
    ///
    /// On failure the handle is left reset, never holding a key from an
    /// earlier operation.
    pub fn configure(
        &mut self,
        password: &[u8],
        salt: &Salt16,
        iv: &Iv16,
        kdf_iterations: u32,
    ) -> Result<(), CryptBufferError> {
        self.reset();

        let result = (|| {
            let mut key = Aes256Key32::new([0u8; KEY_LENGTH]);
            derive_secure_pbkdf2_key(password, salt, kdf_iterations, &mut key)?;
            self.set_key(key.expose_secret())?;
            self.set_iv(iv.expose_secret())
        })();

        if result.is_err() {
            self.reset();
        }
        result
    }

    /// CBC-encrypt `buffer` in place.
    pub fn encrypt(&mut self, buffer: &mut [u8]) -> Result<(), CryptBufferError> {
        check_block_multiple(buffer.len())?;
        let cipher = ready_cipher(self.cipher.as_ref(), self.iv_set)?;
        let prev = self.chain.expose_secret_mut();

        for chunk in buffer.chunks_exact_mut(AES_BLOCK_SIZE) {
            let mut block = AesBlock::default();
            xor_blocks(chunk, &prev[..], block.as_mut_slice());
            cipher.encrypt_block(&mut block);
            chunk.copy_from_slice(block.as_slice());
            prev.copy_from_slice(chunk);
        }
        Ok(())
    }

    /// CBC-decrypt `src` into the front of `dst`.
    pub fn decrypt(&mut self, src: &[u8], dst: &mut [u8]) -> Result<(), CryptBufferError> {
        check_block_multiple(src.len())?;
        if dst.len() < src.len() {
            return Err(CryptBufferError::CipherOperationFailed(format!(
                "output buffer too small: {} < {}",
                dst.len(),
                src.len()
            )));
        }
        let cipher = ready_cipher(self.cipher.as_ref(), self.iv_set)?;
        let prev = self.chain.expose_secret_mut();

        for (src_chunk, dst_chunk) in src
            .chunks_exact(AES_BLOCK_SIZE)
            .zip(dst.chunks_exact_mut(AES_BLOCK_SIZE))
        {
            let mut block = *AesBlock::from_slice(src_chunk);
            cipher.decrypt_block(&mut block);
            xor_blocks(block.as_slice(), &prev[..], dst_chunk);
            prev.copy_from_slice(src_chunk);
        }
        Ok(())
    }

    /// CBC-decrypt `buffer` in place.
    pub fn decrypt_in_place(&mut self, buffer: &mut [u8]) -> Result<(), CryptBufferError> {
        check_block_multiple(buffer.len())?;
        let cipher = ready_cipher(self.cipher.as_ref(), self.iv_set)?;
        let prev = self.chain.expose_secret_mut();

        for chunk in buffer.chunks_exact_mut(AES_BLOCK_SIZE) {
            let mut block = *AesBlock::from_slice(chunk);
            cipher.decrypt_block(&mut block);
            let mut next_prev = [0u8; AES_BLOCK_SIZE];
            next_prev.copy_from_slice(chunk);
            xor_blocks(block.as_slice(), &prev[..], chunk);
            *prev = next_prev;
        }
        Ok(())
    }
}

impl fmt::Debug for CipherHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherHandle")
            .field("keyed", &self.cipher.is_some())
            .field("iv_set", &self.iv_set)
            .finish()
    }
}

#[inline]
fn check_block_multiple(len: usize) -> Result<(), CryptBufferError> {
    if len % AES_BLOCK_SIZE != 0 {
        return Err(CryptBufferError::CipherOperationFailed(format!(
            "length {len} is not a multiple of the {AES_BLOCK_SIZE}-byte block size"
        )));
    }
    Ok(())
}

#[inline]
fn ready_cipher(cipher: Option<&Aes256>, iv_set: bool) -> Result<&Aes256, CryptBufferError> {
    match cipher {
        Some(c) if iv_set => Ok(c),
        Some(_) => Err(CryptBufferError::CipherOperationFailed(
            "cipher handle has no IV".into(),
        )),
        None => Err(CryptBufferError::CipherOperationFailed(
            "cipher handle has no key".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST SP 800-38A F.2.5 / F.2.6 (CBC-AES256)
    const KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
    const IV: &str = "000102030405060708090a0b0c0d0e0f";
    const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                             ae2d8a571e03ac9c9eb76fac45af8e51\
                             30c81c46a35ce411e5fbc1191a0a52ef\
                             f69f2445df4f9b17ad2b417be66c3710";
    const CIPHERTEXT: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
                              9cfc4e967edb808d679f777bc6702c7d\
                              39f23369a9d9bacfa530e26304231461\
                              b2eb05e2c39be9fcda6c19078c6a9d1b";

    fn keyed_handle() -> CipherHandle {
        let mut h = CipherHandle::open().unwrap();
        h.set_key(&hex::decode(KEY).unwrap()).unwrap();
        h.set_iv(&hex::decode(IV).unwrap()).unwrap();
        h
    }

    #[test]
    fn nist_cbc_encrypt() {
        let mut buf = hex::decode(PLAINTEXT).unwrap();
        keyed_handle().encrypt(&mut buf).unwrap();
        assert_eq!(hex::encode(&buf), CIPHERTEXT);
    }

    #[test]
    fn nist_cbc_decrypt_both_forms() {
        let ct = hex::decode(CIPHERTEXT).unwrap();

        let mut out = vec![0u8; ct.len() + 16];
        keyed_handle().decrypt(&ct, &mut out).unwrap();
        assert_eq!(hex::encode(&out[..ct.len()]), PLAINTEXT);

        let mut in_place = ct.clone();
        keyed_handle().decrypt_in_place(&mut in_place).unwrap();
        assert_eq!(hex::encode(&in_place), PLAINTEXT);
    }

    #[test]
    fn chaining_state_carries_across_calls() {
        let mut whole = hex::decode(PLAINTEXT).unwrap();
        keyed_handle().encrypt(&mut whole).unwrap();

        let mut split = hex::decode(PLAINTEXT).unwrap();
        let mut h = keyed_handle();
        let (a, b) = split.split_at_mut(32);
        h.encrypt(a).unwrap();
        h.encrypt(b).unwrap();
        assert_eq!(split, whole);
    }

    #[test]
    fn rejects_bad_key_and_iv_lengths() {
        let mut h = CipherHandle::open().unwrap();
        assert!(matches!(
            h.set_key(&[0u8; 16]),
            Err(CryptBufferError::CipherConfigFailed(_))
        ));
        assert!(matches!(
            h.set_iv(&[0u8; 8]),
            Err(CryptBufferError::CipherConfigFailed(_))
        ));
    }

    #[test]
    fn unkeyed_or_misaligned_operations_fail() {
        let mut h = CipherHandle::open().unwrap();
        let mut buf = [0u8; 32];
        assert!(matches!(
            h.encrypt(&mut buf),
            Err(CryptBufferError::CipherOperationFailed(_))
        ));

        let mut h = keyed_handle();
        let mut odd = [0u8; 17];
        assert!(matches!(
            h.encrypt(&mut odd),
            Err(CryptBufferError::CipherOperationFailed(_))
        ));
        let mut small = [0u8; 16];
        assert!(matches!(
            h.decrypt(&[0u8; 32], &mut small),
            Err(CryptBufferError::CipherOperationFailed(_))
        ));
    }

    #[test]
    fn reset_forgets_key() {
        let mut h = keyed_handle();
        assert!(h.is_ready());
        h.reset();
        assert!(!h.is_ready());
        let mut buf = [0u8; 16];
        assert!(h.encrypt(&mut buf).is_err());
    }

    #[test]
    fn failed_configure_leaves_handle_reset() {
        let mut h = keyed_handle();
        let salt = Salt16::new([0u8; 16]);
        let iv = Iv16::new([0u8; 16]);
        assert!(h.configure(b"pw", &salt, &iv, 0).is_err());
        assert!(!h.is_ready());
        h.configure(b"pw", &salt, &iv, 1).unwrap();
        assert!(h.is_ready());
    }
}
