//! # Frame Layout
//!
//! Typed views over the blob layout described in [`crate::consts`]. Field
//! access goes through named accessors instead of raw offsets.
//!
//! - [`FrameView`] - read-only view of an encrypted blob (clear salt/IV + ciphertext)
//! - [`LoadInfo`] - the decrypted 32-byte block at blob offset 32 (length, marker, reserved)
//! - [`FrameWriter`] - lays out salt, IV, load info and padded plaintext before encryption

use crate::aliases::{Iv16, Salt16};
use crate::consts::{
    CLEAR_HEADER_SIZE, FRAME_HEADER_SIZE, IV_SIZE, LENGTH_FIELD_SIZE, LOAD_INFO_SIZE,
    MAGIC_STRING, MAGIC_STRING_LENGTH, PAD_MULTIPLE, SALT_SIZE,
};
use crate::error::CryptBufferError;
use secure_gate::RevealSecret;

const MARKER_OFFSET: usize = LENGTH_FIELD_SIZE;
const RESERVED_OFFSET: usize = MARKER_OFFSET + MAGIC_STRING_LENGTH;

/// Read-only view of an encrypted blob.
///
/// # Example
///
/// ```
/// use crypt_buffer::header::FrameView;
///
/// let blob = [0u8; 64];
/// let frame = FrameView::parse(&blob)?;
/// assert_eq!(frame.ciphertext().len(), 32);
/// assert_eq!(frame.payload_capacity(), 0);
///
/// assert!(FrameView::parse(&blob[..63]).is_err());
/// # Ok::<(), crypt_buffer::CryptBufferError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    salt: &'a [u8; SALT_SIZE],
    iv: &'a [u8; IV_SIZE],
    ciphertext: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Split `bytes` into its clear header and ciphertext.
    ///
    /// # Errors
    ///
    /// [`CryptBufferError::PreconditionViolated`] if `bytes` is shorter than
    /// the 64-byte frame header. No other length arithmetic happens before
    /// this check.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, CryptBufferError> {
        if bytes.len() < FRAME_HEADER_SIZE {
            return Err(CryptBufferError::PreconditionViolated(format!(
                "blob is {} bytes, minimum is {FRAME_HEADER_SIZE}",
                bytes.len()
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_SIZE);
        let (iv, ciphertext) = rest.split_at(IV_SIZE);

        Ok(Self {
            salt: salt.try_into().map_err(|_| short_field("salt"))?,
            iv: iv.try_into().map_err(|_| short_field("IV"))?,
            ciphertext,
        })
    }

    pub fn salt(&self) -> Salt16 {
        Salt16::new(*self.salt)
    }

    pub fn iv(&self) -> Iv16 {
        Iv16::new(*self.iv)
    }

    /// Everything from offset 32 onward: load info followed by the payload.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Total blob length.
    pub fn len(&self) -> usize {
        CLEAR_HEADER_SIZE + self.ciphertext.len()
    }

    /// Always false; a parsed frame holds at least the 64-byte header.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Bytes available for plaintext: blob length minus 64.
    pub fn payload_capacity(&self) -> usize {
        self.ciphertext.len() - LOAD_INFO_SIZE
    }
}

/// The decrypted 32-byte load-info block.
#[derive(Debug, Clone, Copy)]
pub struct LoadInfo<'a> {
    bytes: &'a [u8; LOAD_INFO_SIZE],
}

impl<'a> LoadInfo<'a> {
    /// View the first 32 bytes of decrypted output as load info.
    pub fn from_decrypted(decrypted: &'a [u8]) -> Result<Self, CryptBufferError> {
        let bytes: &'a [u8; LOAD_INFO_SIZE] = decrypted
            .get(..LOAD_INFO_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| {
                CryptBufferError::PreconditionViolated(format!(
                    "decrypted region is {} bytes, load info needs {LOAD_INFO_SIZE}",
                    decrypted.len()
                ))
            })?;
        Ok(Self { bytes })
    }

    pub fn plaintext_length(&self) -> u32 {
        let b = self.bytes;
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    pub fn marker(&self) -> &'a [u8] {
        &self.bytes[MARKER_OFFSET..RESERVED_OFFSET]
    }

    /// The password heuristic: a wrong key yields `"TRUE"` here with
    /// probability about 2^-32. This is not a MAC.
    pub fn has_valid_marker(&self) -> bool {
        self.marker() == MAGIC_STRING
    }

    pub fn reserved(&self) -> &'a [u8] {
        &self.bytes[RESERVED_OFFSET..]
    }
}

/// Lays out a blob in a caller-provided buffer before encryption.
#[derive(Debug)]
pub struct FrameWriter<'a> {
    bytes: &'a mut [u8],
}

impl<'a> FrameWriter<'a> {
    /// Wrap a buffer whose length is `64 + k * 32`.
    pub fn new(bytes: &'a mut [u8]) -> Result<Self, CryptBufferError> {
        let len = bytes.len();
        if len < FRAME_HEADER_SIZE || (len - FRAME_HEADER_SIZE) % PAD_MULTIPLE != 0 {
            return Err(CryptBufferError::PreconditionViolated(format!(
                "frame buffer of {len} bytes is not 64 plus a multiple of {PAD_MULTIPLE}"
            )));
        }
        Ok(Self { bytes })
    }

    /// Write salt, IV, length, marker and plaintext.
    ///
    /// Reserved bytes and padding past the plaintext are zeroed so nothing
    /// left over from earlier use of the buffer ends up in the ciphertext.
    pub fn write(
        &mut self,
        salt: &Salt16,
        iv: &Iv16,
        plaintext: &[u8],
    ) -> Result<(), CryptBufferError> {
        let length = u32::try_from(plaintext.len()).map_err(|_| {
            CryptBufferError::PreconditionViolated(format!(
                "plaintext of {} bytes does not fit the 32-bit length field",
                plaintext.len()
            ))
        })?;
        let capacity = self.bytes.len() - FRAME_HEADER_SIZE;
        if plaintext.len() > capacity {
            return Err(CryptBufferError::PreconditionViolated(format!(
                "plaintext of {} bytes exceeds frame capacity {capacity}",
                plaintext.len()
            )));
        }

        let (clear, encrypted) = self.bytes.split_at_mut(CLEAR_HEADER_SIZE);
        clear[..SALT_SIZE].copy_from_slice(salt.expose_secret());
        clear[SALT_SIZE..].copy_from_slice(iv.expose_secret());

        let (load_info, payload) = encrypted.split_at_mut(LOAD_INFO_SIZE);
        load_info[..MARKER_OFFSET].copy_from_slice(&length.to_le_bytes());
        load_info[MARKER_OFFSET..RESERVED_OFFSET].copy_from_slice(MAGIC_STRING);
        load_info[RESERVED_OFFSET..].fill(0);

        let (body, padding) = payload.split_at_mut(plaintext.len());
        body.copy_from_slice(plaintext);
        padding.fill(0);
        Ok(())
    }

    /// Region the cipher runs over: offset 32 to the end.
    pub fn encrypted_region_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[CLEAR_HEADER_SIZE..]
    }
}

fn short_field(name: &str) -> CryptBufferError {
    CryptBufferError::PreconditionViolated(format!("blob too short for {name}"))
}
