//! # Constants
//!
//! Frame layout sizes, the password marker, and PBKDF2 parameters.
//!
//! The layout of an encrypted blob is:
//!
//! | offset | size | field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 16   | PBKDF2 salt (clear)                     |
//! | 16     | 16   | AES-CBC initialization vector (clear)   |
//! | 32     | 4    | plaintext length, u32 little-endian     |
//! | 36     | 4    | marker `"TRUE"`                         |
//! | 40     | 24   | reserved, written as zeros              |
//! | 64     | N    | plaintext padded to a multiple of 32    |
//!
//! Everything from offset 32 onward is ciphertext.

/// AES-256 key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// PBKDF2 salt size stored at offset 0.
pub const SALT_SIZE: usize = 16;

/// CBC initialization vector size stored at offset 16.
pub const IV_SIZE: usize = 16;

/// Size of the encrypted load-info block (length + marker + reserved).
pub const LOAD_INFO_SIZE: usize = 32;

/// Bytes stored in the clear at the front of every blob.
pub const CLEAR_HEADER_SIZE: usize = SALT_SIZE + IV_SIZE;

/// Total fixed overhead of a blob; also the minimum blob size.
pub const FRAME_HEADER_SIZE: usize = CLEAR_HEADER_SIZE + LOAD_INFO_SIZE;

/// Payloads are padded up to a multiple of this many bytes.
pub const PAD_MULTIPLE: usize = 32;

/// AES block size. Every cipher call operates on a multiple of it.
pub const AES_BLOCK_SIZE: usize = 16;

/// Marker written after the length field and checked on decrypt.
pub const MAGIC_STRING: &[u8; MAGIC_STRING_LENGTH] = b"TRUE";

/// Marker length in bytes.
pub const MAGIC_STRING_LENGTH: usize = 4;

/// Width of the stored plaintext length field.
pub const LENGTH_FIELD_SIZE: usize = 4;

/// PBKDF2-HMAC-SHA256 iteration count used by both encrypt and decrypt.
///
/// Fixed for interoperability: a blob can only be opened with the same count
/// it was sealed with, and the count is not stored in the frame.
pub const PBKDF2_ITERATIONS: u32 = 5_000;

/// Minimum allowed PBKDF2 iteration count.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iteration count (5 million).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;
