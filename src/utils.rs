//! Utility functions used across the library.

use crate::consts::{FRAME_HEADER_SIZE, PAD_MULTIPLE};

/// Rounds `len` up to the next multiple of 32. Zero stays zero.
///
/// Returns `None` if the rounded value would overflow `usize`.
#[inline]
pub const fn padded_len(len: usize) -> Option<usize> {
    match len.checked_add(PAD_MULTIPLE - 1) {
        Some(v) => Some(v / PAD_MULTIPLE * PAD_MULTIPLE),
        None => None,
    }
}

/// Size of the blob produced for a plaintext of `len` bytes:
/// `64 + ceil32(len)`.
#[inline]
pub const fn encrypted_len(len: usize) -> Option<usize> {
    match padded_len(len) {
        Some(p) => p.checked_add(FRAME_HEADER_SIZE),
        None => None,
    }
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used for CBC chaining in [`crate::crypto::cipher`].
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass AES-block-sized chunks.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < 16 {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_rule() {
        let cases = [
            (0usize, 0usize),
            (1, 32),
            (4, 32),
            (31, 32),
            (32, 32),
            (33, 64),
            (100, 128),
        ];
        for (len, expected) in cases {
            assert_eq!(padded_len(len), Some(expected), "len {len}");
            assert_eq!(encrypted_len(len), Some(64 + expected), "len {len}");
        }
    }

    #[test]
    fn padding_overflow_is_reported() {
        assert_eq!(padded_len(usize::MAX), None);
        assert_eq!(encrypted_len(usize::MAX - 40), None);
    }

    #[test]
    fn xor_is_involutive() {
        let a = [0xA5u8; 16];
        let b: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut out = [0u8; 16];
        xor_blocks(&a, &b, &mut out);
        let mut back = [0u8; 16];
        xor_blocks(&out, &b, &mut back);
        assert_eq!(back, a);
    }
}
