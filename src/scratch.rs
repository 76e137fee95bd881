//! Reusable scratch buffer owned by a [`Context`](crate::Context).
//!
//! The buffer only grows. Growth allocates a new region, copies the existing
//! bytes, and wipes the old region before releasing it. The whole capacity is
//! wiped again on drop.

use crate::error::CryptBufferError;
use std::fmt;
use tracing::trace;
use zeroize::Zeroize;

#[derive(Default)]
pub struct ScratchBuffer {
    bytes: Vec<u8>,
}

impl ScratchBuffer {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Current usable size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Grow to at least `n` bytes and return the whole buffer.
    ///
    /// If the buffer is already large enough it is returned unchanged. On
    /// allocation failure the existing buffer is kept as is.
    pub fn ensure_capacity(&mut self, n: usize) -> Result<&mut [u8], CryptBufferError> {
        if self.bytes.len() < n {
            let mut grown: Vec<u8> = Vec::new();
            grown
                .try_reserve_exact(n)
                .map_err(|_| CryptBufferError::AllocationFailed { requested: n })?;
            grown.extend_from_slice(&self.bytes);
            grown.resize(n, 0);

            self.bytes.zeroize();
            self.bytes = grown;
            trace!(size = n, "scratch buffer grown");
        }
        Ok(&mut self.bytes[..])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Wipe and free the buffer.
    pub fn release(&mut self) {
        self.bytes.zeroize();
        self.bytes = Vec::new();
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for ScratchBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchBuffer")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
