//! tests/common.rs
//! Common constants and helpers shared across test files

use crypt_buffer::{CryptBufferError, RandomSource};

/// Fast iteration count for tests that do not need the default 5000.
#[allow(dead_code)]
pub const TEST_ITERATIONS: u32 = 5;

/// Password used by the scenario tests.
#[allow(dead_code)]
pub const TEST_PASSWORD: &[u8] = b"xyz";

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"abcd";

/// Random source that repeats a fixed byte, for deterministic blobs.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub u8);

impl RandomSource for FixedSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptBufferError> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Random source that is always unavailable.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FailingSource;

impl RandomSource for FailingSource {
    fn fill(&mut self, _dest: &mut [u8]) -> Result<(), CryptBufferError> {
        Err(CryptBufferError::RandomSourceUnavailable(
            "entropy device closed".into(),
        ))
    }
}

/// Deterministic, non-repeating test payload.
#[allow(dead_code)]
pub fn sample_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
