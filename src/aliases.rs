//! # Secure-Gate Type Aliases
//!
//! Fixed-size secrets used by the codec, all backed by
//! [`secure-gate`](https://github.com/Slurp9187/secure-gate)'s `Fixed` wrapper.
//! They zeroize on drop and require an explicit `.expose_secret()` to read.
//!
//! - [`Aes256Key32`] - PBKDF2 output installed into the cipher
//! - [`Salt16`] - PBKDF2 salt (public, stored at offset 0)
//! - [`Iv16`] - CBC initialization vector (public, stored at offset 16)
//! - [`Block16`] - one AES block, used for CBC chaining state

use hmac::Hmac;
use sha2::Sha256;

/// PRF used by the key derivation.
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>;
pub type Block16 = SpanBuffer<16>; // one AES block
pub type Iv16 = SpanBuffer<16>;
pub type Salt16 = SpanBuffer<16>;
