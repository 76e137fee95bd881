//! tests/header_tests.rs
//! Frame inspection without decryption

mod common;

use common::{sample_data, FixedSource, TEST_PASSWORD};
use crypt_buffer::{Context, CryptBufferError, FrameView};
use secure_gate::RevealSecret;

#[test]
fn parse_exposes_clear_fields() {
    let mut ctx = Context::builder()
        .with_random_source(FixedSource(0x0c))
        .build()
        .unwrap();
    let blob = ctx.encrypt(&sample_data(40), TEST_PASSWORD).unwrap().to_vec();

    let frame = FrameView::parse(&blob).unwrap();
    assert_eq!(frame.len(), 128);
    assert_eq!(frame.salt().expose_secret(), &[0x0c; 16]);
    assert_eq!(frame.iv().expose_secret(), &[0x0c; 16]);
    assert_eq!(frame.ciphertext(), &blob[32..]);
    assert_eq!(frame.payload_capacity(), 64);
}

#[test]
fn parse_rejects_short_input() {
    for len in [0usize, 16, 32, 63] {
        let err = FrameView::parse(&vec![0u8; len]).unwrap_err();
        assert!(
            matches!(err, CryptBufferError::PreconditionViolated(_)),
            "len {len}"
        );
        assert!(err.to_string().starts_with("Precondition violated"));
    }
}

#[test]
fn minimum_frame_has_no_payload_room() {
    let blob = [0u8; 64];
    let frame = FrameView::parse(&blob).unwrap();
    assert_eq!(frame.payload_capacity(), 0);
    assert!(!frame.is_empty());
}
