//! tests/builder_tests.rs
//! ContextBuilder configuration and validation

mod common;

use common::{TEST_DATA, TEST_ITERATIONS, TEST_PASSWORD};
use crypt_buffer::consts::{PBKDF2_ITERATIONS, PBKDF2_MAX_ITER};
use crypt_buffer::{Context, ContextBuilder, CryptBufferError};

#[test]
fn defaults_match_init() {
    let builder = ContextBuilder::new();
    assert_eq!(builder.iterations(), PBKDF2_ITERATIONS);
    assert_eq!(ContextBuilder::default().iterations(), PBKDF2_ITERATIONS);

    let ctx = builder.build().unwrap();
    assert_eq!(ctx.kdf_iterations(), Context::init().unwrap().kdf_iterations());
}

#[test]
fn custom_iterations_roundtrip() {
    for iterations in [1, TEST_ITERATIONS, 10] {
        let mut ctx = Context::builder().with_iterations(iterations).build().unwrap();
        let blob = ctx.encrypt(TEST_DATA, TEST_PASSWORD).unwrap().to_vec();
        assert_eq!(ctx.decrypt(&blob, TEST_PASSWORD).unwrap(), TEST_DATA);
    }
}

#[test]
fn iteration_count_must_match_between_sides() {
    let mut sealer = Context::builder()
        .with_iterations(TEST_ITERATIONS)
        .build()
        .unwrap();
    let blob = sealer.encrypt(TEST_DATA, TEST_PASSWORD).unwrap().to_vec();

    let mut opener = Context::init().unwrap();
    assert_eq!(
        opener.decrypt(&blob, TEST_PASSWORD).unwrap_err(),
        CryptBufferError::AuthenticationFailed
    );
}

#[test]
fn out_of_range_iterations_rejected() {
    for iterations in [0, PBKDF2_MAX_ITER + 1] {
        let err = ContextBuilder::new()
            .with_iterations(iterations)
            .build()
            .unwrap_err();
        assert!(matches!(err, CryptBufferError::InvalidConfig(_)), "{iterations}");
    }
}
