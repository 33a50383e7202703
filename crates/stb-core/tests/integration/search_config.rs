//! Searches driven by `SearchParams`.

use stb_core::error::CoreError;
use stb_core::prime::params::{SearchParams, SearchPreset};
use stb_core::prime::extend_prime_deep;
use stb_core::prng::StbPrng;
use stb_core::word::{Word, WORD_BITS};

use super::from_u128;

#[test]
fn quick_preset_finds_next_prime() {
    let params = SearchPreset::Quick.params();
    let mut out = vec![0; 4];
    let mut stack = vec![0; params.next_prime_deep(4)];
    let found = params
        .next_prime(&mut out, &from_u128(1u128 << 64, 4), &mut stack)
        .expect("valid parameters should not error");
    assert!(found);
    assert_eq!(out, from_u128((1u128 << 64) + 13, 4));
}

#[test]
fn bit_limit_from_config_is_honoured() {
    let params: SearchParams =
        serde_json::from_str(r#"{"trials":100,"sieve_primes":64,"bit_limit":64}"#)
            .expect("deserialize should succeed");
    let mut out = vec![0; 4];
    let mut stack = vec![0; params.next_prime_deep(4)];
    let found = params
        .next_prime(&mut out, &from_u128(u128::from(u64::MAX) - 58, 4), &mut stack)
        .expect("valid parameters should not error");
    // The largest 64-bit prime is 2^64 - 59.
    assert!(found);
    assert_eq!(out, from_u128(u128::from(u64::MAX) - 58, 4));

    let found = params
        .next_prime(&mut out, &from_u128(u128::from(u64::MAX) - 57, 4), &mut stack)
        .expect("valid parameters should not error");
    assert!(!found);
}

#[test]
fn invalid_config_is_an_error_not_a_miss() {
    let params = SearchParams {
        trials: 10,
        sieve_primes: 5000,
        bit_limit: None,
    };
    let mut out = [0 as Word; 1];
    let mut stack = vec![0; 8192];
    let err = params
        .next_prime(&mut out, &[100], &mut stack)
        .expect_err("oversized sieve should be rejected");
    assert!(matches!(err, CoreError::InvalidParameter(_)));
}

#[test]
fn extend_prime_through_params() {
    let params = SearchPreset::Standard.params();
    let mut p = [0 as Word; 1];
    let mut src = StbPrng::start(None);
    let mut stack = vec![0; extend_prime_deep(1, 1)];
    let found = params
        .extend_prime(&mut p, 5, &[11], &mut src, &mut stack)
        .expect("valid parameters should not error");
    assert!(found);
    assert_eq!(p, [23]);

    let err = params
        .extend_prime(&mut p, WORD_BITS + 1, &[11], &mut src, &mut stack)
        .expect_err("p_bits beyond the output should be rejected");
    assert!(matches!(err, CoreError::InvalidParameter(_)));
}

#[test]
fn preset_serde_roundtrip() {
    for preset in [
        SearchPreset::Quick,
        SearchPreset::Standard,
        SearchPreset::Exhaustive,
    ] {
        let json = serde_json::to_string(&preset).expect("serialize should succeed");
        let deserialized: SearchPreset =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(preset, deserialized);
    }
}

#[test]
fn params_json_shape() {
    let json = serde_json::to_string(&SearchPreset::Quick.params()).expect("serialize should succeed");
    insta::assert_snapshot!(json, @r#"{"trials":256,"sieve_primes":128}"#);
}
