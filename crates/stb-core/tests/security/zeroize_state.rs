//! Wiping hash and generator state.
//!
//! The fields are private, so wiping is observed through behaviour: a wiped
//! state behaves exactly like one whose every field is zero.

use stb_core::hash::{belt_compress, hash, BeltHash};
use stb_core::prng::StbPrng;
use zeroize::Zeroize;

#[test]
fn wiped_generator_holds_no_key() {
    let mut prng = StbPrng::start(Some(b"secret seed"));
    let mut skip = [0u8; 5];
    prng.step_r(&mut skip);
    prng.zeroize();

    // Zero block, read from the start, then blocks keyed by the zero key.
    let mut out = [0u8; 64];
    prng.step_r(&mut out);
    assert_eq!(&out[..32], &[0u8; 32]);
    assert_eq!(&out[32..], hash(&[0u8; 48]).as_bytes());
}

#[test]
fn wiped_hash_forgets_absorbed_data() {
    let mut state = BeltHash::new();
    state.update(b"message that must not survive");
    state.zeroize();
    let (_, expected) = belt_compress(&[0u8; 64]);
    assert_eq!(state.finalize().as_bytes(), &expected);
}

#[test]
fn debug_output_is_masked() {
    let mut state = BeltHash::new();
    state.update(b"password");
    let prng = StbPrng::start(Some(b"password"));
    let rendered = format!("{state:?} {prng:?}");
    assert!(!rendered.contains("password"));
    insta::assert_snapshot!(rendered, @"BeltHash(***) StbPrng(***)");
}
