//! The full primality chain on numbers with known status.

use stb_core::prime::{is_prime, is_prime_deep, is_prime_word, miller_rabin, miller_rabin_deep};
use stb_core::prng::StbPrng;
use stb_core::sieve::base;
use stb_core::word::Word;

use super::{from_u128, mersenne};

#[test]
fn every_base_prime_is_prime() {
    let mut stack = vec![0; is_prime_deep(1)];
    for &p in base() {
        assert!(is_prime(&[p], &mut stack), "p = {p}");
        assert!(is_prime_word(p));
    }
}

#[test]
fn fermat_f5_is_composite() {
    // 2^32 + 1 = 641 * 6700417
    let a = from_u128((1u128 << 32) + 1, 4);
    let mut stack = vec![0; is_prime_deep(4)];
    assert!(!is_prime(&a, &mut stack));
}

#[test]
fn mersenne_521_is_prime() {
    let a = mersenne(521);
    let mut stack = vec![0; is_prime_deep(a.len())];
    assert!(is_prime(&a, &mut stack));
}

#[test]
fn mersenne_523_is_composite() {
    let a = mersenne(523);
    let mut stack = vec![0; is_prime_deep(a.len())];
    assert!(!is_prime(&a, &mut stack));
}

#[test]
fn carmichael_numbers_are_rejected() {
    let small: [Word; 6] = [561, 1105, 1729, 2465, 41041, 825_265];
    for c in small {
        assert!(!is_prime_word(c), "c = {c}");
    }

    // A Carmichael number with no factor in the factor base, so it reaches
    // Miller-Rabin: (6k+1)(12k+1)(18k+1) with k = 242_396 (all three prime).
    let k: u128 = 242_396;
    let c = (6 * k + 1) * (12 * k + 1) * (18 * k + 1);
    assert_eq!(c, 18_457_883_288_813_385_649);
    let a = from_u128(c, 4);
    let mut stack = vec![0; is_prime_deep(4)];
    assert!(!is_prime(&a, &mut stack));

    let mut src = StbPrng::start(Some(b"carmichael"));
    let mut stack = vec![0; miller_rabin_deep(4)];
    assert!(!miller_rabin(&a, 8, &mut src, &mut stack));
}

#[test]
fn leading_zero_words_do_not_matter() {
    let mut a = mersenne(127);
    a.extend_from_slice(&[0, 0, 0]);
    let mut stack = vec![0; is_prime_deep(a.len())];
    assert!(is_prime(&a, &mut stack));
}
