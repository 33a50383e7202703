//! Timing checks for constant-time routines (Welch's t-test).
//!
//! Two input classes are timed in interleaved runs and the t-statistic of
//! the two timing distributions must stay below 4.5. Classes:
//! - `power_mod`: exponent of all ones vs. exponent with a single set bit,
//!   same length
//! - `Digest` equality: equal digests vs. digests differing in the first
//!   octet
//!
//! The measurements are statistical and sensitive to machine load, so they
//! are ignored by default; run them with `cargo test -- --ignored` on an
//! idle machine. The t-test itself is checked unconditionally.

use std::hint::black_box;
use std::time::Instant;

use stb_core::bigint::{power_mod, power_mod_deep};
use stb_core::hash::{hash, Digest};
use stb_core::word::Word;

const SAMPLES: usize = 5_000;

const T_THRESHOLD: f64 = 4.5;

#[allow(clippy::cast_precision_loss)]
fn welch_t_statistic(a: &[f64], b: &[f64]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return f64::NAN;
    }
    let n_a = a.len() as f64;
    let n_b = b.len() as f64;
    let mean_a: f64 = a.iter().sum::<f64>() / n_a;
    let mean_b: f64 = b.iter().sum::<f64>() / n_b;
    let var_a: f64 = a.iter().map(|x| (x - mean_a).powi(2)).sum::<f64>() / (n_a - 1.0);
    let var_b: f64 = b.iter().map(|x| (x - mean_b).powi(2)).sum::<f64>() / (n_b - 1.0);
    let denominator = (var_a / n_a + var_b / n_b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    (mean_a - mean_b) / denominator
}

/// Time `f(class_a)` and `f(class_b)` alternately and return |t|.
#[allow(clippy::cast_precision_loss)]
fn measure<T>(class_a: &T, class_b: &T, mut f: impl FnMut(&T)) -> f64 {
    for _ in 0..100 {
        f(class_a);
        f(class_b);
    }
    let mut times_a = Vec::with_capacity(SAMPLES);
    let mut times_b = Vec::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let start = Instant::now();
        f(black_box(class_a));
        times_a.push(start.elapsed().as_nanos() as f64);

        let start = Instant::now();
        f(black_box(class_b));
        times_b.push(start.elapsed().as_nanos() as f64);
    }
    welch_t_statistic(&times_a, &times_b).abs()
}

#[test]
#[ignore = "statistical timing measurement; run on an idle machine"]
fn power_mod_time_independent_of_exponent_weight() {
    // 2^127 - 1 as a modulus, base 3.
    let words = 128 / stb_core::word::WORD_BITS;
    let mut m = vec![Word::MAX; words];
    m[words - 1] >>= 1;
    let heavy = vec![Word::MAX; words];
    let mut light = vec![0 as Word; words];
    light[words - 1] = 1 << (stb_core::word::WORD_BITS - 1);

    let mut r = vec![0; words];
    let mut stack = vec![0; power_mod_deep(words)];
    let abs_t = measure(&heavy, &light, |e| {
        power_mod(&mut r, &[3], e, &m, &mut stack);
        black_box(&r);
    });
    eprintln!("power_mod timing: |t| = {abs_t:.2} (threshold {T_THRESHOLD})");
    assert!(abs_t < T_THRESHOLD, "power_mod timing depends on exponent: |t| = {abs_t:.2}");
}

#[test]
#[ignore = "statistical timing measurement; run on an idle machine"]
fn digest_equality_time_independent_of_mismatch_position() {
    let reference = hash(b"reference");
    let equal = reference;
    let mut bytes = reference.into_bytes();
    bytes[0] ^= 1;
    let differs_early = Digest::from(bytes);

    let abs_t = measure(&equal, &differs_early, |d| {
        black_box(*d == reference);
    });
    eprintln!("digest equality timing: |t| = {abs_t:.2} (threshold {T_THRESHOLD})");
    assert!(abs_t < T_THRESHOLD, "digest comparison leaks timing: |t| = {abs_t:.2}");
}

#[test]
fn welch_t_test_identical_distributions() {
    let a = vec![1.0; 100];
    let b = vec![1.0; 100];
    assert!(welch_t_statistic(&a, &b).abs() < 0.001);
}

#[test]
fn welch_t_test_different_distributions() {
    let a: Vec<f64> = (0..1000).map(|i| 100.0 + f64::from(i % 3)).collect();
    let b: Vec<f64> = (0..1000).map(|i| 200.0 + f64::from(i % 3)).collect();
    assert!(welch_t_statistic(&a, &b).abs() > 100.0);
}
