//! Primality tests and prime searches over word-slice integers.
//!
//! This module provides:
//! - [`is_prime_word`]: deterministic test for a single word
//! - [`miller_rabin`]: probabilistic test with caller-supplied witnesses
//! - [`is_prime`]: the full chain: trivial cases, factor-base sieve,
//!   Miller-Rabin with reproducible witnesses
//! - [`next_prime`]: smallest odd prime at or above a start value
//! - [`extend_prime`]: prime `p = 2rq + 1` of a given bit length
//! - [`is_smooth`], [`is_sg_prime`]: factor-base smoothness and the
//!   `a`, `(a - 1) / 2` prime pair check
//! - [`params`]: serializable search parameters with presets
//!
//! Candidates are public, so these routines branch on their values. Every
//! routine taking a `stack` has a `*_deep` companion giving the required
//! size in words.

#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

pub mod params;

use crate::bigint::{
    add_assign, add_word_assign, bit_len, cmp, div_rem, div_rem_deep, div_word_assign, eq,
    is_word, is_zero, mod_word, mont_mul, mul, power_mont, power_mont_deep, r2_mod, r_mod,
    rand_mod, set_bit, shl_carry, shr_assign, sub, sub_word, sub_word_assign, word_len,
};
use crate::hash::BeltHash;
use crate::layout::split_words;
use crate::prng::{ByteSource, StbPrng};
use crate::sieve::{base, base_mod, is_sieved, BASE_MAX, BASE_SIZE};
use crate::word::{ctz_fast, neg_inv, DWord, Word, WORD_BITS};

/// Values below this bound are decided by trial division in
/// [`is_prime_word`].
const TRIAL_DIVISION_BOUND: Word = BASE_MAX * BASE_MAX;

/// Bases that make Miller-Rabin exact for every 64-bit integer.
const DETERMINISTIC_BASES: [Word; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

const fn max(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// Position of the lowest set bit; 0 for zero.
fn trailing_zeros(a: &[Word]) -> usize {
    a.iter()
        .position(|&w| w != 0)
        .map_or(0, |i| i * WORD_BITS + ctz_fast(a[i]) as usize)
}

/// Whether a candidate goes on to the full test after sieving by the first
/// `k` base primes. Values inside the factor base always do.
fn survives_sieve(a: &[Word], k: usize) -> bool {
    let small = word_len(a) <= 1 && a.first().map_or(true, |&w| w <= BASE_MAX);
    small || is_sieved(a, k)
}

// ---------------------------------------------------------------------------
// Single word
// ---------------------------------------------------------------------------

fn mul_mod_word(a: Word, b: Word, m: Word) -> Word {
    ((DWord::from(a) * DWord::from(b)) % DWord::from(m)) as Word
}

fn pow_mod_word(mut base: Word, mut exp: Word, m: Word) -> Word {
    let mut acc = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod_word(acc, base, m);
        }
        base = mul_mod_word(base, base, m);
        exp >>= 1;
    }
    acc
}

/// Deterministic primality of one word.
///
/// Trial division by the factor base below `8167^2`; above that a
/// Miller-Rabin test over the first twelve primes, which has no false
/// positives below `3.3 * 10^24`.
#[must_use]
pub fn is_prime_word(w: Word) -> bool {
    if w < 2 {
        return false;
    }
    if w & 1 == 0 {
        return w == 2;
    }
    if w < TRIAL_DIVISION_BOUND {
        return base()
            .iter()
            .take_while(|&&p| p * p <= w)
            .all(|&p| w % p != 0);
    }

    let w1 = w - 1;
    let s = w1.trailing_zeros();
    let d = w1 >> s;
    'bases: for &a in &DETERMINISTIC_BASES {
        let mut y = pow_mod_word(a, d, w);
        if y == 1 || y == w1 {
            continue;
        }
        for _ in 1..s {
            y = mul_mod_word(y, y, w);
            if y == w1 {
                continue 'bases;
            }
        }
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Miller-Rabin
// ---------------------------------------------------------------------------

/// Words of stack needed by [`miller_rabin`] for an `n`-word candidate.
#[must_use]
pub const fn miller_rabin_deep(n: usize) -> usize {
    8 * n + power_mont_deep(n)
}

/// Miller-Rabin test with `rounds` witnesses drawn uniformly from
/// `[2, a - 2]` through `src`.
///
/// Returns `false` when `a` is proved composite or when `src` fails.
/// Candidates of a single significant word are decided by
/// [`is_prime_word`] without drawing. The Montgomery constants of `a` are
/// computed once per call and every round stays in Montgomery form.
pub fn miller_rabin(
    a: &[Word],
    rounds: usize,
    src: &mut impl ByteSource,
    stack: &mut [Word],
) -> bool {
    if word_len(a) <= 1 {
        return is_prime_word(a.first().copied().unwrap_or(0));
    }
    if a[0] & 1 == 0 {
        return false;
    }

    let n = a.len();
    let ([minus_one, d, bound, w, y, t, r2, one], stack) = split_words(stack, [n; 8]);
    sub_word(d, a, 1);
    let s = trailing_zeros(d);
    shr_assign(d, s);
    // w = 2 + uniform [0, a - 3)
    sub_word(bound, a, 3);

    let m0 = neg_inv(a[0]);
    r2_mod(r2, a);
    r_mod(one, a);
    // Montgomery form of a - 1 is a - (R mod a).
    sub(minus_one, a, one);

    'rounds: for _ in 0..rounds {
        if !rand_mod(w, bound, src) {
            return false;
        }
        add_word_assign(w, 2);
        mont_mul(t, w, r2, a, m0, stack);
        power_mont(y, t, d, a, m0, one, stack);
        if eq(y, one) || eq(y, minus_one) {
            continue;
        }
        for _ in 1..s {
            t.copy_from_slice(y);
            mont_mul(y, t, t, a, m0, stack);
            if eq(y, minus_one) {
                continue 'rounds;
            }
            if eq(y, one) {
                return false;
            }
        }
        return false;
    }
    true
}

/// Miller-Rabin rounds for a candidate of `bits` bits. A composite passes
/// with probability at most `4^-rounds`.
#[must_use]
pub const fn rounds_for_bits(bits: usize) -> usize {
    if bits <= 512 {
        40
    } else if bits <= 1024 {
        32
    } else {
        24
    }
}

// ---------------------------------------------------------------------------
// Full test
// ---------------------------------------------------------------------------

/// Words of stack needed by [`is_prime`].
#[must_use]
pub const fn is_prime_deep(n: usize) -> usize {
    miller_rabin_deep(n)
}

/// Witness generator keyed by the candidate itself, so a verdict can be
/// reproduced.
fn witness_source(a: &[Word]) -> StbPrng {
    let mut state = BeltHash::new();
    for w in a {
        state.update(&w.to_le_bytes());
    }
    StbPrng::start(Some(state.finalize().as_bytes()))
}

/// Probable-prime test.
///
/// Single-word values go to [`is_prime_word`]; otherwise even values and
/// multiples of a base prime are rejected before Miller-Rabin runs with
/// [`rounds_for_bits`] rounds.
pub fn is_prime(a: &[Word], stack: &mut [Word]) -> bool {
    let a = &a[..word_len(a)];
    match a {
        [] => false,
        [w] => is_prime_word(*w),
        _ => {
            if a[0] & 1 == 0 || !is_sieved(a, BASE_SIZE) {
                return false;
            }
            let mut src = witness_source(a);
            miller_rabin(a, rounds_for_bits(bit_len(a)), &mut src, stack)
        }
    }
}

// ---------------------------------------------------------------------------
// Searches
// ---------------------------------------------------------------------------

/// Words of stack needed by [`next_prime`] for an `n`-word output and
/// `k_sieve` sieving primes.
#[must_use]
pub const fn next_prime_deep(n: usize, k_sieve: usize) -> usize {
    k_sieve + is_prime_deep(n)
}

/// Find the smallest odd prime `>= start` of at most `bit_limit` bits.
///
/// Candidates advance by 2 while a table of residues modulo the first
/// `k_sieve` base primes is stepped alongside. Candidates that survive the
/// sieve go to [`is_prime`]; the search gives up after `trials` of them, or
/// once a candidate exceeds `bit_limit` bits or no longer fits `out`.
pub fn next_prime(
    out: &mut [Word],
    start: &[Word],
    trials: usize,
    k_sieve: usize,
    bit_limit: usize,
    stack: &mut [Word],
) -> bool {
    debug_assert!(k_sieve <= BASE_SIZE);
    let n = out.len();
    let len = word_len(start);
    if n == 0 || len > n {
        return false;
    }
    let bit_limit = bit_limit.min(n * WORD_BITS);

    out.fill(0);
    out[..len].copy_from_slice(&start[..len]);
    if len <= 1 && out[0] < 3 {
        out[0] = 3;
    } else if out[0] & 1 == 0 {
        out[0] |= 1;
    }

    let ([residues], stack) = split_words(stack, [k_sieve]);
    base_mod(residues, out);

    let mut tested = 0;
    loop {
        if bit_len(out) > bit_limit {
            tracing::debug!(tested, bit_limit, "next_prime: bit limit reached");
            return false;
        }
        let small = word_len(out) <= 1 && out[0] <= BASE_MAX;
        if small || residues.iter().all(|&r| r != 0) {
            if tested == trials {
                tracing::debug!(tested, "next_prime: trials exhausted");
                return false;
            }
            tested += 1;
            tracing::trace!(tested, bits = bit_len(out), "next_prime: testing candidate");
            if is_prime(out, stack) {
                tracing::debug!(tested, bits = bit_len(out), "next_prime: found");
                return true;
            }
        }
        if add_word_assign(out, 2) != 0 {
            return false;
        }
        for (r, &p) in residues.iter_mut().zip(base()) {
            *r += 2;
            if *r >= p {
                *r -= p;
            }
        }
    }
}

/// Words of stack needed by [`extend_prime`] for an `n`-word result and an
/// `n_q`-word factor `q`.
#[must_use]
pub const fn extend_prime_deep(n: usize, n_q: usize) -> usize {
    let m = max(n, n_q) + 1;
    8 * m + max(div_rem_deep(m, m), is_prime_deep(n))
}

/// Find a prime `p = 2rq + 1` of exactly `p_bits` bits.
///
/// Each trial draws `r` uniformly from
/// `[ceil((2^(p_bits-1) - 1) / 2q), floor((2^p_bits - 2) / 2q)]`, sieves the
/// candidate by the first `k_sieve` base primes and tests survivors with
/// [`is_prime`]. Returns `false` when that range is empty, when `trials`
/// draws found nothing, or when `src` fails.
pub fn extend_prime(
    p: &mut [Word],
    p_bits: usize,
    q: &[Word],
    trials: usize,
    k_sieve: usize,
    src: &mut impl ByteSource,
    stack: &mut [Word],
) -> bool {
    debug_assert!(k_sieve <= BASE_SIZE);
    let n = p.len();
    if p_bits < 2 || p_bits > n * WORD_BITS || is_zero(q) {
        return false;
    }
    let m = n.max(q.len()) + 1;
    let ([q2, num, lo, hi, rem, r, cand], stack) = split_words(stack, [m, m, m, m, m, m, 2 * m]);

    q2.fill(0);
    q2[..q.len()].copy_from_slice(q);
    shl_carry(q2, 1);

    // lo = ceil((2^(l-1) - 1) / 2q), at least 1
    num.fill(0);
    set_bit(num, p_bits - 1, true);
    sub_word_assign(num, 1);
    div_rem(lo, rem, num, q2, stack);
    if !is_zero(rem) {
        add_word_assign(lo, 1);
    }
    if is_zero(lo) {
        lo[0] = 1;
    }

    // hi = floor((2^l - 2) / 2q)
    num.fill(0);
    set_bit(num, p_bits, true);
    sub_word_assign(num, 2);
    div_rem(hi, rem, num, q2, stack);

    if cmp(lo, hi).is_gt() {
        tracing::debug!(p_bits, "extend_prime: empty range");
        return false;
    }
    // num = hi - lo + 1, the number of admissible r
    sub(num, hi, lo);
    add_word_assign(num, 1);

    for trial in 1..=trials {
        if !rand_mod(r, num, src) {
            tracing::debug!(trial, "extend_prime: byte source failed");
            return false;
        }
        add_assign(r, lo);
        mul(cand, r, q2);
        add_word_assign(cand, 1);
        debug_assert_eq!(bit_len(cand), p_bits);

        if !survives_sieve(cand, k_sieve) {
            continue;
        }
        tracing::trace!(trial, p_bits, "extend_prime: testing candidate");
        if is_prime(&cand[..n], stack) {
            p.copy_from_slice(&cand[..n]);
            tracing::debug!(trial, p_bits, "extend_prime: found");
            return true;
        }
    }
    tracing::debug!(trials, p_bits, "extend_prime: trials exhausted");
    false
}

// ---------------------------------------------------------------------------
// Structure checks
// ---------------------------------------------------------------------------

/// Words of stack needed by [`is_smooth`].
#[must_use]
pub const fn is_smooth_deep(n: usize) -> usize {
    n
}

/// `true` iff `a > 0` factors completely over the first `base_size` odd
/// base primes. The base starts at 3, so any even `a` is not smooth.
pub fn is_smooth(a: &[Word], base_size: usize, stack: &mut [Word]) -> bool {
    debug_assert!(base_size <= BASE_SIZE);
    let ([t], _) = split_words(stack, [a.len()]);
    t.copy_from_slice(a);
    if is_zero(t) {
        return false;
    }
    for &p in &base()[..base_size] {
        while mod_word(t, p) == 0 {
            div_word_assign(t, p);
        }
    }
    is_word(t, 1)
}

/// Words of stack needed by [`is_sg_prime`].
#[must_use]
pub const fn is_sg_prime_deep(n: usize) -> usize {
    n + is_prime_deep(n)
}

/// `true` iff both `a` and `(a - 1) / 2` are prime.
pub fn is_sg_prime(a: &[Word], stack: &mut [Word]) -> bool {
    let ([half], stack) = split_words(stack, [a.len()]);
    if !is_prime(a, stack) {
        return false;
    }
    half.copy_from_slice(a);
    sub_word_assign(half, 1);
    shr_assign(half, 1);
    is_prime(half, stack)
}
