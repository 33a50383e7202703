//! Factor base: the first [`BASE_SIZE`] odd primes.
//!
//! The table is built at compile time by trial division and lives in a
//! `static`, so concurrent readers need no synchronization. It backs trial
//! division in the primality tests and the residue sieve in prime searches.
//!
//! The base starts at 3 and ends at 8167; 2 is handled separately by every
//! caller since candidates are odd.

#![allow(clippy::arithmetic_side_effects)]

use crate::word::{DWord, Word, WORD_BITS};

/// Number of odd primes in the factor base.
pub const BASE_SIZE: usize = 1024;

/// Largest prime in the base.
pub const BASE_MAX: Word = 8167;

const fn is_odd_prime(n: u32) -> bool {
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

const fn build_base() -> [Word; BASE_SIZE] {
    let mut table = [0 as Word; BASE_SIZE];
    let mut count = 0;
    let mut n: u32 = 3;
    while count < BASE_SIZE {
        if is_odd_prime(n) {
            table[count] = n as Word;
            count += 1;
        }
        n += 2;
    }
    table
}

static BASE: [Word; BASE_SIZE] = build_base();

/// Number of primes in the factor base.
#[must_use]
pub const fn base_size() -> usize {
    BASE_SIZE
}

/// The `i`-th odd prime (`base_prime(0) == 3`).
///
/// # Panics
///
/// Panics if `i >= BASE_SIZE`.
#[must_use]
pub fn base_prime(i: usize) -> Word {
    BASE[i]
}

/// The whole factor base, ascending.
#[must_use]
pub fn base() -> &'static [Word] {
    &BASE
}

/// `out[i] = a mod base_prime(i)` for every `i < out.len()`.
///
/// One pass over the words of `a`, most significant first, updating all
/// residues per word.
#[allow(clippy::cast_possible_truncation)]
pub fn base_mod(out: &mut [Word], a: &[Word]) {
    debug_assert!(out.len() <= BASE_SIZE);
    out.fill(0);
    for &w in a.iter().rev() {
        for (r, &p) in out.iter_mut().zip(BASE.iter()) {
            let t = (DWord::from(*r) << WORD_BITS) | DWord::from(w);
            *r = (t % DWord::from(p)) as Word;
        }
    }
}

/// `true` iff `a` has no divisor among the first `k` base primes.
///
/// A base prime itself is therefore reported as not sieved when it lies
/// within the first `k`.
#[must_use]
pub fn is_sieved(a: &[Word], k: usize) -> bool {
    debug_assert!(k <= BASE_SIZE);
    BASE[..k]
        .iter()
        .all(|&p| crate::bigint::mod_word(a, p) != 0)
}

/// Position of `w` in the factor base.
#[must_use]
pub fn base_index(w: Word) -> Option<usize> {
    BASE.binary_search(&w).ok()
}

/// `true` iff `w` is one of the base primes.
#[must_use]
pub fn is_base_prime(w: Word) -> bool {
    base_index(w).is_some()
}
