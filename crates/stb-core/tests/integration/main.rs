#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! End-to-end scenarios across modules: generator-driven searches, the
//! primality chain on known numbers, configuration-driven searches and
//! scratch layout.

mod layout_carving;
mod primality_chain;
mod search_config;

use stb_core::word::{Word, WORD_BITS};

/// `2^k - 1` in the smallest number of words.
pub fn mersenne(k: usize) -> Vec<Word> {
    let n = k.div_ceil(WORD_BITS);
    let mut a = vec![Word::MAX; n];
    let top = k % WORD_BITS;
    if top != 0 {
        a[n - 1] = (1 << top) - 1;
    }
    a
}

/// Little-endian words of a `u128`.
pub fn from_u128(x: u128, words: usize) -> Vec<Word> {
    let mut out = vec![0; words];
    stb_core::word::load_le(&mut out, &x.to_le_bytes()[..(words * WORD_BITS / 8).min(16)]);
    out
}
