//! Uniform sampling below a modulus.

use super::arith::{bit_len, cmp, is_zero, trim_hi};
use crate::prng::ByteSource;
use crate::word::{Word, WORD_BYTES};

/// Fill `r` from `src`, one little-endian word at a time.
fn draw_words(r: &mut [Word], src: &mut impl ByteSource) -> bool {
    let mut buf = [0u8; WORD_BYTES];
    for w in r.iter_mut() {
        if !src.fill(&mut buf) {
            return false;
        }
        *w = Word::from_le_bytes(buf);
    }
    true
}

/// Draw `r` uniformly from `[0, m)` by rejection sampling.
///
/// `r.len() == m.len()`. Draws are trimmed to the bit length of `m`, so
/// each one is accepted with probability above 1/2. Returns `false` only
/// when the source fails (or `m` is zero); `r` is then unspecified.
pub fn rand_mod(r: &mut [Word], m: &[Word], src: &mut impl ByteSource) -> bool {
    debug_assert_eq!(r.len(), m.len());
    if is_zero(m) {
        return false;
    }
    let bits = bit_len(m);
    loop {
        if !draw_words(r, src) {
            return false;
        }
        trim_hi(r, bits);
        if cmp(r, m).is_lt() {
            return true;
        }
    }
}

/// Draw `r` uniformly from `[1, m)`.
///
/// Returns `false` when the source fails or `m <= 1`.
pub fn rand_nz_mod(r: &mut [Word], m: &[Word], src: &mut impl ByteSource) -> bool {
    debug_assert_eq!(r.len(), m.len());
    let bits = bit_len(m);
    if bits <= 1 {
        return false;
    }
    loop {
        if !draw_words(r, src) {
            return false;
        }
        trim_hi(r, bits);
        if !is_zero(r) && cmp(r, m).is_lt() {
            return true;
        }
    }
}
