//! Reduction by a single word and long division.
//!
//! These routines branch on operand values and are meant for public data:
//! search bounds, sieving residues, parameter setup.

#![allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]

use super::arith::{add_assign, cmp_var, shl_carry, shr_carry, word_len};
use super::mul::sub_mul_word;
use crate::layout::split_words;
use crate::word::{clz_fast, DWord, Word, WORD_BITS, WORD_MAX};

const HALF_BITS: u32 = Word::BITS / 2;
const HALF_MASK: Word = WORD_MAX >> HALF_BITS;

/// `a mod m` for a single nonzero word `m`.
///
/// Moduli below `2^(WORD_BITS / 2)` take a half-word path that avoids
/// double-width division.
#[must_use]
pub fn mod_word(a: &[Word], m: Word) -> Word {
    debug_assert!(m != 0, "mod_word by zero");
    if m <= HALF_MASK {
        let mut r: Word = 0;
        for &w in a.iter().rev() {
            r = ((r << HALF_BITS) | (w >> HALF_BITS)) % m;
            r = ((r << HALF_BITS) | (w & HALF_MASK)) % m;
        }
        r
    } else {
        let mut r: DWord = 0;
        let md = DWord::from(m);
        for &w in a.iter().rev() {
            r = ((r << WORD_BITS) | DWord::from(w)) % md;
        }
        r as Word
    }
}

/// `a = a / m` in place, returning `a mod m`. `m` must be nonzero.
pub fn div_word_assign(a: &mut [Word], m: Word) -> Word {
    debug_assert!(m != 0, "div_word_assign by zero");
    let md = DWord::from(m);
    let mut r: DWord = 0;
    for w in a.iter_mut().rev() {
        let cur = (r << WORD_BITS) | DWord::from(*w);
        *w = (cur / md) as Word;
        r = cur % md;
    }
    r as Word
}

/// Words of stack needed by [`div_rem`] for a dividend of `na` words and a
/// divisor of `nb` words.
#[must_use]
pub const fn div_rem_deep(na: usize, nb: usize) -> usize {
    na + 1 + nb
}

/// Words of stack needed by [`mod_reduce`].
#[must_use]
pub const fn mod_reduce_deep(na: usize, nb: usize) -> usize {
    div_rem_deep(na, nb)
}

/// Long division: `q = a / b`, `r = a mod b`.
///
/// `b` must be nonzero and `r.len() == b.len()`. `q` must hold every
/// nonzero quotient word, `word_len(a) - word_len(b) + 1` words suffice;
/// extra words are zeroed.
pub fn div_rem(q: &mut [Word], r: &mut [Word], a: &[Word], b: &[Word], stack: &mut [Word]) {
    divide(Some(q), r, a, b, stack);
}

/// `r = a mod m` with `r.len() == m.len()`; `m` must be nonzero.
pub fn mod_reduce(r: &mut [Word], a: &[Word], m: &[Word], stack: &mut [Word]) {
    divide(None, r, a, m, stack);
}

/// Knuth, TAOCP vol. 2, 4.3.1, algorithm D.
fn divide(q: Option<&mut [Word]>, r: &mut [Word], a: &[Word], b: &[Word], stack: &mut [Word]) {
    debug_assert_eq!(r.len(), b.len());
    let na = word_len(a);
    let nb = word_len(b);
    assert!(nb > 0, "division by zero");

    let mut q = q;
    if let Some(q) = q.as_deref_mut() {
        q.fill(0);
    }

    if cmp_var(a, b).is_lt() {
        r.fill(0);
        r[..na].copy_from_slice(&a[..na]);
        return;
    }

    if nb == 1 {
        let rem = match q.as_deref_mut() {
            Some(q) => {
                q[..na].copy_from_slice(&a[..na]);
                div_word_assign(&mut q[..na], b[0])
            }
            None => mod_word(&a[..na], b[0]),
        };
        r.fill(0);
        r[0] = rem;
        return;
    }

    let ([u, v], _) = split_words(stack, [na + 1, nb]);

    // Normalize so the divisor's top bit is set.
    let shift = clz_fast(b[nb - 1]);
    v.copy_from_slice(&b[..nb]);
    shl_carry(v, shift);
    u[..na].copy_from_slice(&a[..na]);
    u[na] = shl_carry(&mut u[..na], shift);

    let vtop = DWord::from(v[nb - 1]);
    let vnext = DWord::from(v[nb - 2]);
    for j in (0..=na - nb).rev() {
        let num = (DWord::from(u[j + nb]) << WORD_BITS) | DWord::from(u[j + nb - 1]);
        let mut qhat = num / vtop;
        let mut rhat = num % vtop;
        while qhat >> WORD_BITS != 0
            || qhat * vnext > ((rhat << WORD_BITS) | DWord::from(u[j + nb - 2]))
        {
            qhat -= 1;
            rhat += vtop;
            if rhat >> WORD_BITS != 0 {
                break;
            }
        }

        let mut qw = qhat as Word;
        let borrow = sub_mul_word(&mut u[j..j + nb], v, qw);
        let (top, under) = u[j + nb].overflowing_sub(borrow);
        u[j + nb] = top;
        if under {
            // qhat was one too large (probability about 2 / 2^W).
            qw -= 1;
            let carry = add_assign(&mut u[j..j + nb], v);
            u[j + nb] = u[j + nb].wrapping_add(carry);
        }

        if let Some(q) = q.as_deref_mut() {
            match q.get_mut(j) {
                Some(slot) => *slot = qw,
                None => debug_assert_eq!(qw, 0, "quotient does not fit"),
            }
        }
    }

    shr_carry(&mut u[..nb], shift);
    r.fill(0);
    r[..nb].copy_from_slice(&u[..nb]);
}
