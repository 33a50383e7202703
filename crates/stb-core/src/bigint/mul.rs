//! Word multiply-accumulate, schoolbook product and square.

#![allow(clippy::arithmetic_side_effects)]

use crate::word::{DWord, Word, WORD_BITS};

/// `x * y + acc + carry` split into (low, high) words. Cannot overflow:
/// `(2^W - 1)^2 + 2 (2^W - 1) = 2^2W - 1`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn mac(x: Word, y: Word, acc: Word, carry: Word) -> (Word, Word) {
    let t = (x as DWord) * (y as DWord) + (acc as DWord) + (carry as DWord);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// `c = a * w`, returning the high word.
pub fn mul_word(c: &mut [Word], a: &[Word], w: Word) -> Word {
    debug_assert_eq!(c.len(), a.len());
    let mut carry = 0;
    for (c, &x) in c.iter_mut().zip(a) {
        let (lo, hi) = mac(x, w, 0, carry);
        *c = lo;
        carry = hi;
    }
    carry
}

/// `c += a * w`, returning the word carried out of the top of `c`.
pub fn add_mul_word(c: &mut [Word], a: &[Word], w: Word) -> Word {
    debug_assert_eq!(c.len(), a.len());
    let mut carry = 0;
    for (c, &x) in c.iter_mut().zip(a) {
        let (lo, hi) = mac(x, w, *c, carry);
        *c = lo;
        carry = hi;
    }
    carry
}

/// `c -= a * w`, returning the word borrowed past the top of `c`.
pub fn sub_mul_word(c: &mut [Word], a: &[Word], w: Word) -> Word {
    debug_assert_eq!(c.len(), a.len());
    let mut borrow = 0;
    for (c, &x) in c.iter_mut().zip(a) {
        let (lo, hi) = mac(x, w, borrow, 0);
        let (d, o) = c.overflowing_sub(lo);
        *c = d;
        borrow = hi + Word::from(o);
    }
    borrow
}

/// `c = a * b` with `c.len() == a.len() + b.len()`.
pub fn mul(c: &mut [Word], a: &[Word], b: &[Word]) {
    let n = a.len();
    debug_assert_eq!(c.len(), n + b.len());
    c.fill(0);
    for (i, &w) in b.iter().enumerate() {
        c[i + n] = add_mul_word(&mut c[i..i + n], a, w);
    }
}

/// `c = a^2` with `c.len() == 2 * a.len()`.
///
/// Cross products are accumulated once and doubled, then the diagonal
/// squares are added.
pub fn sqr(c: &mut [Word], a: &[Word]) {
    let n = a.len();
    debug_assert_eq!(c.len(), 2 * n);
    c.fill(0);
    for i in 0..n {
        c[i + n] = add_mul_word(&mut c[2 * i + 1..i + n], &a[i + 1..], a[i]);
    }
    super::arith::shl_carry(c, 1);
    let mut carry = 0;
    for (i, &x) in a.iter().enumerate() {
        let (lo, hi) = mac(x, x, 0, 0);
        let (s, o1) = c[2 * i].overflowing_add(lo);
        let (s, o2) = s.overflowing_add(carry);
        c[2 * i] = s;
        let (t, o3) = c[2 * i + 1].overflowing_add(hi);
        let (t, o4) = t.overflowing_add(Word::from(o1 | o2));
        c[2 * i + 1] = t;
        carry = Word::from(o3 | o4);
    }
    debug_assert_eq!(carry, 0);
}
