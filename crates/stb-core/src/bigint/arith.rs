//! Comparison, addition and subtraction with carry, shifts and bit access.

// Index arithmetic is bounded by slice lengths; word arithmetic is explicitly
// overflowing or wrapping.
#![allow(clippy::arithmetic_side_effects)]

use core::cmp::Ordering;

use crate::word::{clz_fast, Word, WORD_BITS};

// ---------------------------------------------------------------------------
// Comparison and predicates
// ---------------------------------------------------------------------------

/// Compare two numbers of the same word length, most significant word first.
#[must_use]
pub fn cmp(a: &[Word], b: &[Word]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare numbers of different word lengths; absent high words are zero.
#[must_use]
pub fn cmp_var(a: &[Word], b: &[Word]) -> Ordering {
    let n = a.len().min(b.len());
    if !is_zero(&a[n..]) {
        return Ordering::Greater;
    }
    if !is_zero(&b[n..]) {
        return Ordering::Less;
    }
    cmp(&a[..n], &b[..n])
}

/// Equality of two numbers of the same word length.
#[must_use]
pub fn eq(a: &[Word], b: &[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a == b
}

/// `true` iff `a == 0`. The empty slice is zero.
#[must_use]
pub fn is_zero(a: &[Word]) -> bool {
    a.iter().all(|&w| w == 0)
}

/// `true` iff `a` equals the single word `w`.
#[must_use]
pub fn is_word(a: &[Word], w: Word) -> bool {
    match a.split_first() {
        Some((&lo, hi)) => lo == w && is_zero(hi),
        None => w == 0,
    }
}

/// `true` iff every word of `a` equals `w`.
#[must_use]
pub fn is_rep_word(a: &[Word], w: Word) -> bool {
    a.iter().all(|&x| x == w)
}

/// Number of significant words (length without leading zero words).
#[must_use]
pub fn word_len(a: &[Word]) -> usize {
    a.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1)
}

/// Logical bit length: `0` for zero, otherwise `floor(log2 a) + 1`.
#[must_use]
pub fn bit_len(a: &[Word]) -> usize {
    match word_len(a) {
        0 => 0,
        n => n * WORD_BITS - clz_fast(a[n - 1]) as usize,
    }
}

/// Bit `i` of `a`; bits beyond the slice read as zero.
#[must_use]
pub fn test_bit(a: &[Word], i: usize) -> bool {
    a.get(i / WORD_BITS)
        .is_some_and(|&w| (w >> (i % WORD_BITS)) & 1 == 1)
}

/// Set or clear bit `i` of `a`. `i` must be below `a.len() * WORD_BITS`.
pub fn set_bit(a: &mut [Word], i: usize, value: bool) {
    let mask: Word = 1 << (i % WORD_BITS);
    let w = &mut a[i / WORD_BITS];
    if value {
        *w |= mask;
    } else {
        *w &= !mask;
    }
}

// ---------------------------------------------------------------------------
// Addition and subtraction
// ---------------------------------------------------------------------------

/// `c = a + b`, returning the carry out of the top word.
///
/// All three slices have the same length; an empty destination returns 0.
pub fn add(c: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    debug_assert!(c.len() == a.len() && a.len() == b.len());
    let mut carry = 0;
    for ((c, &x), &y) in c.iter_mut().zip(a).zip(b) {
        let (s, o1) = x.overflowing_add(y);
        let (s, o2) = s.overflowing_add(carry);
        *c = s;
        carry = Word::from(o1 | o2);
    }
    carry
}

/// `a += b`, returning the carry.
pub fn add_assign(a: &mut [Word], b: &[Word]) -> Word {
    debug_assert_eq!(a.len(), b.len());
    let mut carry = 0;
    for (x, &y) in a.iter_mut().zip(b) {
        let (s, o1) = x.overflowing_add(y);
        let (s, o2) = s.overflowing_add(carry);
        *x = s;
        carry = Word::from(o1 | o2);
    }
    carry
}

/// `c = a + w`, returning the carry. An empty destination returns `w`.
pub fn add_word(c: &mut [Word], a: &[Word], w: Word) -> Word {
    debug_assert_eq!(c.len(), a.len());
    let mut carry = w;
    for (c, &x) in c.iter_mut().zip(a) {
        let (s, o) = x.overflowing_add(carry);
        *c = s;
        carry = Word::from(o);
    }
    carry
}

/// `a += w`, returning the carry.
pub fn add_word_assign(a: &mut [Word], w: Word) -> Word {
    let mut carry = w;
    for x in a.iter_mut() {
        let (s, o) = x.overflowing_add(carry);
        *x = s;
        carry = Word::from(o);
    }
    carry
}

/// `c = a - b`, returning the borrow out of the top word.
pub fn sub(c: &mut [Word], a: &[Word], b: &[Word]) -> Word {
    debug_assert!(c.len() == a.len() && a.len() == b.len());
    let mut borrow = 0;
    for ((c, &x), &y) in c.iter_mut().zip(a).zip(b) {
        let (d, o1) = x.overflowing_sub(y);
        let (d, o2) = d.overflowing_sub(borrow);
        *c = d;
        borrow = Word::from(o1 | o2);
    }
    borrow
}

/// `a -= b`, returning the borrow.
pub fn sub_assign(a: &mut [Word], b: &[Word]) -> Word {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0;
    for (x, &y) in a.iter_mut().zip(b) {
        let (d, o1) = x.overflowing_sub(y);
        let (d, o2) = d.overflowing_sub(borrow);
        *x = d;
        borrow = Word::from(o1 | o2);
    }
    borrow
}

/// `c = a - w`, returning the borrow. An empty destination returns `w`.
pub fn sub_word(c: &mut [Word], a: &[Word], w: Word) -> Word {
    debug_assert_eq!(c.len(), a.len());
    let mut borrow = w;
    for (c, &x) in c.iter_mut().zip(a) {
        let (d, o) = x.overflowing_sub(borrow);
        *c = d;
        borrow = Word::from(o);
    }
    borrow
}

/// `a -= w`, returning the borrow.
pub fn sub_word_assign(a: &mut [Word], w: Word) -> Word {
    let mut borrow = w;
    for x in a.iter_mut() {
        let (d, o) = x.overflowing_sub(borrow);
        *x = d;
        borrow = Word::from(o);
    }
    borrow
}

/// `true` iff `a + b == c` exactly, with no carry out.
#[must_use]
pub fn is_sum_eq(c: &[Word], a: &[Word], b: &[Word]) -> bool {
    debug_assert!(c.len() == a.len() && a.len() == b.len());
    let mut carry = 0;
    let mut diff = 0;
    for ((&z, &x), &y) in c.iter().zip(a).zip(b) {
        let (s, o1) = x.overflowing_add(y);
        let (s, o2) = s.overflowing_add(carry);
        diff |= s ^ z;
        carry = Word::from(o1 | o2);
    }
    diff | carry == 0
}

/// `true` iff `a + w == c` exactly, with no carry out.
#[must_use]
pub fn is_sum_word_eq(c: &[Word], a: &[Word], w: Word) -> bool {
    debug_assert_eq!(c.len(), a.len());
    let mut carry = w;
    let mut diff = 0;
    for (&z, &x) in c.iter().zip(a) {
        let (s, o) = x.overflowing_add(carry);
        diff |= s ^ z;
        carry = Word::from(o);
    }
    diff | carry == 0
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

/// `a <<= bits` for `bits < WORD_BITS`, returning the bits shifted out of
/// the top word (in the low bits of the result).
pub fn shl_carry(a: &mut [Word], bits: u32) -> Word {
    debug_assert!((bits as usize) < WORD_BITS);
    if bits == 0 {
        return 0;
    }
    let back = Word::BITS - bits;
    let mut carry = 0;
    for w in a.iter_mut() {
        let next = *w >> back;
        *w = (*w << bits) | carry;
        carry = next;
    }
    carry
}

/// `a >>= bits` for `bits < WORD_BITS`, returning the bits shifted out of
/// the bottom word (in the high bits of the result).
pub fn shr_carry(a: &mut [Word], bits: u32) -> Word {
    debug_assert!((bits as usize) < WORD_BITS);
    if bits == 0 {
        return 0;
    }
    let back = Word::BITS - bits;
    let mut carry = 0;
    for w in a.iter_mut().rev() {
        let next = *w << back;
        *w = (*w >> bits) | carry;
        carry = next;
    }
    carry
}

/// `a <<= shift` for any shift; bits moved past the top are discarded.
pub fn shl_assign(a: &mut [Word], shift: usize) {
    let words = (shift / WORD_BITS).min(a.len());
    if words > 0 {
        a.copy_within(..a.len() - words, words);
        a[..words].fill(0);
    }
    // `shift % WORD_BITS` is below `WORD_BITS`, which always fits in `u32`.
    #[allow(clippy::cast_possible_truncation)]
    shl_carry(a, (shift % WORD_BITS) as u32);
}

/// `a >>= shift` for any shift.
pub fn shr_assign(a: &mut [Word], shift: usize) {
    let words = (shift / WORD_BITS).min(a.len());
    if words > 0 {
        a.copy_within(words.., 0);
        let n = a.len();
        a[n - words..].fill(0);
    }
    #[allow(clippy::cast_possible_truncation)]
    shr_carry(a, (shift % WORD_BITS) as u32);
}

/// Clear every bit at position `bits` and above.
pub fn trim_hi(a: &mut [Word], bits: usize) {
    let full = bits / WORD_BITS;
    if full >= a.len() {
        return;
    }
    let rem = bits % WORD_BITS;
    a[full] &= ((1 as Word) << rem).wrapping_sub(1);
    a[full + 1..].fill(0);
}
