//! Modular arithmetic for an odd modulus.
//!
//! Every routine here runs in time that depends only on operand lengths:
//! conditional corrections are applied through masks, and exponentiation
//! multiplies on every exponent bit and keeps the product through a
//! constant-time select.
//!
//! Montgomery form uses `R = 2^(WORD_BITS * n)` where `n = m.len()`. The
//! constants `R mod m` and `R^2 mod m` are obtained by repeated modular
//! doubling, so no long division is needed on this path.

#![allow(clippy::arithmetic_side_effects)]

use super::arith::{add, add_assign, shl_carry, sub, sub_assign};
use super::mul::add_mul_word;
use crate::ct::{assign_words_if, choice_from_bit};
use crate::layout::split_words;
use crate::word::{mask_from_bit, neg_inv, Word, WORD_BITS};

/// `a += m & mask`, returning the carry.
fn add_masked_assign(a: &mut [Word], m: &[Word], mask: Word) -> Word {
    let mut carry = 0;
    for (x, &y) in a.iter_mut().zip(m) {
        let (s, o1) = x.overflowing_add(y & mask);
        let (s, o2) = s.overflowing_add(carry);
        *x = s;
        carry = Word::from(o1 | o2);
    }
    carry
}

/// `c = (a + b) mod m` for `a, b < m`.
pub fn add_mod(c: &mut [Word], a: &[Word], b: &[Word], m: &[Word]) {
    let carry = add(c, a, b);
    let borrow = sub_assign(c, m);
    // Undo the subtraction when the sum was already below m.
    add_masked_assign(c, m, mask_from_bit(borrow & !carry));
}

/// `c = (a - b) mod m` for `a, b < m`.
pub fn sub_mod(c: &mut [Word], a: &[Word], b: &[Word], m: &[Word]) {
    let borrow = sub(c, a, b);
    add_masked_assign(c, m, mask_from_bit(borrow));
}

/// `a = 2a mod m` for `a < m`.
pub fn double_mod_assign(a: &mut [Word], m: &[Word]) {
    let carry = shl_carry(a, 1);
    let borrow = sub_assign(a, m);
    add_masked_assign(a, m, mask_from_bit(borrow & !carry));
}

/// `r = R mod m`, the Montgomery form of one. `m` odd, `m >= 3`.
pub fn r_mod(r: &mut [Word], m: &[Word]) {
    debug_assert_eq!(r.len(), m.len());
    r.fill(0);
    if let Some(lo) = r.first_mut() {
        *lo = 1;
    }
    for _ in 0..WORD_BITS * m.len() {
        double_mod_assign(r, m);
    }
}

/// `r = R^2 mod m`, the factor that moves a number into Montgomery form.
pub fn r2_mod(r: &mut [Word], m: &[Word]) {
    r_mod(r, m);
    for _ in 0..WORD_BITS * m.len() {
        double_mod_assign(r, m);
    }
}

/// Words of stack needed by [`mont_mul`] for an `n`-word modulus.
#[must_use]
pub const fn mont_mul_deep(n: usize) -> usize {
    n + 2
}

/// Montgomery product `r = a * b * R^-1 mod m` (CIOS).
///
/// `a, b < m`, `m` odd, `m0 = neg_inv(m[0])`; all slices have length `n`.
pub fn mont_mul(r: &mut [Word], a: &[Word], b: &[Word], m: &[Word], m0: Word, stack: &mut [Word]) {
    let n = m.len();
    debug_assert!(r.len() == n && a.len() == n && b.len() == n);
    debug_assert!(m.first().is_some_and(|&w| w & 1 == 1), "modulus must be odd");
    let ([t], _) = split_words(stack, [n + 2]);
    t.fill(0);

    for &bi in b {
        let carry = add_mul_word(&mut t[..n], a, bi);
        let (s, o) = t[n].overflowing_add(carry);
        t[n] = s;
        t[n + 1] = Word::from(o);

        // Choose u so that t + u*m is divisible by 2^W, then shift one word.
        let u = t[0].wrapping_mul(m0);
        let carry = add_mul_word(&mut t[..n], m, u);
        let (s, o) = t[n].overflowing_add(carry);
        t[n] = s;
        t[n + 1] += Word::from(o);
        debug_assert_eq!(t[0], 0);
        t.copy_within(1.., 0);
        t[n + 1] = 0;
    }

    // t < 2m: subtract m unless that borrows out of the (n+1)-word value.
    let borrow = sub(r, &t[..n], m);
    let keep_t = borrow & !t[n] & 1;
    assign_words_if(r, &t[..n], choice_from_bit(keep_t));
}

/// Words of stack needed by [`mul_mod`] for an `n`-word modulus.
#[must_use]
pub const fn mul_mod_deep(n: usize) -> usize {
    2 * n + mont_mul_deep(n)
}

/// `r = a * b mod m` for `a, b < m`, `m` odd, `m >= 3`.
pub fn mul_mod(r: &mut [Word], a: &[Word], b: &[Word], m: &[Word], stack: &mut [Word]) {
    let n = m.len();
    let m0 = neg_inv(m[0]);
    let ([r2, t], stack) = split_words(stack, [n, n]);
    r2_mod(r2, m);
    // (a b R^-1) R^2 R^-1 = a b.
    mont_mul(t, a, b, m, m0, stack);
    mont_mul(r, t, r2, m, m0, stack);
}

/// Words of stack needed by [`sqr_mod`].
#[must_use]
pub const fn sqr_mod_deep(n: usize) -> usize {
    mul_mod_deep(n)
}

/// `r = a^2 mod m` for `a < m`, `m` odd, `m >= 3`.
pub fn sqr_mod(r: &mut [Word], a: &[Word], m: &[Word], stack: &mut [Word]) {
    mul_mod(r, a, a, m, stack);
}

/// Words of stack needed by [`power_mont`] for an `n`-word modulus.
#[must_use]
pub const fn power_mont_deep(n: usize) -> usize {
    n + mont_mul_deep(n)
}

/// `r = a^e` with `a` and `r` in Montgomery form.
///
/// `m0 = neg_inv(m[0])` and `one = R mod m` are supplied by the caller, so
/// a modulus used for many exponentiations pays for them once. Left-to-right
/// square-and-multiply: every exponent bit costs one squaring and one
/// multiplication, and the product is kept or dropped with a constant-time
/// select.
pub fn power_mont(
    r: &mut [Word],
    a: &[Word],
    e: &[Word],
    m: &[Word],
    m0: Word,
    one: &[Word],
    stack: &mut [Word],
) {
    let ([tmp], stack) = split_words(stack, [m.len()]);
    r.copy_from_slice(one);
    for &word in e.iter().rev() {
        for bit in (0..WORD_BITS).rev() {
            mont_mul(tmp, r, r, m, m0, stack);
            mont_mul(r, tmp, a, m, m0, stack);
            // r = tmp * a; fall back to tmp when the bit is clear.
            assign_words_if(r, tmp, choice_from_bit(!(word >> bit)));
        }
    }
}

/// Words of stack needed by [`power_mod`] for an `n`-word modulus.
#[must_use]
pub const fn power_mod_deep(n: usize) -> usize {
    4 * n + power_mont_deep(n)
}

/// `r = a^e mod m` for `a < m`, `m` odd, `m >= 3`.
///
/// `a` may be shorter than `m`; `e` has any length and any bit pattern
/// (`a^0 = 1`). Runs [`power_mont`] between conversions into and out of
/// Montgomery form.
pub fn power_mod(r: &mut [Word], a: &[Word], e: &[Word], m: &[Word], stack: &mut [Word]) {
    let n = m.len();
    debug_assert!(a.len() <= n);
    let m0 = neg_inv(m[0]);
    let ([base, acc, one, r2], stack) = split_words(stack, [n, n, n, n]);

    r2_mod(r2, m);
    acc.fill(0);
    acc[..a.len()].copy_from_slice(a);
    mont_mul(base, acc, r2, m, m0, stack);
    r_mod(one, m);
    power_mont(acc, base, e, m, m0, one, stack);

    // Leave Montgomery form: multiply by plain 1.
    one.fill(0);
    one[0] = 1;
    mont_mul(r, acc, one, m, m0, stack);
}

/// `a += b mod m` in place for `a, b < m`.
pub fn add_mod_assign(a: &mut [Word], b: &[Word], m: &[Word]) {
    let carry = add_assign(a, b);
    let borrow = sub_assign(a, m);
    add_masked_assign(a, m, mask_from_bit(borrow & !carry));
}
