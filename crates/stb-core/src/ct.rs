//! Constant-time predicates and selection over words and octets.
//!
//! Thin wrappers around [`subtle`] so arithmetic code can stay in terms of
//! word slices. Lengths are always treated as public.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::word::Word;

/// Equality of two octet strings. Unequal lengths return `false` early;
/// the length is not secret.
#[must_use]
pub fn ct_eq_bytes(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// Equality of two word slices of the same length.
#[must_use]
pub fn ct_eq_words(a: &[Word], b: &[Word]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

/// `true` iff every word is zero.
#[must_use]
pub fn ct_is_zero_words(a: &[Word]) -> bool {
    let acc = a.iter().fold(0, |acc: Word, &w| acc | w);
    bool::from(acc.ct_eq(&0))
}

/// `dst[i] = if choice { a[i] } else { b[i] }` without branching on `choice`.
pub fn select_words(dst: &mut [Word], a: &[Word], b: &[Word], choice: Choice) {
    debug_assert!(dst.len() == a.len() && a.len() == b.len());
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = Word::conditional_select(&y, &x, choice);
    }
}

/// `dst = src` if `choice` is set; otherwise `dst` is left unchanged.
pub fn assign_words_if(dst: &mut [Word], src: &[Word], choice: Choice) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        d.conditional_assign(s, choice);
    }
}

/// Lift the lowest bit of a word into a [`Choice`].
#[must_use]
pub fn choice_from_bit(bit: Word) -> Choice {
    // Truncation keeps the lowest bit, which is all `Choice` reads.
    #[allow(clippy::cast_possible_truncation)]
    Choice::from((bit & 1) as u8)
}
