//! Multi-precision unsigned integers over machine words.
//!
//! A number is a little-endian slice of [`Word`](crate::word::Word)s:
//! `A = Σ a[i] · 2^(WORD_BITS · i)`. The slice length is the word count;
//! leading zero words are allowed and an empty slice is zero. Routines take
//! their operands as separate slices, so outputs never alias inputs; where an
//! in-place form is useful it is provided as an `*_assign` variant.
//!
//! Routines that need working memory take a `stack: &mut [Word]` and publish
//! a matching `*_deep` query giving the number of words it must hold.
//!
//! | file        | contents                                              |
//! |-------------|-------------------------------------------------------|
//! | `arith`     | comparison, add/sub with carry, shifts, bit access    |
//! | `mul`       | word multiply-accumulate, full product, square        |
//! | `div`       | single-word reduction, long division (Knuth D)        |
//! | `modular`   | modular add/sub, Montgomery product, exponentiation   |
//! | `rand`      | uniform sampling below a modulus                      |
//!
//! The modular routines and the add/sub/mul primitives run in time
//! independent of operand values. Comparison, division and sampling are for
//! public data.

pub mod arith;
pub mod div;
pub mod modular;
pub mod mul;
pub mod rand;

pub use arith::{
    add, add_assign, add_word, add_word_assign, bit_len, cmp, cmp_var, eq, is_rep_word,
    is_sum_eq, is_sum_word_eq, is_word, is_zero, set_bit, shl_assign, shl_carry, shr_assign,
    shr_carry, sub, sub_assign, sub_word, sub_word_assign, test_bit, trim_hi, word_len,
};
pub use div::{
    div_rem, div_rem_deep, div_word_assign, mod_reduce, mod_reduce_deep, mod_word,
};
pub use modular::{
    add_mod, add_mod_assign, double_mod_assign, mont_mul, mont_mul_deep, mul_mod, mul_mod_deep,
    power_mod, power_mod_deep, power_mont, power_mont_deep, r2_mod, r_mod, sqr_mod, sqr_mod_deep,
    sub_mod,
};
pub use mul::{add_mul_word, mul, mul_word, sqr, sub_mul_word};
pub use rand::{rand_mod, rand_nz_mod};
