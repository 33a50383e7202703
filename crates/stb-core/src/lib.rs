//! `stb-core`: belt-hash, the STB byte generator, multi-precision arithmetic
//! over machine words and prime search.
//!
//! Everything is synchronous and allocation free: routines that need working
//! memory take a caller-owned word stack sized by a `*_deep` query.
//!
//! - [`hash`]: belt-hash (STB 34.101.31) on top of the [`belt`] block cipher
//! - [`prng`]: deterministic generator keyed by belt-hash, plus the
//!   [`ByteSource`] capability used by randomized routines
//! - [`bigint`]: little-endian word-slice integers, Montgomery arithmetic
//! - [`sieve`], [`prime`]: factor base, primality tests, prime searches
//! - [`word`], [`ct`], [`layout`]: word primitives, constant-time helpers,
//!   scratch layout

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod ct;
pub mod layout;
pub mod word;

pub mod bigint;

pub mod belt;
pub mod hash;

pub mod prng;

pub mod prime;
pub mod sieve;

pub use error::CoreError;
pub use hash::{belt_compress, hash, BeltHash, Digest, DIGEST_LEN};
pub use layout::{split_words, Align, Layout};
pub use prime::params::{SearchParams, SearchPreset};
pub use prime::{
    extend_prime, extend_prime_deep, is_prime, is_prime_deep, is_prime_word, is_sg_prime,
    is_sg_prime_deep, is_smooth, is_smooth_deep, miller_rabin, miller_rabin_deep, next_prime,
    next_prime_deep, rounds_for_bits,
};
pub use prng::{ByteSource, RngSource, StbPrng};
pub use sieve::{base, base_index, base_mod, base_prime, base_size, is_base_prime, is_sieved};
pub use word::{DWord, Word, WORD_BITS, WORD_BYTES};
