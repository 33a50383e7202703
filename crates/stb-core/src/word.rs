//! Machine-word primitives.
//!
//! The word width is fixed at build time: `u64` on 64-bit targets, `u32`
//! otherwise. The `word32` feature forces 32-bit words everywhere, which is
//! how the 32-bit code paths are exercised on 64-bit hosts.
//!
//! Counting routines come in two flavours. The `*_safe` variants are
//! branch-free and run in time independent of the argument; the `*_fast`
//! variants defer to the target's bit-scan instructions and may branch on
//! zero. Callers pick per site.

#[cfg(all(target_pointer_width = "64", not(feature = "word32")))]
mod width {
    pub type Word = u64;
    pub type DWord = u128;

    pub(super) const SHUFFLE_STEPS: [(u32, Word); 5] = [
        (16, 0x0000_0000_FFFF_0000),
        (8, 0x0000_FF00_0000_FF00),
        (4, 0x00F0_00F0_00F0_00F0),
        (2, 0x0C0C_0C0C_0C0C_0C0C),
        (1, 0x2222_2222_2222_2222),
    ];
}

#[cfg(not(all(target_pointer_width = "64", not(feature = "word32"))))]
mod width {
    pub type Word = u32;
    pub type DWord = u64;

    pub(super) const SHUFFLE_STEPS: [(u32, Word); 4] = [
        (8, 0x0000_FF00),
        (4, 0x00F0_00F0),
        (2, 0x0C0C_0C0C),
        (1, 0x2222_2222),
    ];
}

pub use width::{DWord, Word};

/// Width of a [`Word`] in bits.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Width of a [`Word`] in octets.
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// All-ones word.
pub const WORD_MAX: Word = Word::MAX;

/// Number of words needed to hold `bits` bits.
#[must_use]
pub const fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Number of words needed to hold `bytes` octets.
#[must_use]
pub const fn words_for_bytes(bytes: usize) -> usize {
    bytes.div_ceil(WORD_BYTES)
}

/// Population count.
#[must_use]
pub const fn weight(w: Word) -> u32 {
    w.count_ones()
}

/// `true` iff the number of set bits is odd.
#[must_use]
pub const fn parity(w: Word) -> bool {
    weight(w) & 1 == 1
}

/// Trailing zero bits; `WORD_BITS` for zero. Branch-free.
#[must_use]
pub const fn ctz_safe(w: Word) -> u32 {
    weight(!w & w.wrapping_sub(1))
}

/// Trailing zero bits; `WORD_BITS` for zero. May branch on `w`.
#[must_use]
pub const fn ctz_fast(w: Word) -> u32 {
    w.trailing_zeros()
}

/// Leading zero bits; `WORD_BITS` for zero. Branch-free.
#[must_use]
pub const fn clz_safe(w: Word) -> u32 {
    // Smear the top set bit downwards; the loop count depends only on the width.
    let mut x = w;
    let mut shift = 1u32;
    while shift < Word::BITS {
        x |= x >> shift;
        shift = shift.wrapping_shl(1);
    }
    Word::BITS.wrapping_sub(weight(x))
}

/// Leading zero bits; `WORD_BITS` for zero. May branch on `w`.
#[must_use]
pub const fn clz_fast(w: Word) -> u32 {
    w.leading_zeros()
}

/// Byte reversal.
#[must_use]
pub const fn rev(w: Word) -> Word {
    w.swap_bytes()
}

/// Bit reversal.
#[must_use]
pub const fn bitrev(w: Word) -> Word {
    w.reverse_bits()
}

/// Perfect outer shuffle: bit `i` of the low half moves to position `2i`,
/// bit `i` of the high half to position `2i + 1`.
#[must_use]
pub const fn shuffle(w: Word) -> Word {
    let mut x = w;
    let mut i = 0;
    while i < width::SHUFFLE_STEPS.len() {
        let (s, m) = width::SHUFFLE_STEPS[i];
        let t = (x ^ (x >> s)) & m;
        x = x ^ t ^ (t << s);
        i += 1;
    }
    x
}

/// Inverse of [`shuffle`]: even bits gather in the low half, odd bits in the
/// high half.
#[must_use]
pub const fn deshuffle(w: Word) -> Word {
    let mut x = w;
    let mut i = width::SHUFFLE_STEPS.len();
    while i > 0 {
        i -= 1;
        let (s, m) = width::SHUFFLE_STEPS[i];
        let t = (x ^ (x >> s)) & m;
        x = x ^ t ^ (t << s);
    }
    x
}

/// For odd `w`, the unique `v` with `v * w == -1 (mod 2^WORD_BITS)`.
///
/// Newton iteration: `w` is its own inverse modulo 8, and every step doubles
/// the number of correct low bits.
#[must_use]
pub const fn neg_inv(w: Word) -> Word {
    debug_assert!(w & 1 == 1, "neg_inv requires an odd word");
    let mut inv = w;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul((2 as Word).wrapping_sub(w.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// All ones if `bit` is 1, zero if it is 0. Only the lowest bit is read.
#[must_use]
pub const fn mask_from_bit(bit: Word) -> Word {
    (bit & 1).wrapping_neg()
}

/// Load little-endian octets into `dst`, zero-filling the remaining words.
///
/// `src.len()` must not exceed `dst.len() * WORD_BYTES`.
pub fn load_le(dst: &mut [Word], src: &[u8]) {
    debug_assert!(src.len() <= dst.len().saturating_mul(WORD_BYTES));
    dst.fill(0);
    for (word, chunk) in dst.iter_mut().zip(src.chunks(WORD_BYTES)) {
        let mut buf = [0u8; WORD_BYTES];
        buf[..chunk.len()].copy_from_slice(chunk);
        *word = Word::from_le_bytes(buf);
    }
}

/// Store `src` as little-endian octets, truncating to `dst.len()` bytes and
/// zero-filling any excess of `dst`.
pub fn store_le(dst: &mut [u8], src: &[Word]) {
    dst.fill(0);
    for (chunk, word) in dst.chunks_mut(WORD_BYTES).zip(src) {
        let bytes = word.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
