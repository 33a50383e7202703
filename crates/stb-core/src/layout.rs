//! Working-memory layout.
//!
//! Routines in this crate never allocate. Instead each one publishes a
//! `*_deep` query (in words) and takes a caller-provided stack, which it
//! carves into sub-buffers with [`split_words`]. For callers that keep their
//! scratch in a raw octet region, [`Layout`] computes the region size for a
//! list of `(size, alignment)` parts and carves it into aligned sub-slices.

use crate::error::CoreError;
use crate::word::{Word, WORD_BYTES};

/// Alignment request for one part of a [`Layout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    /// No alignment beyond one octet.
    Byte,
    /// Native word alignment.
    Word,
}

impl Align {
    /// Alignment in octets.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Word => WORD_BYTES,
        }
    }
}

/// Padding needed to move `offset` up to a multiple of `align`.
const fn padding(offset: usize, align: Align) -> usize {
    let a = align.bytes();
    let rem = offset.wrapping_rem(a);
    if rem == 0 {
        0
    } else {
        a.wrapping_sub(rem)
    }
}

/// A fixed list of `(size in octets, alignment)` parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout<const N: usize> {
    parts: [(usize, Align); N],
}

impl<const N: usize> Layout<N> {
    /// Describe a region made of `parts`, laid out in order.
    #[must_use]
    pub const fn new(parts: [(usize, Align); N]) -> Self {
        Self { parts }
    }

    fn needs_word_base(&self) -> bool {
        self.parts.iter().any(|&(_, a)| a == Align::Word)
    }

    /// Length of the parts laid out from a word-aligned base.
    fn packed_len(&self) -> Option<usize> {
        self.parts.iter().try_fold(0usize, |offset, &(size, align)| {
            offset.checked_add(padding(offset, align))?.checked_add(size)
        })
    }

    /// Octets a region must have to hold every part, whatever the alignment
    /// of its base. `None` if the sizes overflow.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        let lead = if self.needs_word_base() {
            WORD_BYTES.wrapping_sub(1)
        } else {
            0
        };
        self.packed_len()?.checked_add(lead)
    }

    /// Carve `region` into the parts, aligned relative to their real
    /// addresses.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::LayoutOverflow` if the sizes overflow `usize` and
    /// `CoreError::ScratchTooSmall` if `region` cannot hold the parts.
    pub fn carve<'a>(&self, region: &'a mut [u8]) -> Result<[&'a mut [u8]; N], CoreError> {
        let packed = self.packed_len().ok_or(CoreError::LayoutOverflow)?;
        let lead = if self.needs_word_base() {
            region.as_ptr().align_offset(WORD_BYTES)
        } else {
            0
        };
        let needed = lead.checked_add(packed).ok_or(CoreError::LayoutOverflow)?;
        if needed > region.len() {
            return Err(CoreError::ScratchTooSmall {
                needed,
                available: region.len(),
            });
        }

        let mut rest = &mut region[lead..];
        let mut offset = 0usize;
        let mut out: [&'a mut [u8]; N] = core::array::from_fn(|_| <&mut [u8]>::default());
        for (slot, &(size, align)) in out.iter_mut().zip(&self.parts) {
            let pad = padding(offset, align);
            let (_, tail) = core::mem::take(&mut rest).split_at_mut(pad);
            let (part, tail) = tail.split_at_mut(size);
            *slot = part;
            rest = tail;
            offset = offset.wrapping_add(pad).wrapping_add(size);
        }
        Ok(out)
    }
}

/// Split a word stack into `N` leading buffers of the given lengths and the
/// remainder.
///
/// # Panics
///
/// Panics if `stack` holds fewer words than the sizes add up to; callers
/// size their stacks with the matching `*_deep` query.
pub fn split_words<const N: usize>(
    stack: &mut [Word],
    sizes: [usize; N],
) -> ([&mut [Word]; N], &mut [Word]) {
    let mut rest = stack;
    let mut out: [&mut [Word]; N] = core::array::from_fn(|_| <&mut [Word]>::default());
    for (slot, size) in out.iter_mut().zip(sizes) {
        let (head, tail) = core::mem::take(&mut rest).split_at_mut(size);
        *slot = head;
        rest = tail;
    }
    (out, rest)
}
