//! Deterministic STB byte generator and the byte-source capability.
//!
//! [`StbPrng`] expands one optional seed into an arbitrary long stream:
//!
//! - the key is `belt-hash(seed)`, with the all-zero 32-octet seed standing
//!   in for an absent one;
//! - output block `j` (counting from 0) is `belt-hash(key || <j>_128)`, the
//!   counter encoded little-endian;
//! - octets left over from a block are served first on the next call, so the
//!   stream does not depend on how it is consumed.
//!
//! Randomized routines in this crate draw through [`ByteSource`], which the
//! generator implements and which [`RngSource`] provides for any
//! [`rand::RngCore`].

use core::fmt;

use rand::{CryptoRng, RngCore, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hash::{hash, BeltHash, DIGEST_LEN};

/// Seed used by [`StbPrng::start`] when none is given.
pub const ZERO_SEED: [u8; 32] = [0; 32];

// ---------------------------------------------------------------------------
// ByteSource
// ---------------------------------------------------------------------------

/// Supplier of random octets.
///
/// `fill` writes `out.len()` octets and returns `true`, or returns `false`
/// when it cannot; callers treat that as exhaustion of the source.
pub trait ByteSource {
    /// Fill `out` completely, or report failure.
    fn fill(&mut self, out: &mut [u8]) -> bool;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn fill(&mut self, out: &mut [u8]) -> bool {
        (**self).fill(out)
    }
}

/// Adapter drawing octets from any [`rand::RngCore`], e.g. `OsRng`.
#[derive(Debug, Clone, Default)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> ByteSource for RngSource<R> {
    fn fill(&mut self, out: &mut [u8]) -> bool {
        self.0.try_fill_bytes(out).is_ok()
    }
}

// ---------------------------------------------------------------------------
// StbPrng
// ---------------------------------------------------------------------------

/// Hash-counter generator keyed by belt-hash of a seed.
///
/// Wiped on drop; `Debug` is masked.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StbPrng {
    key: [u8; DIGEST_LEN],
    counter: u128,
    block: [u8; DIGEST_LEN],
    /// Index of the next unread octet of `block`; `DIGEST_LEN` when empty.
    pos: usize,
}

impl fmt::Debug for StbPrng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StbPrng(***)")
    }
}

impl StbPrng {
    /// Key the generator with `seed`, or with [`ZERO_SEED`] for `None`.
    #[must_use]
    pub fn start(seed: Option<&[u8]>) -> Self {
        let key = hash(seed.unwrap_or(&ZERO_SEED)).into_bytes();
        Self {
            key,
            counter: 0,
            block: [0; DIGEST_LEN],
            pos: DIGEST_LEN,
        }
    }

    /// Re-key in place, discarding all pending output.
    pub fn restart(&mut self, seed: Option<&[u8]>) {
        *self = Self::start(seed);
    }

    fn refill(&mut self) {
        let mut state = BeltHash::new();
        state.update(&self.key);
        state.update(&self.counter.to_le_bytes());
        self.block = state.finalize().into_bytes();
        self.counter = self.counter.wrapping_add(1);
        self.pos = 0;
    }

    /// Write the next `out.len()` octets of the stream.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn step_r(&mut self, out: &mut [u8]) {
        let mut out = out;
        while !out.is_empty() {
            if self.pos == DIGEST_LEN {
                self.refill();
            }
            let take = (DIGEST_LEN - self.pos).min(out.len());
            let (head, tail) = out.split_at_mut(take);
            head.copy_from_slice(&self.block[self.pos..self.pos + take]);
            self.pos += take;
            out = tail;
        }
    }
}

impl ByteSource for StbPrng {
    fn fill(&mut self, out: &mut [u8]) -> bool {
        self.step_r(out);
        true
    }
}

impl RngCore for StbPrng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.step_r(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.step_r(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.step_r(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.step_r(dest);
        Ok(())
    }
}

impl CryptoRng for StbPrng {}

impl SeedableRng for StbPrng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::start(Some(&seed))
    }
}
