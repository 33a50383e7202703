//! belt-hash (STB 34.101.31, section 6.9).
//!
//! A streaming hash with a 256-bit output built on the belt block cipher:
//!
//! - the message is absorbed in 32-octet blocks, each compressed together
//!   with the chaining value `h` by [`belt_compress`];
//! - the first output `σ1` of every compression is xored into the
//!   accumulator `s`;
//! - finalization zero-pads the last partial block, then compresses the
//!   message length in bits (128-bit little-endian), `s` and `h`. The digest
//!   is the second output `σ2` of that last call.
//!
//! [`BeltHash`] is the incremental interface, [`hash`] the one-shot one.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::belt::{encrypt_block, Key, BLOCK_LEN, H};
use crate::error::CoreError;

/// Digest length in octets.
pub const DIGEST_LEN: usize = 32;

/// Hash block length in octets.
pub const HASH_BLOCK_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Compression
// ---------------------------------------------------------------------------

fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Encrypt `block` under the key `k1 || k2` and xor `block` back in.
fn encrypt_xor(block: &[u8], k1: &[u8], k2: &[u8]) -> [u8; BLOCK_LEN] {
    let mut key_bytes = [0u8; 32];
    key_bytes[..16].copy_from_slice(k1);
    key_bytes[16..].copy_from_slice(k2);
    let key = Key::new(&key_bytes);
    key_bytes.zeroize();

    let mut out = [0u8; BLOCK_LEN];
    out.copy_from_slice(block);
    encrypt_block(&mut out, &key);
    xor_into(&mut out, block);
    out
}

/// belt-compress: map 512 input bits `X1 || X2 || X3 || X4` to
/// `(σ1, σ2)` of 128 and 256 bits.
#[must_use]
pub fn belt_compress(x: &[u8; 64]) -> ([u8; 16], [u8; 32]) {
    let (x1, rest) = x.split_at(16);
    let (x2, rest) = rest.split_at(16);
    let (x3, x4) = rest.split_at(16);

    let mut x34 = [0u8; 16];
    x34.copy_from_slice(x3);
    xor_into(&mut x34, x4);
    let mut s = x34;
    let mut key_bytes = [0u8; 32];
    key_bytes[..16].copy_from_slice(x1);
    key_bytes[16..].copy_from_slice(x2);
    let key = Key::new(&key_bytes);
    key_bytes.zeroize();
    encrypt_block(&mut s, &key);
    xor_into(&mut s, &x34);

    let y1 = encrypt_xor(x1, &s, x4);
    let not_s = s.map(|b| !b);
    let y2 = encrypt_xor(x2, &not_s, x3);

    let mut sigma2 = [0u8; 32];
    sigma2[..16].copy_from_slice(&y1);
    sigma2[16..].copy_from_slice(&y2);
    (s, sigma2)
}

// ---------------------------------------------------------------------------
// Digest
// ---------------------------------------------------------------------------

/// A 256-bit belt-hash value.
///
/// Equality runs in constant time. `Display` and `LowerHex` print lowercase
/// hex.
#[derive(Clone, Copy)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The digest octets.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consume into the raw octets.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = CoreError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| CoreError::InvalidLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.0.ct_eq(&other.0))
    }
}

impl Eq for Digest {}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

// ---------------------------------------------------------------------------
// Streaming state
// ---------------------------------------------------------------------------

/// Incremental belt-hash state.
///
/// `finalize` consumes the state; use [`BeltHash::finalize_reset`] to keep
/// hashing with the same value. The state is wiped on drop and its `Debug`
/// output is masked.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BeltHash {
    /// Chaining value.
    h: [u8; 32],
    /// Xor of the `σ1` outputs.
    s: [u8; 16],
    /// Partial block.
    buf: [u8; HASH_BLOCK_LEN],
    /// Octets in `buf`.
    filled: usize,
    /// Message length in octets, mod 2^128.
    len: u128,
}

impl Default for BeltHash {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BeltHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BeltHash(***)")
    }
}

impl BeltHash {
    /// Fresh state: `h` is the first 32 octets of `H`, `s = 0`.
    #[must_use]
    pub fn new() -> Self {
        let mut h = [0u8; 32];
        h.copy_from_slice(&H[..32]);
        Self {
            h,
            s: [0; 16],
            buf: [0; HASH_BLOCK_LEN],
            filled: 0,
            len: 0,
        }
    }

    fn step(&mut self, block: &[u8]) {
        let mut x = [0u8; 64];
        x[..HASH_BLOCK_LEN].copy_from_slice(block);
        x[HASH_BLOCK_LEN..].copy_from_slice(&self.h);
        let (sigma1, sigma2) = belt_compress(&x);
        xor_into(&mut self.s, &sigma1);
        self.h = sigma2;
        x.zeroize();
    }

    /// Absorb `data`. Splitting a message across calls does not change the
    /// result.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn update(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u128);

        if self.filled > 0 {
            let take = (HASH_BLOCK_LEN - self.filled).min(data.len());
            self.buf[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            data = &data[take..];
            if self.filled < HASH_BLOCK_LEN {
                return;
            }
            let block = self.buf;
            self.step(&block);
            self.filled = 0;
        }

        let mut blocks = data.chunks_exact(HASH_BLOCK_LEN);
        for block in &mut blocks {
            self.step(block);
        }
        let tail = blocks.remainder();
        self.buf[..tail.len()].copy_from_slice(tail);
        self.filled = tail.len();
    }

    fn finish(&mut self) -> Digest {
        if self.filled > 0 {
            let mut block = [0u8; HASH_BLOCK_LEN];
            block[..self.filled].copy_from_slice(&self.buf[..self.filled]);
            self.step(&block);
            self.filled = 0;
        }
        let mut x = [0u8; 64];
        x[..16].copy_from_slice(&self.len.wrapping_mul(8).to_le_bytes());
        x[16..32].copy_from_slice(&self.s);
        x[32..].copy_from_slice(&self.h);
        let (_, sigma2) = belt_compress(&x);
        Digest(sigma2)
    }

    /// Finish and return the digest.
    #[must_use]
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Finish, return the digest and reset to a fresh state.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        *self = Self::new();
        digest
    }
}

/// One-shot belt-hash.
#[must_use]
pub fn hash(data: &[u8]) -> Digest {
    let mut state = BeltHash::new();
    state.update(data);
    state.finalize()
}
