//! Search parameters with presets.
//!
//! [`SearchParams`] bundles the knobs shared by [`next_prime`] and
//! [`extend_prime`]: how many candidates to test and how deep to sieve. It
//! (de)serializes with `serde`, so callers can keep it in their own
//! configuration, and [`SearchPreset`] gives three ready-made settings.

use serde::{Deserialize, Serialize};

use super::{extend_prime, extend_prime_deep, next_prime, next_prime_deep};
use crate::error::CoreError;
use crate::prng::ByteSource;
use crate::sieve::BASE_SIZE;
use crate::word::{Word, WORD_BITS};

/// Parameters of a prime search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Sieve survivors (next-prime) or random draws (extend-prime) to try.
    pub trials: usize,
    /// Number of base primes used for sieving, at most [`BASE_SIZE`].
    pub sieve_primes: usize,
    /// Largest admissible bit length for next-prime; `None` means the full
    /// width of the output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_limit: Option<usize>,
}

/// Search preset selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchPreset {
    /// Shallow sieve, few trials. Suited to small moduli and tests.
    Quick,
    /// General purpose.
    #[default]
    Standard,
    /// Full factor base and a large trial budget.
    Exhaustive,
}

impl SearchPreset {
    /// Parameters for this preset.
    #[must_use]
    pub const fn params(self) -> SearchParams {
        match self {
            Self::Quick => SearchParams {
                trials: 256,
                sieve_primes: 128,
                bit_limit: None,
            },
            Self::Standard => SearchParams {
                trials: 4096,
                sieve_primes: 512,
                bit_limit: None,
            },
            Self::Exhaustive => SearchParams {
                trials: 65_536,
                sieve_primes: BASE_SIZE,
                bit_limit: None,
            },
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchPreset::default().params()
    }
}

impl From<SearchPreset> for SearchParams {
    fn from(preset: SearchPreset) -> Self {
        preset.params()
    }
}

fn check_stack(needed: usize, stack: &[Word]) -> Result<(), CoreError> {
    if stack.len() < needed {
        return Err(CoreError::ScratchTooSmall {
            needed,
            available: stack.len(),
        });
    }
    Ok(())
}

impl SearchParams {
    /// Check the parameters against the factor base.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` if `trials` is zero or
    /// `sieve_primes` exceeds [`BASE_SIZE`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.trials == 0 {
            return Err(CoreError::InvalidParameter(
                "trials must be at least 1".into(),
            ));
        }
        if self.sieve_primes > BASE_SIZE {
            return Err(CoreError::InvalidParameter(format!(
                "sieve_primes {} exceeds factor base size {BASE_SIZE}",
                self.sieve_primes
            )));
        }
        Ok(())
    }

    /// Words of stack needed by [`SearchParams::next_prime`].
    #[must_use]
    pub const fn next_prime_deep(&self, n: usize) -> usize {
        next_prime_deep(n, self.sieve_primes)
    }

    /// Run [`next_prime`] with these parameters.
    ///
    /// Returns `Ok(true)` when a prime was written to `out`, `Ok(false)`
    /// when the search ran out of trials or bits.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` for invalid parameters and
    /// `CoreError::ScratchTooSmall` if `stack` is shorter than
    /// [`SearchParams::next_prime_deep`].
    pub fn next_prime(
        &self,
        out: &mut [Word],
        start: &[Word],
        stack: &mut [Word],
    ) -> Result<bool, CoreError> {
        self.validate()?;
        check_stack(self.next_prime_deep(out.len()), stack)?;
        let bit_limit = self
            .bit_limit
            .unwrap_or_else(|| out.len().saturating_mul(WORD_BITS));
        Ok(next_prime(
            out,
            start,
            self.trials,
            self.sieve_primes,
            bit_limit,
            stack,
        ))
    }

    /// Run [`extend_prime`] with these parameters.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidParameter` for invalid parameters or a
    /// `p_bits` that does not fit `p`, and `CoreError::ScratchTooSmall` if
    /// `stack` is shorter than `extend_prime_deep(p.len(), q.len())`.
    pub fn extend_prime(
        &self,
        p: &mut [Word],
        p_bits: usize,
        q: &[Word],
        src: &mut impl ByteSource,
        stack: &mut [Word],
    ) -> Result<bool, CoreError> {
        self.validate()?;
        if p_bits > p.len().saturating_mul(WORD_BITS) {
            return Err(CoreError::InvalidParameter(format!(
                "p_bits {p_bits} does not fit {} words",
                p.len()
            )));
        }
        check_stack(extend_prime_deep(p.len(), q.len()), stack)?;
        Ok(extend_prime(
            p,
            p_bits,
            q,
            self.trials,
            self.sieve_primes,
            src,
            stack,
        ))
    }
}
