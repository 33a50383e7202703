#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Security properties of the crate:
//! - state wiping of the hash and generator (`zeroize`)
//! - output quality of the generator (Shannon entropy)
//! - timing behaviour of constant-time routines (Welch's t-test)

mod entropy_quality;
mod timing_sidechannel;
mod zeroize_state;
