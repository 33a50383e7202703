//! Error types for `stb-core`.
//!
//! Arithmetic and primality routines report "not found" / "composite" as
//! `false` and treat violated preconditions as caller bugs. `CoreError` is
//! reserved for the validation boundaries: scratch layout, digest parsing and
//! search configuration.

use thiserror::Error;

/// Errors produced at the validation boundaries of the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A caller-provided working-memory region is shorter than required.
    #[error("scratch region too small: {needed} needed, {available} available")]
    ScratchTooSmall {
        /// Required size: bytes for a [`Layout`](crate::layout::Layout)
        /// region (padding included), words for a word stack.
        needed: usize,
        /// Size actually supplied, in the same unit.
        available: usize,
    },

    /// The sizes of a layout do not fit in `usize`.
    #[error("scratch layout size overflows usize")]
    LayoutOverflow,

    /// Byte input of the wrong length (digests, seeds).
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Supplied length in bytes.
        actual: usize,
    },

    /// A search or configuration parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
