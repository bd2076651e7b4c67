//! Hashing error types

use thiserror::Error;

/// Errors reported by the strict and parsing surfaces of the crate.
///
/// The streaming core itself never fails; these only come from
/// [`Sha256::try_update`](super::Sha256::try_update),
/// [`Sha256::finalize_into`](super::Sha256::finalize_into) and digest
/// conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input offered to a context that has already produced its digest
    #[error("context already finalized; call init() before hashing new data")]
    Finalized,

    /// Output buffer too small for the digest
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall {
        /// Needed size
        needed: usize,
        /// Actual size
        got: usize,
    },

    /// Raw digest of the wrong length
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected size
        expected: usize,
        /// Actual size
        got: usize,
    },

    /// Hex string with the wrong number of digits
    #[error("invalid hex digest: expected 64 digits, got {len}")]
    InvalidHexLength {
        /// Number of hex digits found
        len: usize,
    },

    /// Non-hex character in a hex string
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit {
        /// Character offset in the input
        position: usize,
        /// Offending character
        found: char,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
