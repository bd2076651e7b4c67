//! SHA-256 (FIPS 180-4) with streaming and one-shot interfaces
//!
//! The context is a plain, fixed-size value: no allocation, no locking, no
//! I/O. Distinct contexts are independent and may be driven from different
//! threads.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_stream::{Sha256, hash};
//!
//! // One-shot
//! let digest = hash(b"abc");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf 8f01cfea 414140de 5dae2223 b00361a3 96177a9c b410ff61 f20015ad"
//! );
//!
//! // Streaming, any chunk boundaries
//! let mut ctx = Sha256::new();
//! ctx.update(b"a");
//! ctx.update(b"bc");
//! assert_eq!(ctx.finalize(), digest);
//! ```
//!
//! # Misuse
//!
//! The streaming core is fail-soft: input offered after
//! [`Sha256::finalize`] is dropped without error. Use
//! [`Sha256::try_update`] to have that reported as [`Error::Finalized`].
//!
//! # Features
//!
//! - **`serde`** - `Digest` serializes as a lowercase hex string

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]

pub mod engine;

pub use engine::{
    BLOCK_SIZE, BitLength, DIGEST_SIZE, Digest, Error, LENGTH_FIELD_SIZE, Result, SCHEDULE_WORDS,
    STATE_WORDS, Sha256,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-shot SHA-256 of `data`.
#[must_use]
pub fn hash(data: &[u8]) -> Digest {
    Sha256::digest(data)
}
