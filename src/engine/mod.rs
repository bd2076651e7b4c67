//! SHA-256 engine core
//!
//! This module provides the block compression, the bit-length accounting, and
//! the streaming context that drives them.

mod bits;
mod codec;
mod compress;
mod constants;
mod context;
mod digest;
mod error;

pub use bits::BitLength;
pub use codec::{byte_from_word, word_from_bytes};
pub use compress::{MessageSchedule, compress};
pub use constants::{INITIAL_STATE, ROUND_CONSTANTS};
pub use context::Sha256;
pub use digest::Digest;
pub use error::{Error, Result};

/// Size of one compression block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Size of the digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// Number of 32-bit words in the hash state
pub const STATE_WORDS: usize = 8;

/// Number of 32-bit words in an expanded message schedule
pub const SCHEDULE_WORDS: usize = 64;

/// Size of the big-endian bit-length field closing the final block
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Last buffer fill that still leaves room for the length field
pub(crate) const MAX_FILL_WITH_LENGTH: usize = BLOCK_SIZE - LENGTH_FIELD_SIZE - 1;
