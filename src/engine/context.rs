//! Streaming SHA-256 context.

use bytes::Buf;
use tracing::{debug, instrument, trace};

use super::bits::BitLength;
use super::codec::write_words;
use super::compress::compress;
use super::constants::INITIAL_STATE;
use super::digest::Digest;
use super::error::{Error, Result};
use super::{BLOCK_SIZE, DIGEST_SIZE, LENGTH_FIELD_SIZE, MAX_FILL_WITH_LENGTH, STATE_WORDS};

const BLOCK_BITS: u32 = (BLOCK_SIZE * 8) as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Absorbing,
    Finalized,
}

/// Incremental SHA-256 hasher.
///
/// Input is staged in a 64-byte buffer and compressed one block at a time.
/// After [`finalize`](Self::finalize) the context ignores further input until
/// [`init`](Self::init) is called.
#[derive(Debug, Clone)]
pub struct Sha256 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    fill: usize,
    bits: BitLength,
    phase: Phase,
}

impl Sha256 {
    /// Fresh context seeded with the initial hash value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            fill: 0,
            bits: BitLength::new(),
            phase: Phase::Absorbing,
        }
    }

    /// Reset to the initial state, discarding any buffered input.
    pub fn init(&mut self) {
        trace!(finalized = self.is_finalized(), "reinitializing sha256 context");
        *self = Self::new();
    }

    /// Absorb `data`. Input offered after finalization is silently dropped.
    #[instrument(level = "trace", skip(self, data), fields(len = data.len()))]
    pub fn update(&mut self, data: &[u8]) {
        if self.phase == Phase::Finalized {
            debug!(len = data.len(), "update on finalized context ignored");
            return;
        }
        self.absorb(data);
    }

    /// Absorb `data`, reporting input offered after finalization.
    pub fn try_update(&mut self, data: &[u8]) -> Result<()> {
        if self.phase == Phase::Finalized {
            return Err(Error::Finalized);
        }
        self.absorb(data);
        Ok(())
    }

    /// Absorb every remaining chunk of `buf`, in order.
    #[instrument(level = "trace", skip(self, buf), fields(len = buf.remaining()))]
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) {
        if self.phase == Phase::Finalized {
            debug!(len = buf.remaining(), "update on finalized context ignored");
            return;
        }
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let taken = chunk.len();
            self.absorb(chunk);
            buf.advance(taken);
        }
    }

    /// Pad, compress the final block(s) and return the digest.
    ///
    /// Calling this again without [`init`](Self::init) returns the same digest.
    pub fn finalize(&mut self) -> Digest {
        if self.phase == Phase::Absorbing {
            self.pad_and_compress();
            self.phase = Phase::Finalized;
        }
        self.current_digest()
    }

    /// Finalize into the first 32 bytes of `out`.
    ///
    /// A shorter `out` is rejected before any padding happens, so the context
    /// is left as it was.
    pub fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() < DIGEST_SIZE {
            debug!(got = out.len(), "digest output buffer too small");
            return Err(Error::BufferTooSmall {
                needed: DIGEST_SIZE,
                got: out.len(),
            });
        }
        let digest = self.finalize();
        out[..DIGEST_SIZE].copy_from_slice(digest.as_bytes());
        Ok(())
    }

    /// One-shot digest of `data`.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Whether the digest has already been produced.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Message length absorbed so far, in bytes (modulo 2^61).
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        (self.bits.as_u64() >> 3).wrapping_add(self.fill as u64)
    }

    /// Message length absorbed so far, in bits (modulo 2^64).
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        self.bits.as_u64().wrapping_add((self.fill as u64) << 3)
    }

    fn absorb(&mut self, data: &[u8]) {
        let mut remaining = data;
        while !remaining.is_empty() {
            let space = BLOCK_SIZE - self.fill;
            let take = space.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.fill..self.fill + take].copy_from_slice(head);
            self.fill += take;
            remaining = tail;

            if self.fill == BLOCK_SIZE {
                compress(&mut self.state, &self.buffer);
                self.bits.add_bits(BLOCK_BITS);
                self.fill = 0;
            }
        }
    }

    fn pad_and_compress(&mut self) {
        let pending = self.fill;
        self.buffer[pending] = 0x80;
        self.buffer[pending + 1..].fill(0);

        if pending > MAX_FILL_WITH_LENGTH {
            trace!(pending, "no room for length field, compressing extra block");
            compress(&mut self.state, &self.buffer);
            self.buffer.fill(0);
        }

        // pending < BLOCK_SIZE, so the bit count fits easily
        self.bits.add_bits((pending as u32) << 3);
        self.buffer[BLOCK_SIZE - LENGTH_FIELD_SIZE..].copy_from_slice(&self.bits.to_be_bytes());
        compress(&mut self.state, &self.buffer);
        self.fill = 0;
    }

    fn current_digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_SIZE];
        write_words(&mut out, &self.state);
        Digest::from_bytes(out)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
