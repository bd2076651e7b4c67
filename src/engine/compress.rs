//! Message schedule expansion and the 64-round compression function.

use super::codec::word_from_bytes;
use super::constants::ROUND_CONSTANTS;
use super::{BLOCK_SIZE, SCHEDULE_WORDS, STATE_WORDS};

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Expanded message schedule `W[0..64]` for a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; SCHEDULE_WORDS],
}

impl MessageSchedule {
    /// Expand a block: sixteen words read directly, forty-eight derived.
    #[must_use]
    pub fn expand(block: &[u8; BLOCK_SIZE]) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];
        for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = word_from_bytes(chunk[0], chunk[1], chunk[2], chunk[3]);
        }

        for t in 16..SCHEDULE_WORDS {
            w[t] = small_sigma1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        Self { words: w }
    }

    /// Borrow the schedule words.
    #[must_use]
    pub fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.words
    }
}

/// Fold one block into the hash state.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let schedule = MessageSchedule::expand(block);
    let w = schedule.words();

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &word) in ROUND_CONSTANTS.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choice(e, f, g))
            .wrapping_add(k)
            .wrapping_add(word);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (slot, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.wrapping_add(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::INITIAL_STATE;

    // "abc" padded into a single block
    fn abc_block() -> [u8; BLOCK_SIZE] {
        let mut block = [0u8; BLOCK_SIZE];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn mixing_functions() {
        assert_eq!(choice(0xFFFF_0000, 0x1234_5678, 0x9ABC_DEF0), 0x1234_DEF0);
        assert_eq!(majority(0xFF00_FF00, 0xF0F0_F0F0, 0x0000_FFFF), 0xF000_FFF0);
        assert_eq!(small_sigma0(1), 0x0200_4000);
        assert_eq!(small_sigma1(1), 0x0000_A000);
        assert_eq!(big_sigma0(1), 0x4008_0400);
        assert_eq!(big_sigma1(1), 0x0420_0080);
    }

    #[test]
    fn schedule_prefix_is_block_words() {
        let schedule = MessageSchedule::expand(&abc_block());
        let w = schedule.words();
        assert_eq!(w[0], 0x6162_6380);
        assert!(w[1..15].iter().all(|&word| word == 0));
        assert_eq!(w[15], 0x0000_0018);
    }

    #[test]
    fn schedule_expansion_known_words() {
        // W[16], W[17] and W[63] for the "abc" block
        let schedule = MessageSchedule::expand(&abc_block());
        let w = schedule.words();
        assert_eq!(w[16], 0x6162_6380);
        assert_eq!(w[17], 0x000F_0000);
        assert_eq!(w[63], 0x12B1_EDEB);
    }

    #[test]
    fn single_block_abc() {
        let mut state = INITIAL_STATE;
        compress(&mut state, &abc_block());
        assert_eq!(
            state,
            [
                0xBA78_16BF,
                0x8F01_CFEA,
                0x4141_40DE,
                0x5DAE_2223,
                0xB003_61A3,
                0x9617_7A9C,
                0xB410_FF61,
                0xF200_15AD,
            ]
        );
    }

    #[test]
    fn compression_depends_on_prior_state() {
        let block = abc_block();
        let mut first = INITIAL_STATE;
        let mut second = [0u32; STATE_WORDS];
        compress(&mut first, &block);
        compress(&mut second, &block);
        assert_ne!(first, second);
    }
}
