//! Running message length, in bits, kept as two 32-bit halves.

use super::LENGTH_FIELD_SIZE;
use super::codec::write_words;

/// 64-bit bit counter split into low and high words.
///
/// Addition carries from `low` into `high`; `high` itself wraps, so the total
/// is the message length modulo 2^64 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitLength {
    low: u32,
    high: u32,
}

impl BitLength {
    /// Zeroed counter.
    #[must_use]
    pub const fn new() -> Self {
        Self { low: 0, high: 0 }
    }

    /// Build a counter from a full 64-bit value.
    #[must_use]
    pub const fn from_u64(bits: u64) -> Self {
        Self {
            low: bits as u32,
            high: (bits >> 32) as u32,
        }
    }

    /// Add `n` bits, carrying into the high word when the low word overflows.
    pub fn add_bits(&mut self, n: u32) {
        if self.low > u32::MAX - n {
            self.high = self.high.wrapping_add(1);
        }
        self.low = self.low.wrapping_add(n);
    }

    /// Low 32 bits of the count.
    #[must_use]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// High 32 bits of the count.
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Count as a single 64-bit value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }

    /// Length field as it appears at the end of the final block.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; LENGTH_FIELD_SIZE] {
        let mut out = [0u8; LENGTH_FIELD_SIZE];
        write_words(&mut out, &[self.high, self.low]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_without_carry() {
        let mut bits = BitLength::new();
        bits.add_bits(512);
        bits.add_bits(24);
        assert_eq!(bits.low(), 536);
        assert_eq!(bits.high(), 0);
        assert_eq!(bits.as_u64(), 536);
    }

    #[test]
    fn carries_at_32_bit_boundary() {
        let mut bits = BitLength::from_u64(0xFFFF_FE00);
        bits.add_bits(512);
        assert_eq!(bits.low(), 0);
        assert_eq!(bits.high(), 1);
        assert_eq!(bits.as_u64(), 1 << 32);

        let mut bits = BitLength::from_u64(0xFFFF_FFF8);
        bits.add_bits(512);
        assert_eq!(bits.as_u64(), 0x1_0000_01F8);
    }

    #[test]
    fn exact_fit_does_not_carry() {
        let mut bits = BitLength::from_u64(0xFFFF_FDFF);
        bits.add_bits(512);
        assert_eq!(bits.low(), u32::MAX);
        assert_eq!(bits.high(), 0);
    }

    #[test]
    fn high_word_wraps() {
        let mut bits = BitLength::from_u64(u64::MAX - 7);
        bits.add_bits(16);
        assert_eq!(bits.as_u64(), 8);
    }

    #[test]
    fn length_field_is_big_endian_high_word_first() {
        let bits = BitLength::from_u64(0x0000_0001_0000_01F8);
        assert_eq!(bits.to_be_bytes(), [0, 0, 0, 1, 0, 0, 0x01, 0xF8]);
        assert_eq!(bits.to_be_bytes(), bits.as_u64().to_be_bytes());
    }

    #[test]
    fn zero_addition_is_identity() {
        let mut bits = BitLength::from_u64(0xFFFF_FFFF);
        bits.add_bits(0);
        assert_eq!(bits.as_u64(), 0xFFFF_FFFF);
    }
}
