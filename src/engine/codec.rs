//! Big-endian conversions between bytes and 32-bit words.

/// Assemble a word from four bytes, most significant first.
#[inline(always)]
#[must_use]
pub const fn word_from_bytes(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    ((b0 as u32) << 24) | ((b1 as u32) << 16) | ((b2 as u32) << 8) | (b3 as u32)
}

/// Extract the byte sitting `shift` bits up from the bottom of `word`.
///
/// Shift amounts are taken modulo 32.
#[inline(always)]
#[must_use]
pub const fn byte_from_word(word: u32, shift: u32) -> u8 {
    ((word >> (shift & 31)) & 0xff) as u8
}

/// Serialize words as consecutive big-endian byte quadruples.
pub(crate) fn write_words(out: &mut [u8], words: &[u32]) {
    for (chunk, &word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk[0] = byte_from_word(word, 24);
        chunk[1] = byte_from_word(word, 16);
        chunk[2] = byte_from_word(word, 8);
        chunk[3] = byte_from_word(word, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_big_endian() {
        assert_eq!(word_from_bytes(0x61, 0x62, 0x63, 0x80), 0x6162_6380);
        assert_eq!(
            word_from_bytes(0xde, 0xad, 0xbe, 0xef),
            u32::from_be_bytes([0xde, 0xad, 0xbe, 0xef])
        );
    }

    #[test]
    fn byte_extraction_by_shift() {
        let word = 0x6A09_E667;
        assert_eq!(byte_from_word(word, 24), 0x6A);
        assert_eq!(byte_from_word(word, 16), 0x09);
        assert_eq!(byte_from_word(word, 8), 0xE6);
        assert_eq!(byte_from_word(word, 0), 0x67);
        // shift wraps at 32
        assert_eq!(byte_from_word(word, 32), 0x67);
    }

    #[test]
    fn write_words_matches_to_be_bytes() {
        let words = [0x0102_0304, 0xA0B0_C0D0];
        let mut out = [0u8; 8];
        write_words(&mut out, &words);
        assert_eq!(&out[..4], &words[0].to_be_bytes());
        assert_eq!(&out[4..], &words[1].to_be_bytes());
    }
}
