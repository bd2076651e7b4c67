//! Fixed-size digest value and its hex forms.

use std::fmt;
use std::str::FromStr;

use super::codec::word_from_bytes;
use super::error::{Error, Result};
use super::{DIGEST_SIZE, STATE_WORDS};

const HEX_DIGITS: usize = DIGEST_SIZE * 2;

/// 32-byte SHA-256 digest.
///
/// `Display` renders the grouped form, eight space-separated words
/// (`e3b0c442 98fc1c14 ...`); `{:x}` renders 64 contiguous hex digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wrap raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Unwrap into the digest bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Digest as eight big-endian words, word 0 first.
    #[must_use]
    pub fn words(&self) -> [u32; STATE_WORDS] {
        let mut words = [0u32; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = word_from_bytes(chunk[0], chunk[1], chunk[2], chunk[3]);
        }
        words
    }

    /// Contiguous lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Parse 64 hex digits, grouped or not. ASCII whitespace is skipped.
    pub fn from_hex(input: &str) -> Result<Self> {
        let mut out = [0u8; DIGEST_SIZE];
        let mut digits = 0usize;

        for (position, ch) in input.chars().enumerate() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let nibble = ch
                .to_digit(16)
                .ok_or(Error::InvalidHexDigit { position, found: ch })?;
            if digits < HEX_DIGITS {
                let byte = &mut out[digits / 2];
                *byte = (*byte << 4) | nibble as u8;
            }
            digits += 1;
        }

        if digits != HEX_DIGITS {
            return Err(Error::InvalidHexLength { len: digits });
        }
        Ok(Self(out))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, word) in self.words().iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let array: [u8; DIGEST_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: DIGEST_SIZE,
            got: bytes.len(),
        })?;
        Ok(Self(array))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
