//! Fixed-size digest output.

use super::DIGEST_SIZE;
use super::compress::State;
use super::word::words_to_bytes_be;

/// 256-bit SM3 digest: the final chaining words, big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Construct from a fixed-size array.
    #[must_use]
    pub const fn from_array(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub(crate) fn from_state(state: &State) -> Self {
        let mut out = [0u8; DIGEST_SIZE];
        words_to_bytes_be(state, &mut out);
        Self(out)
    }

    /// Borrow as bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consume into the raw array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl PartialEq<[u8; DIGEST_SIZE]> for Digest {
    fn eq(&self, other: &[u8; DIGEST_SIZE]) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_state_most_significant_byte_first() {
        let state = [
            0x0001_0203,
            0x0405_0607,
            0x0809_0A0B,
            0x0C0D_0E0F,
            0x1011_1213,
            0x1415_1617,
            0x1819_1A1B,
            0x1C1D_1E1F,
        ];
        let digest = Digest::from_state(&state);
        let expected: [u8; DIGEST_SIZE] = core::array::from_fn(|i| i as u8);
        assert_eq!(digest, expected);
        assert_eq!(digest.as_ref().len(), DIGEST_SIZE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let digest = Digest::from_array([0xAB; DIGEST_SIZE]);
        let json = serde_json::to_string(&digest).unwrap();
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
