//! Message expansion: one 64-byte block into `W[0..68]` and `W'[0..64]`.

use super::round::{ROUNDS, p1};
use super::word::{bytes_to_words_be, rotate_left};
use super::{BLOCK_SIZE, BLOCK_WORDS};

/// Number of words in the expanded `W` schedule.
pub const EXPANDED_WORDS: usize = ROUNDS + 4;

/// Expanded schedule for a single block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    /// `W[0..68]`.
    pub w: [u32; EXPANDED_WORDS],
    /// `W'[j] = W[j] ^ W[j + 4]`.
    pub w_prime: [u32; ROUNDS],
}

impl Schedule {
    /// Expand `block`.
    #[must_use]
    pub fn expand(block: &[u8; BLOCK_SIZE]) -> Self {
        let mut w = [0u32; EXPANDED_WORDS];
        bytes_to_words_be(block, &mut w[..BLOCK_WORDS]);

        // Each term reads W[j-16], W[j-13], W[j-9], W[j-6], W[j-3].
        for j in BLOCK_WORDS..EXPANDED_WORDS {
            w[j] = p1(w[j - 16] ^ w[j - 9] ^ rotate_left(w[j - 3], 15))
                ^ rotate_left(w[j - 13], 7)
                ^ w[j - 6];
        }

        let mut w_prime = [0u32; ROUNDS];
        for (j, slot) in w_prime.iter_mut().enumerate() {
            *slot = w[j] ^ w[j + 4];
        }

        Self { w, w_prime }
    }
}
