//! SM3 hash engine
//!
//! Word primitives, round functions, message expansion, and the
//! compression function are pure; [`Sm3`] owns all mutable state.

mod compress;
mod digest;
mod error;
mod hasher;
mod round;
mod schedule;
mod word;

#[cfg(feature = "debug-tools")]
pub use compress::{RoundTrace, compress_traced};
pub use compress::{State, compress};
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::Sm3;
pub use round::{INITIAL_STATE, ROUNDS, ff, gg, p0, p1, round_constant};
pub use schedule::{EXPANDED_WORDS, Schedule};
pub use word::{bytes_to_words_be, rotate_left, words_to_bytes_be};

/// Block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Words per block
pub const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Words in the chaining state
pub const STATE_WORDS: usize = 8;

/// Longest accepted message, in bytes (bit length must fit in 64 bits)
pub const MAX_MESSAGE_LEN: u64 = (1 << 61) - 1;
