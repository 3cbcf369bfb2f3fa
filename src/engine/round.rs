//! SM3 constants and round functions.
//!
//! Rounds `0..16` use the XOR form of FF/GG and constant `T0`; rounds
//! `16..64` use the majority/choice forms and `T1`.

use super::STATE_WORDS;
use super::word::rotate_left;

/// Number of compression rounds.
pub const ROUNDS: usize = 64;

/// First round of the second phase.
const PHASE_SPLIT: usize = 16;

/// Initial chaining value `IV`.
pub const INITIAL_STATE: [u32; STATE_WORDS] = [
    0x7380_166F,
    0x4914_B2B9,
    0x1724_42D7,
    0xDA8A_0600,
    0xA96F_30BC,
    0x1631_38AA,
    0xE38D_EE4D,
    0xB0FB_0E4E,
];

const T0: u32 = 0x79CC_4519;
const T1: u32 = 0x7A87_9D8A;

/// Round constant `T_j`.
#[inline(always)]
#[must_use]
pub fn round_constant(j: usize) -> u32 {
    debug_assert!(j < ROUNDS, "round index {j} out of range");
    if j < PHASE_SPLIT { T0 } else { T1 }
}

/// Boolean function `FF_j`.
#[inline(always)]
#[must_use]
pub fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    debug_assert!(j < ROUNDS, "round index {j} out of range");
    if j < PHASE_SPLIT {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

/// Boolean function `GG_j`.
#[inline(always)]
#[must_use]
pub fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    debug_assert!(j < ROUNDS, "round index {j} out of range");
    if j < PHASE_SPLIT {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

/// Permutation `P0`, applied to `TT2` in each round.
#[inline(always)]
#[must_use]
pub const fn p0(x: u32) -> u32 {
    x ^ rotate_left(x, 9) ^ rotate_left(x, 17)
}

/// Permutation `P1`, used by the message expansion.
#[inline(always)]
#[must_use]
pub const fn p1(x: u32) -> u32 {
    x ^ rotate_left(x, 15) ^ rotate_left(x, 23)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_switches_at_round_16() {
        assert_eq!(round_constant(0), 0x79CC_4519);
        assert_eq!(round_constant(15), 0x79CC_4519);
        assert_eq!(round_constant(16), 0x7A87_9D8A);
        assert_eq!(round_constant(63), 0x7A87_9D8A);
    }

    #[test]
    fn first_phase_is_parity() {
        let (x, y, z) = (0xF0F0_F0F0, 0xCCCC_CCCC, 0xAAAA_AAAA);
        for j in 0..16 {
            assert_eq!(ff(j, x, y, z), x ^ y ^ z);
            assert_eq!(gg(j, x, y, z), x ^ y ^ z);
        }
    }

    #[test]
    fn second_phase_majority_and_choice() {
        let (x, y, z) = (0xF0F0_F0F0, 0xCCCC_CCCC, 0xAAAA_AAAA);
        // Bitwise truth tables over the eight (x, y, z) combinations.
        assert_eq!(ff(16, x, y, z), 0xE8E8_E8E8);
        assert_eq!(gg(16, x, y, z), 0xCACA_CACA);
        assert_eq!(ff(63, x, y, z), ff(16, x, y, z));
        assert_eq!(gg(63, x, y, z), gg(16, x, y, z));
    }

    #[test]
    fn permutations() {
        assert_eq!(p0(0), 0);
        assert_eq!(p1(0), 0);
        assert_eq!(p0(1), 1 | (1 << 9) | (1 << 17));
        assert_eq!(p1(1), 1 | (1 << 15) | (1 << 23));
        // Rotations wrap: bit 31 moves to bits 8 and 16.
        assert_eq!(p0(0x8000_0000), 0x8000_0000 | (1 << 8) | (1 << 16));
    }
}
