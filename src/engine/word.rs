//! 32-bit word primitives shared by the schedule and compression rounds.

/// Cyclic left rotation.
///
/// The shift is taken modulo 32, so `rotate_left(x, 32) == x`. Every call
/// site inside the engine passes a value in `0..32`.
#[inline(always)]
#[must_use]
pub const fn rotate_left(x: u32, bits: u32) -> u32 {
    x.rotate_left(bits & 31)
}

/// Serialize words most-significant byte first.
///
/// `out` must be exactly `4 * words.len()` bytes long.
pub fn words_to_bytes_be(words: &[u32], out: &mut [u8]) {
    assert_eq!(
        out.len(),
        words.len() * 4,
        "output must hold exactly four bytes per word"
    );
    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Parse big-endian words from `bytes` into `out`.
///
/// `bytes.len()` must be a multiple of four and equal `4 * out.len()`.
/// Violations indicate an internal bug and panic.
pub fn bytes_to_words_be(bytes: &[u8], out: &mut [u32]) {
    assert!(
        bytes.len() % 4 == 0,
        "word conversion requires a multiple of 4 bytes, got {}",
        bytes.len()
    );
    assert_eq!(bytes.len(), out.len() * 4, "word buffer size mismatch");
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_high_bits() {
        assert_eq!(rotate_left(0x8000_0001, 1), 0x0000_0003);
        assert_eq!(rotate_left(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotate_left(0x1234_5678, 8), 0x3456_7812);
        assert_eq!(rotate_left(0xF000_0000, 31), 0x7800_0000);
    }

    #[test]
    fn rotation_masks_out_of_range_shift() {
        assert_eq!(rotate_left(0xDEAD_BEEF, 32), 0xDEAD_BEEF);
        assert_eq!(rotate_left(0xDEAD_BEEF, 36), rotate_left(0xDEAD_BEEF, 4));
    }

    #[test]
    fn big_endian_layout() {
        let mut words = [0u32; 2];
        bytes_to_words_be(&[0x01, 0x02, 0x03, 0x04, 0xAA, 0xBB, 0xCC, 0xDD], &mut words);
        assert_eq!(words, [0x0102_0304, 0xAABB_CCDD]);

        let mut bytes = [0u8; 8];
        words_to_bytes_be(&words, &mut bytes);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn rejects_partial_word() {
        let mut words = [0u32; 1];
        bytes_to_words_be(&[1, 2, 3], &mut words);
    }
}
