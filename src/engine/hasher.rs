//! Streaming SM3 engine: block buffering, padding, and finalization.

use bytes::Buf;
use tracing::{debug, instrument, trace};

use super::compress::{State, compress};
use super::digest::Digest;
use super::error::{Error, Result};
use super::round::INITIAL_STATE;
use super::{BLOCK_SIZE, MAX_MESSAGE_LEN};

/// Bytes reserved at the end of the final block for the bit length.
const LENGTH_FIELD: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Accepting,
    Finalized,
}

/// Incremental SM3 hasher.
///
/// Bytes may be fed in chunks of any size; the digest is identical to
/// hashing the concatenation in one call. After [`Sm3::finalize`] the
/// hasher rejects further input until [`Sm3::reset`] is called.
///
/// Finalizing a hasher that never saw an `update` is valid and yields the
/// digest of the empty message.
#[derive(Clone, Debug)]
pub struct Sm3 {
    state: State,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    len: u64,
    blocks: u64,
    phase: Phase,
}

impl Sm3 {
    /// Create a hasher in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            len: 0,
            blocks: 0,
            phase: Phase::Accepting,
        }
    }

    /// Hash `data` in one shot.
    pub fn digest(data: &[u8]) -> Result<Digest> {
        Self::new().finalize_with(data)
    }

    /// Absorb message bytes.
    ///
    /// Rejected calls leave the hasher unchanged.
    #[instrument(level = "trace", skip(self, data), fields(len = data.len()))]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.reserve(data.len())?;
        self.absorb(data);
        Ok(self)
    }

    /// Absorb every remaining chunk of `buf`, in order.
    #[instrument(level = "trace", skip(self, buf), fields(len = buf.remaining()))]
    pub fn update_buf<B: Buf>(&mut self, mut buf: B) -> Result<&mut Self> {
        self.reserve(buf.remaining())?;
        while buf.has_remaining() {
            let chunk = buf.chunk();
            let take = chunk.len();
            self.absorb(chunk);
            buf.advance(take);
        }
        Ok(self)
    }

    /// Pad, compress the final block(s), and return the digest.
    #[instrument(level = "trace", skip(self))]
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_accepting()?;

        let bit_len = self.len * 8;
        let pad_len = padding_len(self.buffer_len);
        let mut padding = [0u8; 2 * BLOCK_SIZE];
        padding[0] = 0x80;
        padding[pad_len - LENGTH_FIELD..pad_len].copy_from_slice(&bit_len.to_be_bytes());
        self.absorb(&padding[..pad_len]);
        debug_assert_eq!(self.buffer_len, 0, "padding must end on a block boundary");

        self.phase = Phase::Finalized;
        debug!(bytes = self.len, blocks = self.blocks, "sm3 finalized");
        Ok(Digest::from_state(&self.state))
    }

    /// Absorb `data`, then finalize.
    pub fn finalize_with(&mut self, data: &[u8]) -> Result<Digest> {
        self.update(data)?;
        self.finalize()
    }

    /// Return to the initial state, discarding buffered input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the digest has been produced.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Total message bytes absorbed since construction or reset.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether no message bytes have been absorbed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current chaining words. Buffered bytes are not yet reflected.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    fn ensure_accepting(&self) -> Result<()> {
        if self.phase == Phase::Finalized {
            debug!("rejecting call on finalized sm3 hasher");
            return Err(Error::Finalized);
        }
        Ok(())
    }

    /// Check state and account for `additional` message bytes.
    fn reserve(&mut self, additional: usize) -> Result<()> {
        self.ensure_accepting()?;
        let total = u128::from(self.len) + additional as u128;
        match u64::try_from(total) {
            Ok(total) if total <= MAX_MESSAGE_LEN => {
                self.len = total;
                Ok(())
            }
            _ => {
                debug!(len = %total, max = MAX_MESSAGE_LEN, "sm3 message too long");
                Err(Error::MessageTooLong {
                    len: total,
                    max: MAX_MESSAGE_LEN,
                })
            }
        }
    }

    fn absorb(&mut self, data: &[u8]) {
        let mut remaining = data;
        while !remaining.is_empty() {
            let space = BLOCK_SIZE - self.buffer_len;
            let take = space.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            remaining = tail;

            if self.buffer_len == BLOCK_SIZE {
                self.state = compress(&self.state, &self.buffer);
                self.buffer_len = 0;
                self.blocks += 1;
                trace!(blocks = self.blocks, "compressed block");
            }
        }
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Padding bytes needed after `buffered` message bytes: `0x80`, zeros up to
/// 56 mod 64, then the 8-byte length. Spills into a second block when fewer
/// than 9 bytes remain.
fn padding_len(buffered: usize) -> usize {
    let zeros = (BLOCK_SIZE - LENGTH_FIELD - 1 + BLOCK_SIZE - buffered) % BLOCK_SIZE;
    1 + zeros + LENGTH_FIELD
}
