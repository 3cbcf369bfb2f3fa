//! SM3 engine error types

use thiserror::Error;

/// Usage errors reported by the streaming engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `update` or `finalize` called after the digest was produced
    #[error("hasher already finalized; call reset() before reuse")]
    Finalized,

    /// Total input would not fit the 64-bit bit-length field
    #[error("message too long: {len} bytes (max {max})")]
    MessageTooLong {
        /// Total length the rejected call would have reached
        len: u128,
        /// Maximum message length in bytes
        max: u64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
