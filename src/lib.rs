//! SM3 - Streaming implementation of the GB/T 32905-2016 cryptographic hash
//!
//! This library computes the 256-bit SM3 digest of arbitrary-length input,
//! either in one shot or incrementally from chunks of any size.
//!
//! # Quick Start
//!
//! ```rust
//! use sm3_hash::Sm3;
//!
//! // One shot
//! let digest = Sm3::digest(b"abc")?;
//!
//! // Streaming, in arbitrary chunks
//! let mut hasher = Sm3::new();
//! hasher.update(b"a")?.update(b"bc")?;
//! assert_eq!(hasher.finalize()?, digest);
//! # Ok::<(), sm3_hash::Error>(())
//! ```
//!
//! # Features
//!
//! - **Streaming** - 64-byte internal buffer, any chunking gives the same digest
//! - **Pure core** - [`compress`] and [`Schedule::expand`] are usable on their own
//! - **`serde`** - `Serialize`/`Deserialize` for [`Digest`]
//! - **`debug-tools`** - per-round register traces via `compress_traced`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod engine;

pub use engine::{
    BLOCK_SIZE, DIGEST_SIZE, Digest, Error, INITIAL_STATE, MAX_MESSAGE_LEN, Result, STATE_WORDS,
    Schedule, Sm3, State, compress,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
