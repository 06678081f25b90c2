//! An ordered chain of discontiguous byte chunks addressed as one logical
//! byte array, without eager concatenation.
//!
//! [`ByteChain`] owns a sequence of [`Chunk`]s and a running total length.
//! Appending and prepending move whole chunks; random access resolves a
//! logical index to its owning chunk in O(chunks); `slice`/`copy_into`
//! materialize a copy only of the bytes a request spans; `splice` removes
//! and replaces a logical byte range in one step, splitting boundary
//! chunks as needed; `index_of` searches across chunk boundaries; and
//! `to_text` decodes a range as UTF-8.
//!
//! # Examples
//!
//! ```
//! use bytechain::{ByteChain, Chunk};
//!
//! let mut chain = ByteChain::from_chunks(["Hel", "lo,", " how are ", "you", "?"]);
//! assert_eq!(chain.len(), 19);
//! assert_eq!(chain.index_of("how"), Some(7));
//! assert_eq!(chain.to_text(None, Some(7), Some(10)).unwrap(), "how");
//!
//! let removed = chain.splice(5, 9, [Chunk::from(":")]);
//! assert_eq!(removed.to_bytes().as_slice(), b", how are");
//! assert_eq!(chain.to_text(None, None, None).unwrap(), "Hello: you?");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chain;
mod chunk;
mod error;
mod needle;
mod range;

pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use chain::{ByteChain, ChunkPos};
pub use chunk::{Chunk, TryIntoChunk};
pub use error::Error;
pub use needle::Needle;
