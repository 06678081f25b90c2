//! Helpers for partitioning a payload into chunk patterns.
//!
//! Primarily used by the test suite to exercise the same logical byte
//! array under many different chunk layouts, but public because fuzzers
//! and benchmarks want the same thing.

use alloc::vec::Vec;

use crate::{chain::ByteChain, chunk::Chunk};

/// Splits `payload` into chunks with the given byte lengths, in order.
///
/// Each entry in `splits` consumes at most that many of the remaining
/// bytes; any payload left after the last entry becomes one final chunk,
/// so the chunks always reassemble to exactly `payload`. Zero-length
/// entries produce zero-length chunks.
///
/// # Examples
///
/// ```
/// use bytechain::chunk_utils::chunks_of;
///
/// let chunks = chunks_of(&[0, 1, 2, 3, 4], &[2, 2]);
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].as_slice(), &[4]);
/// ```
#[must_use]
pub fn chunks_of(payload: &[u8], splits: &[usize]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut rest = payload;
    for &split in splits {
        if rest.is_empty() && split > 0 {
            break;
        }
        let take = split.min(rest.len());
        let (head, tail) = rest.split_at(take);
        chunks.push(Chunk::from(head));
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(Chunk::from(rest));
    }
    chunks
}

/// [`chunks_of`], assembled into a [`ByteChain`].
#[must_use]
pub fn chain_of(payload: &[u8], splits: &[usize]) -> ByteChain {
    ByteChain::from_chunks(chunks_of(payload, splits))
}
