//! Error type shared by every fallible chain operation.

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by [`ByteChain`](crate::ByteChain) operations.
///
/// Every failure is synchronous and leaves the chain unmodified; there is
/// no partial-failure state. Empty normalized ranges (for example
/// `slice(2, 2)`) are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument expected to be a byte chunk does not describe a valid
    /// byte region. Raised before any mutation takes effect.
    #[error("tried to insert a non-chunk: range {start}..{end} does not fit a backing slice of length {len}")]
    InvalidChunk {
        /// Start of the offending sub-range.
        start: usize,
        /// End of the offending sub-range.
        end: usize,
        /// Length of the backing slice the range was resolved against.
        len: usize,
    },

    /// A logical index passed to `pos`/`get`/`set` lies outside `[0, len)`.
    #[error("index {index} out of bounds for chain of length {len}")]
    OutOfBounds {
        /// The requested logical index.
        index: usize,
        /// The chain length at the time of the call.
        len: usize,
    },

    /// `to_text` was asked for an encoding other than UTF-8.
    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),
}
