//! The byte-chunk building block of a [`ByteChain`](crate::ByteChain).
//!
//! A [`Chunk`] is a fixed-length, contiguously addressable region of raw
//! bytes with exclusive ownership of its storage. Chunks are immutable by
//! convention once stored in a chain; the only in-place write path is
//! [`Chunk::set`], which the chain uses to service single-byte writes at a
//! resolved offset.

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    ops::{Deref, Range},
};

use bstr::BStr;

use crate::error::Error;

/// An owned, fixed-length, contiguous region of raw bytes.
///
/// Slicing a chunk always produces an independent copy: no two chunks ever
/// share backing storage, so writing through one can never be observed
/// through another.
///
/// # Examples
///
/// ```
/// use bytechain::Chunk;
///
/// let chunk = Chunk::from(&[1u8, 2, 3, 4][..]);
/// assert_eq!(chunk.len(), 4);
/// assert_eq!(chunk.slice(1, 3).as_slice(), &[2, 3]);
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Chunk {
    bytes: Box<[u8]>,
}

impl Chunk {
    /// Creates a chunk taking ownership of `bytes`.
    #[must_use]
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Creates an empty chunk without allocating.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of bytes in the chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the chunk holds zero bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the chunk's bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies the byte range `[begin, end)` into a new, independent chunk.
    ///
    /// `end` is clamped to the chunk length; a reversed or out-of-range
    /// `begin` yields an empty chunk. Mirrors `ArrayBuffer::slice` clamping.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytechain::Chunk;
    ///
    /// let chunk = Chunk::from(&[0u8, 1, 2, 3][..]);
    /// assert_eq!(chunk.slice(1, 3).as_slice(), &[1, 2]);
    /// assert_eq!(chunk.slice(2, 100).as_slice(), &[2, 3]);
    /// assert!(chunk.slice(3, 1).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> Self {
        let end = end.min(self.bytes.len());
        if begin >= end {
            return Self::empty();
        }
        Self::new(&self.bytes[begin..end])
    }

    /// Reads the byte at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds, like slice indexing.
    #[must_use]
    pub fn get(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// Writes `value` at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds, like slice indexing.
    pub fn set(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }

    /// Consumes the chunk and returns its backing storage.
    #[must_use]
    pub fn into_bytes(self) -> Box<[u8]> {
        self.bytes
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chunk").field(&BStr::new(&self.bytes)).finish()
    }
}

impl Deref for Chunk {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Box<[u8]>> for Chunk {
    fn from(bytes: Box<[u8]>) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Chunk {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Chunk {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(&bytes[..])
    }
}

impl<const N: usize> From<&[u8; N]> for Chunk {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(&bytes[..])
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Chunk {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.bytes)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Chunk {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(bytes))
    }
}

/// Fallible conversion into a [`Chunk`], used by the validating insertion
/// paths of [`ByteChain`](crate::ByteChain).
///
/// [`ByteChain::try_push`](crate::ByteChain::try_push) and
/// [`ByteChain::try_unshift`](crate::ByteChain::try_unshift) convert *all*
/// of their arguments through this trait before touching the chain, so a
/// failing item leaves the chain completely unmodified.
///
/// Most implementations are infallible: a `Chunk`, `Vec<u8>`, byte slice
/// or string is always a valid chunk. The `(&[u8], Range<usize>)` form
/// describes a sub-range of a backing slice and fails with
/// [`Error::InvalidChunk`] when the range does not fit.
pub trait TryIntoChunk {
    /// Converts `self` into a chunk, or reports why it is not one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunk`] when `self` does not describe a
    /// valid byte region.
    fn try_into_chunk(self) -> Result<Chunk, Error>;
}

impl TryIntoChunk for Chunk {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        Ok(self)
    }
}

impl TryIntoChunk for &Chunk {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        Ok(self.clone())
    }
}

impl TryIntoChunk for Vec<u8> {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        Ok(Chunk::from(self))
    }
}

impl TryIntoChunk for &[u8] {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        Ok(Chunk::from(self))
    }
}

impl TryIntoChunk for &str {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        Ok(Chunk::from(self))
    }
}

impl TryIntoChunk for (&[u8], Range<usize>) {
    fn try_into_chunk(self) -> Result<Chunk, Error> {
        let (backing, range) = self;
        if range.start > range.end || range.end > backing.len() {
            return Err(Error::InvalidChunk {
                start: range.start,
                end: range.end,
                len: backing.len(),
            });
        }
        Ok(Chunk::from(&backing[range]))
    }
}
