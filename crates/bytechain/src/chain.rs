//! The chain itself: an ordered collection of chunks addressed as one
//! logical byte array.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use bstr::ByteSlice;

use crate::{
    chunk::{Chunk, TryIntoChunk},
    error::Error,
    needle::Needle,
    range::{normalize, resolve_offset},
};

/// The result of resolving a logical index to its owning chunk.
///
/// Computed on demand by [`ByteChain::pos`]; nothing stores one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPos {
    /// Index of the owning chunk within the chain.
    pub chunk: usize,
    /// Byte offset within that chunk.
    pub offset: usize,
}

/// An ordered chain of byte [`Chunk`]s presented as a single logical byte
/// array.
///
/// The chain never concatenates its chunks eagerly. Appending and
/// prepending move whole chunks; random access resolves a logical index to
/// an owning chunk in O(chunks); range extraction copies only the bytes a
/// request actually spans.
///
/// The chain is single-threaded and synchronous: every operation runs to
/// completion before returning, and callers serialize mutation externally
/// when sharing a chain across threads.
///
/// # Examples
///
/// ```
/// use bytechain::{ByteChain, Chunk};
///
/// let mut chain = ByteChain::new();
/// chain.push([Chunk::from(&[0u8, 1, 2][..]), Chunk::from(&[3u8, 4][..])]);
/// assert_eq!(chain.len(), 5);
/// assert_eq!(chain.to_bytes().as_slice(), &[0, 1, 2, 3, 4]);
/// assert_eq!(chain.slice(Some(1), Some(4)).as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteChain {
    chunks: Vec<Chunk>,
    len: usize,
}

impl ByteChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
        }
    }

    /// Creates a chain from an initial ordered list of chunks.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytechain::{ByteChain, Chunk};
    ///
    /// let chain = ByteChain::from_chunks([Chunk::from("Hel"), Chunk::from("lo")]);
    /// assert_eq!(chain.len(), 5);
    /// ```
    #[must_use]
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Chunk>,
    {
        let mut chain = Self::new();
        chain.push(chunks);
        chain
    }

    /// Total number of logical bytes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chain holds zero logical bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The ordered chunk list, exposed read-only for introspection.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Appends chunks to the end of the chain and returns the new total
    /// length.
    pub fn push<I>(&mut self, chunks: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Chunk>,
    {
        for chunk in chunks {
            let chunk = chunk.into();
            self.len += chunk.len();
            self.chunks.push(chunk);
        }
        self.len
    }

    /// Prepends chunks to the front of the chain and returns the new total
    /// length.
    ///
    /// Each item is inserted at the current front in turn, so the *last*
    /// item ends up closest to the start:
    ///
    /// ```
    /// use bytechain::{ByteChain, Chunk};
    ///
    /// let mut chain = ByteChain::from_chunks([Chunk::from(&[0u8][..])]);
    /// chain.unshift([Chunk::from(&[99u8][..]), Chunk::from(&[100u8][..])]);
    /// assert_eq!(chain.to_bytes().as_slice(), &[100, 99, 0]);
    /// ```
    pub fn unshift<I>(&mut self, chunks: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Chunk>,
    {
        for chunk in chunks {
            let chunk = chunk.into();
            self.len += chunk.len();
            self.chunks.insert(0, chunk);
        }
        self.len
    }

    /// Validating [`push`](Self::push): converts every item through
    /// [`TryIntoChunk`] before any mutation, so a failing item leaves the
    /// chain completely unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunk`] if any item is not a valid chunk;
    /// the chain is unchanged in that case.
    pub fn try_push<I>(&mut self, items: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: TryIntoChunk,
    {
        let staged = Self::stage(items)?;
        Ok(self.push(staged))
    }

    /// Validating [`unshift`](Self::unshift), with the same all-or-nothing
    /// contract as [`try_push`](Self::try_push).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunk`] if any item is not a valid chunk;
    /// the chain is unchanged in that case.
    pub fn try_unshift<I>(&mut self, items: I) -> Result<usize, Error>
    where
        I: IntoIterator,
        I::Item: TryIntoChunk,
    {
        let staged = Self::stage(items)?;
        Ok(self.unshift(staged))
    }

    fn stage<I>(items: I) -> Result<Vec<Chunk>, Error>
    where
        I: IntoIterator,
        I::Item: TryIntoChunk,
    {
        items
            .into_iter()
            .map(TryIntoChunk::try_into_chunk)
            .collect()
    }

    /// Resolves logical index `index` to its owning chunk and offset.
    ///
    /// This is the primitive every range and search operation builds on:
    /// a forward walk over the chunk list, O(chunks).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= len`.
    pub fn pos(&self, index: usize) -> Result<ChunkPos, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.pos_unchecked(index))
    }

    /// Index resolution with the bounds check already done.
    ///
    /// Callers must guarantee `index < self.len`; the chain's length
    /// invariant then guarantees the walk lands inside some chunk.
    fn pos_unchecked(&self, index: usize) -> ChunkPos {
        debug_assert!(index < self.len);
        let mut remaining = index;
        for (chunk, owned) in self.chunks.iter().enumerate() {
            if remaining < owned.len() {
                return ChunkPos {
                    chunk,
                    offset: remaining,
                };
            }
            remaining -= owned.len();
        }
        unreachable!("length invariant violated: index {index} < len {} but no owning chunk", self.len)
    }

    /// Reads the logical byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<u8, Error> {
        let pos = self.pos(index)?;
        Ok(self.chunks[pos.chunk].get(pos.offset))
    }

    /// Writes `value` at logical index `index`, in place, into the owning
    /// chunk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when `index >= len`.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), Error> {
        let pos = self.pos(index)?;
        self.chunks[pos.chunk].set(pos.offset, value);
        Ok(())
    }

    /// Materializes the logical byte range `[begin, end)` as one new,
    /// independent chunk.
    ///
    /// Bounds follow JS slice conventions: `None` defaults to the full
    /// sequence, negative values count back from the end, and everything
    /// clamps into range. An empty effective range yields an empty chunk,
    /// never an error. The result never aliases internal storage, so later
    /// [`set`](Self::set) calls cannot alter a previously returned slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytechain::{ByteChain, Chunk};
    ///
    /// let chain = ByteChain::from_chunks([
    ///     Chunk::from(&[0u8, 1, 2][..]),
    ///     Chunk::from(&[3u8, 4, 5][..]),
    ///     Chunk::from(&[6u8, 7, 8][..]),
    /// ]);
    /// assert_eq!(chain.slice(Some(2), Some(5)).as_slice(), &[2, 3, 4]);
    /// assert_eq!(chain.slice(Some(-4), Some(-2)).as_slice(), &[5, 6]);
    /// assert!(chain.slice(Some(2), Some(2)).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, begin: Option<isize>, end: Option<isize>) -> Chunk {
        let Some((begin, end)) = normalize(begin, end, self.len) else {
            return Chunk::empty();
        };
        let mut out = Vec::with_capacity(end - begin);
        let start = self.pos_unchecked(begin);
        let mut chunk = start.chunk;
        let mut offset = start.offset;
        let mut needed = end - begin;
        while needed > 0 {
            let bytes = &self.chunks[chunk].as_slice()[offset..];
            let take = bytes.len().min(needed);
            out.extend_from_slice(&bytes[..take]);
            needed -= take;
            chunk += 1;
            offset = 0;
        }
        Chunk::from(out)
    }

    /// Copies the normalized range `[begin, end)` into `dest` starting at
    /// `dest_offset`, truncating to the destination's free capacity.
    ///
    /// Returns the number of bytes written; an empty effective range (or a
    /// full destination) writes nothing and returns 0.
    pub fn copy_into(
        &self,
        dest: &mut [u8],
        dest_offset: usize,
        begin: Option<isize>,
        end: Option<isize>,
    ) -> usize {
        let Some((begin, end)) = normalize(begin, end, self.len) else {
            return 0;
        };
        if dest_offset >= dest.len() {
            return 0;
        }
        let total = (end - begin).min(dest.len() - dest_offset);
        let start = self.pos_unchecked(begin);
        let mut chunk = start.chunk;
        let mut offset = start.offset;
        let mut written = 0;
        while written < total {
            let bytes = &self.chunks[chunk].as_slice()[offset..];
            let take = bytes.len().min(total - written);
            dest[dest_offset + written..dest_offset + written + take]
                .copy_from_slice(&bytes[..take]);
            written += take;
            chunk += 1;
            offset = 0;
        }
        total
    }

    /// Materializes the whole chain as one contiguous chunk. Equivalent to
    /// `slice(None, None)`.
    #[must_use]
    pub fn to_bytes(&self) -> Chunk {
        self.slice(None, None)
    }

    /// Removes `delete_count` logical bytes starting at `offset` and
    /// inserts `insert` in their place, in one step.
    ///
    /// A negative `offset` counts back from the end; the resolved offset
    /// clamps into `[0, len]` and `delete_count` clamps to the bytes
    /// actually available. Chunks whose interior a boundary falls into are
    /// split into two independent pieces first; whole removed chunks are
    /// then moved, not recopied, into the returned chain. `delete_count`
    /// of 0 with nothing to insert leaves the chain untouched, chunk
    /// layout included.
    ///
    /// Returns a new chain holding exactly the removed bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytechain::{ByteChain, Chunk};
    ///
    /// let mut chain = ByteChain::from_chunks([Chunk::from("Hello, world")]);
    /// let removed = chain.splice(5, 7, [Chunk::from("!")]);
    /// assert_eq!(chain.to_bytes().as_slice(), b"Hello!");
    /// assert_eq!(removed.to_bytes().as_slice(), b", world");
    /// ```
    pub fn splice<I>(&mut self, offset: isize, delete_count: usize, insert: I) -> ByteChain
    where
        I: IntoIterator,
        I::Item: Into<Chunk>,
    {
        let start = resolve_offset(offset, self.len);
        let removed_len = delete_count.min(self.len - start);
        let insert: Vec<Chunk> = insert.into_iter().map(Into::into).collect();
        if removed_len == 0 && insert.is_empty() {
            return ByteChain::new();
        }

        let inserted_len: usize = insert.iter().map(Chunk::len).sum();
        let start_chunk = self.split_at_logical(start);
        let end_chunk = if removed_len == 0 {
            start_chunk
        } else {
            self.split_at_logical(start + removed_len)
        };

        let mut removed = ByteChain::new();
        removed.push(self.chunks.splice(start_chunk..end_chunk, insert));
        self.len = self.len - removed_len + inserted_len;
        debug_assert_eq!(removed.len(), removed_len);
        removed
    }

    /// Ensures a chunk boundary exists at logical index `index` and
    /// returns the index of the chunk that begins there (`chunks.len()`
    /// when `index == len`).
    ///
    /// When `index` falls strictly inside a chunk, that chunk is replaced
    /// by two independent sub-range copies of itself.
    fn split_at_logical(&mut self, index: usize) -> usize {
        debug_assert!(index <= self.len);
        let mut remaining = index;
        for i in 0..self.chunks.len() {
            if remaining == 0 {
                return i;
            }
            let chunk_len = self.chunks[i].len();
            if remaining < chunk_len {
                let head = self.chunks[i].slice(0, remaining);
                let tail = self.chunks[i].slice(remaining, chunk_len);
                self.chunks[i] = head;
                self.chunks.insert(i + 1, tail);
                return i + 1;
            }
            remaining -= chunk_len;
        }
        self.chunks.len()
    }

    /// Finds the first occurrence of `needle` in the chain. Equivalent to
    /// [`index_of_from`](Self::index_of_from) with a start of 0.
    #[must_use]
    pub fn index_of<'n>(&self, needle: impl Into<Needle<'n>>) -> Option<usize> {
        self.index_of_from(needle, 0)
    }

    /// Finds the first occurrence of `needle` at or after logical index
    /// `from`, scanning linearly across chunk boundaries.
    ///
    /// An empty needle matches at index 0 unconditionally; an empty chain
    /// matches nothing. The scan keeps a running match counter and resets
    /// it fully on a mismatch without re-examining the mismatching byte,
    /// so a needle that overlaps its own prefix can be missed after a
    /// false start. Longstanding behavior, kept for compatibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytechain::{ByteChain, Chunk};
    ///
    /// let chain = ByteChain::from_chunks(["Hel", "lo,", " how are ", "you", "?"]);
    /// assert_eq!(chain.index_of("Hello"), Some(0));
    /// assert_eq!(chain.index_of_from("Hello", 1), None);
    /// assert_eq!(chain.index_of("ello"), Some(1));
    /// assert_eq!(chain.index_of_from("e", 2), Some(13));
    /// ```
    #[must_use]
    pub fn index_of_from<'n>(&self, needle: impl Into<Needle<'n>>, from: usize) -> Option<usize> {
        let needle = needle.into();
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return Some(0);
        }
        if self.len == 0 || from >= self.len {
            return None;
        }

        let start = self.pos_unchecked(from);
        let mut chunk = start.chunk;
        let mut offset = start.offset;
        let mut index = from;
        let mut matched = 0;
        while chunk < self.chunks.len() {
            let bytes = self.chunks[chunk].as_slice();
            while offset < bytes.len() {
                if bytes[offset] == needle[matched] {
                    matched += 1;
                    if matched == needle.len() {
                        return Some(index + 1 - needle.len());
                    }
                } else {
                    matched = 0;
                }
                offset += 1;
                index += 1;
            }
            chunk += 1;
            offset = 0;
        }
        None
    }

    /// Decodes the normalized range `[begin, end)` as text.
    ///
    /// Only UTF-8 is supported (`None`, `"utf8"` or `"utf-8"`, ASCII
    /// case-insensitive); invalid sequences decode lossily to U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedEncoding`] for any other encoding name.
    pub fn to_text(
        &self,
        encoding: Option<&str>,
        begin: Option<isize>,
        end: Option<isize>,
    ) -> Result<String, Error> {
        match encoding {
            None => {}
            Some(name)
                if name.eq_ignore_ascii_case("utf8") || name.eq_ignore_ascii_case("utf-8") => {}
            Some(other) => return Err(Error::UnsupportedEncoding(other.to_string())),
        }
        Ok(self.slice(begin, end).as_slice().to_str_lossy().into_owned())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteChain {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.chunks)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ByteChain {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let chunks = <Vec<Chunk> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_chunks(chunks))
    }
}

impl FromIterator<Chunk> for ByteChain {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self::from_chunks(iter)
    }
}

impl Extend<Chunk> for ByteChain {
    fn extend<I: IntoIterator<Item = Chunk>>(&mut self, iter: I) {
        self.push(iter);
    }
}
