//! Search-needle argument for [`ByteChain::index_of`](crate::ByteChain::index_of).

use crate::chunk::Chunk;

/// A substring-search needle: raw bytes or text.
///
/// Text needles are searched by their UTF-8 byte encoding. The `From`
/// impls let call sites pass `&str`, `&[u8]`, byte arrays or a [`Chunk`]
/// directly.
///
/// # Examples
///
/// ```
/// use bytechain::{ByteChain, Chunk};
///
/// let chain = ByteChain::from_chunks([Chunk::from("Hel"), Chunk::from("lo")]);
/// assert_eq!(chain.index_of("ello"), Some(1));
/// assert_eq!(chain.index_of(&b"He"[..]), Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needle<'a> {
    /// A raw byte-sequence needle.
    Bytes(&'a [u8]),
    /// A text needle, matched against its UTF-8 bytes.
    Text(&'a str),
}

impl Needle<'_> {
    /// The needle's byte representation.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Needle::Bytes(bytes) => bytes,
            Needle::Text(text) => text.as_bytes(),
        }
    }
}

impl<'a> From<&'a [u8]> for Needle<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Needle::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Needle<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Needle::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Needle<'a> {
    fn from(text: &'a str) -> Self {
        Needle::Text(text)
    }
}

impl<'a> From<&'a Chunk> for Needle<'a> {
    fn from(chunk: &'a Chunk) -> Self {
        Needle::Bytes(chunk.as_slice())
    }
}
