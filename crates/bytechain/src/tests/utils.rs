use alloc::vec::Vec;

/// The chunk layouts from the round-trip test matrix: six ways to split
/// the ten-byte payload `[0..9]`.
pub(crate) const TEN_BYTE_SPLITS: [&[usize]; 6] = [
    &[4, 2, 3, 1],
    &[2, 2, 2, 2, 2],
    &[1, 6, 3, 1],
    &[9, 2],
    &[10],
    &[5, 5],
];

pub(crate) fn ten_bytes() -> Vec<u8> {
    (0..10).collect()
}

/// Reference splice on a plain byte vector: removes `[offset, offset +
/// delete)` (clamped) and inserts `insert` in its place, returning the
/// removed bytes.
pub(crate) fn model_splice(
    bytes: &mut Vec<u8>,
    offset: usize,
    delete: usize,
    insert: &[u8],
) -> Vec<u8> {
    let offset = offset.min(bytes.len());
    let end = (offset + delete).min(bytes.len());
    bytes
        .splice(offset..end, insert.iter().copied())
        .collect()
}
