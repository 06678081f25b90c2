//! Logical-range normalization shared by `slice`, `copy_into` and
//! `to_text`.
//!
//! Raw bounds follow JS-style slice conventions: omitted bounds default to
//! the full sequence, negative bounds count back from the end, and
//! everything is clamped into `[0, len]`. An empty effective range is a
//! value (`None`), never an error.

/// Resolves one raw bound against `len`: negative values count back from
/// the end, floored at 0.
fn resolve(raw: isize, len: usize) -> usize {
    if raw < 0 {
        len.saturating_sub(raw.unsigned_abs())
    } else {
        raw.unsigned_abs()
    }
}

/// Normalizes `[begin, end)` against a sequence of `len` bytes.
///
/// Returns `None` when the effective range is empty, otherwise
/// `Some((begin, end))` with `begin < end <= len`.
pub(crate) fn normalize(
    begin: Option<isize>,
    end: Option<isize>,
    len: usize,
) -> Option<(usize, usize)> {
    let begin = begin.map_or(0, |raw| resolve(raw, len));
    let end = end.map_or(len, |raw| resolve(raw, len)).min(len);
    if len == 0 || begin >= len || begin >= end {
        return None;
    }
    Some((begin, end))
}

/// Resolves a splice offset: negative counts back from the end, then the
/// result is clamped into `[0, len]` (one past the last byte is valid).
pub(crate) fn resolve_offset(raw: isize, len: usize) -> usize {
    resolve(raw, len).min(len)
}
