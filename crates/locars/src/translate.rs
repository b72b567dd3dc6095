// Unicode index translation
// Byte offsets (matcher space) -> 1-based codepoint positions (user space).

use crate::error::{Error, LocateResult};

/// Byte offset of every codepoint start in `text`, plus a trailing
/// `text.len()` entry standing for the one-past-the-end position.
/// One linear scan; the result is strictly increasing.
pub fn codepoint_starts(text: &str) -> Vec<u32> {
    text.char_indices()
        .map(|(i, _)| i as u32)
        .chain(std::iter::once(text.len() as u32))
        .collect()
}

/// Convert a batch of byte offsets into 1-based codepoint positions,
/// in place.
///
/// `offsets` must be ascending and every offset must fall on a codepoint
/// boundary of the text `table` was built from (the full byte length is a
/// valid offset). The whole batch is served by one monotonic cursor pass
/// over `table`, never one scan per offset.
///
/// Offsets that mark the start of a codepoint and offsets that mark the
/// first byte after a match translate identically here: both are boundary
/// positions, and the 1-based index of the boundary is exactly "the
/// position of the codepoint starting at this byte".
///
/// A non-boundary offset is a component-contract violation and yields
/// [`Error::MisalignedOffset`].
pub fn byte_to_codepoint_batch(table: &[u32], offsets: &mut [u32]) -> LocateResult<()> {
    let mut cursor = 0usize;
    for off in offsets.iter_mut() {
        while cursor < table.len() && table[cursor] < *off {
            cursor += 1;
        }
        if cursor >= table.len() || table[cursor] != *off {
            return Err(Error::MisalignedOffset { byte: *off as usize });
        }
        *off = cursor as u32 + 1; // 0-based boundary index -> 1-based position
    }
    Ok(())
}
