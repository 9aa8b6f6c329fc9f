//! Order sequence numbers.
//!
//! There is no stored counter. The next number is derived from the receipt
//! file names already on disk, so allocation depends only on the set of
//! orders that exist.

use std::collections::BTreeSet;

/// The sequence number every order history starts at.
pub const FIRST_SEQUENCE: u64 = 1;

/// Picks the sequence number for the next order.
///
/// One more than the highest existing number when [`FIRST_SEQUENCE`] is
/// present, otherwise [`FIRST_SEQUENCE`]. Gaps are never filled: `{1, 3, 4}`
/// yields `5`. Returns `None` on overflow.
pub fn next_sequence(existing: &BTreeSet<u64>) -> Option<u64> {
    if !existing.contains(&FIRST_SEQUENCE) {
        return Some(FIRST_SEQUENCE);
    }
    existing.last().and_then(|max| max.checked_add(1))
}

/// Extracts the sequence number from a receipt file name.
///
/// The name is `first_last_sequence.txt`; the third `_`-separated segment is
/// the number. Hidden files and names of any other shape yield `None`.
pub fn parse_sequence(file_name: &str) -> Option<u64> {
    if file_name.starts_with('.') {
        return None;
    }
    let stem = file_name.strip_suffix(".txt").unwrap_or(file_name);
    stem.split('_').nth(2)?.parse().ok()
}
