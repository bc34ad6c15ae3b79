//! Sequential application of incremental edits.
//!
//! Each edit's coordinates refer to the text produced by the edit before
//! it, so edits are applied strictly in arrival order.

use crate::domain::EditOperation;
use crate::text::position::position_to_utf16_offset;
use ropey::Rope;

/// Apply `changes` in order and return the resulting text.
///
/// An empty change list returns the input unchanged.
pub fn apply_changes(text: &Rope, changes: &[EditOperation]) -> Rope {
    changes
        .iter()
        .fold(text.clone(), |text, change| apply_change(text, change))
}

/// Apply a single change.
///
/// - no range, no length: the change text becomes the whole document
/// - range only: replace the range
/// - range and length: replace `range_length` code units from the range start
/// - length only: no anchor, so nothing happens
pub fn apply_change(text: Rope, change: &EditOperation) -> Rope {
    match (change.range, change.range_length) {
        (None, None) => Rope::from_str(&change.text),
        (None, Some(length)) => {
            log::debug!(
                target: "vfsync::edits",
                "Ignoring change with length {} but no range",
                length
            );
            text
        }
        (Some(range), None) => {
            let start = position_to_utf16_offset(&text, range.start);
            let end = position_to_utf16_offset(&text, range.end);
            splice(text, start, end.saturating_sub(start), &change.text)
        }
        (Some(range), Some(length)) => {
            let start = position_to_utf16_offset(&text, range.start);
            splice(text, start, length as usize, &change.text)
        }
    }
}

/// Replace `len` UTF-16 code units starting at `start` with `new_text`.
///
/// Offsets beyond the end of the text are clamped to the end.
pub fn splice(mut text: Rope, start: usize, len: usize, new_text: &str) -> Rope {
    let total = text.len_utf16_cu();
    let start = start.min(total);
    let end = start.saturating_add(len).min(total);

    let start_char = text.utf16_cu_to_char(start);
    let end_char = text.utf16_cu_to_char(end);

    let mut remainder = text.split_off(start_char);
    let suffix = remainder.split_off(end_char - start_char);

    text.append(Rope::from_str(new_text));
    text.append(suffix);
    text
}
