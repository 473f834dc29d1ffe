//! Append-safe insertion offsets.
//!
//! Every body ends with a mandatory paragraph terminator owned by the
//! service; inserting at the raw end offset would land content after it and
//! corrupt the body. The append offset is therefore one before the last
//! element's end offset, floored at 1.

use crate::model::Body;

/// Append-safe insertion offset at the end of a body.
///
/// 1 for an empty body; otherwise the last structural element's end offset
/// minus one.
pub fn append_offset(body: &Body) -> i64 {
    body.content
        .last()
        .and_then(|element| element.end_index)
        .map_or(1, |end| (end - 1).max(1))
}

/// Payload for appending `text` at `offset`.
///
/// Past offset 1 the body already has content, so non-empty appended text
/// gets a leading newline to start on its own paragraph.
pub fn append_payload(text: &str, offset: i64) -> String {
    if offset > 1 && !text.is_empty() {
        format!("\n{text}")
    } else {
        text.to_string()
    }
}
