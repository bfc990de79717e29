//! Placeholder flags derived from the message body.

use super::grammar::{is_marker, starts_with_marker};
use crate::config::Markers;
use crate::record::MessageRecord;

/// Sets `is_deleted_msg`, `is_emoji`, `is_picture` and `is_search`.
///
/// A null body sets none of them.
pub fn annotate(record: &mut MessageRecord, markers: &Markers) {
    let body = record.msg_str();
    let trimmed = body.trim();

    let is_deleted = is_marker(trimmed, &markers.deleted_placeholder);
    let is_emoji = is_marker(trimmed, &markers.emoji_placeholder);
    let is_picture = is_marker(trimmed, &markers.picture_placeholder);
    let is_search = starts_with_marker(body, &markers.search_prefix);

    record.is_deleted_msg = is_deleted;
    record.is_emoji = is_emoji;
    record.is_picture = is_picture;
    record.is_search = is_search;
}
