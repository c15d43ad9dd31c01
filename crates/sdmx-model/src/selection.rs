//! Selection of a codelist summary by id.

use crate::codelist::CodelistSummary;

/// Find the first summary whose id matches, in sequence order.
///
/// Registry documents are not guaranteed to carry unique codelist ids (a
/// malformed source may repeat one, and sentinel ids collide by construction),
/// so selection never assumes uniqueness: the first match in document order
/// wins and later duplicates are ignored.
pub fn find_by_id<'a>(summaries: &'a [CodelistSummary], id: &str) -> Option<&'a CodelistSummary> {
    summaries.iter().find(|summary| summary.id == id)
}
