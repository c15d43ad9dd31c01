//! Parser for single-codelist detail documents.

use sdmx_model::{CodeRecord, UNKNOWN_CODE};

use crate::error::Result;
use crate::scan::scan_elements;

/// Parse a codelist detail document into code records, in document order.
///
/// The input is expected to be the raw bytes obtained by dereferencing a
/// [`sdmx_model::CodelistSummary::structure_url`]; fetching is the caller's
/// job. Every `structure:Code` element yields exactly one record, with the
/// same sentinel and malformed-document contract as
/// [`crate::registry::parse_registry`].
pub fn parse_codelist(bytes: &[u8]) -> Result<Vec<CodeRecord>> {
    let records: Vec<CodeRecord> = scan_elements(bytes, b"Code")?
        .into_iter()
        .map(|element| CodeRecord {
            id: element.attribute("id").unwrap_or(UNKNOWN_CODE).to_string(),
            names: element.names,
        })
        .collect();

    tracing::debug!(count = records.len(), "parsed codelist detail");
    Ok(records)
}
