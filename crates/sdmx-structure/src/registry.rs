//! Parser for registry documents listing all codelists.

use sdmx_model::{
    CodelistSummary, UNKNOWN_AGENCY, UNKNOWN_ID, UNKNOWN_URL, UNKNOWN_VERSION, is_final_from_raw,
};

use crate::error::Result;
use crate::scan::scan_elements;

/// Parse a registry document into codelist summaries, in document order.
///
/// Every `structure:Codelist` element yields exactly one summary. Missing
/// attributes degrade to the sentinel constants in `sdmx-model`; only a
/// malformed document aborts the parse, and then no partial result is
/// returned.
pub fn parse_registry(bytes: &[u8]) -> Result<Vec<CodelistSummary>> {
    let summaries: Vec<CodelistSummary> = scan_elements(bytes, b"Codelist")?
        .into_iter()
        .map(|element| CodelistSummary {
            id: owned_or(element.attribute("id"), UNKNOWN_ID),
            agency_id: owned_or(element.attribute("agencyID"), UNKNOWN_AGENCY),
            version: owned_or(element.attribute("version"), UNKNOWN_VERSION),
            is_final: is_final_from_raw(element.attribute("isFinal")),
            structure_url: owned_or(element.attribute("structureURL"), UNKNOWN_URL),
            names: element.names,
        })
        .collect();

    tracing::debug!(count = summaries.len(), "parsed codelist registry");
    Ok(summaries)
}

fn owned_or(value: Option<&str>, sentinel: &str) -> String {
    value.unwrap_or(sentinel).to_string()
}
