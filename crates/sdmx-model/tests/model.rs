#![allow(missing_docs)]

use sdmx_model::{CodeRecord, CodelistSummary, LocalizedNames, find_by_id, is_final_from_raw};

#[test]
fn code_record_json_shape() {
    let record = CodeRecord {
        id: "F".to_string(),
        names: [("en", "Female"), ("fr", "Femme")].into_iter().collect(),
    };
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(
        json,
        serde_json::json!({
            "id": "F",
            "names": { "en": "Female", "fr": "Femme" }
        })
    );
}

#[test]
fn sentinel_ids_still_select_first_match() {
    let make = |id: &str, agency: &str| CodelistSummary {
        id: id.to_string(),
        agency_id: agency.to_string(),
        version: "1.0".to_string(),
        is_final: is_final_from_raw(None),
        structure_url: "http://x".to_string(),
        names: LocalizedNames::new(),
    };
    // Two summaries degraded to the same sentinel id must stay selectable.
    let summaries = vec![
        make(sdmx_model::UNKNOWN_ID, "SPC"),
        make(sdmx_model::UNKNOWN_ID, "OECD"),
    ];
    let found = find_by_id(&summaries, sdmx_model::UNKNOWN_ID).expect("match");
    assert_eq!(found.agency_id, "SPC");
    assert!(!found.is_final);
}
