//! Codelist summary and code record value types.
//!
//! Both types are plain value records: no back-references, no shared state.
//! A parse produces a fresh sequence in document order and the caller holds it
//! for as long as it needs.
//!
//! Registry documents routinely omit attributes, so every scalar field has a
//! named sentinel default rather than being optional. The sentinels are the
//! exact strings the SDMX registry browser has always surfaced to users, kept
//! as constants so they stay testable.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedNames;

/// Sentinel for a codelist missing its `id` attribute.
pub const UNKNOWN_ID: &str = "Unknown ID";

/// Sentinel for a codelist missing its `agencyID` attribute.
pub const UNKNOWN_AGENCY: &str = "Unknown Agency";

/// Sentinel for a codelist missing its `version` attribute.
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Sentinel for a codelist missing its `structureURL` attribute.
pub const UNKNOWN_URL: &str = "Unknown URL";

/// Sentinel for a code entry missing its `id` attribute.
pub const UNKNOWN_CODE: &str = "Unknown Code";

/// One codelist as advertised by the registry document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodelistSummary {
    /// Codelist identifier (e.g. `"CL_SEX"`).
    pub id: String,
    /// Maintaining agency (e.g. `"SPC"`).
    pub agency_id: String,
    /// Codelist version string.
    pub version: String,
    /// Whether the codelist is marked final.
    ///
    /// Derived from the raw `isFinal` attribute; see [`is_final_from_raw`].
    pub is_final: bool,
    /// Dereferenceable link to the codelist's full detail document.
    pub structure_url: String,
    /// Display names by language tag.
    pub names: LocalizedNames,
}

/// One code entry within a codelist detail document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    /// Code identifier (e.g. `"M"`).
    pub id: String,
    /// Display names by language tag.
    pub names: LocalizedNames,
}

/// Derive the `is_final` flag from the raw attribute text.
///
/// The raw value is lowercased and compared for exact equality to `"true"`.
/// An absent attribute and any other value both yield `false`, so "unknown"
/// and "explicitly false" are indistinguishable downstream. That fidelity loss
/// is deliberate and matches what the registry has always reported.
pub fn is_final_from_raw(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.to_lowercase() == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_final_accepts_case_variants_of_true() {
        assert!(is_final_from_raw(Some("true")));
        assert!(is_final_from_raw(Some("True")));
        assert!(is_final_from_raw(Some("TRUE")));
    }

    #[test]
    fn is_final_rejects_everything_else() {
        assert!(!is_final_from_raw(Some("false")));
        assert!(!is_final_from_raw(Some("maybe")));
        assert!(!is_final_from_raw(Some("")));
        assert!(!is_final_from_raw(None));
    }

    #[test]
    fn summary_serializes_round_trip() {
        let summary = CodelistSummary {
            id: "CL_SEX".to_string(),
            agency_id: "SPC".to_string(),
            version: "1.0".to_string(),
            is_final: true,
            structure_url: "http://x/cl_sex".to_string(),
            names: [("en", "Sex"), ("fr", "Sexe")].into_iter().collect(),
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: CodelistSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round, summary);
    }
}
