//! Value types for the SDMX codelist registry pipeline.
//!
//! Everything here is a pure record: the parsers in `sdmx-structure` produce
//! these types, the exporters in `sdmx-export` consume them, and nothing in
//! between mutates them.

pub mod codelist;
pub mod localized;
pub mod selection;

pub use codelist::{
    CodeRecord, CodelistSummary, UNKNOWN_AGENCY, UNKNOWN_CODE, UNKNOWN_ID, UNKNOWN_URL,
    UNKNOWN_VERSION, is_final_from_raw,
};
pub use localized::{LocalizedNames, UNKNOWN_LANGUAGE};
pub use selection::find_by_id;
