//! Parsers for SDMX-ML v2.1 structure documents.
//!
//! Two document shapes are handled: a registry listing of codelists
//! ([`parse_registry`]) and a single codelist's detail document
//! ([`parse_codelist`]). Both are pure functions over an in-memory byte
//! buffer; no I/O happens here and parsing the same bytes twice yields
//! structurally equal results.

pub mod codelist;
pub mod error;
pub mod registry;
mod scan;

pub use codelist::parse_codelist;
pub use error::{ParseError, Result};
pub use registry::parse_registry;
pub use scan::{COMMON_NS, STRUCTURE_NS, XML_NS};
