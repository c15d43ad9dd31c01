//! Export encodings for SDMX codelist data.
//!
//! Three independent, stateless conversions over the same record sequence:
//! raw XML passthrough, ISO-8859-1 delimited text, and a paginated printable
//! PDF document. All three are pure functions from in-memory input to output
//! bytes.

pub mod artifact;
pub mod delimited;
pub mod document;
pub mod error;
pub mod latin1;

pub use artifact::{
    ExportArtifact, MEDIA_TYPE_CSV, MEDIA_TYPE_PDF, MEDIA_TYPE_XML, passthrough_xml,
};
pub use delimited::{COLUMN_HEADERS, MISSING_NAME, to_delimited_text};
pub use document::{DOCUMENT_TITLE, to_printable_document};
pub use error::{ExportError, Result};
pub use latin1::encode_latin1;
