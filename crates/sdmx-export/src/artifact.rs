//! Downloadable artifacts: bytes plus media type plus filename.

use sdmx_model::CodeRecord;

use crate::delimited::to_delimited_text;
use crate::document::to_printable_document;
use crate::error::Result;

/// Media type of the raw XML passthrough.
pub const MEDIA_TYPE_XML: &str = "application/xml";

/// Media type of the delimited-text export.
pub const MEDIA_TYPE_CSV: &str = "text/csv";

/// Media type of the printable document export.
pub const MEDIA_TYPE_PDF: &str = "application/pdf";

/// Identity passthrough of the fetched detail document.
///
/// Offered alongside the derived encodings so the caller can hand out the
/// source document byte-for-byte as it came off the wire.
pub fn passthrough_xml(raw: &[u8]) -> Vec<u8> {
    raw.to_vec()
}

/// One export result, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested filename, derived from the codelist id.
    pub filename: String,
    /// Media type of `data`.
    pub media_type: &'static str,
    /// Encoded payload.
    pub data: Vec<u8>,
}

impl ExportArtifact {
    /// Raw XML passthrough artifact for a codelist.
    pub fn xml(codelist_id: &str, raw: &[u8]) -> Self {
        Self {
            filename: format!("{codelist_id}.xml"),
            media_type: MEDIA_TYPE_XML,
            data: passthrough_xml(raw),
        }
    }

    /// Delimited-text artifact for a codelist's records.
    pub fn delimited_text(codelist_id: &str, records: &[CodeRecord]) -> Result<Self> {
        Ok(Self {
            filename: format!("{codelist_id}.csv"),
            media_type: MEDIA_TYPE_CSV,
            data: to_delimited_text(records)?,
        })
    }

    /// Printable-document artifact for a codelist's records.
    pub fn printable_document(codelist_id: &str, records: &[CodeRecord]) -> Result<Self> {
        Ok(Self {
            filename: format!("{codelist_id}.pdf"),
            media_type: MEDIA_TYPE_PDF,
            data: to_printable_document(records)?,
        })
    }
}
