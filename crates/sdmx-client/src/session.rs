//! Caller-owned session state.
//!
//! The registry browser historically kept its last-fetched data in ambient UI
//! session state; here that becomes an explicit context object the caller
//! owns and passes around. A failed load leaves the previously held state
//! untouched, so the session stays usable after a fetch or parse error.

use sdmx_export::ExportArtifact;
use sdmx_model::{CodeRecord, CodelistSummary, find_by_id};
use sdmx_structure::{parse_codelist, parse_registry};

use crate::error::{ClientError, Result};
use crate::fetch::Fetcher;

/// The last-loaded codelist detail: raw bytes as fetched plus the parsed
/// records, tagged with the owning codelist's id.
#[derive(Debug, Clone)]
pub struct CodelistDetail {
    pub codelist_id: String,
    pub raw: Vec<u8>,
    pub records: Vec<CodeRecord>,
}

/// Session context holding the last-fetched registry and detail.
#[derive(Debug, Clone, Default)]
pub struct RegistrySession {
    summaries: Vec<CodelistSummary>,
    detail: Option<CodelistDetail>,
}

impl RegistrySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and parse the registry at `url`, replacing the held summaries.
    pub fn load_registry(&mut self, fetcher: &impl Fetcher, url: &str) -> Result<&[CodelistSummary]> {
        let bytes = fetcher.fetch(url)?;
        let summaries = parse_registry(&bytes)?;
        tracing::info!(url, count = summaries.len(), "registry loaded");
        self.summaries = summaries;
        Ok(&self.summaries)
    }

    /// Codelist summaries from the last successful registry load.
    pub fn summaries(&self) -> &[CodelistSummary] {
        &self.summaries
    }

    /// Select a codelist by id; first match in document order wins.
    pub fn select(&self, id: &str) -> Option<&CodelistSummary> {
        find_by_id(&self.summaries, id)
    }

    /// Fetch and parse the detail document for the codelist with `id`,
    /// replacing the held detail.
    ///
    /// The detail URL is the selected summary's `structure_url`; a summary
    /// that degraded to the URL sentinel will simply fail the fetch.
    pub fn load_codelist(&mut self, fetcher: &impl Fetcher, id: &str) -> Result<&CodelistDetail> {
        let summary = self
            .select(id)
            .ok_or_else(|| ClientError::UnknownCodelist { id: id.to_string() })?;
        let codelist_id = summary.id.clone();
        let url = summary.structure_url.clone();

        let raw = fetcher.fetch(&url)?;
        let records = parse_codelist(&raw)?;
        tracing::info!(id = %codelist_id, count = records.len(), "codelist detail loaded");
        Ok(self.detail.insert(CodelistDetail {
            codelist_id,
            raw,
            records,
        }))
    }

    /// The last successfully loaded detail, if any.
    pub fn detail(&self) -> Option<&CodelistDetail> {
        self.detail.as_ref()
    }

    /// Raw XML passthrough artifact of the loaded detail document.
    pub fn export_xml(&self) -> Result<ExportArtifact> {
        let detail = self.loaded_detail()?;
        Ok(ExportArtifact::xml(&detail.codelist_id, &detail.raw))
    }

    /// Delimited-text artifact of the loaded detail records.
    pub fn export_csv(&self) -> Result<ExportArtifact> {
        let detail = self.loaded_detail()?;
        Ok(ExportArtifact::delimited_text(
            &detail.codelist_id,
            &detail.records,
        )?)
    }

    /// Printable-document artifact of the loaded detail records.
    pub fn export_pdf(&self) -> Result<ExportArtifact> {
        let detail = self.loaded_detail()?;
        Ok(ExportArtifact::printable_document(
            &detail.codelist_id,
            &detail.records,
        )?)
    }

    fn loaded_detail(&self) -> Result<&CodelistDetail> {
        self.detail.as_ref().ok_or(ClientError::NoCodelistLoaded)
    }
}
