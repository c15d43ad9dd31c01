use thiserror::Error;

/// Errors raised while encoding an export artifact.
///
/// Exports operate on already-parsed in-memory records, so these only occur
/// on encoder-level problems; an empty record sequence is valid input and
/// yields header-only or title-only output.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("delimited text encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document encoding failed: {0}")]
    Pdf(#[from] lopdf::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
