use thiserror::Error;

use crate::fetch::FetchError;

/// Errors surfaced to the embedding application.
///
/// All of these are non-fatal: the session that raised one keeps its
/// previously loaded state and stays usable for another attempt.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] sdmx_structure::ParseError),

    #[error(transparent)]
    Export(#[from] sdmx_export::ExportError),

    #[error("no codelist with id {id:?} in the loaded registry")]
    UnknownCodelist { id: String },

    #[error("no codelist detail loaded")]
    NoCodelistLoaded,
}

pub type Result<T> = std::result::Result<T, ClientError>;
