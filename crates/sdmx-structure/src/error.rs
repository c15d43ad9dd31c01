use thiserror::Error;

/// Errors raised while parsing an SDMX-ML structure document.
///
/// Only document-level problems surface here: a missing attribute or child
/// element never fails a parse, it degrades to the sentinel defaults defined
/// in `sdmx-model`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML: {0}")]
    Malformed(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
}

pub type Result<T> = std::result::Result<T, ParseError>;
