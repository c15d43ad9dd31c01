//! Client layer for the SDMX codelist registry pipeline.
//!
//! Composes the fetch boundary with the parsers in `sdmx-structure` and the
//! exporters in `sdmx-export`. The [`RegistrySession`] is the only retained
//! state in the system and the caller owns it; everything underneath is a
//! pure function over bytes and records.

pub mod error;
pub mod fetch;
pub mod session;

pub use error::{ClientError, Result};
pub use fetch::{DEFAULT_REGISTRY_URL, FetchError, Fetcher, HttpFetcher};
pub use session::{CodelistDetail, RegistrySession};
