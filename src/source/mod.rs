//! Tree sources: where submodel snapshots come from.
//!
//! - [`JsonSource`] - AAS JSON documents (environment, API page, bare list)
//! - [`HttpSource`] - A live submodel repository (`http` feature)
//!
//! A source delivers a complete snapshot or fails. There is no retry and no
//! partial result.

#[cfg(feature = "http")]
mod http;
mod json;

#[cfg(feature = "http")]
pub use http::HttpSource;
pub use json::{JsonSource, parse_snapshot};

use crate::error::SourceError;
use crate::model::Snapshot;

/// Supplies all submodel trees currently stored by a repository.
pub trait SubmodelSource {
    /// Fetch a complete snapshot.
    fn fetch(&self) -> Result<Snapshot, SourceError>;
}

/// An already materialized snapshot.
impl SubmodelSource for Snapshot {
    fn fetch(&self) -> Result<Snapshot, SourceError> {
        Ok(self.clone())
    }
}
