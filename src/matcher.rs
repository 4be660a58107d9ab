//! Fetch → index → export pipeline.
//!
//! ```ignore
//! use semantic_matcher::{ExportConfig, JsonSource, Matcher};
//!
//! let matcher = Matcher::new(JsonSource::from_path("env.json"), ExportConfig::new(endpoint));
//! let xml = matcher.matches_to_xml()?;
//! ```

use tracing::info;

use crate::error::Result;
use crate::export::{ExportConfig, LinkDocument, export};
use crate::index::{SemanticIndex, build_index};
use crate::model::Snapshot;
use crate::source::SubmodelSource;

/// One-shot semantic matcher over a tree source.
///
/// Every call fetches a fresh snapshot and rebuilds the index; nothing is
/// cached between calls.
pub struct Matcher<S> {
    source: S,
    config: ExportConfig,
}

impl<S: SubmodelSource> Matcher<S> {
    pub fn new(source: S, config: ExportConfig) -> Self {
        Self { source, config }
    }

    /// Fetch a complete snapshot from the source.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let snapshot = self.source.fetch()?;
        info!(
            endpoint = %self.config.endpoint,
            submodels = snapshot.roots().len(),
            "fetched submodels"
        );
        Ok(snapshot)
    }

    /// Index `snapshot` and export its equivalence classes.
    pub fn export_snapshot(&self, snapshot: &Snapshot) -> Result<LinkDocument> {
        self.export_index(&build_index(snapshot))
    }

    /// Export the equivalence classes of an already built index.
    pub fn export_index(&self, index: &SemanticIndex<'_>) -> Result<LinkDocument> {
        let document = export(index, &self.config)?;
        info!(
            keys = index.len(),
            links = document.links.len(),
            "matched semantic ids"
        );
        Ok(document)
    }

    /// Fetch, index and export in one pass.
    pub fn matches(&self) -> Result<LinkDocument> {
        let snapshot = self.snapshot()?;
        self.export_snapshot(&snapshot)
    }

    /// Fetch, index and export in one pass, serialized as XML.
    pub fn matches_to_xml(&self) -> Result<String> {
        self.matches()?.to_xml()
    }
}
