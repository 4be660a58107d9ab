//! Equivalence export.
//!
//! Turns the non-trivial classes of a [`SemanticIndex`] into a
//! [`LinkDocument`]: one `Equivalence` link per semantic key shared by two
//! or more elements, one link element per member.
//!
//! ```text
//! SemanticIndex ──export()──▶ LinkDocument ──to_xml()──▶ <links>...</links>
//! ```
//!
//! Element ids are composed verbatim as
//! `<endpoint>/<base64(owner id)>/submodel/submodel-elements/<idShort path>`.
//! Path separators in idShorts are not escaped.

mod xml;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::base::NodeId;
use crate::error::{MatcherError, Result};
use crate::index::SemanticIndex;
use crate::resolve::{resolve_owner, resolve_path};

pub use xml::{LinkWriter, tags};

/// Link type of every exported link.
pub const EQUIVALENCE: &str = "Equivalence";
/// Tool tag of every exported element.
pub const DEFAULT_TOOL: &str = "BaSyx";
/// Project reference named in the provenance comment.
pub const PROJECT_URL: &str = "https://github.com/rwth-iat/aas-repository-semantic-matcher";

// ============================================================================
// CONFIG
// ============================================================================

/// Settings for one export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Repository endpoint the snapshot was taken from.
    pub endpoint: String,
    pub link_type: String,
    pub tool: String,
    pub project_url: String,
}

impl ExportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            link_type: EQUIVALENCE.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            project_url: PROJECT_URL.to_string(),
        }
    }

    /// Set the tool tag.
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Set the link type.
    pub fn with_link_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = link_type.into();
        self
    }

    /// Set the project reference used in the provenance comment.
    pub fn with_project_url(mut self, project_url: impl Into<String>) -> Self {
        self.project_url = project_url.into();
        self
    }

    /// Provenance comment attached to each link.
    pub fn comment(&self) -> String {
        format!(
            "Created by indexing {} via {}",
            self.endpoint, self.project_url
        )
    }

    /// Compose the exported id of an element.
    pub fn element_id(&self, owner_id: &str, path: &str) -> String {
        let encoded = STANDARD.encode(owner_id.as_bytes());
        format!(
            "{}/{encoded}/submodel/submodel-elements/{path}",
            self.endpoint
        )
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

/// A cross-reference document of equivalence classes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkDocument {
    pub links: Vec<Link>,
}

/// One equivalence class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub link_type: String,
    pub comment: String,
    pub elements: Vec<LinkElement>,
}

/// One member of an equivalence class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkElement {
    pub id: String,
    /// Structural type tag of the element.
    pub name: String,
    /// Id of the owning Identifiable.
    pub model: String,
    pub tool: String,
    /// The semantic key labelling the class.
    pub element_class: String,
}

impl LinkDocument {
    /// Serialize as an indented XML document.
    pub fn to_xml(&self) -> Result<String> {
        let bytes = LinkWriter::new().write(self)?;
        String::from_utf8(bytes).map_err(|e| MatcherError::xml(format!("Invalid UTF-8: {e}")))
    }

    /// Total number of link elements across all links.
    pub fn element_count(&self) -> usize {
        self.links.iter().map(|link| link.elements.len()).sum()
    }
}

// ============================================================================
// EXPORT
// ============================================================================

/// Build the link document for all classes with two or more members.
///
/// Any owner or path resolution failure aborts the export.
pub fn export(index: &SemanticIndex<'_>, config: &ExportConfig) -> Result<LinkDocument> {
    let comment = config.comment();
    let mut links = Vec::new();

    for (key, members) in index.equivalence_classes() {
        let element_class = key.to_string();
        let elements = members
            .iter()
            .map(|entry| link_element(index, config, entry.element, &element_class))
            .collect::<Result<Vec<_>>>()?;

        links.push(Link {
            link_type: config.link_type.clone(),
            comment: comment.clone(),
            elements,
        });
    }

    debug!(
        links = links.len(),
        skipped = index.len() - links.len(),
        "exported equivalence classes"
    );
    Ok(LinkDocument { links })
}

fn link_element(
    index: &SemanticIndex<'_>,
    config: &ExportConfig,
    node: NodeId,
    element_class: &str,
) -> Result<LinkElement> {
    let snapshot = index.snapshot();
    let element = snapshot
        .get(node)
        .ok_or(MatcherError::Structural { node })?;
    let owner = resolve_owner(snapshot, node)?;
    let path = resolve_path(snapshot, node)?;

    Ok(LinkElement {
        id: config.element_id(owner.id.as_str(), &path),
        name: element.kind.as_str().to_string(),
        model: owner.id.to_string(),
        tool: config.tool.clone(),
        element_class: element_class.to_string(),
    })
}
