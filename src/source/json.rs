//! AAS v3 JSON reader.
//!
//! Accepted top-level shapes:
//!
//! ```json
//! { "assetAdministrationShells": [...], "submodels": [...] }   // environment
//! { "result": [...], "paging_metadata": { "cursor": "..." } }  // API page
//! [ { "modelType": "Submodel", ... } ]                          // bare list
//! { "modelType": "Submodel", ... }                              // one submodel
//! ```
//!
//! Only idShort, id, modelType, semanticId and child containment are read.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::SubmodelSource;
use crate::base::{Identifier, KeyType, NodeId, SemanticKey};
use crate::error::SourceError;
use crate::model::{Element, ElementKind, Snapshot};

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReferenceDto {
    #[serde(default)]
    keys: Vec<KeyDto>,
}

#[derive(Debug, Deserialize)]
struct KeyDto {
    #[serde(rename = "type", default)]
    key_type: String,
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ElementDto {
    #[serde(default)]
    model_type: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    id_short: Option<String>,
    #[serde(default)]
    semantic_id: Option<ReferenceDto>,
    #[serde(default)]
    submodel_elements: Vec<ElementDto>,
    /// Polymorphic: children for collections and lists, data otherwise.
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    statements: Vec<ElementDto>,
    #[serde(default)]
    annotations: Vec<ElementDto>,
    #[serde(default)]
    input_variables: Vec<OperationVariableDto>,
    #[serde(default)]
    output_variables: Vec<OperationVariableDto>,
    #[serde(default)]
    inoutput_variables: Vec<OperationVariableDto>,
}

#[derive(Debug, Deserialize)]
struct OperationVariableDto {
    value: ElementDto,
}

#[derive(Debug, Deserialize)]
struct ShellDto {
    id: String,
    #[serde(default)]
    submodels: Vec<ReferenceDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvironmentDto {
    #[serde(default)]
    asset_administration_shells: Vec<ShellDto>,
    #[serde(default)]
    submodels: Vec<ElementDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageDto {
    pub(crate) result: Vec<ElementDto>,
    #[serde(default)]
    pub(crate) paging_metadata: Option<PagingMetadataDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PagingMetadataDto {
    #[serde(default)]
    pub(crate) cursor: Option<String>,
}

impl PageDto {
    /// Cursor of the next page, if the repository reported one.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    pub(crate) fn next_cursor(&self) -> Option<&str> {
        self.paging_metadata
            .as_ref()
            .and_then(|m| m.cursor.as_deref())
            .filter(|cursor| !cursor.is_empty())
    }
}

// ============================================================================
// SOURCE
// ============================================================================

#[derive(Debug, Clone)]
enum Input {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Tree source backed by an AAS JSON document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    input: Input,
}

impl JsonSource {
    /// Read the document from `path` on every fetch.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::Path(path.into()),
        }
    }

    /// Use an in-memory document.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            input: Input::Bytes(bytes.into()),
        }
    }
}

impl SubmodelSource for JsonSource {
    fn fetch(&self) -> Result<Snapshot, SourceError> {
        match &self.input {
            Input::Path(path) => {
                debug!(path = %path.display(), "reading submodel snapshot");
                let bytes = std::fs::read(path)?;
                parse_snapshot(&bytes)
            }
            Input::Bytes(bytes) => parse_snapshot(bytes),
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse an AAS JSON document into a snapshot.
pub fn parse_snapshot(input: &[u8]) -> Result<Snapshot, SourceError> {
    let value: Value = serde_json::from_slice(input)?;

    let environment = match value {
        Value::Array(_) => EnvironmentDto {
            submodels: serde_json::from_value(value)?,
            ..Default::default()
        },
        Value::Object(ref obj) if obj.contains_key("result") => {
            let page: PageDto = serde_json::from_value(value)?;
            EnvironmentDto {
                submodels: page.result,
                ..Default::default()
            }
        }
        Value::Object(ref obj)
            if obj.get("modelType").and_then(Value::as_str) == Some("Submodel") =>
        {
            EnvironmentDto {
                submodels: vec![serde_json::from_value(value)?],
                ..Default::default()
            }
        }
        Value::Object(ref obj)
            if obj.contains_key("submodels") || obj.contains_key("assetAdministrationShells") =>
        {
            serde_json::from_value(value)?
        }
        Value::Object(_) => return Err(SourceError::invalid("unrecognized AAS JSON document")),
        _ => return Err(SourceError::invalid("expected a JSON object or array")),
    };

    let mut snapshot = lower_submodels(environment.submodels)?;
    for shell in environment.asset_administration_shells {
        let shell_id = Identifier::new(shell.id);
        for reference in shell.submodels {
            for key in reference.keys {
                if KeyType::from_name(&key.key_type) == KeyType::Submodel {
                    snapshot.set_shell(Identifier::new(key.value), shell_id.clone());
                }
            }
        }
    }
    Ok(snapshot)
}

/// Lower deserialized submodels into a fresh snapshot, in order.
pub(crate) fn lower_submodels(submodels: Vec<ElementDto>) -> Result<Snapshot, SourceError> {
    let mut snapshot = Snapshot::new();
    for dto in submodels {
        let id = dto
            .id
            .clone()
            .ok_or_else(|| SourceError::invalid("submodel without id"))?;
        let root = Element::submodel(id, dto.id_short.clone().unwrap_or_default())
            .with_semantic_keys(semantic_keys(dto.semantic_id.as_ref()));
        let root = snapshot.add_root(root);
        lower_children(&mut snapshot, root, dto)?;
    }
    debug!(
        submodels = snapshot.roots().len(),
        elements = snapshot.element_count(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn lower_element(
    snapshot: &mut Snapshot,
    parent: NodeId,
    dto: ElementDto,
) -> Result<(), SourceError> {
    let kind = ElementKind::from_model_type(&dto.model_type);
    let element = Element::new(kind, dto.id_short.clone().unwrap_or_default())
        .with_semantic_keys(semantic_keys(dto.semantic_id.as_ref()));
    let id = snapshot
        .add_child(parent, element)
        .map_err(|e| SourceError::invalid(e.to_string()))?;
    lower_children(snapshot, id, dto)
}

fn lower_children(
    snapshot: &mut Snapshot,
    parent: NodeId,
    dto: ElementDto,
) -> Result<(), SourceError> {
    let kind = ElementKind::from_model_type(&dto.model_type);
    let mut children = dto.submodel_elements;

    if matches!(
        kind,
        ElementKind::SubmodelElementCollection | ElementKind::SubmodelElementList
    ) {
        if let Some(value @ Value::Array(_)) = dto.value {
            children.extend(serde_json::from_value::<Vec<ElementDto>>(value)?);
        }
    }
    children.extend(dto.statements);
    children.extend(dto.annotations);
    children.extend(
        dto.input_variables
            .into_iter()
            .chain(dto.output_variables)
            .chain(dto.inoutput_variables)
            .map(|variable| variable.value),
    );

    for child in children {
        lower_element(snapshot, parent, child)?;
    }
    Ok(())
}

fn semantic_keys(reference: Option<&ReferenceDto>) -> Vec<SemanticKey> {
    reference
        .map(|r| {
            r.keys
                .iter()
                .map(|key| SemanticKey::new(KeyType::from_name(&key.key_type), key.value.as_str()))
                .collect()
        })
        .unwrap_or_default()
}
