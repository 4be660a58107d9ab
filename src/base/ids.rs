//! Handles and value-typed identifiers.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

// ============================================================================
// NODE HANDLES
// ============================================================================

/// Stable handle of an element inside a [`Snapshot`](crate::model::Snapshot).
///
/// Handles are only meaningful for the snapshot that issued them. Two handles
/// are equal iff they address the same element instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of the element in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Globally unique identifier of an Identifiable (submodel, shell).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(pub Arc<str>);

impl Identifier {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// SEMANTIC KEYS
// ============================================================================

/// The kind of a reference key, as used in AAS `semanticId` references.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyType {
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    #[default]
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
    /// A name outside the AAS key type set, kept verbatim.
    Other(SmolStr),
}

impl KeyType {
    /// Parse the serialized key type name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "AnnotatedRelationshipElement" => Self::AnnotatedRelationshipElement,
            "AssetAdministrationShell" => Self::AssetAdministrationShell,
            "BasicEventElement" => Self::BasicEventElement,
            "Blob" => Self::Blob,
            "Capability" => Self::Capability,
            "ConceptDescription" => Self::ConceptDescription,
            "DataElement" => Self::DataElement,
            "Entity" => Self::Entity,
            "EventElement" => Self::EventElement,
            "File" => Self::File,
            "FragmentReference" => Self::FragmentReference,
            "GlobalReference" => Self::GlobalReference,
            "Identifiable" => Self::Identifiable,
            "MultiLanguageProperty" => Self::MultiLanguageProperty,
            "Operation" => Self::Operation,
            "Property" => Self::Property,
            "Range" => Self::Range,
            "Referable" => Self::Referable,
            "ReferenceElement" => Self::ReferenceElement,
            "RelationshipElement" => Self::RelationshipElement,
            "Submodel" => Self::Submodel,
            "SubmodelElement" => Self::SubmodelElement,
            "SubmodelElementCollection" => Self::SubmodelElementCollection,
            "SubmodelElementList" => Self::SubmodelElementList,
            other => Self::Other(SmolStr::new(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            Self::AssetAdministrationShell => "AssetAdministrationShell",
            Self::BasicEventElement => "BasicEventElement",
            Self::Blob => "Blob",
            Self::Capability => "Capability",
            Self::ConceptDescription => "ConceptDescription",
            Self::DataElement => "DataElement",
            Self::Entity => "Entity",
            Self::EventElement => "EventElement",
            Self::File => "File",
            Self::FragmentReference => "FragmentReference",
            Self::GlobalReference => "GlobalReference",
            Self::Identifiable => "Identifiable",
            Self::MultiLanguageProperty => "MultiLanguageProperty",
            Self::Operation => "Operation",
            Self::Property => "Property",
            Self::Range => "Range",
            Self::Referable => "Referable",
            Self::ReferenceElement => "ReferenceElement",
            Self::RelationshipElement => "RelationshipElement",
            Self::Submodel => "Submodel",
            Self::SubmodelElement => "SubmodelElement",
            Self::SubmodelElementCollection => "SubmodelElementCollection",
            Self::SubmodelElementList => "SubmodelElementList",
            Self::Other(name) => name.as_str(),
        }
    }
}

/// A semantic identifier attached to an element.
///
/// Equality and hashing are by value: two keys declared on unrelated
/// elements are the same key if type and value match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticKey {
    pub key_type: KeyType,
    pub value: Arc<str>,
}

impl SemanticKey {
    pub fn new(key_type: KeyType, value: impl Into<Arc<str>>) -> Self {
        Self {
            key_type,
            value: value.into(),
        }
    }

    /// A `GlobalReference` key, the usual form of a semantic id.
    pub fn global(value: impl Into<Arc<str>>) -> Self {
        Self::new(KeyType::GlobalReference, value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Renders the key value only; this is the label of an equivalence class.
impl fmt::Display for SemanticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
