//! Tree elements and their structural capabilities.

use smol_str::SmolStr;

use crate::base::{Identifier, NodeId, SemanticKey};

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The meta-model type of an element.
///
/// Maps to the AAS v3 `modelType` names. Only the structure needed for
/// traversal is modelled; values are not kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    // Identifiables
    Submodel,

    // Data elements
    Property,
    MultiLanguageProperty,
    Range,
    Blob,
    File,
    ReferenceElement,

    // Relationships
    RelationshipElement,
    AnnotatedRelationshipElement,

    // Structured elements
    Entity,
    Operation,
    Capability,
    BasicEventElement,
    SubmodelElementCollection,
    SubmodelElementList,

    // Generic
    Other,
}

impl ElementKind {
    /// Parse from the serialized `modelType` name.
    pub fn from_model_type(model_type: &str) -> Self {
        match model_type {
            "Submodel" => Self::Submodel,
            "Property" => Self::Property,
            "MultiLanguageProperty" => Self::MultiLanguageProperty,
            "Range" => Self::Range,
            "Blob" => Self::Blob,
            "File" => Self::File,
            "ReferenceElement" => Self::ReferenceElement,
            "RelationshipElement" => Self::RelationshipElement,
            "AnnotatedRelationshipElement" => Self::AnnotatedRelationshipElement,
            "Entity" => Self::Entity,
            "Operation" => Self::Operation,
            "Capability" => Self::Capability,
            "BasicEventElement" => Self::BasicEventElement,
            "SubmodelElementCollection" => Self::SubmodelElementCollection,
            "SubmodelElementList" => Self::SubmodelElementList,
            _ => Self::Other,
        }
    }

    /// The structural type tag, used as the `name` of exported elements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submodel => "Submodel",
            Self::Property => "Property",
            Self::MultiLanguageProperty => "MultiLanguageProperty",
            Self::Range => "Range",
            Self::Blob => "Blob",
            Self::File => "File",
            Self::ReferenceElement => "ReferenceElement",
            Self::RelationshipElement => "RelationshipElement",
            Self::AnnotatedRelationshipElement => "AnnotatedRelationshipElement",
            Self::Entity => "Entity",
            Self::Operation => "Operation",
            Self::Capability => "Capability",
            Self::BasicEventElement => "BasicEventElement",
            Self::SubmodelElementCollection => "SubmodelElementCollection",
            Self::SubmodelElementList => "SubmodelElementList",
            Self::Other => "SubmodelElement",
        }
    }

    /// Returns true if elements of this kind can own child elements.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Submodel
                | Self::AnnotatedRelationshipElement
                | Self::Entity
                | Self::Operation
                | Self::SubmodelElementCollection
                | Self::SubmodelElementList
        )
    }
}

// ============================================================================
// ROLES
// ============================================================================

/// What an element can do structurally.
///
/// Path and owner resolution dispatch on this instead of on [`ElementKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Root-capable element carrying a globally unique id.
    Identifiable(Identifier),
    /// Container whose children are addressed by position.
    OrderedList,
    /// Plain named element.
    Referable,
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A tree node.
///
/// Elements are owned by their [`Snapshot`](super::Snapshot); `parent` is a
/// back-reference only.
#[derive(Clone, Debug)]
pub struct Element {
    /// Local name. Empty when the element has none (e.g. list items).
    pub id_short: SmolStr,
    /// The meta-model type.
    pub kind: ElementKind,
    /// Structural capability.
    pub role: Role,
    /// Keys of the element's `semanticId`, in declaration order.
    pub semantic_keys: Vec<SemanticKey>,
    /// The owning element (None for roots). Set by the snapshot.
    pub parent: Option<NodeId>,
    /// Directly owned elements, in order. Set by the snapshot.
    pub children: Vec<NodeId>,
}

impl Element {
    /// Create a non-identifiable element. `SubmodelElementList` gets the
    /// ordered-list role, everything else is a plain referable.
    pub fn new(kind: ElementKind, id_short: impl Into<SmolStr>) -> Self {
        let role = match kind {
            ElementKind::SubmodelElementList => Role::OrderedList,
            _ => Role::Referable,
        };
        Self {
            id_short: id_short.into(),
            kind,
            role,
            semantic_keys: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a submodel root.
    pub fn submodel(id: impl Into<Identifier>, id_short: impl Into<SmolStr>) -> Self {
        Self {
            role: Role::Identifiable(id.into()),
            ..Self::new(ElementKind::Submodel, id_short)
        }
    }

    /// Add a semantic key.
    pub fn with_semantic_key(mut self, key: SemanticKey) -> Self {
        self.semantic_keys.push(key);
        self
    }

    /// Add several semantic keys.
    pub fn with_semantic_keys(mut self, keys: impl IntoIterator<Item = SemanticKey>) -> Self {
        self.semantic_keys.extend(keys);
        self
    }

    /// The globally unique id, if this element is an Identifiable.
    pub fn identifier(&self) -> Option<&Identifier> {
        match &self.role {
            Role::Identifiable(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_identifiable(&self) -> bool {
        matches!(self.role, Role::Identifiable(_))
    }

    pub fn is_ordered_list(&self) -> bool {
        matches!(self.role, Role::OrderedList)
    }

    pub fn has_semantic_keys(&self) -> bool {
        !self.semantic_keys.is_empty()
    }
}
