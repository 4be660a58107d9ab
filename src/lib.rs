//! # aas-semantic-matcher
//!
//! Reverse index over AAS submodel trees, grouping elements that declare the
//! same semantic id into equivalence classes, and export of those classes as
//! an XML cross-reference document.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! matcher   → Fetch → index → export pipeline
//!   ↓
//! source    → SubmodelSource trait, AAS JSON reader, HTTP repository client
//!   ↓
//! export    → Equivalence links, XML writer
//!   ↓
//! resolve   → Owning Identifiable and idShort path resolution
//!   ↓
//! index     → SemanticIndex, build_index
//!   ↓
//! model     → Element, Role, Snapshot arena
//!   ↓
//! base      → Primitives (NodeId, Identifier, SemanticKey)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → index → resolve → export → source → matcher)
// ============================================================================

/// Foundation types: NodeId, Identifier, SemanticKey
pub mod base;

/// Error types
pub mod error;

/// Structural element model and snapshot arena
pub mod model;

/// Semantic-id reverse index
pub mod index;

/// Owner and idShort path resolution
pub mod resolve;

/// Equivalence link document and XML serialization
pub mod export;

/// Sources of submodel snapshots
pub mod source;

/// End-to-end pipeline
pub mod matcher;

// Re-export foundation types
pub use base::{Identifier, KeyType, NodeId, SemanticKey};
pub use error::{MatcherError, Result, SourceError};
pub use export::{ExportConfig, Link, LinkDocument, LinkElement, export};
pub use index::{IndexEntry, SemanticIndex, build_index};
pub use matcher::Matcher;
pub use model::{Element, ElementKind, Role, Snapshot};
pub use resolve::{Owner, resolve_owner, resolve_path};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{JsonSource, SubmodelSource, parse_snapshot};
