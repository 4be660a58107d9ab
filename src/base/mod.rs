//! Foundation types for the matcher.
//!
//! - [`NodeId`] - Arena handle of a tree element
//! - [`Identifier`] - Globally unique id of an Identifiable
//! - [`SemanticKey`], [`KeyType`] - Value-typed semantic identifiers
//!
//! This module has NO dependencies on other crate modules.

mod ids;

pub use ids::{Identifier, KeyType, NodeId, SemanticKey};
