//! Owning-Identifiable lookup.

use crate::base::{Identifier, NodeId};
use crate::error::{MatcherError, Result};
use crate::model::Snapshot;

/// The Identifiable a tree element belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Owner<'s> {
    pub node: NodeId,
    pub id: &'s Identifier,
}

/// Climb from `node` (inclusive) to the nearest Identifiable.
///
/// Fails with [`MatcherError::Lookup`] when the parent chain ends without
/// one, and with [`MatcherError::Structural`] on a dangling handle.
pub fn resolve_owner(snapshot: &Snapshot, node: NodeId) -> Result<Owner<'_>> {
    let mut current = Some(node);
    while let Some(id) = current {
        let element = snapshot
            .get(id)
            .ok_or(MatcherError::Structural { node: id })?;
        if let Some(identifier) = element.identifier() {
            return Ok(Owner {
                node: id,
                id: identifier,
            });
        }
        current = element.parent;
    }

    let id_short = snapshot
        .get(node)
        .map(|e| e.id_short.to_string())
        .unwrap_or_default();
    Err(MatcherError::Lookup { node, id_short })
}
