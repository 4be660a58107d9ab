//! The in-memory tree snapshot delivered by a tree source.

use indexmap::IndexMap;

use super::element::Element;
use crate::base::{Identifier, NodeId};
use crate::error::{MatcherError, Result};

/// A complete, read-only snapshot of a repository's submodel trees.
///
/// All elements of all trees live in one arena. Ownership flows from the
/// arena to each element; parent links are plain handles.
///
/// ```text
/// Snapshot
/// ├── elements: Vec<Element>   (arena, addressed by NodeId)
/// ├── roots: Vec<NodeId>       (submodels, in source order)
/// └── shells: IndexMap<Identifier, Identifier>  (submodel id → shell id)
/// ```
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    elements: Vec<Element>,
    roots: Vec<NodeId>,
    shells: IndexMap<Identifier, Identifier>,
}

impl Snapshot {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root tree node. Any parent set on `element` is cleared.
    pub fn add_root(&mut self, mut element: Element) -> NodeId {
        element.parent = None;
        let id = self.push(element);
        self.roots.push(id);
        id
    }

    /// Append `element` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut element: Element) -> Result<NodeId> {
        if self.get(parent).is_none() {
            return Err(MatcherError::Structural { node: parent });
        }
        element.parent = Some(parent);
        let id = self.push(element);
        self.elements[parent.index()].children.push(id);
        Ok(id)
    }

    /// Record that the submodel `submodel` is referenced by the shell `shell`.
    pub fn set_shell(&mut self, submodel: Identifier, shell: Identifier) {
        self.shells.insert(submodel, shell);
    }

    fn push(&mut self, mut element: Element) -> NodeId {
        let id = NodeId(self.elements.len() as u32);
        element.children.clear();
        self.elements.push(element);
        id
    }

    /// Get an element by handle.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Root handles in source order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over root elements with their handles.
    pub fn iter_roots(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.roots
            .iter()
            .filter_map(|&id| self.get(id).map(|element| (id, element)))
    }

    /// The shell referencing a submodel, if the source reported one.
    pub fn shell_of(&self, submodel: &Identifier) -> Option<&Identifier> {
        self.shells.get(submodel)
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Pre-order walk over all descendants of `root`, excluding `root`.
    pub fn walk(&self, root: NodeId) -> Walk<'_> {
        let mut stack = Vec::new();
        if let Some(element) = self.get(root) {
            stack.extend(element.children.iter().rev().copied());
        }
        Walk {
            snapshot: self,
            stack,
        }
    }
}

/// Pre-order iterator returned by [`Snapshot::walk`].
pub struct Walk<'s> {
    snapshot: &'s Snapshot,
    stack: Vec<NodeId>,
}

impl<'s> Iterator for Walk<'s> {
    type Item = (NodeId, &'s Element);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            // Dangling handles are skipped here; resolution reports them.
            let Some(element) = self.snapshot.get(id) else {
                continue;
            };
            self.stack.extend(element.children.iter().rev().copied());
            return Some((id, element));
        }
        None
    }
}

// Test-only arena surgery for corrupt-tree cases.
#[cfg(test)]
impl Snapshot {
    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id.index())
    }
}
