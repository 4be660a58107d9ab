//! Reverse index from semantic keys to the elements declaring them.
//!
//! Every key value found on a submodel or any of its descendants becomes an
//! equivalence class: the set of entries for elements carrying exactly that
//! key. The index is rebuilt from scratch on every pass and borrows the
//! snapshot it was built from.

use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::base::{Identifier, NodeId, SemanticKey};
use crate::model::{Element, Snapshot};

// ============================================================================
// INDEX ENTRY
// ============================================================================

/// One element declaring a semantic key.
///
/// Equality and hashing use `(element, parent_identifiable)` only, so adding
/// the same element twice under the same root is absorbed by the set.
#[derive(Clone, Debug)]
pub struct IndexEntry {
    /// The element the key is attached to.
    pub element: NodeId,
    /// Id of the submodel being traversed. For a key on the submodel itself,
    /// this is the submodel's own id.
    pub parent_identifiable: Identifier,
    /// Id of the shell referencing the submodel, if known.
    pub parent_shell: Option<Identifier>,
}

impl PartialEq for IndexEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.parent_identifiable == other.parent_identifiable
    }
}

impl Eq for IndexEntry {}

impl Hash for IndexEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
        self.parent_identifiable.hash(state);
    }
}

// ============================================================================
// SEMANTIC INDEX
// ============================================================================

/// Semantic key → equivalence class.
///
/// Keys and members keep traversal order. Equality between two indexes is
/// order-insensitive.
#[derive(Clone, Debug)]
pub struct SemanticIndex<'s> {
    snapshot: &'s Snapshot,
    classes: IndexMap<SemanticKey, IndexSet<IndexEntry>>,
}

impl PartialEq for SemanticIndex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.classes == other.classes
    }
}

impl Eq for SemanticIndex<'_> {}

impl<'s> SemanticIndex<'s> {
    fn empty(snapshot: &'s Snapshot) -> Self {
        Self {
            snapshot,
            classes: IndexMap::new(),
        }
    }

    fn insert(&mut self, key: &SemanticKey, entry: IndexEntry) {
        trace!(key = %key, element = %entry.element, "index entry");
        self.classes.entry(key.clone()).or_default().insert(entry);
    }

    fn add_keys(
        &mut self,
        id: NodeId,
        element: &Element,
        root_id: &Identifier,
        shell: Option<&Identifier>,
    ) {
        for key in &element.semantic_keys {
            self.insert(
                key,
                IndexEntry {
                    element: id,
                    parent_identifiable: root_id.clone(),
                    parent_shell: shell.cloned(),
                },
            );
        }
    }

    /// The snapshot this index was built from.
    pub fn snapshot(&self) -> &'s Snapshot {
        self.snapshot
    }

    /// All classes, including singletons.
    pub fn classes(&self) -> impl Iterator<Item = (&SemanticKey, &IndexSet<IndexEntry>)> {
        self.classes.iter()
    }

    /// The class of a key, if any element declares it.
    pub fn class(&self, key: &SemanticKey) -> Option<&IndexSet<IndexEntry>> {
        self.classes.get(key)
    }

    /// Classes with two or more members.
    pub fn equivalence_classes(
        &self,
    ) -> impl Iterator<Item = (&SemanticKey, &IndexSet<IndexEntry>)> {
        self.classes.iter().filter(|(_, members)| members.len() >= 2)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Matches report: each key followed by its tab-indented entries.
impl fmt::Display for SemanticIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, members) in &self.classes {
            writeln!(f, "{key}")?;
            for entry in members {
                let id_short = self
                    .snapshot
                    .get(entry.element)
                    .map(|e| e.id_short.as_str())
                    .unwrap_or("?");
                write!(f, "\t{} {id_short} in {}", entry.element, entry.parent_identifiable)?;
                if let Some(shell) = &entry.parent_shell {
                    write!(f, " (shell {shell})")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// INDEXING
// ============================================================================

/// Build the semantic index of every submodel in `snapshot`.
///
/// Roots without an identifier are skipped: nothing under them can name an
/// owning Identifiable.
pub fn build_index(snapshot: &Snapshot) -> SemanticIndex<'_> {
    let mut index = SemanticIndex::empty(snapshot);

    for (root, element) in snapshot.iter_roots() {
        let Some(root_id) = element.identifier() else {
            debug!(root = %root, id_short = %element.id_short, "skipping non-identifiable root");
            continue;
        };
        let shell = snapshot.shell_of(root_id);
        let before = index.len();

        index.add_keys(root, element, root_id, shell);
        for (id, descendant) in snapshot.walk(root) {
            if descendant.has_semantic_keys() {
                index.add_keys(id, descendant, root_id, shell);
            }
        }

        debug!(
            submodel = %root_id,
            new_keys = index.len() - before,
            "indexed submodel"
        );
    }

    debug!(keys = index.len(), "semantic index built");
    index
}
