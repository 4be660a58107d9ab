//! idShort path reconstruction.
//!
//! A path is read root-to-leaf and joined with `.`. Children of an ordered
//! list are addressed as `<list idShort>[<position>]`, which replaces both
//! the child's and the list's own segment:
//!
//! ```text
//! exampleSubmodel1.ExampleProperty
//! exampleSubmodel1.Outer.items[2].Value
//! ```

use crate::base::NodeId;
use crate::error::{MatcherError, Result};
use crate::model::Snapshot;

/// Resolve the idShort path of `node` relative to its owning Identifiable.
///
/// Returns an empty string when `node` itself has an empty idShort, without
/// looking at its ancestors. A parent chain that ends without an
/// Identifiable yields the segments collected so far.
pub fn resolve_path(snapshot: &Snapshot, node: NodeId) -> Result<String> {
    let element = snapshot
        .get(node)
        .ok_or(MatcherError::Structural { node })?;
    if element.id_short.is_empty() {
        return Ok(String::new());
    }

    let mut reversed = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
        let element = snapshot
            .get(id)
            .ok_or(MatcherError::Structural { node: id })?;
        if element.is_identifiable() {
            reversed.push(element.id_short.to_string());
            break;
        }

        let list = match element.parent {
            Some(parent) => {
                let parent_element = snapshot
                    .get(parent)
                    .ok_or(MatcherError::Structural { node: parent })?;
                parent_element.is_ordered_list().then_some(parent_element)
            }
            None => None,
        };

        match list {
            Some(list) => {
                let position = list
                    .children
                    .iter()
                    .position(|&child| child == id)
                    .ok_or(MatcherError::Structural { node: id })?;
                reversed.push(format!("{}[{position}]", list.id_short));
                current = list.parent;
            }
            None => {
                reversed.push(element.id_short.to_string());
                current = element.parent;
            }
        }
    }

    reversed.reverse();
    Ok(reversed.join("."))
}
