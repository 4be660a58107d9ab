//! Index invariants over richer trees.

#![allow(clippy::unwrap_used)]

use rstest::rstest;
use semantic_matcher::{
    ExportConfig, IndexEntry, SemanticKey, Snapshot, build_index, export, resolve_owner,
};

use crate::helpers::fixtures::{ENDPOINT, nested, two_shared_one_lone};

fn all_keyed(snapshot: &Snapshot) -> Vec<(semantic_matcher::NodeId, SemanticKey)> {
    let mut out = Vec::new();
    for (root, element) in snapshot.iter_roots() {
        for key in &element.semantic_keys {
            out.push((root, key.clone()));
        }
        for (id, descendant) in snapshot.walk(root) {
            for key in &descendant.semantic_keys {
                out.push((id, key.clone()));
            }
        }
    }
    out
}

#[rstest]
#[case::flat(two_shared_one_lone().0)]
#[case::nested(nested())]
fn test_index_is_complete(#[case] snapshot: Snapshot) {
    let index = build_index(&snapshot);

    for (node, key) in all_keyed(&snapshot) {
        let owner = resolve_owner(&snapshot, node).unwrap();
        let probe = IndexEntry {
            element: node,
            parent_identifiable: owner.id.clone(),
            parent_shell: None,
        };
        let class = index.class(&key).unwrap();
        assert!(class.contains(&probe), "{node} missing under {key}");
    }
}

#[rstest]
#[case::flat(two_shared_one_lone().0)]
#[case::nested(nested())]
fn test_index_is_idempotent(#[case] snapshot: Snapshot) {
    assert_eq!(build_index(&snapshot), build_index(&snapshot));
}

#[rstest]
#[case::flat(two_shared_one_lone().0)]
#[case::nested(nested())]
fn test_export_keeps_only_shared_keys(#[case] snapshot: Snapshot) {
    let index = build_index(&snapshot);
    let document = export(&index, &ExportConfig::new(ENDPOINT)).unwrap();

    let shared: Vec<_> = index.classes().filter(|(_, m)| m.len() >= 2).collect();
    assert_eq!(document.links.len(), shared.len());
    for (link, (key, members)) in document.links.iter().zip(shared) {
        assert_eq!(link.elements.len(), members.len());
        assert!(link.elements.iter().all(|e| e.element_class == key.to_string()));
    }
}

#[test]
fn test_nested_paths_in_export() {
    let snapshot = nested();
    let index = build_index(&snapshot);
    let document = export(&index, &ExportConfig::new(ENDPOINT)).unwrap();

    let link = &document.links[0];
    let suffixes: Vec<_> = link
        .elements
        .iter()
        .map(|e| e.id.rsplit("/submodel-elements/").next().unwrap().to_string())
        .collect();
    assert_eq!(
        suffixes,
        vec![
            "nested.Outer.items[0]",
            "nested.Outer.items[1]",
            "nested.Outer.items[2]",
            "nested.Label",
        ]
    );
    assert_eq!(link.elements[3].name, "MultiLanguageProperty");
}

#[test]
fn test_root_key_singleton_not_exported() {
    let snapshot = nested();
    let index = build_index(&snapshot);
    let root_key = SemanticKey::global("https://example.org/semantic/sm");

    assert_eq!(index.class(&root_key).unwrap().len(), 1);
    let document = export(&index, &ExportConfig::new(ENDPOINT)).unwrap();
    assert!(
        document
            .links
            .iter()
            .flat_map(|l| &l.elements)
            .all(|e| e.element_class != root_key.to_string())
    );
}

#[test]
fn test_rebuild_from_other_snapshot_replaces_results() {
    let first = nested();
    let (second, _) = two_shared_one_lone();

    let a = build_index(&first);
    let b = build_index(&second);
    assert_ne!(a, b);
    assert!(b.class(&SemanticKey::global("https://example.org/semantic/sm")).is_none());
}
