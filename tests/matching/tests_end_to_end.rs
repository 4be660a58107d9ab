//! Snapshot → index → document scenarios.

#![allow(clippy::unwrap_used)]

use semantic_matcher::{ExportConfig, Matcher, SemanticKey, build_index, export};

use crate::helpers::fixtures::{ENDPOINT, LONE_KEY, SHARED_KEY, two_shared_one_lone};

#[test]
fn test_two_roots_share_one_key() {
    let (snapshot, _) = two_shared_one_lone();
    let index = build_index(&snapshot);

    assert_eq!(index.len(), 2);
    assert_eq!(index.class(&SemanticKey::global(SHARED_KEY)).unwrap().len(), 2);
    assert_eq!(index.class(&SemanticKey::global(LONE_KEY)).unwrap().len(), 1);

    let document = export(&index, &ExportConfig::new(ENDPOINT)).unwrap();
    assert_eq!(document.links.len(), 1);
    let link = &document.links[0];
    assert_eq!(link.elements.len(), 2);
    assert!(link.elements.iter().all(|e| e.element_class == SHARED_KEY));
}

#[test]
fn test_members_name_their_owner() {
    let (snapshot, _) = two_shared_one_lone();
    let index = build_index(&snapshot);
    let document = export(&index, &ExportConfig::new(ENDPOINT)).unwrap();

    let elements = &document.links[0].elements;
    assert_eq!(elements[0].model, "https://example.org/sm/a");
    assert_eq!(elements[1].model, "https://example.org/sm/b");
    assert_eq!(
        elements[0].id,
        format!(
            "{ENDPOINT}/aHR0cHM6Ly9leGFtcGxlLm9yZy9zbS9h/submodel/submodel-elements/submodelA.Temperature"
        )
    );
    assert_eq!(elements[1].name, "Property");
    assert_eq!(elements[1].tool, "BaSyx");
}

#[test]
fn test_xml_document() {
    let (snapshot, _) = two_shared_one_lone();
    let matcher = Matcher::new(snapshot, ExportConfig::new(ENDPOINT));
    let xml = matcher.matches_to_xml().unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<links>\n"));
    assert_eq!(xml.matches("<link ").count(), 1);
    assert_eq!(xml.matches("<element ").count(), 2);
    assert_eq!(
        xml.matches(&format!("<elementClass>{SHARED_KEY}</elementClass>"))
            .count(),
        2
    );
    assert!(!xml.contains(LONE_KEY));
    assert!(xml.contains(&format!(
        "<link type=\"Equivalence\" comment=\"Created by indexing {ENDPOINT} via https://github.com/rwth-iat/aas-repository-semantic-matcher\">"
    )));
}
