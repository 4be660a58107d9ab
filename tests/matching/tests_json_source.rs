//! Snapshots read from AAS JSON.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use semantic_matcher::{
    ExportConfig, JsonSource, Matcher, MatcherError, SourceError, SubmodelSource,
};

use crate::helpers::fixtures::{ENDPOINT, ENVIRONMENT_JSON, SHARED_KEY};

#[test]
fn test_environment_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ENVIRONMENT_JSON.as_bytes()).unwrap();

    let matcher = Matcher::new(JsonSource::from_path(file.path()), ExportConfig::new(ENDPOINT));
    let document = matcher.matches().unwrap();

    assert_eq!(document.links.len(), 1);
    let ids: Vec<_> = document.links[0].elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "http://localhost:8080/api/v3.0/aHR0cHM6Ly9leGFtcGxlLm9yZy9zbS9leGFtcGxlX3N1Ym1vZGVsXzE=/submodel/submodel-elements/exampleSubmodel1.ExampleProperty",
            "http://localhost:8080/api/v3.0/aHR0cHM6Ly9leGFtcGxlLm9yZy9zbS9leGFtcGxlX3N1Ym1vZGVsXzI=/submodel/submodel-elements/exampleSubmodel2.items[1]",
        ]
    );
    assert!(document.links[0].elements.iter().all(|e| e.element_class == SHARED_KEY));
}

#[test]
fn test_shell_ids_attached_to_entries() {
    let snapshot = JsonSource::from_bytes(ENVIRONMENT_JSON).fetch().unwrap();
    let index = semantic_matcher::build_index(&snapshot);

    let class = index
        .class(&semantic_matcher::SemanticKey::global(SHARED_KEY))
        .unwrap();
    let shells: Vec<_> = class
        .iter()
        .map(|e| e.parent_shell.as_ref().map(|s| s.as_str()))
        .collect();
    assert_eq!(shells, vec![Some("https://example.org/aas/1"), None]);
}

#[test]
fn test_missing_file_is_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let matcher = Matcher::new(
        JsonSource::from_path(dir.path().join("absent.json")),
        ExportConfig::new(ENDPOINT),
    );
    assert!(matches!(
        matcher.matches_to_xml(),
        Err(MatcherError::SourceFetch(SourceError::Io(_)))
    ));
}
