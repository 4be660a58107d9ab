//! Snapshot and document fixtures.

#![allow(dead_code)]

use semantic_matcher::{Element, ElementKind, NodeId, SemanticKey, Snapshot};

pub const ENDPOINT: &str = "http://localhost:8080/api/v3.0";
pub const SHARED_KEY: &str = "https://example.org/semantic/1";
pub const LONE_KEY: &str = "https://example.org/semantic/2";

pub fn property(id_short: &str, key: Option<&str>) -> Element {
    let element = Element::new(ElementKind::Property, id_short);
    match key {
        Some(key) => element.with_semantic_key(SemanticKey::global(key)),
        None => element,
    }
}

/// Three submodels: two share [`SHARED_KEY`] on one property each, the third
/// carries [`LONE_KEY`].
pub fn two_shared_one_lone() -> (Snapshot, [NodeId; 3]) {
    let mut snapshot = Snapshot::new();
    let a = snapshot.add_root(Element::submodel("https://example.org/sm/a", "submodelA"));
    let b = snapshot.add_root(Element::submodel("https://example.org/sm/b", "submodelB"));
    let c = snapshot.add_root(Element::submodel("https://example.org/sm/c", "submodelC"));

    let pa = snapshot.add_child(a, property("Temperature", Some(SHARED_KEY))).unwrap();
    let pb = snapshot.add_child(b, property("Temp", Some(SHARED_KEY))).unwrap();
    let pc = snapshot.add_child(c, property("Pressure", Some(LONE_KEY))).unwrap();
    (snapshot, [pa, pb, pc])
}

/// A submodel with collections, a list and unkeyed elements mixed in.
pub fn nested() -> Snapshot {
    let mut snapshot = Snapshot::new();
    let sm = snapshot.add_root(
        Element::submodel("https://example.org/sm/nested", "nested")
            .with_semantic_key(SemanticKey::global("https://example.org/semantic/sm")),
    );
    let coll = snapshot
        .add_child(sm, Element::new(ElementKind::SubmodelElementCollection, "Outer"))
        .unwrap();
    snapshot.add_child(coll, property("Plain", None)).unwrap();
    let list = snapshot
        .add_child(coll, Element::new(ElementKind::SubmodelElementList, "items"))
        .unwrap();
    for i in 0..3 {
        snapshot
            .add_child(list, property(&format!("item{i}"), Some(SHARED_KEY)))
            .unwrap();
    }
    snapshot
        .add_child(
            sm,
            Element::new(ElementKind::MultiLanguageProperty, "Label").with_semantic_keys([
                SemanticKey::global(SHARED_KEY),
                SemanticKey::global(LONE_KEY),
            ]),
        )
        .unwrap();
    snapshot
}

/// AAS environment with one shell and the example submodel of the
/// repository test server, plus a second submodel sharing its semantic id.
pub const ENVIRONMENT_JSON: &str = r#"{
    "assetAdministrationShells": [
        {
            "modelType": "AssetAdministrationShell",
            "id": "https://example.org/aas/1",
            "idShort": "exampleShell",
            "assetInformation": { "assetKind": "Instance", "globalAssetId": "urn:asset" },
            "submodels": [
                { "type": "ModelReference", "keys": [
                    { "type": "Submodel", "value": "https://example.org/sm/example_submodel_1" }
                ] }
            ]
        }
    ],
    "submodels": [
        {
            "modelType": "Submodel",
            "id": "https://example.org/sm/example_submodel_1",
            "idShort": "exampleSubmodel1",
            "submodelElements": [
                {
                    "modelType": "Property",
                    "idShort": "ExampleProperty",
                    "valueType": "xs:string",
                    "value": "exampleValue",
                    "semanticId": {
                        "type": "ExternalReference",
                        "keys": [ { "type": "GlobalReference", "value": "https://example.org/semantic/1" } ]
                    }
                }
            ]
        },
        {
            "modelType": "Submodel",
            "id": "https://example.org/sm/example_submodel_2",
            "idShort": "exampleSubmodel2",
            "submodelElements": [
                {
                    "modelType": "SubmodelElementList",
                    "idShort": "items",
                    "value": [
                        { "modelType": "Property", "idShort": "first", "valueType": "xs:string" },
                        {
                            "modelType": "Property",
                            "idShort": "second",
                            "valueType": "xs:string",
                            "semanticId": {
                                "type": "ExternalReference",
                                "keys": [ { "type": "GlobalReference", "value": "https://example.org/semantic/1" } ]
                            }
                        }
                    ]
                }
            ]
        }
    ]
}"#;
