//! End-to-end normalization of whole configuration documents.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use rdio_admin_core::model::default_options_map;
use rdio_admin_core::{Config, OBSOLETE_OPTIONS, normalize};

// ── Fixtures ────────────────────────────────────────────────────────

fn legacy_document() -> Value {
    json!({
        "access": [{"_id": 1, "code": "s3cret", "ident": "Fire crews", "systems": "*"}],
        "apiKeys": [{"_id": 1, "key": "d4f0", "systems": "*"}],
        "dirWatch": [{"_id": 1, "directory": "/srv/audio", "type": "trunk-recorder"}],
        "users": [{"_id": 4, "email": "ops@example.org"}],
        "groups": [
            {"_id": 2, "label": "police"},
            {"_id": 1, "label": "Fire"},
            {"_id": 3, "label": "EMS"},
        ],
        "tags": [{"_id": 1, "label": "Tac"}, {"_id": 2, "label": "dispatch"}],
        "systems": [
            {
                "_id": 10,
                "id": 21,
                "label": "County P25",
                "units": [
                    {"id": 70012, "label": "Medic 12"},
                    {"_id": 3, "unitRef": 70013, "label": "Medic 13"},
                ],
                "talkgroups": [
                    {"id": 5101, "groupId": 1, "tagId": 2, "label": "Fire Dispatch"},
                    {"_id": 8, "talkgroupRef": 5102, "groupId": "none", "label": "Fire Tac"},
                ],
                "sites": [{"_id": 1, "siteRef": 1, "label": "North"}],
            },
            {"id": 22, "label": "Conventional"},
        ],
    })
}

fn has_legacy_id(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.contains_key("_id") || map.values().any(has_legacy_id),
        Value::Array(items) => items.iter().any(has_legacy_id),
        _ => false,
    }
}

fn labels(document: &Value, collection: &str) -> Vec<String> {
    document[collection]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["label"].as_str().unwrap().to_owned())
        .collect()
}

// ── Scenarios ───────────────────────────────────────────────────────

#[test]
fn legacy_document_normalizes_in_one_pass() {
    let normalized = normalize(legacy_document());
    let doc = &normalized.document;

    assert!(!has_legacy_id(doc), "legacy ids survived: {doc:#}");
    assert!(doc.get("apiKeys").is_none());
    assert!(doc.get("dirWatch").is_none());
    assert_eq!(doc["apikeys"], json!([{"id": 1, "key": "d4f0", "systems": "*"}]));
    assert_eq!(doc["users"], json!([{"id": 4, "email": "ops@example.org"}]));

    assert_eq!(labels(doc, "groups"), vec!["EMS", "Fire", "police"]);
    assert_eq!(labels(doc, "tags"), vec!["dispatch", "Tac"]);

    assert_eq!(
        doc["systems"][0],
        json!({
            "id": 10,
            "systemRef": 21,
            "label": "County P25",
            "units": [
                {"unitRef": 70012, "label": "Medic 12", "unitFrom": null, "unitTo": null},
                {"id": 3, "unitRef": 70013, "label": "Medic 13", "unitFrom": null, "unitTo": null},
            ],
            "talkgroups": [
                {"talkgroupRef": 5101, "groupIds": [1], "tagId": 2, "label": "Fire Dispatch"},
                {"id": 8, "talkgroupRef": 5102, "label": "Fire Tac"},
            ],
            "sites": [{"id": 1, "siteRef": 1, "label": "North"}],
        })
    );
    assert_eq!(
        doc["systems"][1],
        json!({"systemRef": 22, "label": "Conventional", "sites": []})
    );

    assert_eq!(doc["options"], Value::Object(default_options_map()));
    assert!(!normalized.report.is_noop());
}

#[test]
fn normalization_is_idempotent() {
    let first = normalize(legacy_document());
    let second = normalize(first.document.clone());
    assert_eq!(second.document, first.document);
    assert!(second.report.is_noop(), "second pass changed: {:?}", second.report);
}

#[test]
fn canonical_document_is_a_fixed_point() {
    let canonical = json!({
        "apikeys": [{"id": 1, "key": "k"}],
        "groups": [{"id": 1, "label": "a"}, {"id": 2, "label": "B"}],
        "systems": [{
            "id": 1,
            "systemRef": 11,
            "sites": [],
            "units": [{"id": 1, "unitRef": 5, "unitFrom": null, "unitTo": null}],
            "talkgroups": [{"id": 1, "talkgroupRef": 100, "groupIds": [1]}],
        }],
        "options": Value::Object(default_options_map()),
    });
    let normalized = normalize(canonical.clone());
    assert_eq!(normalized.document, canonical);
    assert!(normalized.report.is_noop());
}

#[test]
fn options_merge_keeps_input_and_drops_obsolete_keys() {
    let mut options = serde_json::Map::new();
    options.insert("baseUrl".into(), json!("x"));
    for key in OBSOLETE_OPTIONS {
        options.insert((*key).to_owned(), json!(true));
    }
    let normalized = normalize(json!({"options": options}));

    let mut expected = default_options_map();
    expected.insert("baseUrl".into(), json!("x"));
    assert_eq!(normalized.document["options"], Value::Object(expected));
    assert_eq!(normalized.report.options_pruned, OBSOLETE_OPTIONS.len());
}

#[test]
fn normalized_legacy_document_reads_as_typed_config() {
    let config = Config::try_from(normalize(legacy_document())).unwrap();
    let systems = config.systems.unwrap();
    assert_eq!(systems.len(), 2);
    assert_eq!(systems[1].system_ref, Some(json!(22)));
    assert_eq!(systems[1].id, None);
    assert_eq!(config.apikeys.unwrap()[0].id, Some(json!(1)));
    assert_eq!(config.options.keypad_beeps, "uniden");
}

#[test]
fn accented_group_labels_sort_beside_their_base_letter() {
    let normalized = normalize(json!({
        "groups": [{"label": "ezra"}, {"label": "éclair"}, {"label": "Zulu"}],
        "tags": [{"label": "Öffentlich"}, {"label": "Zoll"}, {"label": "oben"}],
    }));
    assert_eq!(labels(&normalized.document, "groups"), vec!["éclair", "ezra", "Zulu"]);
    assert_eq!(labels(&normalized.document, "tags"), vec!["oben", "Öffentlich", "Zoll"]);
}

#[test]
fn second_pass_reads_a_bare_storage_id_as_a_reference() {
    let first = normalize(json!({
        "systems": [{"_id": 5, "talkgroups": [{"_id": 3}], "units": [{"_id": 9}]}],
    }));
    assert_eq!(first.document["systems"][0]["id"], json!(5));
    assert_eq!(first.document["systems"][0]["talkgroups"][0], json!({"id": 3}));

    let second = normalize(first.document.clone());
    let system = &second.document["systems"][0];
    assert_eq!(system.get("id"), None);
    assert_eq!(system["systemRef"], json!(5));
    assert_eq!(system["talkgroups"][0], json!({"talkgroupRef": 3}));
    assert_eq!(
        system["units"][0],
        json!({"id": 9, "unitRef": null, "unitFrom": null, "unitTo": null})
    );
    assert_eq!(second.report.refs_extracted, 2);
}
