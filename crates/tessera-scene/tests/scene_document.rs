//! Load, edit and save a scene file end to end

use serde_json::{json, Value};
use std::fs;
use tessera_core::ObjectId;
use tessera_scene::{
    has_empty_strings, read_document, save_document, EditSession, PropertyEdit, Selection,
};
use tessera_schema::{ExtensionRule, ExtensionRules, PropertyType, StructuredKind};

fn scene_json() -> Value {
    json!({
        "objects": [
            {
                "id": 1,
                "name": "Player",
                "expanded": true,
                "components": [
                    {"id": "Transform", "data": {
                        "uuid": "t-1",
                        "state": {"_state": null},
                        "pos": [1, 2, 3],
                        "rot": [0, 0, 0]
                    }},
                    {"id": "Spawner", "data": {
                        "uuid": "s-1",
                        "state": {"_state": null},
                        "interval": {"secs": 2, "nanos": 0},
                        "label": ""
                    }}
                ],
                "children": [
                    {
                        "id": 2,
                        "name": "Camera",
                        "expanded": false,
                        "components": [],
                        "children": [],
                        "colliders": [],
                        "layer": 3
                    }
                ],
                "colliders": [{"collider": {"CubeCollider": {"side_length": 2.0}}}]
            }
        ],
        "static_components": [
            {"id": "Physics", "data": {"uuid": "p-1", "state": {"_state": null}}}
        ],
        "graphics": false
    })
}

fn write_scene(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("level.json");
    fs::write(&path, serde_json::to_string_pretty(&scene_json()).unwrap()).unwrap();
    path
}

fn rules() -> ExtensionRules {
    let mut rules = ExtensionRules::builtin();
    rules.push(ExtensionRule::for_component("Spawner", "interval", StructuredKind::Duration));
    rules
}

#[test]
fn test_load_edit_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scene(&dir);

    let mut session = EditSession::new(rules());
    session.load_file(&path).unwrap();

    let spawner = session.schemas().attachable().get("Spawner").unwrap();
    assert_eq!(
        spawner.get("interval"),
        Some(PropertyType::Structured(StructuredKind::Duration))
    );

    session
        .edit_component_property(
            ObjectId(1),
            "t-1",
            "pos",
            &PropertyEdit::Vector3 { index: 1, text: "5".into() },
        )
        .unwrap();
    session
        .edit_component_property(
            ObjectId(1),
            "s-1",
            "interval",
            &PropertyEdit::DurationSeconds("4".into()),
        )
        .unwrap();
    let child = session.add_object(Some(ObjectId(2))).unwrap();
    assert_eq!(child, ObjectId(3));

    save_document(&path, session.document(), true).unwrap();
    let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    let player = &saved["objects"][0];
    assert_eq!(player["components"][0]["data"]["pos"], json!([1, 5.0, 3]));
    assert_eq!(player["components"][1]["data"]["interval"], json!({"secs": 4, "nanos": 0}));
    assert_eq!(player["components"][1]["data"]["label"], Value::Null);
    assert_eq!(player["children"][0]["layer"], json!(3));
    assert_eq!(player["children"][0]["children"][0]["name"], json!("New GameObject"));
    assert_eq!(player["colliders"][0], json!({"collider": {"CubeCollider": {"side_length": 2.0}}}));
    assert_eq!(saved["graphics"], json!(true));
    assert!(!has_empty_strings(&saved));

    // The saved file loads again with the same ids and schemas
    let reloaded = read_document(&path, &rules()).unwrap();
    assert_eq!(reloaded.document.node_count(), 3);
    assert!(reloaded.schemas.attachable().contains("Spawner"));
    assert_eq!(reloaded.document.duplicate_ids(), Vec::<ObjectId>::new());
}

#[test]
fn test_static_component_added_once_per_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scene(&dir);

    let mut session = EditSession::new(rules());
    session.load_file(&path).unwrap();

    assert!(session.add_static_component("Physics").is_err());
    assert!(session.available_static_component_types().is_empty());
    assert_eq!(session.document().static_components().len(), 1);
}

#[test]
fn test_missing_file_keeps_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_scene(&dir);

    let mut session = EditSession::new(rules());
    session.load_file(&path).unwrap();
    session.select_object(ObjectId(2)).unwrap();

    assert!(session.load_file(dir.path().join("missing.json")).is_err());
    assert_eq!(session.document().node_count(), 2);
    assert_eq!(session.selection(), &Selection::Object(ObjectId(2)));
}
