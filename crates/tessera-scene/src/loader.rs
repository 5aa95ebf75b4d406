//! Scene loading from engine JSON

use crate::document::SceneDocument;
use crate::format::RawDocument;
use std::fs;
use std::path::Path;
use tessera_core::Result;
use tessera_schema::{infer_schemas, ExtensionRules, SchemaTables};

/// A parsed document together with the schemas inferred from it
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub document: SceneDocument,
    pub schemas: SchemaTables,
}

/// Load a scene from a JSON file
pub fn read_document<P: AsRef<Path>>(path: P, rules: &ExtensionRules) -> Result<LoadedScene> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let loaded = parse_document(&content, rules)?;
    log::info!(
        "Loaded {} ({} objects, {} static components)",
        path.display(),
        loaded.document.node_count(),
        loaded.document.static_components().len()
    );
    Ok(loaded)
}

/// Load a scene from a JSON string
pub fn parse_document(content: &str, rules: &ExtensionRules) -> Result<LoadedScene> {
    let raw: RawDocument = serde_json::from_str(content)?;
    let document = SceneDocument::from_parts(raw.objects, raw.static_components);

    let schemas = infer_schemas(
        document.attachable_components(),
        document.static_component_data(),
        rules,
    );

    let duplicates = document.duplicate_uuids();
    if !duplicates.is_empty() {
        log::warn!("Scene contains duplicate component uuids: {:?}", duplicates);
    }

    Ok(LoadedScene { document, schemas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ColliderShape;
    use tessera_core::{ObjectId, TesseraError};
    use tessera_schema::{PropertyType, StructuredKind};

    const SCENE: &str = r#"{
        "objects": [
            {
                "id": 4,
                "name": "Player",
                "expanded": true,
                "components": [
                    {"id": "Spawner", "data": {
                        "uuid": "a",
                        "state": {"_state": null},
                        "rate": 2.5,
                        "cooldown": {"secs": 1, "nanos": 0}
                    }}
                ],
                "children": [
                    {"id": 9, "name": "Gun", "components": [], "children": [], "colliders": [
                        {"collider": {"PointCollider": {"point": {"x": 0.0, "y": 1.0, "z": 0.0}}}}
                    ]}
                ],
                "colliders": []
            }
        ],
        "static_components": [
            {"id": "Weather", "data": {"uuid": "w", "state": {"_state": null}, "rain": true}}
        ],
        "graphics": true
    }"#;

    #[test]
    fn test_parse_infers_schemas() {
        let loaded = parse_document(SCENE, &ExtensionRules::builtin()).unwrap();
        let spawner = loaded.schemas.attachable().get("Spawner").unwrap();
        assert_eq!(spawner.get("rate"), Some(PropertyType::Float));
        assert_eq!(
            spawner.get("cooldown"),
            Some(PropertyType::Structured(StructuredKind::Duration))
        );
        assert!(loaded.schemas.statics().contains("Weather"));
        assert!(loaded.schemas.attachable().contains("Transform"));
    }

    #[test]
    fn test_parse_builds_forest() {
        let mut loaded = parse_document(SCENE, &ExtensionRules::builtin()).unwrap();
        let gun = loaded.document.find(ObjectId(9)).unwrap();
        assert_eq!(gun.colliders[0].shape(), Some(ColliderShape::Point));
        assert!(gun.expanded);
        assert_eq!(loaded.document.add_object(None).unwrap(), ObjectId(10));
    }

    #[test]
    fn test_empty_envelope() {
        let loaded = parse_document("{}", &ExtensionRules::builtin()).unwrap();
        assert_eq!(loaded.document.node_count(), 0);
        assert!(loaded.document.static_components().is_empty());
    }

    #[test]
    fn test_malformed_input_is_load_error() {
        let err = parse_document(r#"{"objects": [{"name": 3}]}"#, &ExtensionRules::builtin())
            .unwrap_err();
        assert!(matches!(err, TesseraError::LoadParse(_)));
    }

    #[test]
    fn test_max_id_blocks_new_objects() {
        let scene = format!(r#"{{"objects": [{{"id": {}, "name": "a"}}]}}"#, u64::MAX);
        let mut loaded = parse_document(&scene, &ExtensionRules::builtin()).unwrap();
        assert!(matches!(loaded.document.add_object(None), Err(TesseraError::IdsExhausted)));
        assert_eq!(loaded.document.node_count(), 1);
    }
}
