//! SceneDocument - the in-memory scene and its mutation protocol

use crate::component::{ColliderInstance, ColliderShape, ComponentInstance};
use crate::edit::{apply_edit, PropertyEdit};
use crate::node::{SceneObjectNode, DEFAULT_OBJECT_NAME};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tessera_core::{is_reserved_key, IdAllocator, ObjectId, Result, TesseraError};
use tessera_schema::{ComponentSchema, ComponentScope, PropertyType, SchemaTables};
use uuid::Uuid;

/// A scene being edited: a forest of objects plus the static components
///
/// Every mutation either succeeds completely or returns an error with the
/// document unchanged.
#[derive(Debug, Clone, Default)]
pub struct SceneDocument {
    objects: Vec<SceneObjectNode>,
    static_components: Vec<ComponentInstance>,
    ids: IdAllocator,
}

impl SceneDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from loaded parts, seeding the id allocator above every id present
    pub fn from_parts(
        objects: Vec<SceneObjectNode>,
        static_components: Vec<ComponentInstance>,
    ) -> Self {
        let mut doc = Self {
            objects,
            static_components,
            ids: IdAllocator::new(),
        };
        if let Some(max) = doc.iter().map(|node| node.id).max() {
            doc.ids.ensure_above(max);
        }
        doc
    }

    pub fn objects(&self) -> &[SceneObjectNode] {
        &self.objects
    }

    pub fn static_components(&self) -> &[ComponentInstance] {
        &self.static_components
    }

    /// The id the next `add_object` will use, `None` once ids are exhausted
    pub fn next_id(&self) -> Option<ObjectId> {
        self.ids.peek()
    }

    /// Depth-first pre-order walk over every node in the forest
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            stack: self.objects.iter().rev().collect(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.objects.iter().map(SceneObjectNode::subtree_len).sum()
    }

    pub fn find(&self, id: ObjectId) -> Option<&SceneObjectNode> {
        self.iter().find(|node| node.id == id)
    }

    pub fn find_mut(&mut self, id: ObjectId) -> Option<&mut SceneObjectNode> {
        find_in_mut(&mut self.objects, id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.find(id).is_some()
    }

    /// Attachable components in traversal order, as `(type, data)` pairs
    pub fn attachable_components(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.iter()
            .flat_map(|node| node.components.iter())
            .map(|c| (c.id.as_str(), &c.data))
    }

    /// Static components in document order, as `(type, data)` pairs
    pub fn static_component_data(&self) -> impl Iterator<Item = (&str, &Map<String, Value>)> {
        self.static_components.iter().map(|c| (c.id.as_str(), &c.data))
    }

    pub fn static_component(&self, uuid: &str) -> Option<&ComponentInstance> {
        self.static_components.iter().find(|c| c.uuid() == Some(uuid))
    }

    // ---- hierarchy ----

    /// Flip the expanded flag of a node. Returns the new value.
    pub fn toggle_expand(&mut self, id: ObjectId) -> Result<bool> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        node.expanded = !node.expanded;
        log::debug!("Object {} expanded = {}", id, node.expanded);
        Ok(node.expanded)
    }

    /// Create a new object under `parent`, or at the root when `None`
    pub fn add_object(&mut self, parent: Option<ObjectId>) -> Result<ObjectId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(stale_object(parent));
            }
        }

        let id = self.ids.allocate().ok_or(TesseraError::IdsExhausted)?;
        let node = SceneObjectNode::new(id, DEFAULT_OBJECT_NAME);
        match parent.and_then(|p| self.find_mut(p)) {
            Some(parent_node) => parent_node.children.push(node),
            None => self.objects.push(node),
        }
        log::debug!("Added object {} under {:?}", id, parent);
        Ok(id)
    }

    /// Remove every node carrying `id`, at any depth. Returns how many were removed.
    pub fn delete_object(&mut self, id: ObjectId) -> Result<usize> {
        if !self.contains(id) {
            return Err(stale_object(id));
        }
        let removed = remove_in(&mut self.objects, id);
        log::debug!("Deleted {} node(s) with id {}", removed, id);
        Ok(removed)
    }

    pub fn rename_object(&mut self, id: ObjectId, name: impl Into<String>) -> Result<()> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        node.name = name.into();
        log::debug!("Renamed object {} to {:?}", id, node.name);
        Ok(())
    }

    // ---- attachable components ----

    /// Attach a new component of `type_id` to a node. Returns the new component's uuid.
    pub fn add_component(
        &mut self,
        id: ObjectId,
        type_id: &str,
        schemas: &SchemaTables,
    ) -> Result<String> {
        let node = self.find(id).ok_or_else(|| stale_object(id))?;
        let schema = schemas
            .attachable()
            .get(type_id)
            .ok_or_else(|| TesseraError::SchemaNotFound(type_id.to_string()))?;
        if node.has_component(type_id) {
            return Err(TesseraError::ComponentAlreadyPresent {
                owner: format!("object {}", id),
                component: type_id.to_string(),
            });
        }

        let uuid = self.fresh_uuid();
        let component = ComponentInstance::from_schema(schema, uuid.clone());
        if let Some(node) = self.find_mut(id) {
            node.components.push(component);
        }
        log::debug!("Added {} ({}) to object {}", type_id, uuid, id);
        Ok(uuid)
    }

    /// Remove the component with `uuid` from a node
    pub fn delete_component(&mut self, id: ObjectId, uuid: &str) -> Result<ComponentInstance> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        let position = node
            .components
            .iter()
            .position(|c| c.uuid() == Some(uuid))
            .ok_or_else(|| stale_component(uuid))?;
        let removed = node.components.remove(position);
        log::debug!("Deleted {} ({}) from object {}", removed.id, uuid, id);
        Ok(removed)
    }

    /// Edit one property of an attached component
    pub fn edit_component_property(
        &mut self,
        id: ObjectId,
        uuid: &str,
        property: &str,
        edit: &PropertyEdit,
        schemas: &SchemaTables,
    ) -> Result<()> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        let component = node.component_mut(uuid).ok_or_else(|| stale_component(uuid))?;
        edit_instance(component, ComponentScope::Attachable, property, edit, schemas)?;
        log::debug!("Set {}.{} on object {}", component.id, property, id);
        Ok(())
    }

    // ---- static components ----

    /// Add a static component of `type_id`. Returns its uuid.
    pub fn add_static_component(
        &mut self,
        type_id: &str,
        schemas: &SchemaTables,
    ) -> Result<String> {
        let schema = schemas
            .statics()
            .get(type_id)
            .ok_or_else(|| TesseraError::SchemaNotFound(type_id.to_string()))?;
        if self.static_components.iter().any(|c| c.id == type_id) {
            return Err(TesseraError::ComponentAlreadyPresent {
                owner: "the scene".to_string(),
                component: type_id.to_string(),
            });
        }

        let uuid = self.fresh_uuid();
        self.static_components
            .push(ComponentInstance::from_schema(schema, uuid.clone()));
        log::debug!("Added static {} ({})", type_id, uuid);
        Ok(uuid)
    }

    pub fn delete_static_component(&mut self, uuid: &str) -> Result<ComponentInstance> {
        let position = self
            .static_components
            .iter()
            .position(|c| c.uuid() == Some(uuid))
            .ok_or_else(|| stale_component(uuid))?;
        let removed = self.static_components.remove(position);
        log::debug!("Deleted static {} ({})", removed.id, uuid);
        Ok(removed)
    }

    pub fn edit_static_property(
        &mut self,
        uuid: &str,
        property: &str,
        edit: &PropertyEdit,
        schemas: &SchemaTables,
    ) -> Result<()> {
        let component = self
            .static_components
            .iter_mut()
            .find(|c| c.uuid() == Some(uuid))
            .ok_or_else(|| stale_component(uuid))?;
        edit_instance(component, ComponentScope::Static, property, edit, schemas)?;
        log::debug!("Set static {}.{}", component.id, property);
        Ok(())
    }

    // ---- colliders ----

    pub fn add_collider(&mut self, id: ObjectId, shape: ColliderShape) -> Result<()> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        if node.colliders.iter().any(|c| c.shape() == Some(shape)) {
            return Err(TesseraError::ColliderAlreadyPresent {
                object: id.to_string(),
                shape: shape.name().to_string(),
            });
        }
        node.colliders.push(ColliderInstance::new(shape));
        log::debug!("Added {} to object {}", shape, id);
        Ok(())
    }

    /// Remove the collider at `index` in a node's collider list
    pub fn delete_collider(&mut self, id: ObjectId, index: usize) -> Result<ColliderInstance> {
        let node = self.find_mut(id).ok_or_else(|| stale_object(id))?;
        if index >= node.colliders.len() {
            log::warn!("Object {} has no collider at index {}", id, index);
            return Err(TesseraError::StaleReference(format!(
                "collider {} on object {}",
                index, id
            )));
        }
        let removed = node.colliders.remove(index);
        log::debug!("Deleted collider {} from object {}", index, id);
        Ok(removed)
    }

    // ---- availability ----

    /// Attachable types in schema-table order that the node does not carry yet
    pub fn available_component_types<'s>(
        &self,
        id: ObjectId,
        schemas: &'s SchemaTables,
    ) -> Result<Vec<&'s str>> {
        let node = self.find(id).ok_or_else(|| stale_object(id))?;
        Ok(schemas
            .attachable()
            .names()
            .into_iter()
            .filter(|name| !node.has_component(name))
            .collect())
    }

    /// Static types in schema-table order not yet present in the document
    pub fn available_static_component_types<'s>(&self, schemas: &'s SchemaTables) -> Vec<&'s str> {
        schemas
            .statics()
            .names()
            .into_iter()
            .filter(|name| !self.static_components.iter().any(|c| c.id == *name))
            .collect()
    }

    /// Collider shapes in catalog order that the node does not carry yet
    pub fn available_collider_types(&self, id: ObjectId) -> Result<Vec<ColliderShape>> {
        let node = self.find(id).ok_or_else(|| stale_object(id))?;
        Ok(ColliderShape::ALL
            .into_iter()
            .filter(|shape| !node.colliders.iter().any(|c| c.shape() == Some(*shape)))
            .collect())
    }

    // ---- diagnostics ----

    /// Component uuids that occur more than once, in first-duplicate order
    pub fn duplicate_uuids(&self) -> Vec<String> {
        let uuids = self
            .iter()
            .flat_map(|node| node.components.iter())
            .chain(self.static_components.iter())
            .filter_map(ComponentInstance::uuid);
        duplicates(uuids).into_iter().map(str::to_string).collect()
    }

    /// Node ids that occur more than once in the forest
    pub fn duplicate_ids(&self) -> Vec<ObjectId> {
        duplicates(self.iter().map(|node| node.id))
    }

    fn uuid_in_use(&self, uuid: &str) -> bool {
        self.static_component(uuid).is_some()
            || self.iter().any(|node| node.component(uuid).is_some())
    }

    fn fresh_uuid(&self) -> String {
        loop {
            let uuid = Uuid::new_v4().to_string();
            if !self.uuid_in_use(&uuid) {
                return uuid;
            }
        }
    }
}

/// Pre-order iterator over a scene forest
pub struct Nodes<'a> {
    stack: Vec<&'a SceneObjectNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a SceneObjectNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn find_in_mut(nodes: &mut [SceneObjectNode], id: ObjectId) -> Option<&mut SceneObjectNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_in(nodes: &mut Vec<SceneObjectNode>, id: ObjectId) -> usize {
    let before = nodes.len();
    nodes.retain(|node| node.id != id);
    let mut removed = before - nodes.len();
    for node in nodes.iter_mut() {
        removed += remove_in(&mut node.children, id);
    }
    removed
}

fn duplicates<T: Eq + std::hash::Hash + Copy>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            dups.push(item);
        }
    }
    dups
}

fn edit_instance(
    component: &mut ComponentInstance,
    scope: ComponentScope,
    property: &str,
    edit: &PropertyEdit,
    schemas: &SchemaTables,
) -> Result<()> {
    if is_reserved_key(property) {
        return Err(TesseraError::ReservedProperty(property.to_string()));
    }
    let schema = schemas
        .get(scope, &component.id)
        .ok_or_else(|| TesseraError::SchemaNotFound(component.id.clone()))?;
    let property_type = property_type_of(schema, property)?;
    apply_edit(&mut component.data, property, property_type, edit)
}

fn property_type_of(schema: &ComponentSchema, property: &str) -> Result<PropertyType> {
    schema
        .get(property)
        .ok_or_else(|| TesseraError::SchemaNotFound(format!("{}.{}", schema.name, property)))
}

fn stale_object(id: ObjectId) -> TesseraError {
    log::warn!("Object {} no longer exists", id);
    TesseraError::StaleReference(format!("object {}", id))
}

fn stale_component(uuid: &str) -> TesseraError {
    log::warn!("Component {} no longer exists", uuid);
    TesseraError::StaleReference(format!("component {}", uuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_schema::{infer_schemas, ExtensionRules};

    fn builtin_schemas() -> SchemaTables {
        infer_schemas(std::iter::empty(), std::iter::empty(), &ExtensionRules::builtin())
    }

    fn node(id: u64, name: &str) -> SceneObjectNode {
        SceneObjectNode::new(ObjectId(id), name)
    }

    fn sample() -> SceneDocument {
        SceneDocument::from_parts(
            vec![
                node(1, "Player").with_child(node(2, "Camera")),
                node(3, "Level").with_child(node(4, "Wall").with_child(node(5, "Brick"))),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_iter_is_preorder() {
        let doc = sample();
        let ids: Vec<u64> = doc.iter().map(|n| n.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(doc.node_count(), 5);
    }

    #[test]
    fn test_allocator_starts_above_loaded_ids() {
        let mut doc = sample();
        let id = doc.add_object(None).unwrap();
        assert_eq!(id, ObjectId(6));
        assert_eq!(doc.find(id).unwrap().name, "New GameObject");
    }

    #[test]
    fn test_add_object_under_parent() {
        let mut doc = sample();
        let id = doc.add_object(Some(ObjectId(4))).unwrap();
        let wall = doc.find(ObjectId(4)).unwrap();
        assert_eq!(wall.children.last().unwrap().id, id);
        assert!(wall.children.last().unwrap().expanded);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut doc = SceneDocument::new();
        let a = doc.add_object(None).unwrap();
        let b = doc.add_object(None).unwrap();
        doc.delete_object(b).unwrap();
        let c = doc.add_object(None).unwrap();
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_delete_nested_object() {
        let mut doc = sample();
        assert_eq!(doc.delete_object(ObjectId(4)).unwrap(), 1);
        assert!(doc.find(ObjectId(4)).is_none());
        assert!(doc.find(ObjectId(5)).is_none());
        assert!(doc.find(ObjectId(3)).is_some());
        assert_eq!(doc.node_count(), 3);
    }

    #[test]
    fn test_delete_removes_every_duplicate() {
        let mut doc = SceneDocument::from_parts(
            vec![node(1, "a").with_child(node(7, "dup")), node(7, "dup root")],
            Vec::new(),
        );
        assert_eq!(doc.duplicate_ids(), vec![ObjectId(7)]);
        assert_eq!(doc.delete_object(ObjectId(7)).unwrap(), 2);
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn test_add_object_after_max_id_fails() {
        let mut doc = SceneDocument::from_parts(vec![node(u64::MAX, "last")], Vec::new());
        assert_eq!(doc.next_id(), None);
        assert!(matches!(doc.add_object(None), Err(TesseraError::IdsExhausted)));
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn test_stale_object_leaves_document_unchanged() {
        let mut doc = sample();
        let before = doc.objects().to_vec();
        let missing = ObjectId(99);
        assert!(matches!(doc.delete_object(missing), Err(TesseraError::StaleReference(_))));
        assert!(matches!(doc.rename_object(missing, "x"), Err(TesseraError::StaleReference(_))));
        assert!(matches!(doc.add_object(Some(missing)), Err(TesseraError::StaleReference(_))));
        assert_eq!(doc.objects(), before.as_slice());
    }

    #[test]
    fn test_toggle_and_rename() {
        let mut doc = sample();
        assert!(!doc.toggle_expand(ObjectId(2)).unwrap());
        assert!(doc.toggle_expand(ObjectId(2)).unwrap());
        doc.rename_object(ObjectId(2), "Main Camera").unwrap();
        assert_eq!(doc.find(ObjectId(2)).unwrap().name, "Main Camera");
    }

    #[test]
    fn test_builtins_available_on_empty_object() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();

        let available = doc.available_component_types(id, &schemas).unwrap();
        for name in ["Transform", "CharacterController2D", "InputComponent", "RenderComponent"] {
            assert!(available.contains(&name), "{} missing", name);
        }
        assert_eq!(available, doc.available_component_types(id, &schemas).unwrap());
    }

    #[test]
    fn test_transform_defaults() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        let uuid = doc.add_component(id, "Transform", &schemas).unwrap();

        let node = doc.find(id).unwrap();
        let transform = node.component(&uuid).unwrap();
        assert_eq!(transform.id, "Transform");
        assert_eq!(transform.get("pos"), Some(&json!([0.0, 0.0, 0.0])));
        assert_eq!(transform.get("rot"), Some(&json!([0.0, 0.0, 0.0])));
        assert_eq!(transform.state(), Some(&json!({"_state": null})));
        assert!(Uuid::parse_str(&uuid).is_ok());
        assert!(!doc.available_component_types(id, &schemas).unwrap().contains(&"Transform"));
    }

    #[test]
    fn test_component_preconditions() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        doc.add_component(id, "Transform", &schemas).unwrap();

        assert!(matches!(
            doc.add_component(id, "Transform", &schemas),
            Err(TesseraError::ComponentAlreadyPresent { .. })
        ));
        assert!(matches!(
            doc.add_component(id, "Teleporter", &schemas),
            Err(TesseraError::SchemaNotFound(_))
        ));
        assert_eq!(doc.find(id).unwrap().components.len(), 1);
    }

    #[test]
    fn test_component_uuids_are_unique() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let mut uuids = HashSet::new();
        for _ in 0..5 {
            let id = doc.add_object(None).unwrap();
            assert!(uuids.insert(doc.add_component(id, "Transform", &schemas).unwrap()));
            assert!(uuids.insert(doc.add_component(id, "InputComponent", &schemas).unwrap()));
        }
        assert!(doc.duplicate_uuids().is_empty());
    }

    #[test]
    fn test_delete_component_by_uuid() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        let transform = doc.add_component(id, "Transform", &schemas).unwrap();
        let input = doc.add_component(id, "InputComponent", &schemas).unwrap();

        let removed = doc.delete_component(id, &transform).unwrap();
        assert_eq!(removed.id, "Transform");
        let node = doc.find(id).unwrap();
        assert_eq!(node.components.len(), 1);
        assert_eq!(node.components[0].uuid(), Some(input.as_str()));

        assert!(matches!(
            doc.delete_component(id, &transform),
            Err(TesseraError::StaleReference(_))
        ));
    }

    #[test]
    fn test_static_component_added_once() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        assert_eq!(doc.available_static_component_types(&schemas), vec!["Physics"]);

        let uuid = doc.add_static_component("Physics", &schemas).unwrap();
        assert!(matches!(
            doc.add_static_component("Physics", &schemas),
            Err(TesseraError::ComponentAlreadyPresent { .. })
        ));
        assert_eq!(doc.static_components().len(), 1);
        assert!(doc.available_static_component_types(&schemas).is_empty());

        doc.delete_static_component(&uuid).unwrap();
        assert_eq!(doc.available_static_component_types(&schemas), vec!["Physics"]);
    }

    #[test]
    fn test_edit_vector_slot() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        let uuid = doc.add_component(id, "Transform", &schemas).unwrap();
        doc.find_mut(id).unwrap().component_mut(&uuid).unwrap().data["pos"] = json!([1, 2, 3]);

        doc.edit_component_property(
            id,
            &uuid,
            "pos",
            &PropertyEdit::Vector3 { index: 1, text: "5".into() },
            &schemas,
        )
        .unwrap();
        let transform = doc.find(id).unwrap().component(&uuid).unwrap();
        assert_eq!(transform.get("pos"), Some(&json!([1, 5.0, 3])));
    }

    #[test]
    fn test_edit_rejections() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        let uuid = doc.add_component(id, "CharacterController2D", &schemas).unwrap();

        let bad_float = PropertyEdit::Float("1,5".into());
        let bad_float = doc.edit_component_property(id, &uuid, "moveamt", &bad_float, &schemas);
        assert!(matches!(bad_float, Err(TesseraError::NumericParse { .. })));

        let reserved = PropertyEdit::Text("x".into());
        let reserved = doc.edit_component_property(id, &uuid, "uuid", &reserved, &schemas);
        assert!(matches!(reserved, Err(TesseraError::ReservedProperty(_))));

        let unknown = PropertyEdit::Float("1".into());
        let unknown = doc.edit_component_property(id, &uuid, "jump", &unknown, &schemas);
        assert!(matches!(unknown, Err(TesseraError::SchemaNotFound(_))));

        let controller = doc.find(id).unwrap().component(&uuid).unwrap();
        assert_eq!(controller.get("moveamt"), Some(&json!(0.0)));
        assert_eq!(controller.uuid(), Some(uuid.as_str()));
    }

    #[test]
    fn test_edit_bounds() {
        let schemas = builtin_schemas();
        let mut doc = SceneDocument::new();
        let id = doc.add_object(None).unwrap();
        let uuid = doc.add_component(id, "CharacterController2D", &schemas).unwrap();
        doc.edit_component_property(
            id,
            &uuid,
            "bounds",
            &PropertyEdit::BoundsLimit { axis: "x".into(), text: "4".into() },
            &schemas,
        )
        .unwrap();
        assert_eq!(
            doc.find(id).unwrap().component(&uuid).unwrap().get("bounds"),
            Some(&json!({"limits": {"x": {"x": 4.0}, "y": {"y": 0.0}}}))
        );
    }

    #[test]
    fn test_colliders() {
        let mut doc = sample();
        let id = ObjectId(1);
        doc.add_collider(id, ColliderShape::Cube).unwrap();
        doc.add_collider(id, ColliderShape::Point).unwrap();
        assert!(matches!(
            doc.add_collider(id, ColliderShape::Cube),
            Err(TesseraError::ColliderAlreadyPresent { .. })
        ));
        assert_eq!(
            doc.available_collider_types(id).unwrap(),
            vec![ColliderShape::RectangularPrism, ColliderShape::Octagon]
        );

        let removed = doc.delete_collider(id, 0).unwrap();
        assert_eq!(removed.shape(), Some(ColliderShape::Cube));
        let node = doc.find(id).unwrap();
        assert_eq!(node.colliders.len(), 1);
        assert_eq!(node.colliders[0].shape(), Some(ColliderShape::Point));
        assert!(matches!(doc.delete_collider(id, 5), Err(TesseraError::StaleReference(_))));
    }

    #[test]
    fn test_duplicate_uuids_reported() {
        let mut component = ComponentInstance {
            id: "Transform".into(),
            data: Map::new(),
        };
        component.data.insert("uuid".into(), json!("same"));
        let doc = SceneDocument::from_parts(
            vec![
                node(1, "a").with_component(component.clone()),
                node(2, "b").with_component(component),
            ],
            Vec::new(),
        );
        assert_eq!(doc.duplicate_uuids(), vec!["same".to_string()]);
    }
}
