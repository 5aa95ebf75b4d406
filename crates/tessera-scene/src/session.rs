//! Edit session: the document, its schemas and the current selection

use crate::component::{ColliderInstance, ColliderShape, ComponentInstance};
use crate::document::SceneDocument;
use crate::edit::PropertyEdit;
use crate::format::SerializedDocument;
use crate::loader::{read_document, LoadedScene};
use crate::preview::PreviewHost;
use crate::saver::export_document;
use std::path::Path;
use tessera_core::{ObjectId, Result, TesseraError};
use tessera_schema::{infer_schemas, ExtensionRules, SchemaTables};

/// What the inspector is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Object(ObjectId),
    /// A static component, by uuid
    Static(String),
}

/// Token for one load request. Only the most recently issued ticket may
/// replace the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns everything one editing session works on
pub struct EditSession {
    document: SceneDocument,
    schemas: SchemaTables,
    rules: ExtensionRules,
    selection: Selection,
    generation: u64,
}

impl EditSession {
    /// Start with an empty document and the built-in schemas
    pub fn new(rules: ExtensionRules) -> Self {
        let schemas = infer_schemas(std::iter::empty(), std::iter::empty(), &rules);
        Self {
            document: SceneDocument::new(),
            schemas,
            rules,
            selection: Selection::None,
            generation: 0,
        }
    }

    pub fn document(&self) -> &SceneDocument {
        &self.document
    }

    pub fn schemas(&self) -> &SchemaTables {
        &self.schemas
    }

    pub fn rules(&self) -> &ExtensionRules {
        &self.rules
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ---- loading ----

    /// Issue a ticket for a new load, superseding any load still in flight
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Apply the outcome of a load.
    ///
    /// Returns `Ok(true)` when the document was replaced and `Ok(false)` when
    /// the ticket was superseded. A failed load keeps the current document.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedScene>,
    ) -> Result<bool> {
        if ticket.0 != self.generation {
            log::warn!(
                "Discarding superseded load (ticket {}, current {})",
                ticket.0,
                self.generation
            );
            return Ok(false);
        }

        let loaded = result?;
        self.document = loaded.document;
        self.schemas = loaded.schemas;
        self.selection = Selection::None;
        Ok(true)
    }

    /// Load a file synchronously, replacing the document on success
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let ticket = self.begin_load();
        let result = read_document(path, &self.rules);
        self.complete_load(ticket, result).map(|_| ())
    }

    // ---- selection ----

    pub fn select_object(&mut self, id: ObjectId) -> Result<()> {
        if !self.document.contains(id) {
            return Err(TesseraError::StaleReference(format!("object {}", id)));
        }
        self.selection = Selection::Object(id);
        Ok(())
    }

    pub fn select_static(&mut self, uuid: &str) -> Result<()> {
        if self.document.static_component(uuid).is_none() {
            return Err(TesseraError::StaleReference(format!("component {}", uuid)));
        }
        self.selection = Selection::Static(uuid.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Drop the selection if its target is gone
    fn refresh_selection(&mut self) {
        let alive = match &self.selection {
            Selection::None => true,
            Selection::Object(id) => self.document.contains(*id),
            Selection::Static(uuid) => self.document.static_component(uuid).is_some(),
        };
        if !alive {
            log::debug!("Selection {:?} no longer exists, clearing", self.selection);
            self.selection = Selection::None;
        }
    }

    // ---- mutations ----

    pub fn toggle_expand(&mut self, id: ObjectId) -> Result<bool> {
        self.document.toggle_expand(id)
    }

    pub fn add_object(&mut self, parent: Option<ObjectId>) -> Result<ObjectId> {
        self.document.add_object(parent)
    }

    pub fn delete_object(&mut self, id: ObjectId) -> Result<usize> {
        let removed = self.document.delete_object(id)?;
        self.refresh_selection();
        Ok(removed)
    }

    pub fn rename_object(&mut self, id: ObjectId, name: impl Into<String>) -> Result<()> {
        self.document.rename_object(id, name)
    }

    pub fn add_component(&mut self, id: ObjectId, type_id: &str) -> Result<String> {
        self.document.add_component(id, type_id, &self.schemas)
    }

    pub fn delete_component(&mut self, id: ObjectId, uuid: &str) -> Result<ComponentInstance> {
        self.document.delete_component(id, uuid)
    }

    pub fn edit_component_property(
        &mut self,
        id: ObjectId,
        uuid: &str,
        property: &str,
        edit: &PropertyEdit,
    ) -> Result<()> {
        self.document
            .edit_component_property(id, uuid, property, edit, &self.schemas)
    }

    pub fn add_static_component(&mut self, type_id: &str) -> Result<String> {
        self.document.add_static_component(type_id, &self.schemas)
    }

    pub fn delete_static_component(&mut self, uuid: &str) -> Result<ComponentInstance> {
        let removed = self.document.delete_static_component(uuid)?;
        self.refresh_selection();
        Ok(removed)
    }

    pub fn edit_static_property(
        &mut self,
        uuid: &str,
        property: &str,
        edit: &PropertyEdit,
    ) -> Result<()> {
        self.document
            .edit_static_property(uuid, property, edit, &self.schemas)
    }

    pub fn add_collider(&mut self, id: ObjectId, shape: ColliderShape) -> Result<()> {
        self.document.add_collider(id, shape)
    }

    pub fn delete_collider(&mut self, id: ObjectId, index: usize) -> Result<ColliderInstance> {
        self.document.delete_collider(id, index)
    }

    pub fn available_component_types(&self, id: ObjectId) -> Result<Vec<&str>> {
        self.document.available_component_types(id, &self.schemas)
    }

    pub fn available_static_component_types(&self) -> Vec<&str> {
        self.document.available_static_component_types(&self.schemas)
    }

    // ---- output ----

    pub fn export(&self) -> Result<SerializedDocument> {
        export_document(&self.document)
    }

    /// Export the document and hand it to a preview host
    pub fn run_preview(&self, host: &mut dyn PreviewHost) -> Result<()> {
        let payload = self.export()?.to_json_string(false)?;
        log::info!("Starting preview ({} bytes)", payload.len());
        host.start(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_document;

    #[derive(Default)]
    struct RecordingHost {
        payloads: Vec<String>,
    }

    impl PreviewHost for RecordingHost {
        fn start(&mut self, payload: &str) -> Result<()> {
            self.payloads.push(payload.to_string());
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn scene_with(objects: &str) -> Result<LoadedScene> {
        parse_document(
            &format!(r#"{{"objects": {}, "static_components": []}}"#, objects),
            &ExtensionRules::builtin(),
        )
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let first = session.begin_load();
        let second = session.begin_load();

        let newer = scene_with(r#"[{"id": 2, "name": "new"}]"#);
        let older = scene_with(r#"[{"id": 1, "name": "old"}]"#);
        assert!(session.complete_load(second, newer).unwrap());
        assert!(!session.complete_load(first, older).unwrap());

        assert!(session.document().find(ObjectId(2)).is_some());
        assert!(session.document().find(ObjectId(1)).is_none());
    }

    #[test]
    fn test_failed_load_keeps_document() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let id = session.add_object(None).unwrap();

        let ticket = session.begin_load();
        let result = parse_document("not json", &ExtensionRules::builtin());
        assert!(matches!(session.complete_load(ticket, result), Err(TesseraError::LoadParse(_))));
        assert!(session.document().contains(id));
    }

    #[test]
    fn test_deleting_ancestor_clears_selection() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let parent = session.add_object(None).unwrap();
        let child = session.add_object(Some(parent)).unwrap();
        session.select_object(child).unwrap();

        session.delete_object(parent).unwrap();
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_unrelated_delete_keeps_selection() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let keep = session.add_object(None).unwrap();
        let other = session.add_object(None).unwrap();
        session.select_object(keep).unwrap();

        session.delete_object(other).unwrap();
        assert_eq!(session.selection(), &Selection::Object(keep));
    }

    #[test]
    fn test_deleting_selected_static_clears_selection() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let uuid = session.add_static_component("Physics").unwrap();
        session.select_static(&uuid).unwrap();
        assert!(!session.available_static_component_types().contains(&"Physics"));

        session.delete_static_component(&uuid).unwrap();
        assert_eq!(session.selection(), &Selection::None);
    }

    #[test]
    fn test_run_preview_sends_cleaned_payload() {
        let mut session = EditSession::new(ExtensionRules::builtin());
        let id = session.add_object(None).unwrap();
        session.rename_object(id, "").unwrap();

        let mut host = RecordingHost::default();
        session.run_preview(&mut host).unwrap();

        let payload: serde_json::Value = serde_json::from_str(&host.payloads[0]).unwrap();
        assert_eq!(payload["objects"][0]["name"], serde_json::Value::Null);
        assert_eq!(payload["graphics"], serde_json::Value::Bool(true));
    }
}
