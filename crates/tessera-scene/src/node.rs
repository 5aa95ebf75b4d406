//! Scene hierarchy nodes

use crate::component::{ColliderInstance, ComponentInstance};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tessera_core::ObjectId;

/// Name given to objects created from the editor
pub const DEFAULT_OBJECT_NAME: &str = "New GameObject";

/// One object in the scene forest.
///
/// Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObjectNode {
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default = "default_expanded")]
    pub expanded: bool,
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
    #[serde(default)]
    pub children: Vec<SceneObjectNode>,
    #[serde(default)]
    pub colliders: Vec<ColliderInstance>,
    /// Keys this editor does not model, kept so they survive a save
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_expanded() -> bool {
    true
}

// Cleaning writes empty names as null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SceneObjectNode {
    pub fn new(id: ObjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            expanded: true,
            components: Vec::new(),
            children: Vec::new(),
            colliders: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_child(mut self, child: SceneObjectNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_component(mut self, component: ComponentInstance) -> Self {
        self.components.push(component);
        self
    }

    /// Check whether a component of this type is attached
    pub fn has_component(&self, type_id: &str) -> bool {
        self.components.iter().any(|c| c.id == type_id)
    }

    pub fn component(&self, uuid: &str) -> Option<&ComponentInstance> {
        self.components.iter().find(|c| c.uuid() == Some(uuid))
    }

    pub fn component_mut(&mut self, uuid: &str) -> Option<&mut ComponentInstance> {
        self.components.iter_mut().find(|c| c.uuid() == Some(uuid))
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneObjectNode::subtree_len).sum::<usize>()
    }
}
