//! The JSON envelope exchanged with the engine

use crate::component::ComponentInstance;
use crate::node::SceneObjectNode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tessera_core::Result;

/// A scene document as it arrives from disk or the engine.
///
/// Missing lists are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub objects: Vec<SceneObjectNode>,
    #[serde(default)]
    pub static_components: Vec<ComponentInstance>,
    #[serde(default)]
    pub graphics: Option<bool>,
}

/// A cleaned document ready for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedDocument {
    pub objects: Value,
    pub static_components: Value,
    pub graphics: bool,
}

impl SerializedDocument {
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}
