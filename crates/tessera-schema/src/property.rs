//! Property type model

use crate::extension::StructuredKind;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

/// The editable kind of a single component property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    String,
    Boolean,
    Float,
    Vector3,
    Color,
    Object,
    Array,
    Structured(StructuredKind),
}

impl PropertyType {
    /// Classify a raw JSON value.
    ///
    /// `Color` is never produced here; it only comes from built-in schemas.
    /// `null` is treated as a string because the only nulls the editor
    /// writes are cleaned empty strings.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Array(_) if is_vector3(value) => PropertyType::Vector3,
            Value::Bool(_) => PropertyType::Boolean,
            Value::Number(_) => PropertyType::Float,
            Value::String(_) | Value::Null => PropertyType::String,
            Value::Object(_) => PropertyType::Object,
            Value::Array(_) => PropertyType::Array,
        }
    }

    /// Value a freshly added component starts with for this property
    pub fn default_value(&self) -> Value {
        match self {
            PropertyType::Vector3 => json!([0.0, 0.0, 0.0]),
            PropertyType::Boolean => Value::Bool(false),
            PropertyType::Float => json!(0.0),
            PropertyType::Object | PropertyType::Array => Value::Object(Map::new()),
            PropertyType::String | PropertyType::Color => Value::String(String::new()),
            PropertyType::Structured(kind) => kind.default_value(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyType::String => "String",
            PropertyType::Boolean => "Boolean",
            PropertyType::Float => "Float",
            PropertyType::Vector3 => "Vector3",
            PropertyType::Color => "Color",
            PropertyType::Object => "Object",
            PropertyType::Array => "Array",
            PropertyType::Structured(kind) => kind.type_name(),
        }
    }

    /// Object and Array properties are edited key-by-key
    pub fn is_nested(&self) -> bool {
        matches!(self, PropertyType::Object | PropertyType::Array)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// An array of exactly three numbers
pub fn is_vector3(value: &Value) -> bool {
    value
        .as_array()
        .map(|arr| arr.len() == 3 && arr.iter().all(Value::is_number))
        .unwrap_or(false)
}
