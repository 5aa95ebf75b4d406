//! Component and collider instances

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use tessera_core::{is_reserved_key, STATE_KEY, UUID_KEY};
use tessera_schema::ComponentSchema;

/// A component attached to an object (or standing alone as a static component)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Component type identifier
    pub id: String,
    /// Property values plus the reserved `uuid` and `state` keys
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl ComponentInstance {
    /// Build a fresh instance from a schema, with default property values
    pub fn from_schema(schema: &ComponentSchema, uuid: String) -> Self {
        let mut data = schema.default_data();
        data.insert(UUID_KEY.to_string(), Value::String(uuid));
        data.insert(STATE_KEY.to_string(), initial_state());
        Self {
            id: schema.name.clone(),
            data,
        }
    }

    /// The component's unique identifier, if it carries one
    pub fn uuid(&self) -> Option<&str> {
        self.data.get(UUID_KEY).and_then(Value::as_str)
    }

    pub fn state(&self) -> Option<&Value> {
        self.data.get(STATE_KEY)
    }

    /// Property entries, without the reserved keys
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data
            .iter()
            .filter(|(k, _)| !is_reserved_key(k))
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.data.get(property)
    }
}

/// The engine-owned scratch value every new component starts with
pub fn initial_state() -> Value {
    json!({ "_state": null })
}

/// Collider shapes the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderShape {
    Cube,
    RectangularPrism,
    Point,
    Octagon,
}

impl ColliderShape {
    pub const ALL: [ColliderShape; 4] = [
        ColliderShape::Cube,
        ColliderShape::RectangularPrism,
        ColliderShape::Point,
        ColliderShape::Octagon,
    ];

    /// Key used for this shape in the `collider` mapping
    pub fn name(&self) -> &'static str {
        match self {
            ColliderShape::Cube => "CubeCollider",
            ColliderShape::RectangularPrism => "RectangularPrismCollider",
            ColliderShape::Point => "PointCollider",
            ColliderShape::Octagon => "OctagonCollider",
        }
    }

    pub fn default_parameters(&self) -> Value {
        match self {
            ColliderShape::Cube => json!({ "side_length": 1.0 }),
            ColliderShape::RectangularPrism => json!({ "width": 1.0, "height": 1.0, "depth": 1.0 }),
            ColliderShape::Point => json!({ "point": { "x": 0.0, "y": 0.0, "z": 0.0 } }),
            ColliderShape::Octagon => json!({ "size": 1.0 }),
        }
    }
}

impl fmt::Display for ColliderShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColliderShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColliderShape::ALL
            .into_iter()
            .find(|shape| {
                shape.name().eq_ignore_ascii_case(s)
                    || shape.name().trim_end_matches("Collider").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| format!("unknown collider shape '{}'", s))
    }
}

/// A collider: exactly one shape name mapped to its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColliderInstance {
    pub collider: Map<String, Value>,
}

impl ColliderInstance {
    pub fn new(shape: ColliderShape) -> Self {
        let mut collider = Map::new();
        collider.insert(shape.name().to_string(), shape.default_parameters());
        Self { collider }
    }

    /// Name of the shape key, as written in the document
    pub fn shape_name(&self) -> Option<&str> {
        self.collider.keys().next().map(String::as_str)
    }

    pub fn shape(&self) -> Option<ColliderShape> {
        self.shape_name().and_then(|name| name.parse().ok())
    }

    pub fn parameters(&self) -> Option<&Value> {
        self.collider.values().next()
    }
}
