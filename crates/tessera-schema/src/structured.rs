//! Typed views over structured property payloads
//!
//! Each view reads the engine's wire shape leniently and always writes it
//! back exactly as the engine deserializes it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;

/// Axis names a bounds payload may carry
pub const BOUNDS_AXES: [&str; 3] = ["x", "y", "z"];

/// Flat `{axis: limit}` view of a bounds payload.
///
/// The engine stores each axis limit as a single-field struct named after
/// the axis, so the wire shape is `{"limits": {"x": {"x": 1.0}, ...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsLimits {
    limits: IndexMap<String, f64>,
}

impl Default for BoundsLimits {
    fn default() -> Self {
        let mut limits = IndexMap::new();
        limits.insert("x".to_string(), 0.0);
        limits.insert("y".to_string(), 0.0);
        Self { limits }
    }
}

impl BoundsLimits {
    /// Read a bounds payload, accepting both the nested and the flat axis shape.
    /// `None` when the payload has no `limits` map or an axis entry is unreadable.
    pub fn from_value(value: &Value) -> Option<Self> {
        let limits = value.get("limits")?.as_object()?;

        let mut parsed = IndexMap::new();
        for (axis, entry) in limits {
            let limit = match entry {
                Value::Number(n) => n.as_f64(),
                Value::Object(inner) => inner.get(axis).and_then(Value::as_f64),
                _ => None,
            }?;
            parsed.insert(axis.clone(), limit);
        }
        Some(Self { limits: parsed })
    }

    pub fn get(&self, axis: &str) -> Option<f64> {
        self.limits.get(axis).copied()
    }

    /// Set one axis limit, leaving the others untouched
    pub fn set(&mut self, axis: &str, limit: f64) -> Result<(), String> {
        let axis = axis.to_ascii_lowercase();
        if !BOUNDS_AXES.contains(&axis.as_str()) {
            return Err(format!("unknown axis '{}'; expected one of x, y, z", axis));
        }
        self.limits.insert(axis, limit);
        Ok(())
    }

    pub fn axes(&self) -> impl Iterator<Item = (&str, f64)> {
        self.limits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn to_value(&self) -> Value {
        let mut limits = Map::new();
        for (axis, limit) in &self.limits {
            limits.insert(axis.clone(), json!({ axis.as_str(): limit }));
        }
        json!({ "limits": Value::Object(limits) })
    }
}

/// Primitive shapes a render geometry can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryShape {
    Cube,
    Triangle,
    Hexagon,
    Pentagon,
    Octagon,
}

impl GeometryShape {
    pub const ALL: [GeometryShape; 5] = [
        GeometryShape::Cube,
        GeometryShape::Triangle,
        GeometryShape::Hexagon,
        GeometryShape::Pentagon,
        GeometryShape::Octagon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeometryShape::Cube => "Cube",
            GeometryShape::Triangle => "Triangle",
            GeometryShape::Hexagon => "Hexagon",
            GeometryShape::Pentagon => "Pentagon",
            GeometryShape::Octagon => "Octagon",
        }
    }
}

impl fmt::Display for GeometryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown geometry shape '{}'", s))
    }
}

/// A single-shape geometry descriptor: `{"Cube": [side_length, [r, g, b]]}`
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub shape: GeometryShape,
    pub size: f64,
    pub color: [f64; 3],
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            shape: GeometryShape::Cube,
            size: 1.0,
            color: [1.0, 1.0, 1.0],
        }
    }
}

impl Geometry {
    /// Parse the wire shape; `None` when the payload is not a known single shape
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        if map.len() != 1 {
            return None;
        }
        let (name, params) = map.iter().next()?;
        let shape = name.parse().ok()?;
        let params = params.as_array()?;
        let size = params.first()?.as_f64()?;
        let rgb = params.get(1)?.as_array()?;
        if rgb.len() != 3 {
            return None;
        }
        let mut color = [0.0; 3];
        for (slot, channel) in color.iter_mut().zip(rgb) {
            *slot = channel.as_f64()?;
        }
        Some(Self { shape, size, color })
    }

    pub fn to_value(&self) -> Value {
        json!({ self.shape.name(): [self.size, self.color] })
    }
}

/// Duration payload in the engine's `{secs, nanos}` layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationValue {
    pub secs: u64,
    pub nanos: u32,
}

impl DurationValue {
    pub const NANOS_PER_SEC: u32 = 1_000_000_000;

    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn to_value(&self) -> Value {
        json!({ "secs": self.secs, "nanos": self.nanos })
    }
}
