//! Property edits
//!
//! Every edit is validated against the property's schema type and applied
//! to a copy of the current value, so a rejected edit leaves the component
//! untouched.

use serde_json::{Map, Number, Value};
use tessera_core::{is_reserved_key, Result, TesseraError};
use tessera_schema::{
    BoundsLimits, DurationValue, Geometry, GeometryShape, PropertyType, StructuredKind,
};

/// A single user edit to one component property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    /// Replace one slot (0..=2) of a Vector3
    Vector3 { index: usize, text: String },
    /// Replace a Float with parsed text
    Float(String),
    Boolean(bool),
    /// Replace a String or Color with raw text
    Text(String),
    /// Replace one nested key of an Object/Array, keeping its siblings
    Nested { path: Vec<String>, value: Value },
    BoundsLimit { axis: String, text: String },
    GeometryShape(String),
    GeometrySize(String),
    GeometryColor { channel: usize, text: String },
    DurationSeconds(String),
    DurationNanos(String),
}

impl PropertyEdit {
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyEdit::Vector3 { .. } => "vector3",
            PropertyEdit::Float(_) => "float",
            PropertyEdit::Boolean(_) => "boolean",
            PropertyEdit::Text(_) => "text",
            PropertyEdit::Nested { .. } => "nested",
            PropertyEdit::BoundsLimit { .. } => "bounds limit",
            PropertyEdit::GeometryShape(_) => "geometry shape",
            PropertyEdit::GeometrySize(_) => "geometry size",
            PropertyEdit::GeometryColor { .. } => "geometry color",
            PropertyEdit::DurationSeconds(_) => "duration seconds",
            PropertyEdit::DurationNanos(_) => "duration nanos",
        }
    }
}

/// Apply `edit` to `property` of a component's data map
pub fn apply_edit(
    data: &mut Map<String, Value>,
    property: &str,
    property_type: PropertyType,
    edit: &PropertyEdit,
) -> Result<()> {
    if is_reserved_key(property) {
        return Err(TesseraError::ReservedProperty(property.to_string()));
    }

    let current = data.get(property).cloned().unwrap_or(Value::Null);
    let updated = edited_value(property, property_type, current, edit)?;
    data.insert(property.to_string(), updated);
    Ok(())
}

fn edited_value(
    field: &str,
    property_type: PropertyType,
    current: Value,
    edit: &PropertyEdit,
) -> Result<Value> {
    use PropertyType as T;
    use StructuredKind as K;

    match (property_type, edit) {
        (T::Vector3, PropertyEdit::Vector3 { index, text }) => {
            if *index > 2 {
                return Err(TesseraError::invalid_edit(
                    field,
                    format!("vector index {} out of range 0..=2", index),
                ));
            }
            let slot = number(field, parse_float(field, text)?)?;
            let mut items = match current {
                Value::Array(items) if items.len() == 3 => items,
                _ => vec![Value::from(0.0); 3],
            };
            items[*index] = slot;
            Ok(Value::Array(items))
        }
        (T::Float, PropertyEdit::Float(text)) => number(field, parse_float(field, text)?),
        (T::Boolean, PropertyEdit::Boolean(value)) => Ok(Value::Bool(*value)),
        (T::String | T::Color, PropertyEdit::Text(text)) => Ok(Value::String(text.clone())),
        (T::Object | T::Array, PropertyEdit::Nested { path, value }) => {
            if path.is_empty() {
                return Err(TesseraError::invalid_edit(field, "nested edit needs a key path"));
            }
            let mut target = match current {
                Value::Object(_) | Value::Array(_) => current,
                _ => Value::Object(Map::new()),
            };
            set_path(&mut target, path, value.clone())
                .map_err(|reason| TesseraError::invalid_edit(field, reason))?;
            Ok(target)
        }
        (T::Structured(K::Bounds), PropertyEdit::BoundsLimit { axis, text }) => {
            let mut bounds = structured_view(field, K::Bounds, &current, BoundsLimits::from_value)?;
            let limit = parse_float(field, text)?;
            bounds
                .set(axis, limit)
                .map_err(|reason| TesseraError::invalid_edit(field, reason))?;
            Ok(bounds.to_value())
        }
        (T::Structured(K::Geometry), PropertyEdit::GeometryShape(name)) => {
            let mut geometry = structured_view(field, K::Geometry, &current, Geometry::from_value)?;
            geometry.shape = name
                .parse::<GeometryShape>()
                .map_err(|reason| TesseraError::invalid_edit(field, reason))?;
            Ok(geometry.to_value())
        }
        (T::Structured(K::Geometry), PropertyEdit::GeometrySize(text)) => {
            let mut geometry = structured_view(field, K::Geometry, &current, Geometry::from_value)?;
            geometry.size = parse_float(field, text)?;
            Ok(geometry.to_value())
        }
        (T::Structured(K::Geometry), PropertyEdit::GeometryColor { channel, text }) => {
            if *channel > 2 {
                return Err(TesseraError::invalid_edit(
                    field,
                    format!("color channel {} out of range 0..=2", channel),
                ));
            }
            let mut geometry = structured_view(field, K::Geometry, &current, Geometry::from_value)?;
            geometry.color[*channel] = parse_float(field, text)?;
            Ok(geometry.to_value())
        }
        (T::Structured(K::Duration), PropertyEdit::DurationSeconds(text)) => {
            let mut duration =
                structured_view(field, K::Duration, &current, DurationValue::from_value)?;
            duration.secs = text
                .trim()
                .parse()
                .map_err(|_| TesseraError::numeric(field, text.as_str()))?;
            Ok(duration.to_value())
        }
        (T::Structured(K::Duration), PropertyEdit::DurationNanos(text)) => {
            let mut duration =
                structured_view(field, K::Duration, &current, DurationValue::from_value)?;
            let nanos: u32 = text
                .trim()
                .parse()
                .map_err(|_| TesseraError::numeric(field, text.as_str()))?;
            if nanos >= DurationValue::NANOS_PER_SEC {
                return Err(TesseraError::invalid_edit(
                    field,
                    "nanoseconds must be below one second",
                ));
            }
            duration.nanos = nanos;
            Ok(duration.to_value())
        }
        (property_type, edit) => Err(TesseraError::invalid_edit(
            field,
            format!(
                "a {} edit does not apply to a {} property",
                edit.kind_name(),
                property_type
            ),
        )),
    }
}

/// Read the current payload of a structured property.
///
/// A missing value starts from the kind's default. A present value the view
/// cannot read is an error, so shapes this editor does not model survive.
fn structured_view<T: Default>(
    field: &str,
    kind: StructuredKind,
    current: &Value,
    read: impl FnOnce(&Value) -> Option<T>,
) -> Result<T> {
    if current.is_null() {
        return Ok(T::default());
    }
    read(current).ok_or_else(|| {
        TesseraError::invalid_edit(
            field,
            format!("current value is not a {} payload", kind.type_name()),
        )
    })
}

/// Parse user text as a finite float
fn parse_float(field: &str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TesseraError::numeric(field, text)),
    }
}

fn number(field: &str, value: f64) -> Result<Value> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| TesseraError::numeric(field, value.to_string()))
}

fn set_path(
    target: &mut Value,
    path: &[String],
    value: Value,
) -> std::result::Result<(), String> {
    let Some((head, rest)) = path.split_first() else {
        *target = value;
        return Ok(());
    };

    match target {
        Value::Object(map) => set_path(map.entry(head.clone()).or_insert(Value::Null), rest, value),
        Value::Array(items) => {
            let index: usize = head
                .parse()
                .map_err(|_| format!("'{}' is not an array index", head))?;
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or_else(|| {
                    format!("index {} out of range for array of length {}", index, len)
                })?;
            set_path(slot, rest, value)
        }
        other => {
            *other = Value::Object(Map::new());
            set_path(other, path, value)
        }
    }
}
