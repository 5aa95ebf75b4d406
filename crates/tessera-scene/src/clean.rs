//! Empty-string cleaning
//!
//! The engine treats an absent value as `null`, never as `""`. Every
//! document handed to the engine passes through here first.

use serde_json::Value;

/// Return a copy of `value` with every empty string replaced by `null`
pub fn clean(mut value: Value) -> Value {
    clean_in_place(&mut value);
    value
}

/// Replace every empty string in `value` with `null`, at any depth
pub fn clean_in_place(value: &mut Value) {
    match value {
        Value::String(s) if s.is_empty() => *value = Value::Null,
        Value::Array(items) => items.iter_mut().for_each(clean_in_place),
        Value::Object(map) => map.values_mut().for_each(clean_in_place),
        _ => {}
    }
}

/// Check whether any empty string is left anywhere in `value`
pub fn has_empty_strings(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.iter().any(has_empty_strings),
        Value::Object(map) => map.values().any(has_empty_strings),
        _ => false,
    }
}
