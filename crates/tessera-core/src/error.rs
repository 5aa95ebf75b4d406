//! Error types for Tessera

use thiserror::Error;

/// The main error type for Tessera operations
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("Failed to parse scene document: {0}")]
    LoadParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Component '{component}' is already present on {owner}")]
    ComponentAlreadyPresent { owner: String, component: String },

    #[error("Collider '{shape}' is already attached to object {object}")]
    ColliderAlreadyPresent { object: String, shape: String },

    #[error("No object ids left to allocate")]
    IdsExhausted,

    #[error("Stale reference: {0}")]
    StaleReference(String),

    #[error("Invalid number for '{field}': {input:?}")]
    NumericParse { field: String, input: String },

    #[error("Property '{0}' is reserved and cannot be edited")]
    ReservedProperty(String),

    #[error("Invalid edit for '{field}': {reason}")]
    InvalidEdit { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Preview error: {0}")]
    Preview(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl TesseraError {
    pub fn invalid_edit(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TesseraError::InvalidEdit {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn numeric(field: impl Into<String>, input: impl Into<String>) -> Self {
        TesseraError::NumericParse {
            field: field.into(),
            input: input.into(),
        }
    }
}

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            TesseraError::Io(err.into())
        } else if err.is_data() || err.is_syntax() || err.is_eof() {
            TesseraError::LoadParse(err.to_string())
        } else {
            TesseraError::Serialize(err.to_string())
        }
    }
}

impl From<toml::de::Error> for TesseraError {
    fn from(err: toml::de::Error) -> Self {
        TesseraError::TomlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_syntax_error_is_load_parse() {
        let err: TesseraError = serde_json::from_str::<serde_json::Value>("{ not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, TesseraError::LoadParse(_)));
    }

    #[test]
    fn test_numeric_message() {
        let err = TesseraError::numeric("moveamt", "abc");
        assert_eq!(err.to_string(), "Invalid number for 'moveamt': \"abc\"");
    }
}
