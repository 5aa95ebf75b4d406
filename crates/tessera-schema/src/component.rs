//! Component schema definitions

use crate::property::PropertyType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Which of the two schema tables a component type lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentScope {
    /// Components attached to a scene object
    Attachable,
    /// Object-less components global to the document
    Static,
}

impl fmt::Display for ComponentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentScope::Attachable => f.write_str("attachable"),
            ComponentScope::Static => f.write_str("static"),
        }
    }
}

/// Schema for a single property within a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

/// Ordered property list describing one component type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSchema {
    pub name: String,
    pub properties: Vec<PropertySchema>,
}

impl ComponentSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, property_type: PropertyType) -> Self {
        self.properties.push(PropertySchema {
            name: name.into(),
            property_type,
        });
        self
    }

    /// Get a property type by name
    pub fn get(&self, name: &str) -> Option<PropertyType> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.property_type)
    }

    /// List all property names in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Default data for a new instance: one entry per declared property
    pub fn default_data(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|p| (p.name.clone(), p.property_type.default_value()))
            .collect()
    }
}

/// Component type identifier -> schema, in registration order
#[derive(Debug, Clone, Default)]
pub struct SchemaTable {
    schemas: IndexMap<String, ComponentSchema>,
}

impl SchemaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schemas(schemas: impl IntoIterator<Item = ComponentSchema>) -> Self {
        let mut table = Self::new();
        for schema in schemas {
            table.insert_if_absent(schema);
        }
        table
    }

    /// Register a schema unless one with the same name exists. Returns true when inserted.
    pub(crate) fn insert_if_absent(&mut self, schema: ComponentSchema) -> bool {
        if self.schemas.contains_key(&schema.name) {
            return false;
        }
        self.schemas.insert(schema.name.clone(), schema);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSchema> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// All component type identifiers in table order
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// The attachable and static schema tables for one editing session.
///
/// Built once by inference; there is no way to mutate a table afterwards.
#[derive(Debug, Clone, Default)]
pub struct SchemaTables {
    pub(crate) attachable: SchemaTable,
    pub(crate) statics: SchemaTable,
}

impl SchemaTables {
    pub fn attachable(&self) -> &SchemaTable {
        &self.attachable
    }

    pub fn statics(&self) -> &SchemaTable {
        &self.statics
    }

    pub fn table(&self, scope: ComponentScope) -> &SchemaTable {
        match scope {
            ComponentScope::Attachable => &self.attachable,
            ComponentScope::Static => &self.statics,
        }
    }

    /// Get a schema from either table
    pub fn get(&self, scope: ComponentScope, name: &str) -> Option<&ComponentSchema> {
        self.table(scope).get(name)
    }
}
