//! Schema inference from loaded component data
//!
//! Schemas describe a component *type*: the first instance of a type that
//! is observed defines its editable shape, and later instances of the same
//! type are never inspected.

use crate::builtin::{builtin_attachable, builtin_static};
use crate::component::{ComponentSchema, ComponentScope, SchemaTable, SchemaTables};
use crate::extension::ExtensionRules;
use crate::property::PropertyType;
use serde_json::{Map, Value};
use tessera_core::is_reserved_key;

/// Incremental schema builder seeded with the built-in tables
pub struct SchemaInference {
    tables: SchemaTables,
    rules: ExtensionRules,
}

impl SchemaInference {
    pub fn new(rules: ExtensionRules) -> Self {
        Self {
            tables: SchemaTables {
                attachable: SchemaTable::from_schemas(builtin_attachable()),
                statics: SchemaTable::from_schemas(builtin_static()),
            },
            rules,
        }
    }

    /// Record one component instance. Returns true if it defined a new schema.
    pub fn observe(
        &mut self,
        scope: ComponentScope,
        type_id: &str,
        data: &Map<String, Value>,
    ) -> bool {
        let table = match scope {
            ComponentScope::Attachable => &mut self.tables.attachable,
            ComponentScope::Static => &mut self.tables.statics,
        };

        if table.contains(type_id) {
            return false;
        }

        let schema = derive_schema(type_id, data, &self.rules);
        log::debug!(
            "Inferred {} schema '{}' with properties {:?}",
            scope,
            type_id,
            schema.property_names()
        );
        table.insert_if_absent(schema)
    }

    /// Freeze the tables for the session
    pub fn finish(self) -> SchemaTables {
        self.tables
    }
}

/// Infer both schema tables from the components of a document, in traversal order
pub fn infer_schemas<'a, A, S>(attachable: A, statics: S, rules: &ExtensionRules) -> SchemaTables
where
    A: IntoIterator<Item = (&'a str, &'a Map<String, Value>)>,
    S: IntoIterator<Item = (&'a str, &'a Map<String, Value>)>,
{
    let mut inference = SchemaInference::new(rules.clone());
    for (type_id, data) in attachable {
        inference.observe(ComponentScope::Attachable, type_id, data);
    }
    for (type_id, data) in statics {
        inference.observe(ComponentScope::Static, type_id, data);
    }
    inference.finish()
}

fn derive_schema(
    type_id: &str,
    data: &Map<String, Value>,
    rules: &ExtensionRules,
) -> ComponentSchema {
    let mut schema = ComponentSchema::new(type_id);
    for (key, value) in data {
        if is_reserved_key(key) {
            continue;
        }
        let property_type = match rules.resolve(type_id, key) {
            Some(kind) => PropertyType::Structured(kind),
            None => PropertyType::infer(value),
        };
        schema = schema.with_property(key.clone(), property_type);
    }
    schema
}
