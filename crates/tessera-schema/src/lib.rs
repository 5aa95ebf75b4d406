//! Tessera Schema - Component property types and schema inference
//!
//! Schemas are built once per loaded document: the built-in tables are
//! seeded, then every component type seen in the document contributes the
//! shape of its first instance. The resulting [`SchemaTables`] are read-only
//! for the rest of the editing session.

mod builtin;
mod component;
mod extension;
mod inference;
mod property;
mod structured;

pub use builtin::{builtin_attachable, builtin_static};
pub use component::{ComponentSchema, ComponentScope, PropertySchema, SchemaTable, SchemaTables};
pub use extension::{ExtensionRule, ExtensionRules, StructuredKind};
pub use inference::{infer_schemas, SchemaInference};
pub use property::PropertyType;
pub use structured::{BoundsLimits, DurationValue, Geometry, GeometryShape};
