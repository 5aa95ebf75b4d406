//! Built-in schemas for the component kinds the engine registers

use crate::component::ComponentSchema;
use crate::extension::StructuredKind;
use crate::property::PropertyType;

/// Attachable component schemas seeded before inference
pub fn builtin_attachable() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new("Transform")
            .with_property("pos", PropertyType::Vector3)
            .with_property("rot", PropertyType::Vector3),
        ComponentSchema::new("CharacterController2D")
            .with_property("moveamt", PropertyType::Float)
            .with_property("rotamt", PropertyType::Float)
            .with_property("bounds", PropertyType::Structured(StructuredKind::Bounds)),
        ComponentSchema::new("InputComponent").with_property("name", PropertyType::String),
        ComponentSchema::new("RenderComponent")
            .with_property("name", PropertyType::String)
            .with_property("obj", PropertyType::Structured(StructuredKind::Geometry)),
    ]
}

/// Static component schemas seeded before inference
pub fn builtin_static() -> Vec<ComponentSchema> {
    vec![ComponentSchema::new("Physics")]
}
