//! Attachable component commands

use super::{open, save, Context};
use anyhow::{Context as _, Result};
use clap::Subcommand;
use serde_json::Value;
use tessera_core::ObjectId;
use tessera_scene::PropertyEdit;
use tessera_schema::{PropertyType, StructuredKind};

#[derive(Subcommand)]
pub enum ComponentCommands {
    /// Attach a component with default values
    Add {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// Component type
        component: String,
    },

    /// Remove a component by uuid
    Delete {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// Component uuid
        uuid: String,
    },

    /// Edit one property of a component
    Set {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// Component uuid
        uuid: String,

        /// Property name
        property: String,

        /// New value (a comma-separated triple for a whole vector)
        value: String,

        /// Vector slot or color channel (0-2)
        #[arg(long)]
        index: Option<usize>,

        /// Dotted key path for nested values, or the part of a structured value
        /// (bounds axis, geometry shape/size/color, duration secs/nanos)
        #[arg(long)]
        path: Option<String>,
    },

    /// List component types that can still be attached to an object
    Available {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,
    },
}

pub fn run(cmd: ComponentCommands, ctx: &Context) -> Result<()> {
    match cmd {
        ComponentCommands::Add { scene, id, component } => add(&scene, id, &component, ctx),
        ComponentCommands::Delete { scene, id, uuid } => delete(&scene, id, &uuid, ctx),
        ComponentCommands::Set {
            scene,
            id,
            uuid,
            property,
            value,
            index,
            path,
        } => set(&scene, id, &uuid, &property, &value, index, path.as_deref(), ctx),
        ComponentCommands::Available { scene, id } => available(&scene, id, ctx),
    }
}

fn add(scene_path: &str, id: ObjectId, component: &str, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let uuid = session
        .add_component(id, component)
        .with_context(|| format!("Failed to add '{}' to object #{}", component, id))?;
    save(&session, scene_path, ctx)?;

    println!("Added {} to object #{} [{}]", component, id, uuid);
    Ok(())
}

fn delete(scene_path: &str, id: ObjectId, uuid: &str, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let removed = session
        .delete_component(id, uuid)
        .with_context(|| format!("Failed to delete component {} from object #{}", uuid, id))?;
    save(&session, scene_path, ctx)?;

    println!("Deleted {} from object #{}", removed.id, id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn set(
    scene_path: &str,
    id: ObjectId,
    uuid: &str,
    property: &str,
    value: &str,
    index: Option<usize>,
    path: Option<&str>,
    ctx: &Context,
) -> Result<()> {
    let mut session = open(scene_path, ctx)?;

    let component_type = session
        .document()
        .find(id)
        .and_then(|node| node.component(uuid))
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow::anyhow!("Object #{} has no component {}", id, uuid))?;
    let property_type = session
        .schemas()
        .attachable()
        .get(&component_type)
        .and_then(|schema| schema.get(property))
        .ok_or_else(|| anyhow::anyhow!("'{}' has no property '{}'", component_type, property))?;

    for edit in build_edits(property_type, value, index, path)? {
        session
            .edit_component_property(id, uuid, property, &edit)
            .with_context(|| format!("Failed to set {}.{}", component_type, property))?;
    }
    save(&session, scene_path, ctx)?;

    println!("Set {}.{} on object #{}", component_type, property, id);
    Ok(())
}

fn available(scene_path: &str, id: ObjectId, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let types = session
        .available_component_types(id)
        .with_context(|| format!("Failed to list components for object #{}", id))?;

    for name in types {
        println!("{}", name);
    }
    Ok(())
}

/// Turn a command-line value into the edits for a property of the given type
pub(crate) fn build_edits(
    property_type: PropertyType,
    value: &str,
    index: Option<usize>,
    path: Option<&str>,
) -> Result<Vec<PropertyEdit>> {
    let edits = match property_type {
        PropertyType::Vector3 => match index {
            Some(index) => vec![PropertyEdit::Vector3 {
                index,
                text: value.to_string(),
            }],
            None => {
                let parts: Vec<&str> = value.split(',').collect();
                if parts.len() != 3 {
                    anyhow::bail!("expected 3 comma-separated values or --index, got '{}'", value);
                }
                parts
                    .into_iter()
                    .enumerate()
                    .map(|(index, text)| PropertyEdit::Vector3 {
                        index,
                        text: text.to_string(),
                    })
                    .collect()
            }
        },
        PropertyType::Float => vec![PropertyEdit::Float(value.to_string())],
        PropertyType::Boolean => {
            let flag = value
                .trim()
                .parse::<bool>()
                .map_err(|_| anyhow::anyhow!("expected true or false, got '{}'", value))?;
            vec![PropertyEdit::Boolean(flag)]
        }
        PropertyType::String | PropertyType::Color => vec![PropertyEdit::Text(value.to_string())],
        PropertyType::Object | PropertyType::Array => {
            let path = path.ok_or_else(|| anyhow::anyhow!("--path is required for nested values"))?;
            let parsed =
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
            vec![PropertyEdit::Nested {
                path: path.split('.').map(str::to_string).collect(),
                value: parsed,
            }]
        }
        PropertyType::Structured(StructuredKind::Bounds) => {
            let axis = path.ok_or_else(|| anyhow::anyhow!("--path <axis> is required for bounds"))?;
            vec![PropertyEdit::BoundsLimit {
                axis: axis.to_string(),
                text: value.to_string(),
            }]
        }
        PropertyType::Structured(StructuredKind::Geometry) => match path.unwrap_or("shape") {
            "shape" => vec![PropertyEdit::GeometryShape(value.to_string())],
            "size" => vec![PropertyEdit::GeometrySize(value.to_string())],
            "color" => {
                let channel = index
                    .ok_or_else(|| anyhow::anyhow!("--index <channel> is required for color"))?;
                vec![PropertyEdit::GeometryColor {
                    channel,
                    text: value.to_string(),
                }]
            }
            other => {
                anyhow::bail!("unknown geometry part '{}'; expected shape, size or color", other)
            }
        },
        PropertyType::Structured(StructuredKind::Duration) => match path.unwrap_or("secs") {
            "secs" => vec![PropertyEdit::DurationSeconds(value.to_string())],
            "nanos" => vec![PropertyEdit::DurationNanos(value.to_string())],
            other => anyhow::bail!("unknown duration part '{}'; expected secs or nanos", other),
        },
    };
    Ok(edits)
}
