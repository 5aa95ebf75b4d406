//! Static component commands

use super::component::build_edits;
use super::{open, save, Context};
use anyhow::{Context as _, Result};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum StaticCommands {
    /// Add a static component with default values
    Add {
        /// Path to scene file
        scene: String,

        /// Component type
        component: String,
    },

    /// Remove a static component by uuid
    Delete {
        /// Path to scene file
        scene: String,

        /// Component uuid
        uuid: String,
    },

    /// Edit one property of a static component
    Set {
        /// Path to scene file
        scene: String,

        /// Component uuid
        uuid: String,

        /// Property name
        property: String,

        /// New value
        value: String,

        /// Vector slot or color channel (0-2)
        #[arg(long)]
        index: Option<usize>,

        /// Dotted key path or structured part
        #[arg(long)]
        path: Option<String>,
    },

    /// List static component types not yet in the scene
    Available {
        /// Path to scene file
        scene: String,
    },
}

pub fn run(cmd: StaticCommands, ctx: &Context) -> Result<()> {
    match cmd {
        StaticCommands::Add { scene, component } => add(&scene, &component, ctx),
        StaticCommands::Delete { scene, uuid } => delete(&scene, &uuid, ctx),
        StaticCommands::Set {
            scene,
            uuid,
            property,
            value,
            index,
            path,
        } => set(&scene, &uuid, &property, &value, index, path.as_deref(), ctx),
        StaticCommands::Available { scene } => available(&scene, ctx),
    }
}

fn add(scene_path: &str, component: &str, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let uuid = session
        .add_static_component(component)
        .with_context(|| format!("Failed to add static '{}'", component))?;
    save(&session, scene_path, ctx)?;

    println!("Added static {} [{}]", component, uuid);
    Ok(())
}

fn delete(scene_path: &str, uuid: &str, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let removed = session
        .delete_static_component(uuid)
        .with_context(|| format!("Failed to delete static component {}", uuid))?;
    save(&session, scene_path, ctx)?;

    println!("Deleted static {}", removed.id);
    Ok(())
}

fn set(
    scene_path: &str,
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
        .static_component(uuid)
        .map(|c| c.id.clone())
        .ok_or_else(|| anyhow::anyhow!("No static component {}", uuid))?;
    let property_type = session
        .schemas()
        .statics()
        .get(&component_type)
        .and_then(|schema| schema.get(property))
        .ok_or_else(|| anyhow::anyhow!("'{}' has no property '{}'", component_type, property))?;

    for edit in build_edits(property_type, value, index, path)? {
        session
            .edit_static_property(uuid, property, &edit)
            .with_context(|| format!("Failed to set {}.{}", component_type, property))?;
    }
    save(&session, scene_path, ctx)?;

    println!("Set static {}.{}", component_type, property);
    Ok(())
}

fn available(scene_path: &str, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    for name in session.available_static_component_types() {
        println!("{}", name);
    }
    Ok(())
}
