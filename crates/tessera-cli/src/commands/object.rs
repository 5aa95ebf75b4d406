//! Object hierarchy commands

use super::{open, save, Context};
use anyhow::{Context as _, Result};
use clap::Subcommand;
use tessera_core::ObjectId;

#[derive(Subcommand)]
pub enum ObjectCommands {
    /// Create a new object
    Add {
        /// Path to scene file
        scene: String,

        /// Parent object id (root when omitted)
        #[arg(long)]
        parent: Option<ObjectId>,

        /// Name for the new object
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete an object and its subtree
    Delete {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,
    },

    /// Rename an object
    Rename {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// New name
        name: String,
    },

    /// Flip an object's expanded flag
    Toggle {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,
    },
}

pub fn run(cmd: ObjectCommands, ctx: &Context) -> Result<()> {
    match cmd {
        ObjectCommands::Add { scene, parent, name } => add(&scene, parent, name, ctx),
        ObjectCommands::Delete { scene, id } => delete(&scene, id, ctx),
        ObjectCommands::Rename { scene, id, name } => rename(&scene, id, &name, ctx),
        ObjectCommands::Toggle { scene, id } => toggle(&scene, id, ctx),
    }
}

fn add(
    scene_path: &str,
    parent: Option<ObjectId>,
    name: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let id = session.add_object(parent).context("Failed to add object")?;
    if let Some(name) = name {
        session.rename_object(id, name)?;
    }
    save(&session, scene_path, ctx)?;

    match parent {
        Some(parent) => println!("Added object #{} under #{}", id, parent),
        None => println!("Added object #{}", id),
    }
    Ok(())
}

fn delete(scene_path: &str, id: ObjectId, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let removed = session
        .delete_object(id)
        .with_context(|| format!("Failed to delete object #{}", id))?;
    save(&session, scene_path, ctx)?;

    println!("Deleted object #{} ({} node(s))", id, removed);
    Ok(())
}

fn rename(scene_path: &str, id: ObjectId, name: &str, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    session
        .rename_object(id, name)
        .with_context(|| format!("Failed to rename object #{}", id))?;
    save(&session, scene_path, ctx)?;

    println!("Renamed object #{} to '{}'", id, name);
    Ok(())
}

fn toggle(scene_path: &str, id: ObjectId, ctx: &Context) -> Result<()> {
    let mut session = open(scene_path, ctx)?;
    let expanded = session
        .toggle_expand(id)
        .with_context(|| format!("Failed to toggle object #{}", id))?;
    save(&session, scene_path, ctx)?;

    println!("Object #{} is now {}", id, if expanded { "expanded" } else { "collapsed" });
    Ok(())
}
