//! Collider commands

use super::{open, save, Context};
use anyhow::{Context as _, Result};
use clap::Subcommand;
use tessera_core::ObjectId;
use tessera_scene::ColliderShape;

#[derive(Subcommand)]
pub enum ColliderCommands {
    /// Attach a collider with default parameters
    Add {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// Shape (CubeCollider, RectangularPrismCollider, PointCollider, OctagonCollider)
        shape: ColliderShape,
    },

    /// Remove the collider at a position in the object's collider list
    Delete {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,

        /// Collider index, as shown by `tessera tree`
        index: usize,
    },

    /// List collider shapes that can still be attached to an object
    Available {
        /// Path to scene file
        scene: String,

        /// Object id
        id: ObjectId,
    },
}

pub fn run(cmd: ColliderCommands, ctx: &Context) -> Result<()> {
    match cmd {
        ColliderCommands::Add { scene, id, shape } => {
            let mut session = open(&scene, ctx)?;
            session
                .add_collider(id, shape)
                .with_context(|| format!("Failed to add {} to object #{}", shape, id))?;
            save(&session, &scene, ctx)?;
            println!("Added {} to object #{}", shape, id);
        }
        ColliderCommands::Delete { scene, id, index } => {
            let mut session = open(&scene, ctx)?;
            let removed = session
                .delete_collider(id, index)
                .with_context(|| {
                    format!("Failed to delete collider {} from object #{}", index, id)
                })?;
            save(&session, &scene, ctx)?;
            println!(
                "Deleted {} from object #{}",
                removed.shape_name().unwrap_or("collider"),
                id
            );
        }
        ColliderCommands::Available { scene, id } => {
            let session = open(&scene, ctx)?;
            let shapes = session
                .document()
                .available_collider_types(id)
                .with_context(|| format!("Failed to list colliders for object #{}", id))?;
            for shape in shapes {
                println!("{}", shape);
            }
        }
    }
    Ok(())
}
