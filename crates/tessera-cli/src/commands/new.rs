//! Scene creation command

use super::Context;
use anyhow::{Context as _, Result};
use std::path::Path;
use tessera_scene::{save_document, SceneDocument};

pub fn run(path: &str, force: bool, ctx: &Context) -> Result<()> {
    if Path::new(path).exists() && !force {
        anyhow::bail!("File '{}' already exists (use --force to overwrite)", path);
    }

    save_document(path, &SceneDocument::new(), ctx.pretty)
        .with_context(|| format!("Failed to write scene: {}", path))?;

    println!("Created empty scene '{}'", path);
    Ok(())
}
