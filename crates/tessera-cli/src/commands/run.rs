//! Preview commands

use super::{open, Context};
use crate::preview::CommandPreview;
use anyhow::{Context as _, Result};
use clap::Subcommand;
use tessera_scene::PreviewHost;

#[derive(Subcommand)]
pub enum PreviewCommands {
    /// Run the configured pause command
    Pause,

    /// Run the configured stop command
    Stop,
}

pub fn run(scene_path: &str, detach: bool, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let mut preview = CommandPreview::new(ctx.preview.clone());

    session
        .run_preview(&mut preview)
        .context("Failed to start preview (is [preview] start set in tessera.toml?)")?;

    if detach {
        println!("Preview started for '{}'", scene_path);
        return Ok(());
    }

    if let Some(status) = preview.wait()? {
        if !status.success() {
            anyhow::bail!("Preview exited with {}", status);
        }
    }
    Ok(())
}

pub fn control(cmd: PreviewCommands, ctx: &Context) -> Result<()> {
    let mut preview = CommandPreview::new(ctx.preview.clone());

    match cmd {
        PreviewCommands::Pause => {
            preview
                .pause()
                .context("Failed to pause preview (is [preview] pause set in tessera.toml?)")?;
            println!("Preview paused");
        }
        PreviewCommands::Stop => {
            preview
                .stop()
                .context("Failed to stop preview (is [preview] stop set in tessera.toml?)")?;
            println!("Preview stopped");
        }
    }
    Ok(())
}
