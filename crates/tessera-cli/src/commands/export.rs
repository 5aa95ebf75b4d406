//! Export command

use super::{open, Context};
use anyhow::{Context as _, Result};
use tessera_scene::write_document;

pub fn run(scene_path: &str, output: Option<&str>, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let serialized = session.export().context("Failed to export scene")?;

    match output {
        Some(path) => {
            write_document(path, &serialized, ctx.pretty)
                .with_context(|| format!("Failed to write {}", path))?;
            println!("Exported '{}' to '{}'", scene_path, path);
        }
        None => println!("{}", serialized.to_json_string(ctx.pretty)?),
    }
    Ok(())
}
