//! Scene consistency check

use super::{open, Context};
use anyhow::Result;

pub fn run(scene_path: &str, ctx: &Context) -> Result<()> {
    let session = open(scene_path, ctx)?;
    let document = session.document();

    let duplicate_ids = document.duplicate_ids();
    let duplicate_uuids = document.duplicate_uuids();

    for id in &duplicate_ids {
        println!("duplicate object id: {}", id);
    }
    for uuid in &duplicate_uuids {
        println!("duplicate component uuid: {}", uuid);
    }

    let problems = duplicate_ids.len() + duplicate_uuids.len();
    if problems > 0 {
        anyhow::bail!("{} problem(s) found in '{}'", problems, scene_path);
    }

    println!(
        "'{}' is consistent ({} objects, {} static components)",
        scene_path,
        document.node_count(),
        document.static_components().len()
    );
    Ok(())
}
