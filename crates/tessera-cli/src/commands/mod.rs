//! CLI command implementations

pub mod check;
pub mod collider;
pub mod component;
pub mod export;
pub mod new;
pub mod object;
pub mod run;
pub mod schema;
pub mod statics;
pub mod tree;

use crate::config::{EditorConfig, PreviewSection};
use anyhow::{Context as _, Result};
use tessera_scene::{save_document, EditSession};
use tessera_schema::ExtensionRules;

/// Settings every command needs, resolved once from the config
pub struct Context {
    pub rules: ExtensionRules,
    pub pretty: bool,
    pub preview: PreviewSection,
}

impl Context {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            rules: config.extension_rules(),
            pretty: config.editor.pretty,
            preview: config.preview.clone(),
        }
    }
}

/// Load a scene into a fresh session
pub fn open(scene_path: &str, ctx: &Context) -> Result<EditSession> {
    let mut session = EditSession::new(ctx.rules.clone());
    session
        .load_file(scene_path)
        .with_context(|| format!("Failed to load scene: {}", scene_path))?;
    Ok(session)
}

/// Write the session's document back to the scene file
pub fn save(session: &EditSession, scene_path: &str, ctx: &Context) -> Result<()> {
    save_document(scene_path, session.document(), ctx.pretty)
        .with_context(|| format!("Failed to save scene: {}", scene_path))
}
