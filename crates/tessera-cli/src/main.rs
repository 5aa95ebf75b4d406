//! Tessera CLI - Command-line editor for engine scene documents

mod commands;
mod config;
mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    check, collider, component, export, new, object, run, schema, statics, tree, Context,
};
use config::EditorConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Schema-inferring scene editor for engine JSON documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the editor config (defaults to ./tessera.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty scene document
    New {
        /// Path of the scene file to create
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the object hierarchy
    Tree {
        /// Path to scene file
        scene: String,
    },

    /// Show the schemas inferred from a scene
    Schema {
        /// Path to scene file
        scene: String,

        /// Show the static component table instead of the attachable one
        #[arg(long = "static")]
        statics: bool,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Object hierarchy operations
    #[command(subcommand)]
    Object(object::ObjectCommands),

    /// Attachable component operations
    #[command(subcommand)]
    Component(component::ComponentCommands),

    /// Static component operations
    #[command(subcommand)]
    Static(statics::StaticCommands),

    /// Collider operations
    #[command(subcommand)]
    Collider(collider::ColliderCommands),

    /// Write the cleaned engine document
    Export {
        /// Path to scene file
        scene: String,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report duplicate object ids and component uuids
    Check {
        /// Path to scene file
        scene: String,
    },

    /// Export the scene and start the configured preview command
    Run {
        /// Path to scene file
        scene: String,

        /// Return immediately instead of waiting for the preview to exit
        #[arg(long)]
        detach: bool,
    },

    /// Control a running preview through the configured commands
    #[command(subcommand)]
    Preview(run::PreviewCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EditorConfig::load(cli.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.editor.log_level.as_str()),
    )
    .init();

    let ctx = Context::new(&config);

    match cli.command {
        Commands::New { path, force } => new::run(&path, force, &ctx),
        Commands::Tree { scene } => tree::run(&scene, &ctx),
        Commands::Schema { scene, statics, format } => schema::run(&scene, statics, &format, &ctx),
        Commands::Object(cmd) => object::run(cmd, &ctx),
        Commands::Component(cmd) => component::run(cmd, &ctx),
        Commands::Static(cmd) => statics::run(cmd, &ctx),
        Commands::Collider(cmd) => collider::run(cmd, &ctx),
        Commands::Export { scene, output } => export::run(&scene, output.as_deref(), &ctx),
        Commands::Check { scene } => check::run(&scene, &ctx),
        Commands::Run { scene, detach } => run::run(&scene, detach, &ctx),
        Commands::Preview(cmd) => run::control(cmd, &ctx),
    }
}
