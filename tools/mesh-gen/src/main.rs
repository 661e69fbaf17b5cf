//! mesh-gen - Generate primitive meshes as OBJ files
//!
//! # Commands
//!
//! - `mesh-gen build` - Generate every mesh listed in meshes.toml
//! - `mesh-gen inspect <shape>` - Generate one shape and print its statistics
//!
//! # Manifest (meshes.toml)
//!
//! ```toml
//! [output]
//! dir = "meshes"
//!
//! [[mesh]]
//! name = "disc"
//! shape = "circle"
//! segments = 32
//!
//! [[mesh]]
//! name = "pillar"
//! shape = "cylinder"
//! resolution = [24, 1]
//! top_radius = 0.8
//! ```

mod build;
mod inspect;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// mesh-gen - Generate primitive meshes as OBJ files
#[derive(Parser)]
#[command(name = "mesh-gen")]
#[command(about = "Generate primitive meshes as OBJ files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every mesh listed in a manifest
    Build(build::BuildArgs),

    /// Generate one shape and print vertex/index counts and bounds
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => build::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
