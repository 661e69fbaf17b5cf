//! Build command - generate every mesh listed in meshes.toml

use anyhow::{Context, Result};
use clap::Args;
use primitive_mesh::write_obj;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::manifest::MeshManifest;

/// Arguments for the build command
#[derive(Args)]
pub struct BuildArgs {
    /// Path to meshes.toml manifest file
    #[arg(short, long, default_value = "meshes.toml")]
    pub manifest: PathBuf,

    /// Output directory (overrides [output] dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let manifest = MeshManifest::load(&args.manifest)?;

    // Relative output dirs are resolved against the manifest's directory
    let out_dir = match args.out_dir {
        Some(dir) => dir,
        None => args
            .manifest
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&manifest.output.dir),
    };

    let written = build_meshes(&manifest, &out_dir)?;
    println!(
        "Generated {} mesh(es) in {}",
        written.len(),
        out_dir.display()
    );
    Ok(())
}

/// Generate each manifest entry into `<out_dir>/<name>.obj`
pub fn build_meshes(manifest: &MeshManifest, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(manifest.mesh.len());
    for entry in &manifest.mesh {
        let mesh = entry
            .primitive
            .generate()
            .with_context(|| format!("Failed to generate mesh '{}'", entry.name))?;

        let path = out_dir.join(format!("{}.obj", entry.name));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_obj(&mesh, &mut writer, &entry.name)
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(
            "{} ({}): {} vertices, {} triangles -> {}",
            entry.name,
            entry.primitive.name(),
            mesh.num_vertices(),
            mesh.num_triangles(),
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[[mesh]]
name = "disc"
shape = "circle"
segments = 8

[[mesh]]
name = "box"
shape = "cube"

[[mesh]]
name = "donut"
shape = "torus"
segments = 8
second_radius = 0.5
"#;

    #[test]
    fn test_build_writes_obj_files() {
        let dir = TempDir::new().unwrap();
        let manifest = MeshManifest::parse(MANIFEST).unwrap();

        let written = build_meshes(&manifest, dir.path()).unwrap();
        assert_eq!(written.len(), 3);

        let disc = std::fs::read_to_string(dir.path().join("disc.obj")).unwrap();
        assert!(disc.contains("o disc\n"));
        assert_eq!(disc.lines().filter(|l| l.starts_with("v ")).count(), 24);
        assert_eq!(disc.lines().filter(|l| l.starts_with("f ")).count(), 8);

        let cube = std::fs::read_to_string(dir.path().join("box.obj")).unwrap();
        assert_eq!(cube.lines().filter(|l| l.starts_with("f ")).count(), 12);

        // Empty torus still produces a file
        let torus = std::fs::read_to_string(dir.path().join("donut.obj")).unwrap();
        assert!(!torus.contains("\nv "));
    }

    #[test]
    fn test_build_creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a").join("b");
        let manifest = MeshManifest::parse(MANIFEST).unwrap();

        build_meshes(&manifest, &out).unwrap();
        assert!(out.join("box.obj").exists());
    }

    #[test]
    fn test_build_reports_generator_errors() {
        let dir = TempDir::new().unwrap();
        let manifest = MeshManifest::parse(
            r#"
[[mesh]]
name = "flat"
shape = "square"
resolution = [0, 4]
"#,
        )
        .unwrap();

        let err = build_meshes(&manifest, dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("flat"));
        assert!(!dir.path().join("flat.obj").exists());
    }

    #[test]
    fn test_execute_resolves_output_against_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("meshes.toml");
        std::fs::write(
            &manifest_path,
            "[output]\ndir = \"generated\"\n\n[[mesh]]\nname = \"plane\"\nshape = \"square\"\nresolution = [2, 2]\n",
        )
        .unwrap();

        execute(BuildArgs {
            manifest: manifest_path,
            out_dir: None,
        })
        .unwrap();
        assert!(dir.path().join("generated").join("plane.obj").exists());
    }
}
