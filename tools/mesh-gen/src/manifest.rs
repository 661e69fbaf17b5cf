//! meshes.toml manifest parsing

use anyhow::{Context, Result, bail};
use primitive_mesh::Primitive;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// meshes.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct MeshManifest {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub mesh: Vec<MeshEntry>,
}

/// Output configuration section
#[derive(Debug, Deserialize)]
pub struct OutputSection {
    /// Directory for generated files, relative to the manifest.
    /// Default: "meshes"
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "meshes".to_string()
}

/// One `[[mesh]]` entry: a file name plus the shape table
#[derive(Debug, Deserialize)]
pub struct MeshEntry {
    pub name: String,
    #[serde(flatten)]
    pub primitive: Primitive,
}

impl MeshManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).context("Failed to parse meshes.toml")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Names must be usable as file stems and unique
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.mesh {
            if entry.name.is_empty() {
                bail!("Mesh name must not be empty");
            }
            if entry.name.contains(['/', '\\']) {
                bail!("Mesh name '{}' must not contain path separators", entry.name);
            }
            if !seen.insert(entry.name.as_str()) {
                bail!("Duplicate mesh name '{}'", entry.name);
            }
        }
        Ok(())
    }
}
