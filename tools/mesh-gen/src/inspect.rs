//! Inspect command - generate one shape and print its statistics

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glam::{UVec2, UVec3};
use primitive_mesh::{Primitive, TriMesh, write_obj};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    #[command(subcommand)]
    pub shape: ShapeCommand,

    /// Also write the mesh as OBJ to this path
    #[arg(long, global = true)]
    pub obj: Option<PathBuf>,
}

/// Shape and its generator parameters
#[derive(Subcommand)]
pub enum ShapeCommand {
    /// Unit circle fan
    Circle {
        #[arg(long, default_value_t = 32)]
        segments: u32,
    },
    /// Cone along Y
    Cone {
        /// Radial x height segments, e.g. 16x4
        #[arg(long, default_value = "16x1", value_parser = parse_uvec2)]
        resolution: UVec2,
        /// Leave the base open
        #[arg(long)]
        open_base: bool,
    },
    /// Unit cube
    Cube,
    /// Cylinder along Y
    Cylinder {
        /// Radial x height segments, e.g. 16x4
        #[arg(long, default_value = "16x1", value_parser = parse_uvec2)]
        resolution: UVec2,
        #[arg(long, default_value_t = 1.0)]
        top_radius: f32,
        #[arg(long, default_value_t = 1.0)]
        base_radius: f32,
        /// Leave the top open
        #[arg(long)]
        open_top: bool,
        /// Leave the base open
        #[arg(long)]
        open_base: bool,
    },
    /// Flat annulus
    Ring {
        #[arg(long, default_value_t = 32)]
        segments: u32,
        /// Inner radius as a fraction of the outer one
        #[arg(long, default_value_t = 0.5)]
        second_radius: f32,
    },
    /// UV sphere
    Sphere {
        /// Longitude x latitude segments, e.g. 16x8
        #[arg(long, default_value = "16x8", value_parser = parse_uvec2)]
        resolution: UVec2,
    },
    /// Subdivided unit square
    Square {
        /// Columns x rows, e.g. 4x4
        #[arg(long, default_value = "1x1", value_parser = parse_uvec2)]
        resolution: UVec2,
    },
    /// Torus (placeholder, always empty)
    Torus {
        #[arg(long, default_value_t = 32)]
        segments: u32,
        #[arg(long, default_value_t = 0.25)]
        second_radius: f32,
    },
}

impl ShapeCommand {
    fn to_primitive(&self) -> Primitive {
        match *self {
            Self::Circle { segments } => Primitive::Circle { segments },
            Self::Cone {
                resolution,
                open_base,
            } => Primitive::Cone {
                resolution,
                close_base: !open_base,
            },
            Self::Cube => Primitive::Cube {
                resolution: UVec3::ONE,
            },
            Self::Cylinder {
                resolution,
                top_radius,
                base_radius,
                open_top,
                open_base,
            } => Primitive::Cylinder {
                resolution,
                top_radius,
                base_radius,
                close_top: !open_top,
                close_base: !open_base,
            },
            Self::Ring {
                segments,
                second_radius,
            } => Primitive::Ring {
                segments,
                second_radius,
            },
            Self::Sphere { resolution } => Primitive::Sphere { resolution },
            Self::Square { resolution } => Primitive::Square { resolution },
            Self::Torus {
                segments,
                second_radius,
            } => Primitive::Torus {
                segments,
                second_radius,
            },
        }
    }
}

/// Parse `COLSxROWS` (also accepts `COLS,ROWS`)
fn parse_uvec2(value: &str) -> Result<UVec2, String> {
    let (x, y) = value
        .split_once(['x', ','])
        .ok_or_else(|| format!("expected COLSxROWS, got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid count '{part}': {e}"))
    };
    Ok(UVec2::new(parse(x)?, parse(y)?))
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let primitive = args.shape.to_primitive();
    let mesh = primitive
        .generate()
        .with_context(|| format!("Failed to generate {}", primitive.name()))?;

    print!("{}", summary(primitive.name(), &mesh));

    if let Some(path) = args.obj {
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_obj(&mesh, &mut writer, primitive.name())
            .and_then(|()| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  OBJ:       {}", path.display());
    }

    Ok(())
}

fn summary(name: &str, mesh: &TriMesh) -> String {
    let mut out = format!(
        "{name}\n  Vertices:  {}\n  Indices:   {}\n  Triangles: {}\n",
        mesh.num_vertices(),
        mesh.num_indices(),
        mesh.num_triangles()
    );
    match mesh.bounds() {
        Some((min, max)) => out.push_str(&format!("  Bounds:    {min} .. {max}\n")),
        None => out.push_str("  Bounds:    (empty)\n"),
    }
    out
}
