//! Serializable shape descriptors
//!
//! A [`Primitive`] names one generator together with its parameters, so shapes
//! can be listed in a manifest and generated later.

use glam::{UVec2, UVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::primitives::{
    create_circle_tri_mesh, create_cone_tri_mesh, create_cube_tri_mesh, create_cylinder_tri_mesh,
    create_ring_tri_mesh, create_sphere_tri_mesh, create_square_tri_mesh, create_torus_tri_mesh,
};
use crate::types::TriMesh;

/// One primitive shape and its generator parameters
///
/// Deserializes from an internally tagged table, e.g.
/// `{ shape = "cylinder", resolution = [16, 1], top_radius = 0.5 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Primitive {
    Circle {
        segments: u32,
    },
    Cone {
        resolution: UVec2,
        #[serde(default = "default_true")]
        close_base: bool,
    },
    Cube {
        #[serde(default = "default_cube_resolution")]
        resolution: UVec3,
    },
    Cylinder {
        resolution: UVec2,
        #[serde(default = "default_radius")]
        top_radius: f32,
        #[serde(default = "default_radius")]
        base_radius: f32,
        #[serde(default = "default_true")]
        close_top: bool,
        #[serde(default = "default_true")]
        close_base: bool,
    },
    Ring {
        segments: u32,
        second_radius: f32,
    },
    Sphere {
        resolution: UVec2,
    },
    Square {
        resolution: UVec2,
    },
    Torus {
        segments: u32,
        second_radius: f32,
    },
}

fn default_true() -> bool {
    true
}

fn default_radius() -> f32 {
    1.0
}

fn default_cube_resolution() -> UVec3 {
    UVec3::ONE
}

impl Primitive {
    /// Shape name as used in the `shape` tag
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Cone { .. } => "cone",
            Self::Cube { .. } => "cube",
            Self::Cylinder { .. } => "cylinder",
            Self::Ring { .. } => "ring",
            Self::Sphere { .. } => "sphere",
            Self::Square { .. } => "square",
            Self::Torus { .. } => "torus",
        }
    }

    /// Run the matching generator
    pub fn generate(&self) -> Result<TriMesh, MeshError> {
        match *self {
            Self::Circle { segments } => create_circle_tri_mesh(segments),
            Self::Cone {
                resolution,
                close_base,
            } => create_cone_tri_mesh(resolution, close_base),
            Self::Cube { resolution } => Ok(create_cube_tri_mesh(resolution)),
            Self::Cylinder {
                resolution,
                top_radius,
                base_radius,
                close_top,
                close_base,
            } => create_cylinder_tri_mesh(resolution, top_radius, base_radius, close_top, close_base),
            Self::Ring {
                segments,
                second_radius,
            } => create_ring_tri_mesh(segments, second_radius),
            Self::Sphere { resolution } => create_sphere_tri_mesh(resolution),
            Self::Square { resolution } => create_square_tri_mesh(resolution),
            Self::Torus {
                segments,
                second_radius,
            } => Ok(create_torus_tri_mesh(segments, second_radius)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Shapes {
        mesh: Vec<Primitive>,
    }

    fn parse(source: &str) -> Vec<Primitive> {
        toml::from_str::<Shapes>(source).unwrap().mesh
    }

    #[test]
    fn test_parse_every_shape() {
        let shapes = parse(
            r#"
            [[mesh]]
            shape = "circle"
            segments = 32

            [[mesh]]
            shape = "cone"
            resolution = [16, 4]
            close_base = false

            [[mesh]]
            shape = "cube"

            [[mesh]]
            shape = "cylinder"
            resolution = [24, 2]
            top_radius = 0.5

            [[mesh]]
            shape = "ring"
            segments = 20
            second_radius = 0.6

            [[mesh]]
            shape = "sphere"
            resolution = [16, 8]

            [[mesh]]
            shape = "square"
            resolution = [2, 2]

            [[mesh]]
            shape = "torus"
            segments = 12
            second_radius = 0.25
            "#,
        );

        let names: Vec<_> = shapes.iter().map(Primitive::name).collect();
        assert_eq!(
            names,
            ["circle", "cone", "cube", "cylinder", "ring", "sphere", "square", "torus"]
        );

        assert_eq!(
            shapes[1],
            Primitive::Cone {
                resolution: UVec2::new(16, 4),
                close_base: false,
            }
        );
        assert_eq!(
            shapes[2],
            Primitive::Cube {
                resolution: UVec3::ONE
            }
        );
        assert_eq!(
            shapes[3],
            Primitive::Cylinder {
                resolution: UVec2::new(24, 2),
                top_radius: 0.5,
                base_radius: 1.0,
                close_top: true,
                close_base: true,
            }
        );
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let result = toml::from_str::<Shapes>(
            r#"
            [[mesh]]
            shape = "icosahedron"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_parameter_rejected() {
        let result = toml::from_str::<Shapes>(
            r#"
            [[mesh]]
            shape = "sphere"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_matches_generator() {
        let sphere = Primitive::Sphere {
            resolution: UVec2::new(8, 4),
        };
        assert_eq!(
            sphere.generate().unwrap(),
            create_sphere_tri_mesh(UVec2::new(8, 4)).unwrap()
        );

        let torus = Primitive::Torus {
            segments: 8,
            second_radius: 0.5,
        };
        assert!(torus.generate().unwrap().is_empty());
    }

    #[test]
    fn test_generate_propagates_errors() {
        let circle = Primitive::Circle { segments: 0 };
        assert!(matches!(
            circle.generate(),
            Err(MeshError::InvalidArgument { shape: "circle", .. })
        ));
    }
}
