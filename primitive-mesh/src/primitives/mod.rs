//! Primitive mesh generators
//!
//! One function per shape. Generators are pure: the same parameters always
//! produce bit-identical meshes. Angles and heights are accumulated step by
//! step rather than recomputed from the loop counter; the rounding that
//! introduces is part of the output.
//!
//! Zero segment or resolution counts are rejected with
//! [`MeshError::InvalidArgument`](crate::MeshError::InvalidArgument). The cube
//! and torus ignore their counts and never fail.

mod circle_ring;
mod cone_cylinder;
mod cube_torus;
mod sphere_square;


use glam::{UVec2, Vec2, Vec3};
use tracing::warn;

use crate::error::MeshError;

pub use circle_ring::{create_circle_tri_mesh, create_ring_tri_mesh};
pub use cone_cylinder::{create_cone_tri_mesh, create_cylinder_tri_mesh};
pub use cube_torus::{create_cube_tri_mesh, create_torus_tri_mesh};
pub use sphere_square::{create_sphere_tri_mesh, create_square_tri_mesh};

/// Reject a zero segment count
fn require_segments(shape: &'static str, segments: u32) -> Result<u32, MeshError> {
    if segments == 0 {
        warn!("{shape}: segments must be > 0");
        return Err(MeshError::invalid(shape, "segments must be > 0"));
    }
    Ok(segments)
}

/// Reject a resolution with a zero component, returning (x, y)
fn require_resolution(shape: &'static str, resolution: UVec2) -> Result<(u32, u32), MeshError> {
    if resolution.x == 0 || resolution.y == 0 {
        warn!("{shape}: resolution must be > 0 on both axes, got {resolution}");
        return Err(MeshError::invalid(
            shape,
            format!("resolution must be > 0 on both axes, got {resolution}"),
        ));
    }
    Ok((resolution.x, resolution.y))
}

/// Point on the unit circle in the XY plane
fn unit_circle(theta: f32) -> Vec3 {
    Vec3::new(theta.cos(), theta.sin(), 0.0)
}

/// Map XY in [-1, 1] to texture space [0, 1]
fn planar_uv(position: Vec3) -> Vec2 {
    (position.truncate() + Vec2::ONE) * 0.5
}

/// Next column around a closed ring of `columns` samples
fn next_column(t: u32, columns: u32) -> u32 {
    if t + 1 >= columns { 0 } else { t + 1 }
}
