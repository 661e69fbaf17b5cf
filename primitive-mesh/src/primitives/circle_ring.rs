//! Flat radial primitives in the XY plane (circle, ring)

use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use tracing::debug;

use super::{planar_uv, require_segments, unit_circle};
use crate::error::MeshError;
use crate::types::{MeshAttributes, TriMesh};

/// Generate a unit circle as a triangle fan facing +Z
///
/// # Arguments
/// * `segments` - Number of angular slices (must be > 0)
///
/// # Returns
/// Mesh with `3 × segments` vertices and identity indices. Vertices are not
/// shared between slices.
pub fn create_circle_tri_mesh(segments: u32) -> Result<TriMesh, MeshError> {
    let segments = require_segments("circle", segments)?;

    let mut mesh = MeshAttributes::with_capacity(segments as usize * 3);
    let normal = Vec3::Z;
    let center = Vec3::ZERO;
    let center_uv = Vec2::splat(0.5);

    let delta = (PI * 2.0) / segments as f32;
    let mut theta = delta;
    for i in 0..segments {
        let start = unit_circle(theta);
        // Close the fan on the first slice's start instead of the accumulated angle
        let end = if i >= segments - 1 {
            unit_circle(delta)
        } else {
            unit_circle(theta + delta)
        };

        mesh.push(start, normal, planar_uv(start));
        mesh.push(center, normal, center_uv);
        mesh.push(end, normal, planar_uv(end));

        theta += delta;
    }

    let mesh = mesh.into_identity_mesh();
    debug!(
        "circle: {} segments -> {} vertices, {} indices",
        segments,
        mesh.num_vertices(),
        mesh.num_indices()
    );
    Ok(mesh)
}

/// Generate an annulus between the unit circle and an inner circle, facing +Z
///
/// # Arguments
/// * `segments` - Number of angular slices (must be > 0)
/// * `second_radius` - Inner radius as a fraction of the outer one
///
/// # Returns
/// Mesh with `6 × segments` vertices (two triangles per slice) and identity indices
pub fn create_ring_tri_mesh(segments: u32, second_radius: f32) -> Result<TriMesh, MeshError> {
    let segments = require_segments("ring", segments)?;

    let mut mesh = MeshAttributes::with_capacity(segments as usize * 6);
    let normal = Vec3::Z;

    let delta = (PI * 2.0) / segments as f32;
    let mut theta = delta;
    for i in 0..segments {
        let outer0 = unit_circle(theta);
        let mut outer1 = unit_circle(theta + delta);
        let inner0 = outer0 * second_radius;
        let mut inner1 = outer1 * second_radius;
        if i >= segments - 1 {
            outer1 = unit_circle(delta);
            inner1 = outer1 * second_radius;
        }

        // {outer0, inner0, outer1}, {outer1, inner0, inner1}
        for corner in [outer0, inner0, outer1, outer1, inner0, inner1] {
            mesh.push(corner, normal, planar_uv(corner));
        }

        theta += delta;
    }

    let mesh = mesh.into_identity_mesh();
    debug!(
        "ring: {} segments, inner radius {} -> {} vertices",
        segments,
        second_radius,
        mesh.num_vertices()
    );
    Ok(mesh)
}
