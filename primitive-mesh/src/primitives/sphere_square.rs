//! Grid-sampled primitives (sphere, square)

use glam::{UVec2, Vec2, Vec3};
use std::f32::consts::PI;
use tracing::debug;

use super::{next_column, planar_uv, require_resolution};
use crate::error::MeshError;
use crate::types::{MeshAttributes, TriMesh};

/// Generate a unit UV sphere centered at the origin
///
/// # Arguments
/// * `resolution` - (longitude segments, latitude segments), both > 0
///
/// # Returns
/// Mesh with `(resolution.y + 1) × resolution.x` shared vertices, running
/// from the -Z pole to the +Z pole.
///
/// Indices for every cell are emitted eagerly, including cells that would
/// reach one row past the +Z pole. Those out-of-range indices are dropped
/// afterwards, which leaves one degenerate triangle per vertex of the last row.
pub fn create_sphere_tri_mesh(resolution: UVec2) -> Result<TriMesh, MeshError> {
    let (columns, rows) = require_resolution("sphere", resolution)?;

    let step = PI / rows as f32;
    let delta = (PI * 2.0) / columns as f32;

    let vertex_count = (rows as usize + 1) * columns as usize;
    let mut mesh = MeshAttributes::with_capacity(vertex_count);
    let mut indices: Vec<u32> = Vec::with_capacity(vertex_count * 6);

    let mut phi = 0.0f32;
    for p in 0..=rows {
        let mut theta = delta;
        for t in 0..columns {
            let sin_p = phi.sin();
            let position = Vec3::new(sin_p * theta.cos(), sin_p * theta.sin(), -phi.cos());
            let normal = position.normalize();
            mesh.push(position, normal, planar_uv(normal));

            let n = next_column(t, columns);
            indices.extend_from_slice(&[
                p * columns + t,
                (p + 1) * columns + t,
                p * columns + n,
                p * columns + n,
                (p + 1) * columns + t,
                (p + 1) * columns + n,
            ]);

            theta += delta;
        }

        phi += step;
    }

    let emitted = indices.len();
    let vertex_count = mesh.positions.len();
    indices.retain(|&index| (index as usize) < vertex_count);

    let mesh = mesh.into_indexed_mesh(&indices);
    debug!(
        "sphere: resolution {} -> {} vertices, {} indices ({} pruned)",
        resolution,
        mesh.num_vertices(),
        mesh.num_indices(),
        emitted - mesh.num_indices()
    );
    Ok(mesh)
}

/// Generate a unit square in the XY plane facing +Z
///
/// # Arguments
/// * `resolution` - (columns, rows) of grid cells, both > 0
///
/// # Returns
/// Mesh spanning [-0.5, 0.5]² with 6 unshared vertices per cell and identity
/// indices. Texture coordinates run 0→1 across the square.
pub fn create_square_tri_mesh(resolution: UVec2) -> Result<TriMesh, MeshError> {
    let (columns, rows) = require_resolution("square", resolution)?;

    let normal = Vec3::Z;
    let scale = Vec2::new(1.0 / columns as f32, 1.0 / rows as f32);

    let mut mesh = MeshAttributes::with_capacity(columns as usize * rows as usize * 6);
    for y in 0..rows {
        for x in 0..columns {
            let x1 = x as f32 * scale.x;
            let y1 = y as f32 * scale.y;
            let x2 = (x + 1) as f32 * scale.x;
            let y2 = (y + 1) as f32 * scale.y;

            let uv0 = Vec2::new(x1, y1);
            let uv1 = Vec2::new(x2, y1);
            let uv2 = Vec2::new(x1, y2);
            let uv3 = Vec2::new(x2, y2);

            for uv in [uv2, uv1, uv0, uv1, uv2, uv3] {
                mesh.push((uv - 0.5).extend(0.0), normal, uv);
            }
        }
    }

    let mesh = mesh.into_identity_mesh();
    debug!(
        "square: resolution {} -> {} vertices",
        resolution,
        mesh.num_vertices()
    );
    Ok(mesh)
}
