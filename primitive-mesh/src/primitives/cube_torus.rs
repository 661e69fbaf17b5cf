//! Fixed and placeholder primitives (cube, torus)

use glam::{UVec3, Vec2, Vec3};
use tracing::debug;

use crate::types::{TriMesh, create_tri_mesh};

/// Generate a unit cube centered at the origin
///
/// # Arguments
/// * `resolution` - Reserved for face subdivision; currently ignored
///
/// # Returns
/// Mesh with 24 vertices (4 per face, faces ordered +X, +Y, +Z, -X, -Y, -Z)
/// and 36 indices (6 faces × 2 triangles × 3)
pub fn create_cube_tri_mesh(resolution: UVec3) -> TriMesh {
    let size = Vec3::splat(0.5);
    let pos0 = Vec3::new(1.0, 1.0, 1.0) * size;
    let pos1 = Vec3::new(1.0, -1.0, 1.0) * size;
    let pos2 = Vec3::new(1.0, -1.0, -1.0) * size;
    let pos3 = Vec3::new(1.0, 1.0, -1.0) * size;
    let pos4 = Vec3::new(-1.0, 1.0, -1.0) * size;
    let pos5 = Vec3::new(-1.0, 1.0, 1.0) * size;
    let pos6 = Vec3::new(-1.0, -1.0, -1.0) * size;
    let pos7 = Vec3::new(-1.0, -1.0, 1.0) * size;

    #[rustfmt::skip]
    let positions = [
        pos0, pos1, pos2, pos3, // +X
        pos0, pos3, pos4, pos5, // +Y
        pos0, pos5, pos7, pos1, // +Z
        pos5, pos4, pos6, pos7, // -X
        pos6, pos2, pos1, pos7, // -Y
        pos2, pos6, pos4, pos3, // -Z
    ];

    let face_normals = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_X, Vec3::NEG_Y, Vec3::NEG_Z];
    let normals: Vec<Vec3> = face_normals
        .iter()
        .flat_map(|&normal| [normal; 4])
        .collect();

    let uv0 = Vec2::new(0.0, 0.0);
    let uv1 = Vec2::new(1.0, 0.0);
    let uv2 = Vec2::new(1.0, 1.0);
    let uv3 = Vec2::new(0.0, 1.0);

    // Corner UVs chosen so neighbouring faces line up
    #[rustfmt::skip]
    let tex_coords = [
        uv3, uv2, uv1, uv0,
        uv2, uv1, uv0, uv3,
        uv3, uv2, uv1, uv0,
        uv2, uv1, uv0, uv3,
        uv1, uv0, uv3, uv2,
        uv1, uv0, uv3, uv2,
    ];

    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    let mesh = create_tri_mesh(&indices, &positions, &normals, &tex_coords);
    debug!(
        "cube: resolution {} (unused) -> {} vertices, {} indices",
        resolution,
        mesh.num_vertices(),
        mesh.num_indices()
    );
    mesh
}

/// Torus placeholder
///
/// Always returns an empty mesh; `segments` and `second_radius` are accepted
/// for API stability only.
pub fn create_torus_tri_mesh(segments: u32, second_radius: f32) -> TriMesh {
    // TODO: ring-of-rings tessellation with `segments` major divisions and minor radius `second_radius`
    debug!("torus: not implemented, segments {segments}, second radius {second_radius}");
    create_tri_mesh(&[], &[], &[], &[])
}
