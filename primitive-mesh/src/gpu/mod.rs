//! GPU buffer adapter
//!
//! Turns generated meshes into GPU vertex/index buffers through a
//! [`MeshBackend`]. Only arrays that are non-empty get a buffer, and each of
//! them is uploaded exactly once, in the order indices, normals, positions,
//! texture coordinates.

#[cfg(feature = "wgpu")]
mod wgpu_backend;

#[cfg(test)]
mod tests;

use glam::{UVec2, UVec3, Vec2, Vec3};
use tracing::debug;

use crate::error::MeshError;
use crate::primitives::{
    create_circle_tri_mesh, create_cone_tri_mesh, create_cube_tri_mesh, create_cylinder_tri_mesh,
    create_ring_tri_mesh, create_sphere_tri_mesh, create_square_tri_mesh, create_torus_tri_mesh,
};
use crate::types::TriMesh;

#[cfg(feature = "wgpu")]
pub use wgpu_backend::{GpuMesh, WgpuMeshBackend};

/// How consecutive indices are assembled into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    #[default]
    TriangleList,
    TriangleStrip,
}

/// Which buffers a mesh carries
///
/// A flag is set only when the matching array is non-empty; all buffers are
/// written once and never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VboLayout {
    pub static_indices: bool,
    pub static_positions: bool,
    pub static_normals: bool,
    pub static_tex_coords: bool,
}

impl VboLayout {
    /// Layout for the given arrays
    pub fn for_arrays(
        indices: &[u32],
        positions: &[Vec3],
        normals: &[Vec3],
        tex_coords: &[Vec2],
    ) -> Self {
        Self {
            static_indices: !indices.is_empty(),
            static_positions: !positions.is_empty(),
            static_normals: !normals.is_empty(),
            static_tex_coords: !tex_coords.is_empty(),
        }
    }
}

/// Vertex attribute buffer slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    /// `Float32x3`
    Position,
    /// `Float32x3`
    Normal,
    /// `Float32x2`, texture slot 0
    TexCoord,
}

impl AttributeSlot {
    /// Size of one element in bytes
    pub const fn stride(self) -> u64 {
        match self {
            Self::Position | Self::Normal => 12,
            Self::TexCoord => 8,
        }
    }
}

/// Allocates mesh buffers and uploads data into them
///
/// Attribute data arrives as raw little-endian `f32` bytes, tightly packed.
pub trait MeshBackend {
    /// Backend-side mesh object
    type Handle;

    /// Allocate a mesh with one buffer per flag set in `layout`
    fn create(
        &mut self,
        vertex_count: u32,
        index_count: u32,
        layout: VboLayout,
        topology: PrimitiveTopology,
    ) -> Result<Self::Handle, MeshError>;

    /// Write the index buffer
    fn upload_indices(&mut self, handle: &mut Self::Handle, indices: &[u32])
    -> Result<(), MeshError>;

    /// Write one attribute buffer
    fn upload_attribute(
        &mut self,
        handle: &mut Self::Handle,
        slot: AttributeSlot,
        data: &[u8],
    ) -> Result<(), MeshError>;
}

fn count_u32(what: &'static str, count: usize) -> Result<u32, MeshError> {
    u32::try_from(count).map_err(|_| MeshError::CountOverflow { what, count })
}

/// Allocate a mesh on `backend` and upload every non-empty array
///
/// The vertex count is the number of positions. Array lengths are not
/// checked against each other.
pub fn create_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    indices: &[u32],
    positions: &[Vec3],
    normals: &[Vec3],
    tex_coords: &[Vec2],
    topology: PrimitiveTopology,
) -> Result<B::Handle, MeshError> {
    let vertex_count = count_u32("vertex", positions.len())?;
    let index_count = count_u32("index", indices.len())?;
    let layout = VboLayout::for_arrays(indices, positions, normals, tex_coords);

    debug!(
        "Creating VBO mesh: {} vertices, {} indices, {:?}, {:?}",
        vertex_count, index_count, layout, topology
    );
    let mut handle = backend.create(vertex_count, index_count, layout, topology)?;

    if layout.static_indices {
        debug!("Uploading {} indices", indices.len());
        backend.upload_indices(&mut handle, indices)?;
    }
    if layout.static_normals {
        debug!("Uploading {} normals", normals.len());
        backend.upload_attribute(
            &mut handle,
            AttributeSlot::Normal,
            bytemuck::cast_slice(normals),
        )?;
    }
    if layout.static_positions {
        debug!("Uploading {} positions", positions.len());
        backend.upload_attribute(
            &mut handle,
            AttributeSlot::Position,
            bytemuck::cast_slice(positions),
        )?;
    }
    if layout.static_tex_coords {
        debug!("Uploading {} texture coordinates", tex_coords.len());
        backend.upload_attribute(
            &mut handle,
            AttributeSlot::TexCoord,
            bytemuck::cast_slice(tex_coords),
        )?;
    }

    Ok(handle)
}

/// Upload an already generated mesh as a triangle list
pub fn create_vbo_mesh_from_tri_mesh<B: MeshBackend>(
    backend: &mut B,
    mesh: &TriMesh,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh(
        backend,
        mesh.indices(),
        mesh.positions(),
        mesh.normals(),
        mesh.tex_coords(),
        PrimitiveTopology::TriangleList,
    )
}

pub fn create_circle_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    segments: u32,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_circle_tri_mesh(segments)?)
}

pub fn create_cone_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    resolution: UVec2,
    close_base: bool,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_cone_tri_mesh(resolution, close_base)?)
}

pub fn create_cube_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    resolution: UVec3,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_cube_tri_mesh(resolution))
}

pub fn create_cylinder_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    resolution: UVec2,
    top_radius: f32,
    base_radius: f32,
    close_top: bool,
    close_base: bool,
) -> Result<B::Handle, MeshError> {
    let mesh =
        create_cylinder_tri_mesh(resolution, top_radius, base_radius, close_top, close_base)?;
    create_vbo_mesh_from_tri_mesh(backend, &mesh)
}

pub fn create_ring_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    segments: u32,
    second_radius: f32,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_ring_tri_mesh(segments, second_radius)?)
}

pub fn create_sphere_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    resolution: UVec2,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_sphere_tri_mesh(resolution)?)
}

pub fn create_square_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    resolution: UVec2,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_square_tri_mesh(resolution)?)
}

/// Always allocates an empty mesh
pub fn create_torus_vbo_mesh<B: MeshBackend>(
    backend: &mut B,
    segments: u32,
    second_radius: f32,
) -> Result<B::Handle, MeshError> {
    create_vbo_mesh_from_tri_mesh(backend, &create_torus_tri_mesh(segments, second_radius))
}
