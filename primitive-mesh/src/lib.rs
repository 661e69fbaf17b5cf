//! Parametric triangle meshes for primitive solids
//!
//! Every generator returns a [`TriMesh`] built from four parallel arrays
//! (indices, positions, normals, texture coordinates). Meshes can be handed to
//! any [`MeshBackend`] for GPU upload.
//!
//! # Modules
//!
//! - [`primitives`] - One generator per shape (circle, cone, cube, cylinder, ring, sphere, square, torus)
//! - [`types`] - [`TriMesh`] and the shared assembly step
//! - [`shape`] - Serializable shape descriptors
//! - [`export`] - Wavefront OBJ writer
//! - [`gpu`] - GPU buffer adapter and backends
//!
//! # Example
//!
//! ```
//! use glam::UVec2;
//! use primitive_mesh::create_sphere_tri_mesh;
//!
//! let sphere = create_sphere_tri_mesh(UVec2::new(16, 8))?;
//! assert_eq!(sphere.num_vertices(), 16 * 9);
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

pub mod error;
pub mod export;
pub mod gpu;
pub mod primitives;
pub mod shape;
pub mod types;

pub use error::MeshError;
pub use export::write_obj;
pub use gpu::{
    AttributeSlot, MeshBackend, PrimitiveTopology, VboLayout, create_circle_vbo_mesh,
    create_cone_vbo_mesh, create_cube_vbo_mesh, create_cylinder_vbo_mesh, create_ring_vbo_mesh,
    create_sphere_vbo_mesh, create_square_vbo_mesh, create_torus_vbo_mesh, create_vbo_mesh,
    create_vbo_mesh_from_tri_mesh,
};
pub use primitives::{
    create_circle_tri_mesh, create_cone_tri_mesh, create_cube_tri_mesh, create_cylinder_tri_mesh,
    create_ring_tri_mesh, create_sphere_tri_mesh, create_square_tri_mesh, create_torus_tri_mesh,
};
pub use shape::Primitive;
pub use types::{TriMesh, create_tri_mesh};

#[cfg(feature = "wgpu")]
pub use gpu::{GpuMesh, WgpuMeshBackend};
