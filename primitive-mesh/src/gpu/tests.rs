//! Tests for the GPU buffer adapter

use super::*;
use crate::types::create_tri_mesh;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create {
        vertex_count: u32,
        index_count: u32,
        layout: VboLayout,
        topology: PrimitiveTopology,
    },
    Indices(Vec<u32>),
    Attribute(AttributeSlot, usize),
}

/// Records every call instead of touching a GPU
#[derive(Default)]
struct RecordingBackend {
    calls: Vec<Call>,
    fail_uploads: bool,
}

#[derive(Debug, Default)]
struct RecordedMesh {
    uploads: usize,
    positions: Vec<u8>,
}

impl MeshBackend for RecordingBackend {
    type Handle = RecordedMesh;

    fn create(
        &mut self,
        vertex_count: u32,
        index_count: u32,
        layout: VboLayout,
        topology: PrimitiveTopology,
    ) -> Result<RecordedMesh, MeshError> {
        self.calls.push(Call::Create {
            vertex_count,
            index_count,
            layout,
            topology,
        });
        Ok(RecordedMesh::default())
    }

    fn upload_indices(
        &mut self,
        handle: &mut RecordedMesh,
        indices: &[u32],
    ) -> Result<(), MeshError> {
        if self.fail_uploads {
            return Err(MeshError::Backend("device lost".into()));
        }
        handle.uploads += 1;
        self.calls.push(Call::Indices(indices.to_vec()));
        Ok(())
    }

    fn upload_attribute(
        &mut self,
        handle: &mut RecordedMesh,
        slot: AttributeSlot,
        data: &[u8],
    ) -> Result<(), MeshError> {
        handle.uploads += 1;
        if slot == AttributeSlot::Position {
            handle.positions = data.to_vec();
        }
        self.calls.push(Call::Attribute(slot, data.len()));
        Ok(())
    }
}

#[test]
fn test_upload_order() {
    let mut backend = RecordingBackend::default();
    let mesh = create_square_vbo_mesh(&mut backend, UVec2::ONE).unwrap();

    assert_eq!(mesh.uploads, 4);
    assert_eq!(
        backend.calls,
        vec![
            Call::Create {
                vertex_count: 6,
                index_count: 6,
                layout: VboLayout {
                    static_indices: true,
                    static_positions: true,
                    static_normals: true,
                    static_tex_coords: true,
                },
                topology: PrimitiveTopology::TriangleList,
            },
            Call::Indices(vec![0, 1, 2, 3, 4, 5]),
            Call::Attribute(AttributeSlot::Normal, 6 * 12),
            Call::Attribute(AttributeSlot::Position, 6 * 12),
            Call::Attribute(AttributeSlot::TexCoord, 6 * 8),
        ]
    );
}

#[test]
fn test_empty_arrays_skipped() {
    let mut backend = RecordingBackend::default();
    let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let mesh = create_vbo_mesh(
        &mut backend,
        &[],
        &positions,
        &[],
        &[],
        PrimitiveTopology::LineStrip,
    )
    .unwrap();

    assert_eq!(mesh.uploads, 1);
    assert_eq!(
        backend.calls,
        vec![
            Call::Create {
                vertex_count: 3,
                index_count: 0,
                layout: VboLayout {
                    static_positions: true,
                    ..VboLayout::default()
                },
                topology: PrimitiveTopology::LineStrip,
            },
            Call::Attribute(AttributeSlot::Position, 36),
        ]
    );
}

#[test]
fn test_torus_allocates_empty_mesh() {
    let mut backend = RecordingBackend::default();
    let mesh = create_torus_vbo_mesh(&mut backend, 16, 0.5).unwrap();

    assert_eq!(mesh.uploads, 0);
    assert_eq!(
        backend.calls,
        vec![Call::Create {
            vertex_count: 0,
            index_count: 0,
            layout: VboLayout::default(),
            topology: PrimitiveTopology::TriangleList,
        }]
    );
}

#[test]
fn test_position_bytes_are_packed_f32() {
    let mut backend = RecordingBackend::default();
    let source = create_tri_mesh(&[0], &[Vec3::new(1.0, -2.0, 0.5)], &[], &[]);
    let mesh = create_vbo_mesh_from_tri_mesh(&mut backend, &source).unwrap();

    let floats: Vec<f32> = mesh
        .positions
        .chunks_exact(4)
        .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect();
    assert_eq!(floats, [1.0, -2.0, 0.5]);
}

#[test]
fn test_sphere_counts_forwarded() {
    let mut backend = RecordingBackend::default();
    create_sphere_vbo_mesh(&mut backend, UVec2::new(8, 4)).unwrap();

    match &backend.calls[0] {
        Call::Create {
            vertex_count,
            index_count,
            ..
        } => {
            assert_eq!(*vertex_count, 5 * 8);
            assert_eq!(*index_count, 4 * 8 * 6 + 8 * 3);
        }
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn test_generator_errors_skip_backend() {
    let mut backend = RecordingBackend::default();
    let result = create_cylinder_vbo_mesh(&mut backend, UVec2::new(0, 1), 1.0, 1.0, true, true);

    assert!(matches!(result, Err(MeshError::InvalidArgument { .. })));
    assert!(backend.calls.is_empty());
}

#[test]
fn test_backend_errors_propagate() {
    let mut backend = RecordingBackend {
        fail_uploads: true,
        ..RecordingBackend::default()
    };
    let result = create_cube_vbo_mesh(&mut backend, UVec3::ONE);

    assert_eq!(result.unwrap_err(), MeshError::Backend("device lost".into()));
    // Allocation happened, nothing after the failed index upload
    assert_eq!(backend.calls.len(), 1);
}

#[test]
fn test_every_shape_wrapper_uploads() {
    let mut backend = RecordingBackend::default();
    create_circle_vbo_mesh(&mut backend, 8).unwrap();
    create_cone_vbo_mesh(&mut backend, UVec2::new(8, 2), true).unwrap();
    create_ring_vbo_mesh(&mut backend, 8, 0.5).unwrap();

    let creates = backend
        .calls
        .iter()
        .filter(|call| matches!(call, Call::Create { .. }))
        .count();
    assert_eq!(creates, 3);
    assert_eq!(backend.calls.len(), 3 * 5);
}
