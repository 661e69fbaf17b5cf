//! wgpu implementation of [`MeshBackend`]

use tracing::debug;

use super::{AttributeSlot, MeshBackend, PrimitiveTopology, VboLayout};
use crate::error::MeshError;

/// Shader locations for each attribute slot
const LOC_POSITION: u32 = 0;
const LOC_NORMAL: u32 = 1;
const LOC_TEX_COORD: u32 = 2;

/// Creates a single attribute at offset 0 (one buffer per attribute)
const fn attr(format: wgpu::VertexFormat, shader_location: u32) -> wgpu::VertexAttribute {
    wgpu::VertexAttribute {
        format,
        offset: 0,
        shader_location,
    }
}

static POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    [attr(wgpu::VertexFormat::Float32x3, LOC_POSITION)];
static NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    [attr(wgpu::VertexFormat::Float32x3, LOC_NORMAL)];
static TEX_COORD_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    [attr(wgpu::VertexFormat::Float32x2, LOC_TEX_COORD)];

impl From<PrimitiveTopology> for wgpu::PrimitiveTopology {
    fn from(topology: PrimitiveTopology) -> Self {
        match topology {
            PrimitiveTopology::PointList => Self::PointList,
            PrimitiveTopology::LineList => Self::LineList,
            PrimitiveTopology::LineStrip => Self::LineStrip,
            PrimitiveTopology::TriangleList => Self::TriangleList,
            PrimitiveTopology::TriangleStrip => Self::TriangleStrip,
        }
    }
}

/// Mesh buffers living on the GPU
///
/// Each attribute has its own buffer; a buffer is `None` when the mesh had no
/// data for it.
#[derive(Debug)]
pub struct GpuMesh {
    pub index_buffer: Option<wgpu::Buffer>,
    pub position_buffer: Option<wgpu::Buffer>,
    pub normal_buffer: Option<wgpu::Buffer>,
    pub tex_coord_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
    pub topology: PrimitiveTopology,
}

impl GpuMesh {
    /// Buffer backing `slot`, if allocated
    pub fn attribute_buffer(&self, slot: AttributeSlot) -> Option<&wgpu::Buffer> {
        match slot {
            AttributeSlot::Position => self.position_buffer.as_ref(),
            AttributeSlot::Normal => self.normal_buffer.as_ref(),
            AttributeSlot::TexCoord => self.tex_coord_buffer.as_ref(),
        }
    }

    /// Vertex buffer layout for binding `slot` in a render pipeline
    pub fn vertex_buffer_layout(slot: AttributeSlot) -> wgpu::VertexBufferLayout<'static> {
        let attributes: &'static [wgpu::VertexAttribute] = match slot {
            AttributeSlot::Position => &POSITION_ATTRIBUTES,
            AttributeSlot::Normal => &NORMAL_ATTRIBUTES,
            AttributeSlot::TexCoord => &TEX_COORD_ATTRIBUTES,
        };

        wgpu::VertexBufferLayout {
            array_stride: slot.stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }

    /// Topology for the render pipeline's primitive state
    pub fn wgpu_topology(&self) -> wgpu::PrimitiveTopology {
        self.topology.into()
    }
}

/// Allocates meshes with a borrowed device and uploads through its queue
pub struct WgpuMeshBackend<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl<'a> WgpuMeshBackend<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { device, queue }
    }

    fn create_buffer(&self, label: &str, size: u64, usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn write(&self, buffer: Option<&wgpu::Buffer>, name: &str, data: &[u8]) -> Result<(), MeshError> {
        let buffer = buffer
            .ok_or_else(|| MeshError::Backend(format!("{name} buffer was not allocated")))?;
        if data.len() as u64 > buffer.size() {
            return Err(MeshError::Backend(format!(
                "{name} data is {} bytes but the buffer holds {}",
                data.len(),
                buffer.size()
            )));
        }
        self.queue.write_buffer(buffer, 0, data);
        Ok(())
    }
}

impl MeshBackend for WgpuMeshBackend<'_> {
    type Handle = GpuMesh;

    fn create(
        &mut self,
        vertex_count: u32,
        index_count: u32,
        layout: VboLayout,
        topology: PrimitiveTopology,
    ) -> Result<GpuMesh, MeshError> {
        let vertices = u64::from(vertex_count);
        let attribute = |enabled: bool, slot: AttributeSlot, label: &str| {
            enabled.then(|| {
                self.create_buffer(label, vertices * slot.stride(), wgpu::BufferUsages::VERTEX)
            })
        };

        let mesh = GpuMesh {
            index_buffer: layout.static_indices.then(|| {
                self.create_buffer(
                    "Mesh Index Buffer",
                    u64::from(index_count) * 4,
                    wgpu::BufferUsages::INDEX,
                )
            }),
            position_buffer: attribute(
                layout.static_positions,
                AttributeSlot::Position,
                "Mesh Position Buffer",
            ),
            normal_buffer: attribute(
                layout.static_normals,
                AttributeSlot::Normal,
                "Mesh Normal Buffer",
            ),
            tex_coord_buffer: attribute(
                layout.static_tex_coords,
                AttributeSlot::TexCoord,
                "Mesh TexCoord Buffer",
            ),
            vertex_count,
            index_count,
            topology,
        };

        debug!(
            "Allocated GPU mesh: {} vertices, {} indices",
            vertex_count, index_count
        );
        Ok(mesh)
    }

    fn upload_indices(&mut self, handle: &mut GpuMesh, indices: &[u32]) -> Result<(), MeshError> {
        self.write(
            handle.index_buffer.as_ref(),
            "index",
            bytemuck::cast_slice(indices),
        )
    }

    fn upload_attribute(
        &mut self,
        handle: &mut GpuMesh,
        slot: AttributeSlot,
        data: &[u8],
    ) -> Result<(), MeshError> {
        let name = match slot {
            AttributeSlot::Position => "position",
            AttributeSlot::Normal => "normal",
            AttributeSlot::TexCoord => "texcoord",
        };
        self.write(handle.attribute_buffer(slot), name, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layouts() {
        let position = GpuMesh::vertex_buffer_layout(AttributeSlot::Position);
        assert_eq!(position.array_stride, 12);
        assert_eq!(position.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(position.attributes[0].shader_location, LOC_POSITION);

        let tex_coord = GpuMesh::vertex_buffer_layout(AttributeSlot::TexCoord);
        assert_eq!(tex_coord.array_stride, 8);
        assert_eq!(tex_coord.attributes[0].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(tex_coord.attributes[0].shader_location, LOC_TEX_COORD);
    }

    #[test]
    fn test_topology_conversion() {
        assert_eq!(
            wgpu::PrimitiveTopology::from(PrimitiveTopology::TriangleList),
            wgpu::PrimitiveTopology::TriangleList
        );
        assert_eq!(
            wgpu::PrimitiveTopology::from(PrimitiveTopology::LineStrip),
            wgpu::PrimitiveTopology::LineStrip
        );
    }
}
