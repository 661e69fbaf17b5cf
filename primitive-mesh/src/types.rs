//! Mesh types
//!
//! Shared types for primitive mesh generation.

use glam::{Vec2, Vec3};

/// Triangle mesh with index-aligned attribute arrays
///
/// Any of the four arrays may be empty, which means the attribute was not
/// produced. Consecutive index triples form triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    indices: Vec<u32>,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
}

impl TriMesh {
    /// Triangle indices into the attribute arrays
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates (slot 0)
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Get vertex count
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get index count
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Get triangle count (trailing indices that do not form a triangle are not counted)
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// True when all four arrays are empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
            && self.positions.is_empty()
            && self.normals.is_empty()
            && self.tex_coords.is_empty()
    }

    /// Index triple of triangle `i`
    pub fn triangle(&self, i: usize) -> Option<[u32; 3]> {
        let start = i.checked_mul(3)?;
        match self.indices.get(start..start.checked_add(3)?) {
            Some(&[a, b, c]) => Some([a, b, c]),
            _ => None,
        }
    }

    /// Iterate over complete index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Axis-aligned bounds of the positions, `None` when there are none
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }

    /// Split into (indices, positions, normals, tex_coords)
    pub fn into_parts(self) -> (Vec<u32>, Vec<Vec3>, Vec<Vec3>, Vec<Vec2>) {
        (self.indices, self.positions, self.normals, self.tex_coords)
    }
}

/// Assemble a mesh from four attribute arrays
///
/// Array lengths are not checked against each other; whatever is passed in
/// ends up in the mesh.
pub fn create_tri_mesh(
    indices: &[u32],
    positions: &[Vec3],
    normals: &[Vec3],
    tex_coords: &[Vec2],
) -> TriMesh {
    let mut mesh = TriMesh::default();
    if !indices.is_empty() {
        mesh.indices.extend_from_slice(indices);
    }
    for &normal in normals {
        mesh.normals.push(normal);
    }
    if !positions.is_empty() {
        mesh.positions.extend_from_slice(positions);
    }
    for &tex_coord in tex_coords {
        mesh.tex_coords.push(tex_coord);
    }
    mesh
}

/// Working attribute arrays for a generator
///
/// Flat-shaded generators push one entry per triangle corner and finish with
/// an identity index buffer.
#[derive(Default)]
pub(crate) struct MeshAttributes {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tex_coords: Vec<Vec2>,
}

impl MeshAttributes {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            tex_coords: Vec::with_capacity(vertices),
        }
    }

    /// Add a vertex
    pub fn push(&mut self, position: Vec3, normal: Vec3, tex_coord: Vec2) {
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
    }

    /// Assemble with indices `0..vertex_count`
    pub fn into_identity_mesh(self) -> TriMesh {
        let indices: Vec<u32> = (0..self.positions.len() as u32).collect();
        create_tri_mesh(&indices, &self.positions, &self.normals, &self.tex_coords)
    }

    /// Assemble with explicit indices
    pub fn into_indexed_mesh(self, indices: &[u32]) -> TriMesh {
        create_tri_mesh(indices, &self.positions, &self.normals, &self.tex_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembly_keeps_order() {
        let positions = [Vec3::X, Vec3::Y, Vec3::Z];
        let normals = [Vec3::Z; 3];
        let tex_coords = [Vec2::ZERO, Vec2::X, Vec2::Y];
        let mesh = create_tri_mesh(&[2, 1, 0], &positions, &normals, &tex_coords);

        assert_eq!(mesh.indices(), &[2, 1, 0]);
        assert_eq!(mesh.positions(), &positions);
        assert_eq!(mesh.normals(), &normals);
        assert_eq!(mesh.tex_coords(), &tex_coords);
    }

    #[test]
    fn test_assembly_empty_arrays() {
        let mesh = create_tri_mesh(&[], &[], &[], &[]);
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), None);
        assert_eq!(mesh.triangle(0), None);
    }

    #[test]
    fn test_assembly_does_not_validate_lengths() {
        // Mismatched lengths pass through untouched
        let mesh = create_tri_mesh(&[0, 1, 2, 3, 4, 5], &[Vec3::ONE], &[], &[Vec2::ONE; 4]);
        assert_eq!(mesh.num_indices(), 6);
        assert_eq!(mesh.num_vertices(), 1);
        assert!(mesh.normals().is_empty());
        assert_eq!(mesh.tex_coords().len(), 4);
    }

    #[test]
    fn test_triangles_ignore_trailing_indices() {
        let mesh = create_tri_mesh(&[0, 1, 2, 3, 4], &[Vec3::ZERO; 5], &[], &[]);
        assert_eq!(mesh.num_triangles(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
        assert_eq!(mesh.triangle(1), None);
    }

    #[test]
    fn test_bounds() {
        let positions = [
            Vec3::new(-1.0, 2.0, 0.5),
            Vec3::new(3.0, -4.0, 0.0),
            Vec3::new(0.0, 0.0, -2.0),
        ];
        let mesh = create_tri_mesh(&[0, 1, 2], &positions, &[], &[]);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -4.0, -2.0));
        assert_eq!(max, Vec3::new(3.0, 2.0, 0.5));
    }

    #[test]
    fn test_identity_mesh() {
        let mut attributes = MeshAttributes::with_capacity(3);
        attributes.push(Vec3::X, Vec3::Z, Vec2::ZERO);
        attributes.push(Vec3::Y, Vec3::Z, Vec2::ONE);
        attributes.push(Vec3::ZERO, Vec3::Z, Vec2::X);
        let mesh = attributes.into_identity_mesh();
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.num_vertices(), 3);
    }
}
