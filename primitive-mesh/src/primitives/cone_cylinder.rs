//! Surfaces of revolution around the Y axis (cone, cylinder)

use glam::{UVec2, Vec2, Vec3};
use std::f32::consts::PI;
use tracing::debug;

use super::{next_column, require_resolution};
use crate::error::MeshError;
use crate::types::{MeshAttributes, TriMesh};

/// Cone lateral positions are generated on y ∈ [0, 1] and shifted to be centered
const CONE_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.0);

/// Sampled rings of a surface of revolution
///
/// Row-major: `rows + 1` rings of `columns` samples, row 0 at the base.
struct RingStack {
    columns: u32,
    rows: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
}

/// A synthetic cap center with the attributes shared by every fan corner
#[derive(Clone, Copy)]
struct CapCenter {
    position: Vec3,
    normal: Vec3,
    tex_coord: Vec2,
}

impl RingStack {
    fn with_capacity(columns: u32, rows: u32) -> Self {
        let samples = columns as usize * (rows as usize + 1);
        Self {
            columns,
            rows,
            positions: Vec::with_capacity(samples),
            normals: Vec::with_capacity(samples),
            tex_coords: Vec::with_capacity(samples),
        }
    }

    fn push(&mut self, position: Vec3, normal: Vec3, tex_coord: Vec2) {
        self.positions.push(position);
        self.normals.push(normal);
        self.tex_coords.push(tex_coord);
    }

    fn index(&self, row: u32, column: u32) -> usize {
        (row * self.columns + column) as usize
    }

    fn emit(&self, index: usize, mesh: &mut MeshAttributes) {
        mesh.push(
            self.positions[index],
            self.normals[index],
            self.tex_coords[index],
        );
    }

    /// Two triangles per cell between adjacent rings
    fn emit_lateral(&self, mesh: &mut MeshAttributes) {
        for p in 0..self.rows {
            for t in 0..self.columns {
                let n = next_column(t, self.columns);

                let i0 = self.index(p, t);
                let i1 = self.index(p, n);
                let i2 = self.index(p + 1, t);
                let i3 = self.index(p + 1, n);

                // Outward-facing: (p,t) -> (p+1,t) -> (p,n), then (p,n) -> (p+1,t) -> (p+1,n)
                for index in [i0, i2, i1, i1, i2, i3] {
                    self.emit(index, mesh);
                }
            }
        }
    }

    /// Fan from `center` to every edge of ring `row`
    fn emit_cap(&self, row: u32, center: CapCenter, mesh: &mut MeshAttributes) {
        for t in 0..self.columns {
            let n = next_column(t, self.columns);
            mesh.push(center.position, center.normal, center.tex_coord);
            mesh.push(
                self.positions[self.index(row, t)],
                center.normal,
                center.tex_coord,
            );
            mesh.push(
                self.positions[self.index(row, n)],
                center.normal,
                center.tex_coord,
            );
        }
    }

    fn lateral_vertex_count(&self) -> usize {
        self.columns as usize * self.rows as usize * 6
    }

    fn cap_vertex_count(&self) -> usize {
        self.columns as usize * 3
    }
}

/// Generate a cone along Y with its apex at the top, vertically centered on the origin
///
/// # Arguments
/// * `resolution` - (radial segments, height segments), both > 0
/// * `close_base` - Append a fan closing the base
///
/// # Returns
/// Mesh with identity indices. Lateral normals are the normalized
/// (un-centered) position, which ignores the slant of the surface.
pub fn create_cone_tri_mesh(resolution: UVec2, close_base: bool) -> Result<TriMesh, MeshError> {
    let (columns, rows) = require_resolution("cone", resolution)?;

    let delta = (2.0 * PI) / columns as f32;
    let step = 1.0 / rows as f32;
    let ut = 1.0 / columns as f32;

    let mut stack = RingStack::with_capacity(columns, rows);
    let mut phi = 0.0f32;
    for _ in 0..=rows {
        let radius = 1.0 - phi;

        let mut theta = 0.0f32;
        let mut u = 0.0f32;
        for _ in 0..columns {
            let position = Vec3::new(theta.cos() * radius, phi, theta.sin() * radius);
            stack.push(
                position + CONE_OFFSET,
                position.normalize(),
                Vec2::new(u, position.y),
            );

            u += ut;
            theta += delta;
        }

        phi += step;
    }

    let mut capacity = stack.lateral_vertex_count();
    if close_base {
        capacity += stack.cap_vertex_count();
    }
    let mut mesh = MeshAttributes::with_capacity(capacity);

    stack.emit_lateral(&mut mesh);

    if close_base {
        let base = CapCenter {
            position: CONE_OFFSET,
            normal: Vec3::NEG_Y,
            tex_coord: Vec2::ZERO,
        };
        stack.emit_cap(0, base, &mut mesh);
    }

    let mesh = mesh.into_identity_mesh();
    debug!(
        "cone: resolution {}, close_base {} -> {} vertices",
        resolution,
        close_base,
        mesh.num_vertices()
    );
    Ok(mesh)
}

/// Generate a cylinder along Y spanning y ∈ [-0.5, 0.5]
///
/// # Arguments
/// * `resolution` - (radial segments, height segments), both > 0
/// * `top_radius` - Radius at y = 0.5
/// * `base_radius` - Radius at y = -0.5
/// * `close_top` - Prepend a fan closing the top
/// * `close_base` - Append a fan closing the base
///
/// # Returns
/// Mesh with identity indices. Lateral normals are the normalized position
/// with Y zeroed afterwards, so they are only unit length where the position
/// has no Y component.
pub fn create_cylinder_tri_mesh(
    resolution: UVec2,
    top_radius: f32,
    base_radius: f32,
    close_top: bool,
    close_base: bool,
) -> Result<TriMesh, MeshError> {
    let (columns, rows) = require_resolution("cylinder", resolution)?;

    let delta = (2.0 * PI) / columns as f32;
    let step = 1.0 / rows as f32;
    let ut = 1.0 / columns as f32;

    let mut stack = RingStack::with_capacity(columns, rows);
    let mut phi = 0.0f32;
    for _ in 0..=rows {
        let mut theta = 0.0f32;
        let mut u = 0.0f32;
        for _ in 0..columns {
            let radius = base_radius + (top_radius - base_radius) * phi;

            let position = Vec3::new(theta.cos() * radius, phi - 0.5, theta.sin() * radius);

            let mut normal = position.normalize_or_zero();
            normal.y = 0.0;

            stack.push(position, normal, Vec2::new(u, position.y + 0.5));

            u += ut;
            theta += delta;
        }

        phi += step;
    }

    let bottom = CapCenter {
        position: Vec3::new(0.0, -0.5, 0.0),
        normal: Vec3::NEG_Y,
        tex_coord: Vec2::ZERO,
    };
    let top = CapCenter {
        position: Vec3::new(0.0, 0.5, 0.0),
        normal: Vec3::Y,
        tex_coord: Vec2::new(0.0, 1.0),
    };

    let mut capacity = stack.lateral_vertex_count();
    if close_top {
        capacity += stack.cap_vertex_count();
    }
    if close_base {
        capacity += stack.cap_vertex_count();
    }
    let mut mesh = MeshAttributes::with_capacity(capacity);

    if close_top {
        stack.emit_cap(rows, top, &mut mesh);
    }

    stack.emit_lateral(&mut mesh);

    if close_base {
        stack.emit_cap(0, bottom, &mut mesh);
    }

    let mesh = mesh.into_identity_mesh();
    debug!(
        "cylinder: resolution {}, radii {}..{}, caps (top {}, base {}) -> {} vertices",
        resolution,
        base_radius,
        top_radius,
        close_top,
        close_base,
        mesh.num_vertices()
    );
    Ok(mesh)
}
