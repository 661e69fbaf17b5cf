//! Wavefront OBJ export

use std::io::{self, Write};

use crate::types::TriMesh;

/// Write `mesh` as a single OBJ object called `name`
///
/// Indices are shared by all attributes, so face corners reference the same
/// 1-based number for `v`, `vt` and `vn`. Empty attribute arrays are skipped
/// and the face syntax follows (`a`, `a/a`, `a//a` or `a/a/a`).
pub fn write_obj<W: Write>(mesh: &TriMesh, writer: &mut W, name: &str) -> io::Result<()> {
    writeln!(writer, "# primitive-mesh")?;
    writeln!(writer, "o {name}")?;

    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in mesh.tex_coords() {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in mesh.normals() {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    let has_tex_coords = !mesh.tex_coords().is_empty();
    let has_normals = !mesh.normals().is_empty();

    for tri in mesh.triangles() {
        write!(writer, "f")?;
        for index in tri {
            let i = u64::from(index) + 1;
            match (has_tex_coords, has_normals) {
                (true, true) => write!(writer, " {i}/{i}/{i}")?,
                (true, false) => write!(writer, " {i}/{i}")?,
                (false, true) => write!(writer, " {i}//{i}")?,
                (false, false) => write!(writer, " {i}")?,
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}
