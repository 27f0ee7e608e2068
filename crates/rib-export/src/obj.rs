use rib_tessellation::RibMesh;
use tracing::instrument;

use crate::{check_mesh, ExportError};

/// Export as Wavefront OBJ: a comment header, one `v` line per vertex in
/// buffer order, a blank line, then `f` lines with 1-based indices.
#[instrument(skip(mesh), fields(vertices = mesh.vertex_count()))]
pub fn to_obj(mesh: &RibMesh) -> Result<String, ExportError> {
    check_mesh(mesh)?;

    let mut out = String::with_capacity(mesh.vertex_count() * 40 + mesh.triangle_count() * 24);
    out.push_str("# Pottery Rib\n");
    out.push_str(&format!(
        "# Vertices: {}, Faces: {}\n",
        mesh.vertex_count(),
        mesh.triangle_count()
    ));
    out.push('\n');

    for v in mesh.positions.chunks_exact(3) {
        out.push_str(&format!("v {:.6} {:.6} {:.6}\n", v[0], v[1], v[2]));
    }
    out.push('\n');

    for [a, b, c] in mesh.triangles() {
        out.push_str(&format!("f {} {} {}\n", a + 1, b + 1, c + 1));
    }
    Ok(out)
}
