//! STL export, ASCII and binary.

use nalgebra::Vector3;
use rib_tessellation::RibMesh;
use tracing::instrument;

use crate::{check_mesh, ExportError};

/// Unit facet normal from the triangle's winding, +Z for degenerate facets.
fn facet_normal(mesh: &RibMesh, tri: [u32; 3]) -> Vector3<f64> {
    let [a, b, c] = mesh.triangle_points(tri);
    (b - a)
        .cross(&(c - a))
        .try_normalize(1e-12)
        .unwrap_or_else(Vector3::z)
}

/// Export as an ASCII STL string with six decimals per coordinate.
#[instrument(skip(mesh), fields(triangles = mesh.triangle_count()))]
pub fn to_ascii_stl(mesh: &RibMesh, name: &str) -> Result<String, ExportError> {
    check_mesh(mesh)?;

    let mut out = String::with_capacity(mesh.triangle_count() * 260);
    out.push_str(&format!("solid {name}\n"));
    for tri in mesh.triangles() {
        let n = facet_normal(mesh, tri);
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for p in mesh.triangle_points(tri) {
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

/// Export as binary STL.
///
/// Layout: 80-byte header, u32 LE triangle count, then per triangle a normal
/// and three vertices as f32 LE followed by a zero u16 attribute.
#[instrument(skip(mesh), fields(triangles = mesh.triangle_count()))]
pub fn to_binary_stl(mesh: &RibMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    check_mesh(mesh)?;

    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    let header = format!("binary STL: {name}");
    let header = header.as_bytes();
    buf.extend_from_slice(&header[..header.len().min(80)]);
    buf.resize(80, 0u8);
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.triangles() {
        let n = facet_normal(mesh, tri);
        for c in [n.x, n.y, n.z] {
            buf.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for p in mesh.triangle_points(tri) {
            for c in [p.x, p.y, p.z] {
                buf.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}
