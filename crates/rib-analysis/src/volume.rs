use nalgebra::Vector3;
use rib_tessellation::RibMesh;

/// Signed volume of the tetrahedron spanned by the origin and a triangle (mm³).
fn origin_tetra_mm3(mesh: &RibMesh, tri: [u32; 3]) -> f64 {
    let [a, b, c]: [Vector3<f64>; 3] = mesh.triangle_points(tri).map(|p| p.coords);
    a.dot(&b.cross(&c)) / 6.0
}

/// Signed enclosed volume in mm³, summed over origin-based tetrahedra.
///
/// Positive for a closed mesh with outward-facing winding.
pub fn signed_volume_mm3(mesh: &RibMesh) -> f64 {
    mesh.triangles().map(|tri| origin_tetra_mm3(mesh, tri)).sum()
}

/// Reported volume in cm³: the absolute origin tetrahedra of every triangle,
/// summed.
///
/// Equals the enclosed volume while every face is seen from the origin from
/// its outer side. Faces turned towards the origin (a top surface that rises
/// towards a thickened edge, say) are counted with the wrong sign and push the
/// figure above the enclosed volume.
pub fn volume_cm3(mesh: &RibMesh) -> f64 {
    let mm3: f64 = mesh
        .triangles()
        .map(|tri| origin_tetra_mm3(mesh, tri).abs())
        .sum();
    mm3 / 1000.0
}

/// True triangle-area sum in cm².
pub fn mesh_surface_area_cm2(mesh: &RibMesh) -> f64 {
    let mm2: f64 = mesh
        .triangles()
        .map(|tri| {
            let [a, b, c]: [Vector3<f64>; 3] = mesh.triangle_points(tri).map(|p| p.coords);
            (b - a).cross(&(c - a)).norm() / 2.0
        })
        .sum();
    mm2 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 2 x 3 x 4 box with outward winding, one corner on the origin.
    fn box_mesh() -> RibMesh {
        let mut mesh = RibMesh::new();
        for &(x, y, z) in &[
            (0.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 3.0, 0.0),
            (0.0, 3.0, 0.0),
            (0.0, 0.0, 4.0),
            (2.0, 0.0, 4.0),
            (2.0, 3.0, 4.0),
            (0.0, 3.0, 4.0),
        ] {
            mesh.add_vertex(x, y, z);
        }
        for tri in [
            [0, 2, 1], [0, 3, 2], // bottom
            [4, 5, 6], [4, 6, 7], // top
            [0, 1, 5], [0, 5, 4], // front
            [2, 3, 7], [2, 7, 6], // back
            [0, 4, 7], [0, 7, 3], // left
            [1, 2, 6], [1, 6, 5], // right
        ] {
            mesh.add_triangle(tri[0], tri[1], tri[2]);
        }
        mesh
    }

    #[test]
    fn box_volume() {
        let mesh = box_mesh();
        assert_relative_eq!(signed_volume_mm3(&mesh), 24.0, epsilon = 1e-12);
        assert_relative_eq!(volume_cm3(&mesh), 0.024, epsilon = 1e-12);
    }

    #[test]
    fn faces_turned_towards_the_origin_count_as_positive() {
        // Same box moved to x in [5, 7]; the x = 5 face now faces the origin.
        let mut mesh = box_mesh();
        for p in mesh.positions.chunks_exact_mut(3) {
            p[0] += 5.0;
        }
        assert_relative_eq!(signed_volume_mm3(&mesh), 24.0, epsilon = 1e-9);
        // 28 (x = 7) + 20 (x = 5) + 8 (y = 3) + 8 (z = 4)
        assert_relative_eq!(volume_cm3(&mesh), 0.064, epsilon = 1e-12);
    }

    #[test]
    fn inverted_winding_flips_the_sign() {
        let mut mesh = box_mesh();
        for tri in mesh.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        assert_relative_eq!(signed_volume_mm3(&mesh), -24.0, epsilon = 1e-12);
        assert_relative_eq!(volume_cm3(&mesh), 0.024, epsilon = 1e-12);
    }

    #[test]
    fn box_surface_area() {
        // 2 * (2*3 + 2*4 + 3*4) = 52 mm²
        assert_relative_eq!(mesh_surface_area_cm2(&box_mesh()), 0.52, epsilon = 1e-12);
    }
}
