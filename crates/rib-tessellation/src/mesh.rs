use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RibMesh {
    /// Vertex positions [x, y, z, x, y, z, ...] in millimetres.
    pub positions: Vec<f64>,
    /// Per-vertex unit normals, same layout as `positions`.
    pub normals: Vec<f64>,
    /// Triangle indices [i0, i1, i2, ...], counter-clockwise seen from outside.
    pub indices: Vec<u32>,
}

impl RibMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::new(),
            indices: Vec::with_capacity(triangles * 3),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&[x, y, z]);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn vertex(&self, index: u32) -> Point3<f64> {
        let i = index as usize * 3;
        Point3::new(self.positions[i], self.positions[i + 1], self.positions[i + 2])
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| [tri[0], tri[1], tri[2]])
    }

    pub fn triangle_points(&self, tri: [u32; 3]) -> [Point3<f64>; 3] {
        [self.vertex(tri[0]), self.vertex(tri[1]), self.vertex(tri[2])]
    }

    /// Recompute smooth per-vertex normals, weighting each face by its area.
    pub fn compute_normals(&mut self) {
        let mut accum = vec![Vector3::zeros(); self.vertex_count()];
        for tri in self.triangles() {
            let [a, b, c] = self.triangle_points(tri);
            let face = (b - a).cross(&(c - a));
            for &idx in &tri {
                accum[idx as usize] += face;
            }
        }

        self.normals.clear();
        self.normals.reserve(accum.len() * 3);
        for n in accum {
            let n = n.try_normalize(1e-12).unwrap_or_else(Vector3::z);
            self.normals.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    /// Axis-aligned bounds, `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.positions.is_empty() {
            return None;
        }
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in self.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }

    /// Positions narrowed to `f32` for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions.iter().map(|&v| v as f32).collect()
    }

    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().map(|&v| v as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_square() -> RibMesh {
        let mut mesh = RibMesh::new();
        let a = mesh.add_vertex(0.0, 0.0, 0.0);
        let b = mesh.add_vertex(1.0, 0.0, 0.0);
        let c = mesh.add_vertex(1.0, 1.0, 0.0);
        let d = mesh.add_vertex(0.0, 1.0, 0.0);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
        mesh
    }

    #[test]
    fn counts() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn normals_follow_winding() {
        let mut mesh = unit_square();
        mesh.compute_normals();
        assert_eq!(mesh.normals.len(), 12);
        for n in mesh.normals.chunks_exact(3) {
            assert_abs_diff_eq!(n[2], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn bounding_box_of_empty_mesh() {
        assert!(RibMesh::new().bounding_box().is_none());
        let (min, max) = unit_square().bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 0.0));
    }
}
