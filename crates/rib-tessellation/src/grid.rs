//! Assembly of a closed slab mesh from a sampled (length x width) grid.
//!
//! Each grid point carries a top and a bottom vertex. The two caps are
//! triangulated cell by cell and stitched together by four perimeter walls,
//! which yields a watertight solid as long as every top vertex sits above
//! its bottom twin.

use tracing::{debug, instrument};

use crate::mesh::RibMesh;

/// Divisions along the length.
pub const LENGTH_SEGMENTS: usize = 60;
/// Divisions across the width.
pub const WIDTH_SEGMENTS: usize = 40;

/// Grid density of a generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshResolution {
    pub length_segments: usize,
    pub width_segments: usize,
}

impl Default for MeshResolution {
    fn default() -> Self {
        Self {
            length_segments: LENGTH_SEGMENTS,
            width_segments: WIDTH_SEGMENTS,
        }
    }
}

impl MeshResolution {
    /// Half density, for quick previews.
    pub fn preview() -> Self {
        Self {
            length_segments: LENGTH_SEGMENTS / 2,
            width_segments: WIDTH_SEGMENTS / 2,
        }
    }

    pub fn vertex_count(&self) -> usize {
        2 * (self.length_segments + 1) * (self.width_segments + 1)
    }

    pub fn triangle_count(&self) -> usize {
        let cells = self.length_segments * self.width_segments;
        let perimeter = 2 * (self.length_segments + self.width_segments);
        4 * cells + 2 * perimeter
    }

    fn clamped(self) -> Self {
        Self {
            length_segments: self.length_segments.max(1),
            width_segments: self.width_segments.max(1),
        }
    }
}

/// A solved grid point: position in the plane plus both surface heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub top_z: f64,
    pub bottom_z: f64,
}

/// Anything that can place the vertices of a grid point.
///
/// `i`/`j` are the length/width indices, `t`/`s` the matching fractions in `[0, 1]`.
pub trait SurfaceField {
    fn sample(&mut self, i: usize, j: usize, t: f64, s: f64) -> GridPoint;
}

/// Vertex indices of one grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridVertex {
    pub top: u32,
    pub bottom: u32,
}

/// Map from (length index, width index) to mesh vertex indices.
#[derive(Debug, Clone)]
pub struct VertexGrid {
    length_segments: usize,
    width_segments: usize,
    vertices: Vec<GridVertex>,
}

impl VertexGrid {
    fn new(resolution: MeshResolution) -> Self {
        let columns = resolution.width_segments + 1;
        let count = (resolution.length_segments + 1) * columns;
        let vertices = (0..count)
            .map(|k| GridVertex {
                top: k as u32,
                bottom: (count + k) as u32,
            })
            .collect();
        Self {
            length_segments: resolution.length_segments,
            width_segments: resolution.width_segments,
            vertices,
        }
    }

    pub fn length_segments(&self) -> usize {
        self.length_segments
    }

    pub fn width_segments(&self) -> usize {
        self.width_segments
    }

    pub fn get(&self, i: usize, j: usize) -> GridVertex {
        self.vertices[i * (self.width_segments + 1) + j]
    }

    fn top(&self, i: usize, j: usize) -> u32 {
        self.get(i, j).top
    }

    fn bottom(&self, i: usize, j: usize) -> u32 {
        self.get(i, j).bottom
    }
}

/// Sample `field` over the grid and assemble a closed mesh with normals.
#[instrument(skip(field))]
pub fn build_grid_mesh(field: &mut impl SurfaceField, resolution: MeshResolution) -> RibMesh {
    let resolution = resolution.clamped();
    let (nl, nw) = (resolution.length_segments, resolution.width_segments);

    let mut samples = Vec::with_capacity((nl + 1) * (nw + 1));
    for i in 0..=nl {
        let t = i as f64 / nl as f64;
        for j in 0..=nw {
            let s = j as f64 / nw as f64;
            samples.push(field.sample(i, j, t, s));
        }
    }

    let grid = VertexGrid::new(resolution);
    let mut mesh = RibMesh::with_capacity(resolution.vertex_count(), resolution.triangle_count());
    for p in &samples {
        mesh.add_vertex(p.x, p.y, p.top_z);
    }
    for p in &samples {
        mesh.add_vertex(p.x, p.y, p.bottom_z);
    }

    add_caps(&mut mesh, &grid);
    add_walls(&mut mesh, &grid);
    mesh.compute_normals();

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "grid mesh assembled"
    );
    mesh
}

fn add_caps(mesh: &mut RibMesh, grid: &VertexGrid) {
    for i in 0..grid.length_segments {
        for j in 0..grid.width_segments {
            let (a, b, c, d) = (
                grid.top(i, j),
                grid.top(i + 1, j),
                grid.top(i + 1, j + 1),
                grid.top(i, j + 1),
            );
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);

            let (a, b, c, d) = (
                grid.bottom(i, j),
                grid.bottom(i + 1, j),
                grid.bottom(i + 1, j + 1),
                grid.bottom(i, j + 1),
            );
            mesh.add_triangle(a, c, b);
            mesh.add_triangle(a, d, c);
        }
    }
}

fn add_walls(mesh: &mut RibMesh, grid: &VertexGrid) {
    let (nl, nw) = (grid.length_segments, grid.width_segments);

    // Long sides: j = 0 faces -y, j = nw faces +y.
    for i in 0..nl {
        let (a, b, c, d) = (
            grid.top(i, 0),
            grid.top(i + 1, 0),
            grid.bottom(i + 1, 0),
            grid.bottom(i, 0),
        );
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, d, c);

        let (a, b, c, d) = (
            grid.top(i, nw),
            grid.top(i + 1, nw),
            grid.bottom(i + 1, nw),
            grid.bottom(i, nw),
        );
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    // Ends: i = 0 faces -x, i = nl faces +x.
    for j in 0..nw {
        let (a, b, c, d) = (
            grid.top(0, j),
            grid.top(0, j + 1),
            grid.bottom(0, j + 1),
            grid.bottom(0, j),
        );
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);

        let (a, b, c, d) = (
            grid.top(nl, j),
            grid.top(nl, j + 1),
            grid.bottom(nl, j + 1),
            grid.bottom(nl, j),
        );
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(a, d, c);
    }
}
