use rib_kernel::{longitudinal_bow, solve_vertex, SmoothedCurve};
use rib_types::RibParameters;
use tracing::{info, instrument};

use crate::grid::{build_grid_mesh, GridPoint, MeshResolution, SurfaceField};
use crate::mesh::RibMesh;

/// The parametric rib surface: every grid point goes through the vertex solver.
pub struct RibField<'a> {
    params: &'a RibParameters,
    curve: Option<&'a SmoothedCurve>,
}

impl<'a> RibField<'a> {
    pub fn new(params: &'a RibParameters, curve: Option<&'a SmoothedCurve>) -> Self {
        Self { params, curve }
    }
}

impl SurfaceField for RibField<'_> {
    fn sample(&mut self, _i: usize, _j: usize, t: f64, s: f64) -> GridPoint {
        let x = (t - 0.5) * self.params.length;
        let bow = longitudinal_bow(t, self.params);
        let solved = solve_vertex(x, s, t, self.params, self.curve, bow);
        GridPoint {
            x,
            y: solved.y,
            top_z: solved.top_z,
            bottom_z: solved.bottom_z,
        }
    }
}

/// Generate the rib mesh for a parameter record.
///
/// Pure: the same inputs always give the same buffers.
#[instrument(skip_all, fields(shape = ?params.shape, profile = ?params.edge_profile))]
pub fn generate_rib(
    params: &RibParameters,
    curve: Option<&SmoothedCurve>,
    resolution: MeshResolution,
) -> RibMesh {
    let mut field = RibField::new(params, curve);
    let mesh = build_grid_mesh(&mut field, resolution);
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "rib mesh generated"
    );
    mesh
}
