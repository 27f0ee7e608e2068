//! Edge-adjacency audit of a triangle mesh.
//!
//! A closed, consistently oriented solid uses every undirected edge exactly
//! twice, once in each direction.

use std::collections::HashMap;

use rib_tessellation::RibMesh;
use tracing::debug;

/// Result of [`audit_manifold`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifoldReport {
    /// Distinct undirected edges.
    pub edge_count: usize,
    /// Edges used by a single triangle (open boundary).
    pub boundary_edges: usize,
    /// Edges used by more than two triangles.
    pub non_manifold_edges: usize,
    /// Two-triangle edges whose triangles traverse them in the same direction.
    pub misoriented_edges: usize,
}

impl ManifoldReport {
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }

    pub fn is_consistently_oriented(&self) -> bool {
        self.is_watertight() && self.misoriented_edges == 0
    }
}

#[derive(Default)]
struct EdgeUse {
    forward: usize,
    backward: usize,
}

/// Count how every edge of the mesh is shared.
pub fn audit_manifold(mesh: &RibMesh) -> ManifoldReport {
    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::new();
    for [a, b, c] in mesh.triangles() {
        for (from, to) in [(a, b), (b, c), (c, a)] {
            let entry = edges.entry((from.min(to), from.max(to))).or_default();
            if from < to {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    let mut report = ManifoldReport {
        edge_count: edges.len(),
        ..ManifoldReport::default()
    };
    for usage in edges.values() {
        match usage.forward + usage.backward {
            1 => report.boundary_edges += 1,
            2 if usage.forward != 1 => report.misoriented_edges += 1,
            2 => {}
            _ => report.non_manifold_edges += 1,
        }
    }

    debug!(
        edges = report.edge_count,
        boundary = report.boundary_edges,
        non_manifold = report.non_manifold_edges,
        misoriented = report.misoriented_edges,
        "manifold audit"
    );
    report
}
