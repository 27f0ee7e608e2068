//! Per-vertex surface solver.
//!
//! Every grid point of the rib is solved independently from the parameter
//! record: outline width, distance to the nearest edge, edge thickness
//! falloff, longitudinal bow and the edge profile are layered in that order.
//! There is no shared state between points.

use std::f64::consts::PI;

use rib_types::{RibEdge, RibParameters, RibShape};

use crate::curve::SmoothedCurve;
use crate::profile::top_offset;
use crate::shape::shape_modifier;

/// Solved position of one grid point: width coordinate plus the heights of
/// the top and bottom surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub y: f64,
    pub top_z: f64,
    pub bottom_z: f64,
}

/// Distance to a specific edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistance {
    pub edge: RibEdge,
    pub distance: f64,
}

/// Distances from a point to all four logical edges.
///
/// The long edges are measured against the shape-adjusted half width, the
/// ends against the full half length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDistances {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgeDistances {
    pub fn measure(x: f64, y: f64, half_width: f64, half_length: f64) -> Self {
        Self {
            top: (half_width - y).abs(),
            bottom: (y + half_width).abs(),
            left: (x + half_length).abs(),
            right: (half_length - x).abs(),
        }
    }

    pub fn get(&self, edge: RibEdge) -> f64 {
        match edge {
            RibEdge::Top => self.top,
            RibEdge::Bottom => self.bottom,
            RibEdge::Left => self.left,
            RibEdge::Right => self.right,
        }
    }

    /// The closest edge. Exact ties go to the first edge in
    /// top, bottom, left, right order.
    pub fn nearest(&self) -> EdgeDistance {
        let mut best = EdgeDistance {
            edge: RibEdge::Top,
            distance: self.top,
        };
        for edge in [RibEdge::Bottom, RibEdge::Left, RibEdge::Right] {
            let distance = self.get(edge);
            if distance < best.distance {
                best = EdgeDistance { edge, distance };
            }
        }
        best
    }

    /// Whether the point lies inside the falloff band of either end.
    pub fn near_end(&self, edge_depth: f64) -> bool {
        self.left < edge_depth || self.right < edge_depth
    }
}

/// Nearest edge of the point `(x, y)` on an outline of the given half extents.
pub fn nearest_edge(x: f64, y: f64, half_width: f64, half_length: f64) -> EdgeDistance {
    EdgeDistances::measure(x, y, half_width, half_length).nearest()
}

/// Out-of-plane bow at length fraction `t`, zero at both ends.
pub fn longitudinal_bow(t: f64, params: &RibParameters) -> f64 {
    (t * PI).sin() * params.thickness * (params.longitudinal_curve_percent / 100.0) * 3.0
}

/// Solve a single grid point.
///
/// `x` is the position along the length (centred on 0), `s` and `t` the
/// normalized width and length fractions, `bow` the value of
/// [`longitudinal_bow`] at `t`. The smoothed curve only drives the outline
/// when the shape is custom.
pub fn solve_vertex(
    x: f64,
    s: f64,
    t: f64,
    params: &RibParameters,
    curve: Option<&SmoothedCurve>,
    bow: f64,
) -> FieldSample {
    let width_factor = match (params.shape, curve) {
        (RibShape::Custom, Some(curve)) => curve.width_factor(t, s),
        (shape, _) => shape_modifier(t, s, shape),
    };
    let y = (s - 0.5) * params.width * width_factor;

    let distances = EdgeDistances::measure(
        x,
        y,
        params.width * width_factor / 2.0,
        params.length / 2.0,
    );
    let nearest = distances.nearest();
    let depth = params.edge_depth;
    let in_falloff = depth > 0.0 && nearest.distance < depth;

    let mut thickness = params.thickness;
    if in_falloff && params.thickness_applies_at(nearest.edge) {
        let target = params.edge_thickness_at(nearest.edge);
        let ratio = nearest.distance / depth;
        thickness = target + (params.thickness - target) * ratio;
    }

    let center_top = thickness / 2.0 + bow;
    let mut top_z = center_top;
    let bottom_z = -thickness / 2.0 - bow;

    let angle_applies = params.apply_edge_angle_to_all_sides
        || matches!(params.shape, RibShape::Oval | RibShape::Custom)
        || nearest.edge.is_shaping_edge()
        || distances.near_end(depth);

    if in_falloff && angle_applies {
        let blend = 1.0 - nearest.distance / depth;
        let profile = params.edge_profile_at(nearest.edge);
        let raw_top = top_offset(profile, params.custom_angle_degrees, thickness, blend) + bow;
        top_z = center_top * (1.0 - blend) + raw_top * blend;
    }

    FieldSample { y, top_z, bottom_z }
}
