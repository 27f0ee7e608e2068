pub mod advisory;
pub mod curve;
pub mod field;
pub mod profile;
pub mod shape;

pub use advisory::{check_parameters, AdvisoryThresholds, ParameterWarning};
pub use curve::{smooth_points, CurveError, SmoothedCurve, CURVE_SAMPLES};
pub use field::{
    longitudinal_bow, nearest_edge, solve_vertex, EdgeDistance, EdgeDistances, FieldSample,
};
pub use profile::{top_offset, MIN_HALF_THICKNESS};
pub use shape::shape_modifier;

pub use rib_types;
