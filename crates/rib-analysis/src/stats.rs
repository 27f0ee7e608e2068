use rib_tessellation::RibMesh;
use rib_types::{EdgeProfile, PrintOrientation, RibParameters, RibStatistics, SizeClass};
use tracing::{info, instrument};

use crate::volume::volume_cm3;

/// PLA density in g/cm³.
pub const PLA_DENSITY: f64 = 1.24;

const SUPPORT_ANGLE_DEGREES: f64 = 30.0;
const CURVED_ORIENTATION_PERCENT: f64 = 20.0;
const SMALL_SIZE_MM: f64 = 60.0;
const MEDIUM_SIZE_MM: f64 = 120.0;

/// Constants used when deriving statistics.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisConfig {
    /// Weight is always quoted for PLA.
    pub density_g_per_cm3: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            density_g_per_cm3: PLA_DENSITY,
        }
    }
}

/// Derive the statistics record for a generated mesh.
#[instrument(skip_all)]
pub fn analyze(mesh: &RibMesh, params: &RibParameters, config: &AnalysisConfig) -> RibStatistics {
    let volume_cm3 = volume_cm3(mesh);
    let stats = RibStatistics {
        volume_cm3,
        weight_grams: volume_cm3 * config.density_g_per_cm3,
        surface_area_cm2: params.length * params.width * 2.0 / 100.0,
        recommended_orientation: recommended_orientation(params),
        needs_supports: needs_supports(params),
        size_comparison: size_class(params),
    };
    info!(
        volume_cm3 = stats.volume_cm3,
        weight_grams = stats.weight_grams,
        needs_supports = stats.needs_supports,
        "rib analyzed"
    );
    stats
}

/// Knife-like edges overhang too steeply to print flat without support.
pub fn needs_supports(params: &RibParameters) -> bool {
    match params.edge_profile {
        EdgeProfile::Sharp => true,
        EdgeProfile::CustomAngle => params.custom_angle_degrees < SUPPORT_ANGLE_DEGREES,
        _ => false,
    }
}

pub fn recommended_orientation(params: &RibParameters) -> PrintOrientation {
    if needs_supports(params) {
        PrintOrientation::OnEdge
    } else if params.longitudinal_curve_percent > CURVED_ORIENTATION_PERCENT {
        PrintOrientation::FlatCurved
    } else {
        PrintOrientation::Flat
    }
}

pub fn size_class(params: &RibParameters) -> SizeClass {
    let longest = params.length.max(params.width);
    if longest < SMALL_SIZE_MM {
        SizeClass::Small
    } else if longest < MEDIUM_SIZE_MM {
        SizeClass::Medium
    } else {
        SizeClass::Large
    }
}
