pub mod manifold;
pub mod stats;
pub mod volume;

pub use manifold::{audit_manifold, ManifoldReport};
pub use stats::{
    analyze, needs_supports, recommended_orientation, size_class, AnalysisConfig, PLA_DENSITY,
};
pub use volume::{mesh_surface_area_cm2, signed_volume_mm3, volume_cm3};
