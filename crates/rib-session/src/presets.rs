use rib_types::{EdgeProfile, EdgeThicknessMode, RibParameters, RibShape};
use serde::{Deserialize, Serialize};

/// Named starting points for common tool types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Standard,
    ThickRigid,
    FlexibleFinishing,
    KidneyTrimming,
    BowlShaper,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Standard,
        Preset::ThickRigid,
        Preset::FlexibleFinishing,
        Preset::KidneyTrimming,
        Preset::BowlShaper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Standard => "Standard",
            Preset::ThickRigid => "Thick & Rigid",
            Preset::FlexibleFinishing => "Flexible Finishing",
            Preset::KidneyTrimming => "Kidney Trimming",
            Preset::BowlShaper => "Bowl Shaper",
        }
    }

    /// Full parameter record for this preset. Fields a preset does not
    /// mention keep their defaults.
    pub fn parameters(self) -> RibParameters {
        let base = RibParameters::default();
        match self {
            Preset::Standard => base,
            Preset::ThickRigid => RibParameters {
                length: 100.0,
                width: 70.0,
                thickness: 10.0,
                shape: RibShape::Rectangular,
                edge_thickness: 8.0,
                edge_profile: EdgeProfile::Miter,
                edge_depth: 12.0,
                longitudinal_curve_percent: 0.0,
                ..base
            },
            Preset::FlexibleFinishing => RibParameters {
                length: 110.0,
                width: 55.0,
                thickness: 3.0,
                shape: RibShape::Oval,
                edge_thickness: 1.0,
                edge_profile: EdgeProfile::Rounded,
                edge_depth: 8.0,
                ..base
            },
            Preset::KidneyTrimming => RibParameters {
                length: 90.0,
                width: 55.0,
                thickness: 5.0,
                shape: RibShape::Kidney,
                edge_thickness: 1.5,
                edge_thickness_mode: EdgeThicknessMode::ShapingEdgeOnly,
                edge_profile: EdgeProfile::Bevel,
                edge_depth: 10.0,
                ..base
            },
            Preset::BowlShaper => RibParameters {
                length: 140.0,
                width: 80.0,
                thickness: 6.0,
                shape: RibShape::Teardrop,
                edge_thickness: 2.5,
                edge_profile: EdgeProfile::CustomAngle,
                custom_angle_degrees: 35.0,
                edge_depth: 15.0,
                longitudinal_curve_percent: 40.0,
                ..base
            },
        }
    }
}
