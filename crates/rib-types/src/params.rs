use serde::{Deserialize, Serialize};

/// Outline family of the rib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RibShape {
    #[default]
    Rectangular,
    Oval,
    Circle,
    Teardrop,
    Kidney,
    AsymmetricTeardrop,
    /// Outline comes from a user-drawn curve rather than a closed formula.
    Custom,
}

/// Which edges receive the edge thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeThicknessMode {
    #[default]
    Uniform,
    /// Only the shaping edge (the `Top` edge) thins out.
    ShapingEdgeOnly,
    /// Every edge has its own target thickness.
    Asymmetric,
}

/// Cross-section applied to the top surface near an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeProfile {
    #[default]
    Straight,
    Sharp,
    Bevel,
    Miter,
    Rounded,
    CustomAngle,
    /// Per-edge profiles, see [`RibParameters::edge_profiles`].
    Asymmetric,
}

/// One of the four logical edges of the rib.
///
/// `Top`/`Bottom` are the long edges (width axis), `Left`/`Right` the ends
/// (length axis). Declaration order is the tie-break priority used when a
/// point is equally close to several edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RibEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RibEdge {
    pub const ALL: [RibEdge; 4] = [RibEdge::Top, RibEdge::Bottom, RibEdge::Left, RibEdge::Right];

    /// The shaping edge is the primary working edge of the tool.
    pub fn is_shaping_edge(self) -> bool {
        self == RibEdge::Top
    }

    pub fn is_end(self) -> bool {
        matches!(self, RibEdge::Left | RibEdge::Right)
    }
}

/// A value per logical edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeValues<T> {
    pub top: T,
    pub bottom: T,
    pub left: T,
    pub right: T,
}

impl<T: Copy> EdgeValues<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub fn get(&self, edge: RibEdge) -> T {
        match edge {
            RibEdge::Top => self.top,
            RibEdge::Bottom => self.bottom,
            RibEdge::Left => self.left,
            RibEdge::Right => self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RibEdge, T)> + '_ {
        RibEdge::ALL.into_iter().map(move |edge| (edge, self.get(edge)))
    }
}

/// Full description of one rib. Lengths are millimetres.
///
/// The record is immutable for the duration of a generation call; the
/// external UI builds a fresh one for every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RibParameters {
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub shape: RibShape,
    pub edge_thickness: f64,
    pub edge_thickness_mode: EdgeThicknessMode,
    /// Per-edge target thickness, read only in asymmetric mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_thicknesses: Option<EdgeValues<f64>>,
    pub edge_profile: EdgeProfile,
    pub custom_angle_degrees: f64,
    /// Per-edge profiles, read only when `edge_profile` is asymmetric.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_profiles: Option<EdgeValues<EdgeProfile>>,
    /// Falloff distance over which edge modifiers blend back to the body.
    pub edge_depth: f64,
    pub apply_edge_angle_to_all_sides: bool,
    /// Longitudinal bow, 0 is flat.
    pub longitudinal_curve_percent: f64,
}

impl Default for RibParameters {
    fn default() -> Self {
        Self {
            length: 120.0,
            width: 60.0,
            thickness: 6.0,
            shape: RibShape::Rectangular,
            edge_thickness: 3.0,
            edge_thickness_mode: EdgeThicknessMode::Uniform,
            edge_thicknesses: None,
            edge_profile: EdgeProfile::Bevel,
            custom_angle_degrees: 30.0,
            edge_profiles: None,
            edge_depth: 10.0,
            apply_edge_angle_to_all_sides: false,
            longitudinal_curve_percent: 0.0,
        }
    }
}

impl RibParameters {
    /// Target thickness at the given edge.
    ///
    /// Asymmetric mode reads the per-edge override and falls back to the
    /// shared edge thickness when no override block was supplied.
    pub fn edge_thickness_at(&self, edge: RibEdge) -> f64 {
        match (self.edge_thickness_mode, &self.edge_thicknesses) {
            (EdgeThicknessMode::Asymmetric, Some(values)) => values.get(edge),
            _ => self.edge_thickness,
        }
    }

    /// Whether the edge thickness is applied at the given edge at all.
    pub fn thickness_applies_at(&self, edge: RibEdge) -> bool {
        match self.edge_thickness_mode {
            EdgeThicknessMode::Uniform | EdgeThicknessMode::Asymmetric => true,
            EdgeThicknessMode::ShapingEdgeOnly => edge.is_shaping_edge(),
        }
    }

    /// Concrete profile at the given edge, never `Asymmetric`.
    pub fn edge_profile_at(&self, edge: RibEdge) -> EdgeProfile {
        match self.edge_profile {
            EdgeProfile::Asymmetric => match &self.edge_profiles {
                Some(values) => match values.get(edge) {
                    EdgeProfile::Asymmetric => EdgeProfile::Straight,
                    profile => profile,
                },
                None => EdgeProfile::Straight,
            },
            profile => profile,
        }
    }

    /// Every numeric field paired with its name, for finiteness checks.
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("length", self.length),
            ("width", self.width),
            ("thickness", self.thickness),
            ("edgeThickness", self.edge_thickness),
            ("customAngleDegrees", self.custom_angle_degrees),
            ("edgeDepth", self.edge_depth),
            ("longitudinalCurvePercent", self.longitudinal_curve_percent),
        ];
        if let Some(values) = &self.edge_thicknesses {
            fields.extend([
                ("edgeThicknesses.top", values.top),
                ("edgeThicknesses.bottom", values.bottom),
                ("edgeThicknesses.left", values.left),
                ("edgeThicknesses.right", values.right),
            ]);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asymmetric_thickness_falls_back_without_overrides() {
        let params = RibParameters {
            edge_thickness_mode: EdgeThicknessMode::Asymmetric,
            edge_thickness: 2.5,
            ..RibParameters::default()
        };
        for edge in RibEdge::ALL {
            assert_eq!(params.edge_thickness_at(edge), 2.5);
        }
    }

    #[test]
    fn per_edge_thickness_only_read_in_asymmetric_mode() {
        let mut params = RibParameters {
            edge_thicknesses: Some(EdgeValues {
                top: 1.0,
                bottom: 2.0,
                left: 3.0,
                right: 4.0,
            }),
            ..RibParameters::default()
        };
        assert_eq!(params.edge_thickness_at(RibEdge::Left), params.edge_thickness);

        params.edge_thickness_mode = EdgeThicknessMode::Asymmetric;
        assert_eq!(params.edge_thickness_at(RibEdge::Top), 1.0);
        assert_eq!(params.edge_thickness_at(RibEdge::Right), 4.0);
    }

    #[test]
    fn shaping_edge_only_mode() {
        let params = RibParameters {
            edge_thickness_mode: EdgeThicknessMode::ShapingEdgeOnly,
            ..RibParameters::default()
        };
        assert!(params.thickness_applies_at(RibEdge::Top));
        assert!(!params.thickness_applies_at(RibEdge::Bottom));
        assert!(!params.thickness_applies_at(RibEdge::Left));
    }

    #[test]
    fn asymmetric_profile_resolution() {
        let mut params = RibParameters {
            edge_profile: EdgeProfile::Asymmetric,
            ..RibParameters::default()
        };
        assert_eq!(params.edge_profile_at(RibEdge::Top), EdgeProfile::Straight);

        params.edge_profiles = Some(EdgeValues {
            top: EdgeProfile::Sharp,
            bottom: EdgeProfile::Rounded,
            left: EdgeProfile::Asymmetric,
            right: EdgeProfile::Miter,
        });
        assert_eq!(params.edge_profile_at(RibEdge::Top), EdgeProfile::Sharp);
        assert_eq!(params.edge_profile_at(RibEdge::Bottom), EdgeProfile::Rounded);
        assert_eq!(params.edge_profile_at(RibEdge::Left), EdgeProfile::Straight);
    }

    #[test]
    fn deserializes_ui_record() {
        let json = r#"{
            "length": 100, "width": 70, "thickness": 10,
            "shape": "asymmetric-teardrop",
            "edgeThickness": 8, "edgeThicknessMode": "shaping-edge-only",
            "edgeProfile": "custom-angle", "customAngleDegrees": 25,
            "edgeDepth": 12, "applyEdgeAngleToAllSides": true,
            "longitudinalCurvePercent": 15
        }"#;
        let params: RibParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.shape, RibShape::AsymmetricTeardrop);
        assert_eq!(params.edge_thickness_mode, EdgeThicknessMode::ShapingEdgeOnly);
        assert_eq!(params.edge_profile, EdgeProfile::CustomAngle);
        assert!(params.edge_thicknesses.is_none());
        assert!(params.apply_edge_angle_to_all_sides);
    }
}
