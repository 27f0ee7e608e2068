use std::fmt;

use serde::{Deserialize, Serialize};

/// Suggested build orientation on the print bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintOrientation {
    Flat,
    FlatCurved,
    OnEdge,
}

impl fmt::Display for PrintOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PrintOrientation::Flat => "Flat",
            PrintOrientation::FlatCurved => "Flat (curved)",
            PrintOrientation::OnEdge => "On Edge",
        };
        f.write_str(label)
    }
}

/// Rough size bucket of the longest dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeClass {
    /// Longest side under 60 mm.
    Small,
    /// Longest side under 120 mm.
    Medium,
    Large,
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SizeClass::Small => "Small",
            SizeClass::Medium => "Medium",
            SizeClass::Large => "Large",
        };
        f.write_str(label)
    }
}

/// Physical statistics derived from a generated mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RibStatistics {
    pub volume_cm3: f64,
    pub weight_grams: f64,
    /// Flat two-sided approximation `length * width * 2`, not a surface integral.
    pub surface_area_cm2: f64,
    pub recommended_orientation: PrintOrientation,
    pub needs_supports: bool,
    pub size_comparison: SizeClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_labels() {
        assert_eq!(PrintOrientation::Flat.to_string(), "Flat");
        assert_eq!(PrintOrientation::FlatCurved.to_string(), "Flat (curved)");
        assert_eq!(PrintOrientation::OnEdge.to_string(), "On Edge");
    }
}
