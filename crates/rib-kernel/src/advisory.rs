//! Advisory checks on a parameter record.
//!
//! Nothing here blocks generation. The findings are handed to the UI next
//! to the mesh so it can warn about parts that will print badly.

use std::fmt;

use rib_types::{EdgeThicknessMode, RibEdge, RibParameters};
use serde::Serialize;

/// Thresholds for the advisory checks.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryThresholds {
    /// Edges thinner than this are hard to print (mm).
    pub min_edge_thickness: f64,
    /// Largest edge depth as a fraction of width and of length.
    pub max_edge_depth_fraction: f64,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            min_edge_thickness: 0.5,
            max_edge_depth_fraction: 0.5,
        }
    }
}

/// A non-fatal finding about a parameter record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParameterWarning {
    /// Edge is too thin to print reliably.
    ThinEdge {
        edge: Option<RibEdge>,
        edge_thickness: f64,
        minimum: f64,
    },
    /// Falloff band is deeper than half the width or half the length, so
    /// opposite bands overlap.
    EdgeDepthTooLarge { edge_depth: f64, limit: f64 },
}

impl fmt::Display for ParameterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterWarning::ThinEdge {
                edge: Some(edge),
                edge_thickness,
                minimum,
            } => write!(
                f,
                "{edge:?} edge thickness {edge_thickness:.2} mm is below {minimum:.2} mm \
                 and may not print cleanly"
            ),
            ParameterWarning::ThinEdge {
                edge: None,
                edge_thickness,
                minimum,
            } => write!(
                f,
                "edge thickness {edge_thickness:.2} mm is below {minimum:.2} mm \
                 and may not print cleanly"
            ),
            ParameterWarning::EdgeDepthTooLarge { edge_depth, limit } => write!(
                f,
                "edge depth {edge_depth:.1} mm exceeds {limit:.1} mm; the edge bands overlap"
            ),
        }
    }
}

/// Run all advisory checks.
pub fn check_parameters(
    params: &RibParameters,
    thresholds: &AdvisoryThresholds,
) -> Vec<ParameterWarning> {
    let mut warnings = Vec::new();
    let minimum = thresholds.min_edge_thickness;

    match (params.edge_thickness_mode, &params.edge_thicknesses) {
        (EdgeThicknessMode::Asymmetric, Some(values)) => {
            for (edge, edge_thickness) in values.iter() {
                if edge_thickness < minimum {
                    warnings.push(ParameterWarning::ThinEdge {
                        edge: Some(edge),
                        edge_thickness,
                        minimum,
                    });
                }
            }
        }
        _ => {
            if params.edge_thickness < minimum {
                warnings.push(ParameterWarning::ThinEdge {
                    edge: None,
                    edge_thickness: params.edge_thickness,
                    minimum,
                });
            }
        }
    }

    let limit = params.width.min(params.length) * thresholds.max_edge_depth_fraction;
    if params.edge_depth > limit {
        warnings.push(ParameterWarning::EdgeDepthTooLarge {
            edge_depth: params.edge_depth,
            limit,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use rib_types::EdgeValues;

    #[test]
    fn default_parameters_are_clean() {
        let warnings = check_parameters(&RibParameters::default(), &AdvisoryThresholds::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn thin_edge_is_flagged() {
        let params = RibParameters {
            edge_thickness: 0.3,
            ..RibParameters::default()
        };
        let warnings = check_parameters(&params, &AdvisoryThresholds::default());
        assert_eq!(
            warnings,
            vec![ParameterWarning::ThinEdge {
                edge: None,
                edge_thickness: 0.3,
                minimum: 0.5
            }]
        );
    }

    #[test]
    fn asymmetric_mode_checks_each_edge() {
        let params = RibParameters {
            edge_thickness_mode: EdgeThicknessMode::Asymmetric,
            edge_thicknesses: Some(EdgeValues {
                top: 0.2,
                bottom: 2.0,
                left: 0.4,
                right: 2.0,
            }),
            ..RibParameters::default()
        };
        let edges: Vec<_> = check_parameters(&params, &AdvisoryThresholds::default())
            .into_iter()
            .filter_map(|w| match w {
                ParameterWarning::ThinEdge { edge, .. } => edge,
                _ => None,
            })
            .collect();
        assert_eq!(edges, vec![RibEdge::Top, RibEdge::Left]);
    }

    #[test]
    fn deep_falloff_is_flagged_against_the_short_side() {
        let params = RibParameters {
            width: 40.0,
            edge_depth: 25.0,
            ..RibParameters::default()
        };
        let warnings = check_parameters(&params, &AdvisoryThresholds::default());
        assert_eq!(
            warnings,
            vec![ParameterWarning::EdgeDepthTooLarge {
                edge_depth: 25.0,
                limit: 20.0
            }]
        );
        assert!(warnings[0].to_string().contains("25.0 mm"));
    }
}
