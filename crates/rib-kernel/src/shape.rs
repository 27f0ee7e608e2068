use std::f64::consts::PI;

use rib_types::RibShape;

/// Width scaling factor of the outline at a grid position.
///
/// `t` runs along the length (0 at one end, 1 at the other), `s` across the
/// width (0 on the bottom long edge, 1 on the top one). Asymmetric teardrop
/// deliberately exceeds 1.0 on its wide side.
///
/// Custom outlines never come through here; the vertex solver reads the
/// smoothed curve instead. Called with `Custom` anyway, the outline stays
/// rectangular.
pub fn shape_modifier(t: f64, s: f64, shape: RibShape) -> f64 {
    match shape {
        RibShape::Rectangular | RibShape::Custom => 1.0,
        RibShape::Oval => ellipse(t) * 0.8 + 0.2,
        RibShape::Circle => ellipse(t) * 0.9 + 0.1,
        RibShape::Teardrop => teardrop(t),
        RibShape::Kidney => 1.0 - (t * PI).sin().abs() * 0.4 * (s - 0.5).abs() * 2.0,
        RibShape::AsymmetricTeardrop => {
            if s < 0.5 {
                teardrop(t) * 0.8
            } else {
                teardrop(t) * 1.2
            }
        }
    }
}

fn ellipse(t: f64) -> f64 {
    let u = 2.0 * t - 1.0;
    (1.0 - u * u).max(0.0).sqrt()
}

fn teardrop(t: f64) -> f64 {
    (1.0 - t) * 0.7 + 0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rectangular_is_constant() {
        for &(t, s) in &[(0.0, 0.0), (0.3, 0.9), (1.0, 0.5)] {
            assert_eq!(shape_modifier(t, s, RibShape::Rectangular), 1.0);
        }
    }

    #[test]
    fn oval_and_circle_taper_to_their_floor() {
        assert_abs_diff_eq!(shape_modifier(0.5, 0.5, RibShape::Oval), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(0.0, 0.5, RibShape::Oval), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(1.0, 0.5, RibShape::Circle), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(0.5, 0.0, RibShape::Circle), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn teardrop_narrows_along_length() {
        assert_abs_diff_eq!(shape_modifier(0.0, 0.2, RibShape::Teardrop), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(1.0, 0.2, RibShape::Teardrop), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn kidney_pinches_long_edges_mid_length() {
        assert_abs_diff_eq!(shape_modifier(0.5, 0.5, RibShape::Kidney), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(0.5, 1.0, RibShape::Kidney), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(shape_modifier(0.0, 1.0, RibShape::Kidney), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn asymmetric_teardrop_sides() {
        let narrow = shape_modifier(0.0, 0.25, RibShape::AsymmetricTeardrop);
        let wide = shape_modifier(0.0, 0.75, RibShape::AsymmetricTeardrop);
        assert_abs_diff_eq!(narrow, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(wide, 1.2, epsilon = 1e-12);
    }
}
