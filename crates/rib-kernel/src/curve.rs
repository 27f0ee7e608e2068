//! Smoothing of hand-drawn outline curves.
//!
//! The drawing surface produces a sparse, jittery polyline. Before it can
//! drive the outline it is sorted left to right, run through a Catmull-Rom
//! spline and resampled to a fixed number of evenly spaced samples.

use rib_types::CurvePoint;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Number of samples in a smoothed curve.
pub const CURVE_SAMPLES: usize = 100;

/// Fewest control points the spline can work with.
pub const MIN_CONTROL_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("curve needs at least {required} points, got {got}")]
    InsufficientPoints { got: usize, required: usize },
}

/// Resample `points` into [`CURVE_SAMPLES`] points with evenly spaced x.
///
/// `strength` is a percentage (0-100) scaling every derivative term of the
/// spline. Strength 0 gives a step curve: every sample takes the y of the
/// control point that starts its segment, not a midpoint between neighbours.
/// Strength 100 is the plain Catmull-Rom spline through the control points.
///
/// With fewer than three points there is nothing to interpolate and the
/// input comes back unchanged; callers treat that as "draw more".
#[instrument(skip(points), fields(input = points.len()))]
pub fn smooth_points(points: &[CurvePoint], strength: f64) -> Vec<CurvePoint> {
    if points.len() < MIN_CONTROL_POINTS {
        debug!("too few points to smooth, returning input");
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let tension = strength.clamp(0.0, 100.0) / 100.0;
    let last = sorted.len() - 1;

    (0..CURVE_SAMPLES)
        .map(|i| {
            let x = i as f64 / (CURVE_SAMPLES - 1) as f64;
            let k = segment_index(&sorted, x);
            let p0 = sorted[k.saturating_sub(1)];
            let p1 = sorted[k];
            let p2 = sorted[k + 1];
            let p3 = sorted[(k + 2).min(last)];

            let span = p2.x - p1.x;
            let u = if span > f64::EPSILON {
                ((x - p1.x) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let y = catmull_rom(p0.y, p1.y, p2.y, p3.y, u, tension);
            CurvePoint::new(x, y.clamp(0.0, 1.0))
        })
        .collect()
}

/// Index of the segment `[k, k + 1]` containing `x`. Points left of the
/// first control point use the first segment, right of the last the final one.
fn segment_index(sorted: &[CurvePoint], x: f64) -> usize {
    let upper = sorted.partition_point(|p| p.x <= x);
    upper.saturating_sub(1).min(sorted.len() - 2)
}

fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, u: f64, tension: f64) -> f64 {
    let u2 = u * u;
    let u3 = u2 * u;
    0.5 * (2.0 * p1
        + tension
            * ((p2 - p0) * u
                + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * u2
                + (3.0 * p1 - p0 - 3.0 * p2 + p3) * u3))
}

/// A curve that went through [`smooth_points`] and holds exactly
/// [`CURVE_SAMPLES`] samples. The raw drawing is not kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedCurve {
    samples: Vec<CurvePoint>,
}

impl SmoothedCurve {
    pub fn from_points(points: &[CurvePoint], strength: f64) -> Result<Self, CurveError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(CurveError::InsufficientPoints {
                got: points.len(),
                required: MIN_CONTROL_POINTS,
            });
        }
        Ok(Self {
            samples: smooth_points(points, strength),
        })
    }

    pub fn samples(&self) -> &[CurvePoint] {
        &self.samples
    }

    /// Sample nearest below the normalized length position `t`.
    pub fn sample_at(&self, t: f64) -> CurvePoint {
        let last = self.samples.len() - 1;
        let index = (t.clamp(0.0, 1.0) * last as f64).floor() as usize;
        self.samples[index.min(last)]
    }

    /// Width scaling factor the curve implies at `(t, s)`.
    ///
    /// Deviation of the curve from its centre line narrows the outline; the
    /// narrowing is faded in across the width by `s`.
    pub fn width_factor(&self, t: f64, s: f64) -> f64 {
        let curve_y = self.sample_at(t).y;
        let factor = (1.0 - (curve_y - 0.5).abs() * 1.5).clamp(0.1, 1.0);
        (1.0 - s) + s * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn wave() -> Vec<CurvePoint> {
        vec![
            CurvePoint::new(0.0, 0.5),
            CurvePoint::new(0.25, 0.8),
            CurvePoint::new(0.5, 0.5),
            CurvePoint::new(0.75, 0.2),
            CurvePoint::new(1.0, 0.5),
        ]
    }

    #[test]
    fn short_input_is_returned_unchanged() {
        let points = vec![CurvePoint::new(0.7, 0.1), CurvePoint::new(0.2, 0.9)];
        assert_eq!(smooth_points(&points, 50.0), points);
    }

    #[test]
    fn output_is_evenly_spaced() {
        let out = smooth_points(&wave(), 50.0);
        assert_eq!(out.len(), CURVE_SAMPLES);
        assert_eq!(out[0].x, 0.0);
        assert_eq!(out[CURVE_SAMPLES - 1].x, 1.0);
        for pair in out.windows(2) {
            assert_abs_diff_eq!(pair[1].x - pair[0].x, 1.0 / 99.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn full_strength_passes_through_control_points() {
        let points = vec![
            CurvePoint::new(0.0, 0.2),
            CurvePoint::new(1.0 / 3.0, 0.6),
            CurvePoint::new(2.0 / 3.0, 0.4),
            CurvePoint::new(1.0, 0.9),
        ];
        let out = smooth_points(&points, 100.0);
        assert_abs_diff_eq!(out[0].y, 0.2, epsilon = 1e-9);
        assert_abs_diff_eq!(out[33].y, 0.6, epsilon = 1e-9);
        assert_abs_diff_eq!(out[99].y, 0.9, epsilon = 1e-9);
    }

    #[test]
    fn zero_strength_holds_each_control_value() {
        let out = smooth_points(&wave(), 0.0);
        // x = 10/99 lies in the first segment, x = 30/99 in the second.
        assert_abs_diff_eq!(out[10].y, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(out[30].y, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn unsorted_input_matches_sorted_input() {
        let mut shuffled = wave();
        shuffled.reverse();
        shuffled.swap(1, 3);
        assert_eq!(smooth_points(&shuffled, 70.0), smooth_points(&wave(), 70.0));
    }

    #[test]
    fn overshoot_is_clamped() {
        let spiky = vec![
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(0.1, 1.0),
            CurvePoint::new(0.2, 0.0),
            CurvePoint::new(0.3, 1.0),
            CurvePoint::new(1.0, 1.0),
        ];
        for p in smooth_points(&spiky, 100.0) {
            assert!((0.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn smoothed_curve_rejects_sparse_input() {
        let err = SmoothedCurve::from_points(&[CurvePoint::new(0.5, 0.5)], 50.0).unwrap_err();
        assert_eq!(err, CurveError::InsufficientPoints { got: 1, required: 3 });
    }

    #[test]
    fn centred_curve_keeps_full_width() {
        let flat = vec![
            CurvePoint::new(0.0, 0.5),
            CurvePoint::new(0.5, 0.5),
            CurvePoint::new(1.0, 0.5),
        ];
        let curve = SmoothedCurve::from_points(&flat, 50.0).unwrap();
        assert_abs_diff_eq!(curve.width_factor(0.3, 1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn off_centre_curve_narrows_towards_top_edge() {
        let high = vec![
            CurvePoint::new(0.0, 0.9),
            CurvePoint::new(0.5, 0.9),
            CurvePoint::new(1.0, 0.9),
        ];
        let curve = SmoothedCurve::from_points(&high, 50.0).unwrap();
        // 1 - 0.4 * 1.5 = 0.4 at s = 1, blended back to 1 at s = 0.
        assert_abs_diff_eq!(curve.width_factor(0.5, 1.0), 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.width_factor(0.5, 0.5), 0.7, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.width_factor(0.5, 0.0), 1.0, epsilon = 1e-12);
    }
}
