use std::f64::consts::FRAC_PI_2;

use rib_types::EdgeProfile;

/// Thinnest half-thickness a profile may cut down to (mm).
pub const MIN_HALF_THICKNESS: f64 = 0.1;

const BEVEL_DEGREES: f64 = 30.0;
const MITER_DEGREES: f64 = 45.0;
const MAX_CUSTOM_DEGREES: f64 = 89.0;

/// Top-surface offset (effective half-thickness) of an edge profile.
///
/// `blend` is 1 right at the edge and 0 at the edge-depth boundary. The
/// result is the raw profile value; fading it back into the body is the
/// vertex solver's job. Straight (and an unresolved asymmetric tag) leave
/// the half-thickness untouched.
pub fn top_offset(
    profile: EdgeProfile,
    custom_angle_degrees: f64,
    thickness: f64,
    blend: f64,
) -> f64 {
    let half = thickness / 2.0;
    let blend = blend.clamp(0.0, 1.0);
    match profile {
        EdgeProfile::Straight | EdgeProfile::Asymmetric => half,
        EdgeProfile::Sharp => (half * (1.0 - blend * 0.95)).max(MIN_HALF_THICKNESS),
        EdgeProfile::Bevel => angled_cut(BEVEL_DEGREES, thickness, blend),
        EdgeProfile::Miter => angled_cut(MITER_DEGREES, thickness, blend),
        EdgeProfile::Rounded => {
            (half * (1.0 - (blend * FRAC_PI_2).sin() * 0.9)).max(MIN_HALF_THICKNESS)
        }
        EdgeProfile::CustomAngle => angled_cut(
            custom_angle_degrees.clamp(0.0, MAX_CUSTOM_DEGREES),
            thickness,
            blend,
        ),
    }
}

fn angled_cut(degrees: f64, thickness: f64, blend: f64) -> f64 {
    let cut = degrees.to_radians().tan() * thickness * blend * 0.5;
    (thickness / 2.0 - cut).max(MIN_HALF_THICKNESS)
}
