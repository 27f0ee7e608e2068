//! Simplified extrusion generator with surface textures.
//!
//! Older, lower-fidelity variant kept next to the parametric generator: the
//! outline is extruded at constant thickness with no edge modifiers, and an
//! optional texture is pressed into the top face. The `Dots` texture draws
//! random bumps and is therefore NOT reproducible between calls.

use std::f64::consts::TAU;

use rand::Rng;
use rib_kernel::shape_modifier;
use rib_types::RibParameters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::grid::{build_grid_mesh, GridPoint, MeshResolution, SurfaceField};
use crate::mesh::RibMesh;

/// Distance between ridge crests along the length (mm).
pub const RIDGE_PERIOD: f64 = 8.0;
/// Ridge height above and below the flat face (mm).
pub const RIDGE_AMPLITUDE: f64 = 0.3;
/// Largest random dot height (mm).
pub const DOT_MAX_HEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegacyTexture {
    #[default]
    None,
    Ridges,
    Dots,
}

struct LegacyField<'a, R> {
    params: &'a RibParameters,
    texture: LegacyTexture,
    resolution: MeshResolution,
    rng: R,
}

impl<R: Rng> SurfaceField for LegacyField<'_, R> {
    fn sample(&mut self, i: usize, j: usize, t: f64, s: f64) -> GridPoint {
        let x = (t - 0.5) * self.params.length;
        let y = (s - 0.5) * self.params.width * shape_modifier(t, s, self.params.shape);
        let half = self.params.thickness / 2.0;

        let relief = match self.texture {
            LegacyTexture::None => 0.0,
            LegacyTexture::Ridges => (x * TAU / RIDGE_PERIOD).sin() * RIDGE_AMPLITUDE,
            LegacyTexture::Dots => {
                let interior = i > 0
                    && i < self.resolution.length_segments
                    && j > 0
                    && j < self.resolution.width_segments;
                if interior {
                    self.rng.gen_range(0.0..DOT_MAX_HEIGHT)
                } else {
                    0.0
                }
            }
        };

        GridPoint {
            x,
            y,
            top_z: half + relief,
            bottom_z: -half,
        }
    }
}

/// Legacy generator drawing its randomness from the thread RNG.
pub fn generate_legacy(
    params: &RibParameters,
    texture: LegacyTexture,
    resolution: MeshResolution,
) -> RibMesh {
    generate_legacy_with_rng(params, texture, resolution, rand::thread_rng())
}

/// Legacy generator with a caller-supplied RNG (only consulted for dots).
#[instrument(skip(params, rng), fields(shape = ?params.shape))]
pub fn generate_legacy_with_rng<R: Rng>(
    params: &RibParameters,
    texture: LegacyTexture,
    resolution: MeshResolution,
    rng: R,
) -> RibMesh {
    let mut field = LegacyField {
        params,
        texture,
        resolution,
        rng,
    };
    build_grid_mesh(&mut field, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn untextured_slab_is_flat() {
        let params = RibParameters::default();
        let mesh = generate_legacy(&params, LegacyTexture::None, MeshResolution::preview());
        let (min, max) = mesh.bounding_box().unwrap();
        assert_abs_diff_eq!(max.z, params.thickness / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(min.z, -params.thickness / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn ridges_are_deterministic() {
        let params = RibParameters::default();
        let a = generate_legacy(&params, LegacyTexture::Ridges, MeshResolution::preview());
        let b = generate_legacy(&params, LegacyTexture::Ridges, MeshResolution::preview());
        assert_eq!(a.positions, b.positions);
        let (_, max) = a.bounding_box().unwrap();
        assert!(max.z > params.thickness / 2.0);
    }

    #[test]
    fn dots_follow_the_rng() {
        let params = RibParameters::default();
        let res = MeshResolution::preview();
        let dots = |seed| {
            generate_legacy_with_rng(&params, LegacyTexture::Dots, res, StdRng::seed_from_u64(seed))
        };
        let (a, b, c) = (dots(7), dots(7), dots(8));
        assert_eq!(a.positions, b.positions);
        assert_ne!(a.positions, c.positions);
    }

    #[test]
    fn dots_leave_the_rim_flat() {
        let params = RibParameters::default();
        let res = MeshResolution::preview();
        let mesh = generate_legacy(&params, LegacyTexture::Dots, res);
        // First grid row (i = 0) is rim.
        for j in 0..=res.width_segments {
            assert_abs_diff_eq!(mesh.vertex(j as u32).z, params.thickness / 2.0, epsilon = 1e-12);
        }
    }
}
