use std::time::{Duration, Instant};

use rib_analysis::{analyze, audit_manifold, AnalysisConfig};
use rib_export::{to_ascii_stl, to_obj, ExportError, OBJ_FILE_NAME, SOLID_NAME, STL_FILE_NAME};
use rib_kernel::{
    check_parameters, AdvisoryThresholds, CurveError, ParameterWarning, SmoothedCurve,
};
use rib_tessellation::{generate_rib, MeshResolution, RibMesh};
use rib_types::{RibParameters, RibShape, RibStatistics};
use tracing::{debug, info, instrument, warn, Level};

use crate::debounce::Debouncer;
use crate::drawing::CurveDrawing;
use crate::presets::Preset;

/// Tunables for a [`RibSession`].
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Quiet period after the last change before a rebuild runs.
    pub debounce_window: Duration,
    pub resolution: MeshResolution,
    pub thresholds: AdvisoryThresholds,
    pub analysis: AnalysisConfig,
    /// Fewest drawn points accepted by [`RibSession::apply_drawing`].
    pub min_apply_points: usize,
    /// Smoothing strength used when the caller gives none (0-100).
    pub default_smoothing: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(100),
            resolution: MeshResolution::default(),
            thresholds: AdvisoryThresholds::default(),
            analysis: AnalysisConfig::default(),
            min_apply_points: 6,
            default_smoothing: 50.0,
        }
    }
}

impl SessionConfig {
    /// Coarser mesh and no debounce delay, for fast interactive previews.
    pub fn preview() -> Self {
        Self {
            debounce_window: Duration::ZERO,
            resolution: MeshResolution::preview(),
            ..Self::default()
        }
    }
}

/// A mesh together with everything derived from it.
#[derive(Debug, Clone)]
pub struct GeneratedRib {
    /// Increases by one with every rebuild of the session.
    pub generation: u64,
    pub params: RibParameters,
    pub mesh: RibMesh,
    pub stats: RibStatistics,
    pub warnings: Vec<ParameterWarning>,
}

/// Outcome of installing a new mesh.
#[derive(Debug)]
pub struct RebuildEvent {
    pub generation: u64,
    /// The mesh that was displaced, handed back so the caller can free any
    /// renderer resources tied to it.
    pub released: Option<GeneratedRib>,
}

/// A downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub contents: Vec<u8>,
}

/// Interactive editing state: parameters, custom curve, drawing buffer and
/// the mesh currently on display.
pub struct RibSession {
    config: SessionConfig,
    params: RibParameters,
    curve: Option<SmoothedCurve>,
    drawing: CurveDrawing,
    debouncer: Debouncer<RibParameters>,
    current: Option<GeneratedRib>,
    generation: u64,
}

impl Default for RibSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl RibSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            params: RibParameters::default(),
            curve: None,
            drawing: CurveDrawing::new(),
            debouncer: Debouncer::new(config.debounce_window),
            current: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parameters of the last rebuild.
    pub fn params(&self) -> &RibParameters {
        &self.params
    }

    /// The most recent parameters, pending or applied.
    pub fn latest_params(&self) -> &RibParameters {
        self.debouncer.pending().unwrap_or(&self.params)
    }

    pub fn current(&self) -> Option<&GeneratedRib> {
        self.current.as_ref()
    }

    pub fn custom_curve(&self) -> Option<&SmoothedCurve> {
        self.curve.as_ref()
    }

    pub fn drawing(&self) -> &CurveDrawing {
        &self.drawing
    }

    pub fn drawing_mut(&mut self) -> &mut CurveDrawing {
        &mut self.drawing
    }

    pub fn has_pending_update(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending update becomes due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Schedule a rebuild with `params`, superseding any scheduled one.
    pub fn request_update(&mut self, params: RibParameters, now: Instant) {
        self.debouncer.submit(params, now);
    }

    /// Schedule a rebuild from a JSON parameter record.
    pub fn request_update_json(&mut self, json: &str, now: Instant) -> Result<(), SessionError> {
        let params: RibParameters = serde_json::from_str(json)?;
        let non_finite = params
            .numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite());
        if let Some((field, _)) = non_finite {
            return Err(SessionError::NonFinite { field });
        }
        self.request_update(params, now);
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: Preset, now: Instant) {
        debug!(preset = preset.label(), "applying preset");
        self.request_update(preset.parameters(), now);
    }

    /// Rebuild if the pending update has become due.
    pub fn tick(&mut self, now: Instant) -> Option<RebuildEvent> {
        let params = self.debouncer.poll(now)?;
        self.params = params;
        Some(self.rebuild())
    }

    /// Rebuild right away with the latest parameters, skipping the window.
    pub fn regenerate_now(&mut self) -> RebuildEvent {
        if let Some(params) = self.debouncer.flush() {
            self.params = params;
        }
        self.rebuild()
    }

    /// Smooth the drawn points into the custom outline and switch the shape
    /// to custom. The drawing buffer is emptied on success.
    pub fn apply_drawing(
        &mut self,
        strength: Option<f64>,
        now: Instant,
    ) -> Result<(), SessionError> {
        let got = self.drawing.len();
        let required = self.config.min_apply_points;
        if got < required {
            return Err(SessionError::NotEnoughPoints { got, required });
        }
        let strength = strength.unwrap_or(self.config.default_smoothing);
        let curve = SmoothedCurve::from_points(self.drawing.points(), strength)?;
        info!(points = got, strength, "custom curve applied");
        self.curve = Some(curve);
        self.drawing.reset();

        let params = RibParameters {
            shape: RibShape::Custom,
            ..self.latest_params().clone()
        };
        self.request_update(params, now);
        Ok(())
    }

    /// Drop the custom outline. A custom-shaped rib falls back to a
    /// rectangular outline on its next rebuild.
    pub fn clear_custom_curve(&mut self, now: Instant) {
        if self.curve.take().is_none() {
            return;
        }
        self.drawing.reset();
        let params = self.latest_params().clone();
        self.request_update(params, now);
    }

    pub fn export_stl(&self) -> Result<ExportArtifact, SessionError> {
        let rib = self.current.as_ref().ok_or(SessionError::NoMesh)?;
        let contents = to_ascii_stl(&rib.mesh, SOLID_NAME)?;
        Ok(ExportArtifact {
            file_name: STL_FILE_NAME,
            mime_type: "model/stl",
            contents: contents.into_bytes(),
        })
    }

    pub fn export_obj(&self) -> Result<ExportArtifact, SessionError> {
        let rib = self.current.as_ref().ok_or(SessionError::NoMesh)?;
        let contents = to_obj(&rib.mesh)?;
        Ok(ExportArtifact {
            file_name: OBJ_FILE_NAME,
            mime_type: "model/obj",
            contents: contents.into_bytes(),
        })
    }

    #[instrument(skip_all, fields(generation = self.generation + 1))]
    fn rebuild(&mut self) -> RebuildEvent {
        let params = self.params.clone();
        let warnings = check_parameters(&params, &self.config.thresholds);
        for warning in &warnings {
            warn!(%warning, "parameter advisory");
        }

        let mesh = generate_rib(&params, self.curve.as_ref(), self.config.resolution);
        if tracing::enabled!(Level::DEBUG) {
            let report = audit_manifold(&mesh);
            debug!(
                watertight = report.is_watertight(),
                boundary_edges = report.boundary_edges,
                misoriented_edges = report.misoriented_edges,
                "mesh audit"
            );
        }
        let stats = analyze(&mesh, &params, &self.config.analysis);

        self.generation += 1;
        let released = self.current.replace(GeneratedRib {
            generation: self.generation,
            params,
            mesh,
            stats,
            warnings,
        });
        info!(
            generation = self.generation,
            released = released.is_some(),
            "rib rebuilt"
        );
        RebuildEvent {
            generation: self.generation,
            released,
        }
    }
}

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("at least {required} points are needed to apply a drawing, got {got}")]
    NotEnoughPoints { got: usize, required: usize },

    #[error("no mesh has been generated yet")]
    NoMesh,

    #[error("invalid parameter record: {0}")]
    InvalidParameters(#[from] serde_json::Error),

    #[error("parameter {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("curve error: {0}")]
    Curve(#[from] CurveError),
}
