//! Session state for an interactive rib editor.
//!
//! The UI owns a [`RibSession`] and feeds it parameter changes, drawing
//! input and a clock. The session coalesces bursts of changes, rebuilds the
//! mesh, and hands the replaced mesh back so renderer resources can be freed.

pub mod debounce;
pub mod drawing;
pub mod presets;
pub mod session;

pub use debounce::Debouncer;
pub use drawing::CurveDrawing;
pub use presets::Preset;
pub use session::{
    ExportArtifact, GeneratedRib, RebuildEvent, RibSession, SessionConfig, SessionError,
};
