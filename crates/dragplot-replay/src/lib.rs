//! DragPlot scene replay
//!
//! Loads a JSON scene, builds its overlays on an in-memory figure, plays a
//! scripted pointer gesture through them and reports where everything
//! ended up.

pub mod replay;
pub mod scene;

pub use replay::{Overlay, OverlayReport, OverlayState, Replay, Report};
pub use scene::{FrameConfig, GestureStep, OverlayConfig, SceneConfig};

use dragplot_core::DragError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or replaying a scene.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("usage: dragplot-replay <scene.json>")]
    Usage,
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Drag(#[from] DragError),
    #[error("Frame not found: {0}")]
    UnknownFrame(String),
    #[error("Series not found: {0}")]
    UnknownSeries(String),
    #[error("Name used twice: {0}")]
    DuplicateName(String),
}

/// Result type for scene loading and replay.
pub type ReplayResult<T> = Result<T, ReplayError>;
