//! Scene files: frames, overlays and a scripted pointer gesture.
//!
//! ```json
//! {
//!   "frames": [{ "name": "main", "xlim": [0, 10], "ylim": [0, 10] }],
//!   "overlays": [
//!     { "type": "series", "name": "data", "frame": "main", "x": [2, 8], "y": [1, 5] },
//!     { "type": "line", "name": "cursor", "frame": "main",
//!       "orientation": "vertical", "position": 5, "snap_to": "data" }
//!   ],
//!   "gesture": [
//!     { "type": "press", "frame": "main", "x": 5, "y": 3 },
//!     { "type": "move", "frame": "main", "x": 10, "y": 3 },
//!     { "type": "release", "frame": "main", "x": 10, "y": 3 }
//!   ]
//! }
//! ```

use crate::{ReplayError, ReplayResult};
use dragplot_core::ArtistStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub frames: Vec<FrameConfig>,
    #[serde(default)]
    pub overlays: Vec<OverlayConfig>,
    #[serde(default)]
    pub gesture: Vec<GestureStep>,
}

impl SceneConfig {
    /// Read a scene from a JSON file.
    pub fn load(path: &Path) -> ReplayResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse a scene from a JSON string.
    pub fn from_json(json: &str) -> ReplayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A named set of axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub name: String,
    pub xlim: [f64; 2],
    pub ylim: [f64; 2],
}

/// Something placed in a frame. Every entry but `series` is draggable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayConfig {
    /// A plain data series that lines and windows can snap to.
    Series {
        name: String,
        frame: String,
        x: Vec<f64>,
        y: Vec<f64>,
    },
    Line {
        name: String,
        frame: String,
        orientation: String,
        position: f64,
        #[serde(default)]
        snap_to: Option<String>,
        #[serde(default)]
        style: ArtistStyle,
    },
    Window {
        name: String,
        frame: String,
        orientation: String,
        primary_edge: f64,
        size: f64,
        #[serde(default)]
        snap_to: Option<String>,
    },
    FixedWindow {
        name: String,
        frame: String,
        orientation: String,
        position: f64,
        size: f64,
        #[serde(default)]
        snap_to: Option<String>,
    },
    Ellipse {
        name: String,
        frame: String,
        center: Point,
        width: f64,
        height: f64,
        #[serde(default)]
        angle: f64,
        #[serde(default)]
        style: ArtistStyle,
    },
    Circle {
        name: String,
        frame: String,
        center: Point,
        radius: f64,
        #[serde(default)]
        style: ArtistStyle,
    },
    Rectangle {
        name: String,
        frame: String,
        xy: Point,
        width: f64,
        height: f64,
        #[serde(default)]
        angle: f64,
        #[serde(default)]
        style: ArtistStyle,
    },
    Arc {
        name: String,
        frame: String,
        center: Point,
        width: f64,
        height: f64,
        #[serde(default)]
        angle: f64,
        theta1: f64,
        theta2: f64,
        #[serde(default)]
        style: ArtistStyle,
    },
    Wedge {
        name: String,
        frame: String,
        center: Point,
        r: f64,
        theta1: f64,
        theta2: f64,
        /// Ring thickness; a full wedge when absent.
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        style: ArtistStyle,
    },
    RegularPolygon {
        name: String,
        frame: String,
        center: Point,
        num_vertices: usize,
        radius: f64,
        /// Rotation in radians.
        #[serde(default)]
        orientation: f64,
        #[serde(default)]
        style: ArtistStyle,
    },
}

impl OverlayConfig {
    pub fn name(&self) -> &str {
        match self {
            OverlayConfig::Series { name, .. }
            | OverlayConfig::Line { name, .. }
            | OverlayConfig::Window { name, .. }
            | OverlayConfig::FixedWindow { name, .. }
            | OverlayConfig::Ellipse { name, .. }
            | OverlayConfig::Circle { name, .. }
            | OverlayConfig::Rectangle { name, .. }
            | OverlayConfig::Arc { name, .. }
            | OverlayConfig::Wedge { name, .. }
            | OverlayConfig::RegularPolygon { name, .. } => name,
        }
    }

    pub fn frame(&self) -> &str {
        match self {
            OverlayConfig::Series { frame, .. }
            | OverlayConfig::Line { frame, .. }
            | OverlayConfig::Window { frame, .. }
            | OverlayConfig::FixedWindow { frame, .. }
            | OverlayConfig::Ellipse { frame, .. }
            | OverlayConfig::Circle { frame, .. }
            | OverlayConfig::Rectangle { frame, .. }
            | OverlayConfig::Arc { frame, .. }
            | OverlayConfig::Wedge { frame, .. }
            | OverlayConfig::RegularPolygon { frame, .. } => frame,
        }
    }
}

/// One step of the scripted gesture.
///
/// Pointer steps without a `frame` happen outside every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureStep {
    Press {
        #[serde(default)]
        frame: Option<String>,
        x: f64,
        y: f64,
    },
    Move {
        #[serde(default)]
        frame: Option<String>,
        x: f64,
        y: f64,
    },
    Release {
        #[serde(default)]
        frame: Option<String>,
        x: f64,
        y: f64,
    },
    /// Change a frame's view and redraw.
    SetLimits {
        frame: String,
        #[serde(default)]
        xlim: Option<[f64; 2]>,
        #[serde(default)]
        ylim: Option<[f64; 2]>,
    },
}
