//! Build a scene on an in-memory figure and play its gesture back.

use crate::scene::{GestureStep, OverlayConfig, SceneConfig};
use crate::{ReplayError, ReplayResult};
use dragplot_core::artist::{Arc, Ellipse, Rectangle, RegularPolygon, Wedge};
use dragplot_core::{
    AnchorKind, Artist, ArtistId, CanvasEvent, Draggable, DraggableLine, DraggablePatch, EventHandler, Figure,
    FixedWindow, Frame, FrameId, Limits, Line2D, PointerEvent, Window, dispatch, redraw,
};
use kurbo::Point;
use serde::Serialize;
use std::collections::HashMap;

/// A constructed draggable.
#[derive(Debug)]
pub enum Overlay {
    Line(DraggableLine),
    Patch(DraggablePatch),
    FixedWindow(FixedWindow),
    Window(Window),
}

impl Overlay {
    fn as_handler_mut(&mut self) -> &mut dyn EventHandler {
        match self {
            Overlay::Line(o) => o,
            Overlay::Patch(o) => o,
            Overlay::FixedWindow(o) => o,
            Overlay::Window(o) => o,
        }
    }

    fn state(&self, figure: &Figure) -> OverlayState {
        match self {
            Overlay::Line(line) => OverlayState::Line {
                orientation: line.orientation().to_string(),
                position: line.position(figure),
                clicked: line.is_clicked(),
            },
            Overlay::Patch(patch) => OverlayState::Patch {
                anchor_kind: patch.anchor_kind(figure),
                position: patch.position(figure),
                clicked: patch.is_clicked(),
            },
            Overlay::FixedWindow(window) => OverlayState::FixedWindow {
                bounds: window.bounds(figure).map(Limits::to_array),
                clicked: window.is_clicked(),
            },
            Overlay::Window(window) => OverlayState::Window {
                bounds: window.bounds(figure).map(Limits::to_array),
                edges: window.edges().each_ref().map(|e| e.position(figure)),
                clicked: window.is_clicked(),
            },
        }
    }
}

/// Final state of one overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayState {
    Line {
        orientation: String,
        position: Option<f64>,
        clicked: bool,
    },
    Patch {
        anchor_kind: Option<AnchorKind>,
        position: Option<Point>,
        clicked: bool,
    },
    FixedWindow {
        bounds: Option<[f64; 2]>,
        clicked: bool,
    },
    Window {
        bounds: Option<[f64; 2]>,
        edges: [Option<f64>; 2],
        clicked: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayReport {
    pub name: String,
    #[serde(flatten)]
    pub state: OverlayState,
}

/// What the replay printed at the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub draw_count: u64,
    pub overlays: Vec<OverlayReport>,
}

impl Report {
    /// Look up an overlay's state by name.
    pub fn overlay(&self, name: &str) -> Option<&OverlayState> {
        self.overlays.iter().find(|o| o.name == name).map(|o| &o.state)
    }
}

/// A figure populated from a [`SceneConfig`].
pub struct Replay {
    figure: Figure,
    frames: HashMap<String, FrameId>,
    series: HashMap<String, ArtistId>,
    overlays: Vec<(String, Overlay)>,
}

impl Replay {
    /// Create every frame and overlay of `scene`, in file order.
    pub fn build(scene: &SceneConfig) -> ReplayResult<Self> {
        let mut replay = Self {
            figure: Figure::new(),
            frames: HashMap::new(),
            series: HashMap::new(),
            overlays: Vec::new(),
        };
        for frame in &scene.frames {
            if replay.frames.contains_key(&frame.name) {
                return Err(ReplayError::DuplicateName(frame.name.clone()));
            }
            let id = replay.figure.add_axes(
                (frame.xlim[0], frame.xlim[1]),
                (frame.ylim[0], frame.ylim[1]),
            );
            replay.frames.insert(frame.name.clone(), id);
        }
        for overlay in &scene.overlays {
            replay.add_overlay(overlay)?;
        }
        log::info!(
            "scene built: {} frame(s), {} draggable(s)",
            replay.frames.len(),
            replay.overlays.len()
        );
        Ok(replay)
    }

    /// Build `scene`, play its gesture and report the result.
    pub fn run(scene: &SceneConfig) -> ReplayResult<Report> {
        let mut replay = Self::build(scene)?;
        for step in &scene.gesture {
            replay.step(step)?;
        }
        Ok(replay.report())
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    fn frame_id(&self, name: &str) -> ReplayResult<FrameId> {
        self.frames
            .get(name)
            .copied()
            .ok_or_else(|| ReplayError::UnknownFrame(name.to_string()))
    }

    fn series_id(&self, name: Option<&str>) -> ReplayResult<Option<ArtistId>> {
        name.map(|n| {
            self.series
                .get(n)
                .copied()
                .ok_or_else(|| ReplayError::UnknownSeries(n.to_string()))
        })
        .transpose()
    }

    fn is_taken(&self, name: &str) -> bool {
        self.series.contains_key(name) || self.overlays.iter().any(|(n, _)| n == name)
    }

    fn add_overlay(&mut self, config: &OverlayConfig) -> ReplayResult<()> {
        let name = config.name().to_string();
        if self.is_taken(&name) {
            return Err(ReplayError::DuplicateName(name));
        }
        let frame = self.frame_id(config.frame())?;

        let overlay = match config {
            OverlayConfig::Series { x, y, .. } => {
                let id = self
                    .figure
                    .axes_mut(frame)
                    .ok_or_else(|| ReplayError::UnknownFrame(config.frame().to_string()))?
                    .add_artist(Artist::line(Line2D::new(x.clone(), y.clone())));
                self.series.insert(name, id);
                return Ok(());
            }
            OverlayConfig::Line {
                orientation,
                position,
                snap_to,
                style,
                ..
            } => {
                let snap = self.series_id(snap_to.as_deref())?;
                Overlay::Line(DraggableLine::with_style(
                    &mut self.figure,
                    frame,
                    orientation,
                    *position,
                    snap,
                    style.clone(),
                )?)
            }
            OverlayConfig::Window {
                orientation,
                primary_edge,
                size,
                snap_to,
                ..
            } => {
                let snap = self.series_id(snap_to.as_deref())?;
                Overlay::Window(Window::new(
                    &mut self.figure,
                    frame,
                    orientation,
                    *primary_edge,
                    *size,
                    snap,
                )?)
            }
            OverlayConfig::FixedWindow {
                orientation,
                position,
                size,
                snap_to,
                ..
            } => {
                let snap = self.series_id(snap_to.as_deref())?;
                Overlay::FixedWindow(FixedWindow::new(
                    &mut self.figure,
                    frame,
                    orientation,
                    *position,
                    *size,
                    snap,
                )?)
            }
            OverlayConfig::Ellipse {
                center,
                width,
                height,
                angle,
                style,
                ..
            } => {
                let shape = Ellipse::new(*center, *width, *height).with_angle(*angle);
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
            OverlayConfig::Circle {
                center,
                radius,
                style,
                ..
            } => {
                let shape = Ellipse::circle(*center, *radius);
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
            OverlayConfig::Rectangle {
                xy,
                width,
                height,
                angle,
                style,
                ..
            } => {
                let shape = Rectangle::new(*xy, *width, *height).with_angle(*angle);
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
            OverlayConfig::Arc {
                center,
                width,
                height,
                angle,
                theta1,
                theta2,
                style,
                ..
            } => {
                let shape = Arc::new(*center, *width, *height, *theta1, *theta2).with_angle(*angle);
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
            OverlayConfig::Wedge {
                center,
                r,
                theta1,
                theta2,
                width,
                style,
                ..
            } => {
                let mut shape = Wedge::new(*center, *r, *theta1, *theta2);
                if let Some(width) = width {
                    shape = shape.with_width(*width);
                }
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
            OverlayConfig::RegularPolygon {
                center,
                num_vertices,
                radius,
                orientation,
                style,
                ..
            } => {
                let shape = RegularPolygon::new(*center, *num_vertices, *radius).with_orientation(*orientation);
                Overlay::Patch(DraggablePatch::new(&mut self.figure, frame, shape, style.clone())?)
            }
        };
        log::debug!("added overlay '{name}'");
        self.overlays.push((name, overlay));
        Ok(())
    }

    fn pointer(&self, frame: Option<&str>, x: f64, y: f64) -> ReplayResult<PointerEvent> {
        Ok(match frame {
            Some(name) => PointerEvent::at(self.frame_id(name)?, x, y),
            None => PointerEvent::outside(Point::new(x, y)),
        })
    }

    /// Play one gesture step.
    pub fn step(&mut self, step: &GestureStep) -> ReplayResult<()> {
        let event = match step {
            GestureStep::Press { frame, x, y } => CanvasEvent::ButtonPress(self.pointer(frame.as_deref(), *x, *y)?),
            GestureStep::Move { frame, x, y } => CanvasEvent::MotionNotify(self.pointer(frame.as_deref(), *x, *y)?),
            GestureStep::Release { frame, x, y } => {
                CanvasEvent::ButtonRelease(self.pointer(frame.as_deref(), *x, *y)?)
            }
            GestureStep::SetLimits { frame, xlim, ylim } => {
                let id = self.frame_id(frame)?;
                let axes = self
                    .figure
                    .axes_mut(id)
                    .ok_or_else(|| ReplayError::UnknownFrame(frame.clone()))?;
                if let Some([low, high]) = *xlim {
                    axes.set_xlim(Limits::new(low, high));
                }
                if let Some([low, high]) = *ylim {
                    axes.set_ylim(Limits::new(low, high));
                }
                let mut handlers: Vec<&mut dyn EventHandler> =
                    self.overlays.iter_mut().map(|(_, o)| o.as_handler_mut()).collect();
                redraw(&mut self.figure, &mut handlers);
                return Ok(());
            }
        };

        log::trace!("replaying {event:?}");
        let mut handlers: Vec<&mut dyn EventHandler> =
            self.overlays.iter_mut().map(|(_, o)| o.as_handler_mut()).collect();
        dispatch(&mut self.figure, &event, &mut handlers);
        Ok(())
    }

    /// Current state of every draggable, in creation order.
    pub fn report(&self) -> Report {
        Report {
            draw_count: self.figure.draw_count(),
            overlays: self
                .overlays
                .iter()
                .map(|(name, overlay)| OverlayReport {
                    name: name.clone(),
                    state: overlay.state(&self.figure),
                })
                .collect(),
        }
    }
}
