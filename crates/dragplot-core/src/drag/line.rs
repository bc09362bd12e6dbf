//! Draggable horizontal / vertical line.

use super::{DragCore, Draggable};
use crate::artist::{Artist, ArtistStyle, Line2D};
use crate::error::{DragError, DragResult};
use crate::event::{ArtistId, FrameId, PointerEvent};
use crate::geometry::{Axis, Orientation, drag_limiter, extent, scale_pair};
use crate::host::{Canvas, Frame};

/// A straight line spanning the whole view, dragged perpendicular to
/// itself.
///
/// With a snap reference, the line cannot leave the data extent of that
/// series along the drag axis.
#[derive(Debug, Clone)]
pub struct DraggableLine {
    core: DragCore,
    orientation: Orientation,
    snap_to: Option<ArtistId>,
}

impl DraggableLine {
    /// Add a line at `position` to `frame` and make it draggable.
    ///
    /// `orientation` must be `"horizontal"` or `"vertical"` (any case).
    /// `snap_to` should name a line series in the same frame; anything else
    /// is ignored with a warning.
    pub fn new(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        orientation: &str,
        position: f64,
        snap_to: Option<ArtistId>,
    ) -> DragResult<Self> {
        Self::with_style(canvas, frame, orientation, position, snap_to, ArtistStyle::default())
    }

    /// Like [`DraggableLine::new`], with an explicit style.
    pub fn with_style(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        orientation: &str,
        position: f64,
        snap_to: Option<ArtistId>,
        style: ArtistStyle,
    ) -> DragResult<Self> {
        let orientation: Orientation = orientation.parse()?;
        let target = canvas
            .frame_mut(frame)
            .ok_or(DragError::UnknownFrame(frame))?;

        let snap_to = snap_to.filter(|&id| {
            let usable = has_positional_data(&*target, id);
            if !usable {
                log::warn!("snap reference {id} has no line data; line will not be snapped");
            }
            usable
        });

        let line = line_at(&*target, orientation, position);
        let artist = target.add_artist(Artist::line(line).with_style(style));
        let core = DragCore::attach(canvas, frame, artist)?;
        Ok(Self {
            core,
            orientation,
            snap_to,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The accepted snap reference, if any.
    pub fn snap_to(&self) -> Option<ArtistId> {
        self.snap_to
    }

    fn line<'a>(&self, canvas: &'a dyn Canvas) -> Option<&'a Line2D> {
        self.core.artist_in(canvas)?.as_line()
    }

    pub fn xdata(&self, canvas: &dyn Canvas) -> Option<Vec<f64>> {
        self.line(canvas).map(|l| l.xdata.clone())
    }

    pub fn ydata(&self, canvas: &dyn Canvas) -> Option<Vec<f64>> {
        self.line(canvas).map(|l| l.ydata.clone())
    }

    /// Current coordinate along the drag axis.
    pub fn position(&self, canvas: &dyn Canvas) -> Option<f64> {
        self.line(canvas)?
            .data(self.orientation.free_axis())
            .first()
            .copied()
    }
}

impl Draggable for DraggableLine {
    fn core(&self) -> &DragCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DragCore {
        &mut self.core
    }

    fn on_motion(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        if self.core.motion_origin(event).is_none() {
            return;
        }
        let Some(frame) = canvas.frame_mut(self.core.frame()) else {
            return;
        };

        let free = self.orientation.free_axis();
        let mut value = free.of(event.position);
        if let Some(series) = self.snap_to.and_then(|id| frame.artist(id)?.as_line()) {
            value = drag_limiter(value, series.data(free));
        }

        let moved = line_at(&*frame, self.orientation, value);
        let Some(line) = frame.artist_mut(self.core.artist()).and_then(Artist::as_line_mut) else {
            log::warn!("draggable line {} lost its artist", self.core.artist());
            return;
        };
        line.xdata = moved.xdata;
        line.ydata = moved.ydata;
        log::trace!("line {} moved to {value:.3}", self.core.artist());
        canvas.request_redraw();
    }
}

/// A line at `position` along the drag axis, spanning the current view on
/// the other axis.
fn line_at(frame: &dyn Frame, orientation: Orientation, position: f64) -> Line2D {
    let at = scale_pair([1.0, 1.0], position).to_vec();
    let span = frame.limits(orientation.fixed_axis()).to_array().to_vec();
    match orientation {
        Orientation::Vertical => Line2D::new(at, span),
        Orientation::Horizontal => Line2D::new(span, at),
    }
}

pub(super) fn has_positional_data(frame: &dyn Frame, id: ArtistId) -> bool {
    frame
        .artist(id)
        .and_then(Artist::as_line)
        .is_some_and(|l| extent(l.data(Axis::X)).is_some() && extent(l.data(Axis::Y)).is_some())
}
