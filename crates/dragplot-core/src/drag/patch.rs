//! Draggable filled shapes.

use super::{DragCore, Draggable};
use crate::artist::{
    AnchorKind, Arc, Artist, ArtistStyle, Ellipse, Patch, Rectangle, RegularPolygon, Wedge,
};
use crate::error::{DragError, DragResult};
use crate::event::{ArtistId, FrameId, PointerEvent};
use crate::host::Canvas;
use kurbo::Point;

/// A patch that follows the pointer while dragged.
///
/// Motion is applied as a delta from the press position to the anchor
/// recorded at press time, so grabbing a shape anywhere does not make it
/// jump to the pointer.
#[derive(Debug, Clone)]
pub struct DraggablePatch {
    core: DragCore,
    anchor: Point,
}

impl DraggablePatch {
    /// Add `patch` to `frame` and make it draggable.
    pub fn new(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        patch: impl Into<Patch>,
        style: ArtistStyle,
    ) -> DragResult<Self> {
        let artist = canvas
            .frame_mut(frame)
            .ok_or(DragError::UnknownFrame(frame))?
            .add_artist(Artist::patch(patch.into()).with_style(style));
        Self::from_artist(canvas, frame, artist)
    }

    /// Make an existing patch artist draggable.
    pub fn from_artist(canvas: &mut dyn Canvas, frame: FrameId, artist: ArtistId) -> DragResult<Self> {
        let anchor = canvas
            .frame(frame)
            .ok_or(DragError::UnknownFrame(frame))?
            .artist(artist)
            .ok_or(DragError::UnknownArtist(artist))?
            .as_patch()
            .ok_or(DragError::NotAPatch(artist))?
            .position();
        let core = DragCore::attach(canvas, frame, artist)?;
        Ok(Self { core, anchor })
    }

    pub fn ellipse(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        center: Point,
        width: f64,
        height: f64,
        angle: f64,
    ) -> DragResult<Self> {
        let shape = Ellipse::new(center, width, height).with_angle(angle);
        Self::new(canvas, frame, shape, ArtistStyle::default())
    }

    pub fn circle(canvas: &mut dyn Canvas, frame: FrameId, center: Point, radius: f64) -> DragResult<Self> {
        Self::new(canvas, frame, Ellipse::circle(center, radius), ArtistStyle::default())
    }

    pub fn rectangle(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        xy: Point,
        width: f64,
        height: f64,
        angle: f64,
    ) -> DragResult<Self> {
        let shape = Rectangle::new(xy, width, height).with_angle(angle);
        Self::new(canvas, frame, shape, ArtistStyle::default())
    }

    /// Angles in degrees.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        center: Point,
        width: f64,
        height: f64,
        angle: f64,
        theta1: f64,
        theta2: f64,
    ) -> DragResult<Self> {
        let shape = Arc::new(center, width, height, theta1, theta2).with_angle(angle);
        Self::new(canvas, frame, shape, ArtistStyle::default())
    }

    /// Angles in degrees.
    pub fn wedge(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        center: Point,
        r: f64,
        theta1: f64,
        theta2: f64,
    ) -> DragResult<Self> {
        Self::new(canvas, frame, Wedge::new(center, r, theta1, theta2), ArtistStyle::default())
    }

    /// `orientation` in radians.
    pub fn regular_polygon(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        center: Point,
        num_vertices: usize,
        radius: f64,
        orientation: f64,
    ) -> DragResult<Self> {
        let shape = RegularPolygon::new(center, num_vertices, radius).with_orientation(orientation);
        Self::new(canvas, frame, shape, ArtistStyle::default())
    }

    /// Position the current or next drag is measured from.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    fn patch<'a>(&self, canvas: &'a dyn Canvas) -> Option<&'a Patch> {
        self.core.artist_in(canvas)?.as_patch()
    }

    /// Current center or corner of the shape.
    pub fn position(&self, canvas: &dyn Canvas) -> Option<Point> {
        self.patch(canvas).map(Patch::position)
    }

    pub fn anchor_kind(&self, canvas: &dyn Canvas) -> Option<AnchorKind> {
        self.patch(canvas).map(Patch::anchor_kind)
    }

    /// Re-read the anchor from the shape.
    fn refresh_anchor(&mut self, canvas: &dyn Canvas) {
        if let Some(position) = self.position(canvas) {
            self.anchor = position;
        }
    }

    /// Place the shape's center or corner at `target`.
    pub(super) fn move_to(&self, target: Point, canvas: &mut dyn Canvas) {
        let Some(patch) = self.core.artist_in_mut(canvas).and_then(Artist::as_patch_mut) else {
            log::warn!("draggable patch {} lost its artist", self.core.artist());
            return;
        };
        patch.set_position(target);
        log::trace!(
            "patch {} moved to ({:.3}, {:.3})",
            self.core.artist(),
            target.x,
            target.y
        );
        canvas.request_redraw();
    }
}

impl Draggable for DraggablePatch {
    fn core(&self) -> &DragCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DragCore {
        &mut self.core
    }

    fn on_press(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        if self.core.begin(event, canvas) {
            self.refresh_anchor(canvas);
        }
    }

    fn on_motion(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        let Some(origin) = self.core.motion_origin(event) else {
            return;
        };
        self.move_to(self.anchor + (event.position - origin), canvas);
    }

    fn on_release(&mut self, _event: &PointerEvent, canvas: &mut dyn Canvas) {
        if self.core.end(canvas) {
            self.refresh_anchor(canvas);
        }
    }
}
