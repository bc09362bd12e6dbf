//! Fixed-size window sliding along one axis.

use super::line::has_positional_data;
use super::{DragCore, Draggable, DraggablePatch};
use crate::artist::{ArtistStyle, Rectangle, SerializableColor};
use crate::error::{DragError, DragResult};
use crate::event::{ArtistId, FrameId, PointerEvent};
use crate::geometry::{Limits, Orientation};
use crate::host::Canvas;
use kurbo::Point;

/// A rectangle of fixed size that spans the full view on one axis and is
/// dragged along the other.
///
/// A vertical window slides left/right and covers the full y range at
/// construction time; a horizontal one slides up/down.
#[derive(Debug, Clone)]
pub struct FixedWindow {
    patch: DraggablePatch,
    orientation: Orientation,
    size: f64,
    snap_to: Option<ArtistId>,
}

impl FixedWindow {
    /// Add a window whose low edge is at `position` and make it draggable.
    ///
    /// A usable `snap_to` is recorded but does not limit the window's
    /// motion.
    pub fn new(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        orientation: &str,
        position: f64,
        size: f64,
        snap_to: Option<ArtistId>,
    ) -> DragResult<Self> {
        let style = ArtistStyle {
            face_color: Some(SerializableColor::new(128, 128, 128, 255)),
            alpha: 0.4,
            ..ArtistStyle::default()
        };
        Self::with_style(canvas, frame, orientation, position, size, snap_to, style)
    }

    /// Like [`FixedWindow::new`], with an explicit style.
    #[allow(clippy::too_many_arguments)]
    pub fn with_style(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        orientation: &str,
        position: f64,
        size: f64,
        snap_to: Option<ArtistId>,
        style: ArtistStyle,
    ) -> DragResult<Self> {
        let orientation: Orientation = orientation.parse()?;
        let target = canvas.frame(frame).ok_or(DragError::UnknownFrame(frame))?;
        let span = target.limits(orientation.fixed_axis());
        let snap_to = snap_to.filter(|&id| {
            let usable = has_positional_data(target, id);
            if !usable {
                log::warn!("snap reference {id} has no line data; ignoring it");
            }
            usable
        });

        let rect = match orientation {
            Orientation::Vertical => {
                Rectangle::new(Point::new(position, span.min()), size, span.span())
            }
            Orientation::Horizontal => {
                Rectangle::new(Point::new(span.min(), position), span.span(), size)
            }
        };
        let patch = DraggablePatch::new(canvas, frame, rect, style)?;
        Ok(Self {
            patch,
            orientation,
            size,
            snap_to,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Extent along the drag axis.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The snap reference given at construction.
    pub fn snap_to(&self) -> Option<ArtistId> {
        self.snap_to
    }

    /// Corner of the window.
    pub fn position(&self, canvas: &dyn Canvas) -> Option<Point> {
        self.patch.position(canvas)
    }

    /// `[low, high]` extent along the drag axis.
    pub fn bounds(&self, canvas: &dyn Canvas) -> Option<Limits> {
        let corner = self.position(canvas)?;
        let low = self.orientation.free_axis().of(corner);
        Some(Limits::new(low, low + self.size))
    }
}

impl Draggable for FixedWindow {
    fn core(&self) -> &DragCore {
        self.patch.core()
    }

    fn core_mut(&mut self) -> &mut DragCore {
        self.patch.core_mut()
    }

    fn on_press(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        self.patch.on_press(event, canvas);
    }

    fn on_motion(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        let Some(origin) = self.core().motion_origin(event) else {
            return;
        };
        let delta = event.position - origin;
        let anchor = self.patch.anchor();
        let target = match self.orientation {
            Orientation::Vertical => Point::new(anchor.x + delta.x, anchor.y),
            Orientation::Horizontal => Point::new(anchor.x, anchor.y + delta.y),
        };
        self.patch.move_to(target, canvas);
    }

    fn on_release(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        self.patch.on_release(event, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::{Artist, Line2D};
    use crate::drag::{EventHandler, dispatch};
    use crate::event::CanvasEvent;
    use crate::figure::Figure;
    use crate::host::Frame;

    fn send(fig: &mut Figure, window: &mut FixedWindow, event: CanvasEvent) {
        dispatch(fig, &event, &mut [window as &mut dyn EventHandler]);
    }

    #[test]
    fn test_vertical_window_spans_y() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (-5.0, 5.0));
        let window = FixedWindow::new(&mut fig, ax, "vertical", 10.0, 20.0, None).unwrap();

        assert_eq!(window.position(&fig), Some(Point::new(10.0, -5.0)));
        assert_eq!(window.bounds(&fig), Some(Limits::new(10.0, 30.0)));
        let rect = fig
            .axes(ax)
            .unwrap()
            .artist(window.artist())
            .and_then(Artist::as_patch)
            .and_then(|p| p.as_rectangle())
            .cloned()
            .unwrap();
        assert!((rect.height - 10.0).abs() < f64::EPSILON);
        assert!((rect.width - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_horizontal_window_spans_x() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (-5.0, 5.0));
        let window = FixedWindow::new(&mut fig, ax, "horizontal", 1.0, 2.0, None).unwrap();
        assert_eq!(window.position(&fig), Some(Point::new(0.0, 1.0)));
        assert_eq!(window.bounds(&fig), Some(Limits::new(1.0, 3.0)));
    }

    #[test]
    fn test_moves_along_one_axis_only() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (0.0, 10.0));
        let mut window = FixedWindow::new(&mut fig, ax, "vertical", 10.0, 20.0, None).unwrap();

        send(&mut fig, &mut window, CanvasEvent::press(ax, 15.0, 5.0));
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 40.0, 9.0));
        assert_eq!(window.position(&fig), Some(Point::new(35.0, 0.0)));
        assert_eq!(window.bounds(&fig), Some(Limits::new(35.0, 55.0)));

        send(&mut fig, &mut window, CanvasEvent::release(ax, 40.0, 9.0));
        send(&mut fig, &mut window, CanvasEvent::press(ax, 40.0, 2.0));
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 30.0, 2.0));
        assert_eq!(window.bounds(&fig), Some(Limits::new(25.0, 45.0)));
    }

    #[test]
    fn test_snap_is_not_applied() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (0.0, 10.0));
        let series = fig
            .axes_mut(ax)
            .unwrap()
            .add_artist(Artist::line(Line2D::new(vec![20.0, 30.0], vec![1.0, 2.0])));
        let mut window =
            FixedWindow::new(&mut fig, ax, "vertical", 20.0, 5.0, Some(series)).unwrap();
        assert_eq!(window.snap_to(), Some(series));

        send(&mut fig, &mut window, CanvasEvent::press(ax, 21.0, 5.0));
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 81.0, 5.0));
        assert_eq!(window.bounds(&fig), Some(Limits::new(80.0, 85.0)));
    }

    #[test]
    fn test_unusable_snap_is_dropped() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (0.0, 10.0));
        let window =
            FixedWindow::new(&mut fig, ax, "vertical", 20.0, 5.0, Some(ArtistId::new())).unwrap();
        assert!(window.snap_to().is_none());
    }

    #[test]
    fn test_invalid_orientation() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 100.0), (0.0, 10.0));
        assert!(matches!(
            FixedWindow::new(&mut fig, ax, "sideways", 0.0, 1.0, None),
            Err(DragError::InvalidOrientation(_))
        ));
        assert!(fig.axes(ax).unwrap().is_empty());
    }
}
