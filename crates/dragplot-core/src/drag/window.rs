//! Two draggable edges with a shaded span between them.

use super::{Draggable, DraggableLine, EventHandler};
use crate::artist::{Artist, ArtistStyle, Patch, Rectangle, SerializableColor};
use crate::error::{DragError, DragResult};
use crate::event::{ArtistId, CanvasEvent, ConnectionId, EventKind, FrameId, ListenerId};
use crate::geometry::{Limits, Orientation, extent};
use crate::host::Canvas;
use kurbo::{Point, Rect};

/// A resizable window: two [`DraggableLine`] edges sharing an orientation
/// and an optional snap reference, plus a non-draggable span rectangle
/// covering the area between them.
///
/// The span is recomputed from the edges on every canvas `Draw`, so it
/// follows the edges whichever one is dragged and whichever side it ends
/// up on.
#[derive(Debug, Clone)]
pub struct Window {
    listener: ListenerId,
    frame: FrameId,
    orientation: Orientation,
    edges: [DraggableLine; 2],
    span: ArtistId,
    draw: Option<ConnectionId>,
}

impl Window {
    /// Add edges at `primary_edge` and `primary_edge + window_start_size`.
    pub fn new(
        canvas: &mut dyn Canvas,
        frame: FrameId,
        orientation: &str,
        primary_edge: f64,
        window_start_size: f64,
        snap_to: Option<ArtistId>,
    ) -> DragResult<Self> {
        let orientation: Orientation = orientation.parse()?;
        if canvas.frame(frame).is_none() {
            return Err(DragError::UnknownFrame(frame));
        }

        let edge_style = ArtistStyle {
            edge_color: SerializableColor::new(200, 30, 30, 255),
            ..ArtistStyle::default()
        };
        let first = DraggableLine::with_style(
            canvas,
            frame,
            &orientation.to_string(),
            primary_edge,
            snap_to,
            edge_style.clone(),
        )?;
        let second = DraggableLine::with_style(
            canvas,
            frame,
            &orientation.to_string(),
            primary_edge + window_start_size,
            snap_to,
            edge_style,
        )?;

        let span_style = ArtistStyle {
            face_color: Some(SerializableColor::new(200, 30, 30, 255)),
            alpha: 0.2,
            ..ArtistStyle::default()
        };
        let span = canvas
            .frame_mut(frame)
            .ok_or(DragError::UnknownFrame(frame))?
            .add_artist(Artist::patch(Rectangle::new(Point::ZERO, 0.0, 0.0).into()).with_style(span_style));

        let listener = ListenerId::new();
        let draw = canvas.connect(EventKind::Draw, listener);
        let window = Self {
            listener,
            frame,
            orientation,
            edges: [first, second],
            span,
            draw: Some(draw),
        };
        window.sync_span(canvas);
        Ok(window)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn edges(&self) -> &[DraggableLine; 2] {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut [DraggableLine; 2] {
        &mut self.edges
    }

    /// The span rectangle's artist id.
    pub fn span(&self) -> ArtistId {
        self.span
    }

    /// Whether either edge is being dragged.
    pub fn is_clicked(&self) -> bool {
        self.edges.iter().any(Draggable::is_clicked)
    }

    pub fn is_attached(&self) -> bool {
        self.draw.is_some()
    }

    /// Extent of the span along the drag axis.
    pub fn bounds(&self, canvas: &dyn Canvas) -> Option<Limits> {
        let rect = canvas
            .frame(self.frame)?
            .artist(self.span)?
            .as_patch()?
            .as_rectangle()?
            .as_rect();
        Some(match self.orientation {
            Orientation::Vertical => Limits::new(rect.x0, rect.x1),
            Orientation::Horizontal => Limits::new(rect.y0, rect.y1),
        })
    }

    /// Detach both edges and stop following redraws. The span stays where
    /// it is.
    pub fn detach(&mut self, canvas: &mut dyn Canvas) {
        for edge in &mut self.edges {
            edge.detach(canvas);
        }
        if let Some(cid) = self.draw.take() {
            canvas.disconnect(cid);
        }
    }

    /// Fit the span to the min/max of both edges' data on each axis.
    fn sync_span(&self, canvas: &mut dyn Canvas) {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        for edge in &self.edges {
            xs.extend(edge.xdata(&*canvas).unwrap_or_default());
            ys.extend(edge.ydata(&*canvas).unwrap_or_default());
        }
        let (Some(x), Some(y)) = (extent(&xs), extent(&ys)) else {
            return;
        };

        let Some(rect) = canvas
            .frame_mut(self.frame)
            .and_then(|f| f.artist_mut(self.span))
            .and_then(Artist::as_patch_mut)
            .and_then(Patch::as_rectangle_mut)
        else {
            log::warn!("window span {} is missing", self.span);
            return;
        };
        rect.set_bounds(Rect::new(x.low, y.low, x.high, y.high));
        log::trace!("window span synced to x {:?} y {:?}", x.to_array(), y.to_array());
    }
}

impl EventHandler for Window {
    fn owns(&self, listener: ListenerId) -> bool {
        listener == self.listener || self.edges.iter().any(|e| e.owns(listener))
    }

    fn handle_event(&mut self, listener: ListenerId, event: &CanvasEvent, canvas: &mut dyn Canvas) {
        if listener == self.listener {
            if matches!(event, CanvasEvent::Draw) {
                self.sync_span(canvas);
            }
            return;
        }
        if let Some(edge) = self.edges.iter_mut().find(|e| e.owns(listener)) {
            edge.handle_event(listener, event, canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Line2D;
    use crate::drag::{dispatch, redraw};
    use crate::figure::Figure;
    use crate::host::Frame;

    fn send(fig: &mut Figure, window: &mut Window, event: CanvasEvent) {
        dispatch(fig, &event, &mut [window as &mut dyn EventHandler]);
    }

    #[test]
    fn test_initial_bounds() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let window = Window::new(&mut fig, ax, "vertical", 1.0, 4.0, None).unwrap();

        assert_eq!(window.bounds(&fig), Some(Limits::new(1.0, 5.0)));
        assert_eq!(window.edges()[0].position(&fig), Some(1.0));
        assert_eq!(window.edges()[1].position(&fig), Some(5.0));

        let span = fig.axes(ax).unwrap().artist(window.span()).unwrap();
        assert!(span.tag.is_none());
        let rect = span.as_patch().and_then(Patch::as_rectangle).unwrap().as_rect();
        assert_eq!(rect, Rect::new(1.0, 0.0, 5.0, 10.0));
        assert_eq!(fig.callbacks().len(), 3);
    }

    #[test]
    fn test_edge_dragged_past_other_edge() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut window = Window::new(&mut fig, ax, "vertical", 1.0, 4.0, None).unwrap();

        send(&mut fig, &mut window, CanvasEvent::press(ax, 1.0, 5.0));
        assert!(window.is_clicked());
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 6.0, 5.0));
        assert_eq!(window.bounds(&fig), Some(Limits::new(5.0, 6.0)));

        send(&mut fig, &mut window, CanvasEvent::release(ax, 6.0, 5.0));
        assert!(!window.is_clicked());
        assert_eq!(window.bounds(&fig), Some(Limits::new(5.0, 6.0)));
    }

    #[test]
    fn test_horizontal_window() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((-3.0, 3.0), (0.0, 10.0));
        let mut window = Window::new(&mut fig, ax, "Horizontal", 2.0, 3.0, None).unwrap();
        assert_eq!(window.bounds(&fig), Some(Limits::new(2.0, 5.0)));

        send(&mut fig, &mut window, CanvasEvent::press(ax, 0.0, 5.0));
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 0.0, 8.0));
        assert_eq!(window.bounds(&fig), Some(Limits::new(2.0, 8.0)));
    }

    #[test]
    fn test_host_redraw_resyncs_span() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut window = Window::new(&mut fig, ax, "vertical", 1.0, 4.0, None).unwrap();

        let edge = window.edges()[1].artist();
        let line = fig
            .axes_mut(ax)
            .unwrap()
            .artist_mut(edge)
            .and_then(Artist::as_line_mut)
            .unwrap();
        line.xdata = vec![9.0, 9.0];
        assert_eq!(window.bounds(&fig), Some(Limits::new(1.0, 5.0)));

        redraw(&mut fig, &mut [&mut window as &mut dyn EventHandler]);
        assert_eq!(window.bounds(&fig), Some(Limits::new(1.0, 9.0)));
        assert_eq!(fig.draw_count(), 1);
    }

    #[test]
    fn test_edges_share_snap() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let series = fig
            .axes_mut(ax)
            .unwrap()
            .add_artist(Artist::line(Line2D::new(vec![2.0, 8.0], vec![0.0, 1.0])));
        let mut window = Window::new(&mut fig, ax, "vertical", 3.0, 2.0, Some(series)).unwrap();
        assert!(window.edges().iter().all(|e| e.snap_to() == Some(series)));

        send(&mut fig, &mut window, CanvasEvent::press(ax, 5.0, 5.0));
        send(&mut fig, &mut window, CanvasEvent::motion(ax, 9.5, 5.0));
        assert_eq!(window.bounds(&fig), Some(Limits::new(3.0, 8.0)));
    }

    #[test]
    fn test_invalid_orientation_adds_nothing() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        assert!(matches!(
            Window::new(&mut fig, ax, "both", 1.0, 4.0, None),
            Err(DragError::InvalidOrientation(_))
        ));
        assert!(fig.axes(ax).unwrap().is_empty());
        assert!(fig.callbacks().is_empty());
    }

    #[test]
    fn test_detach() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut window = Window::new(&mut fig, ax, "vertical", 1.0, 4.0, None).unwrap();

        window.detach(&mut fig);
        assert!(!window.is_attached());
        assert!(window.edges().iter().all(|e| !e.is_attached()));
        assert!(fig.callbacks().is_empty());

        send(&mut fig, &mut window, CanvasEvent::press(ax, 1.0, 5.0));
        assert!(!window.is_clicked());
        assert_eq!(window.bounds(&fig), Some(Limits::new(1.0, 5.0)));
    }
}
