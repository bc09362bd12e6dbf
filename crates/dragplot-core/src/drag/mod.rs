//! Click-and-drag behaviour shared by every draggable overlay.
//!
//! Each draggable is a small state machine:
//!
//! - `Idle`: subscribed to button presses only.
//! - `Dragging`: a press picked this object; motion and release
//!   subscriptions exist for exactly as long as this state lasts.
//!
//! Because motion/release subscriptions are made on the `Idle → Dragging`
//! transition and dropped on the way back, a draggable can never observe a
//! motion or release that was not preceded by its own press.
//!
//! ## Usage
//!
//! ```
//! use dragplot_core::drag::{DraggableLine, EventHandler, dispatch};
//! use dragplot_core::{CanvasEvent, Figure};
//!
//! let mut fig = Figure::new();
//! let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
//! let mut line = DraggableLine::new(&mut fig, ax, "vertical", 5.0, None).unwrap();
//!
//! for event in [
//!     CanvasEvent::press(ax, 5.0, 3.0),
//!     CanvasEvent::motion(ax, 7.0, 3.0),
//!     CanvasEvent::release(ax, 7.0, 3.0),
//! ] {
//!     dispatch(&mut fig, &event, &mut [&mut line as &mut dyn EventHandler]);
//! }
//! assert_eq!(line.position(&fig), Some(7.0));
//! ```

mod fixed_window;
mod line;
mod patch;
mod window;

pub use fixed_window::FixedWindow;
pub use line::DraggableLine;
pub use patch::DraggablePatch;
pub use window::Window;

use crate::error::{DragError, DragResult};
use crate::event::{ArtistId, CanvasEvent, ConnectionId, EventKind, FrameId, ListenerId, PointerEvent};
use crate::host::{Canvas, Frame};
use crate::artist::Artist;
use kurbo::Point;

/// Tag marking an artist as draggable; the hit test only considers these.
pub const DRAGGABLE_TAG: &str = "dragobj";

/// Something that receives canvas events through [`dispatch`].
pub trait EventHandler {
    /// Whether `listener` belongs to this handler.
    fn owns(&self, listener: ListenerId) -> bool;

    /// Handle an event delivered to one of this handler's listeners.
    fn handle_event(&mut self, listener: ListenerId, event: &CanvasEvent, canvas: &mut dyn Canvas);
}

/// Deliver `event` to every subscribed handler, then redraw if requested.
///
/// Subscribers are resolved before delivery, so subscriptions made while
/// handling this event take effect from the next one. When any handler asks
/// for a redraw the canvas is drawn once and a [`CanvasEvent::Draw`] is
/// delivered.
pub fn dispatch(canvas: &mut dyn Canvas, event: &CanvasEvent, handlers: &mut [&mut dyn EventHandler]) {
    deliver(canvas, event, handlers);
    if canvas.take_redraw_request() {
        redraw(canvas, handlers);
    }
}

/// Draw the canvas and notify `Draw` subscribers.
///
/// Hosts call this after changing what is displayed (e.g. the view limits).
pub fn redraw(canvas: &mut dyn Canvas, handlers: &mut [&mut dyn EventHandler]) {
    canvas.draw();
    deliver(canvas, &CanvasEvent::Draw, handlers);
}

fn deliver(canvas: &mut dyn Canvas, event: &CanvasEvent, handlers: &mut [&mut dyn EventHandler]) {
    for listener in canvas.subscribers(event.kind()) {
        if let Some(handler) = handlers.iter_mut().find(|h| h.owns(listener)) {
            handler.handle_event(listener, event, canvas);
        }
    }
}

/// The topmost draggable artist under `point`, if any.
pub fn topmost_draggable_at(frame: &dyn Frame, point: Point) -> Option<ArtistId> {
    frame.render_order().iter().rev().copied().find(|&id| {
        frame
            .artist(id)
            .is_some_and(|a| a.has_tag(DRAGGABLE_TAG) && a.contains(point))
    })
}

/// Whether a press at `point` should start dragging `artist`.
///
/// Only the topmost draggable containing the point may respond, so stacked
/// draggables never move together.
pub fn should_move(frame: &dyn Frame, artist: ArtistId, point: Point) -> bool {
    let Some(target) = frame.artist(artist) else {
        return false;
    };
    target.contains(point) && topmost_draggable_at(frame, point) == Some(artist)
}

/// An in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    /// Pointer position of the press that started the drag.
    pub pointer: Point,
    motion: ConnectionId,
    release: ConnectionId,
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Grab),
}

/// Bookkeeping every draggable carries: which artist it moves, in which
/// frame, and its subscriptions.
#[derive(Debug, Clone)]
pub struct DragCore {
    listener: ListenerId,
    frame: FrameId,
    artist: ArtistId,
    press: Option<ConnectionId>,
    state: DragState,
}

impl DragCore {
    /// Tag `artist` as draggable and subscribe to button presses.
    pub fn attach(canvas: &mut dyn Canvas, frame: FrameId, artist: ArtistId) -> DragResult<Self> {
        let target = canvas
            .frame_mut(frame)
            .ok_or(DragError::UnknownFrame(frame))?
            .artist_mut(artist)
            .ok_or(DragError::UnknownArtist(artist))?;
        target.tag = Some(DRAGGABLE_TAG.to_string());

        let listener = ListenerId::new();
        let press = canvas.connect(EventKind::ButtonPress, listener);
        Ok(Self {
            listener,
            frame,
            artist,
            press: Some(press),
            state: DragState::Idle,
        })
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn frame(&self) -> FrameId {
        self.frame
    }

    pub fn artist(&self) -> ArtistId {
        self.artist
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_clicked(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// False once [`DragCore::detach`] has run.
    pub fn is_attached(&self) -> bool {
        self.press.is_some()
    }

    /// Look up the moved artist.
    pub fn artist_in<'a>(&self, canvas: &'a dyn Canvas) -> Option<&'a Artist> {
        canvas.frame(self.frame)?.artist(self.artist)
    }

    /// Look up the moved artist mutably.
    pub fn artist_in_mut<'a>(&self, canvas: &'a mut dyn Canvas) -> Option<&'a mut Artist> {
        canvas.frame_mut(self.frame)?.artist_mut(self.artist)
    }

    /// The press position of the current drag, if `event` should move us.
    ///
    /// Motion is only acted on while dragging and while the pointer is over
    /// our own frame.
    pub fn motion_origin(&self, event: &PointerEvent) -> Option<Point> {
        match self.state {
            DragState::Dragging(grab) if event.is_over(self.frame) => Some(grab.pointer),
            _ => None,
        }
    }

    /// `Idle → Dragging` if this press picks our artist. Returns whether the
    /// drag started.
    pub fn begin(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) -> bool {
        if !self.is_attached() || self.is_clicked() || !event.is_over(self.frame) {
            return false;
        }
        let Some(frame) = canvas.frame(self.frame) else {
            log::warn!("draggable {} refers to missing frame {}", self.listener, self.frame);
            return false;
        };
        if !should_move(frame, self.artist, event.position) {
            return false;
        }

        let motion = canvas.connect(EventKind::MotionNotify, self.listener);
        let release = canvas.connect(EventKind::ButtonRelease, self.listener);
        self.state = DragState::Dragging(Grab {
            pointer: event.position,
            motion,
            release,
        });
        log::debug!(
            "drag start: artist {} at ({:.3}, {:.3})",
            self.artist,
            event.position.x,
            event.position.y
        );
        true
    }

    /// `Dragging → Idle`. Returns whether a drag was in progress.
    pub fn end(&mut self, canvas: &mut dyn Canvas) -> bool {
        let DragState::Dragging(grab) = std::mem::take(&mut self.state) else {
            return false;
        };
        canvas.disconnect(grab.motion);
        canvas.disconnect(grab.release);
        canvas.request_redraw();
        log::debug!("drag end: artist {}", self.artist);
        true
    }

    /// Stop responding to presses and drop the draggable tag. The artist
    /// stays in its frame.
    pub fn detach(&mut self, canvas: &mut dyn Canvas) {
        self.end(canvas);
        if let Some(cid) = self.press.take() {
            canvas.disconnect(cid);
        }
        if let Some(artist) = self.artist_in_mut(canvas) {
            artist.tag = None;
        }
    }
}

/// Behaviour common to lines, patches and fixed windows.
pub trait Draggable {
    fn core(&self) -> &DragCore;

    fn core_mut(&mut self) -> &mut DragCore;

    /// Move the artist for a pointer motion during a drag.
    fn on_motion(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas);

    fn on_press(&mut self, event: &PointerEvent, canvas: &mut dyn Canvas) {
        self.core_mut().begin(event, canvas);
    }

    fn on_release(&mut self, _event: &PointerEvent, canvas: &mut dyn Canvas) {
        self.core_mut().end(canvas);
    }

    /// Make the object permanently non-interactive.
    fn detach(&mut self, canvas: &mut dyn Canvas) {
        self.core_mut().detach(canvas);
    }

    fn is_clicked(&self) -> bool {
        self.core().is_clicked()
    }

    fn is_attached(&self) -> bool {
        self.core().is_attached()
    }

    fn artist(&self) -> ArtistId {
        self.core().artist()
    }
}

impl<T: Draggable> EventHandler for T {
    fn owns(&self, listener: ListenerId) -> bool {
        self.core().listener() == listener
    }

    fn handle_event(&mut self, _listener: ListenerId, event: &CanvasEvent, canvas: &mut dyn Canvas) {
        match event {
            CanvasEvent::ButtonPress(pointer) => self.on_press(pointer, canvas),
            CanvasEvent::MotionNotify(pointer) => self.on_motion(pointer, canvas),
            CanvasEvent::ButtonRelease(pointer) => self.on_release(pointer, canvas),
            CanvasEvent::Draw => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Rectangle;
    use crate::figure::Figure;

    fn square(fig: &mut Figure, ax: FrameId, x: f64, y: f64) -> DraggablePatch {
        DraggablePatch::rectangle(fig, ax, Point::new(x, y), 4.0, 4.0, 0.0).unwrap()
    }

    #[test]
    fn test_attach_tags_and_subscribes() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let patch = square(&mut fig, ax, 0.0, 0.0);

        let artist = fig.axes(ax).unwrap().artist(patch.artist()).unwrap();
        assert!(artist.has_tag(DRAGGABLE_TAG));
        assert_eq!(fig.subscribers(EventKind::ButtonPress), vec![patch.core().listener()]);
        assert!(fig.subscribers(EventKind::MotionNotify).is_empty());
        assert!(fig.subscribers(EventKind::ButtonRelease).is_empty());
    }

    #[test]
    fn test_attach_unknown_artist() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let missing = ArtistId::new();
        assert!(matches!(
            DragCore::attach(&mut fig, ax, missing),
            Err(DragError::UnknownArtist(id)) if id == missing
        ));
    }

    #[test]
    fn test_topmost_wins() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut bottom = square(&mut fig, ax, 0.0, 0.0);
        let mut middle = square(&mut fig, ax, 1.0, 1.0);
        let mut top = square(&mut fig, ax, 2.0, 2.0);

        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 3.0, 3.0),
            &mut [&mut bottom as &mut dyn EventHandler, &mut middle, &mut top],
        );

        assert!(!bottom.is_clicked());
        assert!(!middle.is_clicked());
        assert!(top.is_clicked());
        assert_eq!(fig.subscribers(EventKind::MotionNotify), vec![top.core().listener()]);
    }

    #[test]
    fn test_covered_point_falls_through_to_lower() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut bottom = square(&mut fig, ax, 0.0, 0.0);
        let mut top = square(&mut fig, ax, 3.0, 3.0);

        // (1, 1) is only inside the bottom square.
        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 1.0, 1.0),
            &mut [&mut bottom as &mut dyn EventHandler, &mut top],
        );
        assert!(bottom.is_clicked());
        assert!(!top.is_clicked());
    }

    #[test]
    fn test_untagged_artists_do_not_block() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);
        fig.axes_mut(ax)
            .unwrap()
            .add_artist(Artist::patch(Rectangle::new(Point::ZERO, 10.0, 10.0).into()));

        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 1.0, 1.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert!(patch.is_clicked());
    }

    #[test]
    fn test_press_in_other_frame_is_ignored() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let other = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);

        dispatch(
            &mut fig,
            &CanvasEvent::press(other, 1.0, 1.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        dispatch(
            &mut fig,
            &CanvasEvent::ButtonPress(PointerEvent::outside(Point::new(1.0, 1.0))),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert!(!patch.is_clicked());
        assert_eq!(fig.callbacks().len(), 1);
    }

    #[test]
    fn test_release_disconnects_and_redraws() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);

        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 1.0, 1.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert_eq!(fig.callbacks().len(), 3);

        // Release is honoured wherever the pointer ends up.
        dispatch(
            &mut fig,
            &CanvasEvent::ButtonRelease(PointerEvent::outside(Point::new(50.0, 50.0))),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert!(!patch.is_clicked());
        assert_eq!(fig.callbacks().len(), 1);
        assert_eq!(fig.draw_count(), 1);
    }

    #[test]
    fn test_stray_motion_before_press_is_not_delivered() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);

        dispatch(
            &mut fig,
            &CanvasEvent::motion(ax, 8.0, 8.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        dispatch(
            &mut fig,
            &CanvasEvent::release(ax, 8.0, 8.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert_eq!(patch.position(&fig), Some(Point::new(0.0, 0.0)));
        assert_eq!(fig.draw_count(), 0);
    }

    #[test]
    fn test_detach() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);

        patch.detach(&mut fig);
        assert!(!patch.is_attached());
        assert!(fig.callbacks().is_empty());
        let artist = fig.axes(ax).unwrap().artist(patch.artist()).unwrap();
        assert!(artist.tag.is_none());

        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 1.0, 1.0),
            &mut [&mut patch as &mut dyn EventHandler],
        );
        assert!(!patch.is_clicked());
    }

    #[test]
    fn test_detached_artist_no_longer_shadows() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut bottom = square(&mut fig, ax, 0.0, 0.0);
        let mut top = square(&mut fig, ax, 0.0, 0.0);
        top.detach(&mut fig);

        dispatch(
            &mut fig,
            &CanvasEvent::press(ax, 1.0, 1.0),
            &mut [&mut bottom as &mut dyn EventHandler, &mut top],
        );
        assert!(bottom.is_clicked());
    }

    #[test]
    fn test_second_press_while_dragging_is_ignored() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (0.0, 10.0));
        let mut patch = square(&mut fig, ax, 0.0, 0.0);

        for _ in 0..2 {
            dispatch(
                &mut fig,
                &CanvasEvent::press(ax, 1.0, 1.0),
                &mut [&mut patch as &mut dyn EventHandler],
            );
        }
        assert_eq!(fig.subscribers(EventKind::MotionNotify).len(), 1);
    }
}
