//! The contract a hosting plot library fulfils.
//!
//! Draggables never own the canvas or their frame: every handler receives
//! the canvas as `&mut dyn Canvas` and looks its frame up by id. The
//! in-memory [`Figure`](crate::figure::Figure) implements both traits and
//! is what the tests and the replay tool drive.

use crate::artist::Artist;
use crate::event::{ArtistId, ConnectionId, EventKind, FrameId, ListenerId};
use crate::geometry::{Axis, Limits};

/// A coordinate frame ("axes"): view limits plus an ordered set of artists.
pub trait Frame {
    fn id(&self) -> FrameId;

    /// Current visible x range.
    fn xlim(&self) -> Limits;

    /// Current visible y range.
    fn ylim(&self) -> Limits;

    fn set_xlim(&mut self, limits: Limits);

    fn set_ylim(&mut self, limits: Limits);

    /// Artist ids in rendering order, back to front. The last entry is drawn
    /// on top.
    fn render_order(&self) -> &[ArtistId];

    fn artist(&self, id: ArtistId) -> Option<&Artist>;

    fn artist_mut(&mut self, id: ArtistId) -> Option<&mut Artist>;

    /// Add an artist on top of everything already in the frame.
    fn add_artist(&mut self, artist: Artist) -> ArtistId;

    fn remove_artist(&mut self, id: ArtistId) -> Option<Artist>;

    /// Visible range along `axis`.
    fn limits(&self, axis: Axis) -> Limits {
        match axis {
            Axis::X => self.xlim(),
            Axis::Y => self.ylim(),
        }
    }
}

/// The drawing surface: event subscriptions, redraws and frame lookup.
pub trait Canvas {
    /// Subscribe `listener` to events of `kind`.
    fn connect(&mut self, kind: EventKind, listener: ListenerId) -> ConnectionId;

    /// Drop a subscription made with [`Canvas::connect`].
    fn disconnect(&mut self, cid: ConnectionId);

    /// Listeners subscribed to `kind`, in the order they connected.
    fn subscribers(&self, kind: EventKind) -> Vec<ListenerId>;

    /// Ask for a redraw once the current event has been handled.
    fn request_redraw(&mut self);

    /// Clear and return the pending redraw request.
    fn take_redraw_request(&mut self) -> bool;

    /// Render the canvas. Does not notify listeners; see
    /// [`crate::drag::dispatch`] and [`crate::drag::redraw`].
    fn draw(&mut self);

    fn frame(&self, id: FrameId) -> Option<&dyn Frame>;

    fn frame_mut(&mut self, id: FrameId) -> Option<&mut dyn Frame>;
}
