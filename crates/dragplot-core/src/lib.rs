//! DragPlot Core Library
//!
//! Click-and-drag overlays (lines, windows and filled shapes) for a 2D
//! plotting canvas. The host library owns rendering; this crate owns the
//! drag state machines and the hit-test that decides which overlay a press
//! belongs to.

pub mod artist;
pub mod drag;
pub mod error;
pub mod event;
pub mod figure;
pub mod geometry;
pub mod host;

pub use artist::{AnchorKind, Artist, ArtistKind, ArtistStyle, Line2D, Patch, SerializableColor};
pub use drag::{
    DRAGGABLE_TAG, Draggable, DraggableLine, DraggablePatch, EventHandler, FixedWindow, Window, dispatch, redraw,
};
pub use error::{DragError, DragResult};
pub use event::{ArtistId, CanvasEvent, ConnectionId, EventKind, FrameId, ListenerId, PointerEvent};
pub use figure::{Axes, Figure};
pub use geometry::{Axis, Limits, Orientation, drag_limiter, scale_pair};
pub use host::{Canvas, Frame};
