//! Canvas events, identifiers and the callback registry.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

uuid_id!(
    /// Identifies a coordinate frame (a set of axes) on a canvas.
    FrameId
);
uuid_id!(
    /// Identifies a drawable artist within its frame.
    ArtistId
);
uuid_id!(
    /// Identifies an event receiver. Each draggable owns exactly one.
    ListenerId
);

/// Handle returned by [`Canvas::connect`](crate::host::Canvas::connect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

/// Event types a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ButtonPress,
    MotionNotify,
    ButtonRelease,
    Draw,
}

/// A pointer event in data coordinates.
///
/// `frame` is the frame the pointer is over, if any; `position` is only
/// meaningful relative to that frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub frame: Option<FrameId>,
}

impl PointerEvent {
    /// Pointer over `frame` at data position `(x, y)`.
    pub fn at(frame: FrameId, x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            frame: Some(frame),
        }
    }

    /// Pointer outside every frame.
    pub fn outside(position: Point) -> Self {
        Self {
            position,
            frame: None,
        }
    }

    /// Check whether the pointer is over the given frame.
    pub fn is_over(&self, frame: FrameId) -> bool {
        self.frame == Some(frame)
    }
}

/// An event emitted by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    ButtonPress(PointerEvent),
    MotionNotify(PointerEvent),
    ButtonRelease(PointerEvent),
    /// The canvas finished a redraw.
    Draw,
}

impl CanvasEvent {
    /// The subscription kind this event is delivered to.
    pub fn kind(&self) -> EventKind {
        match self {
            CanvasEvent::ButtonPress(_) => EventKind::ButtonPress,
            CanvasEvent::MotionNotify(_) => EventKind::MotionNotify,
            CanvasEvent::ButtonRelease(_) => EventKind::ButtonRelease,
            CanvasEvent::Draw => EventKind::Draw,
        }
    }

    /// The pointer payload, for pointer events.
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            CanvasEvent::ButtonPress(p)
            | CanvasEvent::MotionNotify(p)
            | CanvasEvent::ButtonRelease(p) => Some(p),
            CanvasEvent::Draw => None,
        }
    }

    pub fn press(frame: FrameId, x: f64, y: f64) -> Self {
        CanvasEvent::ButtonPress(PointerEvent::at(frame, x, y))
    }

    pub fn motion(frame: FrameId, x: f64, y: f64) -> Self {
        CanvasEvent::MotionNotify(PointerEvent::at(frame, x, y))
    }

    pub fn release(frame: FrameId, x: f64, y: f64) -> Self {
        CanvasEvent::ButtonRelease(PointerEvent::at(frame, x, y))
    }
}

/// Maps connection ids to `(kind, listener)` subscriptions.
///
/// Subscriptions are kept in connection order, which is also delivery order.
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    next_id: u64,
    connections: Vec<(ConnectionId, EventKind, ListenerId)>,
}

impl CallbackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `listener` to `kind`.
    pub fn connect(&mut self, kind: EventKind, listener: ListenerId) -> ConnectionId {
        let cid = ConnectionId(self.next_id);
        self.next_id += 1;
        self.connections.push((cid, kind, listener));
        cid
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn disconnect(&mut self, cid: ConnectionId) {
        self.connections.retain(|(id, _, _)| *id != cid);
    }

    /// Listeners subscribed to `kind`, in connection order.
    pub fn subscribers(&self, kind: EventKind) -> Vec<ListenerId> {
        self.connections
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, listener)| *listener)
            .collect()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Check whether there are no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_and_disconnect() {
        let mut registry = CallbackRegistry::new();
        let a = ListenerId::new();
        let b = ListenerId::new();

        let cid_a = registry.connect(EventKind::ButtonPress, a);
        let _cid_b = registry.connect(EventKind::ButtonPress, b);
        registry.connect(EventKind::Draw, b);

        assert_eq!(registry.subscribers(EventKind::ButtonPress), vec![a, b]);
        assert_eq!(registry.subscribers(EventKind::Draw), vec![b]);
        assert!(registry.subscribers(EventKind::MotionNotify).is_empty());

        registry.disconnect(cid_a);
        assert_eq!(registry.subscribers(EventKind::ButtonPress), vec![b]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_connection_ids_are_unique() {
        let mut registry = CallbackRegistry::new();
        let l = ListenerId::new();
        let first = registry.connect(EventKind::MotionNotify, l);
        registry.disconnect(first);
        let second = registry.connect(EventKind::MotionNotify, l);
        assert_ne!(first, second);
    }

    #[test]
    fn test_event_kind_and_pointer() {
        let frame = FrameId::new();
        let press = CanvasEvent::press(frame, 1.0, 2.0);
        assert_eq!(press.kind(), EventKind::ButtonPress);
        assert!(press.pointer().unwrap().is_over(frame));
        assert!(!press.pointer().unwrap().is_over(FrameId::new()));
        assert!(CanvasEvent::Draw.pointer().is_none());
        assert!(!PointerEvent::outside(Point::ZERO).is_over(frame));
    }
}
