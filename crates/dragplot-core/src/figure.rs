//! In-memory host: a figure holding axes, artists and event subscriptions.

use crate::artist::Artist;
use crate::event::{ArtistId, CallbackRegistry, ConnectionId, EventKind, FrameId, ListenerId};
use crate::geometry::Limits;
use crate::host::{Canvas, Frame};
use std::collections::HashMap;

/// A set of axes: view limits and artists in rendering order.
#[derive(Debug, Clone)]
pub struct Axes {
    id: FrameId,
    xlim: Limits,
    ylim: Limits,
    /// All artists in the axes, keyed by ID.
    artists: HashMap<ArtistId, Artist>,
    /// Rendering order (back to front).
    z_order: Vec<ArtistId>,
}

impl Axes {
    /// Create empty axes with the given view limits.
    pub fn new(xlim: impl Into<Limits>, ylim: impl Into<Limits>) -> Self {
        Self {
            id: FrameId::new(),
            xlim: xlim.into(),
            ylim: ylim.into(),
            artists: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    /// Number of artists.
    pub fn len(&self) -> usize {
        self.z_order.len()
    }

    /// Check whether the axes hold no artists.
    pub fn is_empty(&self) -> bool {
        self.z_order.is_empty()
    }

    /// Artists in rendering order.
    pub fn artists_ordered(&self) -> impl Iterator<Item = &Artist> {
        self.z_order.iter().filter_map(|id| self.artists.get(id))
    }

    /// Move an artist to the top of the rendering order.
    pub fn bring_to_front(&mut self, id: ArtistId) {
        if let Some(pos) = self.z_order.iter().position(|&a| a == id) {
            self.z_order.remove(pos);
            self.z_order.push(id);
        }
    }

    /// Move an artist to the bottom of the rendering order.
    pub fn send_to_back(&mut self, id: ArtistId) {
        if let Some(pos) = self.z_order.iter().position(|&a| a == id) {
            self.z_order.remove(pos);
            self.z_order.insert(0, id);
        }
    }
}

impl Frame for Axes {
    fn id(&self) -> FrameId {
        self.id
    }

    fn xlim(&self) -> Limits {
        self.xlim
    }

    fn ylim(&self) -> Limits {
        self.ylim
    }

    fn set_xlim(&mut self, limits: Limits) {
        self.xlim = limits;
    }

    fn set_ylim(&mut self, limits: Limits) {
        self.ylim = limits;
    }

    fn render_order(&self) -> &[ArtistId] {
        &self.z_order
    }

    fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    fn artist_mut(&mut self, id: ArtistId) -> Option<&mut Artist> {
        self.artists.get_mut(&id)
    }

    fn add_artist(&mut self, artist: Artist) -> ArtistId {
        let id = ArtistId::new();
        self.z_order.push(id);
        self.artists.insert(id, artist);
        id
    }

    fn remove_artist(&mut self, id: ArtistId) -> Option<Artist> {
        self.z_order.retain(|&a| a != id);
        self.artists.remove(&id)
    }
}

/// A canvas with any number of axes.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    axes: Vec<Axes>,
    callbacks: CallbackRegistry,
    redraw_pending: bool,
    draw_count: u64,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add axes with the given view limits and return their id.
    pub fn add_axes(&mut self, xlim: impl Into<Limits>, ylim: impl Into<Limits>) -> FrameId {
        let axes = Axes::new(xlim, ylim);
        let id = axes.id;
        self.axes.push(axes);
        id
    }

    pub fn axes(&self, id: FrameId) -> Option<&Axes> {
        self.axes.iter().find(|a| a.id == id)
    }

    pub fn axes_mut(&mut self, id: FrameId) -> Option<&mut Axes> {
        self.axes.iter_mut().find(|a| a.id == id)
    }

    /// All axes, in creation order.
    pub fn all_axes(&self) -> &[Axes] {
        &self.axes
    }

    /// How many times the figure has been drawn.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }

    /// Live event subscriptions.
    pub fn callbacks(&self) -> &CallbackRegistry {
        &self.callbacks
    }
}

impl Canvas for Figure {
    fn connect(&mut self, kind: EventKind, listener: ListenerId) -> ConnectionId {
        self.callbacks.connect(kind, listener)
    }

    fn disconnect(&mut self, cid: ConnectionId) {
        self.callbacks.disconnect(cid);
    }

    fn subscribers(&self, kind: EventKind) -> Vec<ListenerId> {
        self.callbacks.subscribers(kind)
    }

    fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    fn draw(&mut self) {
        self.draw_count += 1;
        log::trace!("figure drawn ({} total)", self.draw_count);
    }

    fn frame(&self, id: FrameId) -> Option<&dyn Frame> {
        self.axes(id).map(|a| a as &dyn Frame)
    }

    fn frame_mut(&mut self, id: FrameId) -> Option<&mut dyn Frame> {
        self.axes_mut(id).map(|a| a as &mut dyn Frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::Line2D;

    #[test]
    fn test_add_axes() {
        let mut fig = Figure::new();
        let ax = fig.add_axes((0.0, 10.0), (-1.0, 1.0));
        let frame = fig.frame(ax).unwrap();
        assert_eq!(frame.id(), ax);
        assert_eq!(frame.xlim(), Limits::new(0.0, 10.0));
        assert_eq!(frame.ylim(), Limits::new(-1.0, 1.0));
        assert!(fig.frame(FrameId::new()).is_none());
    }

    #[test]
    fn test_render_order() {
        let mut axes = Axes::new((0.0, 1.0), (0.0, 1.0));
        let a = axes.add_artist(Artist::line(Line2D::new(vec![0.0], vec![0.0])));
        let b = axes.add_artist(Artist::line(Line2D::new(vec![1.0], vec![1.0])));
        let c = axes.add_artist(Artist::line(Line2D::new(vec![2.0], vec![2.0])));
        assert_eq!(axes.render_order(), &[a, b, c]);

        axes.bring_to_front(a);
        assert_eq!(axes.render_order(), &[b, c, a]);

        axes.send_to_back(c);
        assert_eq!(axes.render_order(), &[c, b, a]);

        assert!(axes.remove_artist(b).is_some());
        assert_eq!(axes.render_order(), &[c, a]);
        assert_eq!(axes.len(), 2);
    }

    #[test]
    fn test_redraw_request() {
        let mut fig = Figure::new();
        assert!(!fig.take_redraw_request());
        fig.request_redraw();
        fig.request_redraw();
        assert!(fig.take_redraw_request());
        assert!(!fig.take_redraw_request());
        fig.draw();
        assert_eq!(fig.draw_count(), 1);
    }
}
