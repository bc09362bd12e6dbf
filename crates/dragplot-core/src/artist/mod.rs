//! Drawable artists: the line series and filled patches a frame renders.

mod arc;
mod ellipse;
mod line;
mod polygon;
mod rectangle;
mod wedge;

pub use arc::Arc;
pub use ellipse::Ellipse;
pub use line::Line2D;
pub use polygon::RegularPolygon;
pub use rectangle::Rectangle;
pub use wedge::Wedge;

use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Hit radius, in data units, for artists without an interior.
pub const DEFAULT_PICK_RADIUS: f64 = 0.1;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Drawing style forwarded verbatim to the renderer.
///
/// Nothing in the drag logic reads these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistStyle {
    /// Outline / line color.
    pub edge_color: SerializableColor,
    /// Fill color (None = no fill).
    pub face_color: Option<SerializableColor>,
    /// Outline / line width in points.
    pub line_width: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub alpha: f64,
    /// Legend label.
    pub label: Option<String>,
}

impl ArtistStyle {
    /// Get the edge color as a peniko Color.
    pub fn edge(&self) -> Color {
        self.edge_color.into()
    }

    /// Get the face color as a peniko Color.
    pub fn face(&self) -> Option<Color> {
        self.face_color.map(|c| c.into())
    }

    /// Set the face color from a peniko Color.
    pub fn set_face(&mut self, color: Option<Color>) {
        self.face_color = color.map(|c| c.into());
    }
}

impl Default for ArtistStyle {
    fn default() -> Self {
        Self {
            edge_color: SerializableColor::black(),
            face_color: None,
            line_width: 1.5,
            alpha: 1.0,
            label: None,
        }
    }
}

/// How a patch is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorKind {
    /// Positioned by its center (ellipses, arcs, wedges, polygons).
    Center,
    /// Positioned by a corner (rectangles).
    Origin,
}

/// A filled shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Patch {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Arc(Arc),
    Wedge(Wedge),
    RegularPolygon(RegularPolygon),
}

impl Patch {
    /// Which position concept this shape exposes.
    pub fn anchor_kind(&self) -> AnchorKind {
        match self {
            Patch::Rectangle(_) => AnchorKind::Origin,
            Patch::Ellipse(_) | Patch::Arc(_) | Patch::Wedge(_) | Patch::RegularPolygon(_) => {
                AnchorKind::Center
            }
        }
    }

    /// Current center or corner, per [`Patch::anchor_kind`].
    pub fn position(&self) -> Point {
        match self {
            Patch::Ellipse(s) => s.center,
            Patch::Rectangle(s) => s.xy,
            Patch::Arc(s) => s.center,
            Patch::Wedge(s) => s.center,
            Patch::RegularPolygon(s) => s.center,
        }
    }

    /// Move the center or corner, per [`Patch::anchor_kind`].
    pub fn set_position(&mut self, position: Point) {
        match self {
            Patch::Ellipse(s) => s.center = position,
            Patch::Rectangle(s) => s.xy = position,
            Patch::Arc(s) => s.center = position,
            Patch::Wedge(s) => s.center = position,
            Patch::RegularPolygon(s) => s.center = position,
        }
    }

    /// Check if a data point lies on this shape.
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Patch::Ellipse(s) => s.contains(point),
            Patch::Rectangle(s) => s.contains(point),
            Patch::Arc(s) => s.contains(point),
            Patch::Wedge(s) => s.contains(point),
            Patch::RegularPolygon(s) => s.contains(point),
        }
    }

    /// Get the rectangle if this patch is one.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Patch::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Get the mutable rectangle if this patch is one.
    pub fn as_rectangle_mut(&mut self) -> Option<&mut Rectangle> {
        match self {
            Patch::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

macro_rules! impl_into_patch {
    ($($shape:ident),*) => {
        $(
            impl From<$shape> for Patch {
                fn from(shape: $shape) -> Self {
                    Patch::$shape(shape)
                }
            }
        )*
    };
}

impl_into_patch!(Ellipse, Rectangle, Arc, Wedge, RegularPolygon);

/// Artist payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArtistKind {
    Line(Line2D),
    Patch(Patch),
}

/// A drawable element of a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub kind: ArtistKind,
    /// Free-form marker; draggables set it to [`crate::drag::DRAGGABLE_TAG`].
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub style: ArtistStyle,
}

impl Artist {
    /// Wrap a line series.
    pub fn line(line: Line2D) -> Self {
        Self {
            kind: ArtistKind::Line(line),
            tag: None,
            style: ArtistStyle::default(),
        }
    }

    /// Wrap a patch.
    pub fn patch(patch: Patch) -> Self {
        Self {
            kind: ArtistKind::Patch(patch),
            tag: None,
            style: ArtistStyle::default(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: ArtistStyle) -> Self {
        self.style = style;
        self
    }

    /// Check if a data point hits this artist.
    pub fn contains(&self, point: Point) -> bool {
        match &self.kind {
            ArtistKind::Line(l) => l.contains(point),
            ArtistKind::Patch(p) => p.contains(point),
        }
    }

    /// Check whether the tag equals `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }

    pub fn as_line(&self) -> Option<&Line2D> {
        match &self.kind {
            ArtistKind::Line(l) => Some(l),
            ArtistKind::Patch(_) => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut Line2D> {
        match &mut self.kind {
            ArtistKind::Line(l) => Some(l),
            ArtistKind::Patch(_) => None,
        }
    }

    pub fn as_patch(&self) -> Option<&Patch> {
        match &self.kind {
            ArtistKind::Patch(p) => Some(p),
            ArtistKind::Line(_) => None,
        }
    }

    pub fn as_patch_mut(&mut self) -> Option<&mut Patch> {
        match &mut self.kind {
            ArtistKind::Patch(p) => Some(p),
            ArtistKind::Line(_) => None,
        }
    }
}

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    (point - (a + seg * t)).hypot()
}

/// Minimum distance from a point to a polyline (sequence of connected segments).
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    match points {
        [] => f64::INFINITY,
        [only] => (point - *only).hypot(),
        _ => points
            .windows(2)
            .map(|w| point_to_segment_dist(point, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}
