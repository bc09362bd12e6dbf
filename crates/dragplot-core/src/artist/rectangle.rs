//! Rectangle patch.

use super::ellipse::unrotate;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle anchored at its `xy` corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Anchor corner (the lower-left one for positive width and height).
    pub xy: Point,
    pub width: f64,
    pub height: f64,
    /// Counter-clockwise rotation around `xy`, in degrees.
    #[serde(default)]
    pub angle: f64,
}

impl Rectangle {
    /// Create a new axis-aligned rectangle.
    pub fn new(xy: Point, width: f64, height: f64) -> Self {
        Self {
            xy,
            width,
            height,
            angle: 0.0,
        }
    }

    /// Create a rectangle spanning two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs(),
        )
    }

    /// Set the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Unrotated extent, normalized so `x0 <= x1` and `y0 <= y1`.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.xy.x,
            self.xy.y,
            self.xy.x + self.width,
            self.xy.y + self.height,
        )
        .abs()
    }

    /// Set the unrotated extent from a rect.
    pub fn set_bounds(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.xy = Point::new(rect.x0, rect.y0);
        self.width = rect.width();
        self.height = rect.height();
    }

    pub fn contains(&self, point: Point) -> bool {
        let local = self.xy + unrotate(point - self.xy, self.angle);
        let rect = self.as_rect();
        local.x >= rect.x0 && local.x <= rect.x1 && local.y >= rect.y0 && local.y <= rect.y1
    }
}
