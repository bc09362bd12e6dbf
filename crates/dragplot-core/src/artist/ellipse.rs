//! Ellipse patch.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// An ellipse centered at `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Center point.
    pub center: Point,
    /// Full horizontal diameter before rotation.
    pub width: f64,
    /// Full vertical diameter before rotation.
    pub height: f64,
    /// Counter-clockwise rotation in degrees.
    #[serde(default)]
    pub angle: f64,
}

impl Ellipse {
    /// Create a new axis-aligned ellipse.
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle: 0.0,
        }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius * 2.0, radius * 2.0)
    }

    /// Set the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn contains(&self, point: Point) -> bool {
        let rx = self.width.abs() / 2.0;
        let ry = self.height.abs() / 2.0;
        if rx < f64::EPSILON || ry < f64::EPSILON {
            return false;
        }
        let local = unrotate(point - self.center, self.angle);
        let dx = local.x / rx;
        let dy = local.y / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Rotate an offset clockwise by `degrees`, undoing a shape rotation.
pub(super) fn unrotate(offset: Vec2, degrees: f64) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(offset.x * cos + offset.y * sin, -offset.x * sin + offset.y * cos)
}
