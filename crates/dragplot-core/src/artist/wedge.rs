//! Wedge (pie slice / annular sector) patch.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A circular sector of radius `r` from `theta1` to `theta2` (degrees,
/// counter-clockwise). With `width` set, only the outer ring of that
/// thickness is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedge {
    pub center: Point,
    pub r: f64,
    pub theta1: f64,
    pub theta2: f64,
    #[serde(default)]
    pub width: Option<f64>,
}

impl Wedge {
    pub fn new(center: Point, r: f64, theta1: f64, theta2: f64) -> Self {
        Self {
            center,
            r,
            theta1,
            theta2,
            width: None,
        }
    }

    /// Restrict the wedge to a ring of the given thickness.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Radius of the empty inner disc.
    pub fn inner_radius(&self) -> f64 {
        self.width.map_or(0.0, |w| (self.r - w).max(0.0))
    }

    pub fn contains(&self, point: Point) -> bool {
        let offset = point - self.center;
        let dist = offset.hypot();
        if dist > self.r || dist < self.inner_radius() {
            return false;
        }
        if dist < f64::EPSILON {
            return true;
        }
        let sweep = (self.theta2 - self.theta1).rem_euclid(360.0);
        let sweep = if sweep == 0.0 { 360.0 } else { sweep };
        let angle = offset.y.atan2(offset.x).to_degrees();
        (angle - self.theta1).rem_euclid(360.0) <= sweep
    }
}
