//! Elliptical arc patch.

use super::{DEFAULT_PICK_RADIUS, point_to_polyline_dist};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Segments used to approximate the arc for hit testing.
const ARC_SEGMENTS: usize = 64;

/// An unfilled elliptical arc from `theta1` to `theta2` (degrees,
/// counter-clockwise), centered at `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub angle: f64,
    pub theta1: f64,
    pub theta2: f64,
    /// Hit distance from the curve, in data units.
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f64,
}

fn default_pick_radius() -> f64 {
    DEFAULT_PICK_RADIUS
}

impl Arc {
    pub fn new(center: Point, width: f64, height: f64, theta1: f64, theta2: f64) -> Self {
        Self {
            center,
            width,
            height,
            angle: 0.0,
            theta1,
            theta2,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }

    /// Set the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Angular sweep in degrees, in `(0, 360]`.
    pub fn sweep(&self) -> f64 {
        let sweep = (self.theta2 - self.theta1).rem_euclid(360.0);
        if sweep == 0.0 { 360.0 } else { sweep }
    }

    /// Points along the curve from `theta1` to `theta2`.
    pub fn points(&self) -> Vec<Point> {
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        let (rot_sin, rot_cos) = self.angle.to_radians().sin_cos();
        let sweep = self.sweep();
        (0..=ARC_SEGMENTS)
            .map(|i| {
                let t = (self.theta1 + sweep * i as f64 / ARC_SEGMENTS as f64).to_radians();
                let local = Vec2::new(rx * t.cos(), ry * t.sin());
                self.center
                    + Vec2::new(
                        local.x * rot_cos - local.y * rot_sin,
                        local.x * rot_sin + local.y * rot_cos,
                    )
            })
            .collect()
    }

    pub fn contains(&self, point: Point) -> bool {
        point_to_polyline_dist(point, &self.points()) <= self.pick_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep() {
        assert!((Arc::new(Point::ZERO, 2.0, 2.0, 0.0, 90.0).sweep() - 90.0).abs() < 1e-9);
        assert!((Arc::new(Point::ZERO, 2.0, 2.0, 270.0, 90.0).sweep() - 180.0).abs() < 1e-9);
        assert!((Arc::new(Point::ZERO, 2.0, 2.0, 0.0, 360.0).sweep() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_on_curve_only() {
        let arc = Arc::new(Point::new(0.0, 0.0), 4.0, 4.0, 0.0, 180.0);
        assert!(arc.contains(Point::new(2.0, 0.0)));
        assert!(arc.contains(Point::new(0.0, 2.0)));
        // Center of an arc is empty space.
        assert!(!arc.contains(Point::new(0.0, 0.0)));
        // Lower half is outside the sweep.
        assert!(!arc.contains(Point::new(0.0, -2.0)));
    }
}
