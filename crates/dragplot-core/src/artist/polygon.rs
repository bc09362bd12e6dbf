//! Regular polygon patch.

use kurbo::{BezPath, Point, Shape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A regular polygon with `num_vertices` corners on a circle of `radius`.
///
/// With zero `orientation` the first vertex points straight up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    pub center: Point,
    pub num_vertices: usize,
    pub radius: f64,
    /// Rotation in radians.
    #[serde(default)]
    pub orientation: f64,
}

impl RegularPolygon {
    pub fn new(center: Point, num_vertices: usize, radius: f64) -> Self {
        Self {
            center,
            num_vertices,
            radius,
            orientation: 0.0,
        }
    }

    /// Set the rotation in radians.
    pub fn with_orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    /// Corner positions, counter-clockwise.
    pub fn vertices(&self) -> Vec<Point> {
        let n = self.num_vertices;
        (0..n)
            .map(|i| {
                let theta = self.orientation + FRAC_PI_2 + TAU * i as f64 / n as f64;
                self.center + Vec2::from_angle(theta) * self.radius
            })
            .collect()
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut vertices = self.vertices().into_iter();
        if let Some(first) = vertices.next() {
            path.move_to(first);
            for v in vertices {
                path.line_to(v);
            }
            path.close_path();
        }
        path
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.num_vertices < 3 {
            return false;
        }
        self.to_path().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertices() {
        let square = RegularPolygon::new(Point::new(0.0, 0.0), 4, 1.0);
        let vertices = square.vertices();
        assert_eq!(vertices.len(), 4);
        assert!((vertices[0].x).abs() < 1e-9);
        assert!((vertices[0].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains() {
        let hexagon = RegularPolygon::new(Point::new(10.0, 10.0), 6, 2.0);
        assert!(hexagon.contains(Point::new(10.0, 10.0)));
        assert!(hexagon.contains(Point::new(11.0, 10.5)));
        assert!(!hexagon.contains(Point::new(13.0, 10.0)));
    }

    #[test]
    fn test_degenerate() {
        let line = RegularPolygon::new(Point::ZERO, 2, 1.0);
        assert!(!line.contains(Point::ZERO));
    }
}
