//! Line series.

use super::{DEFAULT_PICK_RADIUS, point_to_polyline_dist};
use crate::geometry::Axis;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A polyline through `(xdata[i], ydata[i])`.
///
/// Used both for draggable lines (two points) and for plain data series
/// that a draggable can snap to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line2D {
    pub xdata: Vec<f64>,
    pub ydata: Vec<f64>,
    /// Hit distance in data units.
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f64,
}

fn default_pick_radius() -> f64 {
    DEFAULT_PICK_RADIUS
}

impl Line2D {
    /// Create a new series. Extra samples on the longer axis are ignored.
    pub fn new(xdata: Vec<f64>, ydata: Vec<f64>) -> Self {
        Self {
            xdata,
            ydata,
            pick_radius: DEFAULT_PICK_RADIUS,
        }
    }

    /// Set the hit distance.
    pub fn with_pick_radius(mut self, pick_radius: f64) -> Self {
        self.pick_radius = pick_radius;
        self
    }

    /// Samples along `axis`.
    pub fn data(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xdata,
            Axis::Y => &self.ydata,
        }
    }

    /// Replace the samples along `axis`.
    pub fn set_data(&mut self, axis: Axis, data: Vec<f64>) {
        match axis {
            Axis::X => self.xdata = data,
            Axis::Y => self.ydata = data,
        }
    }

    /// The vertices of the polyline.
    pub fn points(&self) -> Vec<Point> {
        self.xdata
            .iter()
            .zip(&self.ydata)
            .map(|(&x, &y)| Point::new(x, y))
            .collect()
    }

    /// Check if a point is within the pick radius of the polyline.
    pub fn contains(&self, point: Point) -> bool {
        point_to_polyline_dist(point, &self.points()) <= self.pick_radius
    }
}
