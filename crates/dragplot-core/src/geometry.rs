//! Small geometry helpers shared by the draggables.

use crate::error::DragError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(low, high)` pair of data coordinates, such as an axis view limit.
///
/// The pair is kept in the order it was given; a frame with an inverted
/// axis reports `low > high`. Use [`Limits::min`] and [`Limits::max`] when
/// the ordered extent is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub low: f64,
    pub high: f64,
}

impl Limits {
    /// Create a new pair.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Smaller of the two values.
    pub fn min(&self) -> f64 {
        self.low.min(self.high)
    }

    /// Larger of the two values.
    pub fn max(&self) -> f64 {
        self.low.max(self.high)
    }

    /// Absolute distance between the two values.
    pub fn span(&self) -> f64 {
        (self.high - self.low).abs()
    }

    /// The pair as a two-element array, in stored order.
    pub fn to_array(self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Check whether `value` lies within the inclusive extent.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl From<(f64, f64)> for Limits {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Direction a line or window is laid out in.
///
/// A vertical line sits at a fixed x and is dragged left/right; a horizontal
/// line sits at a fixed y and is dragged up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The axis the pointer moves this object along.
    pub fn free_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::X,
            Orientation::Horizontal => Axis::Y,
        }
    }

    /// The axis that always spans the full view.
    pub fn fixed_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Y,
            Orientation::Horizontal => Axis::X,
        }
    }
}

impl FromStr for Orientation {
    type Err = DragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(DragError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// A data axis of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Pick this axis' component of a point.
    pub fn of(self, point: kurbo::Point) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// Multiply both components of a coordinate pair by `factor`.
///
/// `scale_pair([1.0, 1.0], x)` yields the two equal endpoints of a line
/// sitting at `x`.
pub fn scale_pair(pair: [f64; 2], factor: f64) -> [f64; 2] {
    [pair[0] * factor, pair[1] * factor]
}

/// Ordered extent of a data series, or `None` if it holds no finite values.
pub fn extent(data: &[f64]) -> Option<Limits> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<Limits>, v| match acc {
            None => Some(Limits::new(v, v)),
            Some(l) => Some(Limits::new(l.low.min(v), l.high.max(v))),
        })
}

/// Clamp `query` into the extent of `data`.
///
/// Values above the largest sample map to it, values below the smallest map
/// to it, anything in between passes through unchanged. An empty series does
/// not constrain the query.
pub fn drag_limiter(query: f64, data: &[f64]) -> f64 {
    let Some(range) = extent(data) else {
        return query;
    };
    if query > range.high {
        range.high
    } else if query < range.low {
        range.low
    } else {
        query
    }
}
