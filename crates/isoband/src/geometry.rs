//! Geometric primitives shared by extraction and the post-processing passes.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
///
/// Extraction emits grid-index coordinates (`x` = column, `y` = row);
/// [`crate::rescale`] maps them to output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point `t` of the way from `self` to `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

/// An ordered run of points.
///
/// A closed polyline repeats its first point as its last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length along the polyline.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }

    /// Axis-aligned bounds, or `None` for an empty polyline.
    pub fn bounds(&self) -> Option<ClipBox> {
        let first = self.points.first()?;
        let init = ClipBox::new(first.x, first.y, first.x, first.y);
        Some(self.points.iter().fold(init, |b, p| ClipBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }
}

/// Size of the output surface in output units (usually pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: f64,
    pub height: f64,
}

impl OutputSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned clipping rectangle with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClipBox {
    /// Create a box from corner coordinates; swapped corners are normalised.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// The full output surface, `[0, width] x [0, height]`.
    pub fn from_size(size: OutputSize) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Shrink the box by `margin` on every side.
    ///
    /// A margin larger than half the box collapses it onto its centre.
    pub fn inset(&self, margin: f64) -> Self {
        let cx = (self.min_x + self.max_x) / 2.0;
        let cy = (self.min_y + self.max_y) / 2.0;
        Self {
            min_x: (self.min_x + margin).min(cx),
            min_y: (self.min_y + margin).min(cy),
            max_x: (self.max_x - margin).max(cx),
            max_y: (self.max_y - margin).max(cy),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Clamp a point onto the box.
    pub(crate) fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}
