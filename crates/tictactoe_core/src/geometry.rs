//! Plain geometry shared with the rendering layer.
//!
//! Coordinates follow the usual math convention: X grows to the right and
//! Y grows upward. A [`Rect`] is stored as its top-left `start` and
//! bottom-right `end` corner, so a well-formed rect has `end.y <= start.y`.

use serde::{Deserialize, Serialize};

/// A point in board space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (ascending upward).
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub start: Point,
    /// Bottom-right corner.
    pub end: Point,
}

impl Rect {
    /// Creates a rect from its top-left and bottom-right corners.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Strict containment test.
    ///
    /// A point lying exactly on any edge is outside, so two adjacent cells
    /// never both claim the shared border.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.start.x && p.x < self.end.x && p.y < self.start.y && p.y > self.end.y
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.start.y - self.end.y
    }

    /// Midpoint of the rect.
    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Top-right corner.
    pub fn top_right(&self) -> Point {
        Point::new(self.end.x, self.start.y)
    }

    /// Bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.start.x, self.end.y)
    }

    /// Shrinks the rect by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        Self::new(
            self.start.offset(margin, -margin),
            self.end.offset(-margin, margin),
        )
    }
}

/// A straight line between two points, for strokes and separators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

impl Segment {
    /// Creates a segment.
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Rect {
        Rect::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0))
    }

    #[test]
    fn test_contains_interior() {
        assert!(unit().contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_edges_are_outside() {
        let r = unit();
        assert!(!r.contains(Point::new(0.0, 5.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 0.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
    }

    #[test]
    fn test_dimensions_and_center() {
        let r = unit();
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 10.0);
        assert_eq!(r.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_inset() {
        let r = unit().inset(2.0);
        assert_eq!(r.start, Point::new(2.0, 8.0));
        assert_eq!(r.end, Point::new(8.0, 2.0));
        assert_eq!(r.width(), 6.0);
    }
}
