use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// An axis-aligned rectangle. The origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Construct from components.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// An empty rect at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height without the location.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge, exclusive.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge, exclusive.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Does the rect contain the point? Edges are half-open, so a point on
    /// the right or bottom edge is outside.
    pub fn contains_point(&self, p: impl Into<Point>) -> bool {
        let p = p.into();
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Shift the rect by an offset.
    pub fn translate(&self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }
}
