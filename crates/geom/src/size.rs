use serde::{Deserialize, Serialize};

use super::{Axis, Point, Rect};

/// A `Size` is a rectangle that has a width and height but no location.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Construct from components.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build a size from main/cross extents along `main`.
    pub fn from_main_cross(main: Axis, m: f32, c: f32) -> Self {
        match main {
            Axis::Horizontal => Self::new(m, c),
            Axis::Vertical => Self::new(c, m),
        }
    }

    /// The extent along an axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Return a `Rect` with the same dimensions, located at `origin`.
    pub fn at(&self, origin: Point) -> Rect {
        Rect::new(origin.x, origin.y, self.width, self.height)
    }
}

impl From<(f32, f32)> for Size {
    fn from(v: (f32, f32)) -> Self {
        Self::new(v.0, v.1)
    }
}
