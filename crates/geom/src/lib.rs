//! Geometry primitives used across arbor.
//!
//! All quantities are `f32` in abstract layout units. Nothing here rejects
//! NaN or negative values: degenerate inputs produce degenerate shapes.

/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;
/// Width/height size type.
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;

/// A layout axis.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
