//! Four-sided insets used for margin, padding and border.

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::{Dimension, geom::Size};

/// Per-side style values. Left and right resolve against the parent width,
/// top and bottom against the parent height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Top edge.
    pub top: Dimension,
    /// Right edge.
    pub right: Dimension,
    /// Bottom edge.
    pub bottom: Dimension,
    /// Left edge.
    pub left: Dimension,
}

impl Edges {
    /// Construct from sides in CSS order: top, right, bottom, left.
    pub fn new(
        top: impl Into<Dimension>,
        right: impl Into<Dimension>,
        bottom: impl Into<Dimension>,
        left: impl Into<Dimension>,
    ) -> Self {
        Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// The same value on every side.
    pub fn all(v: impl Into<Dimension>) -> Self {
        let v = v.into();
        Self::new(v, v, v, v)
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub fn symmetric(vertical: impl Into<Dimension>, horizontal: impl Into<Dimension>) -> Self {
        let v = vertical.into();
        let h = horizontal.into();
        Self::new(v, h, v, h)
    }

    /// Left plus right. Unresolvable sides count as zero.
    pub fn horizontal_sum(&self, parent_width: f32) -> f32 {
        self.left.resolve_or(parent_width, 0.0) + self.right.resolve_or(parent_width, 0.0)
    }

    /// Top plus bottom. Unresolvable sides count as zero.
    pub fn vertical_sum(&self, parent_height: f32) -> f32 {
        self.top.resolve_or(parent_height, 0.0) + self.bottom.resolve_or(parent_height, 0.0)
    }

    /// Resolve every side to a concrete inset.
    pub fn resolve(&self, parent: Size) -> Insets {
        Insets {
            top: self.top.resolve_or(parent.height, 0.0),
            right: self.right.resolve_or(parent.width, 0.0),
            bottom: self.bottom.resolve_or(parent.height, 0.0),
            left: self.left.resolve_or(parent.width, 0.0),
        }
    }
}

/// Resolved edge sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl Insets {
    /// Left plus right.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Leading inset on the horizontal (`true`) or vertical axis.
    pub fn start(&self, horizontal: bool) -> f32 {
        if horizontal { self.left } else { self.top }
    }

    /// Trailing inset on the horizontal (`true`) or vertical axis.
    pub fn end(&self, horizontal: bool) -> f32 {
        if horizontal { self.right } else { self.bottom }
    }
}

impl Add for Insets {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}
