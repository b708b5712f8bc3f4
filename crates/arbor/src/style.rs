//! Style properties attached to each layout node.
//!
//! A [`Style`] is plain data. The layout pass reads it; nothing in here has
//! behavior beyond defaults, builders and the `align-self` resolver.

use serde::{Deserialize, Serialize};

use crate::{Dimension, Edges, geom::Axis};

/// Main axis direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
    /// Row, placing children in reverse order.
    RowReverse,
    /// Column, placing children in reverse order.
    ColumnReverse,
}

impl Direction {
    /// The main axis for this direction.
    pub fn main_axis(self) -> Axis {
        match self {
            Self::Row | Self::RowReverse => Axis::Horizontal,
            Self::Column | Self::ColumnReverse => Axis::Vertical,
        }
    }

    /// True for row directions.
    pub fn is_row(self) -> bool {
        self.main_axis() == Axis::Horizontal
    }

    /// True for reversed directions.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Line wrapping. Stored but not consulted: containers are always single-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    /// Single line.
    #[default]
    NoWrap,
    /// Wrap onto new lines.
    Wrap,
    /// Wrap in reverse line order.
    WrapReverse,
}

/// Main-axis distribution of children and free space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    /// Pack at the start.
    #[default]
    FlexStart,
    /// Pack at the end.
    FlexEnd,
    /// Center.
    Center,
    /// Free space between children only.
    SpaceBetween,
    /// Equal space around each child.
    SpaceAround,
    /// Equal space between and at the ends.
    SpaceEvenly,
}

/// Cross-axis alignment of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Pack at the start.
    FlexStart,
    /// Pack at the end.
    FlexEnd,
    /// Center.
    Center,
    /// Fill the cross axis.
    #[default]
    Stretch,
    /// Treated as `FlexStart`.
    Baseline,
}

/// Per-child override of the parent's [`AlignItems`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    /// Use the parent's `align_items`.
    #[default]
    Auto,
    /// Pack at the start.
    FlexStart,
    /// Pack at the end.
    FlexEnd,
    /// Center.
    Center,
    /// Fill the cross axis.
    Stretch,
    /// Treated as `FlexStart`.
    Baseline,
}

impl AlignSelf {
    /// Resolve against the parent container's `align_items`.
    pub fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Stretch => AlignItems::Stretch,
            Self::Baseline => AlignItems::Baseline,
        }
    }
}

/// Distribution of lines on the cross axis. Stored but not consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    /// Pack at the start.
    FlexStart,
    /// Pack at the end.
    FlexEnd,
    /// Center.
    Center,
    /// Fill the cross axis.
    #[default]
    Stretch,
    /// Free space between children only.
    SpaceBetween,
    /// Equal space around each child.
    SpaceAround,
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Participates in flex distribution.
    #[default]
    Relative,
    /// Placed from the parent's edges with `top`/`right`/`bottom`/`left`.
    Absolute,
}

/// Whether the node takes part in layout at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// Laid out normally.
    #[default]
    Flex,
    /// Zero-sized; descendants are skipped.
    None,
}

/// Content overflow. Stored for renderers; layout ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// Overflow is drawn.
    #[default]
    Visible,
    /// Overflow is clipped.
    Hidden,
    /// Overflow is scrollable.
    Scroll,
}

/// Layout configuration for one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Main axis and placement order.
    pub direction: Direction,
    /// Line wrapping.
    pub wrap: Wrap,
    /// Main-axis distribution.
    pub justify_content: Justify,
    /// Default cross-axis alignment of children.
    pub align_items: AlignItems,
    /// Cross-axis alignment override within the parent.
    pub align_self: AlignSelf,
    /// Cross-axis line distribution.
    pub align_content: AlignContent,

    /// Outer width.
    pub width: Dimension,
    /// Outer height.
    pub height: Dimension,
    /// Lower width bound.
    pub min_width: Dimension,
    /// Lower height bound.
    pub min_height: Dimension,
    /// Upper width bound.
    pub max_width: Dimension,
    /// Upper height bound.
    pub max_height: Dimension,

    /// Share of positive free space, `>= 0`.
    pub flex_grow: f32,
    /// Weight for absorbing negative free space, `>= 0`.
    pub flex_shrink: f32,
    /// Main-axis size before grow/shrink.
    pub flex_basis: Dimension,

    /// Outer spacing.
    pub margin: Edges,
    /// Inner spacing.
    pub padding: Edges,
    /// Border thickness.
    pub border: Edges,

    /// Gap between children on the main axis. Overrides `row_gap` and
    /// `column_gap` when positive.
    pub gap: f32,
    /// Main-axis gap for column containers.
    pub row_gap: f32,
    /// Main-axis gap for row containers.
    pub column_gap: f32,

    /// Positioning scheme.
    pub position: Position,
    /// Top offset for absolute nodes.
    pub top: Dimension,
    /// Right offset for absolute nodes.
    pub right: Dimension,
    /// Bottom offset for absolute nodes.
    pub bottom: Dimension,
    /// Left offset for absolute nodes.
    pub left: Dimension,

    /// Layout participation.
    pub display: Display,
    /// Content overflow.
    pub overflow: Overflow,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            wrap: Wrap::default(),
            justify_content: Justify::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            align_content: AlignContent::default(),
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Undefined,
            min_height: Dimension::Undefined,
            max_width: Dimension::Undefined,
            max_height: Dimension::Undefined,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Dimension::Auto,
            margin: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
            gap: 0.0,
            row_gap: 0.0,
            column_gap: 0.0,
            position: Position::default(),
            top: Dimension::Undefined,
            right: Dimension::Undefined,
            bottom: Dimension::Undefined,
            left: Dimension::Undefined,
            display: Display::default(),
            overflow: Overflow::default(),
        }
    }
}

impl Style {
    /// A row container.
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Self::default()
        }
    }

    /// A column container.
    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Self::default()
        }
    }

    /// Set `direction`.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set `width`.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Set `height`.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Set both width and height.
    pub fn size(self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width(width).height(height)
    }

    /// Set `min_width`.
    pub fn min_width(mut self, v: impl Into<Dimension>) -> Self {
        self.min_width = v.into();
        self
    }

    /// Set `max_width`.
    pub fn max_width(mut self, v: impl Into<Dimension>) -> Self {
        self.max_width = v.into();
        self
    }

    /// Set `min_height`.
    pub fn min_height(mut self, v: impl Into<Dimension>) -> Self {
        self.min_height = v.into();
        self
    }

    /// Set `max_height`.
    pub fn max_height(mut self, v: impl Into<Dimension>) -> Self {
        self.max_height = v.into();
        self
    }

    /// Set `grow`.
    pub fn grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    /// Set `shrink`.
    pub fn shrink(mut self, shrink: f32) -> Self {
        self.flex_shrink = shrink;
        self
    }

    /// Set `basis`.
    pub fn basis(mut self, basis: impl Into<Dimension>) -> Self {
        self.flex_basis = basis.into();
        self
    }

    /// Set `gap`.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set `margin`.
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Set `padding`.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set `border`.
    pub fn border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    /// Set `justify`.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set `align_items`.
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set `align_self`.
    pub fn align_self(mut self, align: AlignSelf) -> Self {
        self.align_self = align;
        self
    }

    /// Take the node out of flex flow.
    pub fn absolute(mut self) -> Self {
        self.position = Position::Absolute;
        self
    }

    /// Set `top`.
    pub fn top(mut self, v: impl Into<Dimension>) -> Self {
        self.top = v.into();
        self
    }

    /// Set `right`.
    pub fn right(mut self, v: impl Into<Dimension>) -> Self {
        self.right = v.into();
        self
    }

    /// Set `bottom`.
    pub fn bottom(mut self, v: impl Into<Dimension>) -> Self {
        self.bottom = v.into();
        self
    }

    /// Set `left`.
    pub fn left(mut self, v: impl Into<Dimension>) -> Self {
        self.left = v.into();
        self
    }

    /// Set `display: none`.
    pub fn hidden(mut self) -> Self {
        self.display = Display::None;
        self
    }

    /// Style size along an axis.
    pub fn size_along(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Minimum size along an axis.
    pub fn min_along(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// Maximum size along an axis.
    pub fn max_along(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// Gap between adjacent children on the main axis.
    pub fn main_gap(&self) -> f32 {
        if self.gap > 0.0 {
            self.gap
        } else if self.direction.is_row() {
            self.column_gap
        } else {
            self.row_gap
        }
    }

    /// True if the node participates in layout.
    pub fn is_displayed(&self) -> bool {
        self.display != Display::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Style::default();
        assert_eq!(s.flex_shrink, 1.0);
        assert_eq!(s.flex_grow, 0.0);
        assert_eq!(s.width, Dimension::Auto);
        assert_eq!(s.min_width, Dimension::Undefined);
        assert_eq!(s.align_items, AlignItems::Stretch);
        assert_eq!(s.align_self, AlignSelf::Auto);
        assert_eq!(s.position, Position::Relative);
        assert!(s.is_displayed());
    }

    #[test]
    fn align_self_resolution() {
        assert_eq!(
            AlignSelf::Auto.resolve(AlignItems::Center),
            AlignItems::Center
        );
        assert_eq!(
            AlignSelf::FlexEnd.resolve(AlignItems::Center),
            AlignItems::FlexEnd
        );
        assert_eq!(
            AlignSelf::Baseline.resolve(AlignItems::Stretch),
            AlignItems::Baseline
        );
    }

    #[test]
    fn main_gap_precedence() {
        let mut s = Style::row();
        s.column_gap = 2.0;
        s.row_gap = 5.0;
        assert_eq!(s.main_gap(), 2.0);
        s.direction = Direction::ColumnReverse;
        assert_eq!(s.main_gap(), 5.0);
        s.gap = 1.0;
        assert_eq!(s.main_gap(), 1.0);
    }

    #[test]
    fn direction_axes() {
        assert_eq!(Direction::RowReverse.main_axis(), Axis::Horizontal);
        assert!(Direction::ColumnReverse.is_reverse());
        assert!(!Direction::Column.is_row());
    }

    #[test]
    fn builders() {
        let s = Style::column()
            .size(10.0, Dimension::percent(50.0))
            .grow(2.0)
            .padding(Edges::all(1.0))
            .absolute()
            .right(3.0);
        assert_eq!(s.direction, Direction::Column);
        assert_eq!(s.width, Dimension::Fixed(10.0));
        assert_eq!(s.height, Dimension::Percent(50.0));
        assert_eq!(s.flex_grow, 2.0);
        assert_eq!(s.position, Position::Absolute);
        assert_eq!(s.right, Dimension::Fixed(3.0));
        assert_eq!(s.size_along(Axis::Vertical), Dimension::Percent(50.0));
    }

    #[test]
    fn deserialize_partial() {
        let s: Style = serde_json::from_str(
            r#"{"direction": "column-reverse", "justify_content": "space-between", "width": "50%", "flex_grow": 1}"#,
        )
        .unwrap();
        assert_eq!(s.direction, Direction::ColumnReverse);
        assert_eq!(s.justify_content, Justify::SpaceBetween);
        assert_eq!(s.width, Dimension::Percent(50.0));
        assert_eq!(s.flex_grow, 1.0);
        assert_eq!(s.flex_shrink, 1.0);
        assert_eq!(s.height, Dimension::Auto);
    }
}
