//! The layout pass.
//!
//! A pass walks a subtree depth first and writes every displayed node's
//! rect exactly once. Relative children are distributed along the
//! container's main axis (basis, grow/shrink, justify, align); absolute
//! children are anchored to the container's edges. Nothing here fails:
//! degenerate inputs (negative or NaN sizes) flow through the arithmetic
//! and show up as degenerate rects.

use tracing::trace;

use crate::{
    Dimension, NodeId,
    edges::Insets,
    geom::{Axis, Point, Rect, Size},
    style::{AlignItems, Justify, Position, Style},
    tree::LayoutTree,
};

/// How a node's outer size is decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SizeRequest {
    /// Resolve from the node's own style, falling back to this size for
    /// `Auto` and `Undefined`.
    Available(Size),
    /// The parent's flex distribution already decided the size.
    Exact {
        /// Outer size handed down by the parent.
        size: Size,
        /// The parent stretched or flexed the width; content sizing leaves
        /// it alone.
        fixed_width: bool,
        /// Same for the height.
        fixed_height: bool,
    },
}

/// Per-child data collected while distributing a container's main axis.
struct FlexItem {
    /// The child node.
    id: NodeId,
    /// Resolved margins.
    margin: Insets,
    /// Main-axis size before grow/shrink.
    basis: f32,
    /// Final main-axis size handed to the child.
    main: f32,
    /// Final cross-axis size handed to the child.
    cross: f32,
    /// Grow or shrink decided the main size.
    main_fixed: bool,
    /// Stretch decided the cross size.
    cross_fixed: bool,
    /// Resolved cross-axis alignment.
    align: AlignItems,
}

/// Layout traversal over one subtree.
pub(crate) struct LayoutPass<'a> {
    /// Tree being updated.
    tree: &'a mut LayoutTree,
    /// Number of nodes visited so far.
    visited: usize,
}

impl<'a> LayoutPass<'a> {
    pub(crate) fn new(tree: &'a mut LayoutTree) -> Self {
        Self { tree, visited: 0 }
    }

    /// Nodes visited by this pass.
    pub(crate) fn visited(&self) -> usize {
        self.visited
    }

    /// Lay out a node subtree and return its outer size.
    ///
    /// `containing` is the basis for percentages in the node's own style.
    pub(crate) fn layout_node(
        &mut self,
        node_id: NodeId,
        request: SizeRequest,
        containing: Size,
        origin: Point,
    ) -> Size {
        let Some(node) = self.tree.nodes.get(node_id) else {
            return Size::ZERO;
        };
        let style = node.style;
        let children = node.children.clone();
        self.visited += 1;

        if !style.is_displayed() {
            self.set_rect(node_id, Size::ZERO.at(origin));
            return Size::ZERO;
        }

        let (mut size, fixed_width, fixed_height) = match request {
            SizeRequest::Exact {
                size,
                fixed_width,
                fixed_height,
            } => (size, fixed_width, fixed_height),
            SizeRequest::Available(available) => {
                let width = resolve_size(
                    style.width,
                    containing.width,
                    style.min_width,
                    style.max_width,
                    available.width,
                );
                let height = resolve_size(
                    style.height,
                    containing.height,
                    style.min_height,
                    style.max_height,
                    available.height,
                );
                (Size::new(width, height), false, false)
            }
        };

        let inset = style.padding.resolve(containing) + style.border.resolve(containing);
        let content = Size::new(
            size.width - inset.horizontal(),
            size.height - inset.vertical(),
        );

        let mut relative = Vec::new();
        let mut absolute = Vec::new();
        for child in children {
            let Some(child_node) = self.tree.nodes.get(child) else {
                continue;
            };
            if !child_node.style.is_displayed() {
                self.set_rect(child, Rect::zero());
                continue;
            }
            match child_node.style.position {
                Position::Relative => relative.push(child),
                Position::Absolute => absolute.push(child),
            }
        }

        let items = if relative.is_empty() {
            Vec::new()
        } else {
            self.layout_relative(&style, &relative, content, inset)
        };

        for child in absolute {
            self.layout_absolute(child, size);
        }

        if !items.is_empty() {
            let main_axis = style.direction.main_axis();
            if style.width.is_auto() && !fixed_width {
                let w = self.content_extent(&style, &items, main_axis, Axis::Horizontal);
                size.width = clamp(
                    w,
                    style.min_width.resolve(containing.width),
                    style.max_width.resolve(containing.width),
                );
            }
            if style.height.is_auto() && !fixed_height {
                let h = self.content_extent(&style, &items, main_axis, Axis::Vertical);
                size.height = clamp(
                    h,
                    style.min_height.resolve(containing.height),
                    style.max_height.resolve(containing.height),
                );
            }
        }

        let rect = size.at(origin);
        trace!(?node_id, ?rect, "layout");
        self.set_rect(node_id, rect);
        size
    }

    /// Distribute and place the relative children of a container.
    fn layout_relative(
        &mut self,
        style: &Style,
        children: &[NodeId],
        content: Size,
        inset: Insets,
    ) -> Vec<FlexItem> {
        let main_axis = style.direction.main_axis();
        let cross_axis = main_axis.cross();
        let is_row = main_axis == Axis::Horizontal;
        let main_size = content.along(main_axis);
        let cross_size = content.along(cross_axis);

        let mut items = Vec::with_capacity(children.len());
        let mut styles = Vec::with_capacity(children.len());
        for &id in children {
            let child = self.tree.nodes[id].style;
            let basis = child
                .flex_basis
                .resolve(main_size)
                .or_else(|| child.size_along(main_axis).resolve(main_size))
                .unwrap_or(0.0);
            items.push(FlexItem {
                id,
                margin: child.margin.resolve(content),
                basis,
                main: basis,
                cross: 0.0,
                main_fixed: false,
                cross_fixed: false,
                align: child.align_self.resolve(style.align_items),
            });
            styles.push(child);
        }

        let n = items.len();
        let gap = style.main_gap();
        let total_basis: f32 = items
            .iter()
            .map(|i| i.basis + main_margin(&i.margin, is_row))
            .sum();
        let total_gaps = gap * n.saturating_sub(1) as f32;
        let free = main_size - total_basis - total_gaps;

        if free > 0.0 {
            let total_grow: f32 = styles.iter().map(|s| s.flex_grow).sum();
            if total_grow > 0.0 {
                for (item, s) in items.iter_mut().zip(&styles) {
                    item.main = item.basis + free * s.flex_grow / total_grow;
                    item.main_fixed = s.flex_grow > 0.0;
                }
            }
        } else if free < 0.0 {
            let total_scaled: f32 = items
                .iter()
                .zip(&styles)
                .map(|(i, s)| s.flex_shrink * i.basis)
                .sum();
            if total_scaled > 0.0 {
                for (item, s) in items.iter_mut().zip(&styles) {
                    let shrunk = item.basis + free * (s.flex_shrink * item.basis) / total_scaled;
                    item.main = if shrunk < 0.0 { 0.0 } else { shrunk };
                    item.main_fixed = s.flex_shrink * item.basis > 0.0;
                }
            }
        }

        for (item, s) in items.iter_mut().zip(&styles) {
            item.main = clamp(
                item.main,
                s.min_along(main_axis).resolve(main_size),
                s.max_along(main_axis).resolve(main_size),
            );
            let available_cross = cross_size - cross_margin(&item.margin, is_row);
            let cross_style = s.size_along(cross_axis);
            let min = s.min_along(cross_axis);
            let max = s.max_along(cross_axis);
            item.cross_fixed = item.align == AlignItems::Stretch && !cross_style.is_resolvable();
            item.cross = if item.cross_fixed {
                clamp(
                    available_cross,
                    min.resolve(cross_size),
                    max.resolve(cross_size),
                )
            } else {
                resolve_size(cross_style, cross_size, min, max, available_cross)
            };
        }

        let (start, spacing) = justify_offsets(style.justify_content, free, n);
        let order: Vec<usize> = if style.direction.is_reverse() {
            (0..n).rev().collect()
        } else {
            (0..n).collect()
        };

        let mut pos = start;
        for idx in order {
            let item = &items[idx];
            let main_origin = inset.start(is_row) + pos + item.margin.start(is_row);
            let cross_origin = inset.start(!is_row) + item.margin.start(!is_row);
            let (fixed_width, fixed_height) = if is_row {
                (item.main_fixed, item.cross_fixed)
            } else {
                (item.cross_fixed, item.main_fixed)
            };
            let actual = self.layout_node(
                item.id,
                SizeRequest::Exact {
                    size: Size::from_main_cross(main_axis, item.main, item.cross),
                    fixed_width,
                    fixed_height,
                },
                content,
                Point::from_main_cross(main_axis, main_origin, cross_origin),
            );

            let available_cross = cross_size - cross_margin(&item.margin, is_row);
            let offset = align_offset(item.align, available_cross, actual.along(cross_axis));
            self.set_position(
                item.id,
                Point::from_main_cross(main_axis, main_origin, cross_origin + offset),
            );

            pos += actual.along(main_axis) + main_margin(&item.margin, is_row) + gap + spacing;
        }

        items
    }

    /// Lay out an absolutely positioned child of a container of `parent` size.
    fn layout_absolute(&mut self, child: NodeId, parent: Size) {
        let style = self.tree.nodes[child].style;
        let actual = self.layout_node(child, SizeRequest::Available(parent), parent, Point::zero());
        let x = anchor(style.left, style.right, parent.width, actual.width);
        let y = anchor(style.top, style.bottom, parent.height, actual.height);
        self.set_position(child, Point::new(x, y));
    }

    /// Size of a container along `axis` derived from its laid-out relative
    /// children: summed along the main axis, furthest child edge across it.
    fn content_extent(
        &self,
        style: &Style,
        items: &[FlexItem],
        main_axis: Axis,
        axis: Axis,
    ) -> f32 {
        let horizontal = axis == Axis::Horizontal;
        let rects = items.iter().map(|i| {
            let rect = self.tree.nodes.get(i.id).map(|n| n.rect).unwrap_or_default();
            (i, rect)
        });

        if axis == main_axis {
            let sum: f32 = rects
                .map(|(i, r)| r.size().along(axis) + main_margin(&i.margin, horizontal))
                .sum();
            sum + style.main_gap() * items.len().saturating_sub(1) as f32
        } else {
            rects
                .map(|(_, r)| r.origin().along(axis) + r.size().along(axis))
                .reduce(max_nan)
                .unwrap_or(0.0)
        }
    }

    /// Write a node's rect.
    fn set_rect(&mut self, node_id: NodeId, rect: Rect) {
        if let Some(node) = self.tree.nodes.get_mut(node_id) {
            node.rect = rect;
        }
    }

    /// Move a node within its parent without touching its size.
    fn set_position(&mut self, node_id: NodeId, position: Point) {
        if let Some(node) = self.tree.nodes.get_mut(node_id) {
            node.rect.x = position.x;
            node.rect.y = position.y;
        }
    }
}

/// Resolve a style size against its parent, falling back for `Auto` and
/// `Undefined`, then clamp to the resolvable bounds.
pub(crate) fn resolve_size(
    value: Dimension,
    parent: f32,
    min: Dimension,
    max: Dimension,
    fallback: f32,
) -> f32 {
    let value = value.resolve(parent).unwrap_or(fallback);
    clamp(value, min.resolve(parent), max.resolve(parent))
}

/// Apply `min` and then `max`. When `min > max` the result is `max`. NaN
/// values pass through untouched.
pub(crate) fn clamp(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut value = value;
    if let Some(min) = min
        && value < min
    {
        value = min;
    }
    if let Some(max) = max
        && value > max
    {
        value = max;
    }
    value
}

/// Leading offset and extra per-child spacing for `justify-content`.
fn justify_offsets(justify: Justify, free: f32, count: usize) -> (f32, f32) {
    if free.is_nan() || free <= 0.0 || count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f32;
    let multi = count > 1;
    match justify {
        Justify::FlexStart => (0.0, 0.0),
        Justify::FlexEnd => (free, 0.0),
        Justify::Center => (free / 2.0, 0.0),
        Justify::SpaceBetween => (0.0, if multi { free / (n - 1.0) } else { 0.0 }),
        Justify::SpaceAround => (free / (2.0 * n), if multi { free / n } else { 0.0 }),
        Justify::SpaceEvenly => {
            let slot = free / (n + 1.0);
            (slot, if multi { slot } else { 0.0 })
        }
    }
}

/// Cross-axis offset of an item of `item` size within `available`.
fn align_offset(align: AlignItems, available: f32, item: f32) -> f32 {
    match align {
        AlignItems::FlexStart | AlignItems::Stretch | AlignItems::Baseline => 0.0,
        AlignItems::FlexEnd => available - item,
        AlignItems::Center => (available - item) / 2.0,
    }
}

/// Offset of an absolute child along one axis. The leading edge wins when
/// both edges are set.
fn anchor(start: Dimension, end: Dimension, parent: f32, size: f32) -> f32 {
    match (start.resolve(parent), end.resolve(parent)) {
        (Some(start), _) => start,
        (None, Some(end)) => parent - size - end,
        (None, None) => 0.0,
    }
}

/// Margins along the main axis.
fn main_margin(margin: &Insets, is_row: bool) -> f32 {
    if is_row {
        margin.horizontal()
    } else {
        margin.vertical()
    }
}

/// Margins along the cross axis.
fn cross_margin(margin: &Insets, is_row: bool) -> f32 {
    main_margin(margin, !is_row)
}

/// `max` that keeps NaN instead of discarding it.
fn max_nan(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() {
        f32::NAN
    } else {
        a.max(b)
    }
}
