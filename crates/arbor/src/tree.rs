use std::mem;

use slotmap::SlotMap;
use tracing::debug;

use crate::{
    NodeId, Style,
    compute::{LayoutPass, SizeRequest},
    error::{Error, Result},
    geom::{Point, Rect, Size},
    node::Node,
    snapshot::LayoutSnapshot,
};

/// Arena of layout nodes.
///
/// Nodes are created detached and linked into trees with
/// [`add_child`](Self::add_child) and friends. Parent links are arena keys
/// and never own the parent. Every structural or style change marks the
/// affected node and its ancestors dirty; [`compute_layout`](Self::compute_layout)
/// clears the flags again.
#[derive(Debug, Default)]
pub struct LayoutTree {
    /// Node storage.
    pub(crate) nodes: SlotMap<NodeId, Node>,
}

impl LayoutTree {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `id` names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Borrow a node, failing on stale ids.
    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Mutably borrow a node, failing on stale ids.
    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Create a detached, dirty node.
    pub fn new_node(&mut self, style: Style) -> NodeId {
        self.nodes.insert(Node::new(style))
    }

    /// Create a node and append `children` to it in order.
    pub fn new_with_children(&mut self, style: Style, children: &[NodeId]) -> Result<NodeId> {
        for child in children {
            self.get(*child)?;
        }
        let id = self.new_node(style);
        for child in children {
            if let Err(e) = self.add_child(id, *child) {
                self.nodes.remove(id);
                return Err(e);
            }
        }
        Ok(id)
    }

    /// Borrow a node's style.
    pub fn style(&self, id: NodeId) -> Result<&Style> {
        Ok(&self.get(id)?.style)
    }

    /// Replace a node's style and mark it dirty.
    pub fn set_style(&mut self, id: NodeId, style: Style) -> Result<()> {
        self.get_mut(id)?.style = style;
        self.mark_dirty(id)
    }

    /// Edit a node's style in place and mark it dirty.
    pub fn with_style_of<R>(&mut self, id: NodeId, f: impl FnOnce(&mut Style) -> R) -> Result<R> {
        let out = f(&mut self.get_mut(id)?.style);
        self.mark_dirty(id)?;
        Ok(out)
    }

    /// Rect from the most recent layout, relative to the parent's box origin.
    pub fn rect(&self, id: NodeId) -> Result<Rect> {
        Ok(self.get(id)?.rect)
    }

    /// A node's parent, if attached.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.parent)
    }

    /// A node's children in layout order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.get(id)?.children)
    }

    /// True if the node's layout may be stale.
    pub fn is_dirty(&self, id: NodeId) -> Result<bool> {
        Ok(self.get(id)?.dirty)
    }

    /// Append `child` to `parent`'s children, detaching it from any
    /// previous parent first.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_child(parent, usize::MAX, child)
    }

    /// Insert `child` at `index` in `parent`'s children. Indices past the end
    /// append. The index is interpreted after `child` has been detached.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;
        if parent == child || self.is_ancestor(child, parent) {
            return Err(Error::WouldCreateCycle { parent, child });
        }

        self.detach(child)?;
        let node = self.get_mut(parent)?;
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        self.get_mut(child)?.parent = Some(parent);
        debug!(?parent, ?child, index, "attach");

        self.debug_assert_tree_invariants();
        self.mark_dirty(parent)
    }

    /// Remove `child` from `parent`. Returns false, changing nothing, if
    /// `child` is not a child of `parent`. The removed node stays in the
    /// arena as a detached subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.get(child)?;
        if self.get(parent)?.children.contains(&child) {
            self.detach(child)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Detach every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) -> Result<()> {
        let children = mem::take(&mut self.get_mut(parent)?.children);
        for child in &children {
            if let Some(node) = self.nodes.get_mut(*child) {
                node.parent = None;
            }
        }
        debug!(?parent, count = children.len(), "clear children");
        self.debug_assert_tree_invariants();
        self.mark_dirty(parent)
    }

    /// Detach a node from its parent, if it has one. The former parent is
    /// marked dirty.
    pub fn detach(&mut self, child: NodeId) -> Result<()> {
        let Some(parent) = self.get(child)?.parent else {
            return Ok(());
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|id| *id != child);
        }
        self.get_mut(child)?.parent = None;
        debug!(?parent, ?child, "detach");
        self.mark_dirty(parent)
    }

    /// Remove a node and all of its descendants from the arena.
    pub fn remove_subtree(&mut self, root: NodeId) -> Result<()> {
        self.detach(root)?;
        let pre_order = self.subtree_pre_order(root);
        for id in &pre_order {
            self.nodes.remove(*id);
        }
        debug!(?root, count = pre_order.len(), "remove subtree");
        self.debug_assert_tree_invariants();
        Ok(())
    }

    /// Mark a node dirty, then walk upward marking ancestors until one is
    /// already dirty.
    pub fn mark_dirty(&mut self, id: NodeId) -> Result<()> {
        let node = self.get_mut(id)?;
        node.dirty = true;
        let mut current = node.parent;
        while let Some(ancestor) = current {
            let Some(node) = self.nodes.get_mut(ancestor) else {
                break;
            };
            if node.dirty {
                break;
            }
            node.dirty = true;
            current = node.parent;
        }
        Ok(())
    }

    /// Lay out the subtree rooted at `root` within `available`, placing the
    /// root at the origin. Every node in the subtree is clean afterwards.
    pub fn compute_layout(&mut self, root: NodeId, available: Size) -> Result<()> {
        self.get(root)?;
        let mut pass = LayoutPass::new(self);
        let size = pass.layout_node(
            root,
            SizeRequest::Available(available),
            available,
            Point::zero(),
        );
        let visited = pass.visited();
        debug!(?root, ?available, ?size, visited, "layout");

        for id in self.subtree_pre_order(root) {
            if let Some(node) = self.nodes.get_mut(id) {
                node.dirty = false;
            }
        }
        Ok(())
    }

    /// A node's rect in the coordinate space of its topmost ancestor.
    pub fn screen_rect(&self, id: NodeId) -> Result<Rect> {
        let node = self.get(id)?;
        let mut offset = Point::zero();
        let mut current = node.parent;
        while let Some(ancestor) = current {
            let Some(n) = self.nodes.get(ancestor) else {
                break;
            };
            offset = offset + n.rect.origin();
            current = n.parent;
        }
        Ok(node.rect.translate(offset))
    }

    /// The deepest displayed node under `root` whose rect contains `point`.
    ///
    /// `point` is in the same space as `root`'s rect. Descendants are only
    /// searched inside their ancestors' rects, and later siblings win.
    pub fn locate(&self, root: NodeId, point: impl Into<Point>) -> Result<Option<NodeId>> {
        self.get(root)?;
        let mut result = None;
        self.locate_recursive(root, point.into(), Point::zero(), &mut result);
        Ok(result)
    }

    /// Depth-first hit test below `id`, where `offset` is the parent's origin.
    fn locate_recursive(
        &self,
        id: NodeId,
        point: Point,
        offset: Point,
        result: &mut Option<NodeId>,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if !node.style.is_displayed() {
            return;
        }
        let rect = node.rect.translate(offset);
        if !rect.contains_point(point) {
            return;
        }
        *result = Some(id);
        for child in &node.children {
            self.locate_recursive(*child, point, rect.origin(), result);
        }
    }

    /// Capture the rects of a subtree.
    pub fn snapshot(&self, root: NodeId) -> Result<LayoutSnapshot> {
        let node = self.get(root)?;
        let children = node
            .children
            .iter()
            .map(|c| self.snapshot(*c))
            .collect::<Result<Vec<_>>>()?;
        Ok(LayoutSnapshot {
            rect: node.rect,
            children,
        })
    }

    /// True if `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Collect a subtree in pre-order, including the root.
    pub(crate) fn subtree_pre_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Assert parent/child link symmetry in debug builds.
    #[cfg(debug_assertions)]
    fn debug_assert_tree_invariants(&self) {
        for (id, node) in self.nodes.iter() {
            if let Some(parent) = node.parent {
                debug_assert!(
                    self.nodes
                        .get(parent)
                        .is_some_and(|p| p.children.contains(&id)),
                    "parent does not list child"
                );
            }
            for child in &node.children {
                debug_assert!(
                    self.nodes
                        .get(*child)
                        .is_some_and(|c| c.parent == Some(id)),
                    "child does not point at parent"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_assert_tree_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tree: &mut LayoutTree) -> NodeId {
        tree.new_node(Style::default())
    }

    #[test]
    fn new_node_is_detached_and_dirty() {
        let mut tree = LayoutTree::new();
        let n = leaf(&mut tree);
        let node = tree.node(n).unwrap();
        assert!(node.is_dirty());
        assert_eq!(node.parent(), None);
        assert!(node.children().is_empty());
        assert_eq!(node.rect(), Rect::zero());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn add_child_links_both_ways() -> Result<()> {
        let mut tree = LayoutTree::new();
        let p = leaf(&mut tree);
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        tree.add_child(p, a)?;
        tree.add_child(p, b)?;
        assert_eq!(tree.children(p)?, &[a, b]);
        assert_eq!(tree.parent(a)?, Some(p));
        Ok(())
    }

    #[test]
    fn insert_child_clamps_index() -> Result<()> {
        let mut tree = LayoutTree::new();
        let p = leaf(&mut tree);
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let c = leaf(&mut tree);
        tree.insert_child(p, 10, a)?;
        tree.insert_child(p, 0, b)?;
        tree.insert_child(p, 1, c)?;
        assert_eq!(tree.children(p)?, &[b, c, a]);
        Ok(())
    }

    #[test]
    fn reattach_moves_between_parents() -> Result<()> {
        let mut tree = LayoutTree::new();
        let p1 = leaf(&mut tree);
        let p2 = leaf(&mut tree);
        let c = leaf(&mut tree);
        tree.add_child(p1, c)?;
        tree.compute_layout(p1, Size::new(10.0, 10.0))?;
        tree.compute_layout(p2, Size::new(10.0, 10.0))?;

        tree.add_child(p2, c)?;
        assert!(tree.children(p1)?.is_empty());
        assert_eq!(tree.children(p2)?, &[c]);
        assert_eq!(tree.parent(c)?, Some(p2));
        assert!(tree.is_dirty(p1)?);
        assert!(tree.is_dirty(p2)?);
        Ok(())
    }

    #[test]
    fn reinsert_within_same_parent() -> Result<()> {
        let mut tree = LayoutTree::new();
        let p = leaf(&mut tree);
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let c = leaf(&mut tree);
        for child in [a, b, c] {
            tree.add_child(p, child)?;
        }
        tree.insert_child(p, 0, c)?;
        assert_eq!(tree.children(p)?, &[c, a, b]);
        tree.add_child(p, c)?;
        assert_eq!(tree.children(p)?, &[a, b, c]);
        Ok(())
    }

    #[test]
    fn cycles_rejected() -> Result<()> {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let c = leaf(&mut tree);
        tree.add_child(a, b)?;
        tree.add_child(b, c)?;
        assert_eq!(
            tree.add_child(c, a),
            Err(Error::WouldCreateCycle {
                parent: c,
                child: a
            })
        );
        assert!(matches!(
            tree.add_child(a, a),
            Err(Error::WouldCreateCycle { .. })
        ));
        assert_eq!(tree.children(c)?, &[] as &[NodeId]);
        assert_eq!(tree.parent(a)?, None);
        Ok(())
    }

    #[test]
    fn remove_child_reports_membership() -> Result<()> {
        let mut tree = LayoutTree::new();
        let p = leaf(&mut tree);
        let a = leaf(&mut tree);
        let stranger = leaf(&mut tree);
        tree.add_child(p, a)?;
        assert!(!tree.remove_child(p, stranger)?);
        assert!(tree.remove_child(p, a)?);
        assert!(!tree.remove_child(p, a)?);
        assert_eq!(tree.parent(a)?, None);
        assert!(tree.contains(a));
        Ok(())
    }

    #[test]
    fn clear_children_detaches_all() -> Result<()> {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        let p = tree.new_with_children(Style::default(), &[a, b])?;
        tree.clear_children(p)?;
        assert!(tree.children(p)?.is_empty());
        assert_eq!(tree.parent(a)?, None);
        assert_eq!(tree.parent(b)?, None);
        Ok(())
    }

    #[test]
    fn remove_subtree_frees_descendants() -> Result<()> {
        let mut tree = LayoutTree::new();
        let leaf_a = leaf(&mut tree);
        let mid = tree.new_with_children(Style::default(), &[leaf_a])?;
        let root = tree.new_with_children(Style::default(), &[mid])?;
        tree.remove_subtree(mid)?;
        assert!(!tree.contains(mid));
        assert!(!tree.contains(leaf_a));
        assert!(tree.children(root)?.is_empty());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.rect(mid), Err(Error::NodeNotFound(mid)));
        Ok(())
    }

    #[test]
    fn stale_ids_error() {
        let mut tree = LayoutTree::new();
        let a = leaf(&mut tree);
        let b = leaf(&mut tree);
        tree.remove_subtree(b).unwrap();
        assert_eq!(tree.add_child(a, b), Err(Error::NodeNotFound(b)));
        assert_eq!(tree.mark_dirty(b), Err(Error::NodeNotFound(b)));
        assert_eq!(
            tree.compute_layout(b, Size::new(1.0, 1.0)),
            Err(Error::NodeNotFound(b))
        );
        assert!(tree.new_with_children(Style::default(), &[a, b]).is_err());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn mark_dirty_stops_at_dirty_ancestor() -> Result<()> {
        let mut tree = LayoutTree::new();
        let c = leaf(&mut tree);
        let b = tree.new_with_children(Style::default(), &[c])?;
        let a = tree.new_with_children(Style::default(), &[b])?;
        tree.compute_layout(a, Size::new(10.0, 10.0))?;
        assert!(!tree.is_dirty(a)?);

        // A dirty middle node shields its clean parent.
        tree.nodes[b].dirty = true;
        tree.mark_dirty(c)?;
        assert!(tree.is_dirty(c)?);
        assert!(!tree.is_dirty(a)?);
        Ok(())
    }

    #[test]
    fn style_edits_mark_dirty() -> Result<()> {
        let mut tree = LayoutTree::new();
        let c = leaf(&mut tree);
        let p = tree.new_with_children(Style::default(), &[c])?;
        tree.compute_layout(p, Size::new(10.0, 10.0))?;
        let grow = tree.with_style_of(c, |s| {
            s.flex_grow = 3.0;
            s.flex_grow
        })?;
        assert_eq!(grow, 3.0);
        assert!(tree.is_dirty(c)? && tree.is_dirty(p)?);

        tree.compute_layout(p, Size::new(10.0, 10.0))?;
        tree.set_style(p, Style::column())?;
        assert!(tree.is_dirty(p)?);
        assert!(!tree.is_dirty(c)?);
        Ok(())
    }

    #[test]
    fn screen_rect_accumulates_offsets() -> Result<()> {
        let mut tree = LayoutTree::new();
        let inner = tree.new_node(Style::default().size(2.0, 2.0));
        let mid = tree.new_with_children(
            Style::default()
                .size(10.0, 10.0)
                .padding(crate::Edges::all(1.0)),
            &[inner],
        )?;
        let root = tree.new_with_children(
            Style::default()
                .size(50.0, 50.0)
                .padding(crate::Edges::new(3.0, 0.0, 0.0, 4.0)),
            &[mid],
        )?;
        tree.compute_layout(root, Size::new(50.0, 50.0))?;
        assert_eq!(tree.rect(inner)?, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(tree.screen_rect(inner)?, Rect::new(5.0, 4.0, 2.0, 2.0));
        Ok(())
    }

    #[test]
    fn locate_finds_deepest() -> Result<()> {
        let mut tree = LayoutTree::new();
        let a = tree.new_node(Style::default().width(10.0));
        let b = tree.new_node(Style::default().width(10.0));
        let hidden = tree.new_node(Style::default().width(10.0).hidden());
        let root = tree.new_with_children(Style::row().size(30.0, 5.0), &[a, b, hidden])?;
        tree.compute_layout(root, Size::new(30.0, 5.0))?;
        assert_eq!(tree.locate(root, (3.0, 1.0))?, Some(a));
        assert_eq!(tree.locate(root, (12.0, 1.0))?, Some(b));
        assert_eq!(tree.locate(root, (25.0, 1.0))?, Some(root));
        assert_eq!(tree.locate(root, (31.0, 1.0))?, None);
        Ok(())
    }
}
