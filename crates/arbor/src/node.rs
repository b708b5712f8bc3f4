use crate::{NodeId, Style, geom::Rect};

/// Core node data stored in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Layout configuration.
    pub(crate) style: Style,

    /// Parent in the arena tree. Never owns the parent.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree, in layout order.
    pub(crate) children: Vec<NodeId>,

    /// Set when the layout of this subtree may be stale.
    pub(crate) dirty: bool,
    /// Outer rect relative to the parent's box origin.
    pub(crate) rect: Rect,
}

impl Node {
    /// A detached, dirty node.
    pub(crate) fn new(style: Style) -> Self {
        Self {
            style,
            parent: None,
            children: Vec::new(),
            dirty: true,
            rect: Rect::zero(),
        }
    }

    /// Return the node's style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Return true if the node's layout may be stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the rect computed by the most recent layout pass.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
