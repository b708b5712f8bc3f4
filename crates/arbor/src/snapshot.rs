use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Computed rects of a subtree, detached from the arena.
///
/// Children appear in tree order, hidden ones included. The serialized
/// form is `{"rect": {...}, "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Rect relative to the parent's box origin.
    pub rect: Rect,
    /// Child snapshots.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl LayoutSnapshot {
    /// Number of nodes in the snapshot.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}
