//! Helpers for driving arbor from serialized trees.
//!
//! A tree description is nested JSON: every node has an optional `style`
//! (any subset of [`Style`] fields) and an optional list of `children`.

use arbor::{LayoutTree, NodeId, Style, error::Result};
use serde::{Deserialize, Serialize};

/// Serialized description of a node and its subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSpec {
    /// Style of this node.
    pub style: Style,
    /// Child descriptions, in layout order.
    pub children: Vec<Self>,
}

impl TreeSpec {
    /// Parse a description from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Create the described nodes in `tree` and return the root id.
    pub fn build(&self, tree: &mut LayoutTree) -> Result<NodeId> {
        let children = self
            .children
            .iter()
            .map(|c| c.build(tree))
            .collect::<Result<Vec<_>>>()?;
        tree.new_with_children(self.style, &children)
    }
}
