//! Arbor: a Flexbox-style box layout engine for terminal UIs.
//!
//! Nodes live in a [`LayoutTree`] arena and carry a [`Style`]. A call to
//! [`LayoutTree::compute_layout`] walks a subtree once and writes each
//! node's outer [`Rect`](geom::Rect), relative to its parent's box origin.
//!
//! # Quick Start
//!
//! ```
//! use arbor::{Edges, LayoutTree, Style, geom::Size};
//!
//! # fn main() -> arbor::error::Result<()> {
//! let mut tree = LayoutTree::new();
//! let sidebar = tree.new_node(Style::default().width(20.0));
//! let body = tree.new_node(Style::default().grow(1.0));
//! let root = tree.new_with_children(
//!     Style::row().padding(Edges::all(1.0)),
//!     &[sidebar, body],
//! )?;
//! tree.compute_layout(root, Size::new(80.0, 24.0))?;
//! assert_eq!(tree.rect(body)?.x, 21.0);
//! assert_eq!(tree.rect(body)?.width, 58.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Point, Size, Rect)
//! - [`style`] - Style properties and their enums
//! - [`error`] - Error and result types

#![warn(missing_docs)]

/// Layout pass.
mod compute;
/// Dimension values.
mod dimension;
/// Debug dumps of node trees.
mod dump;
/// Edge values and resolved insets.
mod edges;
/// Error types.
pub mod error;
/// Node identifiers.
mod id;
/// Node storage.
mod node;
/// Computed layout snapshots.
mod snapshot;
/// Style properties.
pub mod style;
/// Node arena and tree operations.
mod tree;

pub use arbor_geom as geom;
pub use dimension::Dimension;
pub use dump::{dump, dump_plain};
pub use edges::{Edges, Insets};
pub use id::NodeId;
pub use node::Node;
pub use snapshot::LayoutSnapshot;
pub use style::Style;
pub use tree::LayoutTree;
