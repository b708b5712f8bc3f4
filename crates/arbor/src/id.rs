use slotmap::new_key_type;

new_key_type! {
    /// Opaque identifier for a node stored in a `LayoutTree`.
    pub struct NodeId;
}
