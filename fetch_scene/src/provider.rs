use fetch_ids::{ComponentKind, ComponentRef, NodeID};

/// Read access to the loaded scene forest. Scene indices run in
/// load order, `0..scene_count()`.
pub trait SceneProvider {
    fn scene_count(&self) -> usize;

    /// Root nodes of one loaded scene, in declared order. Out-of-range
    /// indices yield an empty slice.
    fn root_nodes_of(&self, scene_index: usize) -> &[NodeID];

    /// None for roots (and for stale ids).
    fn parent_of(&self, node: NodeID) -> Option<NodeID>;

    /// Direct children in declared order; not recursive.
    fn children_of(&self, node: NodeID) -> &[NodeID];
}

/// Per-node component queries. Implementations are free to match more
/// loosely than kind equality (e.g. a host with component inheritance);
/// the returned refs carry each component's concrete kind so callers
/// can re-check before writing it anywhere.
pub trait ComponentProvider {
    /// All components of `kind` attached to `node`, in attach order.
    fn components_of_kind(&self, node: NodeID, kind: ComponentKind) -> Vec<ComponentRef>;

    /// First component of `kind` attached to `node`, if any.
    fn first_component_of_kind(&self, node: NodeID, kind: ComponentKind) -> Option<ComponentRef> {
        self.components_of_kind(node, kind).into_iter().next()
    }
}
