use std::borrow::Cow;

use fetch_ids::{ComponentID, ComponentKind, NodeID};

/// A position in the scene forest. Owned by the `SceneSet`; structure
/// (parent/children) and the attached component list are what the
/// binding pass reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub id: NodeID,
    pub name: Cow<'static, str>,
    pub parent: Option<NodeID>,
    /// Direct children, in attach order.
    pub children: Vec<NodeID>,
    /// Attached components, in attach order.
    pub components: Vec<ComponentID>,
}

impl Node {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: NodeID::nil(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
        }
    }
}

/// Storage record for one attached component. The component's payload
/// lives with the host; the binding pass only needs its identity, its
/// kind, and the node it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRecord {
    pub node: NodeID,
    pub kind: ComponentKind,
}
