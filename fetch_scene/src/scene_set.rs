use std::borrow::Cow;

use fetch_ids::{ComponentID, ComponentKind, ComponentRef, NodeID};
use thiserror::Error;

use crate::arena::SlotArena;
use crate::node::{ComponentRecord, Node};
use crate::provider::{ComponentProvider, SceneProvider};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene index {0} is not loaded")]
    UnknownScene(usize),
    #[error("node {0:?} is not present in the scene set")]
    UnknownNode(NodeID),
}

/// One loaded scene: a name and its root nodes in declared order.
#[derive(Debug, Default)]
pub struct LoadedScene {
    pub name: Cow<'static, str>,
    pub roots: Vec<NodeID>,
}

/// The set of currently loaded scenes, in load order, backed by one
/// shared node arena. This is the reference implementation of the
/// provider traits; an embedding host with its own scene graph
/// implements `SceneProvider`/`ComponentProvider` directly instead.
#[derive(Default)]
pub struct SceneSet {
    nodes: SlotArena<NodeID, Node>,
    components: SlotArena<ComponentID, ComponentRecord>,
    scenes: Vec<LoadedScene>,
}

impl SceneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new loaded scene; returns its load-order index.
    pub fn load_scene(&mut self, name: impl Into<Cow<'static, str>>) -> usize {
        self.scenes.push(LoadedScene {
            name: name.into(),
            roots: Vec::new(),
        });
        self.scenes.len() - 1
    }

    /// Create a root node in the given scene.
    pub fn spawn_root(
        &mut self,
        scene_index: usize,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<NodeID, SceneError> {
        if scene_index >= self.scenes.len() {
            return Err(SceneError::UnknownScene(scene_index));
        }
        let id = self.insert_node(Node::new(name));
        self.scenes[scene_index].roots.push(id);
        Ok(id)
    }

    /// Create a child node under `parent`.
    pub fn spawn_child(
        &mut self,
        parent: NodeID,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<NodeID, SceneError> {
        if !self.nodes.contains(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let mut node = Node::new(name);
        node.parent = Some(parent);
        let id = self.insert_node(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        Ok(id)
    }

    fn insert_node(&mut self, node: Node) -> NodeID {
        let id = self.nodes.insert(node);
        if let Some(n) = self.nodes.get_mut(id) {
            n.id = id;
        }
        id
    }

    /// Attach a component of `kind` to `node`. Attach order is the
    /// order queries report.
    pub fn attach_component(
        &mut self,
        node: NodeID,
        kind: ComponentKind,
    ) -> Result<ComponentID, SceneError> {
        if !self.nodes.contains(node) {
            return Err(SceneError::UnknownNode(node));
        }
        let id = self.components.insert(ComponentRecord { node, kind });
        if let Some(n) = self.nodes.get_mut(node) {
            n.components.push(id);
        }
        Ok(id)
    }

    pub fn node(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn component(&self, id: ComponentID) -> Option<&ComponentRecord> {
        self.components.get(id)
    }

    pub fn scenes(&self) -> &[LoadedScene] {
        &self.scenes
    }

    /// All root nodes of all loaded scenes, concatenated in load order.
    pub fn enumerate_roots(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.scenes.iter().flat_map(|s| s.roots.iter().copied())
    }
}

impl SceneProvider for SceneSet {
    fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    fn root_nodes_of(&self, scene_index: usize) -> &[NodeID] {
        self.scenes
            .get(scene_index)
            .map(|s| s.roots.as_slice())
            .unwrap_or(&[])
    }

    fn parent_of(&self, node: NodeID) -> Option<NodeID> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    fn children_of(&self, node: NodeID) -> &[NodeID] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }
}

impl ComponentProvider for SceneSet {
    fn components_of_kind(&self, node: NodeID, kind: ComponentKind) -> Vec<ComponentRef> {
        let Some(n) = self.nodes.get(node) else {
            return Vec::new();
        };
        n.components
            .iter()
            .filter_map(|&cid| {
                let record = self.components.get(cid)?;
                (record.kind == kind).then_some(ComponentRef::new(cid, record.kind))
            })
            .collect()
    }
}
