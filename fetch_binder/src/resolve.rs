use fetch_ids::NodeID;
use fetch_scene::SceneProvider;
use fetch_schema::ScopeMask;
use smallvec::SmallVec;
use thiserror::Error;

pub type TargetList = SmallVec<[NodeID; 8]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// Parent or Siblings scope was requested on a node with no parent.
    /// This is an authoring error in the scope annotation, not a
    /// runtime condition, so the pass aborts rather than degrading.
    #[error("node {node} has no parent but its scope annotation requires one")]
    MissingParent { node: NodeID },
}

/// Produce the candidate nodes for one (node, scope) pair.
///
/// Flags are evaluated independently and concatenated in a fixed
/// order: Self, Parent, Children, Siblings, Scene. No deduplication is
/// performed; a node reachable through two flags appears twice.
/// Siblings excludes the originating node itself.
///
/// Scene yields the *root* nodes of every loaded scene in load order,
/// not a recursive flatten of the forest. Nested nodes never appear as
/// Scene-scope candidates.
pub fn resolve_targets<S>(scene: &S, node: NodeID, scope: ScopeMask) -> Result<TargetList, BindError>
where
    S: SceneProvider + ?Sized,
{
    let mut targets = TargetList::new();

    if scope.includes_self() {
        targets.push(node);
    }

    if scope.includes_parent() {
        let parent = scene
            .parent_of(node)
            .ok_or(BindError::MissingParent { node })?;
        targets.push(parent);
    }

    if scope.includes_children() {
        targets.extend_from_slice(scene.children_of(node));
    }

    if scope.includes_siblings() {
        let parent = scene
            .parent_of(node)
            .ok_or(BindError::MissingParent { node })?;
        targets.extend(
            scene
                .children_of(parent)
                .iter()
                .copied()
                .filter(|&sibling| sibling != node),
        );
    }

    if scope.includes_scene() {
        for scene_index in 0..scene.scene_count() {
            targets.extend_from_slice(scene.root_nodes_of(scene_index));
        }
    }

    Ok(targets)
}
