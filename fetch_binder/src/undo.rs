use fetch_ids::{BehaviorID, NodeID};

/// Seam for the host's reversible-mutation machinery. The pass calls
/// this exactly once per processed node, before any of that node's
/// field writes, covering all behaviors attached to the node — the
/// host can then undo the node's writes as one unit.
pub trait UndoRecorder {
    fn record(&mut self, node: NodeID, behaviors: &[BehaviorID]);
}

/// For hosts without an undo stack.
#[derive(Default)]
pub struct NullRecorder;

impl UndoRecorder for NullRecorder {
    fn record(&mut self, _node: NodeID, _behaviors: &[BehaviorID]) {}
}
