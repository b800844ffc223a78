use fetch_ids::{BehaviorID, ComponentRef, NodeID};
use fetch_scene::{ComponentProvider, SceneProvider};
use fetch_schema::{AssignError, BehaviorCollection, FieldShape, FieldSpec};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::resolve::{BindError, resolve_targets};
use crate::undo::UndoRecorder;

/// The binding pass over one scene set. Collaborators are injected, so
/// the same pass runs from an editor hook, a test harness, or a CLI.
///
/// One pass walks every enumerated root node, and for each annotated
/// field of each attached behavior resolves candidates, queries them
/// for components of the field's element kind, and writes the result
/// into the field slot. Assignment replaces the prior value, so the
/// pass is idempotent on an unchanged scene set.
pub struct Binder<'a, W, D, U>
where
    W: SceneProvider + ComponentProvider,
    D: DiagnosticSink,
    U: UndoRecorder,
{
    world: &'a W,
    behaviors: &'a mut BehaviorCollection,
    diagnostics: &'a mut D,
    undo: &'a mut U,
}

impl<'a, W, D, U> Binder<'a, W, D, U>
where
    W: SceneProvider + ComponentProvider,
    D: DiagnosticSink,
    U: UndoRecorder,
{
    pub fn new(
        world: &'a W,
        behaviors: &'a mut BehaviorCollection,
        diagnostics: &'a mut D,
        undo: &'a mut U,
    ) -> Self {
        Self {
            world,
            behaviors,
            diagnostics,
            undo,
        }
    }

    /// Host hook: a scene was finalized for export.
    pub fn on_scene_finalized(&mut self) -> Result<(), BindError> {
        self.bind_all()
    }

    /// Host hook: the script runtime reloaded.
    pub fn on_scripts_reloaded(&mut self) -> Result<(), BindError> {
        self.bind_all()
    }

    /// Run the full pass over every loaded scene's root nodes.
    pub fn bind_all(&mut self) -> Result<(), BindError> {
        for scene_index in 0..self.world.scene_count() {
            let roots: Vec<NodeID> = self.world.root_nodes_of(scene_index).to_vec();
            for node in roots {
                self.bind_node(node)?;
            }
        }
        Ok(())
    }

    fn bind_node(&mut self, node: NodeID) -> Result<(), BindError> {
        let attached: Vec<BehaviorID> = self.behaviors.attached_to(node).to_vec();
        // One recording covers every write this node produces.
        self.undo.record(node, &attached);
        for behavior in attached {
            self.bind_behavior(node, behavior)?;
        }
        Ok(())
    }

    fn bind_behavior(&mut self, node: NodeID, behavior: BehaviorID) -> Result<(), BindError> {
        let Some(instance) = self.behaviors.instance(behavior) else {
            return Ok(());
        };
        let behavior_name = instance.type_name();
        let field_count = instance.schema().fields.len();

        for field in 0..field_count {
            let spec: FieldSpec = match self.behaviors.instance(behavior) {
                Some(instance) => instance.spec(field),
                None => return Ok(()),
            };
            if spec.shape == FieldShape::Unsupported {
                continue;
            }

            let targets = resolve_targets(self.world, node, spec.scope)?;
            if targets.is_empty() {
                self.diagnostics.report(Diagnostic::NoTargets {
                    node,
                    behavior: behavior_name,
                    field: spec.name,
                });
                continue;
            }

            match spec.shape {
                FieldShape::Scalar => {
                    // Scalar fields only ever consult the first
                    // candidate node.
                    match self.world.first_component_of_kind(targets[0], spec.element) {
                        Some(component) => {
                            self.assign_one(node, behavior, field, component);
                        }
                        None => self.diagnostics.report(Diagnostic::NotFound {
                            node,
                            behavior: behavior_name,
                            field: spec.name,
                            expected: spec.element,
                        }),
                    }
                }
                FieldShape::Array | FieldShape::List => {
                    let mut found: Vec<ComponentRef> = Vec::new();
                    for &target in &targets {
                        found.extend(self.world.components_of_kind(target, spec.element));
                    }
                    if found.is_empty() {
                        // Prior value stays in place, it is not cleared.
                        self.diagnostics.report(Diagnostic::NotFound {
                            node,
                            behavior: behavior_name,
                            field: spec.name,
                            expected: spec.element,
                        });
                    } else {
                        self.assign_many(node, behavior, field, &found);
                    }
                }
                FieldShape::Unsupported => {}
            }
        }

        Ok(())
    }

    fn assign_one(&mut self, node: NodeID, behavior: BehaviorID, field: usize, component: ComponentRef) {
        let Some(instance) = self.behaviors.instance_mut(behavior) else {
            return;
        };
        if let Err(err) = instance.assign_one(field, component) {
            self.report_assign_error(node, err);
        }
    }

    fn assign_many(
        &mut self,
        node: NodeID,
        behavior: BehaviorID,
        field: usize,
        components: &[ComponentRef],
    ) {
        let Some(instance) = self.behaviors.instance_mut(behavior) else {
            return;
        };
        if let Err(err) = instance.assign_many(field, components) {
            self.report_assign_error(node, err);
        }
    }

    fn report_assign_error(&mut self, node: NodeID, err: AssignError) {
        let AssignError::Incompatible {
            behavior,
            field,
            expected,
            actual,
        } = err;
        self.diagnostics.report(Diagnostic::IncompatibleType {
            node,
            behavior,
            field,
            expected,
            actual,
        });
    }
}
