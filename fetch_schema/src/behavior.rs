use std::sync::Arc;

use ahash::AHashMap;
use fetch_ids::{BehaviorID, ComponentRef, NodeID};
use fetch_scene::SlotArena;

use crate::field::{AssignError, FieldSpec, FieldValue, check_kind};
use crate::schema::BehaviorSchema;

/// One behavior attached to one node: its schema plus the runtime
/// value of every annotated field, slot-for-slot.
#[derive(Debug)]
pub struct BehaviorInstance {
    node: NodeID,
    schema: Arc<BehaviorSchema>,
    values: Vec<FieldValue>,
}

impl BehaviorInstance {
    pub fn new(schema: Arc<BehaviorSchema>, node: NodeID) -> Self {
        let values = vec![FieldValue::Unset; schema.fields.len()];
        Self {
            node,
            schema,
            values,
        }
    }

    pub fn node(&self) -> NodeID {
        self.node
    }

    pub fn schema(&self) -> &Arc<BehaviorSchema> {
        &self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.type_name
    }

    pub fn spec(&self, field: usize) -> FieldSpec {
        self.schema.fields[field]
    }

    pub fn value(&self, field: usize) -> &FieldValue {
        &self.values[field]
    }

    pub fn value_by_name(&self, name: &str) -> Option<&FieldValue> {
        self.schema.field_index(name).map(|i| &self.values[i])
    }

    /// Write a single reference into a scalar slot, checking the
    /// component's concrete kind against the declared element kind.
    pub fn assign_one(&mut self, field: usize, component: ComponentRef) -> Result<(), AssignError> {
        let spec = self.schema.fields[field];
        check_kind(self.schema.type_name, spec.name, spec.element, component)?;
        self.values[field] = FieldValue::One(component.id);
        Ok(())
    }

    /// Replace a sequence slot with the accumulated components. Every
    /// kind is checked before anything is written, so a mismatch leaves
    /// the prior value intact.
    pub fn assign_many(
        &mut self,
        field: usize,
        components: &[ComponentRef],
    ) -> Result<(), AssignError> {
        let spec = self.schema.fields[field];
        for &component in components {
            check_kind(self.schema.type_name, spec.name, spec.element, component)?;
        }
        self.values[field] = FieldValue::Many(components.iter().map(|c| c.id).collect());
        Ok(())
    }
}

/// All behavior instances of a scene set, with a per-node index so the
/// binding pass can walk a node's attached behaviors in attach order.
#[derive(Default)]
pub struct BehaviorCollection {
    instances: SlotArena<BehaviorID, BehaviorInstance>,
    by_node: AHashMap<NodeID, Vec<BehaviorID>>,
}

impl BehaviorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, instance: BehaviorInstance) -> BehaviorID {
        let node = instance.node();
        let id = self.instances.insert(instance);
        self.by_node.entry(node).or_default().push(id);
        id
    }

    pub fn detach(&mut self, id: BehaviorID) -> Option<BehaviorInstance> {
        let instance = self.instances.remove(id)?;
        if let Some(ids) = self.by_node.get_mut(&instance.node()) {
            ids.retain(|&i| i != id);
            if ids.is_empty() {
                self.by_node.remove(&instance.node());
            }
        }
        Some(instance)
    }

    /// Behaviors attached to `node`, in attach order.
    pub fn attached_to(&self, node: NodeID) -> &[BehaviorID] {
        self.by_node.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn instance(&self, id: BehaviorID) -> Option<&BehaviorInstance> {
        self.instances.get(id)
    }

    pub fn instance_mut(&mut self, id: BehaviorID) -> Option<&mut BehaviorInstance> {
        self.instances.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
