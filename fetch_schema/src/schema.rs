use std::sync::Arc;

use ahash::AHashMap;
use fetch_ids::NodeID;

use crate::behavior::BehaviorInstance;
use crate::field::FieldSpec;

/// The annotated fields of one behavior type, declared once when the
/// type is registered. Replaces per-pass runtime reflection with a
/// closed table the binder looks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorSchema {
    pub type_name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl BehaviorSchema {
    pub fn new(type_name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { type_name, fields }
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// Behavior type name → schema. Re-registering a name replaces the old
/// entry, which is what a host's script reload does.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: AHashMap<&'static str, Arc<BehaviorSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: BehaviorSchema) -> Arc<BehaviorSchema> {
        let schema = Arc::new(schema);
        self.schemas.insert(schema.type_name, Arc::clone(&schema));
        schema
    }

    pub fn get(&self, type_name: &str) -> Option<Arc<BehaviorSchema>> {
        self.schemas.get(type_name).cloned()
    }

    /// Build an instance of a registered behavior type, attached to
    /// `node`, with every field slot unset.
    pub fn instantiate(&self, type_name: &str, node: NodeID) -> Option<BehaviorInstance> {
        self.get(type_name)
            .map(|schema| BehaviorInstance::new(schema, node))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
