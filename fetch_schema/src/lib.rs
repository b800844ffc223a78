pub mod behavior;
pub mod field;
pub mod schema;
pub mod scope;

pub use behavior::*;
pub use field::*;
pub use schema::*;
pub use scope::*;

#[cfg(test)]
mod tests {
    use super::*;
    use fetch_ids::{ComponentID, ComponentKind, ComponentRef, NodeID};

    const COLLIDER: ComponentKind = ComponentKind::named("Collider");
    const RIGID_BODY: ComponentKind = ComponentKind::named("RigidBody");

    fn turret_schema() -> BehaviorSchema {
        BehaviorSchema::new(
            "Turret",
            vec![
                FieldSpec::scalar("body", RIGID_BODY, ScopeMask::default()),
                FieldSpec::list(
                    "contacts",
                    COLLIDER,
                    ScopeMask::new(ScopeMask::CHILDREN),
                ),
            ],
        )
    }

    #[test]
    fn scope_mask_defaults_to_self_only() {
        let mask = ScopeMask::default();
        assert!(mask.includes_self());
        assert!(!mask.includes_parent());
        assert!(!mask.includes_children());
        assert!(!mask.includes_siblings());
        assert!(!mask.includes_scene());
    }

    #[test]
    fn scope_mask_combines_flags() {
        let mask = ScopeMask::new(ScopeMask::SELF | ScopeMask::SCENE);
        assert!(mask.includes_self());
        assert!(mask.includes_scene());
        assert!(!mask.includes_children());
        assert_eq!(mask.bits(), 0b1_0001);
    }

    #[test]
    fn registry_instantiates_with_unset_slots() {
        let mut registry = SchemaRegistry::new();
        registry.register(turret_schema());

        let node = NodeID::from_parts(1, 0);
        let instance = registry.instantiate("Turret", node).unwrap();
        assert_eq!(instance.type_name(), "Turret");
        assert_eq!(instance.node(), node);
        assert_eq!(instance.value(0), &FieldValue::Unset);
        assert_eq!(instance.value(1), &FieldValue::Unset);

        assert!(registry.instantiate("Unknown", node).is_none());
    }

    #[test]
    fn reregistering_a_type_replaces_its_schema() {
        let mut registry = SchemaRegistry::new();
        registry.register(turret_schema());
        registry.register(BehaviorSchema::new(
            "Turret",
            vec![FieldSpec::scalar("body", COLLIDER, ScopeMask::default())],
        ));

        assert_eq!(registry.len(), 1);
        let schema = registry.get("Turret").unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].element, COLLIDER);
    }

    #[test]
    fn assign_one_checks_kind() {
        let mut registry = SchemaRegistry::new();
        registry.register(turret_schema());
        let mut instance = registry
            .instantiate("Turret", NodeID::from_parts(1, 0))
            .unwrap();

        let body = ComponentRef::new(ComponentID::from_parts(1, 0), RIGID_BODY);
        instance.assign_one(0, body).unwrap();
        assert_eq!(instance.value(0), &FieldValue::One(body.id));

        let wrong = ComponentRef::new(ComponentID::from_parts(2, 0), COLLIDER);
        let err = instance.assign_one(0, wrong).unwrap_err();
        assert_eq!(
            err,
            AssignError::Incompatible {
                behavior: "Turret",
                field: "body",
                expected: RIGID_BODY,
                actual: COLLIDER,
            }
        );
        // Failed writes leave the slot alone.
        assert_eq!(instance.value(0), &FieldValue::One(body.id));
    }

    #[test]
    fn assign_many_is_all_or_nothing() {
        let mut registry = SchemaRegistry::new();
        registry.register(turret_schema());
        let mut instance = registry
            .instantiate("Turret", NodeID::from_parts(1, 0))
            .unwrap();

        let a = ComponentRef::new(ComponentID::from_parts(1, 0), COLLIDER);
        let b = ComponentRef::new(ComponentID::from_parts(2, 0), COLLIDER);
        instance.assign_many(1, &[a, b]).unwrap();
        assert_eq!(instance.value(1), &FieldValue::Many(vec![a.id, b.id]));

        let bad = ComponentRef::new(ComponentID::from_parts(3, 0), RIGID_BODY);
        assert!(instance.assign_many(1, &[a, bad]).is_err());
        assert_eq!(instance.value(1), &FieldValue::Many(vec![a.id, b.id]));
    }

    #[test]
    fn collection_indexes_by_node_in_attach_order() {
        let mut registry = SchemaRegistry::new();
        registry.register(turret_schema());

        let node = NodeID::from_parts(4, 0);
        let other = NodeID::from_parts(5, 0);
        let mut behaviors = BehaviorCollection::new();
        let first = behaviors.attach(registry.instantiate("Turret", node).unwrap());
        let second = behaviors.attach(registry.instantiate("Turret", node).unwrap());

        assert_eq!(behaviors.attached_to(node), &[first, second]);
        assert_eq!(behaviors.attached_to(other), &[] as &[fetch_ids::BehaviorID]);

        behaviors.detach(first).unwrap();
        assert_eq!(behaviors.attached_to(node), &[second]);
        assert_eq!(behaviors.len(), 1);
    }
}
