use fetch_ids::{ComponentID, ComponentKind, ComponentRef};
use thiserror::Error;

use crate::scope::ScopeMask;

/// Structural classification of a field's declared type, decided once
/// when the schema is registered. `Unsupported` covers container
/// shapes the binder does not guess at (anything generic that is not a
/// single-parameter growable list); such fields are skipped without
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Single reference slot. Only the first candidate node is queried.
    Scalar,
    /// Fixed-size sequence; accumulates matches across all candidates.
    Array,
    /// Growable sequence; accumulates matches across all candidates.
    List,
    /// Skipped by the binding pass.
    Unsupported,
}

/// One annotated field: identity, element kind, shape, search scope.
/// Immutable once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Component kind the slot accepts. Not consulted for
    /// `Unsupported` shapes.
    pub element: ComponentKind,
    pub shape: FieldShape,
    pub scope: ScopeMask,
}

impl FieldSpec {
    pub const fn scalar(name: &'static str, element: ComponentKind, scope: ScopeMask) -> Self {
        Self {
            name,
            element,
            shape: FieldShape::Scalar,
            scope,
        }
    }

    pub const fn array(name: &'static str, element: ComponentKind, scope: ScopeMask) -> Self {
        Self {
            name,
            element,
            shape: FieldShape::Array,
            scope,
        }
    }

    pub const fn list(name: &'static str, element: ComponentKind, scope: ScopeMask) -> Self {
        Self {
            name,
            element,
            shape: FieldShape::List,
            scope,
        }
    }

    pub const fn unsupported(name: &'static str) -> Self {
        Self {
            name,
            element: ComponentKind::named("<unsupported>"),
            shape: FieldShape::Unsupported,
            scope: ScopeMask::new(ScopeMask::NONE),
        }
    }
}

/// Runtime value of a field slot. Assignment replaces the whole value,
/// so re-running a pass re-derives rather than appends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    #[default]
    Unset,
    One(ComponentID),
    Many(Vec<ComponentID>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error(
        "field `{field}` on `{behavior}` declares {expected} but was handed a {actual} component"
    )]
    Incompatible {
        behavior: &'static str,
        field: &'static str,
        expected: ComponentKind,
        actual: ComponentKind,
    },
}

pub(crate) fn check_kind(
    behavior: &'static str,
    field: &'static str,
    expected: ComponentKind,
    component: ComponentRef,
) -> Result<(), AssignError> {
    if component.kind == expected {
        Ok(())
    } else {
        Err(AssignError::Incompatible {
            behavior,
            field,
            expected,
            actual: component.kind,
        })
    }
}
