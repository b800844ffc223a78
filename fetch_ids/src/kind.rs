use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ids::{ComponentID, string_to_u64};

/// Identity of a component type ("Collider", "RigidBody", ...).
/// Carries the name for diagnostics; equality and hashing go through
/// the precomputed name hash so kind comparison stays a u64 compare.
#[derive(Clone, Copy)]
pub struct ComponentKind {
    name: &'static str,
    hash: u64,
}

impl ComponentKind {
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            hash: string_to_u64(name),
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn hash_u64(self) -> u64 {
        self.hash
    }
}

impl PartialEq for ComponentKind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for ComponentKind {}

impl Hash for ComponentKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKind({})", self.name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A resolved component: its arena id plus the concrete kind it was
/// stored under. Providers may resolve queries loosely (e.g. base-kind
/// matching), so the concrete kind travels with the id and is checked
/// again at assignment time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentRef {
    pub id: ComponentID,
    pub kind: ComponentKind,
}

impl ComponentRef {
    pub const fn new(id: ComponentID, kind: ComponentKind) -> Self {
        Self { id, kind }
    }
}
