//! Filters over duct connection endpoints.

use metamenth_foundation::{Criterion, EntityKind};

use crate::node::DuctNode;

/// Selects nodes from a connection role.
pub trait NodeFilter {
    /// Returns true if `node` should be included.
    fn accepts(&self, node: &DuctNode) -> bool;
}

impl<F> NodeFilter for F
where
    F: Fn(&DuctNode) -> bool,
{
    fn accepts(&self, node: &DuctNode) -> bool {
        self(node)
    }
}

/// Filters nodes by entity kind.
#[derive(Clone, Debug, Default)]
pub struct KindFilter {
    /// Accepted kinds.
    pub kind: Criterion<EntityKind>,
}

impl KindFilter {
    /// Accepts nodes of exactly `kind`.
    #[must_use]
    pub fn of(kind: EntityKind) -> Self {
        Self {
            kind: Criterion::Equals(kind),
        }
    }
}

impl NodeFilter for KindFilter {
    fn accepts(&self, node: &DuctNode) -> bool {
        self.kind.matches(&node.kind)
    }
}
