//! Duct connection endpoints.

use std::fmt;

use metamenth_foundation::{EntityKind, EntityRef, Error, Result};

/// An entity placed in a duct connection, tagged with its kind.
///
/// The kind travels with the reference so admission rules can be checked
/// without access to the records themselves.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DuctNode {
    /// The referenced entity.
    pub entity: EntityRef,
    /// The entity's kind at the time it was classified.
    pub kind: EntityKind,
}

impl DuctNode {
    /// Description of admissible kinds, used in error messages.
    pub const ADMISSIBLE: &'static str = "an HVAC component, a floor space or a duct";

    /// Creates a node without checking admission.
    #[must_use]
    pub const fn new(entity: EntityRef, kind: EntityKind) -> Self {
        Self { entity, kind }
    }

    /// Creates a node, rejecting kinds that can never join a duct connection.
    pub fn admissible(entity: EntityRef, kind: EntityKind) -> Result<Self> {
        let node = Self::new(entity, kind);
        if node.is_admissible() {
            Ok(node)
        } else {
            Err(Error::invalid_entity_kind(kind, Self::ADMISSIBLE))
        }
    }

    /// True for HVAC components (ducts included) and structural spaces.
    #[must_use]
    pub fn is_admissible(&self) -> bool {
        matches!(
            (self.entity, self.kind),
            (EntityRef::Component(_), EntityKind::Component(_))
                | (EntityRef::Space(_), EntityKind::Space(_))
        )
    }

    /// True if this node is itself a duct.
    #[must_use]
    pub fn is_duct(&self) -> bool {
        self.kind.is_duct()
    }
}

impl fmt::Display for DuctNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.entity)
    }
}
