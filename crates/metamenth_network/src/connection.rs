//! Role-tagged duct connections.
//!
//! Admission is check-then-act: every rule is evaluated before the target
//! collection is touched, so a rejected add leaves the connection unchanged.

use metamenth_foundation::{ConnectionRole, EntityRef, Error, Result};
use tracing::debug;

use crate::filter::NodeFilter;
use crate::node::DuctNode;

/// What to do when an entity is offered for the role opposite to one it holds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum RoleConflictPolicy {
    /// Leave the connection unchanged and report `Ok(false)`.
    #[default]
    Ignore,
    /// Fail with a `RoleConflict` error.
    Error,
}

/// The source, destination and inside entities of one duct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuctConnection {
    source: Vec<DuctNode>,
    destination: Vec<DuctNode>,
    inside: Vec<DuctNode>,
    is_loop: bool,
}

impl DuctConnection {
    /// Creates an empty, non-loop connection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` under `role`, silently rejecting role conflicts.
    ///
    /// Returns `Ok(true)` if the node was appended and `Ok(false)` if a role
    /// conflict left the connection unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidEntityKind` if the node is not an HVAC component, space or duct
    /// - `DisallowedInsideEntity` if a fan, damper or heat exchanger is offered as inside
    pub fn add_entity(&mut self, role: ConnectionRole, node: DuctNode) -> Result<bool> {
        self.add_entity_with(role, node, RoleConflictPolicy::Ignore)
    }

    /// Adds `node` under `role` using the given conflict policy.
    ///
    /// # Errors
    ///
    /// As [`DuctConnection::add_entity`], plus `RoleConflict` when `policy` is
    /// [`RoleConflictPolicy::Error`] and the node already holds the opposite role.
    pub fn add_entity_with(
        &mut self,
        role: ConnectionRole,
        node: DuctNode,
        policy: RoleConflictPolicy,
    ) -> Result<bool> {
        if !node.is_admissible() {
            return Err(Error::invalid_entity_kind(node.kind, DuctNode::ADMISSIBLE));
        }

        if role == ConnectionRole::Inside {
            if let Some(kind) = node.kind.component().filter(|k| k.is_flow_blocking()) {
                return Err(Error::disallowed_inside(kind));
            }
        }

        if let Some(opposite) = role.opposite() {
            if self.contains(opposite, node.entity) {
                return match policy {
                    RoleConflictPolicy::Ignore => {
                        debug!(
                            "Ignoring {} as {role}: already a {opposite}",
                            node.entity
                        );
                        Ok(false)
                    }
                    RoleConflictPolicy::Error => {
                        Err(Error::role_conflict(node.entity, role, opposite))
                    }
                };
            }
        }

        self.role_mut(role).push(node);
        debug!("Added {node} as {role}");
        Ok(true)
    }

    /// Removes every occurrence of `entity` from `role`. Returns true if any was removed.
    pub fn remove_entity(&mut self, role: ConnectionRole, entity: EntityRef) -> bool {
        let nodes = self.role_mut(role);
        let before = nodes.len();
        nodes.retain(|n| n.entity != entity);
        let removed = nodes.len() != before;
        if removed {
            debug!("Removed {entity} from {role}");
        }
        removed
    }

    /// Removes `entity` from all roles. Returns true if anything was removed.
    pub fn forget(&mut self, entity: EntityRef) -> bool {
        let mut removed = false;
        for role in [
            ConnectionRole::Source,
            ConnectionRole::Destination,
            ConnectionRole::Inside,
        ] {
            removed |= self.remove_entity(role, entity);
        }
        removed
    }

    /// The nodes held under `role`, in insertion order.
    #[must_use]
    pub fn entities(&self, role: ConnectionRole) -> &[DuctNode] {
        match role {
            ConnectionRole::Source => &self.source,
            ConnectionRole::Destination => &self.destination,
            ConnectionRole::Inside => &self.inside,
        }
    }

    /// The nodes held under `role` that pass `filter`, or all of them without one.
    #[must_use]
    pub fn filtered(&self, role: ConnectionRole, filter: Option<&dyn NodeFilter>) -> Vec<DuctNode> {
        self.entities(role)
            .iter()
            .filter(|n| filter.is_none_or(|f| f.accepts(n)))
            .copied()
            .collect()
    }

    /// Source entities, optionally filtered.
    #[must_use]
    pub fn source_entities(&self, filter: Option<&dyn NodeFilter>) -> Vec<DuctNode> {
        self.filtered(ConnectionRole::Source, filter)
    }

    /// Destination entities, optionally filtered.
    #[must_use]
    pub fn destination_entities(&self, filter: Option<&dyn NodeFilter>) -> Vec<DuctNode> {
        self.filtered(ConnectionRole::Destination, filter)
    }

    /// Inside entities, optionally filtered.
    #[must_use]
    pub fn inside_entities(&self, filter: Option<&dyn NodeFilter>) -> Vec<DuctNode> {
        self.filtered(ConnectionRole::Inside, filter)
    }

    /// True if `entity` is held under `role`.
    #[must_use]
    pub fn contains(&self, role: ConnectionRole, entity: EntityRef) -> bool {
        self.entities(role).iter().any(|n| n.entity == entity)
    }

    /// True if this connection models a closed loop.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// Marks or unmarks this connection as a closed loop. Structural rules are unaffected.
    pub fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
    }

    /// True if no role holds any entity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.destination.is_empty() && self.inside.is_empty()
    }

    fn role_mut(&mut self, role: ConnectionRole) -> &mut Vec<DuctNode> {
        match role {
            ConnectionRole::Source => &mut self.source,
            ConnectionRole::Destination => &mut self.destination,
            ConnectionRole::Inside => &mut self.inside,
        }
    }
}
