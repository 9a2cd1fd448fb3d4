//! Duct connections and duct parts on the building.
//!
//! The building classifies entities into [`DuctNode`]s and hands them to the
//! duct's [`DuctConnection`], which owns the admission rules.

use metamenth_foundation::{
    ComponentId, ComponentKind, ConnectionRole, EntityKind, EntityRef, Error, Keyed, Result,
    TypedId, UniqueKey,
};
use metamenth_network::{DuctConnection, DuctNode};
use tracing::debug;

use crate::building::Building;
use crate::component::{Duct, HvacComponent};

impl Building {
    /// Classifies a live entity as a duct connection node.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `entity` is not live.
    pub fn duct_node(&self, entity: impl Into<EntityRef>) -> Result<DuctNode> {
        let entity = entity.into();
        Ok(DuctNode::new(entity, self.kind_of(entity)?))
    }

    /// Adds `entity` to the connection of `duct` under `role`, creating the
    /// connection on first use.
    ///
    /// Returns `Ok(false)` when a role conflict is silently rejected under the
    /// default [`ModelConfig`](crate::ModelConfig).
    ///
    /// # Errors
    ///
    /// - `InvalidEntityKind` if `duct` is not a duct or `entity` cannot join a connection
    /// - `DisallowedInsideEntity` for a fan, damper or heat exchanger offered as inside
    /// - `RoleConflict` under a strict configuration
    pub fn connect_duct(
        &mut self,
        duct: ComponentId,
        role: ConnectionRole,
        entity: impl Into<EntityRef>,
    ) -> Result<bool> {
        let node = self.duct_node(entity)?;
        let policy = self.config.role_conflicts;
        let details = self.duct_mut(duct)?;

        match details.connection.as_mut() {
            Some(connection) => connection.add_entity_with(role, node, policy),
            None => {
                let mut connection = DuctConnection::new();
                let added = connection.add_entity_with(role, node, policy)?;
                details.connection = Some(connection);
                debug!("Created connection on duct {duct:?}");
                Ok(added)
            }
        }
    }

    /// Removes `entity` from `role` of the connection of `duct`. Returns `Ok(false)` if absent.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn disconnect_duct(
        &mut self,
        duct: ComponentId,
        role: ConnectionRole,
        entity: impl Into<EntityRef>,
    ) -> Result<bool> {
        let entity = entity.into();
        Ok(self
            .duct_mut(duct)?
            .connection
            .as_mut()
            .is_some_and(|c| c.remove_entity(role, entity)))
    }

    /// The connection of `duct`, if one has been made.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_connection(&self, duct: ComponentId) -> Result<Option<&DuctConnection>> {
        Ok(self.duct(duct)?.connection())
    }

    /// Marks the connection of `duct` as a closed loop, creating it if needed.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn set_duct_loop(&mut self, duct: ComponentId, is_loop: bool) -> Result<()> {
        self.duct_mut(duct)?
            .connection
            .get_or_insert_with(DuctConnection::new)
            .set_loop(is_loop);
        debug!("Duct {duct:?} loop = {is_loop}");
        Ok(())
    }

    /// Attaches a fan, damper, heat exchanger, filter or air volume box to a duct.
    ///
    /// Parts are unique by name, except heat exchangers, which are unique by uid.
    /// Returns `Ok(None)` for an ignored duplicate.
    ///
    /// # Errors
    ///
    /// - `InvalidEntityKind` if `duct` is not a duct or `part` is not a duct part kind
    pub fn add_duct_part(
        &mut self,
        duct: ComponentId,
        mut part: HvacComponent,
    ) -> Result<Option<ComponentId>> {
        let kind = part.kind();
        if !kind.is_duct_part() {
            return Err(Error::invalid_entity_kind(
                EntityKind::Component(kind),
                "a fan, damper, heat exchanger, filter or air volume box",
            ));
        }
        let key = if kind == ComponentKind::HeatExchanger {
            UniqueKey::Uid
        } else {
            UniqueKey::Name
        };

        let taken = self
            .duct(duct)?
            .parts()
            .iter()
            .filter_map(|&id| self.components.get(id))
            .any(|existing| existing.same_key(&part, key));
        if taken {
            debug!("Ignoring duplicate duct part {:?} on {duct:?}", part.name);
            return Ok(None);
        }

        let uid = self.next_uid();
        part.uid = uid;
        part.clear_links();
        let id = self.components.insert(part);
        self.uid_index.insert(uid, id.to_ref());
        self.duct_mut(duct)?.parts.push(id);
        debug!("Added {kind:?} {id:?} to duct {duct:?}");
        Ok(Some(id))
    }

    /// Detaches a part from a duct and destroys it. Returns `Ok(false)` if absent.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn remove_duct_part(&mut self, duct: ComponentId, part: ComponentId) -> Result<bool> {
        let parts = &mut self.duct_mut(duct)?.parts;
        let before = parts.len();
        parts.retain(|&p| p != part);
        if parts.len() == before {
            return Ok(false);
        }
        self.release(part.into())?;
        debug!("Removed part {part:?} from duct {duct:?}");
        Ok(true)
    }

    /// Parts of a duct in insertion order.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_parts(&self, duct: ComponentId) -> Result<&[ComponentId]> {
        Ok(self.duct(duct)?.parts())
    }

    /// Parts of a duct of one kind, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_parts_of(&self, duct: ComponentId, kind: ComponentKind) -> Result<Vec<ComponentId>> {
        Ok(self
            .duct_parts(duct)?
            .iter()
            .copied()
            .filter(|&id| self.components.get(id).is_some_and(|c| c.kind() == kind))
            .collect())
    }

    /// Live ducts in slot order.
    pub fn ducts(&self) -> impl Iterator<Item = (ComponentId, &Duct)> + '_ {
        self.components
            .iter()
            .filter_map(|(id, c)| c.as_duct().map(|d| (id, d)))
    }

    fn duct(&self, id: ComponentId) -> Result<&Duct> {
        let component = self.components.try_get(id)?;
        component
            .as_duct()
            .ok_or_else(|| Error::invalid_entity_kind(EntityKind::Component(component.kind()), "a duct"))
    }

    fn duct_mut(&mut self, id: ComponentId) -> Result<&mut Duct> {
        let component = self.components.try_get_mut(id)?;
        let kind = component.kind();
        component
            .as_duct_mut()
            .ok_or_else(|| Error::invalid_entity_kind(EntityKind::Component(kind), "a duct"))
    }
}
