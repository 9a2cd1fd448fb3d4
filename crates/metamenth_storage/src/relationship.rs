//! Relationship manager.
//!
//! Every paired collection in the model (zone spaces and space zones,
//! adjacency, sub-entities) is mutated only here, so both sides of a pair
//! always change together. Inserts are insert-or-ignore: a duplicate is a
//! silent no-op reported as `Ok(false)` or `Ok(None)`.

use metamenth_foundation::{
    ApplianceId, ComponentId, EntityRef, Error, MeterId, Result, ScheduleId, SensorId,
    SpaceId, TypedId, UniqueKey, ZoneId,
};
use tracing::debug;

use crate::building::Building;
use crate::component::HvacComponent;
use crate::contents::{Container, SubEntity};
use crate::equipment::{Appliance, Meter, Schedule, Sensor};
use crate::zone::Zone;

/// Which zone-to-zone collection an operation targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ZoneLink {
    Adjacent,
    Overlapping,
}

impl Building {
    // =========================================================================
    // Zone registry and zone/space membership
    // =========================================================================

    /// Registers a zone, or returns the zone already registered under its name.
    ///
    /// A second zone with an existing name is dropped; the registry keeps
    /// exactly one zone per name.
    pub fn register_zone(&mut self, mut zone: Zone) -> ZoneId {
        if let Some(existing) = self.zone_by_name(&zone.name) {
            debug!("Zone {:?} already registered as {existing:?}", zone.name);
            return existing;
        }

        zone.uid = self.next_uid();
        zone.spaces.clear();
        zone.adjacent_zones.clear();
        zone.overlapping_zones.clear();
        let uid = zone.uid;
        let name = zone.name.clone();
        let id = self.zones.insert(zone);
        self.zone_order.push_back(id);
        self.zone_index.insert(name, id);
        self.uid_index.insert(uid, id.into());
        debug!("Registered zone {id:?}");
        id
    }

    /// Adds `zone` to `space` and `space` to `zone`.
    ///
    /// Returns `Ok(false)` if they were already linked.
    ///
    /// # Errors
    ///
    /// Fails if either id is not live.
    pub fn add_zone_to_space(&mut self, space: SpaceId, zone: ZoneId) -> Result<bool> {
        self.zones.validate(zone)?;
        let record = self.spaces.try_get_mut(space)?;
        if record.zones.contains(&zone) {
            debug!("{zone:?} already on {space:?}");
            return Ok(false);
        }
        record.zones.push(zone);
        self.zones.try_get_mut(zone)?.spaces.push(space);
        debug!("Linked {zone:?} and {space:?}");
        Ok(true)
    }

    /// Registers `zone` (or finds the registered zone of the same name) and links it to `space`.
    ///
    /// # Errors
    ///
    /// Fails if `space` is not live; nothing is registered in that case.
    pub fn add_new_zone_to_space(&mut self, space: SpaceId, zone: Zone) -> Result<ZoneId> {
        self.spaces.validate(space)?;
        let id = self.register_zone(zone);
        self.add_zone_to_space(space, id)?;
        Ok(id)
    }

    /// Unlinks `zone` and `space`. The zone stays registered.
    ///
    /// # Errors
    ///
    /// - `RelationshipNotFound` if they are not linked
    /// - `EntityNotFound` or `StaleEntity` if either id is not live
    pub fn remove_zone_from_space(&mut self, space: SpaceId, zone: ZoneId) -> Result<()> {
        self.zones.validate(zone)?;
        let record = self.spaces.try_get_mut(space)?;
        if !record.zones.contains(&zone) {
            return Err(Error::relationship_not_found(space, zone)
                .in_operation("Building::remove_zone_from_space"));
        }
        record.zones.retain(|&z| z != zone);
        self.zones.try_get_mut(zone)?.spaces.retain(|&s| s != space);
        debug!("Unlinked {zone:?} and {space:?}");
        Ok(())
    }

    /// Removes a zone from the registry, from every member space and from
    /// every adjacency or overlap list, then destroys it.
    ///
    /// Returns `Ok(false)` if the zone is not live.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the arena is inconsistent.
    pub fn remove_zone(&mut self, zone: ZoneId) -> Result<bool> {
        if !self.zones.exists(zone) {
            return Ok(false);
        }
        let record = self.zones.remove(zone)?;

        for space in &record.spaces {
            if let Some(s) = self.spaces.get_mut(*space) {
                s.zones.retain(|&z| z != zone);
            }
        }
        for (_, other) in self.zones.iter_mut() {
            other.adjacent_zones.retain(|&z| z != zone);
            other.overlapping_zones.retain(|&z| z != zone);
        }
        self.zone_order.retain(|&z| z != zone);
        self.zone_index.remove(&record.name);
        self.uid_index.remove(&record.uid);
        debug!("Removed zone {zone:?} ({})", record.name);
        Ok(true)
    }

    // =========================================================================
    // Adjacency and overlap
    // =========================================================================

    /// Records `other` as adjacent to `space`. One-directional; compared by name.
    ///
    /// Returns `Ok(false)` if `other` is `space` or a space of the same name is already adjacent.
    ///
    /// # Errors
    ///
    /// Fails if either id is not live.
    pub fn add_adjacent_space(&mut self, space: SpaceId, other: SpaceId) -> Result<bool> {
        let name = self.spaces.try_get(other)?.name.clone();
        let current = &self.spaces.try_get(space)?.adjacent_spaces;
        if space == other || current.iter().any(|&id| self.space_name_is(id, &name)) {
            debug!("Ignoring adjacent space {name:?} on {space:?}");
            return Ok(false);
        }
        self.spaces.try_get_mut(space)?.adjacent_spaces.push(other);
        debug!("{other:?} adjacent to {space:?}");
        Ok(true)
    }

    /// Removes `other` from the adjacency list of `space`. Returns `Ok(false)` if absent.
    ///
    /// # Errors
    ///
    /// Fails if `space` is not live.
    pub fn remove_adjacent_space(&mut self, space: SpaceId, other: SpaceId) -> Result<bool> {
        let list = &mut self.spaces.try_get_mut(space)?.adjacent_spaces;
        let before = list.len();
        list.retain(|&id| id != other);
        Ok(list.len() != before)
    }

    /// Records `other` as adjacent to `zone`. One-directional; compared by name.
    ///
    /// # Errors
    ///
    /// Fails if either id is not live.
    pub fn add_adjacent_zone(&mut self, zone: ZoneId, other: ZoneId) -> Result<bool> {
        self.link_zones(zone, other, ZoneLink::Adjacent)
    }

    /// Records `other` as overlapping `zone`. One-directional; compared by name.
    ///
    /// # Errors
    ///
    /// Fails if either id is not live.
    pub fn add_overlapping_zone(&mut self, zone: ZoneId, other: ZoneId) -> Result<bool> {
        self.link_zones(zone, other, ZoneLink::Overlapping)
    }

    /// Removes `other` from the adjacency list of `zone`. Returns `Ok(false)` if absent.
    ///
    /// # Errors
    ///
    /// Fails if `zone` is not live.
    pub fn remove_adjacent_zone(&mut self, zone: ZoneId, other: ZoneId) -> Result<bool> {
        self.unlink_zones(zone, other, ZoneLink::Adjacent)
    }

    /// Removes `other` from the overlap list of `zone`. Returns `Ok(false)` if absent.
    ///
    /// # Errors
    ///
    /// Fails if `zone` is not live.
    pub fn remove_overlapping_zone(&mut self, zone: ZoneId, other: ZoneId) -> Result<bool> {
        self.unlink_zones(zone, other, ZoneLink::Overlapping)
    }

    fn link_zones(&mut self, zone: ZoneId, other: ZoneId, link: ZoneLink) -> Result<bool> {
        let name = self.zones.try_get(other)?.name.clone();
        let record = self.zones.try_get(zone)?;
        let current = match link {
            ZoneLink::Adjacent => &record.adjacent_zones,
            ZoneLink::Overlapping => &record.overlapping_zones,
        };
        let taken = current
            .iter()
            .any(|&id| self.zones.get(id).is_some_and(|z| z.name == name));
        if zone == other || taken {
            debug!("Ignoring {link:?} zone {name:?} on {zone:?}");
            return Ok(false);
        }

        let record = self.zones.try_get_mut(zone)?;
        match link {
            ZoneLink::Adjacent => record.adjacent_zones.push(other),
            ZoneLink::Overlapping => record.overlapping_zones.push(other),
        }
        debug!("{other:?} {link:?} to {zone:?}");
        Ok(true)
    }

    fn unlink_zones(&mut self, zone: ZoneId, other: ZoneId, link: ZoneLink) -> Result<bool> {
        let record = self.zones.try_get_mut(zone)?;
        let list = match link {
            ZoneLink::Adjacent => &mut record.adjacent_zones,
            ZoneLink::Overlapping => &mut record.overlapping_zones,
        };
        let before = list.len();
        list.retain(|&id| id != other);
        Ok(list.len() != before)
    }

    fn space_name_is(&self, id: SpaceId, name: &str) -> bool {
        self.spaces.get(id).is_some_and(|s| s.name == name)
    }

    // =========================================================================
    // Sub-entities
    // =========================================================================

    /// Inserts `record` and attaches it to `container` unless the container
    /// already holds a record with the same `key`.
    ///
    /// Returns `Ok(None)` for an ignored duplicate.
    ///
    /// # Errors
    ///
    /// - `InvalidEntityKind` if the container does not hold this kind
    /// - `EntityNotFound` or `StaleEntity` if the container is not live
    pub fn add_sub_entity<T: SubEntity>(
        &mut self,
        container: Container,
        mut record: T,
        key: UniqueKey,
    ) -> Result<Option<T::Id>> {
        self.check_admission::<T>(container, &record)?;
        if self.holds_key(container, &record, key)? {
            debug!(
                "Ignoring duplicate {:?} {:?} in {container:?}",
                T::SLOT,
                record.key_name()
            );
            return Ok(None);
        }

        let uid = self.next_uid();
        record.prepare_insert(uid);
        let id = T::arena_mut(self).insert(record);
        self.uid_index.insert(uid, id.to_ref());
        T::slot_mut(self.contents_mut(container)?).push(id);
        debug!("Added {:?} {id:?} to {container:?}", T::SLOT);
        Ok(Some(id))
    }

    /// Attaches an existing record to another container, so it is reachable from both.
    ///
    /// Returns `Ok(false)` if the container already holds it or a record with the same `key`.
    ///
    /// # Errors
    ///
    /// - `InvalidEntityKind` if the container does not hold this kind
    /// - `EntityNotFound` or `StaleEntity` if the record or container is not live
    pub fn attach_sub_entity<T: SubEntity>(
        &mut self,
        container: Container,
        id: T::Id,
        key: UniqueKey,
    ) -> Result<bool> {
        let record = T::arena(self).try_get(id)?.clone();
        self.check_admission::<T>(container, &record)?;
        if T::slot(self.contents_of(container)?).contains(&id)
            || self.holds_key(container, &record, key)?
        {
            debug!("Ignoring duplicate attachment of {id:?} to {container:?}");
            return Ok(false);
        }
        T::slot_mut(self.contents_mut(container)?).push(id);
        debug!("Attached {id:?} to {container:?}");
        Ok(true)
    }

    /// Adds a sensor, unique by name within the container.
    ///
    /// # Errors
    ///
    /// As [`Building::add_sub_entity`].
    pub fn add_transducer(
        &mut self,
        container: impl Into<Container>,
        sensor: Sensor,
    ) -> Result<Option<SensorId>> {
        self.add_sub_entity(container.into(), sensor, UniqueKey::Name)
    }

    /// Adds an HVAC component, unique by name within the container.
    ///
    /// # Errors
    ///
    /// As [`Building::add_sub_entity`].
    pub fn add_hvac_component(
        &mut self,
        container: impl Into<Container>,
        component: HvacComponent,
    ) -> Result<Option<ComponentId>> {
        self.add_sub_entity(container.into(), component, UniqueKey::Name)
    }

    /// Adds an appliance, unique by name within the container.
    ///
    /// # Errors
    ///
    /// As [`Building::add_sub_entity`].
    pub fn add_appliance(
        &mut self,
        container: impl Into<Container>,
        appliance: Appliance,
    ) -> Result<Option<ApplianceId>> {
        self.add_sub_entity(container.into(), appliance, UniqueKey::Name)
    }

    /// Adds a meter. Meters are unnamed, so every new meter is inserted.
    ///
    /// # Errors
    ///
    /// As [`Building::add_sub_entity`].
    pub fn add_meter(
        &mut self,
        container: impl Into<Container>,
        meter: Meter,
    ) -> Result<Option<MeterId>> {
        self.add_sub_entity(container.into(), meter, UniqueKey::Name)
    }

    /// Adds a schedule, unique by name within the container.
    ///
    /// # Errors
    ///
    /// As [`Building::add_sub_entity`].
    pub fn add_schedule(
        &mut self,
        container: impl Into<Container>,
        schedule: Schedule,
    ) -> Result<Option<ScheduleId>> {
        self.add_sub_entity(container.into(), schedule, UniqueKey::Name)
    }

    /// Detaches `entity` from `container`, destroying it once no container holds it.
    ///
    /// Returns `Ok(false)` if the container did not hold it.
    ///
    /// # Errors
    ///
    /// Fails if the container is not live.
    pub fn remove_sub_entity(
        &mut self,
        container: Container,
        entity: impl Into<EntityRef>,
    ) -> Result<bool> {
        let entity = entity.into();
        if !self.contents_mut(container)?.detach(entity) {
            return Ok(false);
        }
        debug!("Detached {entity} from {container:?}");
        self.release(entity)?;
        Ok(true)
    }

    fn check_admission<T: SubEntity>(&self, container: Container, record: &T) -> Result<()> {
        let kind = self.container_kind(container)?;
        if kind.accepts(T::SLOT) {
            Ok(())
        } else {
            Err(Error::invalid_entity_kind(record.entity_kind(), kind.admits()))
        }
    }

    fn holds_key<T: SubEntity>(
        &self,
        container: Container,
        record: &T,
        key: UniqueKey,
    ) -> Result<bool> {
        let arena = T::arena(self);
        Ok(T::slot(self.contents_of(container)?)
            .iter()
            .filter_map(|&id| arena.get(id))
            .any(|existing| existing.same_key(record, key)))
    }

    // =========================================================================
    // Cascading destruction
    // =========================================================================

    /// Destroys a space and removes every reference to it.
    pub(crate) fn destroy_space(&mut self, id: SpaceId) -> Result<()> {
        let space = self.spaces.remove(id)?;

        for zone in &space.zones {
            if let Some(z) = self.zones.get_mut(*zone) {
                z.spaces.retain(|&s| s != id);
            }
        }
        for (_, other) in self.spaces.iter_mut() {
            other.adjacent_spaces.retain(|&s| s != id);
        }
        self.forget_in_ducts(id.into());
        self.uid_index.remove(&space.uid);

        for entity in space.contents.refs() {
            self.release(entity)?;
        }
        debug!("Destroyed space {id:?}");
        Ok(())
    }

    /// Destroys `entity` if no container, duct or duct part list still holds it.
    pub(crate) fn release(&mut self, entity: EntityRef) -> Result<()> {
        if self.is_attached(entity) {
            return Ok(());
        }
        match entity {
            EntityRef::Sensor(id) => {
                let sensor = self.sensors.remove(id)?;
                self.uid_index.remove(&sensor.uid);
            }
            EntityRef::Meter(id) => {
                let meter = self.meters.remove(id)?;
                self.uid_index.remove(&meter.uid);
            }
            EntityRef::Schedule(id) => {
                let schedule = self.schedules.remove(id)?;
                self.uid_index.remove(&schedule.uid);
            }
            EntityRef::Appliance(id) => {
                let appliance = self.appliances.remove(id)?;
                self.uid_index.remove(&appliance.uid);
                for child in appliance.contents.refs() {
                    self.release(child)?;
                }
            }
            EntityRef::Component(id) => {
                let component = self.components.remove(id)?;
                self.uid_index.remove(&component.uid);
                self.forget_in_ducts(entity);
                for child in component.contents.refs() {
                    self.release(child)?;
                }
                if let Some(duct) = component.as_duct() {
                    for &part in duct.parts() {
                        self.release(part.into())?;
                    }
                }
            }
            EntityRef::Space(_) | EntityRef::Zone(_) => {
                return Err(Error::internal(format!("{entity} is not a sub-entity")));
            }
        }
        debug!("Destroyed {entity}");
        Ok(())
    }

    fn is_attached(&self, entity: EntityRef) -> bool {
        if self.contents.contains(entity) {
            return true;
        }
        if self.spaces.iter().any(|(_, s)| s.contents.contains(entity)) {
            return true;
        }
        if self.appliances.iter().any(|(_, a)| a.contents.contains(entity)) {
            return true;
        }
        self.components.iter().any(|(_, c)| {
            c.contents.contains(entity)
                || c.as_duct()
                    .is_some_and(|d| entity.as_component().is_some_and(|id| d.parts.contains(&id)))
        })
    }

    fn forget_in_ducts(&mut self, entity: EntityRef) {
        for (_, component) in self.components.iter_mut() {
            let Some(connection) = component
                .as_duct_mut()
                .and_then(|d| d.connection.as_mut())
            else {
                continue;
            };
            if connection.forget(entity) {
                debug!("Dropped {entity} from duct {:?}", component.name);
            }
        }
    }
}
