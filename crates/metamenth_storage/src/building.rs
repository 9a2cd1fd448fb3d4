//! The building aggregate.
//!
//! A `Building` owns one arena per record kind, the ordered floor list and the
//! zone registry. It uses persistent data structures, so
//! [`Building::snapshot`] is O(1) and snapshots share structure with the live
//! model until either side is written.

use im::{HashMap, Vector};
use metamenth_foundation::{
    ApplianceId, BuildingType, ComponentId, EntityKind, EntityRef, Error, Measure, MeterId, Result,
    ScheduleId, SensorId, SpaceId, SpaceKind, Uid, UidGenerator, ZoneId,
};
use tracing::debug;

use crate::arena::Arena;
use crate::component::HvacComponent;
use crate::config::ModelConfig;
use crate::contents::{Container, ContainerKind, SubEntities};
use crate::equipment::{Appliance, Meter, Schedule, Sensor};
use crate::space::{FloorDetails, FloorPlan, OpenSpace, Room, Space, SpaceDetails};
use crate::zone::Zone;

/// Descriptive building attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingInfo {
    /// Year of construction.
    pub construction_year: u16,
    /// Building type.
    pub building_type: BuildingType,
    /// Postal address.
    pub address: String,
    /// Building height.
    pub height: Option<Measure>,
    /// Gross floor area.
    pub floor_area: Option<Measure>,
    /// Internal thermal mass.
    pub internal_mass: Option<Measure>,
}

impl BuildingInfo {
    /// Creates building attributes with no measures.
    #[must_use]
    pub fn new(construction_year: u16, building_type: BuildingType, address: impl Into<String>) -> Self {
        Self {
            construction_year,
            building_type,
            address: address.into(),
            height: None,
            floor_area: None,
            internal_mass: None,
        }
    }

    /// Sets the height.
    #[must_use]
    pub fn with_height(mut self, height: Measure) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the floor area.
    #[must_use]
    pub fn with_floor_area(mut self, floor_area: Measure) -> Self {
        self.floor_area = Some(floor_area);
        self
    }
}

/// A building model: structure, zones, equipment and duct network.
#[derive(Clone, Debug)]
pub struct Building {
    pub(crate) uid: Uid,
    pub(crate) info: BuildingInfo,
    pub(crate) config: ModelConfig,
    pub(crate) uids: UidGenerator,
    pub(crate) spaces: Arena<SpaceId, Space>,
    pub(crate) zones: Arena<ZoneId, Zone>,
    pub(crate) components: Arena<ComponentId, HvacComponent>,
    pub(crate) sensors: Arena<SensorId, Sensor>,
    pub(crate) meters: Arena<MeterId, Meter>,
    pub(crate) appliances: Arena<ApplianceId, Appliance>,
    pub(crate) schedules: Arena<ScheduleId, Schedule>,
    /// Floors in insertion order.
    pub(crate) floors: Vector<SpaceId>,
    /// Zone registry in insertion order.
    pub(crate) zone_order: Vector<ZoneId>,
    /// Zone registry by name.
    pub(crate) zone_index: HashMap<String, ZoneId>,
    pub(crate) uid_index: HashMap<Uid, EntityRef>,
    pub(crate) contents: SubEntities,
}

impl Building {
    /// Creates an empty building.
    #[must_use]
    pub fn new(info: BuildingInfo, config: ModelConfig) -> Self {
        let mut uids = UidGenerator::new(config.seed);
        let uid = uids.next_uid();
        Self {
            uid,
            info,
            config,
            uids,
            spaces: Arena::new(),
            zones: Arena::new(),
            components: Arena::new(),
            sensors: Arena::new(),
            meters: Arena::new(),
            appliances: Arena::new(),
            schedules: Arena::new(),
            floors: Vector::new(),
            zone_order: Vector::new(),
            zone_index: HashMap::new(),
            uid_index: HashMap::new(),
            contents: SubEntities::default(),
        }
    }

    /// Returns an O(1) copy of the current model.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// The building's own uid.
    #[must_use]
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// Descriptive attributes.
    #[must_use]
    pub fn info(&self) -> &BuildingInfo {
        &self.info
    }

    /// Mutable descriptive attributes.
    pub fn info_mut(&mut self) -> &mut BuildingInfo {
        &mut self.info
    }

    /// The configuration this model was built with.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Meters and schedules attached to the building itself.
    #[must_use]
    pub fn contents(&self) -> &SubEntities {
        &self.contents
    }

    pub(crate) fn next_uid(&mut self) -> Uid {
        self.uids.next_uid()
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Adds a floor with its rooms and open spaces.
    ///
    /// Returns `Ok(None)` without changes if a floor with the same number exists.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the plan holds no room and no open space.
    pub fn add_floor(&mut self, plan: FloorPlan) -> Result<Option<SpaceId>> {
        if !plan.has_spaces() {
            return Err(Error::validation(format!(
                "floor {} must hold at least one room or open space",
                plan.number
            ))
            .in_operation("Building::add_floor"));
        }

        if self.floor_by_number(plan.number).is_some() {
            debug!("Ignoring duplicate floor number {}", plan.number);
            return Ok(None);
        }

        let number = plan.number;
        let (floor, rooms, open_spaces) = plan.into_parts();
        let floor_id = self.insert_space(floor);
        self.floors.push_back(floor_id);
        debug!("Added floor {number} as {floor_id:?}");

        for room in rooms {
            self.add_room(floor_id, room)?;
        }
        for open_space in open_spaces {
            self.add_open_space(floor_id, open_space)?;
        }

        Ok(Some(floor_id))
    }

    /// Adds a room to a floor. Returns `Ok(None)` if the floor already has a room of that name.
    ///
    /// # Errors
    ///
    /// Fails if `floor` is not a live floor.
    pub fn add_room(&mut self, floor: SpaceId, room: Room) -> Result<Option<SpaceId>> {
        self.expect_space_kind(floor, SpaceKind::Floor)?;
        if self.room_by_name(floor, &room.name).is_some() {
            debug!("Ignoring duplicate room {:?} on {floor:?}", room.name);
            return Ok(None);
        }

        let id = self.insert_space(room.into_space(floor));
        if let Some(details) = self.floor_details_mut(floor) {
            details.rooms.push(id);
        }
        debug!("Added room {id:?} to {floor:?}");
        Ok(Some(id))
    }

    /// Adds an open space to a floor. Returns `Ok(None)` if the floor already has one of that name.
    ///
    /// # Errors
    ///
    /// Fails if `floor` is not a live floor.
    pub fn add_open_space(&mut self, floor: SpaceId, open_space: OpenSpace) -> Result<Option<SpaceId>> {
        self.expect_space_kind(floor, SpaceKind::Floor)?;
        if self.open_space_by_name(floor, &open_space.name).is_some() {
            debug!("Ignoring duplicate open space {:?} on {floor:?}", open_space.name);
            return Ok(None);
        }

        let id = self.insert_space(open_space.into_space(floor));
        if let Some(details) = self.floor_details_mut(floor) {
            details.open_spaces.push(id);
        }
        debug!("Added open space {id:?} to {floor:?}");
        Ok(Some(id))
    }

    /// Removes a floor together with its rooms and open spaces.
    ///
    /// Returns `Ok(false)` if `floor` is not live.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidEntityKind` if `floor` is a room or open space.
    pub fn remove_floor(&mut self, floor: SpaceId) -> Result<bool> {
        let Some(space) = self.spaces.get(floor) else {
            return Ok(false);
        };
        let Some(details) = space.as_floor() else {
            return Err(Error::invalid_entity_kind(EntityKind::Space(space.kind()), "a floor"));
        };

        let children: Vec<SpaceId> = details
            .rooms
            .iter()
            .chain(details.open_spaces.iter())
            .copied()
            .collect();
        for child in children {
            self.destroy_space(child)?;
        }
        self.destroy_space(floor)?;
        self.floors.retain(|&id| id != floor);
        debug!("Removed floor {floor:?}");
        Ok(true)
    }

    /// Removes a room from its floor. Returns `Ok(false)` if `room` is not live.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidEntityKind` if `room` is not a room.
    pub fn remove_room(&mut self, room: SpaceId) -> Result<bool> {
        self.remove_floor_space(room, SpaceKind::Room)
    }

    /// Removes an open space from its floor. Returns `Ok(false)` if it is not live.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidEntityKind` if `open_space` is not an open space.
    pub fn remove_open_space(&mut self, open_space: SpaceId) -> Result<bool> {
        self.remove_floor_space(open_space, SpaceKind::OpenSpace)
    }

    fn remove_floor_space(&mut self, id: SpaceId, kind: SpaceKind) -> Result<bool> {
        let Some(space) = self.spaces.get(id) else {
            return Ok(false);
        };
        if space.kind() != kind {
            let expected = if kind == SpaceKind::Room {
                "a room"
            } else {
                "an open space"
            };
            return Err(Error::invalid_entity_kind(EntityKind::Space(space.kind()), expected));
        }

        if let Some(floor) = space.parent_floor() {
            if let Some(details) = self.floor_details_mut(floor) {
                details.rooms.retain(|&r| r != id);
                details.open_spaces.retain(|&o| o != id);
            }
        }
        self.destroy_space(id)?;
        debug!("Removed {kind:?} {id:?}");
        Ok(true)
    }

    fn insert_space(&mut self, mut space: Space) -> SpaceId {
        let uid = self.next_uid();
        space.uid = uid;
        let id = self.spaces.insert(space);
        self.uid_index.insert(uid, id.into());
        id
    }

    fn floor_details_mut(&mut self, floor: SpaceId) -> Option<&mut FloorDetails> {
        match &mut self.spaces.get_mut(floor)?.details {
            SpaceDetails::Floor(details) => Some(details),
            _ => None,
        }
    }

    pub(crate) fn expect_space_kind(&self, id: SpaceId, kind: SpaceKind) -> Result<&Space> {
        let space = self.spaces.try_get(id)?;
        if space.kind() == kind {
            Ok(space)
        } else {
            Err(Error::invalid_entity_kind(
                EntityKind::Space(space.kind()),
                match kind {
                    SpaceKind::Floor => "a floor",
                    SpaceKind::Room => "a room",
                    SpaceKind::OpenSpace => "an open space",
                },
            ))
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Floors in insertion order.
    pub fn floors(&self) -> impl Iterator<Item = SpaceId> + '_ {
        self.floors.iter().copied()
    }

    /// Number of floors.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Finds a floor by number.
    #[must_use]
    pub fn floor_by_number(&self, number: i32) -> Option<SpaceId> {
        self.floors().find(|&id| {
            self.spaces
                .get(id)
                .and_then(Space::as_floor)
                .is_some_and(|floor| floor.number == number)
        })
    }

    /// Returns a floor, room or open space.
    #[must_use]
    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(id)
    }

    /// Returns a floor, room or open space.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `id` is not live.
    pub fn try_space(&self, id: SpaceId) -> Result<&Space> {
        self.spaces.try_get(id)
    }

    /// Rooms of a floor in insertion order; empty for anything but a live floor.
    #[must_use]
    pub fn rooms_of(&self, floor: SpaceId) -> &[SpaceId] {
        self.spaces
            .get(floor)
            .and_then(Space::as_floor)
            .map(FloorDetails::rooms)
            .unwrap_or_default()
    }

    /// Open spaces of a floor in insertion order; empty for anything but a live floor.
    #[must_use]
    pub fn open_spaces_of(&self, floor: SpaceId) -> &[SpaceId] {
        self.spaces
            .get(floor)
            .and_then(Space::as_floor)
            .map(FloorDetails::open_spaces)
            .unwrap_or_default()
    }

    /// Finds a room on a floor by name.
    #[must_use]
    pub fn room_by_name(&self, floor: SpaceId, name: &str) -> Option<SpaceId> {
        self.find_named(self.rooms_of(floor), name)
    }

    /// Finds an open space on a floor by name.
    #[must_use]
    pub fn open_space_by_name(&self, floor: SpaceId, name: &str) -> Option<SpaceId> {
        self.find_named(self.open_spaces_of(floor), name)
    }

    fn find_named(&self, ids: &[SpaceId], name: &str) -> Option<SpaceId> {
        ids.iter()
            .copied()
            .find(|&id| self.spaces.get(id).is_some_and(|s| s.name == name))
    }

    /// Finds any entity by uid.
    #[must_use]
    pub fn entity_by_uid(&self, uid: Uid) -> Option<EntityRef> {
        self.uid_index.get(&uid).copied()
    }

    /// Finds a space by uid.
    #[must_use]
    pub fn space_by_uid(&self, uid: Uid) -> Option<SpaceId> {
        self.entity_by_uid(uid)?.as_space()
    }

    /// Finds an HVAC component by uid.
    #[must_use]
    pub fn component_by_uid(&self, uid: Uid) -> Option<ComponentId> {
        self.entity_by_uid(uid)?.as_component()
    }

    /// Returns a zone.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id)
    }

    /// Finds a registered zone by name.
    #[must_use]
    pub fn zone_by_name(&self, name: &str) -> Option<ZoneId> {
        self.zone_index.get(name).copied()
    }

    /// Registered zones in registration order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zone_order.iter().copied()
    }

    /// Number of registered zones.
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zone_order.len()
    }

    /// Member spaces of a zone; empty if the zone is not live.
    #[must_use]
    pub fn spaces_of_zone(&self, zone: ZoneId) -> &[SpaceId] {
        self.zones.get(zone).map(Zone::spaces).unwrap_or_default()
    }

    /// Zones of a space; empty if the space is not live.
    #[must_use]
    pub fn zones_of_space(&self, space: SpaceId) -> &[ZoneId] {
        self.spaces.get(space).map(Space::zones).unwrap_or_default()
    }

    /// Returns an HVAC component.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&HvacComponent> {
        self.components.get(id)
    }

    /// Returns a sensor.
    #[must_use]
    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.sensors.get(id)
    }

    /// Returns a meter.
    #[must_use]
    pub fn meter(&self, id: MeterId) -> Option<&Meter> {
        self.meters.get(id)
    }

    /// Returns an appliance.
    #[must_use]
    pub fn appliance(&self, id: ApplianceId) -> Option<&Appliance> {
        self.appliances.get(id)
    }

    /// Returns a schedule.
    #[must_use]
    pub fn schedule(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.get(id)
    }

    /// Sub-entities of a container.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if the container is not live.
    pub fn contents_of(&self, container: Container) -> Result<&SubEntities> {
        Ok(match container {
            Container::Building => &self.contents,
            Container::Space(id) => &self.spaces.try_get(id)?.contents,
            Container::Component(id) => &self.components.try_get(id)?.contents,
            Container::Appliance(id) => &self.appliances.try_get(id)?.contents,
        })
    }

    pub(crate) fn contents_mut(&mut self, container: Container) -> Result<&mut SubEntities> {
        Ok(match container {
            Container::Building => &mut self.contents,
            Container::Space(id) => &mut self.spaces.try_get_mut(id)?.contents,
            Container::Component(id) => &mut self.components.try_get_mut(id)?.contents,
            Container::Appliance(id) => &mut self.appliances.try_get_mut(id)?.contents,
        })
    }

    /// Classifies a container for admission checks.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if the container is not live.
    pub fn container_kind(&self, container: Container) -> Result<ContainerKind> {
        Ok(match container {
            Container::Building => ContainerKind::Building,
            Container::Space(id) => ContainerKind::of_space(self.spaces.try_get(id)?.kind()),
            Container::Component(id) => {
                self.components.try_get(id)?;
                ContainerKind::Component
            }
            Container::Appliance(id) => {
                self.appliances.try_get(id)?;
                ContainerKind::Appliance
            }
        })
    }

    /// The kind of a live entity.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` or `StaleEntity` if `entity` is not live.
    pub fn kind_of(&self, entity: EntityRef) -> Result<EntityKind> {
        Ok(match entity {
            EntityRef::Space(id) => EntityKind::Space(self.spaces.try_get(id)?.kind()),
            EntityRef::Zone(id) => {
                self.zones.validate(id)?;
                EntityKind::Zone
            }
            EntityRef::Component(id) => EntityKind::Component(self.components.try_get(id)?.kind()),
            EntityRef::Sensor(id) => {
                self.sensors.validate(id)?;
                EntityKind::Sensor
            }
            EntityRef::Meter(id) => {
                self.meters.validate(id)?;
                EntityKind::Meter
            }
            EntityRef::Appliance(id) => {
                self.appliances.validate(id)?;
                EntityKind::Appliance
            }
            EntityRef::Schedule(id) => {
                self.schedules.validate(id)?;
                EntityKind::Schedule
            }
        })
    }

    /// Live HVAC components in slot order.
    pub fn components(&self) -> impl Iterator<Item = (ComponentId, &HvacComponent)> + '_ {
        self.components.iter()
    }

    /// Live sensors in slot order.
    pub fn sensors(&self) -> impl Iterator<Item = (SensorId, &Sensor)> + '_ {
        self.sensors.iter()
    }

    /// Live meters in slot order.
    pub fn meters(&self) -> impl Iterator<Item = (MeterId, &Meter)> + '_ {
        self.meters.iter()
    }

    /// Live appliances in slot order.
    pub fn appliances(&self) -> impl Iterator<Item = (ApplianceId, &Appliance)> + '_ {
        self.appliances.iter()
    }

    /// Live schedules in slot order.
    pub fn schedules(&self) -> impl Iterator<Item = (ScheduleId, &Schedule)> + '_ {
        self.schedules.iter()
    }
}
