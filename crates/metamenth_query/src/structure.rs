//! Direct attribute search over one level of the building, without a traversal.

use metamenth_foundation::{
    ComponentId, ConnectionRole, Criterion, EntityRef, MeterId, MeterType, Result, ScheduleId,
    SpaceId, ZoneId,
};
use metamenth_network::{DuctNode, NodeFilter};
use metamenth_storage::{Building, Container};
use tracing::trace;

use crate::filters::{ComponentFilter, FloorFilter, MeterFilter, OpenSpaceFilter, RoomFilter, ZoneFilter};

/// Attribute search over the records of one building.
#[derive(Copy, Clone, Debug)]
pub struct StructureSearch<'a> {
    building: &'a Building,
}

impl<'a> StructureSearch<'a> {
    /// Creates a search over `building`.
    #[must_use]
    pub fn new(building: &'a Building) -> Self {
        Self { building }
    }

    /// Floors matching `filter`, in stored order.
    #[must_use]
    pub fn search_floors(&self, filter: &FloorFilter) -> Vec<SpaceId> {
        self.building
            .floors()
            .filter(|&id| {
                self.building
                    .space(id)
                    .is_some_and(|floor| filter.matches(self.building, floor))
            })
            .collect()
    }

    /// Rooms on `floor` matching `filter`, or on every floor if `floor` is `None`.
    #[must_use]
    pub fn search_rooms(&self, floor: Option<SpaceId>, filter: &RoomFilter) -> Vec<SpaceId> {
        self.floor_children(floor, |b, f| b.rooms_of(f))
            .filter(|&id| {
                self.building
                    .space(id)
                    .is_some_and(|room| filter.matches(self.building, room))
            })
            .collect()
    }

    /// Open spaces on `floor` matching `filter`, or on every floor if `floor` is `None`.
    #[must_use]
    pub fn search_open_spaces(
        &self,
        floor: Option<SpaceId>,
        filter: &OpenSpaceFilter,
    ) -> Vec<SpaceId> {
        self.floor_children(floor, |b, f| b.open_spaces_of(f))
            .filter(|&id| {
                self.building
                    .space(id)
                    .is_some_and(|open| filter.matches(self.building, open))
            })
            .collect()
    }

    /// Registered zones matching `filter`, in registration order.
    #[must_use]
    pub fn search_zones(&self, filter: &ZoneFilter) -> Vec<ZoneId> {
        self.building
            .zones()
            .filter(|&id| self.building.zone(id).is_some_and(|zone| filter.matches(zone)))
            .collect()
    }

    /// Meters directly attached to `container` that match `filter`.
    ///
    /// # Errors
    ///
    /// Fails if `container` is not live.
    pub fn search_meters(&self, container: Container, filter: &MeterFilter) -> Result<Vec<MeterId>> {
        let contents = self.building.contents_of(container)?;
        Ok(contents
            .meters()
            .iter()
            .copied()
            .filter(|&id| self.building.meter(id).is_some_and(|m| filter.matches(m)))
            .collect())
    }

    /// Meters directly attached to `container` of one type.
    ///
    /// # Errors
    ///
    /// Fails if `container` is not live.
    pub fn meters_by_type(&self, container: Container, meter_type: MeterType) -> Result<Vec<MeterId>> {
        self.search_meters(container, &MeterFilter::new().with_meter_type(meter_type))
    }

    /// Schedules directly attached to `container` whose name satisfies `name`.
    ///
    /// # Errors
    ///
    /// Fails if `container` is not live.
    pub fn search_schedules(
        &self,
        container: Container,
        name: &Criterion<String>,
    ) -> Result<Vec<ScheduleId>> {
        let contents = self.building.contents_of(container)?;
        Ok(contents
            .schedules()
            .iter()
            .copied()
            .filter(|&id| self.building.schedule(id).is_some_and(|s| name.matches(&s.name)))
            .collect())
    }

    // =========================================================================
    // Duct network views
    // =========================================================================

    /// Sources of `duct` accepted by `filter`. A duct with no connection has none.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_sources(&self, duct: ComponentId, filter: &ComponentFilter) -> Result<Vec<DuctNode>> {
        self.duct_view(duct, ConnectionRole::Source, filter)
    }

    /// Destinations of `duct` accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_destinations(
        &self,
        duct: ComponentId,
        filter: &ComponentFilter,
    ) -> Result<Vec<DuctNode>> {
        self.duct_view(duct, ConnectionRole::Destination, filter)
    }

    /// Entities inside `duct` accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Fails if `duct` is not a live duct.
    pub fn duct_inside(&self, duct: ComponentId, filter: &ComponentFilter) -> Result<Vec<DuctNode>> {
        self.duct_view(duct, ConnectionRole::Inside, filter)
    }

    fn duct_view(
        &self,
        duct: ComponentId,
        role: ConnectionRole,
        filter: &ComponentFilter,
    ) -> Result<Vec<DuctNode>> {
        let Some(connection) = self.building.duct_connection(duct)? else {
            return Ok(Vec::new());
        };
        if filter.is_empty() {
            return Ok(connection.filtered(role, None));
        }
        let accepts = |node: &DuctNode| match node.entity {
            EntityRef::Component(id) => self
                .building
                .component(id)
                .is_some_and(|c| filter.matches(c)),
            _ => false,
        };
        let nodes = connection.filtered(role, Some(&accepts as &dyn NodeFilter));
        trace!("{} {role} nodes of {duct:?} passed the filter", nodes.len());
        Ok(nodes)
    }

    fn floor_children<F>(&self, floor: Option<SpaceId>, children: F) -> impl Iterator<Item = SpaceId> + 'a
    where
        F: Fn(&'a Building, SpaceId) -> &'a [SpaceId] + 'a,
    {
        let building = self.building;
        let floors: Vec<SpaceId> = match floor {
            Some(id) => vec![id],
            None => building.floors().collect(),
        };
        floors
            .into_iter()
            .flat_map(move |f| children(building, f).iter().copied())
    }
}
