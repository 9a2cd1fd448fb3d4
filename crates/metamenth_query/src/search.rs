//! Concrete visitor searches.
//!
//! Each search pairs [`SpaceCriteria`] for the structural levels with a leaf
//! filter, implements [`SpaceVisitor`] to scan the containers it cares about,
//! and is run with `run(&building)`. Results come back in traversal order with
//! duplicates preserved.

use metamenth_foundation::{ComponentId, Error, Result, SpaceId, ZoneId};
use metamenth_storage::{Building, Duct, HvacComponent, Space, SubEntities, Zone};
use tracing::debug;

use crate::config::SearchConfig;
use crate::filters::{
    ApplianceFilter, ComponentFilter, FloorFilter, MeterFilter, OpenSpaceFilter, RoomFilter,
    SensorFilter, ZoneFilter,
};
use crate::results::{Found, ResultSet};
use crate::visitor::{SpaceVisitor, walk};

// =============================================================================
// Structural criteria
// =============================================================================

/// Filters for the structural levels of a traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpaceCriteria {
    /// Applied to zones in zone-scoped traversals.
    pub zone: ZoneFilter,
    /// Applied to floors.
    pub floor: FloorFilter,
    /// Applied to rooms.
    pub room: RoomFilter,
    /// Applied to open spaces.
    pub open_space: OpenSpaceFilter,
}

impl SpaceCriteria {
    /// Criteria that match every level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the zone filter.
    #[must_use]
    pub fn with_zone(mut self, filter: ZoneFilter) -> Self {
        self.zone = filter;
        self
    }

    /// Sets the floor filter.
    #[must_use]
    pub fn with_floor(mut self, filter: FloorFilter) -> Self {
        self.floor = filter;
        self
    }

    /// Sets the room filter.
    #[must_use]
    pub fn with_room(mut self, filter: RoomFilter) -> Self {
        self.room = filter;
        self
    }

    /// Sets the open space filter.
    #[must_use]
    pub fn with_open_space(mut self, filter: OpenSpaceFilter) -> Self {
        self.open_space = filter;
        self
    }

    fn floor_matches(&self, building: &Building, floor: &Space) -> bool {
        self.floor.matches(building, floor)
    }

    fn zone_matches(&self, zone: &Zone) -> bool {
        self.zone.matches(zone)
    }
}

/// Generates the structural hooks shared by leaf searches: floors and zones
/// are tested, and matching rooms and open spaces are handed to `scan`.
macro_rules! leaf_visitor {
    ($search:ty) => {
        impl SpaceVisitor for $search {
            fn visit_floor(&mut self, building: &Building, _id: SpaceId, floor: &Space) -> bool {
                self.criteria.floor_matches(building, floor)
            }

            fn visit_zone(&mut self, _building: &Building, _id: ZoneId, zone: &Zone) -> bool {
                self.criteria.zone_matches(zone)
            }

            fn visit_room(&mut self, building: &Building, _id: SpaceId, room: &Space) {
                if self.criteria.room.matches(building, room) {
                    self.scan(building, room.contents());
                }
            }

            fn visit_open_space(&mut self, building: &Building, _id: SpaceId, open: &Space) {
                if self.criteria.open_space.matches(building, open) {
                    self.scan(building, open.contents());
                }
            }
        }
    };
}

// =============================================================================
// Space search
// =============================================================================

/// Finds floors, rooms and open spaces.
#[derive(Clone, Debug, Default)]
pub struct SpaceSearch {
    criteria: SpaceCriteria,
    config: SearchConfig,
    results: ResultSet,
}

impl SpaceSearch {
    /// Creates a search.
    #[must_use]
    pub fn new(criteria: SpaceCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Sets traversal options.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search.
    #[must_use]
    pub fn run(mut self, building: &Building) -> ResultSet {
        let config = self.config.clone();
        walk(building, &config, &mut self);
        debug!("Space search found {} matches", self.results.len());
        self.results
    }
}

impl SpaceVisitor for SpaceSearch {
    fn visit_floor(&mut self, building: &Building, id: SpaceId, floor: &Space) -> bool {
        let matched = self.criteria.floor_matches(building, floor);
        if matched && self.config.include_floors {
            self.results.push(Found::Space(id));
        }
        matched
    }

    fn visit_zone(&mut self, _building: &Building, _id: ZoneId, zone: &Zone) -> bool {
        self.criteria.zone_matches(zone)
    }

    fn visit_room(&mut self, building: &Building, id: SpaceId, room: &Space) {
        if self.criteria.room.matches(building, room) {
            self.results.push(Found::Space(id));
        }
    }

    fn visit_open_space(&mut self, building: &Building, id: SpaceId, open: &Space) {
        if self.criteria.open_space.matches(building, open) {
            self.results.push(Found::Space(id));
        }
    }
}

// =============================================================================
// Sensor search
// =============================================================================

/// Finds sensors attached to matching rooms and open spaces, including those
/// on their HVAC components, duct parts and appliances.
#[derive(Clone, Debug, Default)]
pub struct SensorSearch {
    criteria: SpaceCriteria,
    filter: SensorFilter,
    config: SearchConfig,
    results: ResultSet,
}

impl SensorSearch {
    /// Creates a search.
    #[must_use]
    pub fn new(criteria: SpaceCriteria, filter: SensorFilter) -> Self {
        Self {
            criteria,
            filter,
            ..Self::default()
        }
    }

    /// Sets traversal options.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search.
    #[must_use]
    pub fn run(mut self, building: &Building) -> ResultSet {
        let config = self.config.clone();
        walk(building, &config, &mut self);
        debug!("Sensor search found {} matches", self.results.len());
        self.results
    }

    fn scan(&mut self, building: &Building, contents: &SubEntities) {
        self.scan_transducers(building, contents);
        for &id in contents.hvac_components() {
            let Some(component) = building.component(id) else {
                continue;
            };
            self.scan_transducers(building, component.contents());
            for &part in component.as_duct().map(Duct::parts).unwrap_or_default() {
                if let Some(part) = building.component(part) {
                    self.scan_transducers(building, part.contents());
                }
            }
        }
        for &id in contents.appliances() {
            if let Some(appliance) = building.appliance(id) {
                self.scan_transducers(building, appliance.contents());
            }
        }
    }

    fn scan_transducers(&mut self, building: &Building, contents: &SubEntities) {
        for &id in contents.transducers() {
            if building.sensor(id).is_some_and(|s| self.filter.matches(s)) {
                self.results.push(Found::Sensor(id));
            }
        }
    }
}

leaf_visitor!(SensorSearch);

// =============================================================================
// Meter search
// =============================================================================

/// Finds meters: building meters first, then floor meters and the meters of
/// each matching space, its components, their duct parts and its appliances.
#[derive(Clone, Debug, Default)]
pub struct MeterSearch {
    criteria: SpaceCriteria,
    filter: MeterFilter,
    config: SearchConfig,
    results: ResultSet,
}

impl MeterSearch {
    /// Creates a search.
    #[must_use]
    pub fn new(criteria: SpaceCriteria, filter: MeterFilter) -> Self {
        Self {
            criteria,
            filter,
            ..Self::default()
        }
    }

    /// Sets traversal options.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search.
    #[must_use]
    pub fn run(mut self, building: &Building) -> ResultSet {
        let config = self.config.clone();
        walk(building, &config, &mut self);
        debug!("Meter search found {} matches", self.results.len());
        self.results
    }

    fn scan(&mut self, building: &Building, contents: &SubEntities) {
        self.scan_meters(building, contents);
        for &id in contents.hvac_components() {
            let Some(component) = building.component(id) else {
                continue;
            };
            self.scan_meters(building, component.contents());
            for &part in component.as_duct().map(Duct::parts).unwrap_or_default() {
                if let Some(part) = building.component(part) {
                    self.scan_meters(building, part.contents());
                }
            }
        }
        for &id in contents.appliances() {
            if let Some(appliance) = building.appliance(id) {
                self.scan_meters(building, appliance.contents());
            }
        }
    }

    fn scan_meters(&mut self, building: &Building, contents: &SubEntities) {
        for &id in contents.meters() {
            if building.meter(id).is_some_and(|m| self.filter.matches(m)) {
                self.results.push(Found::Meter(id));
            }
        }
    }
}

impl SpaceVisitor for MeterSearch {
    fn visit_building(&mut self, building: &Building) {
        self.scan_meters(building, building.contents());
    }

    fn visit_floor(&mut self, building: &Building, _id: SpaceId, floor: &Space) -> bool {
        let matched = self.criteria.floor_matches(building, floor);
        if matched {
            self.scan_meters(building, floor.contents());
        }
        matched
    }

    fn visit_zone(&mut self, _building: &Building, _id: ZoneId, zone: &Zone) -> bool {
        self.criteria.zone_matches(zone)
    }

    fn visit_room(&mut self, building: &Building, _id: SpaceId, room: &Space) {
        if self.criteria.room.matches(building, room) {
            self.scan(building, room.contents());
        }
    }

    fn visit_open_space(&mut self, building: &Building, _id: SpaceId, open: &Space) {
        if self.criteria.open_space.matches(building, open) {
            self.scan(building, open.contents());
        }
    }
}

// =============================================================================
// HVAC component search
// =============================================================================

/// Finds HVAC components in matching rooms and open spaces, descending into
/// the parts of each duct.
#[derive(Clone, Debug, Default)]
pub struct HvacComponentSearch {
    criteria: SpaceCriteria,
    filter: ComponentFilter,
    config: SearchConfig,
    results: ResultSet,
}

impl HvacComponentSearch {
    /// Creates a search.
    #[must_use]
    pub fn new(criteria: SpaceCriteria, filter: ComponentFilter) -> Self {
        Self {
            criteria,
            filter,
            ..Self::default()
        }
    }

    /// Sets traversal options.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the filter does not constrain the component kind.
    pub fn run(mut self, building: &Building) -> Result<ResultSet> {
        if self.filter.kind.is_any() {
            return Err(Error::validation("component search requires a component kind")
                .in_operation("hvac_component_search"));
        }
        let config = self.config.clone();
        walk(building, &config, &mut self);
        debug!("Component search found {} matches", self.results.len());
        Ok(self.results)
    }

    fn scan(&mut self, building: &Building, contents: &SubEntities) {
        for &id in contents.hvac_components() {
            let Some(component) = building.component(id) else {
                continue;
            };
            self.check(id, component);
            for &part in component.as_duct().map(Duct::parts).unwrap_or_default() {
                if let Some(record) = building.component(part) {
                    self.check(part, record);
                }
            }
        }
    }

    fn check(&mut self, id: ComponentId, component: &HvacComponent) {
        if self.filter.matches(component) {
            self.results.push(Found::Component(id));
        }
    }
}

leaf_visitor!(HvacComponentSearch);

// =============================================================================
// Appliance search
// =============================================================================

/// Finds appliances in matching rooms and open spaces.
#[derive(Clone, Debug, Default)]
pub struct ApplianceSearch {
    criteria: SpaceCriteria,
    filter: ApplianceFilter,
    config: SearchConfig,
    results: ResultSet,
}

impl ApplianceSearch {
    /// Creates a search.
    #[must_use]
    pub fn new(criteria: SpaceCriteria, filter: ApplianceFilter) -> Self {
        Self {
            criteria,
            filter,
            ..Self::default()
        }
    }

    /// Sets traversal options.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search.
    #[must_use]
    pub fn run(mut self, building: &Building) -> ResultSet {
        let config = self.config.clone();
        walk(building, &config, &mut self);
        debug!("Appliance search found {} matches", self.results.len());
        self.results
    }

    fn scan(&mut self, building: &Building, contents: &SubEntities) {
        for &id in contents.appliances() {
            if building.appliance(id).is_some_and(|a| self.filter.matches(a)) {
                self.results.push(Found::Appliance(id));
            }
        }
    }
}

leaf_visitor!(ApplianceSearch);
