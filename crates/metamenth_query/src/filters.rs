//! Typed per-kind filters.
//!
//! Every field is a [`Criterion`] defaulting to [`Criterion::Any`], so an empty
//! filter matches everything. Fields are combined with AND; a
//! [`Criterion::OneOf`] field matches any listed value. An attribute that is
//! missing on a record (an unset manufacturer, a space outside every zone) is
//! a non-match for any criterion other than `Any`.

use metamenth_foundation::{
    ApplianceCategory, ApplianceType, ComponentKind, Criterion, FloorType, HvacType,
    MeasurementUnit, MeterType, OpenSpaceType, PowerState, RoomType, SensorMeasure,
    SensorMeasureType, ZoneType,
};
use metamenth_storage::{Appliance, Building, HvacComponent, Meter, Sensor, Space, Zone};

macro_rules! filter {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty => $setter:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: Criterion<$ty>, )*
        }

        impl $name {
            /// A filter that matches everything.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Constrains `", stringify!($field), "`.")]
                #[must_use]
                pub fn $setter(mut self, criterion: impl Into<Criterion<$ty>>) -> Self {
                    self.$field = criterion.into();
                    self
                }
            )*

            /// True if no field is constrained.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_any() )*
            }
        }
    };
}

/// True if `space` belongs to a zone whose name satisfies `zones`.
fn in_zones(zones: &Criterion<String>, building: &Building, space: &Space) -> bool {
    zones.matches_any(
        space
            .zones()
            .iter()
            .filter_map(|&id| building.zone(id))
            .map(|zone| &zone.name),
    )
}

// =============================================================================
// Structural filters
// =============================================================================

filter! {
    /// Criteria on zones.
    ZoneFilter {
        /// Zone name.
        name: String => with_name,
        /// Zone type.
        zone_type: ZoneType => with_zone_type,
        /// HVAC subtype.
        hvac_type: HvacType => with_hvac_type,
    }
}

impl ZoneFilter {
    /// Tests a zone.
    #[must_use]
    pub fn matches(&self, zone: &Zone) -> bool {
        self.name.matches(&zone.name)
            && self.zone_type.matches(&zone.zone_type)
            && self.hvac_type.matches(&zone.hvac_type)
    }
}

filter! {
    /// Criteria on floors.
    FloorFilter {
        /// Floor name.
        name: String => with_name,
        /// Floor number.
        number: i32 => with_number,
        /// Floor type.
        floor_type: FloorType => with_floor_type,
        /// Names of zones the floor belongs to.
        zones: String => with_zones,
    }
}

impl FloorFilter {
    /// Tests a floor. Rooms and open spaces never match.
    #[must_use]
    pub fn matches(&self, building: &Building, space: &Space) -> bool {
        let Some(floor) = space.as_floor() else {
            return false;
        };
        self.name.matches(&space.name)
            && self.number.matches(&floor.number)
            && self.floor_type.matches(&floor.floor_type)
            && in_zones(&self.zones, building, space)
    }
}

filter! {
    /// Criteria on rooms.
    RoomFilter {
        /// Room name.
        name: String => with_name,
        /// Room type.
        room_type: RoomType => with_room_type,
        /// Location.
        location: String => with_location,
        /// Names of zones the room belongs to.
        zones: String => with_zones,
    }
}

impl RoomFilter {
    /// Tests a room. Floors and open spaces never match.
    #[must_use]
    pub fn matches(&self, building: &Building, space: &Space) -> bool {
        let Some(room) = space.as_room() else {
            return false;
        };
        self.name.matches(&space.name)
            && self.room_type.matches(&room.room_type)
            && self.location.matches_opt(space.location.as_ref())
            && in_zones(&self.zones, building, space)
    }
}

filter! {
    /// Criteria on open spaces.
    OpenSpaceFilter {
        /// Open space name.
        name: String => with_name,
        /// Open space type.
        space_type: OpenSpaceType => with_space_type,
        /// Location.
        location: String => with_location,
        /// Names of zones the open space belongs to.
        zones: String => with_zones,
    }
}

impl OpenSpaceFilter {
    /// Tests an open space. Floors and rooms never match.
    #[must_use]
    pub fn matches(&self, building: &Building, space: &Space) -> bool {
        let Some(open) = space.as_open_space() else {
            return false;
        };
        self.name.matches(&space.name)
            && self.space_type.matches(&open.space_type)
            && self.location.matches_opt(space.location.as_ref())
            && in_zones(&self.zones, building, space)
    }
}

// =============================================================================
// Leaf filters
// =============================================================================

filter! {
    /// Criteria on sensors.
    SensorFilter {
        /// Sensor name.
        name: String => with_name,
        /// Measured phenomenon.
        measure: SensorMeasure => with_measure,
        /// Unit of recorded data.
        unit: MeasurementUnit => with_unit,
        /// Measurement technique.
        measure_type: SensorMeasureType => with_measure_type,
        /// Recording interval in seconds.
        data_frequency: u32 => with_data_frequency,
        /// External registry id.
        registry_id: String => with_registry_id,
    }
}

impl SensorFilter {
    /// Tests a sensor.
    #[must_use]
    pub fn matches(&self, sensor: &Sensor) -> bool {
        self.name.matches(&sensor.name)
            && self.measure.matches(&sensor.measure)
            && self.unit.matches(&sensor.unit)
            && self.measure_type.matches(&sensor.measure_type)
            && self.data_frequency.matches(&sensor.data_frequency)
            && self.registry_id.matches_opt(sensor.registry_id.as_ref())
    }
}

filter! {
    /// Criteria on meters.
    MeterFilter {
        /// Meter type.
        meter_type: MeterType => with_meter_type,
        /// Unit of recorded data.
        measurement_unit: MeasurementUnit => with_measurement_unit,
        /// Manufacturer.
        manufacturer: String => with_manufacturer,
        /// Location.
        location: String => with_location,
    }
}

impl MeterFilter {
    /// Tests a meter.
    #[must_use]
    pub fn matches(&self, meter: &Meter) -> bool {
        self.meter_type.matches(&meter.meter_type)
            && self.measurement_unit.matches(&meter.measurement_unit)
            && self.manufacturer.matches(&meter.manufacturer)
            && self.location.matches(&meter.location)
    }
}

filter! {
    /// Criteria on HVAC components.
    ComponentFilter {
        /// Component kind.
        kind: ComponentKind => with_kind,
        /// Component name.
        name: String => with_name,
        /// Manufacturer.
        manufacturer: String => with_manufacturer,
        /// Power state.
        power_state: PowerState => with_power_state,
    }
}

impl ComponentFilter {
    /// A filter on component kind alone.
    #[must_use]
    pub fn of(kind: impl Into<Criterion<ComponentKind>>) -> Self {
        Self::new().with_kind(kind)
    }

    /// Tests a component.
    #[must_use]
    pub fn matches(&self, component: &HvacComponent) -> bool {
        self.kind.matches(&component.kind())
            && self.name.matches(&component.name)
            && self.manufacturer.matches_opt(component.manufacturer.as_ref())
            && self.power_state.matches_opt(component.power_state.as_ref())
    }
}

filter! {
    /// Criteria on appliances.
    ApplianceFilter {
        /// Appliance name.
        name: String => with_name,
        /// Appliance type.
        appliance_type: ApplianceType => with_appliance_type,
        /// Categories; matches if the appliance has any listed category.
        category: ApplianceCategory => with_category,
        /// Power state.
        power_state: PowerState => with_power_state,
    }
}

impl ApplianceFilter {
    /// Tests an appliance.
    #[must_use]
    pub fn matches(&self, appliance: &Appliance) -> bool {
        self.name.matches(&appliance.name)
            && self.appliance_type.matches(&appliance.appliance_type)
            && self.category.matches_any(&appliance.categories)
            && self.power_state.matches_opt(appliance.power_state.as_ref())
    }
}
