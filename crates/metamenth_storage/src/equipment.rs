//! Sensors, meters, appliances and operational schedules.

use metamenth_foundation::{
    ApplianceCategory, ApplianceType, Keyed, Measure, MeasurementUnit, MeterType, PowerState,
    SensorMeasure, SensorMeasureType, Uid,
};

use crate::contents::SubEntities;

/// A sensing transducer.
#[derive(Clone, Debug, PartialEq)]
pub struct Sensor {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Unique name within its container.
    pub name: String,
    /// Measured phenomenon.
    pub measure: SensorMeasure,
    /// Unit of recorded data.
    pub unit: MeasurementUnit,
    /// Measurement technique.
    pub measure_type: SensorMeasureType,
    /// Recording interval in seconds.
    pub data_frequency: u32,
    /// Latest reading.
    pub current_value: Option<f64>,
    /// External registry id.
    pub registry_id: Option<String>,
    /// True if data is recorded on change of value.
    pub change_of_value: bool,
}

impl Sensor {
    /// Creates a sensor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        measure: SensorMeasure,
        unit: MeasurementUnit,
        measure_type: SensorMeasureType,
        data_frequency: u32,
    ) -> Self {
        Self {
            uid: Uid::NIL,
            name: name.into(),
            measure,
            unit,
            measure_type,
            data_frequency,
            current_value: None,
            registry_id: None,
            change_of_value: false,
        }
    }

    /// Sets the registry id.
    #[must_use]
    pub fn with_registry_id(mut self, registry_id: impl Into<String>) -> Self {
        self.registry_id = Some(registry_id.into());
        self
    }

    /// Sets the latest reading.
    #[must_use]
    pub fn with_current_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }
}

impl Keyed for Sensor {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// A metering device. Meters have no name and are keyed by uid.
#[derive(Clone, Debug, PartialEq)]
pub struct Meter {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Location of the meter.
    pub location: String,
    /// Manufacturer.
    pub manufacturer: String,
    /// Measurement frequency in seconds.
    pub measurement_frequency: f64,
    /// Unit of recorded data.
    pub measurement_unit: MeasurementUnit,
    /// Meter type.
    pub meter_type: MeterType,
}

impl Meter {
    /// Creates a meter.
    #[must_use]
    pub fn new(
        location: impl Into<String>,
        manufacturer: impl Into<String>,
        measurement_frequency: f64,
        measurement_unit: MeasurementUnit,
        meter_type: MeterType,
    ) -> Self {
        Self {
            uid: Uid::NIL,
            location: location.into(),
            manufacturer: manufacturer.into(),
            measurement_frequency,
            measurement_unit,
            meter_type,
        }
    }
}

impl Keyed for Meter {
    fn key_name(&self) -> Option<&str> {
        None
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// A non-HVAC appliance placed in a space.
#[derive(Clone, Debug, PartialEq)]
pub struct Appliance {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Unique name within its container.
    pub name: String,
    /// Appliance type.
    pub appliance_type: ApplianceType,
    /// Categories this appliance falls under.
    pub categories: Vec<ApplianceCategory>,
    /// Manufacturer.
    pub manufacturer: Option<String>,
    /// Model designation.
    pub model: Option<String>,
    /// Current power state.
    pub power_state: Option<PowerState>,
    pub(crate) contents: SubEntities,
}

impl Appliance {
    /// Creates an appliance.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        appliance_type: ApplianceType,
        categories: Vec<ApplianceCategory>,
    ) -> Self {
        Self {
            uid: Uid::NIL,
            name: name.into(),
            appliance_type,
            categories,
            manufacturer: None,
            model: None,
            power_state: None,
            contents: SubEntities::default(),
        }
    }

    /// Sets the manufacturer.
    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Sets the power state.
    #[must_use]
    pub fn with_power_state(mut self, state: PowerState) -> Self {
        self.power_state = Some(state);
        self
    }

    /// Attached sub-entities.
    #[must_use]
    pub fn contents(&self) -> &SubEntities {
        &self.contents
    }

    pub(crate) fn clear_links(&mut self) {
        self.contents = SubEntities::default();
    }
}

impl Keyed for Appliance {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// An operational schedule with an optional set point.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    /// Assigned by the building on insertion.
    pub uid: Uid,
    /// Unique name within its container.
    pub name: String,
    /// Start timestamp, ISO 8601.
    pub start: String,
    /// End timestamp, ISO 8601.
    pub end: String,
    /// Target value while the schedule is active.
    pub set_point: Option<Measure>,
}

impl Schedule {
    /// Creates a schedule.
    #[must_use]
    pub fn new(name: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            uid: Uid::NIL,
            name: name.into(),
            start: start.into(),
            end: end.into(),
            set_point: None,
        }
    }

    /// Sets the set point.
    #[must_use]
    pub fn with_set_point(mut self, set_point: Measure) -> Self {
        self.set_point = Some(set_point);
        self
    }
}

impl Keyed for Schedule {
    fn key_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}
