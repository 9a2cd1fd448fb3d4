//! Integration tests for meter, component and appliance searches

use metamenth_foundation::{
    ApplianceCategory, ApplianceType, ComponentKind, DamperType, DuctType, ErrorKind, FilterType,
    MeasurementUnit, MeterType, PowerState,
};
use metamenth_query::{
    ApplianceFilter, ApplianceSearch, ComponentFilter, HvacComponentSearch, MeterFilter,
    MeterSearch, OpenSpaceFilter, RoomFilter, SpaceCriteria,
};
use metamenth_storage::{Appliance, ComponentDetails, Container, HvacComponent, Meter};

use crate::common::{building, open_space, room};

fn meter(location: &str, meter_type: MeterType) -> Meter {
    Meter::new(location, "Schneider", 60.0, MeasurementUnit::KilowattHours, meter_type)
}

// =============================================================================
// Meters
// =============================================================================

#[test]
fn meters_from_building_floor_and_spaces() {
    let mut b = building(1, 1, 0);
    let floor = b.floor_by_number(1).unwrap();
    let main = b.add_meter(Container::Building, meter("main", MeterType::Electricity)).unwrap().unwrap();
    let sub = b.add_meter(floor, meter("panel", MeterType::Electricity)).unwrap().unwrap();
    let local = b
        .add_meter(room(&b, 1, 0), meter("lab", MeterType::Electricity))
        .unwrap()
        .unwrap();
    b.add_meter(room(&b, 1, 0), meter("gas", MeterType::Gas)).unwrap();

    let results = MeterSearch::new(
        SpaceCriteria::new(),
        MeterFilter::new().with_meter_type(MeterType::Electricity),
    )
    .run(&b);
    assert_eq!(results.meters(), vec![main, sub, local]);
}

#[test]
fn meters_on_components_and_appliances() {
    let mut b = building(1, 0, 1);
    let hall = open_space(&b, 1, 0);
    let pump = b
        .add_hvac_component(hall, HvacComponent::new("P-1", ComponentDetails::Pump))
        .unwrap()
        .unwrap();
    let fridge = b
        .add_appliance(hall, Appliance::new("fridge", ApplianceType::Refrigerator, vec![]))
        .unwrap()
        .unwrap();
    let on_pump = b.add_meter(pump, meter("pump", MeterType::Power)).unwrap().unwrap();
    let on_fridge = b.add_meter(fridge, meter("fridge", MeterType::Power)).unwrap().unwrap();

    let results = MeterSearch::new(SpaceCriteria::new(), MeterFilter::new()).run(&b);
    assert_eq!(results.meters(), vec![on_pump, on_fridge]);
}

#[test]
fn meters_on_duct_parts() {
    let mut b = building(1, 0, 1);
    let hall = open_space(&b, 1, 0);
    let duct = b
        .add_hvac_component(hall, HvacComponent::duct("return", DuctType::Air))
        .unwrap()
        .unwrap();
    let damper = b
        .add_duct_part(
            duct,
            HvacComponent::new(
                "D-1",
                ComponentDetails::Damper { damper_type: DamperType::Motorized, percentage_opened: 50.0 },
            ),
        )
        .unwrap()
        .unwrap();
    let actuator = b.add_meter(damper, meter("actuator", MeterType::Power)).unwrap().unwrap();

    let results = MeterSearch::new(
        SpaceCriteria::new(),
        MeterFilter::new().with_meter_type(MeterType::Power),
    )
    .run(&b);
    assert_eq!(results.meters(), vec![actuator]);
}

// =============================================================================
// HVAC components
// =============================================================================

#[test]
fn component_search_requires_kind() {
    let b = building(1, 1, 0);
    let err = HvacComponentSearch::new(SpaceCriteria::new(), ComponentFilter::new())
        .run(&b)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));
}

#[test]
fn component_search_finds_duct_parts() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    let loose = b
        .add_hvac_component(r, HvacComponent::new("F-0", ComponentDetails::Filter { filter_type: FilterType::Carbon }))
        .unwrap()
        .unwrap();
    let duct = b
        .add_hvac_component(r, HvacComponent::duct("supply", DuctType::Air))
        .unwrap()
        .unwrap();
    let part = b
        .add_duct_part(duct, HvacComponent::new("F-1", ComponentDetails::Filter { filter_type: FilterType::Hepa }))
        .unwrap()
        .unwrap();

    let results = HvacComponentSearch::new(SpaceCriteria::new(), ComponentFilter::of(ComponentKind::Filter))
        .run(&b)
        .unwrap();
    assert_eq!(results.components(), vec![loose, part]);
}

#[test]
fn component_search_and_across_fields() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    let running = b
        .add_hvac_component(
            r,
            HvacComponent::new("FAN-1", ComponentDetails::Fan { variable_speed: true })
                .with_power_state(PowerState::On),
        )
        .unwrap()
        .unwrap();
    b.add_hvac_component(
        r,
        HvacComponent::new("FAN-2", ComponentDetails::Fan { variable_speed: false })
            .with_power_state(PowerState::Off),
    )
    .unwrap();

    let filter = ComponentFilter::of(ComponentKind::Fan).with_power_state(PowerState::On);
    let results = HvacComponentSearch::new(SpaceCriteria::new(), filter).run(&b).unwrap();
    assert_eq!(results.components(), vec![running]);
}

// =============================================================================
// Appliances
// =============================================================================

#[test]
fn appliances_by_category_in_open_spaces() {
    let mut b = building(1, 1, 1);
    b.add_appliance(
        room(&b, 1, 0),
        Appliance::new("printer", ApplianceType::Printer, vec![ApplianceCategory::Office]),
    )
    .unwrap();
    let camera = b
        .add_appliance(
            open_space(&b, 1, 0),
            Appliance::new(
                "cam",
                ApplianceType::Camera,
                vec![ApplianceCategory::Smart, ApplianceCategory::Office],
            ),
        )
        .unwrap()
        .unwrap();

    let criteria = SpaceCriteria::new().with_room(RoomFilter::new().with_name("no such room"));
    let results = ApplianceSearch::new(
        criteria,
        ApplianceFilter::new().with_category(ApplianceCategory::Office),
    )
    .run(&b);
    assert_eq!(results.appliances(), vec![camera]);

    let smart_only = ApplianceSearch::new(
        SpaceCriteria::new().with_open_space(OpenSpaceFilter::new()),
        ApplianceFilter::new().with_category(vec![ApplianceCategory::Smart, ApplianceCategory::Household]),
    )
    .run(&b);
    assert_eq!(smart_only.appliances(), vec![camera]);
}
