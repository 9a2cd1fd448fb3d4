//! An office building modelled end to end

use metamenth::foundation::{
    BuildingType, ComponentKind, ConnectionRole, DuctSubType, DuctType, EntityRef, FloorType,
    HvacType, Measure, MeasurementUnit, MeterType, OpenSpaceType, RoomType, SensorMeasure,
    SensorMeasureType, SpaceId, ZoneType,
};
use metamenth::query::{
    ComponentFilter, HvacComponentSearch, MeterFilter, MeterSearch, SearchConfig, SensorFilter,
    SensorSearch, SpaceCriteria, SpaceSearch, StructureSearch, ZoneFilter,
};
use metamenth::storage::{
    Building, BuildingInfo, ComponentDetails, Container, Duct, FloorPlan, HvacComponent, Meter,
    ModelConfig, OpenSpace, Room, Sensor, Zone,
};

struct Office {
    building: Building,
    offices: Vec<SpaceId>,
    lobby: SpaceId,
}

fn office() -> Office {
    let area = Measure::area(120.0).unwrap();
    let mut building = Building::new(
        BuildingInfo::new(2009, BuildingType::Commercial, "1 Place Ville Marie"),
        ModelConfig::new(42),
    );
    for number in 1..=3 {
        building
            .add_floor(
                FloorPlan::new(number, area, FloorType::Regular)
                    .with_room(Room::new("east", area, RoomType::Office))
                    .with_room(Room::new("west", area, RoomType::Office))
                    .with_open_space(OpenSpace::new("lobby", area, OpenSpaceType::Hall)),
            )
            .unwrap();
    }

    let mut offices = Vec::new();
    for number in 1..=3 {
        let floor = building.floor_by_number(number).unwrap();
        offices.push(building.room_by_name(floor, "east").unwrap());
        offices.push(building.room_by_name(floor, "west").unwrap());
    }
    let ground = building.floor_by_number(1).unwrap();
    let lobby = building.open_space_by_name(ground, "lobby").unwrap();

    Office {
        building,
        offices,
        lobby,
    }
}

fn air(name: &str, sub_type: DuctSubType) -> HvacComponent {
    HvacComponent::new(
        name,
        ComponentDetails::Duct(Duct::new(DuctType::Air).with_sub_type(sub_type)),
    )
}

#[test]
fn perimeter_zone_temperature_sensors() {
    let Office {
        mut building,
        offices,
        ..
    } = office();
    let perimeter = building.register_zone(Zone::new("perimeter", ZoneType::Hvac, HvacType::Perimeter));
    building.register_zone(Zone::new("core", ZoneType::Hvac, HvacType::Interior));

    let mut expected = Vec::new();
    for (i, &room) in offices.iter().enumerate() {
        let temp = building
            .add_transducer(
                room,
                Sensor::new(
                    format!("T-{i}"),
                    SensorMeasure::Temperature,
                    MeasurementUnit::DegreeCelsius,
                    SensorMeasureType::Pt100,
                    300,
                ),
            )
            .unwrap()
            .unwrap();
        if i % 2 == 0 {
            building.add_zone_to_space(room, perimeter).unwrap();
            expected.push(temp);
        }
    }

    let criteria = SpaceCriteria::new().with_zone(ZoneFilter::new().with_hvac_type(HvacType::Perimeter));
    let filter = SensorFilter::new().with_measure(SensorMeasure::Temperature);
    let by_zone = SensorSearch::new(criteria, filter.clone())
        .with_config(SearchConfig::zones())
        .run(&building);
    assert_eq!(by_zone.sensors(), expected);

    let everywhere = SensorSearch::new(SpaceCriteria::new(), filter).run(&building);
    assert_eq!(everywhere.len(), offices.len());
}

#[test]
fn air_handling_network() {
    let Office {
        mut building,
        offices,
        lobby,
    } = office();
    let plant = building.floor_by_number(3).unwrap();
    let plant_room = building.room_by_name(plant, "west").unwrap();

    let ahu_fan = building
        .add_hvac_component(plant_room, HvacComponent::new("AHU-1 fan", ComponentDetails::Fan { variable_speed: true }))
        .unwrap()
        .unwrap();
    let riser = building
        .add_hvac_component(plant_room, air("riser", DuctSubType::SupplyAir))
        .unwrap()
        .unwrap();
    let branch = building
        .add_hvac_component(lobby, air("branch", DuctSubType::SupplyAir))
        .unwrap()
        .unwrap();

    building.connect_duct(riser, ConnectionRole::Source, ahu_fan).unwrap();
    building.connect_duct(riser, ConnectionRole::Destination, branch).unwrap();
    building.connect_duct(branch, ConnectionRole::Source, riser).unwrap();
    building.connect_duct(branch, ConnectionRole::Destination, offices[0]).unwrap();
    building.connect_duct(branch, ConnectionRole::Destination, offices[1]).unwrap();
    building.connect_duct(branch, ConnectionRole::Destination, lobby).unwrap();

    let search = StructureSearch::new(&building);
    let fans = search
        .duct_sources(riser, &ComponentFilter::of(ComponentKind::Fan))
        .unwrap();
    assert_eq!(fans.len(), 1);
    assert_eq!(fans[0].entity, EntityRef::Component(ahu_fan));

    // Follow the supply path from the fan to the rooms it serves.
    let next = search.duct_destinations(riser, &ComponentFilter::new()).unwrap();
    let next_duct = next[0].entity.as_component().unwrap();
    assert_eq!(next_duct, branch);
    let served: Vec<EntityRef> = search
        .duct_destinations(next_duct, &ComponentFilter::new())
        .unwrap()
        .into_iter()
        .map(|node| node.entity)
        .collect();
    assert_eq!(
        served,
        vec![
            EntityRef::Space(offices[0]),
            EntityRef::Space(offices[1]),
            EntityRef::Space(lobby),
        ]
    );

    let ducts = HvacComponentSearch::new(SpaceCriteria::new(), ComponentFilter::of(ComponentKind::Duct))
        .run(&building)
        .unwrap();
    assert_eq!(ducts.components(), vec![branch, riser]);
}

#[test]
fn removing_a_room_cleans_every_view() {
    let Office {
        mut building,
        offices,
        lobby,
    } = office();
    let served = offices[0];
    let zone = building
        .add_new_zone_to_space(served, Zone::new("east wing", ZoneType::Lighting, HvacType::None))
        .unwrap();
    building.add_zone_to_space(offices[2], zone).unwrap();
    let sensor = building
        .add_transducer(
            served,
            Sensor::new(
                "CO2",
                SensorMeasure::CarbonDioxide,
                MeasurementUnit::PartsPerMillion,
                SensorMeasureType::NonDispersiveInfrared,
                60,
            ),
        )
        .unwrap()
        .unwrap();
    let duct = building
        .add_hvac_component(lobby, air("supply", DuctSubType::SupplyAir))
        .unwrap()
        .unwrap();
    building.connect_duct(duct, ConnectionRole::Destination, served).unwrap();
    building.add_adjacent_space(offices[1], served).unwrap();

    assert!(building.remove_room(served).unwrap());

    assert_eq!(building.spaces_of_zone(zone), &[offices[2]]);
    assert!(building.sensor(sensor).is_none());
    assert!(
        !building
            .duct_connection(duct)
            .unwrap()
            .unwrap()
            .contains(ConnectionRole::Destination, served.into())
    );
    assert!(building.space(offices[1]).unwrap().adjacent_spaces().is_empty());

    let spaces = SpaceSearch::new(SpaceCriteria::new()).run(&building);
    assert!(!spaces.spaces().contains(&served));
    // Three floors of four spaces each, less the removed room.
    assert_eq!(spaces.len(), 3 * 4 - 1);
}

#[test]
fn metering_hierarchy() {
    let Office { mut building, .. } = office();
    let ground = building.floor_by_number(1).unwrap();
    let utility = building
        .add_meter(
            Container::Building,
            Meter::new("utility", "Hydro", 900.0, MeasurementUnit::KilowattHours, MeterType::Electricity),
        )
        .unwrap()
        .unwrap();
    let sub = building
        .add_meter(
            ground,
            Meter::new("panel 1", "Hydro", 900.0, MeasurementUnit::KilowattHours, MeterType::Electricity),
        )
        .unwrap()
        .unwrap();
    building
        .add_meter(
            ground,
            Meter::new("gas", "Energir", 3600.0, MeasurementUnit::CubicMeters, MeterType::Gas),
        )
        .unwrap();

    let electricity = MeterFilter::new().with_meter_type(MeterType::Electricity);
    let results = MeterSearch::new(SpaceCriteria::new(), electricity.clone()).run(&building);
    assert_eq!(results.meters(), vec![utility, sub]);

    let on_floor = StructureSearch::new(&building)
        .search_meters(ground.into(), &electricity)
        .unwrap();
    assert_eq!(on_floor, vec![sub]);
}
