//! Shared building fixtures

use metamenth_foundation::{
    BuildingType, FloorType, Measure, MeasurementUnit, OpenSpaceType, RoomType, SensorMeasure,
    SensorMeasureType, SpaceId,
};
use metamenth_storage::{Building, BuildingInfo, FloorPlan, ModelConfig, OpenSpace, Room, Sensor};

pub fn area(value: f64) -> Measure {
    Measure::area(value).unwrap()
}

/// Two floors, each with room "101" and open space "corridor".
pub fn office_building(config: ModelConfig) -> Building {
    let info = BuildingInfo::new(2008, BuildingType::Commercial, "1455 Boulevard de Maisonneuve")
        .with_floor_area(Measure::new(MeasurementUnit::SquareMeters, 1200.0));
    let mut building = Building::new(info, config);
    for number in 1..=2 {
        building
            .add_floor(
                FloorPlan::new(number, area(600.0), FloorType::Regular)
                    .with_room(Room::new("101", area(45.0), RoomType::Office))
                    .with_open_space(OpenSpace::new("corridor", area(90.0), OpenSpaceType::Corridor)),
            )
            .unwrap();
    }
    building
}

pub fn room(building: &Building, floor: i32) -> SpaceId {
    let floor = building.floor_by_number(floor).unwrap();
    building.room_by_name(floor, "101").unwrap()
}

pub fn corridor(building: &Building, floor: i32) -> SpaceId {
    let floor = building.floor_by_number(floor).unwrap();
    building.open_space_by_name(floor, "corridor").unwrap()
}

pub fn temperature(name: &str) -> Sensor {
    Sensor::new(
        name,
        SensorMeasure::Temperature,
        MeasurementUnit::DegreeCelsius,
        SensorMeasureType::ThermocoupleTypeA,
        900,
    )
}
