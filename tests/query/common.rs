//! Shared building fixtures

use metamenth_foundation::{
    BuildingType, FloorType, Measure, MeasurementUnit, OpenSpaceType, RoomType, SensorMeasure,
    SensorMeasureType, SpaceId,
};
use metamenth_storage::{Building, BuildingInfo, FloorPlan, ModelConfig, OpenSpace, Room, Sensor};

/// `floors` floors, each with `rooms` rooms and `open_spaces` open spaces.
pub fn building(floors: i32, rooms: usize, open_spaces: usize) -> Building {
    let area = Measure::area(50.0).unwrap();
    let mut b = Building::new(
        BuildingInfo::new(2012, BuildingType::Institutional, "845 Sherbrooke St"),
        ModelConfig::new(2024),
    );
    for number in 1..=floors {
        let mut plan = FloorPlan::new(number, area, FloorType::Regular);
        for r in 0..rooms {
            plan = plan.with_room(Room::new(format!("room-{r}"), area, RoomType::Classroom));
        }
        for o in 0..open_spaces {
            plan = plan.with_open_space(OpenSpace::new(format!("open-{o}"), area, OpenSpaceType::Hall));
        }
        b.add_floor(plan).unwrap();
    }
    b
}

pub fn room(b: &Building, floor: i32, index: usize) -> SpaceId {
    b.room_by_name(b.floor_by_number(floor).unwrap(), &format!("room-{index}"))
        .unwrap()
}

pub fn open_space(b: &Building, floor: i32, index: usize) -> SpaceId {
    b.open_space_by_name(b.floor_by_number(floor).unwrap(), &format!("open-{index}"))
        .unwrap()
}

pub fn sensor(name: &str, measure: SensorMeasure, data_frequency: u32) -> Sensor {
    Sensor::new(
        name,
        measure,
        MeasurementUnit::Percent,
        SensorMeasureType::Other,
        data_frequency,
    )
}
