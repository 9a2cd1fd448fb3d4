//! Integration tests for sensor search criteria

use metamenth_foundation::{HvacType, SensorMeasure, UniqueKey, ZoneType};
use metamenth_query::{RoomFilter, SearchConfig, SensorFilter, SensorSearch, SpaceCriteria};
use metamenth_storage::{ComponentDetails, HvacComponent, Sensor, Zone};

use crate::common::{building, open_space, room, sensor};

#[test]
fn measure_list_returns_both_sensors() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    b.add_transducer(r, sensor("temp", SensorMeasure::Temperature, 900)).unwrap();
    b.add_transducer(r, sensor("occ", SensorMeasure::Occupancy, 300)).unwrap();

    let filter = SensorFilter::new().with_measure(vec![SensorMeasure::Temperature, SensorMeasure::Occupancy]);
    assert_eq!(SensorSearch::new(SpaceCriteria::new(), filter).run(&b).len(), 2);
}

#[test]
fn measure_and_frequency_returns_one_sensor() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    let temp = b
        .add_transducer(r, sensor("temp", SensorMeasure::Temperature, 900))
        .unwrap()
        .unwrap();
    b.add_transducer(r, sensor("occ", SensorMeasure::Occupancy, 300)).unwrap();

    let filter = SensorFilter::new()
        .with_measure(SensorMeasure::Temperature)
        .with_data_frequency(900);
    assert_eq!(SensorSearch::new(SpaceCriteria::new(), filter).run(&b).sensors(), vec![temp]);
}

#[test]
fn no_match_is_empty_not_an_error() {
    let mut b = building(1, 1, 0);
    b.add_transducer(room(&b, 1, 0), sensor("t", SensorMeasure::Temperature, 60)).unwrap();
    let filter = SensorFilter::new().with_measure(SensorMeasure::Smoke);
    assert!(SensorSearch::new(SpaceCriteria::new(), filter).run(&b).is_empty());
}

#[test]
fn rooms_before_open_spaces_per_floor() {
    let mut b = building(2, 1, 1);
    let mut expected = Vec::new();
    for floor in 1..=2 {
        for space in [room(&b, floor, 0), open_space(&b, floor, 0)] {
            let id = b
                .add_transducer(space, sensor("noise", SensorMeasure::Noise, 60))
                .unwrap()
                .unwrap();
            expected.push(id);
        }
    }
    let results = SensorSearch::new(SpaceCriteria::new(), SensorFilter::new()).run(&b);
    assert_eq!(results.sensors(), expected);
}

#[test]
fn sensors_in_zone_rooms() {
    let mut b = building(1, 2, 0);
    let zoned = room(&b, 1, 1);
    b.add_new_zone_to_space(zoned, Zone::new("LAB", ZoneType::Hvac, HvacType::Interior))
        .unwrap();
    b.add_transducer(room(&b, 1, 0), sensor("a", SensorMeasure::Humidity, 60)).unwrap();
    let wanted = b.add_transducer(zoned, sensor("b", SensorMeasure::Humidity, 60)).unwrap().unwrap();

    let criteria = SpaceCriteria::new().with_room(RoomFilter::new().with_zones("LAB"));
    let results = SensorSearch::new(criteria, SensorFilter::new())
        .with_config(SearchConfig::new())
        .run(&b);
    assert_eq!(results.sensors(), vec![wanted]);
}

#[test]
fn shared_sensor_appears_once_per_path() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    let s = b.add_transducer(r, sensor("t", SensorMeasure::Temperature, 60)).unwrap().unwrap();
    let ahu = b
        .add_hvac_component(r, HvacComponent::new("ahu-fan", ComponentDetails::Fan { variable_speed: true }))
        .unwrap()
        .unwrap();
    b.attach_sub_entity::<Sensor>(ahu.into(), s, UniqueKey::Name).unwrap();

    let results = SensorSearch::new(SpaceCriteria::new(), SensorFilter::new()).run(&b);
    assert_eq!(results.sensors(), vec![s, s]);
}
