//! Integration tests for space traversal

use metamenth_foundation::{FloorType, HvacType, RoomType, ZoneType};
use metamenth_query::{
    FloorFilter, OpenSpaceFilter, RoomFilter, SearchConfig, SpaceCriteria, SpaceSearch,
    ZoneFilter,
};
use metamenth_storage::Zone;
use proptest::prelude::*;

use crate::common::{building, open_space, room};

#[test]
fn two_floors_one_room_one_open_space_yields_six() {
    let b = building(2, 1, 1);
    assert_eq!(SpaceSearch::new(SpaceCriteria::new()).run(&b).len(), 6);
}

#[test]
fn results_follow_traversal_order() {
    let b = building(2, 2, 1);
    let results = SpaceSearch::new(SpaceCriteria::new()).run(&b);
    let f1 = b.floor_by_number(1).unwrap();
    let f2 = b.floor_by_number(2).unwrap();
    assert_eq!(
        results.spaces(),
        vec![
            f1,
            room(&b, 1, 0),
            room(&b, 1, 1),
            open_space(&b, 1, 0),
            f2,
            room(&b, 2, 0),
            room(&b, 2, 1),
            open_space(&b, 2, 0),
        ]
    );
}

#[test]
fn floor_type_criterion() {
    let b = building(2, 1, 0);
    let criteria = SpaceCriteria::new()
        .with_floor(FloorFilter::new().with_floor_type(FloorType::Basement))
        .with_room(RoomFilter::new().with_room_type(RoomType::Office));
    assert!(SpaceSearch::new(criteria).run(&b).is_empty());
}

#[test]
fn list_of_names_is_or() {
    let b = building(1, 3, 2);
    let criteria = SpaceCriteria::new()
        .with_room(RoomFilter::new().with_name(vec!["room-0".to_string(), "room-2".to_string()]))
        .with_open_space(OpenSpaceFilter::new().with_name("nothing"));
    let results = SpaceSearch::new(criteria)
        .with_config(SearchConfig::new().with_include_floors(false))
        .run(&b);
    assert_eq!(results.spaces(), vec![room(&b, 1, 0), room(&b, 1, 2)]);
}

#[test]
fn zone_scoped_search_walks_matching_zones_only() {
    let mut b = building(2, 1, 1);
    let hvac = b
        .add_new_zone_to_space(room(&b, 2, 0), Zone::new("HVAC-1", ZoneType::Hvac, HvacType::Perimeter))
        .unwrap();
    b.add_zone_to_space(open_space(&b, 1, 0), hvac).unwrap();
    b.add_new_zone_to_space(room(&b, 1, 0), Zone::new("CCTV", ZoneType::Security, HvacType::None))
        .unwrap();

    let criteria = SpaceCriteria::new().with_zone(ZoneFilter::new().with_hvac_type(HvacType::Perimeter));
    let results = SpaceSearch::new(criteria)
        .with_config(SearchConfig::zones())
        .run(&b);
    assert_eq!(results.spaces(), vec![room(&b, 2, 0), open_space(&b, 1, 0)]);
}

proptest! {
    #[test]
    fn empty_criteria_visit_every_space(floors in 1i32..5, rooms in 0usize..4, opens in 0usize..4) {
        prop_assume!(rooms + opens > 0);
        let b = building(floors, rooms, opens);
        let floors = usize::try_from(floors).unwrap();
        let expected = floors + floors * (rooms + opens);
        prop_assert_eq!(SpaceSearch::new(SpaceCriteria::new()).run(&b).len(), expected);
    }
}
