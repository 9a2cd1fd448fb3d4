//! Integration tests for direct attribute search

use metamenth_foundation::{
    ComponentKind, ConnectionRole, Criterion, DuctType, EntityRef, HvacType, MeasurementUnit,
    MeterType, RoomType, ZoneType,
};
use metamenth_query::{ComponentFilter, FloorFilter, MeterFilter, RoomFilter, StructureSearch, ZoneFilter};
use metamenth_storage::{ComponentDetails, Container, HvacComponent, Meter, Room, Schedule, Zone};

use crate::common::{building, open_space, room};

#[test]
fn floors_by_number_list() {
    let b = building(4, 1, 0);
    let found = StructureSearch::new(&b).search_floors(&FloorFilter::new().with_number(vec![2, 4]));
    assert_eq!(found, vec![b.floor_by_number(2).unwrap(), b.floor_by_number(4).unwrap()]);
}

#[test]
fn rooms_added_later_are_searchable() {
    let mut b = building(2, 1, 0);
    let floor = b.floor_by_number(2).unwrap();
    let area = b.space(floor).unwrap().area;
    let lab = b.add_room(floor, Room::new("lab", area, RoomType::Office)).unwrap().unwrap();

    let search = StructureSearch::new(&b);
    let offices = search.search_rooms(None, &RoomFilter::new().with_room_type(RoomType::Office));
    assert_eq!(offices, vec![lab]);
    let first_floor = b.floor_by_number(1).unwrap();
    assert!(search
        .search_rooms(Some(first_floor), &RoomFilter::new().with_room_type(RoomType::Office))
        .is_empty());
}

#[test]
fn rooms_by_zone_name() {
    let mut b = building(2, 2, 0);
    let zone = b.register_zone(Zone::new("east", ZoneType::Lighting, HvacType::None));
    b.add_zone_to_space(room(&b, 1, 1), zone).unwrap();
    b.add_zone_to_space(room(&b, 2, 0), zone).unwrap();

    let found = StructureSearch::new(&b).search_rooms(None, &RoomFilter::new().with_zones("east"));
    assert_eq!(found, vec![room(&b, 1, 1), room(&b, 2, 0)]);
}

#[test]
fn zones_with_or_and_and() {
    let mut b = building(1, 1, 0);
    let north = b.register_zone(Zone::new("north", ZoneType::Hvac, HvacType::Perimeter));
    let core = b.register_zone(Zone::new("core", ZoneType::Hvac, HvacType::Interior));
    b.register_zone(Zone::new("lights", ZoneType::Lighting, HvacType::None));

    let search = StructureSearch::new(&b);
    let hvac = search.search_zones(&ZoneFilter::new().with_zone_type(ZoneType::Hvac));
    assert_eq!(hvac, vec![north, core]);
    let interior = search.search_zones(
        &ZoneFilter::new()
            .with_zone_type(ZoneType::Hvac)
            .with_hvac_type(HvacType::Interior),
    );
    assert_eq!(interior, vec![core]);
}

#[test]
fn meters_on_building_container() {
    let mut b = building(1, 1, 0);
    let water = b
        .add_meter(
            Container::Building,
            Meter::new("street", "Kamstrup", 3600.0, MeasurementUnit::CubicMeters, MeterType::Water),
        )
        .unwrap()
        .unwrap();
    let search = StructureSearch::new(&b);
    assert_eq!(search.meters_by_type(Container::Building, MeterType::Water).unwrap(), vec![water]);
    assert!(search
        .search_meters(Container::Building, &MeterFilter::new().with_manufacturer("Itron"))
        .unwrap()
        .is_empty());
}

#[test]
fn schedules_by_name_list() {
    let mut b = building(1, 1, 0);
    let r = room(&b, 1, 0);
    let day = b
        .add_schedule(r, Schedule::new("day", "2024-01-01T08:00", "2024-01-01T18:00"))
        .unwrap()
        .unwrap();
    b.add_schedule(r, Schedule::new("night", "2024-01-01T18:00", "2024-01-02T08:00"))
        .unwrap();
    let weekend = b
        .add_schedule(r, Schedule::new("weekend", "2024-01-06T00:00", "2024-01-08T00:00"))
        .unwrap()
        .unwrap();

    let names: Criterion<String> = vec!["day".to_string(), "weekend".to_string()].into();
    let found = StructureSearch::new(&b).search_schedules(r.into(), &names).unwrap();
    assert_eq!(found, vec![day, weekend]);
}

#[test]
fn duct_views_by_kind() {
    let mut b = building(1, 1, 1);
    let r = room(&b, 1, 0);
    let duct = b
        .add_hvac_component(r, HvacComponent::duct("supply", DuctType::Air))
        .unwrap()
        .unwrap();
    let fan = b
        .add_hvac_component(r, HvacComponent::new("fan", ComponentDetails::Fan { variable_speed: false }))
        .unwrap()
        .unwrap();
    b.connect_duct(duct, ConnectionRole::Source, fan).unwrap();
    b.connect_duct(duct, ConnectionRole::Destination, open_space(&b, 1, 0)).unwrap();

    let search = StructureSearch::new(&b);
    let fans = search
        .duct_sources(duct, &ComponentFilter::of(ComponentKind::Fan))
        .unwrap();
    assert_eq!(fans.len(), 1);
    assert_eq!(fans[0].entity, EntityRef::Component(fan));

    let spaces = search.duct_destinations(duct, &ComponentFilter::new()).unwrap();
    assert_eq!(spaces[0].entity, EntityRef::Space(open_space(&b, 1, 0)));
    assert!(search
        .duct_destinations(duct, &ComponentFilter::of(ComponentKind::Fan))
        .unwrap()
        .is_empty());
}

#[test]
fn duct_view_on_non_duct_fails() {
    let mut b = building(1, 1, 0);
    let fan = b
        .add_hvac_component(room(&b, 1, 0), HvacComponent::new("fan", ComponentDetails::Fan { variable_speed: true }))
        .unwrap()
        .unwrap();
    assert!(StructureSearch::new(&b).duct_sources(fan, &ComponentFilter::new()).is_err());
}
