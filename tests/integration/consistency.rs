//! Model-wide invariants under arbitrary edits

use metamenth::foundation::{
    BuildingType, ConnectionRole, DuctType, FloorType, HvacType, Measure, OpenSpaceType, RoomType,
    SpaceId, ZoneType,
};
use metamenth::query::{SpaceCriteria, SpaceSearch};
use metamenth::storage::{
    Building, BuildingInfo, ComponentId, FloorPlan, HvacComponent, ModelConfig, OpenSpace, Room,
    Zone,
};
use proptest::prelude::*;

const ZONES: [&str; 3] = ["north", "south", "core"];

#[derive(Clone, Debug)]
enum Op {
    Link(usize, usize),
    Unlink(usize, usize),
    DropZone(usize),
    Connect(usize, usize),
    RemoveRoom(usize),
    RemoveFloor(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..9usize, 0..3usize).prop_map(|(s, z)| Op::Link(s, z)),
        1 => (0..9usize, 0..3usize).prop_map(|(s, z)| Op::Unlink(s, z)),
        1 => (0..3usize).prop_map(Op::DropZone),
        2 => (0..3usize, 0..9usize).prop_map(|(d, s)| Op::Connect(d, s)),
        1 => (0..9usize).prop_map(Op::RemoveRoom),
        1 => (1..=3i32).prop_map(Op::RemoveFloor),
    ]
}

/// Three floors, each with two rooms and a shaft holding one duct.
fn model() -> (Building, Vec<SpaceId>, Vec<ComponentId>) {
    let area = Measure::area(30.0).unwrap();
    let mut b = Building::new(
        BuildingInfo::new(1990, BuildingType::Residential, "12 Rue Peel"),
        ModelConfig::new(3),
    );
    let mut spaces = Vec::new();
    let mut ducts = Vec::new();
    for number in 1..=3 {
        let floor = b
            .add_floor(
                FloorPlan::new(number, area, FloorType::Regular)
                    .with_room(Room::new("a", area, RoomType::Bedroom))
                    .with_room(Room::new("b", area, RoomType::Kitchen))
                    .with_open_space(OpenSpace::new("shaft", area, OpenSpaceType::Other)),
            )
            .unwrap()
            .unwrap();
        spaces.push(b.room_by_name(floor, "a").unwrap());
        spaces.push(b.room_by_name(floor, "b").unwrap());
        let shaft = b.open_space_by_name(floor, "shaft").unwrap();
        spaces.push(shaft);
        let duct = b
            .add_hvac_component(shaft, HvacComponent::duct(format!("riser-{number}"), DuctType::Air))
            .unwrap()
            .unwrap();
        ducts.push(duct);
    }
    (b, spaces, ducts)
}

fn apply(b: &mut Building, spaces: &[SpaceId], ducts: &[ComponentId], op: &Op) {
    match *op {
        Op::Link(s, z) => {
            if b.space(spaces[s]).is_some() {
                let zone = Zone::new(ZONES[z], ZoneType::Hvac, HvacType::Interior);
                b.add_new_zone_to_space(spaces[s], zone).unwrap();
            }
        }
        Op::Unlink(s, z) => {
            if let Some(zone) = b.zone_by_name(ZONES[z]) {
                let _ = b.remove_zone_from_space(spaces[s], zone);
            }
        }
        Op::DropZone(z) => {
            if let Some(zone) = b.zone_by_name(ZONES[z]) {
                assert!(b.remove_zone(zone).unwrap());
            }
        }
        Op::Connect(d, s) => {
            if b.component(ducts[d]).is_some() && b.space(spaces[s]).is_some() {
                b.connect_duct(ducts[d], ConnectionRole::Destination, spaces[s])
                    .unwrap();
            }
        }
        Op::RemoveRoom(s) => {
            // Every third space is a shaft.
            if s % 3 != 2 {
                b.remove_room(spaces[s]).unwrap();
            }
        }
        Op::RemoveFloor(number) => {
            if let Some(floor) = b.floor_by_number(number) {
                assert!(b.remove_floor(floor).unwrap());
            }
        }
    }
}

proptest! {
    #[test]
    fn relationships_stay_consistent(ops in prop::collection::vec(op(), 0..60)) {
        let (mut b, spaces, ducts) = model();
        for op in &ops {
            apply(&mut b, &spaces, &ducts, op);
        }

        for zone in b.zones() {
            for &space in b.spaces_of_zone(zone) {
                prop_assert!(b.space(space).is_some());
                prop_assert!(b.zones_of_space(space).contains(&zone));
            }
        }
        for &space in &spaces {
            for &zone in b.zones_of_space(space) {
                prop_assert!(b.spaces_of_zone(zone).contains(&space));
            }
        }

        for (_, duct) in b.ducts() {
            let Some(connection) = duct.connection() else { continue };
            for role in [ConnectionRole::Source, ConnectionRole::Destination, ConnectionRole::Inside] {
                for node in connection.entities(role) {
                    prop_assert!(b.kind_of(node.entity).is_ok());
                }
            }
        }

        for space in SpaceSearch::new(SpaceCriteria::new()).run(&b).spaces() {
            prop_assert!(b.space(space).is_some());
        }
    }

    #[test]
    fn snapshots_are_unaffected_by_later_edits(ops in prop::collection::vec(op(), 1..30)) {
        let (mut b, spaces, ducts) = model();
        let before = b.snapshot();
        let found = SpaceSearch::new(SpaceCriteria::new()).run(&before);

        for op in &ops {
            apply(&mut b, &spaces, &ducts, op);
        }

        prop_assert_eq!(SpaceSearch::new(SpaceCriteria::new()).run(&before), found);
        prop_assert_eq!(before.zone_count(), 0);
    }
}
