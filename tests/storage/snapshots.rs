//! Integration tests for building snapshots and deterministic uids

use metamenth_foundation::{HvacType, ZoneType};
use metamenth_storage::{Building, ModelConfig, Zone};

use crate::common::{office_building, room, temperature};

#[test]
fn snapshot_is_independent() {
    let mut b = office_building(ModelConfig::new(1));
    let before = b.snapshot();
    let r = room(&b, 1);
    b.add_transducer(r, temperature("T")).unwrap();
    b.register_zone(Zone::new("Z", ZoneType::Hvac, HvacType::Interior));

    assert!(before.contents_of(r.into()).unwrap().transducers().is_empty());
    assert_eq!(before.zone_count(), 0);
    assert_eq!(b.zone_count(), 1);
}

#[test]
fn same_seed_same_uids() {
    let a = office_building(ModelConfig::new(42));
    let b = office_building(ModelConfig::new(42));
    let c = office_building(ModelConfig::new(43));
    let uid = |building: &Building| building.space(room(building, 2)).unwrap().uid;
    assert_eq!(uid(&a), uid(&b));
    assert_ne!(uid(&a), uid(&c));
    assert_eq!(a.uid(), b.uid());
}
