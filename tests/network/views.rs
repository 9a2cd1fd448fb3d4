//! Integration tests for filtered connection views

use metamenth_foundation::{
    ComponentId, ComponentKind, ConnectionRole, Criterion, EntityId, EntityKind, SpaceId,
    SpaceKind,
};
use metamenth_network::{DuctConnection, DuctNode, KindFilter, NodeFilter};

fn connection() -> DuctConnection {
    let mut conn = DuctConnection::new();
    let nodes = [
        (0, EntityKind::Component(ComponentKind::Chiller)),
        (1, EntityKind::Component(ComponentKind::Boiler)),
        (2, EntityKind::Component(ComponentKind::Duct)),
    ];
    for (index, kind) in nodes {
        conn.add_entity(
            ConnectionRole::Source,
            DuctNode::new(ComponentId(EntityId::new(index, 1)).into(), kind),
        )
        .unwrap();
    }
    conn.add_entity(
        ConnectionRole::Destination,
        DuctNode::new(SpaceId(EntityId::new(0, 1)).into(), EntityKind::Space(SpaceKind::Floor)),
    )
    .unwrap();
    conn
}

#[test]
fn no_filter_returns_everything_in_order() {
    let conn = connection();
    let kinds: Vec<_> = conn.source_entities(None).into_iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Component(ComponentKind::Chiller),
            EntityKind::Component(ComponentKind::Boiler),
            EntityKind::Component(ComponentKind::Duct),
        ]
    );
}

#[test]
fn kind_filter_selects_one_kind() {
    let conn = connection();
    let boilers = KindFilter::of(EntityKind::Component(ComponentKind::Boiler));
    assert_eq!(conn.source_entities(Some(&boilers)).len(), 1);
}

#[test]
fn kind_filter_with_several_kinds() {
    let conn = connection();
    let plant = KindFilter {
        kind: Criterion::OneOf(vec![
            EntityKind::Component(ComponentKind::Boiler),
            EntityKind::Component(ComponentKind::Chiller),
        ]),
    };
    assert_eq!(conn.source_entities(Some(&plant)).len(), 2);
}

#[test]
fn closures_are_filters() {
    let conn = connection();
    let ducts = |node: &DuctNode| node.is_duct();
    let found = conn.source_entities(Some(&ducts as &dyn NodeFilter));
    assert_eq!(found.len(), 1);
    assert!(found[0].is_duct());
}

#[test]
fn views_do_not_mutate() {
    let conn = connection();
    let before = conn.clone();
    let _ = conn.destination_entities(Some(&KindFilter::of(EntityKind::Zone)));
    assert_eq!(conn, before);
    assert!(!conn.is_loop());
}
