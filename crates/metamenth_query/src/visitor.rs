//! Depth-first traversal of the building tree.
//!
//! [`walk`] owns the traversal order; a [`SpaceVisitor`] only decides what to
//! record at each node. The order is fixed:
//!
//! 1. the building itself
//! 2. each floor in stored order (or each registered zone, for zone-scoped searches)
//! 3. within a floor, every room and then every open space, in stored order
//!
//! A floor that fails its filter still has its children visited unless
//! [`SearchConfig::prune_unmatched_floors`] is set. A zone that fails its
//! filter is not descended into.

use metamenth_foundation::{SpaceId, SpaceKind, ZoneId};
use metamenth_storage::{Building, Space, Zone};
use tracing::trace;

use crate::config::{SearchConfig, SearchScope};

/// A node of the traversal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpaceNode {
    /// The root.
    Building,
    /// A floor.
    Floor(SpaceId),
    /// A zone from the registry.
    Zone(ZoneId),
    /// A room.
    Room(SpaceId),
    /// An open space.
    OpenSpace(SpaceId),
}

impl SpaceNode {
    /// Classifies a space id, or `None` if the space is not live.
    #[must_use]
    pub fn of_space(building: &Building, id: SpaceId) -> Option<Self> {
        Some(match building.space(id)?.kind() {
            SpaceKind::Floor => Self::Floor(id),
            SpaceKind::Room => Self::Room(id),
            SpaceKind::OpenSpace => Self::OpenSpace(id),
        })
    }

    /// Dispatches to the visitor hook for this node, then visits its children.
    ///
    /// Dead ids are skipped.
    pub fn accept<V>(self, building: &Building, config: &SearchConfig, visitor: &mut V)
    where
        V: SpaceVisitor + ?Sized,
    {
        trace!("Visiting {self:?}");
        match self {
            Self::Building => {
                visitor.visit_building(building);
                match config.scope {
                    SearchScope::Floors => {
                        for floor in building.floors() {
                            Self::Floor(floor).accept(building, config, visitor);
                        }
                    }
                    SearchScope::Zones => {
                        for zone in building.zones() {
                            Self::Zone(zone).accept(building, config, visitor);
                        }
                    }
                }
            }
            Self::Floor(id) => {
                let Some(floor) = building.space(id) else {
                    return;
                };
                let matched = visitor.visit_floor(building, id, floor);
                if !matched && config.prune_unmatched_floors {
                    trace!("Pruned floor {id:?}");
                    return;
                }
                for &room in building.rooms_of(id) {
                    Self::Room(room).accept(building, config, visitor);
                }
                for &open in building.open_spaces_of(id) {
                    Self::OpenSpace(open).accept(building, config, visitor);
                }
            }
            Self::Zone(id) => {
                let Some(zone) = building.zone(id) else {
                    return;
                };
                if !visitor.visit_zone(building, id, zone) {
                    return;
                }
                for &space in zone.spaces() {
                    if let Some(node) = Self::of_space(building, space) {
                        node.accept(building, config, visitor);
                    }
                }
            }
            Self::Room(id) => {
                if let Some(room) = building.space(id) {
                    visitor.visit_room(building, id, room);
                }
            }
            Self::OpenSpace(id) => {
                if let Some(open) = building.space(id) {
                    visitor.visit_open_space(building, id, open);
                }
            }
        }
    }
}

/// Per-node hooks called by [`walk`].
///
/// Every hook has a no-op default, so a visitor implements only the levels it
/// records.
pub trait SpaceVisitor {
    /// Called once, before any floor or zone.
    fn visit_building(&mut self, _building: &Building) {}

    /// Called for each floor. Returns whether the floor matched.
    fn visit_floor(&mut self, _building: &Building, _id: SpaceId, _floor: &Space) -> bool {
        true
    }

    /// Called for each zone in zone-scoped traversals. Returning false skips its spaces.
    fn visit_zone(&mut self, _building: &Building, _id: ZoneId, _zone: &Zone) -> bool {
        true
    }

    /// Called for each room.
    fn visit_room(&mut self, _building: &Building, _id: SpaceId, _room: &Space) {}

    /// Called for each open space.
    fn visit_open_space(&mut self, _building: &Building, _id: SpaceId, _open_space: &Space) {}
}

/// Runs `visitor` over `building`, starting at the root.
pub fn walk<V>(building: &Building, config: &SearchConfig, visitor: &mut V)
where
    V: SpaceVisitor + ?Sized,
{
    SpaceNode::Building.accept(building, config, visitor);
}
