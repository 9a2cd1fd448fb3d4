//! Building aggregate and relationship manager for Metamenth.
//!
//! This crate provides:
//! - [`Arena`] - Generational storage for every record kind
//! - [`Building`] - The floor tree, zone registry and sub-entity containers
//! - Relationship operations on [`Building`] that keep both sides of zone
//!   membership and adjacency in step
//! - Duct operations on [`Building`] that connect ducts to components and spaces
//!
//! All records live in arenas owned by the building; everything else refers to
//! them by typed id. Cloning a [`Building`] is cheap and yields an independent
//! snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod building;
pub mod component;
pub mod config;
pub mod contents;
pub mod duct;
pub mod equipment;
pub mod relationship;
pub mod space;
pub mod zone;

pub use arena::Arena;
pub use building::{Building, BuildingInfo};
pub use component::{ComponentDetails, Duct, HvacComponent};
pub use config::ModelConfig;
pub use contents::{Container, ContainerKind, SubEntities, SubEntity, SubEntityKind};
pub use equipment::{Appliance, Meter, Schedule, Sensor};
pub use space::{FloorDetails, FloorPlan, OpenSpace, OpenSpaceDetails, Room, RoomDetails, Space, SpaceDetails};
pub use zone::Zone;

pub use metamenth_foundation::{
    ApplianceId, ComponentId, EntityRef, MeterId, ScheduleId, SensorId, SpaceId, ZoneId,
};
pub use metamenth_network::{DuctConnection, DuctNode, RoleConflictPolicy};
