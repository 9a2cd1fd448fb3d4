//! Visitor query engine for Metamenth.
//!
//! This crate provides:
//! - [`walk`] and [`SpaceVisitor`] - Depth-first traversal of floors, zones, rooms and open spaces
//! - Typed filters ([`SensorFilter`], [`RoomFilter`], ...) combining criteria with AND, lists with OR
//! - [`SpaceSearch`], [`SensorSearch`], [`MeterSearch`], [`HvacComponentSearch`] and
//!   [`ApplianceSearch`] - Visitors that collect matches into a [`ResultSet`]
//! - [`StructureSearch`] - Direct attribute search over one level and duct network views
//!
//! Searches never fail on a lookup miss; they return an empty [`ResultSet`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod filters;
pub mod results;
pub mod search;
pub mod structure;
pub mod visitor;

pub use config::{SearchConfig, SearchScope};
pub use filters::{
    ApplianceFilter, ComponentFilter, FloorFilter, MeterFilter, OpenSpaceFilter, RoomFilter,
    SensorFilter, ZoneFilter,
};
pub use results::{Found, ResultSet};
pub use search::{
    ApplianceSearch, HvacComponentSearch, MeterSearch, SensorSearch, SpaceCriteria, SpaceSearch,
};
pub use structure::StructureSearch;
pub use visitor::{SpaceNode, SpaceVisitor, walk};
