//! Identifiers, kinds, enumerations, criteria, and errors for Metamenth.
//!
//! This crate provides:
//! - [`EntityId`] - Generational entity identifiers and the typed ids built on it
//! - [`EntityRef`] - A reference to any entity in a building model
//! - [`Uid`] - Deterministic unique identifiers assigned at insertion
//! - [`EntityKind`] - Kind classification used for admission rules
//! - [`Criterion`] - Single-attribute match rules for queries
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod criteria;
pub mod entity;
pub mod error;
pub mod keyed;
pub mod kinds;
pub mod measure;
pub mod types;
pub mod uid;

pub use criteria::Criterion;
pub use entity::{
    ApplianceId, ComponentId, EntityId, EntityRef, MeterId, ScheduleId, SensorId, SpaceId,
    TypedId, ZoneId,
};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use keyed::{Keyed, UniqueKey};
pub use kinds::{ComponentKind, ConnectionRole, EntityKind, SpaceKind};
pub use measure::Measure;
pub use types::*;
pub use uid::{Uid, UidGenerator};
