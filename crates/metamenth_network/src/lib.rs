//! Duct connection network for Metamenth.
//!
//! A [`DuctConnection`] belongs to exactly one duct and records which entities
//! sit upstream ([`ConnectionRole::Source`]), downstream
//! ([`ConnectionRole::Destination`]) or along the duct
//! ([`ConnectionRole::Inside`]). Connections only describe one hop; multi-hop
//! topologies are walked by callers from duct to duct.
//!
//! [`ConnectionRole::Source`]: metamenth_foundation::ConnectionRole::Source
//! [`ConnectionRole::Destination`]: metamenth_foundation::ConnectionRole::Destination
//! [`ConnectionRole::Inside`]: metamenth_foundation::ConnectionRole::Inside

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connection;
pub mod filter;
pub mod node;

pub use connection::{DuctConnection, RoleConflictPolicy};
pub use filter::{KindFilter, NodeFilter};
pub use node::DuctNode;
