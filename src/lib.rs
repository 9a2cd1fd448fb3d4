//! Metamenth - Building metadata model
//!
//! This crate re-exports all layers of the Metamenth system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: metamenth_query      - Visitor query engine, typed filters, structure search
//! Layer 2: metamenth_storage    - Building aggregate, arenas, relationship manager
//! Layer 1: metamenth_network    - Duct connection network
//! Layer 0: metamenth_foundation - Ids, kinds, enumerations, criteria, errors
//! ```

pub use metamenth_foundation as foundation;
pub use metamenth_network as network;
pub use metamenth_query as query;
pub use metamenth_storage as storage;
