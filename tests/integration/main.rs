//! Cross-layer integration tests
//!
//! Builds complete buildings through the storage layer and checks that the
//! duct network, the relationship manager and the query engine agree.

mod consistency;
mod scenario;
