//! Integration tests for Layer 2: Storage
//!
//! Tests for the floor tree, the zone registry, sub-entity containers, ducts, and snapshots.

mod common;
mod snapshots;
