//! Integration tests for Layer 3: Query
//!
//! Tests for traversal order, criteria semantics, and each concrete search.

mod common;
mod components;
mod sensors;
mod spaces;
mod structure;
