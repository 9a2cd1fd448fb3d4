//! Integration tests for Layer 1: Duct network
//!
//! Tests for duct connection admission rules, role exclusivity, and filtered views.

mod views;
