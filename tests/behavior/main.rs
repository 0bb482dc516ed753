//! Integration tests for Layer 1: Behavior
//!
//! Tests for state graphs, the archetype table, palettes, and name pools.

mod archetypes;
mod graphs;
