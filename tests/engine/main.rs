//! Integration tests for Layer 2: Engine
//!
//! Tests for the pet factory, records, collections, and friend seeking.

mod factory;
