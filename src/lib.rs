//! Menagerie - Behavior state machines and friend pairing for autonomous pets
//!
//! This crate re-exports all layers of the Menagerie system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: menagerie_engine     — Pets, records, collections, friend seeking, ticks
//! Layer 1: menagerie_behavior   — State graphs, archetype table, colors, names
//! Layer 0: menagerie_foundation — Core types (State, PetType, PetColor, Error)
//! ```

pub use menagerie_behavior as behavior;
pub use menagerie_engine as engine;
pub use menagerie_foundation as foundation;
