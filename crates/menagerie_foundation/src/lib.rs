//! Core types and errors for Menagerie.
//!
//! This crate provides:
//! - [`State`] - Behavior state identifiers
//! - [`PetType`], [`PetColor`], [`PetSize`], [`PetSpeed`] - Pet descriptors
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod state;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, InvalidPetReason, Result};
pub use state::State;
pub use types::{PetColor, PetSize, PetSpeed, PetType};
