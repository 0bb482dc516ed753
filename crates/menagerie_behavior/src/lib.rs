//! State graphs, archetype tables, colors, and names for Menagerie.
//!
//! This crate provides:
//! - [`StateGraph`] - Legal behavior transitions and validation
//! - [`Archetype`] - The per-species configuration table
//! - [`normalize_color`] / [`available_colors`] - Palette handling
//! - [`random_name`] - Name pool lookup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod archetype;
pub mod graph;
pub mod names;

pub use archetype::{Archetype, archetype, available_colors, normalize_color};
pub use graph::{StateGraph, is_valid_transition};
pub use names::{name_pool, random_name};
