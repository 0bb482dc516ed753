//! Pet instances, collections, friend seeking, and tick driving for Menagerie.
//!
//! This crate provides:
//! - [`PetInstance`] - The capability surface the engine drives
//! - [`Pet`] / [`create_pet`] - The generic archetype-configured pet
//! - [`PetRecord`] - A pet bound to its presentation handles
//! - [`PetCollection`] - Membership, lookup, and friend seeking
//! - [`TickDriver`] - Headless, seeded frame-by-frame driving
//!
//! Everything here is single-threaded and synchronous. Callbacks made during
//! [`PetCollection::seek_new_friends`] only ever see the two instances
//! involved, so they cannot reach back into the collection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod config;
pub mod instance;
pub mod pet;
pub mod presentation;
pub mod record;
pub mod tick;

pub use collection::{Friendship, PetCollection, PetId};
pub use config::{DriverConfig, FriendshipConfig};
pub use instance::{FrameOutcome, PetInstance, Stage, leading_edge_inside};
pub use pet::{Pet, SpawnOptions, SpeechBubble, create_pet};
pub use presentation::{Handles, HeadlessNode, Node};
pub use record::PetRecord;
pub use tick::{TickDriver, TickReport, Transition};
