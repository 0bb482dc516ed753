//! Display name pools.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::archetype::archetype;

/// Names given to dogs.
pub const DOG_NAMES: &[&str] = &[
    "Bella", "Charlie", "Max", "Molly", "Coco", "Buddy", "Ruby", "Oscar", "Lucy", "Bailey",
    "Milo", "Daisy", "Archie", "Ollie", "Rosie", "Lola", "Frankie", "Roxy", "Poppy", "Luna",
    "Jack", "Millie", "Teddy", "Cooper", "Bear", "Rocky", "Alfie", "Hugo", "Bonnie", "Pepper",
    "Rex", "Biscuit",
];

/// Names given to rats.
pub const RAT_NAMES: &[&str] = &[
    "Remy", "Splinter", "Rizzo", "Whiskers", "Nibbles", "Pip", "Squeaky", "Templeton",
    "Ratatouille", "Scabbers", "Cheddar", "Gouda",
];

/// Names given to pandas. Also the fallback pool for unknown archetypes.
pub const PANDA_NAMES: &[&str] = &[
    "Bao", "Mei", "Lin", "Ping", "Bamboo", "Dumpling", "Mochi", "Panpan", "Xiao", "Yuan",
];

/// Names given to pumpkins.
pub const PUMPY_NAMES: &[&str] = &["Pumpy", "Pumpo", "Pumpster", "Pumpkin", "Pumps"];

/// Name returned when the resolved pool is empty.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// Returns the name pool for an archetype identifier.
///
/// Unknown identifiers resolve to [`PANDA_NAMES`].
#[must_use]
pub fn name_pool(archetype_id: &str) -> &'static [&'static str] {
    archetype(archetype_id).map_or(PANDA_NAMES, |a| a.names)
}

/// Picks a display name for an archetype identifier.
///
/// Unknown identifiers draw from the panda pool; an empty pool yields
/// [`PLACEHOLDER_NAME`].
pub fn random_name<R: Rng + ?Sized>(archetype_id: &str, rng: &mut R) -> &'static str {
    pick_name(name_pool(archetype_id), rng)
}

/// Picks a name uniformly from `pool`, or [`PLACEHOLDER_NAME`] if it is empty.
pub fn pick_name<R: Rng + ?Sized>(pool: &[&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or(PLACEHOLDER_NAME)
}
