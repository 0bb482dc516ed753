//! The archetype table: per-species graphs, palettes, speeds, and names.
//!
//! Each [`PetType`] maps to exactly one immutable [`Archetype`] record. The
//! table is built on first use and lives for the rest of the process.

use std::sync::LazyLock;

use menagerie_foundation::{PetColor, PetSpeed, PetType, Result, State};

use crate::graph::StateGraph;
use crate::names::{DOG_NAMES, PANDA_NAMES, PUMPY_NAMES, RAT_NAMES};

/// Static configuration of one pet species.
#[derive(Clone, Debug)]
pub struct Archetype {
    /// The archetype this record describes.
    pub pet_type: PetType,
    /// Label used for asset lookup.
    pub label: &'static str,
    /// Movement speed class. Fixed per archetype.
    pub speed: PetSpeed,
    /// Allowed colors. Never empty; index 0 is the default.
    pub colors: &'static [PetColor],
    /// Pool of display names.
    pub names: &'static [&'static str],
    /// Emoji shown in listings.
    pub emoji: &'static str,
    /// Greeting shown when the pet says hello.
    pub greeting: &'static str,
    /// Legal behavior transitions.
    pub graph: StateGraph,
}

static ARCHETYPES: LazyLock<[Archetype; 4]> = LazyLock::new(|| [dog(), rat(), panda(), pumpy()]);

impl Archetype {
    /// Returns the configuration record for `pet_type`.
    #[must_use]
    pub fn of(pet_type: PetType) -> &'static Archetype {
        let index = match pet_type {
            PetType::Dog => 0,
            PetType::Rat => 1,
            PetType::Panda => 2,
            PetType::Pumpy => 3,
        };
        &ARCHETYPES[index]
    }

    /// Returns the canonical default color.
    #[must_use]
    pub fn default_color(&self) -> PetColor {
        self.colors[0]
    }
}

/// Looks up an archetype by identifier.
///
/// # Errors
/// Returns an invalid pet error ("Pet type doesn't exist") for unknown ids.
pub fn archetype(id: &str) -> Result<&'static Archetype> {
    Ok(Archetype::of(id.parse()?))
}

/// Returns the ordered palette of `pet_type`.
///
/// To look up a palette by archetype id, use `archetype(id)?.colors`, which
/// fails with an invalid pet error for unknown ids.
#[must_use]
pub fn available_colors(pet_type: PetType) -> &'static [PetColor] {
    Archetype::of(pet_type).colors
}

/// Constrains `color` to the palette of `pet_type`.
///
/// Colors in the palette are returned unchanged; anything else becomes the
/// palette's first entry.
#[must_use]
pub fn normalize_color(color: PetColor, pet_type: PetType) -> PetColor {
    let archetype = Archetype::of(pet_type);
    if archetype.colors.contains(&color) {
        color
    } else {
        archetype.default_color()
    }
}

/// Walking and running loops shared by every ground-dwelling archetype.
fn ground_loops(graph: StateGraph, rest: &[State]) -> StateGraph {
    let mut rightward = rest.to_vec();
    rightward.extend([State::WalkLeft, State::RunLeft]);
    let mut leftward = rest.to_vec();
    leftward.extend([State::WalkRight, State::RunRight]);

    graph
        .with_transitions(State::WalkRight, &rightward)
        .with_transitions(State::RunRight, &rightward)
        .with_transitions(State::WalkLeft, &leftward)
        .with_transitions(State::RunLeft, &leftward)
}

fn dog() -> Archetype {
    let graph = StateGraph::new(State::SitIdle)
        .with_transitions(State::SitIdle, &[State::WalkRight, State::RunRight, State::Lie])
        .with_transitions(State::Lie, &[State::WalkRight, State::RunRight])
        .with_transitions(State::Chase, &[State::IdleWithBall])
        .with_transitions(
            State::IdleWithBall,
            &[State::WalkRight, State::WalkLeft, State::RunLeft, State::RunRight],
        );

    Archetype {
        pet_type: PetType::Dog,
        label: "dog",
        speed: PetSpeed::Normal,
        colors: &[
            PetColor::Black,
            PetColor::Brown,
            PetColor::White,
            PetColor::Red,
            PetColor::Akita,
        ],
        names: DOG_NAMES,
        emoji: "🐶",
        greeting: "Woof! I am a dog!",
        graph: ground_loops(graph, &[State::SitIdle, State::Lie]),
    }
}

fn rat() -> Archetype {
    let graph = StateGraph::new(State::SitIdle)
        .with_transitions(State::SitIdle, &[State::WalkRight, State::RunRight])
        .with_transitions(State::Chase, &[State::IdleWithBall])
        .with_transitions(
            State::IdleWithBall,
            &[State::WalkRight, State::WalkLeft, State::RunLeft, State::RunRight],
        );

    Archetype {
        pet_type: PetType::Rat,
        label: "rat",
        speed: PetSpeed::Normal,
        colors: &[PetColor::Gray, PetColor::White, PetColor::Brown],
        names: RAT_NAMES,
        emoji: "🐀",
        greeting: "Squeak! Squeak!",
        graph: ground_loops(graph, &[State::SitIdle]),
    }
}

fn panda() -> Archetype {
    let graph = StateGraph::new(State::SitIdle)
        .with_transitions(State::SitIdle, &[State::WalkRight, State::RunRight, State::Lie])
        .with_transitions(State::Lie, &[State::WalkRight, State::WalkLeft])
        .with_transitions(State::Chase, &[State::IdleWithBall])
        .with_transitions(State::IdleWithBall, &[State::SitIdle, State::Lie]);

    Archetype {
        pet_type: PetType::Panda,
        label: "panda",
        speed: PetSpeed::Slow,
        colors: &[PetColor::Black, PetColor::Brown],
        names: PANDA_NAMES,
        emoji: "🐼",
        greeting: "I am a panda and I love bamboo!",
        graph: ground_loops(graph, &[State::SitIdle, State::Lie]),
    }
}

fn pumpy() -> Archetype {
    let graph = StateGraph::new(State::SitIdle)
        .with_transitions(State::SitIdle, &[State::WalkRight, State::RunRight, State::Lie])
        .with_transitions(State::Lie, &[State::WalkRight, State::WalkLeft])
        .with_transitions(State::Chase, &[State::IdleWithBall])
        .with_transitions(State::IdleWithBall, &[State::SitIdle, State::Lie]);

    Archetype {
        pet_type: PetType::Pumpy,
        label: "pumpy",
        speed: PetSpeed::Normal,
        colors: &[PetColor::Black],
        names: PUMPY_NAMES,
        emoji: "🎃",
        greeting: "I am Pumpy!",
        graph: ground_loops(graph, &[State::SitIdle, State::Lie]),
    }
}
