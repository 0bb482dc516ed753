//! Headless tick driving.
//!
//! A tick is one animation frame for every pet in a collection:
//! 1. Lets time pass for speech bubbles
//! 2. Advances each pet's current state by one frame
//! 3. Picks and commits a next state for every pet whose state completed
//! 4. Runs friend seeking on the configured interval

use std::time::Duration;

use menagerie_behavior::StateGraph;
use menagerie_foundation::{ErrorContext, Result, State};
use rand::SeedableRng;
use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::collection::{Friendship, PetCollection, PetId};
use crate::config::DriverConfig;
use crate::instance::{FrameOutcome, Stage};

// =============================================================================
// Tick Report
// =============================================================================

/// A state change committed during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The pet that moved.
    pub pet: PetId,
    /// State before the tick.
    pub from: State,
    /// State after the tick.
    pub to: State,
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// State changes, in collection order.
    pub transitions: Vec<Transition>,
    /// Friendships made, if friend seeking ran.
    pub friendships: Vec<Friendship>,
}

// =============================================================================
// Tick Driver
// =============================================================================

/// Drives a collection frame by frame.
///
/// Next states are chosen uniformly from the graph with a seeded RNG, so a
/// run is reproducible for a given seed and starting collection.
#[derive(Clone, Debug)]
pub struct TickDriver {
    config: DriverConfig,
    rng: ChaCha8Rng,
    tick_number: u64,
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}

impl TickDriver {
    /// Creates a driver.
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            tick_number: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the number of ticks run so far.
    #[must_use]
    pub fn tick_number(&self) -> u64 {
        self.tick_number
    }

    /// Runs one tick over `pets`, with `elapsed` wall time since the last one.
    ///
    /// # Errors
    /// Returns an error if a pet rejects the state chosen for it. Pets
    /// earlier in the collection keep the frame they already advanced.
    pub fn tick(&mut self, pets: &mut PetCollection, elapsed: Duration) -> Result<TickReport> {
        self.tick_number += 1;
        let stage = Stage {
            width: self.config.stage_width,
            hold_frames: self.config.hold_frames,
        };
        let mut report = TickReport {
            tick: self.tick_number,
            ..TickReport::default()
        };

        for (id, record) in pets.iter_mut() {
            let pet = record.instance_mut();
            pet.elapse(elapsed);
            if pet.next_frame(&stage) == FrameOutcome::Continue {
                continue;
            }

            let from = pet.state();
            let Some(to) = self.choose_next(pet.graph(), from) else {
                continue;
            };
            pet.transition_to(to).map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_pet(pet.name())
                        .with_frame(format!("tick {}", self.tick_number)),
                )
            })?;
            report.transitions.push(Transition { pet: id, from, to });
        }

        let every = self.config.seek_friends_every;
        if every > 0 && self.tick_number % every == 0 {
            report.friendships = pets.seek_new_friends();
        }

        debug!(
            tick = self.tick_number,
            transitions = report.transitions.len(),
            friendships = report.friendships.len(),
            "tick complete"
        );
        Ok(report)
    }

    /// Runs `count` ticks of `frame` each, collecting their reports.
    ///
    /// # Errors
    /// Stops at and returns the first tick error.
    pub fn run(
        &mut self,
        pets: &mut PetCollection,
        count: usize,
        frame: Duration,
    ) -> Result<Vec<TickReport>> {
        (0..count).map(|_| self.tick(pets, frame)).collect()
    }

    /// Picks a next state of `from`, or `None` if it has no outgoing edges.
    fn choose_next(&mut self, graph: &StateGraph, from: State) -> Option<State> {
        graph
            .next_states(from)?
            .iter()
            .copied()
            .choose(&mut self.rng)
    }
}
