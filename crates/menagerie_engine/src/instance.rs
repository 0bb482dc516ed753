//! The capability surface every pet implementation provides.
//!
//! The collection and the tick driver only talk to pets through
//! [`PetInstance`]. The generic [`Pet`](crate::Pet) implements it from the
//! archetype table; other implementations can be plugged in as long as they
//! honor the same contract.

use std::fmt;
use std::time::Duration;

use menagerie_behavior::StateGraph;
use menagerie_foundation::{PetType, Result, State};

// =============================================================================
// Stage
// =============================================================================

/// Horizontal bounds and pacing a pet animates within.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stage {
    /// Width of the playing field in pixels. Pets stay within `[0, width]`.
    pub width: f64,
    /// Frames a stationary state lasts before it completes.
    pub hold_frames: u32,
}

/// What happened to a pet's current state during one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The state is still in progress.
    Continue,
    /// The state has finished; the driver should pick a next state.
    Complete,
}

// =============================================================================
// Capability
// =============================================================================

/// A live pet as seen by the engine.
///
/// Implementations must keep [`state`](Self::state) inside
/// [`graph`](Self::graph) at all times: [`transition_to`](Self::transition_to)
/// rejects transitions the graph does not allow and leaves the state
/// untouched.
pub trait PetInstance: fmt::Debug {
    /// Display name. Never empty.
    fn name(&self) -> &str;

    /// Archetype of this pet.
    fn pet_type(&self) -> PetType;

    /// Left edge in pixels.
    fn left(&self) -> f64;

    /// Width in pixels. The pet covers `[left, left + width)`.
    fn width(&self) -> f64;

    /// Whether this pet has made a friend.
    fn has_friend(&self) -> bool;

    /// Whether this pet can currently be approached by another pet.
    fn can_chase(&self) -> bool;

    /// Current behavior state.
    fn state(&self) -> State;

    /// The archetype's transition graph.
    fn graph(&self) -> &StateGraph;

    /// Moves to `next`.
    ///
    /// # Errors
    /// Returns an invalid state transition error when the graph does not
    /// allow `state() -> next`, and a removed-pet error after
    /// [`remove`](Self::remove).
    fn transition_to(&mut self, next: State) -> Result<()>;

    /// Asks this pet to befriend `friend`. Returns true if it accepted.
    fn make_friends_with(&mut self, friend: &dyn PetInstance) -> bool;

    /// Shows `message` above the pet for `duration`.
    fn show_speech_bubble(&mut self, message: &str, duration: Duration);

    /// Releases the pet. Further calls are no-ops.
    fn remove(&mut self);

    /// Returns true if the graph allows moving from the current state to `next`.
    fn can_transition_to(&self, next: State) -> bool {
        self.graph().is_valid_transition(self.state(), next)
    }

    /// Advances one animation frame.
    fn next_frame(&mut self, _stage: &Stage) -> FrameOutcome {
        FrameOutcome::Continue
    }

    /// Lets `elapsed` pass for timed presentation such as speech bubbles.
    fn elapse(&mut self, _elapsed: Duration) {}
}

/// Returns true if `candidate`'s left edge lies strictly inside `seeker`'s span.
///
/// This is one-sided: it says nothing about `seeker`'s edge and `candidate`'s
/// span.
#[must_use]
pub fn leading_edge_inside(seeker: &dyn PetInstance, candidate: &dyn PetInstance) -> bool {
    candidate.left() > seeker.left() && candidate.left() < seeker.left() + seeker.width()
}
