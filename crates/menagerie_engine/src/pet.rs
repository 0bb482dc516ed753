//! The generic pet and its factory.
//!
//! There is one pet type for every archetype. What differs between a dog and
//! a panda (graph, palette, speed, names) lives in the archetype table and is
//! looked up once at construction.

use std::time::Duration;

use menagerie_behavior::{Archetype, StateGraph};
use menagerie_foundation::{Error, PetSize, PetSpeed, PetType, Result, State};
use tracing::{debug, info};

use crate::instance::{FrameOutcome, PetInstance, Stage};

// =============================================================================
// Spawn Options
// =============================================================================

/// Placement and sizing for a new pet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnOptions {
    /// Sprite size.
    pub size: PetSize,
    /// Initial left edge in pixels.
    pub left: f64,
    /// Initial distance from the bottom in pixels.
    pub bottom: f64,
    /// Root path of the pet's assets.
    pub root: String,
    /// Height of the floor in pixels.
    pub floor: f64,
}

impl SpawnOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the size.
    #[must_use]
    pub fn with_size(mut self, size: PetSize) -> Self {
        self.size = size;
        self
    }

    /// Builder method to set the left edge.
    #[must_use]
    pub fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    /// Builder method to set the bottom offset.
    #[must_use]
    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = bottom;
        self
    }

    /// Builder method to set the asset root.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Builder method to set the floor height.
    #[must_use]
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }
}

// =============================================================================
// Speech Bubble
// =============================================================================

/// A message shown above a pet for a limited time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechBubble {
    /// Text of the bubble.
    pub message: String,
    /// Time left before the bubble disappears.
    pub remaining: Duration,
}

// =============================================================================
// Pet
// =============================================================================

/// A pet driven by its archetype's configuration.
#[derive(Clone, Debug)]
pub struct Pet {
    name: String,
    archetype: &'static Archetype,
    state: State,
    left: f64,
    bottom: f64,
    floor: f64,
    size: PetSize,
    root: String,
    /// Name of the friend, once one has been made. Not cleared if the friend
    /// goes away.
    friend: Option<String>,
    speech: Option<SpeechBubble>,
    frames_in_state: u32,
    removed: bool,
}

/// Creates a pet of the archetype named `archetype_id`.
///
/// The pet starts in its archetype's starting state and moves at its
/// archetype's fixed speed.
///
/// # Errors
/// Returns an invalid pet error when `name` is absent or empty
/// ("name is undefined") or when `archetype_id` is not registered
/// ("Pet type doesn't exist"). The name is checked first.
pub fn create_pet(archetype_id: &str, options: &SpawnOptions, name: Option<&str>) -> Result<Pet> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(Error::missing_name()),
    };
    let pet_type: PetType = archetype_id.parse()?;
    Ok(Pet::new(Archetype::of(pet_type), options, name))
}

impl Pet {
    fn new(archetype: &'static Archetype, options: &SpawnOptions, name: &str) -> Self {
        debug!(
            pet = name,
            archetype = archetype.label,
            left = options.left,
            "spawning pet"
        );
        Self {
            name: name.to_string(),
            archetype,
            state: archetype.graph.starting_state(),
            left: options.left,
            bottom: options.bottom,
            floor: options.floor,
            size: options.size,
            root: options.root.clone(),
            friend: None,
            speech: None,
            frames_in_state: 0,
            removed: false,
        }
    }

    /// Returns the archetype record.
    #[must_use]
    pub fn archetype(&self) -> &'static Archetype {
        self.archetype
    }

    /// Returns the movement speed class.
    #[must_use]
    pub fn speed(&self) -> PetSpeed {
        self.archetype.speed
    }

    /// Returns the sprite size.
    #[must_use]
    pub fn size(&self) -> PetSize {
        self.size
    }

    /// Returns the distance from the bottom in pixels.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Returns the floor height in pixels.
    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Returns the asset root path.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the name of this pet's friend, if it has one.
    #[must_use]
    pub fn friend(&self) -> Option<&str> {
        self.friend.as_deref()
    }

    /// Returns the speech bubble currently shown, if any.
    #[must_use]
    pub fn speech(&self) -> Option<&SpeechBubble> {
        self.speech.as_ref()
    }

    /// Returns the number of frames spent in the current state.
    #[must_use]
    pub fn frames_in_state(&self) -> u32 {
        self.frames_in_state
    }

    /// Returns true once the pet has been removed.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Returns the archetype's greeting.
    #[must_use]
    pub fn greeting(&self) -> &'static str {
        self.archetype.greeting
    }

    /// Moves the left edge.
    pub fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    /// Interrupts the current state to chase a thrown ball.
    ///
    /// A chase is entered from whatever the pet is doing, so it bypasses the
    /// transition graph, but the chase state itself must be part of the
    /// graph. Returns `Ok(false)` when the pet is busy and ignores the ball.
    ///
    /// # Errors
    /// Returns a removed-pet error after [`remove`](PetInstance::remove), and
    /// an invalid state transition error if the archetype cannot chase.
    pub fn chase_ball(&mut self) -> Result<bool> {
        if self.removed {
            return Err(Error::pet_removed(&self.name));
        }
        if !self.archetype.graph.contains(State::Chase) {
            return Err(Error::invalid_transition(&self.name, self.state, State::Chase));
        }
        if !self.can_chase() {
            return Ok(false);
        }
        self.enter(State::Chase);
        Ok(true)
    }

    fn enter(&mut self, next: State) {
        debug!(pet = %self.name, from = %self.state, to = %next, "state change");
        self.state = next;
        self.frames_in_state = 0;
    }

    fn max_left(&self, stage: &Stage) -> f64 {
        (stage.width - self.width()).max(0.0)
    }
}

impl PetInstance for Pet {
    fn name(&self) -> &str {
        &self.name
    }

    fn pet_type(&self) -> PetType {
        self.archetype.pet_type
    }

    fn left(&self) -> f64 {
        self.left
    }

    fn width(&self) -> f64 {
        self.size.width()
    }

    fn has_friend(&self) -> bool {
        self.friend.is_some()
    }

    fn can_chase(&self) -> bool {
        !self.removed && self.speed() != PetSpeed::Still && !self.state.is_busy()
    }

    fn state(&self) -> State {
        self.state
    }

    fn graph(&self) -> &StateGraph {
        &self.archetype.graph
    }

    fn transition_to(&mut self, next: State) -> Result<()> {
        if self.removed {
            return Err(Error::pet_removed(&self.name));
        }
        if !self.can_transition_to(next) {
            return Err(Error::invalid_transition(&self.name, self.state, next));
        }
        self.enter(next);
        Ok(())
    }

    /// Accepts the first friend offered and turns down every later one.
    fn make_friends_with(&mut self, friend: &dyn PetInstance) -> bool {
        if self.removed || self.friend.is_some() {
            return false;
        }
        info!(pet = %self.name, friend = friend.name(), "made a friend");
        self.friend = Some(friend.name().to_string());
        true
    }

    fn show_speech_bubble(&mut self, message: &str, duration: Duration) {
        if self.removed {
            return;
        }
        self.speech = Some(SpeechBubble {
            message: message.to_string(),
            remaining: duration,
        });
    }

    fn remove(&mut self) {
        if self.removed {
            return;
        }
        debug!(pet = %self.name, "removing pet");
        self.removed = true;
        self.speech = None;
    }

    fn next_frame(&mut self, stage: &Stage) -> FrameOutcome {
        if self.removed {
            return FrameOutcome::Continue;
        }
        self.frames_in_state = self.frames_in_state.saturating_add(1);

        let direction = self.state.direction();
        if direction == 0 || self.speed() == PetSpeed::Still {
            return if self.frames_in_state >= stage.hold_frames {
                FrameOutcome::Complete
            } else {
                FrameOutcome::Continue
            };
        }

        let mut step = self.speed().pixels_per_frame();
        if self.state.is_running() {
            step *= 2.0;
        }

        let max_left = self.max_left(stage);
        let next_left = (self.left + f64::from(direction) * step).clamp(0.0, max_left);
        self.left = next_left;

        let at_wall = if direction > 0 {
            next_left >= max_left
        } else {
            next_left <= 0.0
        };
        if at_wall {
            FrameOutcome::Complete
        } else {
            FrameOutcome::Continue
        }
    }

    fn elapse(&mut self, elapsed: Duration) {
        if let Some(bubble) = &mut self.speech {
            bubble.remaining = bubble.remaining.saturating_sub(elapsed);
            if bubble.remaining.is_zero() {
                self.speech = None;
            }
        }
    }
}
