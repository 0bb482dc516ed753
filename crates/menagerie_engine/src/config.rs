//! Configuration for friend seeking and tick driving.

use std::time::Duration;

/// How new friendships are acknowledged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendshipConfig {
    /// Text shown above both pets.
    pub acknowledgement: String,
    /// How long the acknowledgement stays up.
    pub acknowledgement_duration: Duration,
}

impl Default for FriendshipConfig {
    fn default() -> Self {
        Self {
            acknowledgement: "❤️".to_string(),
            acknowledgement_duration: Duration::from_millis(2000),
        }
    }
}

impl FriendshipConfig {
    /// Builder method to set the acknowledgement text.
    #[must_use]
    pub fn with_acknowledgement(mut self, text: impl Into<String>) -> Self {
        self.acknowledgement = text.into();
        self
    }

    /// Builder method to set how long the acknowledgement is shown.
    #[must_use]
    pub fn with_acknowledgement_duration(mut self, duration: Duration) -> Self {
        self.acknowledgement_duration = duration;
        self
    }
}

/// Configuration for the headless tick driver.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Seed for next-state selection.
    pub seed: u64,
    /// Width of the playing field in pixels.
    pub stage_width: f64,
    /// Frames a stationary state lasts.
    pub hold_frames: u32,
    /// Run friend seeking every this many ticks. Zero disables it.
    pub seek_friends_every: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            stage_width: 800.0,
            hold_frames: 50,
            seek_friends_every: 10,
        }
    }
}

impl DriverConfig {
    /// Creates the default configuration with the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Builder method to set the stage width.
    #[must_use]
    pub fn with_stage_width(mut self, width: f64) -> Self {
        self.stage_width = width;
        self
    }

    /// Builder method to set the hold length of stationary states.
    #[must_use]
    pub fn with_hold_frames(mut self, frames: u32) -> Self {
        self.hold_frames = frames;
        self
    }

    /// Builder method to set the friend seeking interval.
    #[must_use]
    pub fn with_seek_friends_every(mut self, ticks: u64) -> Self {
        self.seek_friends_every = ticks;
        self
    }
}
