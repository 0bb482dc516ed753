//! Behavior state identifiers.
//!
//! Every state a pet can occupy is named here. Which of them a given pet may
//! actually reach is decided by its archetype's state graph.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// A behavior state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    /// Sitting still.
    SitIdle,
    /// Walking toward the right edge.
    WalkRight,
    /// Walking toward the left edge.
    WalkLeft,
    /// Running toward the right edge.
    RunRight,
    /// Running toward the left edge.
    RunLeft,
    /// Lying down.
    Lie,
    /// Idling next to a caught ball.
    IdleWithBall,
    /// Chasing a thrown ball.
    Chase,
}

impl State {
    /// All states, in declaration order.
    pub const ALL: [State; 8] = [
        State::SitIdle,
        State::WalkRight,
        State::WalkLeft,
        State::RunRight,
        State::RunLeft,
        State::Lie,
        State::IdleWithBall,
        State::Chase,
    ];

    /// Returns the stable string identifier of this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SitIdle => "sit-idle",
            Self::WalkRight => "walk-right",
            Self::WalkLeft => "walk-left",
            Self::RunRight => "run-right",
            Self::RunLeft => "run-left",
            Self::Lie => "lie",
            Self::IdleWithBall => "idle-with-ball",
            Self::Chase => "chase",
        }
    }

    /// Horizontal direction of travel: `1` right, `-1` left, `0` none.
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Self::WalkRight | Self::RunRight => 1,
            Self::WalkLeft | Self::RunLeft => -1,
            _ => 0,
        }
    }

    /// Returns true for the running states.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::RunRight | Self::RunLeft)
    }

    /// Returns true for states that cannot be interrupted by a chase.
    ///
    /// Only a chase already under way is busy.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Chase)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownState(s.to_string())))
    }
}
