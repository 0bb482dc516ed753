//! Pet archetypes, colors, sizes, and speeds.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// A pet archetype.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PetType {
    /// A dog.
    Dog,
    /// A rat.
    Rat,
    /// A panda.
    Panda,
    /// A pumpkin.
    Pumpy,
}

impl PetType {
    /// All archetypes, in declaration order.
    pub const ALL: [PetType; 4] = [PetType::Dog, PetType::Rat, PetType::Panda, PetType::Pumpy];

    /// Returns the archetype identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Rat => "rat",
            Self::Panda => "panda",
            Self::Pumpy => "pumpy",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetType {
    type Err = Error;

    /// Parses an archetype identifier.
    ///
    /// # Errors
    /// Returns an invalid pet error when no archetype has this identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unknown_pet_type(s))
    }
}

/// A pet color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PetColor {
    /// Black.
    Black,
    /// Brown.
    Brown,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Gray.
    Gray,
    /// Purple.
    Purple,
    /// Red.
    Red,
    /// White.
    White,
    /// Orange.
    Orange,
    /// Akita (red and white shiba-style coat).
    Akita,
}

impl PetColor {
    /// All colors, in declaration order.
    pub const ALL: [PetColor; 10] = [
        PetColor::Black,
        PetColor::Brown,
        PetColor::Green,
        PetColor::Yellow,
        PetColor::Gray,
        PetColor::Purple,
        PetColor::Red,
        PetColor::White,
        PetColor::Orange,
        PetColor::Akita,
    ];

    /// Returns the color identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::White => "white",
            Self::Orange => "orange",
            Self::Akita => "akita",
        }
    }
}

impl fmt::Display for PetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownColor(s.to_string())))
    }
}

/// Display size of a pet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PetSize {
    /// Smallest sprites.
    Nano,
    /// Small sprites.
    Small,
    /// Medium sprites.
    #[default]
    Medium,
    /// Large sprites.
    Large,
}

impl PetSize {
    /// Returns the size identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nano => "nano",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Sprite width in pixels.
    #[must_use]
    pub const fn width(self) -> f64 {
        match self {
            Self::Nano => 30.0,
            Self::Small => 40.0,
            Self::Medium => 55.0,
            Self::Large => 110.0,
        }
    }
}

impl fmt::Display for PetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Nano, Self::Small, Self::Medium, Self::Large]
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::UnknownSize(s.to_string())))
    }
}

/// Movement speed class of an archetype.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PetSpeed {
    /// Does not move.
    Still,
    /// One pixel per frame.
    VerySlow,
    /// Two pixels per frame.
    Slow,
    /// Three pixels per frame.
    Normal,
    /// Four pixels per frame.
    Fast,
    /// Five pixels per frame.
    VeryFast,
}

impl PetSpeed {
    /// Pixels moved per frame while walking.
    #[must_use]
    pub const fn pixels_per_frame(self) -> f64 {
        match self {
            Self::Still => 0.0,
            Self::VerySlow => 1.0,
            Self::Slow => 2.0,
            Self::Normal => 3.0,
            Self::Fast => 4.0,
            Self::VeryFast => 5.0,
        }
    }
}
