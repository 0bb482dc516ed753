//! Error types for the Menagerie system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::state::State;

/// The main error type for Menagerie operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid pet error for a missing or empty name.
    #[must_use]
    pub fn missing_name() -> Self {
        Self::new(ErrorKind::InvalidPet(InvalidPetReason::MissingName))
    }

    /// Creates an invalid pet error for an unregistered archetype.
    #[must_use]
    pub fn unknown_pet_type(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPet(InvalidPetReason::UnknownType(
            id.into(),
        )))
    }

    /// Creates an invalid state transition error.
    #[must_use]
    pub fn invalid_transition(pet: impl Into<String>, from: State, to: State) -> Self {
        Self::new(ErrorKind::InvalidStateTransition {
            pet: pet.into(),
            from,
            to,
        })
    }

    /// Creates an error for an operation on a pet that was already removed.
    #[must_use]
    pub fn pet_removed(pet: impl Into<String>) -> Self {
        Self::new(ErrorKind::PetRemoved(pet.into()))
    }

    /// Returns true if this is an [`ErrorKind::InvalidPet`] error.
    #[must_use]
    pub fn is_invalid_pet(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidPet(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A pet could not be constructed or queried.
    #[error("invalid pet: {0}")]
    InvalidPet(InvalidPetReason),

    /// A pet was asked to enter a state its graph does not allow.
    #[error("invalid state transition for {pet}: {from} -> {to}")]
    InvalidStateTransition {
        /// Name of the pet.
        pet: String,
        /// The state the pet is in.
        from: State,
        /// The rejected target state.
        to: State,
    },

    /// A state identifier did not parse.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// A color identifier did not parse.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A size identifier did not parse.
    #[error("unknown size: {0}")]
    UnknownSize(String),

    /// The pet has been torn down and no longer accepts mutation.
    #[error("pet has been removed: {0}")]
    PetRemoved(String),
}

/// Why a pet was rejected at construction or query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPetReason {
    /// The name was absent or empty.
    MissingName,
    /// No archetype is registered under this identifier.
    UnknownType(String),
}

impl fmt::Display for InvalidPetReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("name is undefined"),
            Self::UnknownType(_) => f.write_str("Pet type doesn't exist"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the pet involved, if any.
    pub pet: Option<String>,
    /// Operations that were in progress, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pet name.
    #[must_use]
    pub fn with_pet(mut self, pet: impl Into<String>) -> Self {
        self.pet = Some(pet.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pet) = &self.pet {
            write!(f, "for pet {pet}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for Menagerie operations.
pub type Result<T> = std::result::Result<T, Error>;
