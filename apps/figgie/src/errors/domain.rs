//! Domain-level error type used across the engine, services and tools.
//!
//! Three classes exist and they never mix:
//! - `Config`: the game cannot be created (bad player count, bad table).
//! - `Invariant`: the engine itself broke a conservation or ordering rule.
//! - `Validation`: a helper API was handed input it cannot interpret.
//!
//! Bad agent input is not an error at all; it degrades to a pass and is
//! reported through `RejectReason` instead.

use thiserror::Error;

/// Configuration problems detected before any turn executes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    InvalidPlayerCount,
    MalformedTable,
    InvalidMaxTurns,
    InvalidDeck,
    InvalidGoalSuit,
    AgentCountMismatch,
    UnknownAgent,
    InvalidEnvVar,
}

/// Internal defects: the engine produced a state it must never produce.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantKind {
    MoneyNotConserved,
    CardsNotConserved,
    CrossedBook,
    PhaseMismatch,
    UnknownPlayer,
    InsufficientHoldings,
}

/// Input that a helper API could not interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    UnknownSuit,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("configuration error {0:?}: {1}")]
    Config(ConfigKind, String),
    #[error("invariant violated {0:?}: {1}")]
    Invariant(InvariantKind, String),
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }

    pub fn invariant(kind: InvariantKind, detail: impl Into<String>) -> Self {
        Self::Invariant(kind, detail.into())
    }

    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    /// True for errors that indicate an engine bug rather than bad setup.
    pub fn is_internal(&self) -> bool {
        matches!(self, DomainError::Invariant(..))
    }
}
