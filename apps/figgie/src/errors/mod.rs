//! Error handling for the Figgie engine.

pub mod domain;

pub use domain::{ConfigKind, DomainError, InvariantKind, ValidationKind};
