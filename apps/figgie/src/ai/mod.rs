//! AI player module - the agent side of the engine.
//!
//! This module provides:
//! - The `AiPlayer` trait every agent implements
//! - RandomPlayer: uniform over candidate actions (seedable)
//! - Heuristic: deterministic market-making baseline
//! - ScriptedPlayer: replays raw JSON actions, for tests and replays
//! - A static registry to build agents by name

mod config;
mod heuristic;
mod random;
pub mod registry;
mod scripted;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use scripted::ScriptedPlayer;
pub use trait_def::{AiError, AiPlayer};

use crate::errors::domain::{ConfigKind, DomainError};

/// Create an AI player by registered name.
pub fn create_ai(name: &str, config: &AiConfig) -> Result<Box<dyn AiPlayer>, DomainError> {
    let factory = by_name(name).ok_or_else(|| {
        DomainError::config(ConfigKind::UnknownAgent, format!("unknown AI '{name}'"))
    })?;
    Ok((factory.make)(config))
}
