#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Figgie: a turn-based card-trading market game engine.
//!
//! - [`domain`] holds the pure rules: deck, market book, ledger, action
//!   validation, turns and scoring.
//! - [`ai`] defines the agent seam and the built-in bots.
//! - [`services`] drives games and tournaments against agents.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use config::GameConfig;
pub use domain::{Action, GameState, GameSummary, PlayerView, RejectReason, Suit};
pub use errors::DomainError;
pub use services::{play_game, run_tournament, GameFlow, TournamentResult};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    figgie_test_support::logging::init();
}
