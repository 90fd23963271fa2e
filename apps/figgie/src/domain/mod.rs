//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod dealing;
pub mod execution;
pub mod ledger;
pub mod market;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod suit_map;
pub mod suits;
pub mod suits_parsing;
pub mod suits_serde;
pub mod summary;
pub mod trade;
pub mod turns;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_execution;
#[cfg(test)]
mod tests_props_conservation;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use actions::{parse_action, Action, RejectReason};
pub use dealing::{deal, DeckComposition};
pub use execution::{apply, validate, ActionOutcome};
pub use ledger::{Ledger, Player};
pub use market::{MarketBook, Quote};
pub use player_view::PlayerView;
pub use scoring::{score, PlayerResult};
pub use seed_derivation::{derive_agent_seed, derive_round_seed};
pub use state::{GameState, Phase, PlayerId, TerminationReason};
pub use suit_map::{Hand, SuitMap};
pub use suits::{Color, Suit, SUITS};
pub use summary::GameSummary;
pub use trade::{replay_trades, Trade};
pub use turns::{take_turn, TurnRecord};
