//! End-of-game summary: the only place the goal suit is published.

use serde::Serialize;

use super::dealing::DeckComposition;
use super::scoring::{score, PlayerResult};
use super::state::{GameState, PlayerId, TerminationReason};
use super::suit_map::Hand;
use super::suits::Suit;
use super::trade::Trade;
use super::turns::TurnRecord;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub goal_suit: Suit,
    pub deck: DeckComposition,
    pub num_players: u8,
    pub turns: u32,
    pub termination: TerminationReason,
    pub initial_hands: Vec<Hand>,
    pub players: Vec<PlayerResult>,
    pub trades: Vec<Trade>,
    pub log: Vec<TurnRecord>,
}

impl GameSummary {
    /// Summarize a terminated game.
    pub fn from_state(state: &GameState) -> Result<Self, DomainError> {
        let termination = state.require_terminated()?;
        let players = score(state)?;
        Ok(Self {
            goal_suit: state.goal_suit(),
            deck: *state.deck(),
            num_players: state.num_players(),
            turns: state.turn(),
            termination,
            initial_hands: state
                .initial_ledger()
                .players()
                .iter()
                .map(|p| p.hand)
                .collect(),
            players,
            trades: state.trades().to_vec(),
            log: state.log().to_vec(),
        })
    }

    /// The seat with the strictly highest net, or `None` on a tie.
    pub fn round_winner(&self) -> Option<PlayerId> {
        let best = self.players.iter().map(|p| p.net).max()?;
        let mut top = self.players.iter().filter(|p| p.net == best);
        let first = top.next()?;
        top.next().is_none().then_some(first.player)
    }
}
