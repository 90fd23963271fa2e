//! Test-only game state builders for domain unit tests.
//!
//! Every builder uses the same deck: spades 12, clubs 10, hearts 10,
//! diamonds 8. Clubs is the goal suit.

use crate::domain::dealing::DeckComposition;
use crate::domain::ledger::{Ledger, Player};
use crate::domain::state::GameState;
use crate::domain::suit_map::{Hand, SuitMap};
use crate::domain::Suit;

pub const GOAL: Suit = Suit::Clubs;

pub fn standard_deck() -> DeckComposition {
    DeckComposition::new(SuitMap::from_array([12, 10, 10, 8])).unwrap()
}

/// Four ten-card hands covering the standard deck.
pub fn even_hands() -> Vec<Hand> {
    vec![
        Hand::from_array([3, 3, 2, 2]),
        Hand::from_array([3, 3, 2, 2]),
        Hand::from_array([3, 2, 3, 2]),
        Hand::from_array([3, 2, 3, 2]),
    ]
}

/// Like `even_hands`, but player 0 holds no hearts.
pub fn hands_p0_without_hearts() -> Vec<Hand> {
    vec![
        Hand::from_array([4, 4, 0, 2]),
        Hand::from_array([3, 3, 2, 2]),
        Hand::from_array([3, 2, 4, 1]),
        Hand::from_array([2, 1, 4, 3]),
    ]
}

/// Running four-player state with explicit hands and money. The pot is 200.
pub fn make_state(hands: Vec<Hand>, money: &[u32], max_turns: u32) -> GameState {
    let players = hands
        .into_iter()
        .zip(money.iter().copied())
        .map(|(hand, money)| Player { money, hand })
        .collect();
    let ledger = Ledger::from_parts(players, 200);
    GameState::from_parts(standard_deck(), GOAL, ledger, max_turns).unwrap()
}

/// Freshly seated four-player game over `even_hands`.
pub fn running_state() -> GameState {
    make_state(even_hands(), &[300; 4], 1000)
}
