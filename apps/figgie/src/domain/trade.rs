//! Executed trades and replaying them onto a ledger.

use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use super::state::PlayerId;
use super::suits::Suit;
use crate::errors::domain::DomainError;

/// One executed trade. Never mutated once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub suit: Suit,
    pub price: u32,
    pub buyer: PlayerId,
    pub seller: PlayerId,
    pub turn: u32,
}

/// Re-apply every trade's money and card movement, in order, to a copy of
/// `initial`.
pub fn replay_trades(initial: &Ledger, trades: &[Trade]) -> Result<Ledger, DomainError> {
    let mut ledger = initial.clone();
    for t in trades {
        ledger.transfer_card_for_cash(t.suit, t.price, t.buyer, t.seller)?;
    }
    Ok(ledger)
}
