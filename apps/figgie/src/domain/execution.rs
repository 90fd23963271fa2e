//! Action validation and execution.
//!
//! [`validate`] is pure: it inspects the book and the acting player and
//! either describes the state change or names the rule that was broken.
//! [`apply`] performs the change. A rejected action never mutates state
//! and never surfaces as an error; only engine defects do.

use serde::Serialize;
use tracing::{debug, info};

use super::actions::{Action, RejectReason};
use super::ledger::Player;
use super::market::MarketBook;
use super::state::{GameState, PlayerId};
use super::suits::Suit;
use super::trade::Trade;
use crate::errors::domain::DomainError;

/// The state change an accepted action will make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validated {
    Pass,
    Bid {
        suit: Suit,
        price: u32,
    },
    Offer {
        suit: Suit,
        price: u32,
    },
    Trade {
        suit: Suit,
        price: u32,
        buyer: PlayerId,
        seller: PlayerId,
    },
}

/// Result of submitting one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ActionOutcome {
    Accepted {
        action: Action,
        #[serde(skip_serializing_if = "Option::is_none")]
        trade: Option<Trade>,
    },
    /// Treated exactly like a pass.
    Rejected { reason: RejectReason },
}

impl ActionOutcome {
    /// True when the turn changed nothing: a pass or a rejection.
    pub fn is_noop(&self) -> bool {
        match self {
            ActionOutcome::Accepted { action, .. } => action.is_pass(),
            ActionOutcome::Rejected { .. } => true,
        }
    }

    pub fn trade(&self) -> Option<&Trade> {
        match self {
            ActionOutcome::Accepted { trade, .. } => trade.as_ref(),
            ActionOutcome::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            ActionOutcome::Rejected { reason } => Some(*reason),
            ActionOutcome::Accepted { .. } => None,
        }
    }
}

fn positive_price(price: i64) -> Result<u32, RejectReason> {
    if price <= 0 {
        return Err(RejectReason::NonPositivePrice);
    }
    u32::try_from(price).map_err(|_| RejectReason::PriceOutOfRange)
}

/// Decide whether `actor` (seated as `player`) may take `action` against
/// the current book.
pub fn validate(
    book: &MarketBook,
    player: PlayerId,
    actor: &Player,
    action: &Action,
) -> Result<Validated, RejectReason> {
    match *action {
        Action::Pass => Ok(Validated::Pass),
        Action::Bid { suit, price } => {
            let price = positive_price(price)?;
            let (bid, offer) = book.get_quotes(suit);
            if bid.is_some_and(|b| price <= b.price) {
                return Err(RejectReason::NotImprovingBid);
            }
            if offer.is_some_and(|o| price >= o.price) {
                return Err(RejectReason::CrossesOffer);
            }
            if actor.money < price {
                return Err(RejectReason::InsufficientFunds);
            }
            Ok(Validated::Bid { suit, price })
        }
        Action::Offer { suit, price } => {
            let price = positive_price(price)?;
            let (bid, offer) = book.get_quotes(suit);
            if offer.is_some_and(|o| price >= o.price) {
                return Err(RejectReason::NotImprovingOffer);
            }
            if bid.is_some_and(|b| price <= b.price) {
                return Err(RejectReason::CrossesBid);
            }
            if !actor.hand.has(suit) {
                return Err(RejectReason::NoCards);
            }
            Ok(Validated::Offer { suit, price })
        }
        Action::Buy { suit } => {
            let offer = book.offer(suit).ok_or(RejectReason::NoOffer)?;
            if offer.player == player {
                return Err(RejectReason::SelfTrade);
            }
            if actor.money < offer.price {
                return Err(RejectReason::InsufficientFunds);
            }
            Ok(Validated::Trade {
                suit,
                price: offer.price,
                buyer: player,
                seller: offer.player,
            })
        }
        Action::Sell { suit } => {
            let bid = book.bid(suit).ok_or(RejectReason::NoBid)?;
            if bid.player == player {
                return Err(RejectReason::SelfTrade);
            }
            if !actor.hand.has(suit) {
                return Err(RejectReason::NoCards);
            }
            Ok(Validated::Trade {
                suit,
                price: bid.price,
                buyer: bid.player,
                seller: player,
            })
        }
    }
}

/// Apply `action` for `player` at the current turn.
///
/// Errors only on engine defects: an unknown player, or a trade that would
/// break money or card conservation.
pub fn apply(
    state: &mut GameState,
    player: PlayerId,
    action: Action,
) -> Result<ActionOutcome, DomainError> {
    if state.is_terminated() {
        return Ok(ActionOutcome::Rejected {
            reason: RejectReason::GameOver,
        });
    }
    let actor = state.ledger.player(player)?;

    let validated = match validate(&state.book, player, actor, &action) {
        Ok(v) => v,
        Err(reason) => {
            debug!(player, turn = state.turn, ?action, %reason, "Action rejected");
            return Ok(ActionOutcome::Rejected { reason });
        }
    };

    let trade = match validated {
        Validated::Pass => None,
        Validated::Bid { suit, price } => {
            state.book.set_bid(suit, price, player);
            debug!(player, turn = state.turn, %suit, price, "Bid posted");
            None
        }
        Validated::Offer { suit, price } => {
            state.book.set_offer(suit, price, player);
            debug!(player, turn = state.turn, %suit, price, "Offer posted");
            None
        }
        Validated::Trade {
            suit,
            price,
            buyer,
            seller,
        } => {
            state
                .ledger
                .transfer_card_for_cash(suit, price, buyer, seller)?;
            let trade = Trade {
                suit,
                price,
                buyer,
                seller,
                turn: state.turn,
            };
            state.trades.push(trade);
            state.book.clear_all();
            state.book.record_trade(suit, price);
            info!(turn = state.turn, %suit, price, buyer, seller, "Trade executed");
            Some(trade)
        }
    };

    state.check_invariants()?;
    Ok(ActionOutcome::Accepted { action, trade })
}
