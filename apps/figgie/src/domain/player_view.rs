//! Player view of game state - what information is visible to a player.
//!
//! [`PlayerView`] is the only thing an agent ever sees. It is built fresh
//! for the acting player at each turn and never contains the goal suit or
//! any other player's hand or money.

use serde::{Deserialize, Serialize};

use super::actions::Action;
use super::market::Quote;
use super::state::{GameState, PlayerId};
use super::suit_map::{Hand, SuitMap};
use super::suits::{Suit, SUITS};
use super::trade::Trade;
use crate::errors::domain::DomainError;

/// Information visible to a player at their decision point.
///
/// This is the primary interface between the game engine and agents. It is
/// passed to [`crate::ai::AiPlayer::choose_action`] and serializes to the
/// JSON shape an out-of-process agent receives.
///
/// ## Key Fields
///
/// - **Your seat**: [`position`](Self::position)
/// - **Your holdings**: [`hand`](Self::hand) and [`money`](Self::money)
/// - **The book**: [`bids`](Self::bids) and [`offers`](Self::offers), one
///   best quote per side per suit
/// - **History**: [`trades`](Self::trades) and [`last_trades`](Self::last_trades)
///
/// ## Helper Methods
///
/// - [`can_bid()`](Self::can_bid) / [`can_offer()`](Self::can_offer) check a
///   quote against the book and your holdings
/// - [`can_buy()`](Self::can_buy) / [`can_sell()`](Self::can_sell) check
///   whether a resting quote can be hit
/// - [`candidate_actions()`](Self::candidate_actions) lists a few legal
///   actions, always ending with a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: PlayerId,
    pub hand: Hand,
    pub money: u32,
    pub bids: SuitMap<Option<Quote>>,
    pub offers: SuitMap<Option<Quote>>,
    /// Last traded price per suit; survives quote clearing.
    pub last_trades: SuitMap<Option<u32>>,
    pub trades: Vec<Trade>,
    pub num_players: u8,
    pub turn: u32,
}

impl PlayerView {
    /// Project `state` for `player`.
    pub fn for_player(state: &GameState, player: PlayerId) -> Result<Self, DomainError> {
        let me = state.ledger().player(player)?;
        Ok(Self {
            position: player,
            hand: me.hand,
            money: me.money,
            bids: state.book().bids(),
            offers: state.book().offers(),
            last_trades: state.book().last_trades(),
            trades: state.trades().to_vec(),
            num_players: state.num_players(),
            turn: state.turn(),
        })
    }

    pub fn best_bid(&self, suit: Suit) -> Option<u32> {
        self.bids[suit].map(|q| q.price)
    }

    pub fn best_offer(&self, suit: Suit) -> Option<u32> {
        self.offers[suit].map(|q| q.price)
    }

    pub fn can_bid(&self, suit: Suit, price: u32) -> bool {
        price > 0
            && self.best_bid(suit).is_none_or(|b| price > b)
            && self.best_offer(suit).is_none_or(|o| price < o)
            && self.money >= price
    }

    pub fn can_offer(&self, suit: Suit, price: u32) -> bool {
        price > 0
            && self.best_offer(suit).is_none_or(|o| price < o)
            && self.best_bid(suit).is_none_or(|b| price > b)
            && self.hand.has(suit)
    }

    pub fn can_buy(&self, suit: Suit) -> bool {
        self.offers[suit].is_some_and(|q| q.player != self.position && self.money >= q.price)
    }

    pub fn can_sell(&self, suit: Suit) -> bool {
        self.bids[suit].is_some_and(|q| q.player != self.position && self.hand.has(suit))
    }

    /// A small set of legal actions: hit every hittable quote, improve each
    /// side by one where possible, and pass.
    pub fn candidate_actions(&self) -> Vec<Action> {
        let mut out = Vec::new();
        for suit in SUITS {
            if self.can_buy(suit) {
                out.push(Action::Buy { suit });
            }
            if self.can_sell(suit) {
                out.push(Action::Sell { suit });
            }
            let bid = self.best_bid(suit).map_or(1, |b| b + 1);
            if self.can_bid(suit, bid) {
                out.push(Action::Bid {
                    suit,
                    price: i64::from(bid),
                });
            }
            let offer = match (self.best_offer(suit), self.best_bid(suit)) {
                (Some(o), _) => o.saturating_sub(1),
                (None, Some(b)) => b + 1,
                (None, None) => 1,
            };
            if self.can_offer(suit, offer) {
                out.push(Action::Offer {
                    suit,
                    price: i64::from(offer),
                });
            }
        }
        out.push(Action::Pass);
        out
    }
}
