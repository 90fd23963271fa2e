//! Single-best-quote market book.
//!
//! Each suit holds at most one bid and one offer system-wide. Posting a
//! quote replaces whatever sat on that side. Any trade clears every quote
//! in every suit; only the last traded price survives.

use serde::{Deserialize, Serialize};

use super::state::PlayerId;
use super::suit_map::SuitMap;
use super::suits::{Suit, SUITS};
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub price: u32,
    pub player: PlayerId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SuitBook {
    pub bid: Option<Quote>,
    pub offer: Option<Quote>,
    pub last_trade: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarketBook {
    suits: SuitMap<SuitBook>,
}

impl MarketBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_quotes(&self, suit: Suit) -> (Option<Quote>, Option<Quote>) {
        let book = &self.suits[suit];
        (book.bid, book.offer)
    }

    pub fn bid(&self, suit: Suit) -> Option<Quote> {
        self.suits[suit].bid
    }

    pub fn offer(&self, suit: Suit) -> Option<Quote> {
        self.suits[suit].offer
    }

    pub fn last_trade(&self, suit: Suit) -> Option<u32> {
        self.suits[suit].last_trade
    }

    /// Overwrite the bid for `suit`. Callers validate first.
    pub fn set_bid(&mut self, suit: Suit, price: u32, player: PlayerId) {
        self.suits[suit].bid = Some(Quote { price, player });
    }

    /// Overwrite the offer for `suit`. Callers validate first.
    pub fn set_offer(&mut self, suit: Suit, price: u32, player: PlayerId) {
        self.suits[suit].offer = Some(Quote { price, player });
    }

    /// Remove every bid and offer in every suit.
    pub fn clear_all(&mut self) {
        for suit in SUITS {
            let book = &mut self.suits[suit];
            book.bid = None;
            book.offer = None;
        }
    }

    pub fn record_trade(&mut self, suit: Suit, price: u32) {
        self.suits[suit].last_trade = Some(price);
    }

    pub fn bids(&self) -> SuitMap<Option<Quote>> {
        self.suits.map(|_, b| b.bid)
    }

    pub fn offers(&self) -> SuitMap<Option<Quote>> {
        self.suits.map(|_, b| b.offer)
    }

    pub fn last_trades(&self) -> SuitMap<Option<u32>> {
        self.suits.map(|_, b| b.last_trade)
    }

    /// True when no quote rests anywhere.
    pub fn is_empty(&self) -> bool {
        self.suits
            .values()
            .all(|b| b.bid.is_none() && b.offer.is_none())
    }

    /// Every suit with both sides present must have bid < offer.
    pub fn check_uncrossed(&self) -> Result<(), DomainError> {
        for (suit, book) in self.suits.iter() {
            if let (Some(bid), Some(offer)) = (book.bid, book.offer) {
                if bid.price >= offer.price {
                    return Err(DomainError::invariant(
                        InvariantKind::CrossedBook,
                        format!(
                            "{suit}: bid {} >= offer {}",
                            bid.price, offer.price
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
