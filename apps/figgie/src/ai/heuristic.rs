//! Heuristic: a deterministic market-making baseline.
//!
//! Goal estimate:
//! - The longest suit in hand is probably the 12-card suit, so the goal is
//!   guessed as its same-color partner.
//! - Confidence (in tenths, capped at 8) grows with the gap between the
//!   longest and second-longest suit.
//!
//! Priorities, first match wins:
//! 1. Buy goal-suit offers priced below ~1.2x estimated value.
//! 2. Sell into bids that pay enough (non-goal readily, goal only at a premium).
//! 3. Offer non-goal cards, or undercut someone else's offer while still
//!    above value.
//! 4. Bid for the goal suit while keeping a cash reserve.
//! 5. Pass.
//!
//! Every quote is checked with the view's `can_*` helpers before it is
//! returned, so this bot never submits an illegal action.

use crate::ai::{AiError, AiPlayer};
use crate::domain::{Action, PlayerView, Suit, SUITS};

/// Below this cash level the bot stops bidding.
const CASH_RESERVE: u32 = 50;

/// Decisions are a pure function of the view, so no seed is kept.
#[derive(Clone, Default)]
pub struct Heuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GoalEstimate {
    suit: Suit,
    /// Tenths, 3..=8.
    confidence: u32,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn estimate_goal(view: &PlayerView) -> GoalEstimate {
        let longest = view.hand.longest();
        let mut counts: Vec<u8> = view.hand.values().copied().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let gap = u32::from(counts[0] - counts[1]);
        GoalEstimate {
            suit: longest.partner(),
            confidence: (3 + gap).min(8),
        }
    }

    /// Estimated end-of-game worth of one card of `suit`.
    fn card_value(suit: Suit, goal: GoalEstimate) -> u32 {
        if suit == goal.suit {
            // Per-card bonus plus an expected slice of the majority remainder.
            10 + 25 * goal.confidence / 10
        } else {
            ((50 - 5 * goal.confidence) / 10).max(1)
        }
    }

    fn should_buy(suit: Suit, price: u32, goal: GoalEstimate) -> bool {
        let value = Self::card_value(suit, goal);
        // price < 1.2 * value
        suit == goal.suit && price * 10 < value * 12
    }

    fn should_sell(view: &PlayerView, suit: Suit, price: u32, goal: GoalEstimate) -> bool {
        let value = Self::card_value(suit, goal);
        if suit == goal.suit {
            (view.hand[suit] > 3 && price * 10 >= value * 8) || price * 10 >= value * 15
        } else {
            price * 10 >= value * 8
        }
    }

    fn pick_offer(view: &PlayerView, goal: GoalEstimate) -> Option<Action> {
        for suit in SUITS {
            if suit == goal.suit || !view.hand.has(suit) {
                continue;
            }
            let value = Self::card_value(suit, goal);
            let price = match view.offers[suit] {
                None => (value + 2).max(5),
                Some(q) if q.player != view.position => {
                    let undercut = q.price.saturating_sub(1);
                    if undercut < value {
                        continue;
                    }
                    undercut
                }
                Some(_) => continue,
            };
            if view.can_offer(suit, price) {
                return Some(Action::Offer {
                    suit,
                    price: i64::from(price),
                });
            }
        }
        None
    }

    fn pick_bid(view: &PlayerView, goal: GoalEstimate) -> Option<Action> {
        if view.money <= CASH_RESERVE {
            return None;
        }
        let suit = goal.suit;
        let value = Self::card_value(suit, goal);
        let price = match view.bids[suit] {
            None => value.saturating_sub(5).min(view.money / 4),
            Some(q) if q.player != view.position => {
                let raise = q.price + 1;
                if raise > value {
                    return None;
                }
                raise
            }
            Some(_) => return None,
        };
        view.can_bid(suit, price).then_some(Action::Bid {
            suit,
            price: i64::from(price),
        })
    }
}

impl AiPlayer for Heuristic {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError> {
        let goal = Self::estimate_goal(view);

        for suit in SUITS {
            if let Some(q) = view.offers[suit] {
                if view.can_buy(suit) && Self::should_buy(suit, q.price, goal) {
                    return Ok(Action::Buy { suit });
                }
            }
        }

        for suit in SUITS {
            if let Some(q) = view.bids[suit] {
                if view.can_sell(suit) && Self::should_sell(view, suit, q.price, goal) {
                    return Ok(Action::Sell { suit });
                }
            }
        }

        if let Some(action) = Self::pick_offer(view, goal) {
            return Ok(action);
        }
        if let Some(action) = Self::pick_bid(view, goal) {
            return Ok(action);
        }
        Ok(Action::Pass)
    }
}
