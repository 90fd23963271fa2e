//! Agent actions, the reasons an action can be rejected, and parsing
//! actions from untrusted JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::suits::Suit;

/// One agent decision. Prices are signed so that zero and negative values
/// survive parsing and are rejected by validation with a precise reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Bid {
        suit: Suit,
        price: i64,
    },
    #[serde(alias = "ask")]
    Offer {
        suit: Suit,
        price: i64,
    },
    Buy {
        suit: Suit,
    },
    Sell {
        suit: Suit,
    },
    Pass,
}

impl Action {
    pub fn suit(&self) -> Option<Suit> {
        match *self {
            Action::Bid { suit, .. }
            | Action::Offer { suit, .. }
            | Action::Buy { suit }
            | Action::Sell { suit } => Some(suit),
            Action::Pass => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }
}

/// Why an action was downgraded to a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Not a well-formed action value.
    Malformed,
    /// The agent failed to produce an action at all.
    AgentError,
    NonPositivePrice,
    /// Price does not fit the engine's money type.
    PriceOutOfRange,
    InsufficientFunds,
    NoCards,
    NotImprovingBid,
    NotImprovingOffer,
    CrossesOffer,
    CrossesBid,
    NoOffer,
    NoBid,
    SelfTrade,
    GameOver,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::AgentError => "agent_error",
            RejectReason::NonPositivePrice => "non_positive_price",
            RejectReason::PriceOutOfRange => "price_out_of_range",
            RejectReason::InsufficientFunds => "insufficient_funds",
            RejectReason::NoCards => "no_cards",
            RejectReason::NotImprovingBid => "not_improving_bid",
            RejectReason::NotImprovingOffer => "not_improving_offer",
            RejectReason::CrossesOffer => "crosses_offer",
            RejectReason::CrossesBid => "crosses_bid",
            RejectReason::NoOffer => "no_offer",
            RejectReason::NoBid => "no_bid",
            RejectReason::SelfTrade => "self_trade",
            RejectReason::GameOver => "game_over",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an agent's raw JSON action. Anything that does not match the
/// action schema is `Malformed`; semantic checks happen later.
pub fn parse_action(value: &JsonValue) -> Result<Action, RejectReason> {
    Action::deserialize(value).map_err(|_| RejectReason::Malformed)
}
