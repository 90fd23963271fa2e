//! Lenient parsing of suits from human-typed text. Agent JSON goes through
//! the exact serde form instead.

use std::str::FromStr;

use super::suits::{Suit, SUITS};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Suit {
    type Err = DomainError;

    /// Accepts the full lowercase name in any case, or the single-letter
    /// initial (`S`, `C`, `H`, `D`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if let Some(suit) = SUITS.iter().find(|suit| suit.name() == lowered) {
            return Ok(*suit);
        }
        match lowered.as_str() {
            "s" => Ok(Suit::Spades),
            "c" => Ok(Suit::Clubs),
            "h" => Ok(Suit::Hearts),
            "d" => Ok(Suit::Diamonds),
            _ => Err(DomainError::validation(
                ValidationKind::UnknownSuit,
                format!("Unknown suit: {s}"),
            )),
        }
    }
}
