// Proptest generators for domain types.
// Prices deliberately include zero, negatives and values far above any
// player's money so validation paths get exercised.

use proptest::prelude::*;

use crate::domain::{Action, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Clubs),
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
    ]
}

/// Generate a price, mostly in a plausible trading range
pub fn price() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => 1i64..40,
        1 => -5i64..=0,
        1 => 300i64..1000,
    ]
}

/// Generate any action, legal or not
pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (suit(), price()).prop_map(|(suit, price)| Action::Bid { suit, price }),
        3 => (suit(), price()).prop_map(|(suit, price)| Action::Offer { suit, price }),
        2 => suit().prop_map(|suit| Action::Buy { suit }),
        2 => suit().prop_map(|suit| Action::Sell { suit }),
        1 => Just(Action::Pass),
    ]
}

/// Generate a player count the rules accept
pub fn num_players() -> impl Strategy<Value = u8> {
    prop_oneof![Just(4u8), Just(5u8)]
}
