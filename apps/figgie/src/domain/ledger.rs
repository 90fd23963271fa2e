//! Per-player money and cards, plus the pot.

use serde::Serialize;

use super::dealing::DeckComposition;
use super::state::PlayerId;
use super::suit_map::Hand;
use super::suits::{Suit, SUITS};
use crate::errors::domain::{DomainError, InvariantKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub money: u32,
    pub hand: Hand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ledger {
    players: Vec<Player>,
    pot: u32,
}

impl Ledger {
    /// Seat players with their dealt hands and move each ante into the pot.
    pub fn seat(hands: Vec<Hand>, starting_money: u32, ante: u32) -> Self {
        let pot = ante * hands.len() as u32;
        let players = hands
            .into_iter()
            .map(|hand| Player {
                money: starting_money - ante,
                hand,
            })
            .collect();
        Self { players, pot }
    }

    pub fn from_parts(players: Vec<Player>, pot: u32) -> Self {
        Self { players, pot }
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.players.get(usize::from(id)).ok_or_else(|| {
            DomainError::invariant(InvariantKind::UnknownPlayer, format!("player {id}"))
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    /// Sum of all players' money plus the pot.
    pub fn total_money(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.money)).sum::<u64>() + u64::from(self.pot)
    }

    pub fn suit_total(&self, suit: Suit) -> u32 {
        self.players.iter().map(|p| u32::from(p.hand[suit])).sum()
    }

    /// Move `price` from buyer to seller and one `suit` card from seller to
    /// buyer. Fails without mutating if either side cannot cover it.
    pub fn transfer_card_for_cash(
        &mut self,
        suit: Suit,
        price: u32,
        buyer: PlayerId,
        seller: PlayerId,
    ) -> Result<(), DomainError> {
        if buyer == seller {
            return Err(DomainError::invariant(
                InvariantKind::InsufficientHoldings,
                format!("player {buyer} cannot trade with itself"),
            ));
        }
        let b = self.player(buyer)?;
        if b.money < price {
            return Err(DomainError::invariant(
                InvariantKind::InsufficientHoldings,
                format!("buyer {buyer} has {} < {price}", b.money),
            ));
        }
        let s = self.player(seller)?;
        if !s.hand.has(suit) {
            return Err(DomainError::invariant(
                InvariantKind::InsufficientHoldings,
                format!("seller {seller} holds no {suit}"),
            ));
        }

        let (b, s) = (usize::from(buyer), usize::from(seller));
        self.players[b].money -= price;
        self.players[s].money += price;
        self.players[s].hand.remove(suit);
        self.players[b].hand.add(suit);
        Ok(())
    }

    /// Money and per-suit card totals must match the deck and the game's
    /// fixed total.
    pub fn check_conservation(
        &self,
        deck: &DeckComposition,
        expected_money: u64,
    ) -> Result<(), DomainError> {
        let money = self.total_money();
        if money != expected_money {
            return Err(DomainError::invariant(
                InvariantKind::MoneyNotConserved,
                format!("total money {money}, expected {expected_money}"),
            ));
        }
        for suit in SUITS {
            let held = self.suit_total(suit);
            if held != u32::from(deck.count(suit)) {
                return Err(DomainError::invariant(
                    InvariantKind::CardsNotConserved,
                    format!("{suit}: {held} held, deck has {}", deck.count(suit)),
                ));
            }
        }
        Ok(())
    }
}
