//! Deterministic deck generation, goal-suit selection and dealing.

use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use tracing::debug;

use super::rules::{table_entry, DECK_SIZE, SUIT_SIZES};
use super::seed_derivation::{derive_dealing_seed, derive_deck_seed};
use super::suit_map::{Hand, SuitMap};
use super::suits::{Suit, SUITS};
use crate::errors::domain::{ConfigKind, DomainError};

/// Card count per suit for one game. Always a permutation of
/// `{12, 10, 10, 8}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeckComposition(SuitMap<u8>);

impl DeckComposition {
    /// Validate that `counts` is a permutation of the standard suit sizes.
    pub fn new(counts: SuitMap<u8>) -> Result<Self, DomainError> {
        let mut sorted: Vec<u8> = counts.values().copied().collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        if sorted != SUIT_SIZES {
            return Err(DomainError::config(
                ConfigKind::InvalidDeck,
                format!("suit counts {sorted:?} are not a permutation of {SUIT_SIZES:?}"),
            ));
        }
        Ok(Self(counts))
    }

    pub fn count(&self, suit: Suit) -> u8 {
        self.0[suit]
    }

    pub fn counts(&self) -> &SuitMap<u8> {
        &self.0
    }

    /// The suit holding 12 cards.
    pub fn twelve_suit(&self) -> Suit {
        self.0.longest()
    }

    /// Suits eligible to be the goal: the 12-suit's partner, which by
    /// construction holds 8 or 10 cards.
    pub fn goal_candidates(&self) -> Vec<Suit> {
        let twelve = self.twelve_suit();
        Suit::of_color(twelve.color())
            .filter(|&s| s != twelve && matches!(self.count(s), 8 | 10))
            .collect()
    }

    pub fn is_valid_goal(&self, goal: Suit) -> bool {
        self.goal_candidates().contains(&goal)
    }
}

/// Randomly assign `{12, 10, 10, 8}` to the four suits.
pub fn generate_deck<R: Rng + ?Sized>(rng: &mut R) -> DeckComposition {
    let mut sizes = SUIT_SIZES;
    sizes.shuffle(rng);
    DeckComposition(SuitMap::from_array(sizes))
}

/// Pick the goal suit uniformly among the eligible suits.
pub fn choose_goal_suit<R: Rng + ?Sized>(
    deck: &DeckComposition,
    rng: &mut R,
) -> Result<Suit, DomainError> {
    deck.goal_candidates()
        .choose(rng)
        .copied()
        .ok_or_else(|| {
            DomainError::config(
                ConfigKind::InvalidGoalSuit,
                format!("no goal suit candidate for deck {:?}", deck.counts()),
            )
        })
}

/// Shuffle the deck's cards and deal them round-robin to `num_players`.
pub fn deal_hands<R: Rng + ?Sized>(
    deck: &DeckComposition,
    num_players: u8,
    rng: &mut R,
) -> Result<Vec<Hand>, DomainError> {
    let entry = table_entry(num_players)?;

    let mut cards: Vec<Suit> = Vec::with_capacity(usize::from(DECK_SIZE));
    for suit in SUITS {
        cards.extend(std::iter::repeat_n(suit, usize::from(deck.count(suit))));
    }
    cards.shuffle(rng);

    let mut hands = vec![Hand::default(); usize::from(num_players)];
    for (i, suit) in cards.into_iter().enumerate() {
        hands[i % usize::from(num_players)][suit] += 1;
    }

    debug_assert!(hands
        .iter()
        .all(|h| h.total() == u32::from(entry.hand_size)));
    Ok(hands)
}

/// Everything drawn at random when a game is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub deck: DeckComposition,
    pub goal_suit: Suit,
    pub hands: Vec<Hand>,
}

/// Draw the deck, goal suit and hands for a game from `seed`.
pub fn deal(num_players: u8, seed: u64) -> Result<Deal, DomainError> {
    table_entry(num_players)?;

    let mut deck_rng = ChaCha20Rng::seed_from_u64(derive_deck_seed(seed));
    let deck = generate_deck(&mut deck_rng);
    let goal_suit = choose_goal_suit(&deck, &mut deck_rng)?;

    let mut deal_rng = ChaCha20Rng::seed_from_u64(derive_dealing_seed(seed));
    let hands = deal_hands(&deck, num_players, &mut deal_rng)?;

    debug!(num_players, seed, deck = ?deck.counts(), "Dealt new game");
    Ok(Deal {
        deck,
        goal_suit,
        hands,
    })
}
