//! Fixed-size per-suit storage.
//!
//! `SuitMap<T>` is indexed by [`Suit`] and serializes as a JSON object
//! keyed by lowercase suit name. `Hand` is the card-count specialization.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::suits::{Suit, SUITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SuitMap<T>([T; 4]);

impl<T> SuitMap<T> {
    pub const fn from_array(values: [T; 4]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Suit) -> T) -> Self {
        Self(SUITS.map(&mut f))
    }

    /// `(suit, &value)` pairs in canonical suit order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        SUITS.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn map<U>(&self, mut f: impl FnMut(Suit, &T) -> U) -> SuitMap<U> {
        SuitMap::from_fn(|suit| f(suit, &self.0[suit.index()]))
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &T {
        &self.0[suit.index()]
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.0[suit.index()]
    }
}

impl<T: Serialize> Serialize for SuitMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for SuitMap<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut entries: BTreeMap<Suit, T> = BTreeMap::deserialize(deserializer)?;
        Ok(SuitMap::from_fn(|suit| {
            entries.remove(&suit).unwrap_or_default()
        }))
    }
}

/// Card counts per suit.
pub type Hand = SuitMap<u8>;

impl SuitMap<u8> {
    pub fn count(&self, suit: Suit) -> u8 {
        self[suit]
    }

    pub fn has(&self, suit: Suit) -> bool {
        self[suit] > 0
    }

    pub fn total(&self) -> u32 {
        self.values().map(|&c| u32::from(c)).sum()
    }

    /// Add one card of `suit`. Returns false on overflow.
    pub fn add(&mut self, suit: Suit) -> bool {
        match self[suit].checked_add(1) {
            Some(n) => {
                self[suit] = n;
                true
            }
            None => false,
        }
    }

    /// Remove one card of `suit`. Returns false if none held.
    pub fn remove(&mut self, suit: Suit) -> bool {
        match self[suit].checked_sub(1) {
            Some(n) => {
                self[suit] = n;
                true
            }
            None => false,
        }
    }

    /// Suit with the highest count; ties resolve to canonical order.
    pub fn longest(&self) -> Suit {
        let mut best = Suit::Spades;
        for (suit, &count) in self.iter() {
            if count > self[best] {
                best = suit;
            }
        }
        best
    }
}
