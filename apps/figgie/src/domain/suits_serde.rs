//! Serialization and deserialization for suits (lowercase names).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::suits::{Suit, SUITS};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Wire form is exact: only the lowercase names.
        let s = String::deserialize(deserializer)?;
        SUITS
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid suit: {s}")))
    }
}
