//! AI configuration handling.
//!
//! Provides a typed view over a bot's JSON configuration: standard fields
//! are extracted, everything else is preserved for the bot itself.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for AI players.
///
/// # Standard Fields
///
/// - `seed`: Optional RNG seed. Seeded bots must make the same decisions
///   for the same views.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345}
/// ```
///
/// A scripted bot keeps its script as a custom field:
/// ```json
/// {"script": [{"type": "bid", "suit": "hearts", "price": 4}, {"type": "pass"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// AI-specific configuration, preserved verbatim.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
