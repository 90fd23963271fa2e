use std::env;

use tracing::info;

use crate::domain::rules::{table_entry, DEFAULT_MAX_TURNS};
use crate::errors::domain::{ConfigKind, DomainError};

pub const ENV_PLAYERS: &str = "FIGGIE_PLAYERS";
pub const ENV_MAX_TURNS: &str = "FIGGIE_MAX_TURNS";
pub const ENV_SEED: &str = "FIGGIE_SEED";

/// Everything the engine needs to create a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub num_players: u8,
    pub max_turns: u32,
    pub seed: u64,
}

impl GameConfig {
    /// Validated constructor: 4 or 5 players, at least one turn.
    pub fn new(num_players: u8, max_turns: u32, seed: u64) -> Result<Self, DomainError> {
        table_entry(num_players)?;
        if max_turns == 0 {
            return Err(DomainError::config(
                ConfigKind::InvalidMaxTurns,
                "max turns must be positive",
            ));
        }
        Ok(Self {
            num_players,
            max_turns,
            seed,
        })
    }

    /// Four players, default turn limit.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            num_players: 4,
            max_turns: DEFAULT_MAX_TURNS,
            seed,
        }
    }

    /// Build from `FIGGIE_PLAYERS`, `FIGGIE_MAX_TURNS` and `FIGGIE_SEED`.
    ///
    /// Missing variables fall back to defaults; a missing seed is drawn from
    /// OS entropy and logged so the game can be reproduced.
    pub fn from_env() -> Result<Self, DomainError> {
        let num_players = parse_var::<u8>(ENV_PLAYERS)?.unwrap_or(4);
        let max_turns = parse_var::<u32>(ENV_MAX_TURNS)?.unwrap_or(DEFAULT_MAX_TURNS);
        let seed = match parse_var::<u64>(ENV_SEED)? {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "No {ENV_SEED} set; using random seed");
                seed
            }
        };
        Self::new(num_players, max_turns, seed)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

/// Read and parse an optional environment variable.
fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, DomainError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            DomainError::config(
                ConfigKind::InvalidEnvVar,
                format!("{name}='{raw}' is not a valid value"),
            )
        }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(DomainError::config(
            ConfigKind::InvalidEnvVar,
            format!("{name} is not valid unicode"),
        )),
    }
}
