//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same config ⇒ same behavior.

use crate::ai::{AiConfig, AiPlayer, Heuristic, RandomPlayer, ScriptedPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: ScriptedPlayer::NAME,
        version: ScriptedPlayer::VERSION,
        make: make_scripted,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(config.seed()))
}

fn make_heuristic(_config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new())
}

fn make_scripted(config: &AiConfig) -> Box<dyn AiPlayer> {
    let script = config
        .get_custom("script")
        .and_then(|s| s.as_array())
        .cloned()
        .unwrap_or_default();
    Box::new(ScriptedPlayer::new(script))
}
