//! Scripted AI player - replays a fixed list of raw JSON actions.
//!
//! Each call consumes the next script entry; once the script is exhausted
//! the player passes. Entries are parsed exactly like an out-of-process
//! agent's output, so malformed entries surface as `AiError::InvalidMove`.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value as JsonValue;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{parse_action, Action, PlayerView};

pub struct ScriptedPlayer {
    script: Mutex<VecDeque<JsonValue>>,
}

impl ScriptedPlayer {
    pub const NAME: &'static str = "scripted";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(script: impl IntoIterator<Item = JsonValue>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Script entries not yet played.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl AiPlayer for ScriptedPlayer {
    fn choose_action(&self, _view: &PlayerView) -> Result<Action, AiError> {
        let next = self
            .script
            .lock()
            .map_err(|e| AiError::Internal(format!("script lock poisoned: {e}")))?
            .pop_front();
        match next {
            None => Ok(Action::Pass),
            Some(raw) => parse_action(&raw)
                .map_err(|reason| AiError::InvalidMove(format!("{reason}: {raw}"))),
        }
    }
}
