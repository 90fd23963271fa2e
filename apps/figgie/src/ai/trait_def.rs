//! AI player trait definition.

use thiserror::Error;

use crate::domain::{Action, PlayerView, RejectReason};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// AI failed to make a decision within timeout
    #[error("AI decision timeout")]
    Timeout,
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI produced something that is not an action
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

impl AiError {
    /// How the engine records this failure when it substitutes a pass.
    pub fn reject_reason(&self) -> RejectReason {
        match self {
            AiError::InvalidMove(_) => RejectReason::Malformed,
            AiError::Timeout | AiError::Internal(_) => RejectReason::AgentError,
        }
    }
}

/// Trait for AI players.
///
/// Implementations receive the acting player's view and return one action.
/// The action does not have to be legal: the engine validates it and
/// substitutes a pass when it is not. Returning `Err` also costs the player
/// its turn, never the game.
pub trait AiPlayer: Send + Sync {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError>;
}
