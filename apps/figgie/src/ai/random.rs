//! Random AI player - picks uniformly among candidate actions.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{Action, PlayerView};

/// AI that picks a random legal action.
///
/// Candidates come from [`PlayerView::candidate_actions`], so every choice is
/// legal and pass is always possible. With a seed the sequence of choices
/// is reproducible.
///
/// ```rust,ignore
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// let entropy_ai = RandomPlayer::new(None);
/// ```
pub struct RandomPlayer {
    /// `AiPlayer` takes `&self`; the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_action(&self, view: &PlayerView) -> Result<Action, AiError> {
        let candidates = view.candidate_actions();

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        candidates
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("No candidate actions".into()))
    }
}
