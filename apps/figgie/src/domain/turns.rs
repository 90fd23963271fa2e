//! Turn scheduling: one action per turn, round-robin, with termination.

use serde::Serialize;
use tracing::info;

use super::actions::{Action, RejectReason};
use super::execution::{apply, ActionOutcome};
use super::state::{GameState, Phase, PlayerId, TerminationReason};
use crate::errors::domain::DomainError;

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub player: PlayerId,
    /// The action the agent produced, if it produced a well-formed one.
    pub submitted: Option<Action>,
    pub outcome: ActionOutcome,
}

/// Take the current player's turn.
///
/// `submitted` is the agent's decision; an `Err` carries the reason the
/// agent failed to produce a usable action and is recorded as a rejection.
/// Calling this on a terminated game is an error.
pub fn take_turn(
    state: &mut GameState,
    submitted: Result<Action, RejectReason>,
) -> Result<TurnRecord, DomainError> {
    state.require_running()?;

    let player = state.current_player();
    let turn = state.turn;
    let (submitted, outcome) = match submitted {
        Ok(action) => (Some(action), apply(state, player, action)?),
        Err(reason) => (None, ActionOutcome::Rejected { reason }),
    };

    state.turn += 1;
    if outcome.is_noop() {
        state.consecutive_passes = state.consecutive_passes.saturating_add(1);
    } else {
        state.consecutive_passes = 0;
    }

    if state.consecutive_passes >= state.num_players() {
        state.phase = Phase::Terminated(TerminationReason::AllPassed);
    } else if state.turn >= state.max_turns {
        state.phase = Phase::Terminated(TerminationReason::TurnLimit);
    }
    if let Phase::Terminated(reason) = state.phase {
        info!(turns = state.turn, trades = state.trades.len(), ?reason, "Game terminated");
    }

    let record = TurnRecord {
        turn,
        player,
        submitted,
        outcome,
    };
    state.log.push(record.clone());
    Ok(record)
}
