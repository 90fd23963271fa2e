//! Game flow orchestration - drives one game session against its agents.
//!
//! The domain decides what a turn does; this service supplies each turn's
//! action by asking the seated agent, converting agent failures into a
//! recorded pass so a misbehaving agent only ever forfeits its turn.

use tracing::{info, warn};

use crate::ai::{create_ai, AiConfig, AiPlayer};
use crate::config::GameConfig;
use crate::domain::{derive_agent_seed, take_turn, GameState, GameSummary, PlayerView, TurnRecord};
use crate::errors::domain::{ConfigKind, DomainError};

/// One running game plus the agents seated at it, in seat order.
pub struct GameFlow {
    state: GameState,
    agents: Vec<Box<dyn AiPlayer>>,
}

impl GameFlow {
    /// Deal a new game for `config` and seat `agents`.
    pub fn new(config: &GameConfig, agents: Vec<Box<dyn AiPlayer>>) -> Result<Self, DomainError> {
        let state = GameState::deal(config.num_players, config.max_turns, config.seed)?;
        info!(
            num_players = config.num_players,
            max_turns = config.max_turns,
            seed = config.seed,
            "Game started"
        );
        Self::from_state(state, agents)
    }

    /// Seat `agents` at an existing game.
    pub fn from_state(
        state: GameState,
        agents: Vec<Box<dyn AiPlayer>>,
    ) -> Result<Self, DomainError> {
        if agents.len() != usize::from(state.num_players()) {
            return Err(DomainError::config(
                ConfigKind::AgentCountMismatch,
                format!(
                    "{} agents for {} seats",
                    agents.len(),
                    state.num_players()
                ),
            ));
        }
        Ok(Self { state, agents })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminated()
    }

    /// Ask the current player's agent for an action and take the turn.
    pub fn step(&mut self) -> Result<TurnRecord, DomainError> {
        let player = self.state.current_player();
        let view = PlayerView::for_player(&self.state, player)?;
        let agent = &self.agents[usize::from(player)];

        let decision = agent.choose_action(&view).map_err(|e| {
            warn!(player, turn = view.turn, error = %e, "Agent failed; substituting pass");
            e.reject_reason()
        });
        take_turn(&mut self.state, decision)
    }

    /// Play until the game terminates and summarize it.
    pub fn run(mut self) -> Result<GameSummary, DomainError> {
        while !self.is_finished() {
            self.step()?;
        }
        let summary = GameSummary::from_state(&self.state)?;
        info!(
            goal_suit = %summary.goal_suit,
            turns = summary.turns,
            trades = summary.trades.len(),
            termination = ?summary.termination,
            "Game finished"
        );
        Ok(summary)
    }
}

/// Play one complete game.
pub fn play_game(
    config: &GameConfig,
    agents: Vec<Box<dyn AiPlayer>>,
) -> Result<GameSummary, DomainError> {
    GameFlow::new(config, agents)?.run()
}

/// Build one agent per name, seeding each from the game seed and its seat.
///
/// A seed already present in `base` is combined with the seat the same way,
/// so two seats running the same bot still draw independent streams.
pub fn build_agents(
    names: &[String],
    base: &AiConfig,
    game_seed: u64,
) -> Result<Vec<Box<dyn AiPlayer>>, DomainError> {
    names
        .iter()
        .enumerate()
        .map(|(seat, name)| {
            let seat = seat as u8;
            let seed = derive_agent_seed(base.seed().unwrap_or(game_seed), seat);
            let config = AiConfig {
                seed: Some(seed),
                custom: base.custom.clone(),
            };
            create_ai(name, &config)
        })
        .collect()
}
