//! Tournament: many independent games from one base seed.
//!
//! Round `k` is seeded with `derive_round_seed(seed, k)`. Rounds share no
//! state, so with the `parallel` feature they run on the rayon pool.
//! Results always come back in round order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::ai::AiPlayer;
use crate::config::GameConfig;
use crate::domain::{derive_round_seed, GameSummary, PlayerId};
use crate::errors::domain::DomainError;
use crate::services::game_flow::play_game;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeatStanding {
    pub seat: PlayerId,
    pub total_net: i64,
    /// Rounds this seat won outright.
    pub wins: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub round: u32,
    pub seed: u64,
    pub summary: GameSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentResult {
    pub rounds: Vec<RoundResult>,
    pub standings: Vec<SeatStanding>,
    /// Rounds whose top net was shared.
    pub draws: u32,
}

impl TournamentResult {
    fn tally(num_players: u8, rounds: Vec<RoundResult>) -> Self {
        let mut standings: Vec<SeatStanding> = (0..num_players)
            .map(|seat| SeatStanding {
                seat,
                ..SeatStanding::default()
            })
            .collect();
        let mut draws = 0;
        for round in &rounds {
            for p in &round.summary.players {
                standings[usize::from(p.player)].total_net += p.net;
            }
            match round.summary.round_winner() {
                Some(seat) => standings[usize::from(seat)].wins += 1,
                None => draws += 1,
            }
        }
        Self {
            rounds,
            standings,
            draws,
        }
    }
}

fn play_round<F>(config: &GameConfig, round: u32, make_agents: &F) -> Result<RoundResult, DomainError>
where
    F: Fn(u32, &GameConfig) -> Result<Vec<Box<dyn AiPlayer>>, DomainError>,
{
    let seed = derive_round_seed(config.seed, round);
    let round_config = GameConfig { seed, ..*config };
    let agents = make_agents(round, &round_config)?;
    let summary = play_game(&round_config, agents)?;
    Ok(RoundResult {
        round,
        seed,
        summary,
    })
}

/// Play `rounds` games. `make_agents` builds the seated agents for each
/// round from that round's config.
pub fn run_tournament<F>(
    config: &GameConfig,
    rounds: u32,
    make_agents: F,
) -> Result<TournamentResult, DomainError>
where
    F: Fn(u32, &GameConfig) -> Result<Vec<Box<dyn AiPlayer>>, DomainError> + Sync,
{
    info!(rounds, seed = config.seed, "Tournament started");

    #[cfg(feature = "parallel")]
    let results: Result<Vec<RoundResult>, DomainError> = (0..rounds)
        .into_par_iter()
        .map(|round| play_round(config, round, &make_agents))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<RoundResult>, DomainError> = (0..rounds)
        .map(|round| play_round(config, round, &make_agents))
        .collect();

    let result = TournamentResult::tally(config.num_players, results?);
    info!(
        rounds,
        draws = result.draws,
        "Tournament finished"
    );
    Ok(result)
}
