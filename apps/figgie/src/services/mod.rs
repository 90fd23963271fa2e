pub mod game_flow;
pub mod tournament;

pub use game_flow::{build_agents, play_game, GameFlow};
pub use tournament::{run_tournament, RoundResult, SeatStanding, TournamentResult};
