//! Per-game metrics for simulation output.

use figgie::domain::{ActionOutcome, DeckComposition, GameSummary, Suit, TerminationReason};
use figgie::services::RoundResult;
use serde::Serialize;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub player_metrics: Vec<PlayerMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<GameSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub ai_types: Vec<String>,
    pub total_games: u32,
    pub max_turns: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub goal_suit: Suit,
    pub deck: DeckComposition,
    pub termination: TerminationReason,
    pub turns: u32,
    pub trades: usize,
    pub balances: Vec<u32>,
    pub nets: Vec<i64>,
    /// `None` when the top net was shared.
    pub winner: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub net: i64,
    pub goal_cards: u8,
    pub majority_share: u32,
    pub cards_bought: u32,
    pub cards_sold: u32,
    pub rejected_actions: u32,
}

/// Build metrics for one finished round.
pub fn build_game_metrics(
    round: &RoundResult,
    ai_types: &[String],
    total_games: u32,
    max_turns: u32,
    detailed: bool,
) -> GameMetrics {
    let summary = &round.summary;
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let player_metrics = summary
        .players
        .iter()
        .map(|p| {
            let seat = p.player;
            PlayerMetrics {
                seat,
                ai_type: ai_types
                    .get(usize::from(seat))
                    .cloned()
                    .unwrap_or_default(),
                net: p.net,
                goal_cards: p.goal_cards,
                majority_share: p.majority_share,
                cards_bought: summary.trades.iter().filter(|t| t.buyer == seat).count() as u32,
                cards_sold: summary.trades.iter().filter(|t| t.seller == seat).count() as u32,
                rejected_actions: summary
                    .log
                    .iter()
                    .filter(|r| {
                        r.player == seat && matches!(r.outcome, ActionOutcome::Rejected { .. })
                    })
                    .count() as u32,
            }
        })
        .collect();

    GameMetrics {
        game_id: round.round + 1,
        seed: round.seed,
        timestamp,
        config: RunConfig {
            ai_types: ai_types.to_vec(),
            total_games,
            max_turns,
        },
        result: GameResultMetrics {
            goal_suit: summary.goal_suit,
            deck: summary.deck,
            termination: summary.termination,
            turns: summary.turns,
            trades: summary.trades.len(),
            balances: summary.players.iter().map(|p| p.balance).collect(),
            nets: summary.players.iter().map(|p| p.net).collect(),
            winner: summary.round_winner(),
        },
        player_metrics,
        detail: detailed.then(|| summary.clone()),
    }
}

/// One CSV summary row; seats are flattened into columns.
pub fn csv_record(metrics: &GameMetrics) -> Vec<String> {
    let mut row = vec![
        metrics.game_id.to_string(),
        metrics.seed.to_string(),
        metrics.result.goal_suit.to_string(),
        metrics.result.turns.to_string(),
        format!("{:?}", metrics.result.termination),
        metrics
            .result
            .winner
            .map(|w| w.to_string())
            .unwrap_or_else(|| "draw".to_string()),
    ];
    row.extend(metrics.result.nets.iter().map(|n| n.to_string()));
    row.extend(metrics.config.ai_types.iter().cloned());
    row
}

pub fn csv_header(num_players: usize) -> Vec<String> {
    let mut header: Vec<String> = ["game_id", "seed", "goal_suit", "turns", "termination", "winner"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    header.extend((0..num_players).map(|s| format!("seat{s}_net")));
    header.extend((0..num_players).map(|s| format!("seat{s}_ai")));
    header
}
