//! Figgie simulator CLI - runs tournaments between built-in bots.
//!
//! Games run entirely in memory; each finished game is written as JSON
//! (JSONL or one array) alongside a CSV summary row.

mod metrics;
mod output;
mod types;

use std::time::Instant;

use clap::Parser;
use figgie::ai::registered_ais;
use figgie::config::GameConfig;
use figgie::domain::rules::DEFAULT_MAX_TURNS;
use figgie::services::{build_agents, run_tournament, TournamentResult};
use figgie::AiConfig;
use metrics::build_game_metrics;
use output::OutputWriter;
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "figgie-simulator")]
#[command(about = "Run Figgie tournaments between built-in bots")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Comma-separated bot per seat (4 or 5 seats)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "heuristic,heuristic,random,random"
    )]
    players: Vec<String>,

    /// Tournament seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Turn limit per game
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, value_enum, default_value = "basic")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    figgie::telemetry::init_tracing(filter, args.json_logs);

    for name in &args.players {
        if figgie::ai::by_name(name).is_none() {
            let known: Vec<&str> = registered_ais().iter().map(|f| f.name).collect();
            return Err(format!("Unknown AI type: {name} (known: {})", known.join(", ")).into());
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let num_players = u8::try_from(args.players.len())
        .map_err(|_| format!("too many players: {}", args.players.len()))?;
    let config = GameConfig::new(num_players, args.max_turns, seed)?;

    if args.show_output {
        info!(games = args.games, seed, players = ?args.players, "Starting simulator");
    }

    let mut output_writer = OutputWriter::new(
        &args.output_dir,
        args.output_format,
        args.compress,
        args.players.len(),
    )?;

    let start = Instant::now();
    let base = AiConfig::empty();
    let result = run_tournament(&config, args.games, |_, round_config| {
        build_agents(&args.players, &base, round_config.seed)
    })?;
    let elapsed = start.elapsed();

    let detailed = args.metrics_level == MetricsLevel::Detailed;
    for round in &result.rounds {
        let metrics = build_game_metrics(
            round,
            &args.players,
            args.games,
            args.max_turns,
            detailed,
        );
        if let Err(e) = output_writer.write_game(&metrics) {
            warn!("Failed to write metrics for game {}: {}", metrics.game_id, e);
        }
    }

    let (json_path, csv_path) = {
        let (j, c) = output_writer.output_paths();
        (j.clone(), c.clone())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", json_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&result, &args.players, elapsed);
    }

    Ok(())
}

fn print_summary(result: &TournamentResult, players: &[String], elapsed: std::time::Duration) {
    let games = result.rounds.len();
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {games}");
    println!("Total time: {elapsed:?}");
    if games == 0 {
        return;
    }
    println!("Average time per game: {:?}", elapsed / games as u32);
    println!("Draws: {}", result.draws);

    println!("\n=== Results by Seat ===");
    for standing in &result.standings {
        let seat = usize::from(standing.seat);
        let nets: Vec<i64> = result
            .rounds
            .iter()
            .filter_map(|r| r.summary.players.get(seat).map(|p| p.net))
            .collect();
        let min = nets.iter().min().copied().unwrap_or(0);
        let max = nets.iter().max().copied().unwrap_or(0);
        let avg = standing.total_net as f64 / games as f64;
        let win_rate = f64::from(standing.wins) / games as f64 * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            players.get(seat).map(String::as_str).unwrap_or("?"),
            avg,
            min,
            max,
            standing.wins,
            win_rate
        );
    }
}
