//! AI Simulator CLI - runs whole Love Letter matches in memory.
//!
//! Every seat is driven by an agent from the engine crate; results go to a
//! JSONL (or JSON) detail file plus a CSV summary.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use loveletter::config::match_config::parse_seed;
use loveletter::domain::{derive_game_seed, MAX_PLAYERS, MIN_PLAYERS};
use loveletter::{AiFailureMode, DomainError};
use metrics::{build_game_metrics, seed_hex};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Love Letter simulator for agent evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of players at the table (2-4)
    #[arg(short, long, default_value = "4", value_parser = parse_players)]
    players: usize,

    /// AI type for every seat
    #[arg(long, conflicts_with = "seat")]
    seats: Option<AiType>,

    /// AI type for the next seat; repeat per seat, unlisted seats play random
    #[arg(long)]
    seat: Vec<AiType>,

    /// Base seed, decimal or 0x-prefixed hex; per-game seeds derive from it
    #[arg(long, value_parser = parse_seed_arg)]
    seed: Option<u64>,

    /// What to do when an agent submits an illegal play
    #[arg(long, default_value = "fallback-random", value_parser = parse_failure_mode)]
    on_ai_failure: AiFailureMode,

    /// Stop each match after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, value_enum, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the detail file with gzip
    #[arg(long)]
    compress: bool,
}

fn parse_players(raw: &str) -> Result<usize, String> {
    let n: usize = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
        Ok(n)
    } else {
        Err(format!("players must be {MIN_PLAYERS}-{MAX_PLAYERS}"))
    }
}

fn parse_seed_arg(raw: &str) -> Result<u64, String> {
    parse_seed(raw).map_err(|e| e.to_string())
}

fn parse_failure_mode(raw: &str) -> Result<AiFailureMode, String> {
    raw.parse().map_err(|e: DomainError| e.to_string())
}

fn seat_types(args: &Args) -> Result<Vec<AiType>, String> {
    if let Some(all) = args.seats {
        return Ok(vec![all; args.players]);
    }
    if args.seat.len() > args.players {
        return Err(format!(
            "{} --seat values for {} players",
            args.seat.len(),
            args.players
        ));
    }
    let mut seats = args.seat.clone();
    seats.resize(args.players, AiType::Random);
    Ok(seats)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seats = seat_types(&args)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);
    if args.show_output {
        info!(
            games = args.games,
            players = args.players,
            seed = %seed_hex(base_seed),
            seats = ?seats,
            "Starting AI simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = derive_game_seed(base_seed, game_num);
        let simulator = Simulator::new(game_seed, args.on_ai_failure, args.max_rounds);

        match simulator.simulate_game(&seats) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(game_num, args.games, &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(
                        game_num,
                        scores = ?result.outcome.final_scores,
                        "Game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, seed = %seed_hex(game_seed), "Game failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, args.players, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    players: usize,
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = vec![0u32; players];
    let mut round_wins = vec![0usize; players];
    let mut rounds = 0usize;
    let mut substitutions = 0u32;
    let mut unfinished = 0u32;
    for result in results {
        let outcome = &result.outcome;
        match outcome.winner {
            Some(w) => wins[w as usize] += 1,
            None => unfinished += 1,
        }
        for (seat, count) in round_wins.iter_mut().enumerate() {
            *count += outcome.round_wins(seat as u8);
        }
        rounds += outcome.rounds.len();
        substitutions += outcome.total_substitutions();
    }

    println!(
        "Rounds: {rounds} (avg {:.1} per game), fallback plays: {substitutions}",
        rounds as f64 / results.len() as f64
    );
    if unfinished > 0 {
        println!("Stopped at round cap: {unfinished}");
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..players {
        let ai = results[0].ai_types[seat].factory_name();
        let win_rate = wins[seat] as f64 / results.len() as f64 * 100.0;
        let round_rate = round_wins[seat] as f64 / rounds.max(1) as f64 * 100.0;
        println!(
            "Seat {seat} ({ai}): wins={} ({win_rate:.1}%), rounds won={} ({round_rate:.1}%)",
            wins[seat], round_wins[seat]
        );
    }
}
