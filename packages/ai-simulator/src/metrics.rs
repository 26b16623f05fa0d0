//! Per-game metrics written by the simulator.

use loveletter::{MatchResult, RoundSummary};
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    /// Game seed as 16 hex digits.
    pub seed: String,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub players: usize,
    pub ai_types: Vec<String>,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u8>,
    pub winner: Option<u8>,
    pub rounds_played: usize,
    pub total_turns: u32,
    pub substitutions: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub winner: Option<u8>,
    pub turns: u32,
    pub substitutions: u32,
    pub eliminated: Vec<u8>,
}

impl From<&RoundSummary> for RoundMetrics {
    fn from(round: &RoundSummary) -> Self {
        Self {
            round_no: round.round_no,
            winner: round.winner,
            turns: round.turns,
            substitutions: round.substitutions,
            eliminated: round.eliminations.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub final_score: u8,
    pub rounds_won: usize,
    pub times_eliminated: usize,
    pub round_win_pct: f64,
}

pub fn seed_hex(seed: u64) -> String {
    hex::encode(seed.to_be_bytes())
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let outcome = &result.outcome;
    let ai_types: Vec<String> = result
        .ai_types
        .iter()
        .map(|t| t.factory_name().to_string())
        .collect();
    let player_metrics = ai_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| build_player_metrics(seat as u8, ai_type, outcome))
        .collect();

    GameMetrics {
        game_id,
        seed: seed_hex(result.game_seed),
        timestamp,
        config: GameConfig {
            players: ai_types.len(),
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: outcome.final_scores.clone(),
            winner: outcome.winner,
            rounds_played: outcome.rounds.len(),
            total_turns: outcome.total_turns(),
            substitutions: outcome.total_substitutions(),
            duration_ms,
        },
        rounds: outcome.rounds.iter().map(RoundMetrics::from).collect(),
        player_metrics,
    }
}

fn build_player_metrics(seat: u8, ai_type: &str, outcome: &MatchResult) -> PlayerMetrics {
    let rounds_won = outcome.round_wins(seat);
    let times_eliminated = outcome
        .rounds
        .iter()
        .filter(|r| r.eliminations.contains(&seat))
        .count();
    let round_win_pct = if outcome.rounds.is_empty() {
        0.0
    } else {
        rounds_won as f64 / outcome.rounds.len() as f64 * 100.0
    };
    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        final_score: outcome.final_scores.get(seat as usize).copied().unwrap_or(0),
        rounds_won,
        times_eliminated,
        round_win_pct,
    }
}

/// CSV summary row (simplified metrics). Seats absent from the table stay empty.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: String,
    pub winner: Option<u8>,
    pub rounds: usize,
    pub substitutions: u32,
    pub seat0_score: Option<u8>,
    pub seat1_score: Option<u8>,
    pub seat2_score: Option<u8>,
    pub seat3_score: Option<u8>,
    pub seat0_ai: Option<String>,
    pub seat1_ai: Option<String>,
    pub seat2_ai: Option<String>,
    pub seat3_ai: Option<String>,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let score = |seat: usize| metrics.result.final_scores.get(seat).copied();
        let ai = |seat: usize| metrics.config.ai_types.get(seat).cloned();
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed.clone(),
            winner: metrics.result.winner,
            rounds: metrics.result.rounds_played,
            substitutions: metrics.result.substitutions,
            seat0_score: score(0),
            seat1_score: score(1),
            seat2_score: score(2),
            seat3_score: score(3),
            seat0_ai: ai(0),
            seat1_ai: ai(1),
            seat2_ai: ai(2),
            seat3_ai: ai(3),
        }
    }
}
