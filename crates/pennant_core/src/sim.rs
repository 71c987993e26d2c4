//! Single-game simulation.
//!
//! One call to [`simulate_game`] resolves a scheduled matchup into a final
//! score, updates both team records and every player's cumulative stats,
//! and returns the [`GameResult`]. All randomness flows through the caller
//! supplied `Rng`, so a seeded generator reproduces a game exactly.

use rand::Rng;

use crate::error::{LeagueError, Result};
use crate::models::{GameResult, Team};
use crate::schedule::Matchup;

/// Extra rating applied to the home team's expected-runs formula.
pub const HOME_FIELD_BONUS: f64 = 4.0;
/// Amplitude of the symmetric score noise.
const NOISE_AMPLITUDE: f64 = 2.5;
/// Baseline expected runs at the rating pivot.
const BASE_RUNS: f64 = 3.0;
/// Rating at which a team is expected to score exactly the baseline.
const RATING_PIVOT: f64 = 70.0;
/// Expected-runs gain per rating point is 1/RATING_DIVISOR.
const RATING_DIVISOR: f64 = 6.0;
/// Rating that would correspond to a guaranteed hit every at-bat.
const HIT_RATING_CEILING: f64 = 130.0;
/// Per-game chance of a player hitting a home run, independent of hits.
const HOME_RUN_CHANCE: f64 = 0.15;

/// Simulate one game and apply its effects to both teams.
///
/// Fails with [`LeagueError::UnknownTeam`] when a matchup id does not
/// resolve, which means the schedule and the team collection have gone out
/// of sync. Nothing is mutated in that case.
pub fn simulate_game(
    matchup: &Matchup,
    teams: &mut [Team],
    day: u32,
    rng: &mut impl Rng,
) -> Result<GameResult> {
    let home_idx = teams
        .iter()
        .position(|t| t.id == matchup.home_id)
        .ok_or_else(|| LeagueError::UnknownTeam(matchup.home_id.clone()))?;
    let away_idx = teams
        .iter()
        .position(|t| t.id == matchup.away_id)
        .ok_or_else(|| LeagueError::UnknownTeam(matchup.away_id.clone()))?;

    let mut home_score = roll_runs(&teams[home_idx], true, rng);
    let mut away_score = roll_runs(&teams[away_idx], false, rng);

    // Tie-break loop: an unweighted coin flip picks one side to bump until
    // the scores differ. Expected O(1) iterations.
    while home_score == away_score {
        if rng.gen_bool(0.5) {
            home_score += 1;
        } else {
            away_score += 1;
        }
    }

    let home_won = home_score > away_score;
    let (winner_idx, loser_idx) = if home_won { (home_idx, away_idx) } else { (away_idx, home_idx) };
    teams[winner_idx].record.wins += 1;
    teams[loser_idx].record.losses += 1;
    teams[home_idx].record.runs += home_score;
    teams[away_idx].record.runs += away_score;

    update_player_stats(&mut teams[home_idx], home_score, rng);
    update_player_stats(&mut teams[away_idx], away_score, rng);

    let result = GameResult {
        day,
        home_team: teams[home_idx].name.clone(),
        away_team: teams[away_idx].name.clone(),
        home_score,
        away_score,
        winner: teams[winner_idx].name.clone(),
    };
    log::debug!(
        "day {}: {} {} - {} {}",
        day,
        result.home_team,
        home_score,
        away_score,
        result.away_team
    );
    Ok(result)
}

/// Roll a team's run total for one game.
///
/// An empty roster short-circuits to 0 runs: no average rating exists and
/// the noise term is skipped entirely.
fn roll_runs(team: &Team, is_home: bool, rng: &mut impl Rng) -> u32 {
    let average_rating = match team.average_rating() {
        Some(avg) => avg,
        None => return 0,
    };
    let home_bonus = if is_home { HOME_FIELD_BONUS } else { 0.0 };
    let expected = BASE_RUNS + (average_rating + home_bonus - RATING_PIVOT) / RATING_DIVISOR;
    let noise = (rng.gen::<f64>() - rng.gen::<f64>()) * NOISE_AMPLITUDE;
    (expected + noise).round().max(0.0) as u32
}

/// Apply one game's worth of batting stats to a roster, then attribute the
/// team's final run total one run at a time to uniformly chosen players.
///
/// Home runs are rolled independently of the hit count, so a player can
/// record a home run without a hit. That mirrors the intended simplified
/// model and is not corrected here.
fn update_player_stats(team: &mut Team, runs_scored: u32, rng: &mut impl Rng) {
    if team.players.is_empty() {
        return;
    }

    for player in &mut team.players {
        let at_bats = rng.gen_range(3..=5u32);
        let hit_probability = player.rating as f64 / HIT_RATING_CEILING;
        let hits = (0..at_bats).filter(|_| rng.gen::<f64>() < hit_probability).count() as u32;

        player.stats.games += 1;
        player.stats.at_bats += at_bats;
        player.stats.hits += hits;

        if rng.gen_bool(HOME_RUN_CHANCE) {
            player.stats.home_runs += 1;
        }
    }

    for _ in 0..runs_scored {
        let idx = rng.gen_range(0..team.players.len());
        team.players[idx].stats.runs += 1;
    }
}
