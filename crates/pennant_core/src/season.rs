//! Season state and the day-by-day controller.
//!
//! A [`Season`] owns the team collection, the immutable schedule, the
//! single forward-only day cursor, the accumulated result history and the
//! seeded RNG that drives every game. There are no ambient globals: one
//! caller owns one season and drives it synchronously.

use std::cmp::Ordering;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{LeagueError, Result};
use crate::models::{GameResult, Player, Standing, Team};
use crate::schedule::{self, DaySchedule};
use crate::sim;

/// One season of league play.
#[derive(Debug, Clone)]
pub struct Season {
    teams: Vec<Team>,
    schedule: Vec<DaySchedule>,
    current_day_index: usize,
    results: Vec<GameResult>,
    rng: ChaCha8Rng,
    seed: u64,
}

impl Season {
    /// Create a season over `teams`, generating the full schedule up front.
    ///
    /// The schedule is immutable from here on, and the team *set* is fixed:
    /// the API offers no way to add or remove a team mid-season, so the
    /// schedule cannot desync from the roster. Player-level edits stay
    /// allowed at any time.
    pub fn new(teams: Vec<Team>, target_games: u32, seed: u64) -> Self {
        let schedule = schedule::generate(&teams, target_games);
        log::info!(
            "season created: {} teams, {} scheduled games, seed {}",
            teams.len(),
            schedule.len(),
            seed
        );
        Self {
            teams,
            schedule,
            current_day_index: 0,
            results: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Simulate every game scheduled for the day at the cursor, then
    /// advance the cursor by one.
    ///
    /// Once the schedule is exhausted this returns `Ok(vec![])` forever;
    /// callers detect season completion by the empty result, not an error.
    pub fn simulate_day(&mut self) -> Result<Vec<GameResult>> {
        let Some(entry) = self.schedule.get(self.current_day_index) else {
            return Ok(Vec::new());
        };

        let day = entry.day;
        let games = entry.games.clone();
        let mut results = Vec::with_capacity(games.len());
        for matchup in &games {
            results.push(sim::simulate_game(matchup, &mut self.teams, day, &mut self.rng)?);
        }

        self.current_day_index += 1;
        self.results.extend(results.iter().cloned());
        Ok(results)
    }

    // ========================
    // Roster edits
    // ========================

    /// Add a player to a team, validating at the boundary: empty name or
    /// position is rejected and the rating is clamped to [1,100]. Returns
    /// the new player's id.
    pub fn add_player(
        &mut self,
        team_id: &str,
        name: &str,
        position: &str,
        rating: u8,
    ) -> Result<String> {
        let name = name.trim();
        let position = position.trim();
        if name.is_empty() {
            return Err(LeagueError::InvalidPlayer("name must not be empty".to_string()));
        }
        if position.is_empty() {
            return Err(LeagueError::InvalidPlayer("position must not be empty".to_string()));
        }
        let rating = rating.clamp(1, 100);

        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| LeagueError::UnknownTeam(team_id.to_string()))?;

        let player = Player::new(name, position, rating);
        let player_id = player.id.clone();
        log::info!("added {} ({}, rating {}) to {}", name, position, rating, team_id);
        team.players.push(player);
        Ok(player_id)
    }

    /// Remove a player from a team, returning the removed player.
    pub fn remove_player(&mut self, team_id: &str, player_id: &str) -> Result<Player> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| LeagueError::UnknownTeam(team_id.to_string()))?;
        let idx = team
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| LeagueError::UnknownPlayer(player_id.to_string()))?;
        log::info!("removed player {} from {}", player_id, team_id);
        Ok(team.players.remove(idx))
    }

    // ========================
    // Read access
    // ========================

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn schedule(&self) -> &[DaySchedule] {
        &self.schedule
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total number of schedule days in the season.
    pub fn total_days(&self) -> usize {
        self.schedule.len()
    }

    /// Day number of the next unplayed day, or None once finished.
    pub fn current_day(&self) -> Option<u32> {
        self.schedule.get(self.current_day_index).map(|d| d.day)
    }

    pub fn is_finished(&self) -> bool {
        self.current_day_index >= self.schedule.len()
    }

    /// Current standings for this season's teams.
    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.teams)
    }
}

/// Rank teams by descending win percentage, ties broken by descending
/// cumulative runs. A pure projection over the team records.
pub fn standings(teams: &[Team]) -> Vec<Standing> {
    let mut table: Vec<Standing> = teams.iter().map(Standing::for_team).collect();
    table.sort_by(|a, b| {
        b.pct
            .partial_cmp(&a.pct)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.runs.cmp(&a.runs))
    });
    table
}
