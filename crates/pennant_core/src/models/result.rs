//! Simulation output types.
//!
//! `GameResult` is the sink of one simulated game: the core never reads it
//! back, it exists for the caller (display, logging, tests). `Standing` is
//! the derived ranking row produced by `season::standings`.

use serde::{Deserialize, Serialize};

use super::Team;

/// Final outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Schedule day the game was played on
    pub day: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    /// Display name of the winning team (never a draw)
    pub winner: String,
}

/// One row of the standings table, derived from a team record.
///
/// Not stored anywhere; recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
    /// Win percentage, 0.0 when no games have been played
    pub pct: f64,
    pub runs: u32,
}

impl Standing {
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            wins: team.record.wins,
            losses: team.record.losses,
            games: team.record.games_played(),
            pct: team.record.win_pct(),
            runs: team.record.runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_serializes() {
        let result = GameResult {
            day: 3,
            home_team: "Tokyo Dragons".to_string(),
            away_team: "Osaka Thunder".to_string(),
            home_score: 5,
            away_score: 2,
            winner: "Tokyo Dragons".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: GameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
