use super::Player;
use serde::{Deserialize, Serialize};

/// Win/loss/runs record for one team.
///
/// `wins + losses` is the number of games played; `runs` is the cumulative
/// total the team has scored across the season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub runs: u32,
}

impl TeamRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage, 0.0 before the first game.
    pub fn win_pct(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64
        }
    }
}

/// A league team and its roster.
///
/// An empty roster is a valid (degenerate) state: the simulator scores such
/// a team 0 runs and skips its stat updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Stable team id, referenced by the schedule
    pub id: String,
    pub name: String,
    pub record: TeamRecord,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: &str, name: &str, players: Vec<Player>) -> Self {
        Self { id: id.to_string(), name: name.to_string(), record: TeamRecord::default(), players }
    }

    /// Mean player rating, or None for an empty roster.
    pub fn average_rating(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let sum: u32 = self.players.iter().map(|p| p.rating as u32).sum();
        Some(sum as f64 / self.players.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accounting() {
        let record = TeamRecord { wins: 3, losses: 1, runs: 22 };
        assert_eq!(record.games_played(), 4);
        assert!((record.win_pct() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_win_pct_no_games() {
        assert_eq!(TeamRecord::default().win_pct(), 0.0);
    }

    #[test]
    fn test_average_rating() {
        let team = Team::new(
            "t",
            "Testers",
            vec![Player::new("A", "C", 80), Player::new("B", "SS", 70)],
        );
        assert_eq!(team.average_rating(), Some(75.0));
    }

    #[test]
    fn test_average_rating_empty_roster() {
        let team = Team::new("t", "Testers", Vec::new());
        assert_eq!(team.average_rating(), None);
    }
}
