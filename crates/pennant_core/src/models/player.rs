use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cumulative batting statistics for one player.
///
/// All counters start at zero and only ever increase once the season is
/// underway; the simulation never rolls a stat back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Games the player has appeared in
    pub games: u32,
    /// Total at-bats
    pub at_bats: u32,
    /// Total hits
    pub hits: u32,
    /// Runs scored
    pub runs: u32,
    /// Home runs
    pub home_runs: u32,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batting average (hits / at-bats), 0.0 before the first at-bat.
    pub fn batting_average(&self) -> f64 {
        if self.at_bats == 0 {
            0.0
        } else {
            self.hits as f64 / self.at_bats as f64
        }
    }
}

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player id (UUID v4)
    pub id: String,
    pub name: String,
    /// Free-text position label ("SP", "C", "RF", ...)
    pub position: String,
    /// Overall rating, nominally 1-100
    pub rating: u8,
    pub stats: PlayerStats,
}

impl Player {
    /// Create a new player with a generated id and zeroed stats.
    pub fn new(name: &str, position: &str, rating: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            position: position.to_string(),
            rating,
            stats: PlayerStats::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("Shota Tanaka", "SP", 84);
        assert_eq!(player.stats, PlayerStats::default());
        assert_eq!(player.rating, 84);
        assert_eq!(player.position, "SP");
    }

    #[test]
    fn test_player_ids_are_unique() {
        let a = Player::new("Same Name", "C", 70);
        let b = Player::new("Same Name", "C", 70);
        assert_ne!(a.id, b.id, "two players with equal names must get distinct ids");
    }

    #[test]
    fn test_batting_average_empty() {
        let stats = PlayerStats::new();
        assert_eq!(stats.batting_average(), 0.0);
    }

    #[test]
    fn test_batting_average() {
        let stats = PlayerStats { games: 2, at_bats: 8, hits: 2, runs: 1, home_runs: 0 };
        assert!((stats.batting_average() - 0.25).abs() < f64::EPSILON);
    }
}
