//! Seed league data.
//!
//! Four fixed teams of five players each. Pure domain data: the records all
//! start at zero and every player id is freshly generated per call.

use crate::models::{Player, Team};

/// Build the default four-team league with fresh, zeroed records.
pub fn initial_teams() -> Vec<Team> {
    vec![
        Team::new(
            "tokyo-dragons",
            "Tokyo Dragons",
            vec![
                Player::new("Shota Tanaka", "SP", 84),
                Player::new("Ren Nakamura", "C", 78),
                Player::new("Ichiro Aoki", "RF", 82),
                Player::new("Kenta Watanabe", "2B", 75),
                Player::new("Daichi Morita", "1B", 77),
            ],
        ),
        Team::new(
            "osaka-thunder",
            "Osaka Thunder",
            vec![
                Player::new("Yuki Matsui", "SP", 81),
                Player::new("Sora Kimura", "SS", 79),
                Player::new("Haruto Fujii", "CF", 74),
                Player::new("Taiga Sano", "LF", 76),
                Player::new("Koki Yamashita", "3B", 72),
            ],
        ),
        Team::new(
            "nagoya-shields",
            "Nagoya Shields",
            vec![
                Player::new("Kazuki Inoue", "SP", 80),
                Player::new("Hiroto Maeda", "C", 73),
                Player::new("Shun Ito", "CF", 70),
                Player::new("Hayato Suzuki", "2B", 74),
                Player::new("Masato Uehara", "RF", 76),
            ],
        ),
        Team::new(
            "sapporo-aurora",
            "Sapporo Aurora",
            vec![
                Player::new("Riku Ishikawa", "SP", 79),
                Player::new("Naoki Hirano", "C", 71),
                Player::new("Souta Kobayashi", "LF", 73),
                Player::new("Atsushi Togo", "1B", 75),
                Player::new("Yuma Takeda", "SS", 78),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_league_shape() {
        let teams = initial_teams();
        assert_eq!(teams.len(), 4);
        for team in &teams {
            assert_eq!(team.players.len(), 5, "{} should field five players", team.id);
            assert_eq!(team.record, Default::default());
            for player in &team.players {
                assert!((1..=100).contains(&player.rating));
                assert_eq!(player.stats, Default::default());
            }
        }
    }

    #[test]
    fn test_team_ids_unique() {
        let teams = initial_teams();
        for (i, a) in teams.iter().enumerate() {
            for b in &teams[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
