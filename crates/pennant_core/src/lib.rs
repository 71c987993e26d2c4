//! # pennant_core - Deterministic Baseball Season Simulation Engine
//!
//! Season simulator for a small fictional baseball league: rosters, a
//! round-robin schedule, day-by-day game simulation, standings and
//! per-player statistics.
//!
//! ## Features
//! - Deterministic simulation (same seed = same season)
//! - Balanced round-robin scheduling for any team count and target length
//! - Invariant-preserving game resolution (no ties, non-negative scores,
//!   conserved run totals)
//!
//! The presentation layer is an external collaborator: it reads season
//! state and invokes the entry points re-exported below.

pub mod data;
pub mod error;
pub mod models;
pub mod schedule;
pub mod season;
pub mod sim;

pub use data::initial_teams;
pub use error::{LeagueError, Result};
pub use models::{GameResult, Player, PlayerStats, Standing, Team, TeamRecord};
pub use schedule::{DaySchedule, Matchup, TARGET_GAMES};
pub use season::{standings, Season};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
