//! Pennant CLI
//!
//! Thin collaborator around `pennant_core`: builds the default league,
//! drives the season day by day and prints results and standings. All
//! simulation logic lives in the core.

use anyhow::Result;
use clap::{Parser, Subcommand};

use pennant_core::{initial_teams, schedule, Season, Standing, TARGET_GAMES};

#[derive(Parser)]
#[command(name = "pennant")]
#[command(about = "Simulate a baseball league season", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate games and print the standings
    Run {
        /// RNG seed (same seed reproduces the same season)
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Total games to schedule
        #[arg(long, default_value_t = TARGET_GAMES)]
        target_games: u32,

        /// Number of days to simulate (default: the whole season)
        #[arg(long)]
        days: Option<usize>,

        /// Emit JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the generated schedule without playing it
    Schedule {
        /// Total games to schedule
        #[arg(long, default_value_t = TARGET_GAMES)]
        target_games: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { seed, target_games, days, json } => run(seed, target_games, days, json),
        Commands::Schedule { target_games } => print_schedule(target_games),
    }
}

fn run(seed: u64, target_games: u32, days: Option<usize>, json: bool) -> Result<()> {
    let mut season = Season::new(initial_teams(), target_games, seed);
    let day_limit = days.unwrap_or_else(|| season.total_days());

    for _ in 0..day_limit {
        let results = season.simulate_day()?;
        if results.is_empty() {
            break;
        }
        if !json {
            for r in &results {
                println!(
                    "Day {:>3}  {} {} @ {} {}  (W: {})",
                    r.day, r.away_team, r.away_score, r.home_team, r.home_score, r.winner
                );
            }
        }
    }

    let standings = season.standings();
    if json {
        let report = serde_json::json!({
            "seed": seed,
            "results": season.results(),
            "standings": standings,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_standings(&standings);
    }
    Ok(())
}

fn print_standings(standings: &[Standing]) {
    println!();
    println!("{:<16} {:>3} {:>3} {:>6} {:>5}", "TEAM", "W", "L", "PCT", "R");
    for row in standings {
        println!(
            "{:<16} {:>3} {:>3} {:>6.3} {:>5}",
            row.name, row.wins, row.losses, row.pct, row.runs
        );
    }
}

fn print_schedule(target_games: u32) -> Result<()> {
    let teams = initial_teams();
    let entries = schedule::generate(&teams, target_games);
    let name = |id: &str| {
        teams.iter().find(|t| t.id == id).map(|t| t.name.clone()).unwrap_or_default()
    };
    for entry in &entries {
        for game in &entry.games {
            println!("Day {:>3}  {} vs {}", entry.day, name(&game.home_id), name(&game.away_id));
        }
    }
    println!("{} games scheduled", entries.len());
    Ok(())
}
