use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    /// The schedule and the team collection are out of sync. This is a
    /// programmer error, not a recoverable condition: the simulation step
    /// that hits it must be aborted.
    #[error("schedule references unknown team id: {0}")]
    UnknownTeam(String),

    #[error("unknown player id: {0}")]
    UnknownPlayer(String),

    #[error("invalid player: {0}")]
    InvalidPlayer(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
