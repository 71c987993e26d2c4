pub mod player;
pub mod result;
pub mod team;

pub use player::{Player, PlayerStats};
pub use result::{GameResult, Standing};
pub use team::{Team, TeamRecord};
