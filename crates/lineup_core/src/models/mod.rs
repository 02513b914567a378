pub mod league;
pub mod player;

pub use league::{LeagueMatch, LeagueTeam, MatchStatus};
pub use player::{Player, PlayerStatSummary, Position};
