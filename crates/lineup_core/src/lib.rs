//! # lineup_core - Deterministic Lineup Suggestion Engine
//!
//! Rating, matching, and assignment logic for amateur team management:
//! derive a strength rating per player from positional archetypes and
//! career stats, fill the slots of a tactical formation through a
//! strict/flexible/fallback matching policy, and aggregate league
//! results into a classification table.
//!
//! ## Guarantees
//! - 100% deterministic: identical inputs give bit-identical outputs
//! - Pure and synchronous: no I/O, no locks, no caching of state
//! - Total: empty rosters, unknown positions, and unplayed fixtures
//!   yield empty or generic results, never errors

pub mod assign;
pub mod compat;
pub mod error;
pub mod formation;
pub mod models;
pub mod pattern;
pub mod providers;
pub mod rating;
pub mod standings;

pub use assign::{assign, reconcile, SlotAssignment, SlotEntry};
pub use compat::{is_compatible, SlotRole};
pub use error::{CatalogError, Result};
pub use formation::{formation, formations_for, Formation, Modality, SlotSpec};
pub use models::{
    LeagueMatch, LeagueTeam, MatchStatus, Player, PlayerStatSummary, Position,
};
pub use pattern::{bias_map, PatternRecord};
pub use providers::{
    rated_pool, suggest_lineup, LeagueProvider, PatternStore, RosterProvider, StatsProvider,
};
pub use rating::{rate, PlayerRating, RatingVector};
pub use standings::{compute_standings, Standing};
