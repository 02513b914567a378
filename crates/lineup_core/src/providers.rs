//! Collaborator interfaces and the suggestion orchestration.
//!
//! The engine is pure computation over already-fetched collections;
//! these traits are the seams where the surrounding application plugs
//! in its data store. Persisting a confirmed lineup, and recording the
//! pattern-memory learning step, stay on the caller's side of the seam.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::assign::{assign, SlotAssignment};
use crate::formation::Formation;
use crate::models::{LeagueMatch, LeagueTeam, Player, PlayerStatSummary};
use crate::pattern::{bias_map, PatternRecord};
use crate::rating::{rate, PlayerRating};

/// Supplies the roster of a team. Only `id` and `position` are required
/// by the engine; the rest rides along for display.
pub trait RosterProvider {
    fn roster(&self, team_id: &str) -> Vec<Player>;
}

/// Supplies per-player career aggregates. Absent players default to a
/// zeroed summary.
pub trait StatsProvider {
    fn stats(&self, player_id: &str) -> PlayerStatSummary;
}

/// Read side of the pattern memory. The write (after a human confirms a
/// suggested lineup) is caller-orchestrated and deliberately absent.
pub trait PatternStore {
    fn records(&self, formation_id: &str) -> Vec<PatternRecord>;
}

/// Supplies league teams and fixtures for the standings aggregator.
pub trait LeagueProvider {
    fn teams(&self, league_id: &str) -> Vec<LeagueTeam>;
    fn matches(&self, league_id: &str) -> Vec<LeagueMatch>;
}

/// Build the rated pool for a roster: inactive players filtered out,
/// then sorted by overall descending with ascending id as tie-break, so
/// every downstream equal-overall scan is fully determined.
pub fn rated_pool(
    roster: &[Player],
    stats: &HashMap<String, PlayerStatSummary>,
) -> Vec<PlayerRating> {
    let mut pool: Vec<PlayerRating> = roster
        .iter()
        .filter(|p| p.active)
        .map(|p| {
            let summary = stats.get(&p.id).copied().unwrap_or_default();
            rate(p, &summary)
        })
        .collect();
    pool.sort_by(|a, b| b.overall.cmp(&a.overall).then(a.player_id.cmp(&b.player_id)));
    pool
}

/// One-call orchestration: roster -> rated pool -> pattern bias ->
/// slot assignment for the chosen formation.
pub fn suggest_lineup(
    formation: &Formation,
    roster: &[Player],
    stats: &HashMap<String, PlayerStatSummary>,
    patterns: &[PatternRecord],
    confirmed_available: Option<&HashSet<String>>,
) -> SlotAssignment {
    let pool = rated_pool(roster, stats);
    let bias = bias_map(patterns, formation.id);
    debug!(
        formation = formation.id,
        pool = pool.len(),
        biased_slots = bias.len(),
        "suggesting lineup"
    );
    assign(&formation.slot_keys(), &pool, Some(&bias), confirmed_available)
}
