//! League standings aggregator.
//!
//! Recomputes the full classification table from the match set on every
//! call; nothing is mutated incrementally, so the table can never drift
//! from its source matches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{LeagueMatch, LeagueTeam};

/// One row of the classification table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub team_id: String,
    pub team_name: String,
    pub points: u32,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// goals_for - goals_against, recomputed after all matches fold in.
    pub goal_difference: i32,
}

impl Standing {
    fn zeroed(team: &LeagueTeam) -> Self {
        Standing {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            points: 0,
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }
}

const POINTS_WIN: u32 = 3;
const POINTS_DRAW: u32 = 1;

/// Compute the sorted classification table for a league.
///
/// Only finished matches with both scores present count; everything
/// else is skipped with no partial credit. Matches referencing a team
/// id not in `teams` are skipped too, since referential integrity is
/// the match provider's job. Sort precedence: points, wins, goal
/// difference, all descending; ties beyond that keep encounter order
/// (the sort is stable).
pub fn compute_standings(teams: &[LeagueTeam], matches: &[LeagueMatch]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = teams.iter().map(Standing::zeroed).collect();
    let index: HashMap<&str, usize> =
        teams.iter().enumerate().map(|(i, t)| (t.id.as_str(), i)).collect();

    for m in matches {
        if !m.counts_for_standings() {
            continue;
        }
        let (Some(&home), Some(&away)) =
            (index.get(m.home_team_id.as_str()), index.get(m.away_team_id.as_str()))
        else {
            continue;
        };
        // counts_for_standings guarantees both scores are present.
        let (hs, aws) = (m.home_score.unwrap_or(0), m.away_score.unwrap_or(0));

        rows[home].matches_played += 1;
        rows[away].matches_played += 1;
        rows[home].goals_for += hs;
        rows[home].goals_against += aws;
        rows[away].goals_for += aws;
        rows[away].goals_against += hs;

        if hs > aws {
            rows[home].points += POINTS_WIN;
            rows[home].wins += 1;
            rows[away].losses += 1;
        } else if aws > hs {
            rows[away].points += POINTS_WIN;
            rows[away].wins += 1;
            rows[home].losses += 1;
        } else {
            rows[home].points += POINTS_DRAW;
            rows[away].points += POINTS_DRAW;
            rows[home].draws += 1;
            rows[away].draws += 1;
        }
    }

    for row in rows.iter_mut() {
        row.goal_difference = row.goals_for as i32 - row.goals_against as i32;
    }

    // Vec::sort_by is stable: rows equal on all three keys keep order.
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.goal_difference.cmp(&a.goal_difference))
    });
    rows
}
