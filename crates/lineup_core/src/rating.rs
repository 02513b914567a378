//! Player rating calculator.
//!
//! Derives a six-attribute rating vector and an overall score from a
//! player's natural position plus career aggregates. Pure and
//! deterministic: the UI recomputes ratings on every formation change
//! and must not flicker between equivalent runs.

use std::hash::{Hash, Hasher};

use fxhash::FxHasher;
use serde::{Deserialize, Serialize};

use crate::models::{Player, PlayerStatSummary, Position};

/// Six named attributes, each clamped to 0..=99.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RatingVector {
    pub pace: u8,
    pub shot_power: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defense: u8,
    pub physical: u8,
}

impl RatingVector {
    pub fn as_array(&self) -> [u8; 6] {
        [self.pace, self.shot_power, self.passing, self.dribbling, self.defense, self.physical]
    }
}

/// A player annotated with its computed rating. Created fresh on every
/// assignment request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRating {
    pub player_id: String,
    pub position: Position,
    pub vector: RatingVector,
    /// Rounded mean of the six attributes.
    pub overall: u8,
}

/// Base attribute profile per position, as
/// [pace, shot_power, passing, dribbling, defense, physical].
fn base_profile(position: Position) -> [f32; 6] {
    match position {
        Position::Goalkeeper => [40.0, 25.0, 50.0, 35.0, 65.0, 70.0],
        Position::Defender => [55.0, 40.0, 55.0, 45.0, 80.0, 75.0],
        Position::FullBack => [75.0, 45.0, 60.0, 60.0, 70.0, 70.0],
        Position::HoldingMidfielder => [60.0, 50.0, 70.0, 55.0, 72.0, 72.0],
        Position::AttackingMidfielder => [68.0, 65.0, 78.0, 75.0, 45.0, 60.0],
        Position::CenterBack => [50.0, 35.0, 50.0, 40.0, 85.0, 82.0],
        Position::Forward => [78.0, 80.0, 60.0, 75.0, 35.0, 68.0],
        // Low-variance generic profile for unparsed positions.
        Position::Unknown => [50.0, 50.0, 50.0, 50.0, 50.0, 50.0],
    }
}

/// Stable per-player offset in 0..=4, added uniformly to all six
/// attributes so that identical stat lines do not tie exactly.
///
/// FxHasher rather than DefaultHasher: the std hasher is not stable
/// across Rust versions, and the offset must reproduce across runs and
/// toolchains.
fn identity_offset(player_id: &str) -> f32 {
    let mut hasher = FxHasher::default();
    player_id.hash(&mut hasher);
    (hasher.finish() % 5) as f32
}

/// Compute the rating for one player from position plus career stats.
///
/// Bonuses are capped independently so a single prolific stat line
/// cannot dominate the whole vector; the final clamp bounds every
/// attribute to 0..=99.
pub fn rate(player: &Player, stats: &PlayerStatSummary) -> PlayerRating {
    let mut attrs = base_profile(player.position);

    let offset = identity_offset(&player.id);
    for attr in attrs.iter_mut() {
        *attr += offset;
    }

    let goals = stats.goals as f32;
    let assists = stats.assists as f32;
    let matches = stats.matches_played as f32;

    let finishing_bonus = (goals * 1.5).min(15.0);
    let passing_bonus = (assists * 2.0).min(15.0);
    let experience_bonus = (matches * 0.5).min(10.0);
    let defense_extra = if player.position == Position::CenterBack { matches * 0.5 } else { 0.0 };
    let defense_bonus = (matches * 0.3 + defense_extra).min(10.0);
    let dribbling_bonus = assists * 0.5;

    attrs[0] += experience_bonus * 0.2; // pace
    attrs[1] += finishing_bonus; // shot_power
    attrs[2] += passing_bonus; // passing
    attrs[3] += dribbling_bonus; // dribbling
    attrs[4] += defense_bonus; // defense
    attrs[5] += experience_bonus; // physical

    let clamped: Vec<u8> = attrs.iter().map(|a| a.clamp(0.0, 99.0).round() as u8).collect();
    let vector = RatingVector {
        pace: clamped[0],
        shot_power: clamped[1],
        passing: clamped[2],
        dribbling: clamped[3],
        defense: clamped[4],
        physical: clamped[5],
    };

    let sum: u32 = vector.as_array().iter().map(|&a| a as u32).sum();
    let overall = (sum as f32 / 6.0).round() as u8;

    PlayerRating { player_id: player.id.clone(), position: player.position, vector, overall }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, position: Position) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {}", id),
            position,
            shirt_number: None,
            active: true,
        }
    }

    fn stats(goals: u32, assists: u32, matches_played: u32) -> PlayerStatSummary {
        PlayerStatSummary { goals, assists, matches_played }
    }

    #[test]
    fn rate_is_deterministic() {
        let p = player("p-1", Position::Forward);
        let s = stats(7, 3, 22);
        assert_eq!(rate(&p, &s), rate(&p, &s));
    }

    #[test]
    fn identity_offset_is_stable_and_bounded() {
        for id in ["a", "p-42", "very-long-player-identifier", ""] {
            let first = identity_offset(id);
            assert_eq!(first, identity_offset(id));
            assert!((0.0..=4.0).contains(&first));
        }
    }

    #[test]
    fn attributes_never_exceed_99() {
        let p = player("p-max", Position::Forward);
        let s = stats(500, 500, 500);
        let rating = rate(&p, &s);
        assert!(rating.vector.as_array().iter().all(|&a| a <= 99));
    }

    #[test]
    fn finishing_cap_triggers_at_ten_goals() {
        let p = player("p-cap", Position::HoldingMidfielder);
        let base = rate(&p, &stats(0, 0, 0)).vector.shot_power;
        let at_ten = rate(&p, &stats(10, 0, 0)).vector.shot_power;
        let at_fifty = rate(&p, &stats(50, 0, 0)).vector.shot_power;
        assert_eq!(at_ten, base + 15);
        assert_eq!(at_fifty, at_ten);
    }

    #[test]
    fn passing_cap_and_dribbling_bonus() {
        let p = player("p-ast", Position::HoldingMidfielder);
        let base = rate(&p, &stats(0, 0, 0)).vector;
        let rated = rate(&p, &stats(0, 8, 0)).vector;
        // min(15, 8*2) = 15 to passing, 8*0.5 = 4 to dribbling.
        assert_eq!(rated.passing, base.passing + 15);
        assert_eq!(rated.dribbling, base.dribbling + 4);
    }

    #[test]
    fn experience_feeds_physical_and_pace() {
        let p = player("p-exp", Position::Defender);
        let base = rate(&p, &stats(0, 0, 0)).vector;
        let rated = rate(&p, &stats(0, 0, 10)).vector;
        // Experience bonus = min(10, 10*0.5) = 5; pace gets 0.2 of it.
        assert_eq!(rated.physical, base.physical + 5);
        assert_eq!(rated.pace, base.pace + 1);
    }

    #[test]
    fn center_back_gets_extra_defense_from_matches() {
        let cb = rate(&player("p-cb", Position::CenterBack), &stats(0, 0, 10));
        let df = rate(&player("p-cb", Position::Defender), &stats(0, 0, 10));
        // Same id, so the same identity offset applies to both. CB
        // defense bonus hits the cap: min(10, 3+5)=8 vs min(10, 3)=3.
        let cb_gain = cb.vector.defense - base_profile(Position::CenterBack)[4] as u8;
        let df_gain = df.vector.defense - base_profile(Position::Defender)[4] as u8;
        assert!(cb_gain > df_gain);
    }

    #[test]
    fn unknown_position_uses_generic_profile() {
        let rating = rate(&player("p-u", Position::Unknown), &stats(0, 0, 0));
        let arr = rating.vector.as_array();
        // Flat base plus a uniform offset: all six attributes equal.
        assert!(arr.iter().all(|&a| a == arr[0]));
    }

    #[test]
    fn overall_is_rounded_mean() {
        // Unknown position has a flat base, so the vector is fully
        // hand-checkable. Zero stats: six equal attributes, overall
        // equals each of them.
        let flat = rate(&player("p-o", Position::Unknown), &stats(0, 0, 0));
        assert_eq!(flat.overall, flat.vector.pace);

        // Ten goals add exactly 15 to shot power and nothing else:
        // mean = (6 * base + 15) / 6 = base + 2.5, which rounds up.
        let scorer = rate(&player("p-o", Position::Unknown), &stats(10, 0, 0));
        assert_eq!(scorer.vector.shot_power, scorer.vector.pace + 15);
        assert_eq!(scorer.overall, scorer.vector.pace + 3);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: no input pushes any attribute out of 0..=99.
            #[test]
            fn prop_attributes_bounded(
                goals in 0u32..10_000,
                assists in 0u32..10_000,
                matches_played in 0u32..10_000,
                id in "[a-z0-9-]{1,16}",
            ) {
                let p = player(&id, Position::CenterBack);
                let rating = rate(&p, &stats(goals, assists, matches_played));
                prop_assert!(rating.vector.as_array().iter().all(|&a| a <= 99));
            }

            /// Property: rating twice yields identical vectors.
            #[test]
            fn prop_rate_deterministic(
                goals in 0u32..200,
                assists in 0u32..200,
                matches_played in 0u32..200,
                id in "[a-z0-9-]{1,16}",
            ) {
                let p = player(&id, Position::AttackingMidfielder);
                let s = stats(goals, assists, matches_played);
                prop_assert_eq!(rate(&p, &s), rate(&p, &s));
            }
        }
    }
}
