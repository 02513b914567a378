//! Lineup assignment engine.
//!
//! Fills the ordered slot list of a formation from a rated player pool,
//! one slot at a time, falling through four tiers: pattern-biased pick,
//! strict specialist, flexible improvisation, forced fallback. Unused
//! players land on the bench. Deterministic for identical inputs.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::compat::{is_compatible, SlotRole};
use crate::rating::PlayerRating;

/// One slot of the final lineup. `player_id` stays `None` when the pool
/// ran out before this slot was processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot_key: String,
    pub player_id: Option<String>,
}

/// A complete lineup suggestion: slot entries in formation order plus
/// the bench in descending overall order.
///
/// Invariant: a player id appears at most once across slots and bench.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotAssignment {
    pub slots: Vec<SlotEntry>,
    pub bench: Vec<String>,
}

impl SlotAssignment {
    pub fn player_for(&self, slot_key: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|e| e.slot_key == slot_key)
            .and_then(|e| e.player_id.as_deref())
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|e| e.player_id.is_some()).count()
    }
}

/// Which tier produced a pick. Logged for diagnosis, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickTier {
    Pattern,
    Strict,
    Flexible,
    Forced,
}

/// Assign the rated pool to the formation slots.
///
/// Goalkeeper slots are processed first: keepers are the scarcest
/// specialist and must not be squeezed out by generic fallback. Within
/// a tier the highest-overall unused player wins; equal overalls keep
/// pool order, so a caller that sorts the pool deterministically gets
/// bit-identical output on every run.
///
/// Never fails: an empty pool or empty slot list yields an assignment
/// with every slot empty and an empty bench.
pub fn assign(
    slot_keys: &[String],
    pool: &[PlayerRating],
    pattern_bias: Option<&HashMap<String, String>>,
    confirmed_available: Option<&HashSet<String>>,
) -> SlotAssignment {
    debug_assert!(
        {
            let mut ids: Vec<&str> = pool.iter().map(|r| r.player_id.as_str()).collect();
            ids.sort_unstable();
            ids.windows(2).all(|w| w[0] != w[1])
        },
        "rated pool contains duplicate player ids"
    );

    let mut order: Vec<usize> = (0..slot_keys.len()).collect();
    order.sort_by_key(|&i| match SlotRole::from_key(&slot_keys[i]) {
        Some(SlotRole::Goalkeeper) => 0,
        _ => 1,
    });

    let mut used: HashSet<&str> = HashSet::new();
    let mut picks: Vec<Option<&str>> = vec![None; slot_keys.len()];

    for &slot_idx in &order {
        let slot_key = &slot_keys[slot_idx];
        let picked = pick_for_slot(slot_key, pool, pattern_bias, confirmed_available, &used);
        if let Some((player_id, tier)) = picked {
            trace!(slot = %slot_key, player = %player_id, ?tier, "slot filled");
            used.insert(player_id);
            picks[slot_idx] = Some(player_id);
        } else {
            trace!(slot = %slot_key, "slot left empty, pool exhausted");
        }
    }

    let slots: Vec<SlotEntry> = slot_keys
        .iter()
        .zip(picks)
        .map(|(key, pick)| SlotEntry {
            slot_key: key.clone(),
            player_id: pick.map(str::to_string),
        })
        .collect();

    let mut bench: Vec<&PlayerRating> =
        pool.iter().filter(|r| !used.contains(r.player_id.as_str())).collect();
    // Stable: equal overalls keep pool order.
    bench.sort_by(|a, b| b.overall.cmp(&a.overall));
    let bench: Vec<String> = bench.into_iter().map(|r| r.player_id.clone()).collect();

    debug!(
        filled = slots.iter().filter(|e| e.player_id.is_some()).count(),
        total = slots.len(),
        bench = bench.len(),
        "lineup assignment complete"
    );

    SlotAssignment { slots, bench }
}

fn pick_for_slot<'p>(
    slot_key: &str,
    pool: &'p [PlayerRating],
    pattern_bias: Option<&'p HashMap<String, String>>,
    confirmed_available: Option<&HashSet<String>>,
    used: &HashSet<&str>,
) -> Option<(&'p str, PickTier)> {
    // Tier a: previously confirmed lineups bias the pick, provided the
    // player is in the pool, unused, and (when supplied) confirmed.
    if let Some(preferred) = pattern_bias.and_then(|bias| bias.get(slot_key)) {
        let eligible = !used.contains(preferred.as_str())
            && confirmed_available.map_or(true, |c| c.contains(preferred))
            && pool.iter().any(|r| r.player_id == *preferred);
        if eligible {
            return Some((preferred.as_str(), PickTier::Pattern));
        }
    }

    // Tiers b-d: best unused candidate under progressively looser rules.
    // Strict comparison keeps the first of equally-rated candidates, so
    // ties resolve by pool order. max_by would return the last.
    let best = |accepts: &dyn Fn(&PlayerRating) -> bool| -> Option<&'p str> {
        let mut top: Option<&'p PlayerRating> = None;
        for r in pool.iter().filter(|r| !used.contains(r.player_id.as_str()) && accepts(r)) {
            if top.map_or(true, |t| r.overall > t.overall) {
                top = Some(r);
            }
        }
        top.map(|r| r.player_id.as_str())
    };

    if let Some(id) = best(&|r| is_compatible(r.position, slot_key, true)) {
        return Some((id, PickTier::Strict));
    }

    // Nobody improvises in goal: a goalkeeper slot without a keeper in
    // the pool stays empty rather than swallowing the best outfielder.
    if SlotRole::from_key(slot_key) == Some(SlotRole::Goalkeeper) {
        return None;
    }

    if let Some(id) = best(&|r| is_compatible(r.position, slot_key, false)) {
        return Some((id, PickTier::Flexible));
    }
    best(&|_| true).map(|id| (id, PickTier::Forced))
}

/// Reconcile a previous assignment with a new slot list after a
/// formation or modality change.
///
/// Entries whose slot key survives the change are preserved; entries
/// whose key vanished are silently dropped. The bench passes through
/// untouched. This is a UI-facing contract: switching formations must
/// not wipe picks the user already made for slots that still exist.
pub fn reconcile(previous: &SlotAssignment, new_slot_keys: &[String]) -> SlotAssignment {
    let slots: Vec<SlotEntry> = new_slot_keys
        .iter()
        .map(|key| SlotEntry {
            slot_key: key.clone(),
            player_id: previous.player_for(key).map(str::to_string),
        })
        .collect();
    SlotAssignment { slots, bench: previous.bench.clone() }
}
