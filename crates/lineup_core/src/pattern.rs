//! Pattern memory consumption.
//!
//! The pattern store persists how often a confirmed lineup placed a
//! given player in a given slot. The engine reads those frequencies as
//! a bias signal ahead of the generic heuristic; writing new records
//! after a human confirms a lineup is the caller's job, not ours.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One persisted frequency record: this slot of this formation was
/// filled by this player `count` times before.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternRecord {
    pub formation_id: String,
    pub slot_key: String,
    pub player_id: String,
    pub count: u32,
}

/// Fold records into a slot -> preferred player map for one formation.
///
/// Per slot the highest count wins; equal counts break toward the
/// lexicographically smaller player id so the map is deterministic
/// regardless of record order. Zero-count records carry no signal and
/// are dropped.
pub fn bias_map(records: &[PatternRecord], formation_id: &str) -> HashMap<String, String> {
    let mut best: HashMap<&str, (&str, u32)> = HashMap::new();
    for record in records {
        if record.formation_id != formation_id || record.count == 0 {
            continue;
        }
        let candidate = (record.player_id.as_str(), record.count);
        best.entry(record.slot_key.as_str())
            .and_modify(|current| {
                if candidate.1 > current.1 || (candidate.1 == current.1 && candidate.0 < current.0)
                {
                    *current = candidate;
                }
            })
            .or_insert(candidate);
    }
    best.into_iter()
        .map(|(slot, (player, _))| (slot.to_string(), player.to_string()))
        .collect()
}
