//! Position compatibility matcher.
//!
//! Decides whether a player's natural position may occupy a field slot,
//! at strict (specialist only) or flexible (adjacent improvisation)
//! precision. The table is hand-authored and asymmetric: not all
//! positions are mutually substitutable, and it is reproduced as-is
//! rather than generalized.

use serde::{Deserialize, Serialize};

use crate::models::Position;

/// Role family of a field slot, derived from the slot key prefix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SlotRole {
    Goalkeeper,
    Defender,
    HoldingMid,
    AttackingMid,
    Forward,
    WideForward,
}

impl SlotRole {
    /// Derive the role from a slot key such as `"defender-2"`.
    ///
    /// Longer prefixes are checked first so `"wide-forward-1"` does not
    /// land in the forward family by accident. Keys with no recognized
    /// prefix yield `None`; such slots match nothing and are only ever
    /// filled by the forced-fallback tier.
    pub fn from_key(slot_key: &str) -> Option<Self> {
        const PREFIXES: [(&str, SlotRole); 6] = [
            ("wide-forward", SlotRole::WideForward),
            ("attacking-mid", SlotRole::AttackingMid),
            ("holding-mid", SlotRole::HoldingMid),
            ("goalkeeper", SlotRole::Goalkeeper),
            ("defender", SlotRole::Defender),
            ("forward", SlotRole::Forward),
        ];
        PREFIXES.iter().find(|(prefix, _)| slot_key.starts_with(prefix)).map(|&(_, role)| role)
    }
}

/// Specialist matches only.
fn strict_match(role: SlotRole, position: Position) -> bool {
    matches!(
        (role, position),
        (SlotRole::Goalkeeper, Position::Goalkeeper)
            | (SlotRole::Defender, Position::Defender)
            | (SlotRole::HoldingMid, Position::HoldingMidfielder)
            | (SlotRole::AttackingMid, Position::AttackingMidfielder)
            | (SlotRole::Forward, Position::Forward)
            | (SlotRole::WideForward, Position::Forward)
    )
}

/// Improvisation pairs allowed on top of strict matches.
fn flexible_match(role: SlotRole, position: Position) -> bool {
    matches!(
        (role, position),
        (SlotRole::Defender, Position::FullBack)
            | (SlotRole::HoldingMid, Position::AttackingMidfielder)
            | (SlotRole::AttackingMid, Position::HoldingMidfielder)
            | (SlotRole::Forward, Position::AttackingMidfielder)
            | (SlotRole::WideForward, Position::AttackingMidfielder)
    )
}

/// May `position` occupy the slot named by `slot_key`?
///
/// Strict mode admits specialists only; flexible mode additionally
/// admits the improvisation pairs. A center-back matches no slot family
/// in either mode and reaches the field only through forced fallback.
pub fn is_compatible(position: Position, slot_key: &str, strict: bool) -> bool {
    let Some(role) = SlotRole::from_key(slot_key) else {
        return false;
    };
    if strict_match(role, position) {
        return true;
    }
    !strict && flexible_match(role, position)
}
