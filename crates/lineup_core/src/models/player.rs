use serde::{Deserialize, Serialize};

/// Roster entry as supplied by the roster provider.
///
/// Read-only to the engine: the roster store owns these records, the
/// engine only needs `id` and `position` to build a rated pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<u8>,
    /// Inactive players are excluded from lineup suggestions.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Per-player career aggregate computed by the statistics subsystem.
///
/// Missing entries default to zero; the engine never treats an absent
/// stat line as an error.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStatSummary {
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub matches_played: u32,
}

/// Natural position of a player.
///
/// A closed enumeration rather than free-form labels: compatibility
/// between positions and field slots is a finite hand-authored table,
/// and substring matching on labels silently misses entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Goalkeeper,
    Defender,
    FullBack,
    HoldingMidfielder,
    AttackingMidfielder,
    CenterBack,
    Forward,
    /// Roster rows whose position label did not parse upstream.
    /// Rated with a generic profile, placed only by forced fallback.
    Unknown,
}

impl Position {
    /// Decode a stored kebab-case label. Unrecognized labels map to
    /// `Unknown` instead of failing; the rating calculator handles it.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "goalkeeper" => Position::Goalkeeper,
            "defender" => Position::Defender,
            "full-back" => Position::FullBack,
            "holding-midfielder" => Position::HoldingMidfielder,
            "attacking-midfielder" => Position::AttackingMidfielder,
            "center-back" => Position::CenterBack,
            "forward" => Position::Forward,
            _ => Position::Unknown,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_defensive(&self) -> bool {
        matches!(self, Position::Defender | Position::FullBack | Position::CenterBack)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::HoldingMidfielder | Position::AttackingMidfielder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_does_not_fail() {
        assert_eq!(Position::from_label("libero"), Position::Unknown);
        assert_eq!(Position::from_label(""), Position::Unknown);
    }

    #[test]
    fn known_labels_round_trip() {
        for (label, pos) in [
            ("goalkeeper", Position::Goalkeeper),
            ("defender", Position::Defender),
            ("full-back", Position::FullBack),
            ("holding-midfielder", Position::HoldingMidfielder),
            ("attacking-midfielder", Position::AttackingMidfielder),
            ("center-back", Position::CenterBack),
            ("forward", Position::Forward),
        ] {
            assert_eq!(Position::from_label(label), pos);
            let json = serde_json::to_string(&pos).unwrap();
            assert_eq!(json, format!("\"{}\"", label));
        }
    }

    #[test]
    fn missing_stats_default_to_zero() {
        let stats: PlayerStatSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, PlayerStatSummary::default());
    }
}
