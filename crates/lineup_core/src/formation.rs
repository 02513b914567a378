//! Formation catalog: modalities, the formations legal for each, and
//! the ordered field slots every formation exposes.
//!
//! Pure data. Slot keys are `<role-prefix>-<n>` and the role prefix is
//! what the compatibility matcher keys on.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Team-size class. Constrains which formations are legal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    SixASide,
    SevenASide,
    ElevenASide,
}

impl Modality {
    /// Players on the field per team, goalkeeper included.
    pub fn slot_count(&self) -> usize {
        match self {
            Modality::SixASide => 6,
            Modality::SevenASide => 7,
            Modality::ElevenASide => 11,
        }
    }

    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim() {
            "6-a-side" => Ok(Modality::SixASide),
            "7-a-side" => Ok(Modality::SevenASide),
            "11-a-side" => Ok(Modality::ElevenASide),
            other => Err(CatalogError::UnknownModality(other.to_string())),
        }
    }
}

/// One named position-on-field to be filled by one player.
///
/// Board coordinates are percentages (0-100) for tactics-board display,
/// x left-to-right from the attacking team's view, y from own goal line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotSpec {
    pub key: String,
    pub label: String,
    pub board_x: u8,
    pub board_y: u8,
}

/// A named tactical shape and its ordered slot list.
///
/// The goalkeeper slot is always first; outfield slots follow from the
/// back line forward.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Formation {
    pub id: &'static str,
    pub modality: Modality,
    pub slots: Vec<SlotSpec>,
}

impl Formation {
    pub fn slot_keys(&self) -> Vec<String> {
        self.slots.iter().map(|s| s.key.clone()).collect()
    }
}

/// Shape lines as (role prefix, label stem, board depth) rows.
struct Line {
    role: &'static str,
    label: &'static str,
    count: usize,
    board_y: u8,
}

fn build_slots(lines: &[Line]) -> Vec<SlotSpec> {
    let mut slots = Vec::new();
    for line in lines {
        for i in 0..line.count {
            // Spread a line evenly across the board width.
            let x = 100 * (i + 1) / (line.count + 1);
            slots.push(SlotSpec {
                key: format!("{}-{}", line.role, i + 1),
                label: if line.count == 1 {
                    line.label.to_string()
                } else {
                    format!("{} {}", line.label, i + 1)
                },
                board_x: x as u8,
                board_y: line.board_y,
            });
        }
    }
    slots
}

/// Build a formation from its numeric shape. Two midfield numbers mean
/// an explicit holding/attacking split; a single number splits
/// floor-half holding, the rest attacking.
fn build_formation(id: &'static str, modality: Modality, shape: &[usize]) -> Formation {
    let defenders = shape[0];
    let forwards = shape[shape.len() - 1];
    let (holding, attacking) = match shape.len() {
        4 => (shape[1], shape[2]),
        3 => (shape[1] / 2, shape[1] - shape[1] / 2),
        _ => (0, 0),
    };

    let mut lines = vec![
        Line { role: "goalkeeper", label: "Goalkeeper", count: 1, board_y: 6 },
        Line { role: "defender", label: "Defender", count: defenders, board_y: 28 },
    ];
    if holding > 0 {
        lines.push(Line { role: "holding-mid", label: "Holding Mid", count: holding, board_y: 48 });
    }
    if attacking > 0 {
        lines.push(Line {
            role: "attacking-mid",
            label: "Attacking Mid",
            count: attacking,
            board_y: 64,
        });
    }
    // Three or more forwards put the outermost two on the flanks.
    if forwards >= 3 {
        let mut front = vec![SlotSpec {
            key: "wide-forward-1".into(),
            label: "Wide Forward 1".into(),
            board_x: 18,
            board_y: 82,
        }];
        let centrals = forwards - 2;
        for i in 0..centrals {
            front.push(SlotSpec {
                key: format!("forward-{}", i + 1),
                label: if centrals == 1 {
                    "Forward".into()
                } else {
                    format!("Forward {}", i + 1)
                },
                board_x: (100 * (i + 1) / (centrals + 1)) as u8,
                board_y: 86,
            });
        }
        front.push(SlotSpec {
            key: "wide-forward-2".into(),
            label: "Wide Forward 2".into(),
            board_x: 82,
            board_y: 82,
        });
        let mut slots = build_slots(&lines);
        slots.extend(front);
        Formation { id, modality, slots }
    } else {
        lines.push(Line { role: "forward", label: "Forward", count: forwards, board_y: 86 });
        Formation { id, modality, slots: build_slots(&lines) }
    }
}

static CATALOG: Lazy<Vec<Formation>> = Lazy::new(|| {
    vec![
        // 6-a-side: goalkeeper + 5 outfield
        build_formation("2-2-1", Modality::SixASide, &[2, 2, 1]),
        build_formation("1-2-2", Modality::SixASide, &[1, 2, 2]),
        build_formation("3-1-1", Modality::SixASide, &[3, 1, 1]),
        build_formation("2-1-2", Modality::SixASide, &[2, 1, 2]),
        // 7-a-side: goalkeeper + 6 outfield
        build_formation("2-2-2", Modality::SevenASide, &[2, 2, 2]),
        build_formation("3-2-1", Modality::SevenASide, &[3, 2, 1]),
        build_formation("2-3-1", Modality::SevenASide, &[2, 3, 1]),
        build_formation("3-1-2", Modality::SevenASide, &[3, 1, 2]),
        // 11-a-side: goalkeeper + 10 outfield
        build_formation("4-4-2", Modality::ElevenASide, &[4, 4, 2]),
        build_formation("4-3-3", Modality::ElevenASide, &[4, 3, 3]),
        build_formation("3-5-2", Modality::ElevenASide, &[3, 5, 2]),
        build_formation("4-2-3-1", Modality::ElevenASide, &[4, 2, 3, 1]),
    ]
});

/// Look up a formation by id across all modalities.
pub fn formation(id: &str) -> Result<&'static Formation> {
    CATALOG
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| CatalogError::UnknownFormation(id.to_string()))
}

/// All formations legal for a modality, in catalog order.
pub fn formations_for(modality: Modality) -> Vec<&'static Formation> {
    CATALOG.iter().filter(|f| f.modality == modality).collect()
}
