use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One team enrolled in a league.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeagueTeam {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Scheduled,
    Finished,
    Cancelled,
}

/// A league fixture as supplied by the match provider.
///
/// Scores stay `None` until the match is played; the standings
/// aggregator only folds in matches that are `Finished` with both
/// scores present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeagueMatch {
    pub round: u32,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl LeagueMatch {
    /// True when the match contributes to the classification table.
    pub fn counts_for_standings(&self) -> bool {
        self.status == MatchStatus::Finished
            && self.home_score.is_some()
            && self.away_score.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(status: MatchStatus, home: Option<u32>, away: Option<u32>) -> LeagueMatch {
        LeagueMatch {
            round: 1,
            home_team_id: "h".into(),
            away_team_id: "a".into(),
            home_score: home,
            away_score: away,
            status,
            scheduled_at: None,
        }
    }

    #[test]
    fn only_finished_with_scores_counts() {
        assert!(fixture(MatchStatus::Finished, Some(2), Some(1)).counts_for_standings());
        assert!(!fixture(MatchStatus::Scheduled, Some(2), Some(1)).counts_for_standings());
        assert!(!fixture(MatchStatus::Finished, Some(2), None).counts_for_standings());
        assert!(!fixture(MatchStatus::Cancelled, None, None).counts_for_standings());
    }
}
