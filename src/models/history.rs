//! Draw history model.
//!
//! A `HistoryEntry` records which participants played together in a past
//! draw. The allocator only reads it, to discourage the same groups from
//! landing on the same team again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One team of a past draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryTeam {
    /// Team identifier at the time of the draw.
    #[serde(default)]
    pub team_id: Option<String>,
    /// Participants who played together on this team.
    pub participant_ids: Vec<String>,
}

impl HistoryTeam {
    /// Creates a history team from participant IDs.
    pub fn new<I, S>(participant_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            team_id: None,
            participant_ids: participant_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the team identifier.
    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// A past draw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique draw identifier.
    pub id: String,
    /// When the draw was created.
    pub created_at: DateTime<Utc>,
    /// Teams of the draw.
    #[serde(default)]
    pub teams: Vec<HistoryTeam>,
}

impl HistoryEntry {
    /// Creates an empty history entry.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
            teams: Vec::new(),
        }
    }

    /// Adds a team.
    pub fn with_team(mut self, team: HistoryTeam) -> Self {
        self.teams.push(team);
        self
    }
}

/// Unordered pairs of participants who recently shared a team.
#[derive(Debug, Clone, Default)]
pub struct PairingHistory {
    pairs: HashSet<(String, String)>,
}

impl PairingHistory {
    /// Builds pairings from the `lookback` most recent entries.
    ///
    /// Entries are ranked by `created_at`, newest first, regardless of the
    /// order they are supplied in. A lookback of zero yields no pairings.
    pub fn from_recent(history: &[HistoryEntry], lookback: usize) -> Self {
        let mut recent: Vec<&HistoryEntry> = history.iter().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        let mut pairs = HashSet::new();
        for entry in recent.into_iter().take(lookback) {
            for team in &entry.teams {
                let ids = &team.participant_ids;
                for (i, a) in ids.iter().enumerate() {
                    for b in &ids[i + 1..] {
                        if a != b {
                            pairs.insert(Self::key(a, b));
                        }
                    }
                }
            }
        }

        Self { pairs }
    }

    /// Whether two participants recently shared a team.
    pub fn played_together(&self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        self.pairs.contains(&Self::key(a, b))
    }

    /// Number of distinct recent pairings.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no recent pairings.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_pairs_are_unordered() {
        let history = vec![HistoryEntry::new("h1", at(1))
            .with_team(HistoryTeam::new(["g1", "a1", "m1"]))
            .with_team(HistoryTeam::new(["g2", "a2"]))];

        let pairs = PairingHistory::from_recent(&history, 1);
        assert_eq!(pairs.len(), 4);
        assert!(pairs.played_together("g1", "a1"));
        assert!(pairs.played_together("a1", "g1"));
        assert!(pairs.played_together("m1", "g1"));
        assert!(!pairs.played_together("g1", "g2"));
        assert!(!pairs.played_together("g1", "g1"));
    }

    #[test]
    fn test_lookback_takes_newest_entries() {
        // Supplied oldest first on purpose
        let history = vec![
            HistoryEntry::new("old", at(1)).with_team(HistoryTeam::new(["x", "y"])),
            HistoryEntry::new("new", at(8)).with_team(HistoryTeam::new(["a", "b"])),
        ];

        let pairs = PairingHistory::from_recent(&history, 1);
        assert!(pairs.played_together("a", "b"));
        assert!(!pairs.played_together("x", "y"));

        let both = PairingHistory::from_recent(&history, 2);
        assert!(both.played_together("x", "y"));
    }

    #[test]
    fn test_zero_lookback() {
        let history =
            vec![HistoryEntry::new("h1", at(1)).with_team(HistoryTeam::new(["a", "b"]))];
        assert!(PairingHistory::from_recent(&history, 0).is_empty());
    }

    #[test]
    fn test_history_from_json() {
        let json = r#"{
            "id": "h1",
            "createdAt": "2024-03-01T20:00:00Z",
            "teams": [{ "teamId": "t1", "participantIds": ["g1", "a1"] }]
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.created_at, at(1));
        assert_eq!(entry.teams[0].team_id.as_deref(), Some("t1"));
        assert_eq!(entry.teams[0].participant_ids, vec!["g1", "a1"]);
    }
}
