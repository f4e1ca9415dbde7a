use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Progress state for a catalog challenge.
///
/// Serialized with the human-readable labels used in the persisted record
/// ("Not Started", "In Progress", "Completed").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ChallengeStatus {
    /// Parse a status label. Accepts the exact persisted labels only;
    /// anything else is an unrecognized transition.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Not Started" => Some(Self::NotStarted),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A catalog-defined goal with a one-time point reward on completion.
///
/// Invariant: `completed_at` is `Some` iff `status == Completed`. The
/// award itself is one-way: reopening a completed challenge clears
/// `completed_at` but never revokes points already earned, and `rewarded`
/// stays true so a later re-completion cannot grant the reward twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub name: String,
    pub reward_points: u32,
    pub status: ChallengeStatus,
    pub completed_at: Option<DateTime<Utc>>,
    /// Whether the one-time reward has ever been granted. Absent in
    /// older exported files, so it defaults to false on import.
    #[serde(default)]
    pub rewarded: bool,
}

impl Challenge {
    pub fn new(name: impl Into<String>, reward_points: u32) -> Self {
        Self {
            name: name.into(),
            reward_points,
            status: ChallengeStatus::NotStarted,
            completed_at: None,
            rewarded: false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ChallengeStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_labels() {
        assert_eq!(
            ChallengeStatus::parse("Not Started"),
            Some(ChallengeStatus::NotStarted)
        );
        assert_eq!(
            ChallengeStatus::parse("  In Progress "),
            Some(ChallengeStatus::InProgress)
        );
        assert_eq!(
            ChallengeStatus::parse("Completed"),
            Some(ChallengeStatus::Completed)
        );
        assert_eq!(ChallengeStatus::parse("completed"), None);
        assert_eq!(ChallengeStatus::parse("Done"), None);
        assert_eq!(ChallengeStatus::parse(""), None);
    }

    #[test]
    fn test_status_serde_labels() {
        let json = serde_json::to_string(&ChallengeStatus::NotStarted).unwrap();
        assert_eq!(json, "\"Not Started\"");
        let status: ChallengeStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, ChallengeStatus::InProgress);
    }

    #[test]
    fn test_new_challenge_starts_clean() {
        let challenge = Challenge::new("Meat-Free Week", 50);
        assert_eq!(challenge.status, ChallengeStatus::NotStarted);
        assert!(challenge.completed_at.is_none());
        assert!(!challenge.is_completed());
    }
}
