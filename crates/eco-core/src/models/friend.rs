use serde::{Deserialize, Serialize};

/// Leaderboard entry. Display-only: the core defines no mutation for
/// friends, they ride along in the persisted record and exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
    pub points: u32,
    pub rank: u32,
}
