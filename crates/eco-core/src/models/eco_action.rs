use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A logged real-world environmentally beneficial act.
///
/// `logged_at` is the date the event describes (user-supplied);
/// `recorded_at` is when the entry was created. Entries are append-only:
/// corrections are delete + re-add, there is no update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoAction {
    pub recorded_at: DateTime<Utc>,
    pub logged_at: NaiveDate,
    pub description: String,
    pub impact: String,
}

impl EcoAction {
    pub fn new(logged_at: NaiveDate, description: String, impact: String) -> Self {
        Self {
            recorded_at: Utc::now(),
            logged_at,
            description,
            impact,
        }
    }
}
