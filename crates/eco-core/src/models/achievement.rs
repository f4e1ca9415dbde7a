use serde::{Deserialize, Serialize};

/// A catalog-defined badge with a one-time point reward on completion.
///
/// `completed` is monotonic: once true it stays true. Re-marking a
/// completed achievement is an idempotent no-op upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub badge: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Achievement {
    pub fn new(badge: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            badge: badge.into(),
            description: description.into(),
            completed: false,
        }
    }
}
