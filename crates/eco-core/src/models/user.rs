use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Achievement, Challenge, EcoAction, Friend};
use crate::error::{CoreError, Result};

/// The single resident user: profile, points balance, and the owned
/// collections. This is the whole persisted record; every mutation
/// rewrites it in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub name: String,
    /// Set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,
    pub points: u32,
    pub actions: Vec<EcoAction>,
    pub challenges: Vec<Challenge>,
    pub achievements: Vec<Achievement>,
    pub friends: Vec<Friend>,
}

impl User {
    /// Create a fresh user with zero points and empty collections.
    /// Fails with `Validation` if email or name is empty after trimming.
    pub fn create(email: &str, name: &str) -> Result<Self> {
        let email = email.trim();
        let name = name.trim();
        if email.is_empty() {
            return Err(CoreError::Validation("email is required".into()));
        }
        if name.is_empty() {
            return Err(CoreError::Validation("name is required".into()));
        }
        Ok(Self {
            email: email.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
            points: 0,
            actions: Vec::new(),
            challenges: Vec::new(),
            achievements: Vec::new(),
            friends: Vec::new(),
        })
    }

    /// The single entry point for all point mutation. Clamps at zero:
    /// a delta that would take the balance negative leaves it at zero,
    /// and the shortfall is not tracked (deliberate lossy behavior).
    pub fn apply_points_delta(&mut self, delta: i64) {
        let next = i64::from(self.points) + delta;
        self.points = next.clamp(0, i64::from(u32::MAX)) as u32;
    }

    /// Validating decoder for the persisted/exchanged record. Fails
    /// closed: the top level must be an object carrying non-empty
    /// `email` and `name` strings plus all four collection arrays.
    /// Returns a plain message so callers can wrap it as `CorruptData`
    /// (gateway) or `Format` (import) as appropriate.
    pub fn from_json(text: &str) -> std::result::Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| e.to_string())?;
        let obj = value
            .as_object()
            .ok_or_else(|| "top-level value is not an object".to_string())?;
        for field in ["email", "name"] {
            match obj.get(field).and_then(|v| v.as_str()) {
                Some(s) if !s.trim().is_empty() => {}
                _ => return Err(format!("missing required field: {field}")),
            }
        }
        for field in ["actions", "challenges", "achievements", "friends"] {
            if !obj.get(field).is_some_and(|v| v.is_array()) {
                return Err(format!("missing collection: {field}"));
            }
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Serialize the full aggregate, pretty-printed, dates as ISO-8601.
    pub fn to_json(&self) -> std::result::Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_email_and_name() {
        assert!(User::create("", "Ann").is_err());
        assert!(User::create("   ", "Ann").is_err());
        assert!(User::create("a@x.com", "").is_err());
        assert!(User::create("a@x.com", " \t").is_err());

        let user = User::create(" a@x.com ", " Ann ").expect("valid input");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.points, 0);
        assert!(user.actions.is_empty());
        assert!(user.challenges.is_empty());
        assert!(user.achievements.is_empty());
        assert!(user.friends.is_empty());
    }

    #[test]
    fn test_points_delta_clamps_at_zero() {
        let mut user = User::create("a@x.com", "Ann").unwrap();
        user.apply_points_delta(5);
        assert_eq!(user.points, 5);
        user.apply_points_delta(-3);
        assert_eq!(user.points, 2);
        user.apply_points_delta(-100);
        assert_eq!(user.points, 0);
        // Shortfall is not remembered
        user.apply_points_delta(5);
        assert_eq!(user.points, 5);
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        assert!(User::from_json("not json").is_err());
        assert!(User::from_json("[]").is_err());
        assert!(User::from_json(r#"{"name":"Ann"}"#).is_err());
        assert!(User::from_json(r#"{"email":"","name":"Ann"}"#).is_err());
        // Collections must be present, not defaulted in
        let missing_collections = r#"{
            "email": "a@x.com", "name": "Ann",
            "createdAt": "2025-01-01T00:00:00Z", "points": 0
        }"#;
        assert!(User::from_json(missing_collections).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut user = User::create("a@x.com", "Ann").unwrap();
        user.points = 40;
        user.friends.push(Friend {
            name: "Bea".into(),
            points: 120,
            rank: 1,
        });
        let json = user.to_json().unwrap();
        let back = User::from_json(&json).expect("roundtrip");
        assert_eq!(back, user);
    }

    #[test]
    fn test_persisted_field_names_are_camel_case() {
        let user = User::create("a@x.com", "Ann").unwrap();
        let json = user.to_json().unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"points\""));
        assert!(json.contains("\"actions\""));
    }
}
