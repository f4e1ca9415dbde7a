//! Application-wide constants
//!
//! Centralized location for the storage key and the fixed point awards
//! so the gamification rules live in one place.

/// Storage key for the single resident user record.
pub const USER_KEY: &str = "user";

/// Points awarded for logging an eco-action (and reversed on delete).
pub const ACTION_POINTS: i64 = 5;

/// Points awarded the first time an achievement is completed.
pub const ACHIEVEMENT_POINTS: i64 = 100;
