//! Import/export transcoder.
//!
//! Converts the user aggregate to and from the portable file
//! representation: the same pretty-printed JSON schema as the persisted
//! record, dates round-tripped as ISO-8601 strings.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, Result};
use crate::models::User;

/// Serialize the full aggregate for download/exchange.
pub fn export(user: &User) -> Result<String> {
    user.to_json().map_err(CoreError::Storage)
}

/// Parse an exchanged file. Fails with `Format` when the payload is not
/// well-formed or required fields are missing; the caller's stored state
/// is untouched on failure. Points and completion flags are taken as-is,
/// never re-awarded.
pub fn import(text: &str) -> Result<User> {
    User::from_json(text).map_err(CoreError::Format)
}

/// Conventional name for an exported file: the user's email plus the
/// export timestamp.
pub fn export_file_name(user: &User, at: DateTime<Utc>) -> String {
    format!("Eco-Life_{}_{}.json", user.email, at.format("%Y%m%dT%H%M%SZ"))
}
