//! Administrator account domain types.

use chrono::{DateTime, Utc};

use meeple_market_core::{AdminUserId, Email};

/// A persisted administrator account (domain type).
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique account ID.
    pub id: AdminUserId,
    /// Account email address.
    pub email: Email,
    /// Login name; the installer uses the email address here.
    pub username: String,
    /// Whether the account may log in.
    pub enabled: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A fully-configured administrator account awaiting persistence.
///
/// Constructed only once every field has validated and the password has
/// been hashed, so a partially-configured account can never reach the
/// repository.
#[derive(Debug, Clone)]
pub struct NewAdminUser {
    /// Account email address.
    pub email: Email,
    /// Login name.
    pub username: String,
    /// Argon2 hash of the chosen password.
    pub password_hash: String,
    /// Whether the account may log in.
    pub enabled: bool,
}
