//! Revoked token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A bearer token that has been explicitly invalidated before its natural
/// expiry.
///
/// Rows are created on logout and never updated or deleted. An entry for an
/// already-expired token is inert but harmless.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    /// The exact token string that was revoked.
    pub token: String,
    /// When the token was revoked.
    pub revoked_at: DateTime<Utc>,
}
