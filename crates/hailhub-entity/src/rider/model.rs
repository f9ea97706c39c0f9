//! Rider entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered rider account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rider {
    /// Unique rider identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address, lowercased, unique among riders.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
    /// When the rider was created.
    pub created_at: DateTime<Utc>,
    /// When the rider was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new rider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRider {
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
}
