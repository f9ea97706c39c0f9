//! Driver entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::DriverStatus;
use super::vehicle::Vehicle;

/// Last reported driver position.
///
/// Captured at registration; opaque to the credential core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees (optional).
    pub lng: Option<f64>,
}

/// A registered driver account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address, lowercased, unique among drivers.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Availability status.
    pub status: DriverStatus,
    /// Registered vehicle.
    #[sqlx(flatten)]
    pub vehicle: Vehicle,
    /// Last reported position.
    #[sqlx(flatten)]
    pub location: Location,
    /// When the driver was created.
    pub created_at: DateTime<Utc>,
    /// When the driver was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDriver {
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Registered vehicle.
    pub vehicle: Vehicle,
    /// Initial position.
    pub location: Location,
}
