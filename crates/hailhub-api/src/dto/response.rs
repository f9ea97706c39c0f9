//! Response DTOs.
//!
//! The public principal shapes never include the password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hailhub_entity::driver::Driver;
use hailhub_entity::rider::Rider;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Rider summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderResponse {
    /// Rider ID.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: Option<String>,
    /// Email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Rider> for RiderResponse {
    fn from(rider: Rider) -> Self {
        Self {
            id: rider.id,
            first_name: rider.first_name,
            last_name: rider.last_name,
            email: rider.email,
            phone: rider.phone,
            created_at: rider.created_at,
        }
    }
}

/// Vehicle attributes in driver responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    /// Vehicle color.
    pub color: String,
    /// License plate.
    pub plate: String,
    /// Passenger capacity.
    pub capacity: i32,
    /// Vehicle category.
    pub vehicle_type: String,
}

/// Coordinates in driver responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: Option<f64>,
}

/// Driver summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResponse {
    /// Driver ID.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: Option<String>,
    /// Email.
    pub email: String,
    /// Availability status.
    pub status: String,
    /// Registered vehicle.
    pub vehicle: VehicleResponse,
    /// Last reported position.
    pub location: LocationResponse,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            first_name: driver.first_name,
            last_name: driver.last_name,
            email: driver.email,
            status: driver.status.to_string(),
            vehicle: VehicleResponse {
                color: driver.vehicle.color,
                plate: driver.vehicle.plate,
                capacity: driver.vehicle.capacity,
                vehicle_type: driver.vehicle.vehicle_type.to_string(),
            },
            location: LocationResponse {
                lat: driver.location.lat,
                lng: driver.location.lng,
            },
            created_at: driver.created_at,
        }
    }
}

/// Rider registration/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiderAuthResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated rider.
    pub rider: RiderResponse,
}

/// Driver registration/login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverAuthResponse {
    /// Bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated driver.
    pub driver: DriverResponse,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
