//! Request DTOs with validation.
//!
//! Validation bounds mirror the account rules: names at least 3 characters,
//! passwords at least 8, RFC-shaped emails, positive vehicle capacity, and
//! coordinates inside the valid lat/lng ranges.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hailhub_entity::driver::VehicleType;

/// Rider registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRiderRequest {
    /// First name.
    #[validate(length(min = 3, max = 50, message = "First name must be at least 3 characters long"))]
    pub first_name: String,
    /// Last name (optional).
    #[validate(length(min = 3, max = 50, message = "Last name must be at least 3 characters long"))]
    pub last_name: Option<String>,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 100, message = "Password must be at least 8 characters long"))]
    pub password: String,
    /// Contact phone number (optional).
    #[validate(length(min = 10, max = 11, message = "Please enter a valid phone number"))]
    pub phone: Option<String>,
}

/// Driver registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDriverRequest {
    /// First name.
    #[validate(length(min = 3, max = 50, message = "First name must be at least 3 characters long"))]
    pub first_name: String,
    /// Last name (optional).
    #[validate(length(min = 3, max = 50, message = "Last name must be at least 3 characters long"))]
    pub last_name: Option<String>,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, max = 100, message = "Password must be at least 8 characters long"))]
    pub password: String,
    /// Vehicle attributes.
    #[validate(nested)]
    pub vehicle: VehiclePayload,
    /// Initial position.
    #[validate(nested)]
    pub location: LocationPayload,
}

/// Vehicle attributes in a driver registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VehiclePayload {
    /// Vehicle color.
    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,
    /// License plate.
    #[validate(length(min = 3, message = "Plate must be at least 3 characters long"))]
    pub plate: String,
    /// Passenger capacity.
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    /// Vehicle category. Deserialization rejects unknown values.
    pub vehicle_type: VehicleType,
}

/// Coordinates in a driver registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationPayload {
    /// Latitude in degrees.
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,
    /// Longitude in degrees (optional).
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub lng: Option<f64>,
}

/// Login request body, shared by both principal kinds.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_rider_request_bounds() {
        let ok = RegisterRiderRequest {
            first_name: "Ada".to_string(),
            last_name: None,
            email: "ada@example.com".to_string(),
            password: "password1".to_string(),
            phone: None,
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRiderRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterRiderRequest {
            password: "short".to_string(),
            ..ok
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_driver_request_bounds() {
        let ok = RegisterDriverRequest {
            first_name: "Max".to_string(),
            last_name: Some("Verst".to_string()),
            email: "max@example.com".to_string(),
            password: "password1".to_string(),
            vehicle: VehiclePayload {
                color: "black".to_string(),
                plate: "KA-01-1234".to_string(),
                capacity: 4,
                vehicle_type: VehicleType::Car,
            },
            location: LocationPayload {
                lat: 12.97,
                lng: Some(77.59),
            },
        };
        assert!(ok.validate().is_ok());

        let zero_capacity = RegisterDriverRequest {
            vehicle: VehiclePayload {
                capacity: 0,
                ..ok.vehicle.clone()
            },
            ..ok.clone()
        };
        assert!(zero_capacity.validate().is_err());

        let out_of_range = RegisterDriverRequest {
            location: LocationPayload {
                lat: 120.0,
                lng: None,
            },
            ..ok
        };
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn test_unknown_vehicle_type_rejected() {
        let json = serde_json::json!({
            "color": "black",
            "plate": "KA-01-1234",
            "capacity": 4,
            "vehicle_type": "boat",
        });
        assert!(serde_json::from_value::<VehiclePayload>(json).is_err());
    }
}
