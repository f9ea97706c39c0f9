//! Vehicle attributes attached to a driver.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// The category of vehicle a driver operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Standard car.
    Car,
    /// Motorbike.
    Bike,
    /// Auto rickshaw.
    Auto,
    /// Anything else.
    Other,
}

impl VehicleType {
    /// Return the vehicle type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Auto => "auto",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = hailhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "auto" => Ok(Self::Auto),
            "other" => Ok(Self::Other),
            _ => Err(hailhub_core::AppError::validation(format!(
                "Invalid vehicle type: '{s}'. Expected one of: car, bike, auto, other"
            ))),
        }
    }
}

/// Vehicle attributes registered with a driver.
///
/// Stored as flat columns on the `drivers` table; opaque to the
/// credential core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    /// Vehicle color.
    pub color: String,
    /// License plate.
    pub plate: String,
    /// Passenger capacity.
    pub capacity: i32,
    /// Vehicle category.
    pub vehicle_type: VehicleType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("car".parse::<VehicleType>().unwrap(), VehicleType::Car);
        assert_eq!("AUTO".parse::<VehicleType>().unwrap(), VehicleType::Auto);
        assert!("boat".parse::<VehicleType>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&VehicleType::Bike).unwrap();
        assert_eq!(json, "\"bike\"");
    }
}
