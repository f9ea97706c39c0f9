//! Driver availability status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a driver is currently taking rides.
///
/// New drivers start out `Active`. The status is opaque to the credential
/// core; an inactive driver can still authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "driver_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    /// Available for dispatch.
    Active,
    /// Off duty.
    Inactive,
}

impl DriverStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = hailhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(hailhub_core::AppError::validation(format!(
                "Invalid driver status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "active".parse::<DriverStatus>().unwrap(),
            DriverStatus::Active
        );
        assert_eq!(
            "INACTIVE".parse::<DriverStatus>().unwrap(),
            DriverStatus::Inactive
        );
        assert!("retired".parse::<DriverStatus>().is_err());
    }
}
