//! Driver registration, login, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use hailhub_auth::password::PasswordHasher;
use hailhub_auth::revocation::RevocationLedger;
use hailhub_auth::token::{IssuedToken, PrincipalKind, TokenIssuer};
use hailhub_core::error::AppError;
use hailhub_core::result::AppResult;
use hailhub_database::repositories::DriverRepository;
use hailhub_entity::driver::{CreateDriver, Driver, Location, Vehicle};

/// Plaintext registration input, validated upstream at the DTO layer.
#[derive(Debug, Clone)]
pub struct NewDriver {
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Registered vehicle.
    pub vehicle: Vehicle,
    /// Initial position.
    pub location: Location,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedDriver {
    /// The driver account.
    pub driver: Driver,
    /// A freshly issued bearer token.
    pub token: IssuedToken,
}

/// Orchestrates driver account flows over the credential primitives.
///
/// Mirrors [`crate::rider::RiderService`] against the driver collection;
/// the two services share no state.
#[derive(Debug, Clone)]
pub struct DriverService {
    /// Driver persistence.
    repo: Arc<DriverRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Token issuer.
    token_issuer: Arc<TokenIssuer>,
    /// Revocation ledger.
    revocation_ledger: Arc<RevocationLedger>,
}

impl DriverService {
    /// Creates a new driver service with all required dependencies.
    pub fn new(
        repo: Arc<DriverRepository>,
        password_hasher: Arc<PasswordHasher>,
        token_issuer: Arc<TokenIssuer>,
        revocation_ledger: Arc<RevocationLedger>,
    ) -> Self {
        Self {
            repo,
            password_hasher,
            token_issuer,
            revocation_ledger,
        }
    }

    /// Registers a new driver account.
    pub async fn register(&self, input: NewDriver) -> AppResult<AuthenticatedDriver> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(
                "Driver already registered with this email",
            ));
        }

        let hasher = Arc::clone(&self.password_hasher);
        let password = input.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??;

        let driver = self
            .repo
            .create(&CreateDriver {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
                vehicle: input.vehicle,
                location: input.location,
            })
            .await?;

        let token = self.token_issuer.issue(driver.id, PrincipalKind::Driver)?;

        info!(driver_id = %driver.id, "Driver registered");

        Ok(AuthenticatedDriver { driver, token })
    }

    /// Authenticates a driver by email and password.
    ///
    /// An unknown email and a wrong password produce the identical error so
    /// the response never reveals whether the account exists.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedDriver> {
        let driver = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();
        let hash = driver.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?;

        if !password_valid {
            warn!(driver_id = %driver.id, "Driver login with wrong password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = self.token_issuer.issue(driver.id, PrincipalKind::Driver)?;

        info!(driver_id = %driver.id, "Driver logged in");

        Ok(AuthenticatedDriver { driver, token })
    }

    /// Revokes the given bearer token. Idempotent.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.revocation_ledger.revoke(token).await
    }
}
