//! Rider registration, login, and logout.

use std::sync::Arc;

use tracing::{info, warn};

use hailhub_auth::password::PasswordHasher;
use hailhub_auth::revocation::RevocationLedger;
use hailhub_auth::token::{IssuedToken, PrincipalKind, TokenIssuer};
use hailhub_core::error::AppError;
use hailhub_core::result::AppResult;
use hailhub_database::repositories::RiderRepository;
use hailhub_entity::rider::{CreateRider, Rider};

/// Plaintext registration input, validated upstream at the DTO layer.
#[derive(Debug, Clone)]
pub struct NewRider {
    /// First name.
    pub first_name: String,
    /// Last name (optional).
    pub last_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Contact phone number (optional).
    pub phone: Option<String>,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedRider {
    /// The rider account.
    pub rider: Rider,
    /// A freshly issued bearer token.
    pub token: IssuedToken,
}

/// Orchestrates rider account flows over the credential primitives.
#[derive(Debug, Clone)]
pub struct RiderService {
    /// Rider persistence.
    repo: Arc<RiderRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Token issuer.
    token_issuer: Arc<TokenIssuer>,
    /// Revocation ledger.
    revocation_ledger: Arc<RevocationLedger>,
}

impl RiderService {
    /// Creates a new rider service with all required dependencies.
    pub fn new(
        repo: Arc<RiderRepository>,
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

    /// Registers a new rider account:
    ///
    /// 1. Reject duplicate email (the unique index backstops this check)
    /// 2. Hash the password on a blocking worker thread
    /// 3. Persist the account
    /// 4. Issue a bearer token
    pub async fn register(&self, input: NewRider) -> AppResult<AuthenticatedRider> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::conflict(
                "Rider already registered with this email",
            ));
        }

        let hasher = Arc::clone(&self.password_hasher);
        let password = input.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??;

        let rider = self
            .repo
            .create(&CreateRider {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
                phone: input.phone,
            })
            .await?;

        let token = self.token_issuer.issue(rider.id, PrincipalKind::Rider)?;

        info!(rider_id = %rider.id, "Rider registered");

        Ok(AuthenticatedRider { rider, token })
    }

    /// Authenticates a rider by email and password.
    ///
    /// An unknown email and a wrong password produce the identical error so
    /// the response never reveals whether the account exists.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedRider> {
        let rider = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();
        let hash = rider.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?;

        if !password_valid {
            warn!(rider_id = %rider.id, "Rider login with wrong password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = self.token_issuer.issue(rider.id, PrincipalKind::Rider)?;

        info!(rider_id = %rider.id, "Rider logged in");

        Ok(AuthenticatedRider { rider, token })
    }

    /// Revokes the given bearer token. Idempotent.
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.revocation_ledger.revoke(token).await
    }
}
