//! Access-guard extractors for protected routes.
//!
//! One generic guard, two instantiations: [`AuthRider`] and [`AuthDriver`].
//! The guard pipeline per request:
//!
//! 1. extract the token from its carrier — the kind-named cookie first,
//!    `Authorization: Bearer` header as fallback
//! 2. revocation check (before any cryptographic work)
//! 3. signature + expiry verification
//! 4. claims kind must match the guard's kind
//! 5. resolve the principal through the kind-specific repository
//!
//! Every failure is the same 401; the cause is never distinguishable from
//! the response. A token minted for one kind never authorizes the other,
//! even if the decoded id exists in neither collection.

use std::future::Future;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use hailhub_auth::token::PrincipalKind;
use hailhub_core::error::AppError;
use hailhub_core::result::AppResult;
use hailhub_entity::driver::Driver;
use hailhub_entity::rider::Rider;

use crate::error::ApiError;
use crate::state::AppState;

/// Cookie carrying a rider session token.
pub const RIDER_COOKIE: &str = "rider_token";
/// Cookie carrying a driver session token.
pub const DRIVER_COOKIE: &str = "driver_token";

/// A principal type that can stand behind an access guard.
pub trait GuardedPrincipal: Sized + Send {
    /// The kind this guard accepts.
    const KIND: PrincipalKind;
    /// The cookie this guard reads its token from.
    const COOKIE_NAME: &'static str;

    /// Resolve the principal through the kind-specific repository.
    fn find(state: &AppState, id: Uuid) -> impl Future<Output = AppResult<Option<Self>>> + Send;
}

impl GuardedPrincipal for Rider {
    const KIND: PrincipalKind = PrincipalKind::Rider;
    const COOKIE_NAME: &'static str = RIDER_COOKIE;

    async fn find(state: &AppState, id: Uuid) -> AppResult<Option<Self>> {
        state.rider_repo.find_by_id(id).await
    }
}

impl GuardedPrincipal for Driver {
    const KIND: PrincipalKind = PrincipalKind::Driver;
    const COOKIE_NAME: &'static str = DRIVER_COOKIE;

    async fn find(state: &AppState, id: Uuid) -> AppResult<Option<Self>> {
        state.driver_repo.find_by_id(id).await
    }
}

/// Extracted authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal<P>(pub P);

/// Rider-side access guard.
pub type AuthRider = AuthPrincipal<Rider>;
/// Driver-side access guard.
pub type AuthDriver = AuthPrincipal<Driver>;

impl<P> std::ops::Deref for AuthPrincipal<P> {
    type Target = P;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<P: GuardedPrincipal> FromRequestParts<AppState> for AuthPrincipal<P> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_carriers(&parts.headers, P::COOKIE_NAME)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        // Revoked tokens are rejected before any signature work.
        if state.revocation_ledger.is_revoked(&token).await? {
            return Err(AppError::unauthorized("Unauthorized").into());
        }

        let claims = state.token_verifier.verify(&token)?;

        if claims.kind != P::KIND {
            return Err(AppError::unauthorized("Unauthorized").into());
        }

        let principal = P::find(state, claims.principal_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        Ok(AuthPrincipal(principal))
    }
}

/// Pull a token from its carriers: cookie first, bearer header as fallback.
pub fn token_from_carriers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}
