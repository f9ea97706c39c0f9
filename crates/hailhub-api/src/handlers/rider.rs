//! Rider handlers — register, login, profile, logout.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use hailhub_service::rider::NewRider;

use crate::dto::request::{LoginRequest, RegisterRiderRequest};
use crate::dto::response::{ApiResponse, MessageResponse, RiderAuthResponse, RiderResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthRider;
use crate::extractors::auth::{RIDER_COOKIE, token_from_carriers};
use crate::handlers::session_cookie;
use crate::state::AppState;

/// POST /api/riders/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRiderRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<RiderAuthResponse>>), ApiError> {
    validate_request(&req)?;

    let result = state
        .rider_service
        .register(NewRider {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            phone: req.phone,
        })
        .await?;

    let jar = jar.add(session_cookie(RIDER_COOKIE, &result.token.token));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::ok(RiderAuthResponse {
            token: result.token.token,
            expires_at: result.token.expires_at,
            rider: result.rider.into(),
        })),
    ))
}

/// POST /api/riders/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<RiderAuthResponse>>), ApiError> {
    validate_request(&req)?;

    let result = state.rider_service.login(&req.email, &req.password).await?;

    let jar = jar.add(session_cookie(RIDER_COOKIE, &result.token.token));

    Ok((
        jar,
        Json(ApiResponse::ok(RiderAuthResponse {
            token: result.token.token,
            expires_at: result.token.expires_at,
            rider: result.rider.into(),
        })),
    ))
}

/// GET /api/riders/profile
pub async fn profile(auth: AuthRider) -> Json<ApiResponse<RiderResponse>> {
    Json(ApiResponse::ok(auth.0.into()))
}

/// POST /api/riders/logout
///
/// Not guard-protected: a request with no token at all still succeeds, so
/// logout is idempotent from the client's perspective.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    if let Some(token) = token_from_carriers(&headers, RIDER_COOKIE) {
        state.rider_service.logout(&token).await?;
    }

    let jar = jar.remove(Cookie::build(RIDER_COOKIE).path("/"));

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    ))
}
