//! Driver handlers — register, login, profile, logout.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use hailhub_entity::driver::{Location, Vehicle};
use hailhub_service::driver::NewDriver;

use crate::dto::request::{LoginRequest, RegisterDriverRequest};
use crate::dto::response::{ApiResponse, DriverAuthResponse, DriverResponse, MessageResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthDriver;
use crate::extractors::auth::{DRIVER_COOKIE, token_from_carriers};
use crate::handlers::session_cookie;
use crate::state::AppState;

/// POST /api/drivers/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterDriverRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<DriverAuthResponse>>), ApiError> {
    validate_request(&req)?;

    let result = state
        .driver_service
        .register(NewDriver {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            vehicle: Vehicle {
                color: req.vehicle.color,
                plate: req.vehicle.plate,
                capacity: req.vehicle.capacity,
                vehicle_type: req.vehicle.vehicle_type,
            },
            location: Location {
                lat: req.location.lat,
                lng: req.location.lng,
            },
        })
        .await?;

    let jar = jar.add(session_cookie(DRIVER_COOKIE, &result.token.token));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::ok(DriverAuthResponse {
            token: result.token.token,
            expires_at: result.token.expires_at,
            driver: result.driver.into(),
        })),
    ))
}

/// POST /api/drivers/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<DriverAuthResponse>>), ApiError> {
    validate_request(&req)?;

    let result = state
        .driver_service
        .login(&req.email, &req.password)
        .await?;

    let jar = jar.add(session_cookie(DRIVER_COOKIE, &result.token.token));

    Ok((
        jar,
        Json(ApiResponse::ok(DriverAuthResponse {
            token: result.token.token,
            expires_at: result.token.expires_at,
            driver: result.driver.into(),
        })),
    ))
}

/// GET /api/drivers/profile
pub async fn profile(auth: AuthDriver) -> Json<ApiResponse<DriverResponse>> {
    Json(ApiResponse::ok(auth.0.into()))
}

/// POST /api/drivers/logout
///
/// Not guard-protected: a request with no token at all still succeeds, so
/// logout is idempotent from the client's perspective.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    if let Some(token) = token_from_carriers(&headers, DRIVER_COOKIE) {
        state.driver_service.logout(&token).await?;
    }

    let jar = jar.remove(Cookie::build(DRIVER_COOKIE).path("/"));

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    ))
}
