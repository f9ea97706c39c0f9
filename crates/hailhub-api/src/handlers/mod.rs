//! HTTP request handlers.

pub mod driver;
pub mod health;
pub mod rider;

use axum_extra::extract::cookie::Cookie;

/// Build a session cookie carrying a freshly issued token.
pub(crate) fn session_cookie(name: &'static str, token: &str) -> Cookie<'static> {
    Cookie::build((name, token.to_string()))
        .path("/")
        .http_only(true)
        .build()
}
