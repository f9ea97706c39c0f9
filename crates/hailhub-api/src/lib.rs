//! # hailhub-api
//!
//! HTTP API layer for HailHub built on Axum.
//!
//! Provides the rider and driver account endpoints, the access-guard
//! extractors, middleware (CORS, logging), DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
