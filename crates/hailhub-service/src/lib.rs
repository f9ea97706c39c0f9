//! # hailhub-service
//!
//! Account flows for HailHub: registration, login, and logout for riders
//! and drivers. Services orchestrate the credential primitives from
//! `hailhub-auth` with the kind-specific repositories; the two kinds share
//! behavior but never storage.

pub mod driver;
pub mod rider;

pub use driver::DriverService;
pub use rider::RiderService;
