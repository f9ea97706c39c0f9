//! Concrete repository implementations.
//!
//! Riders and drivers live in disjoint tables with independent email
//! uniqueness; the two repositories expose the same contract
//! (`find_by_email`, `create`, `find_by_id`) without sharing state.

pub mod driver;
pub mod revocation;
pub mod rider;

pub use driver::DriverRepository;
pub use revocation::RevocationRepository;
pub use rider::RiderRepository;
