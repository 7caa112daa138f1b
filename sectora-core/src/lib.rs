//! Core types and service wiring for the sectora delivery-zone manager.

/// Filter selecting sectors that are nearby and open.
pub mod availability;
/// Validation of sector registration input.
pub mod form;
/// Great-circle distance helpers.
pub mod geo;
/// Domain models shared by the backend and front ends.
pub mod model;
/// Traits describing the sector backend.
pub mod ports;
/// Minutes-since-midnight schedule arithmetic.
pub mod schedule;
/// High-level service facade used by clients.
pub mod service;
/// Caller-owned snapshot of the sector collection.
pub mod store;

pub use availability::*;
pub use form::*;
pub use geo::*;
pub use model::*;
pub use ports::*;
pub use schedule::*;
pub use service::*;
pub use store::*;
