//! Traits describing the sector backend and shared error types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;

use crate::form::FormErrors;
use crate::model::Sector;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while validating sectors or talking to the backend.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Response body, if any.
        body: String,
    },
    /// The submitted sector failed form validation.
    #[error("Invalid sector: {0}")]
    Invalid(#[from] FormErrors),
    /// A schedule string is not a valid 24-hour `HH:MM` time.
    #[error("Invalid time: {0:?}")]
    InvalidTime(String),
    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for backends that own and persist the sector collection.
pub trait SectorPort: Send + Sync {
    /// Fetch the full sector collection.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend request fails.
    async fn list(&self) -> Result<Vec<Sector>, PortError>;

    /// Persist a new sector and return the updated collection.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the backend rejects the sector or the
    /// request fails.
    async fn create(&self, sector: &Sector) -> Result<Vec<Sector>, PortError>;
}
