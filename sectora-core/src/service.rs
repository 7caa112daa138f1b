//! High-level service facade over the sector backend.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::availability::filter_available;
use crate::form::SectorDraft;
use crate::model::{Position, Sector};
use crate::ports::{PortError, SectorPort};

/// Public entry point for loading, registering, and filtering sectors.
pub struct SectorService {
    port: Arc<dyn SectorPort>,
}

impl SectorService {
    /// Create a new service bound to the provided backend.
    #[must_use]
    pub fn new(port: Arc<dyn SectorPort>) -> Self {
        Self { port }
    }

    /// Fetch the current sector collection.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the backend call fails.
    pub async fn load(&self) -> Result<Vec<Sector>, PortError> {
        let sectors = self.port.list().await?;
        info!(count = sectors.len(), "loaded sectors");
        Ok(sectors)
    }

    /// Validate a draft and register it with the backend.
    ///
    /// Returns the backend's updated collection. Invalid drafts never reach the
    /// backend.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Invalid`] when validation fails, or another
    /// [`PortError`] if the backend call fails.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub async fn register(&self, draft: &SectorDraft) -> Result<Vec<Sector>, PortError> {
        let sector = draft.validate().inspect_err(|errors| {
            warn!(%errors, "rejected sector draft");
        })?;
        let sectors = self.port.create(&sector).await?;
        info!(count = sectors.len(), "registered sector");
        Ok(sectors)
    }

    /// Sectors from `sectors` open and nearby for `position` at `now_minutes`.
    #[must_use]
    pub fn available<'snapshot>(
        &self,
        position: Position,
        sectors: &'snapshot [Sector],
        now_minutes: i32,
    ) -> Vec<&'snapshot Sector> {
        filter_available(position, sectors, now_minutes)
    }
}
