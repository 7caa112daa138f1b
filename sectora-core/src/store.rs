//! Caller-owned snapshot of the sector collection.

use tracing::{debug, warn};

use crate::availability::filter_available;
use crate::model::{Position, Sector};

#[derive(Debug, Clone)]
/// State changes applied to a [`SectorStore`].
pub enum SectorAction {
    /// Replace the whole collection with a fresh snapshot.
    Replace(Vec<Sector>),
    /// Append a single sector.
    Add(Sector),
    /// Record a failure reported by the backend.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
/// Latest known sector collection and the last backend error.
pub struct SectorStore {
    sectors: Vec<Sector>,
    error: Option<String>,
}

impl SectorStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sector snapshot.
    #[must_use]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Last error reported by the backend, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply an action. Only the field the action targets changes.
    pub fn apply(&mut self, action: SectorAction) {
        match action {
            SectorAction::Replace(sectors) => {
                debug!(count = sectors.len(), "replacing sector snapshot");
                self.sectors = sectors;
            }
            SectorAction::Add(sector) => {
                debug!(sector = %sector.name, "adding sector");
                self.sectors.push(sector);
            }
            SectorAction::Failed(message) => {
                warn!(%message, "sector backend failed");
                self.error = Some(message);
            }
        }
    }

    /// Forget the last backend error once the backend recovered.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply a snapshot delivered by a push subscription.
    ///
    /// Push deliveries are full replacements, except that an empty snapshot is
    /// dropped and the previous list kept.
    pub fn apply_push_snapshot(&mut self, sectors: Vec<Sector>) {
        if sectors.is_empty() {
            debug!("ignoring empty push snapshot");
            return;
        }
        self.apply(SectorAction::Replace(sectors));
    }

    /// Sectors from the current snapshot available at `position` and `now_minutes`.
    #[must_use]
    pub fn available(&self, position: Position, now_minutes: i32) -> Vec<&Sector> {
        filter_available(position, &self.sectors, now_minutes)
    }
}
