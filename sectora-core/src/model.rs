//! Domain data structures for sectors and observer positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::haversine_km;
use crate::schedule::ScheduleWindow;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier assigned to a sector by the backing store.
pub struct SectorId(pub String);

impl fmt::Display for SectorId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Latitude/longitude pair in decimal degrees.
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Construct a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this is the `(0, 0)` placeholder used before an address was picked.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Location of the observer looking for open sectors.
pub type Position = Coordinates;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named delivery zone with coordinates and a daily service window.
pub struct Sector {
    /// Store-assigned identifier; absent until the sector was persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SectorId>,
    /// Display label.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Opening time in minutes since local midnight.
    pub schedule_from_minutes: i32,
    /// Closing time in minutes since local midnight.
    pub schedule_to_minutes: i32,
    /// Location of the sector.
    pub coordinates: Coordinates,
}

impl Sector {
    /// Service window of this sector.
    #[must_use]
    pub fn schedule(&self) -> ScheduleWindow {
        ScheduleWindow::new(self.schedule_from_minutes, self.schedule_to_minutes)
    }

    /// Great-circle distance between the observer and this sector.
    #[must_use]
    pub fn distance_km(&self, position: Position) -> f64 {
        haversine_km(position, self.coordinates)
    }
}
