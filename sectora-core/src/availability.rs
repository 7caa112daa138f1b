//! Selection of sectors that are both nearby and currently open.

use tracing::{debug, trace};

use crate::geo::within_service_radius;
use crate::model::{Position, Sector};

/// Whether a single sector is within the service radius of `position` and open
/// at `now_minutes`.
#[must_use]
pub fn is_available(position: Position, sector: &Sector, now_minutes: i32) -> bool {
    let distance_km = sector.distance_km(position);
    if !within_service_radius(distance_km) {
        trace!(sector = %sector.name, distance_km, "sector out of range");
        return false;
    }

    let window = sector.schedule();
    if !window.contains(now_minutes) {
        trace!(sector = %sector.name, %window, now_minutes, "sector closed");
        return false;
    }

    true
}

/// Filter `sectors` down to those available to an observer at `position` at
/// minute-of-day `now_minutes`.
///
/// The result keeps the input order and borrows from `sectors`. The function
/// is pure: callers pass the current snapshot and clock reading each time.
#[must_use]
pub fn filter_available(position: Position, sectors: &[Sector], now_minutes: i32) -> Vec<&Sector> {
    let available: Vec<&Sector> = sectors
        .iter()
        .filter(|sector| is_available(position, sector, now_minutes))
        .collect();

    debug!(
        total = sectors.len(),
        available = available.len(),
        now_minutes,
        "filtered sectors"
    );

    available
}
