//! Validation of sector registration input.

use crate::model::{Coordinates, Sector};
use crate::schedule::{is_valid_time, time_to_minutes};

const NAME_REQUIRED: &str = "name is required";
const ADDRESS_REQUIRED: &str = "address is required";
const ADDRESS_UNRESOLVED: &str = "pick an address with coordinates";
const TIMES_REQUIRED: &str = "both times are required";
const TIME_FORMAT: &str = "invalid time format (HH:MM)";
const TIME_ORDER: &str = "start time must be before end time";

const FIELD_NAMES: [&str; 4] = ["name", "address", "scheduleFrom", "scheduleTo"];

#[derive(Debug, Clone, Default, PartialEq)]
/// Raw registration input as typed by an administrator.
pub struct SectorDraft {
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Opening time as `HH:MM`.
    pub schedule_from: String,
    /// Closing time as `HH:MM`.
    pub schedule_to: String,
    /// Coordinates resolved for the address, if any.
    pub coordinates: Option<Coordinates>,
}

#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", summarize([.name, .address, .schedule_from, .schedule_to]))]
/// Per-field validation messages for a [`SectorDraft`].
pub struct FormErrors {
    /// Problem with the name field.
    pub name: Option<String>,
    /// Problem with the address or its coordinates.
    pub address: Option<String>,
    /// Problem with the opening time.
    pub schedule_from: Option<String>,
    /// Problem with the closing time.
    pub schedule_to: Option<String>,
}

impl FormErrors {
    /// Whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages().next().is_none()
    }

    /// Iterate over `(field, message)` pairs for fields with errors.
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, &str)> {
        labelled([
            &self.name,
            &self.address,
            &self.schedule_from,
            &self.schedule_to,
        ])
    }

    fn set_schedule(&mut self, message: &str) {
        self.schedule_from = Some(message.to_owned());
        self.schedule_to = Some(message.to_owned());
    }
}

fn labelled(slots: [&Option<String>; 4]) -> impl Iterator<Item = (&'static str, &str)> {
    FIELD_NAMES
        .into_iter()
        .zip(slots)
        .filter_map(|(field, message)| message.as_deref().map(|text| (field, text)))
}

// `field: message` pairs joined by `; `, in field order.
fn summarize(slots: [&Option<String>; 4]) -> String {
    labelled(slots)
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl SectorDraft {
    /// Validate the draft and convert it into a sector ready to be created.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing every field that failed validation.
    pub fn validate(&self) -> Result<Sector, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(NAME_REQUIRED.to_owned());
        }

        let coordinates = self.coordinates.filter(|coords| !coords.is_unset());
        if self.address.trim().is_empty() {
            errors.address = Some(ADDRESS_REQUIRED.to_owned());
        } else if coordinates.is_none() {
            errors.address = Some(ADDRESS_UNRESOLVED.to_owned());
        }

        let window = self.schedule_minutes(&mut errors);

        match (coordinates, window) {
            (Some(coordinates), Some((from, to))) if errors.is_empty() => Ok(Sector {
                id: None,
                name: self.name.clone(),
                address: self.address.clone(),
                schedule_from_minutes: from,
                schedule_to_minutes: to,
                coordinates,
            }),
            _ => Err(errors),
        }
    }

    fn schedule_minutes(&self, errors: &mut FormErrors) -> Option<(i32, i32)> {
        if self.schedule_from.is_empty() || self.schedule_to.is_empty() {
            errors.set_schedule(TIMES_REQUIRED);
            return None;
        }

        if !is_valid_time(&self.schedule_from) || !is_valid_time(&self.schedule_to) {
            errors.set_schedule(TIME_FORMAT);
            return None;
        }

        let from = time_to_minutes(&self.schedule_from).ok()?;
        let to = time_to_minutes(&self.schedule_to).ok()?;
        if from >= to {
            errors.set_schedule(TIME_ORDER);
            return None;
        }

        Some((from, to))
    }
}
