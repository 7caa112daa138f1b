use std::sync::Arc;

use sectora_core::{
    form::{FormErrors, SectorDraft},
    model::{Coordinates, Position, Sector},
    schedule::now_minutes,
    service::SectorService,
    store::SectorStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Sectors,
    Register,
    Available,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Name,
    Address,
    Lat,
    Lng,
    From,
    To,
}

impl Field {
    pub(crate) const ALL: [Field; 6] = [
        Field::Name,
        Field::Address,
        Field::Lat,
        Field::Lng,
        Field::From,
        Field::To,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Address => "Address",
            Field::Lat => "Latitude",
            Field::Lng => "Longitude",
            Field::From => "Open from (HH:MM)",
            Field::To => "Open until (HH:MM)",
        }
    }
}

/// Text typed into the registration form.
#[derive(Debug, Clone, Default)]
pub(crate) struct SectorForm {
    pub name: String,
    pub address: String,
    pub lat: String,
    pub lng: String,
    pub from: String,
    pub to: String,
    pub focus: usize,
    pub errors: FormErrors,
}

impl SectorForm {
    pub(crate) fn focused(&self) -> Field {
        Field::ALL.get(self.focus).copied().unwrap_or(Field::Name)
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::Lat => &self.lat,
            Field::Lng => &self.lng,
            Field::From => &self.from,
            Field::To => &self.to,
        }
    }

    pub(crate) fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Lat => &mut self.lat,
            Field::Lng => &mut self.lng,
            Field::From => &mut self.from,
            Field::To => &mut self.to,
        }
    }

    pub(crate) fn error(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.errors.name.as_deref(),
            Field::Address | Field::Lat | Field::Lng => self.errors.address.as_deref(),
            Field::From => self.errors.schedule_from.as_deref(),
            Field::To => self.errors.schedule_to.as_deref(),
        }
    }

    /// Drop the error shown for `field` once the user edits it.
    pub(crate) fn clear_error(&mut self, field: Field) {
        let slot = match field {
            Field::Name => &mut self.errors.name,
            Field::Address | Field::Lat | Field::Lng => &mut self.errors.address,
            Field::From => &mut self.errors.schedule_from,
            Field::To => &mut self.errors.schedule_to,
        };
        *slot = None;
    }

    pub(crate) fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub(crate) fn previous_field(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(Field::ALL.len() - 1);
    }

    /// Convert typed text into a draft; unparsable coordinates become `None`.
    pub(crate) fn to_draft(&self) -> SectorDraft {
        let coordinates = match (self.lat.trim().parse(), self.lng.trim().parse()) {
            (Ok(lat), Ok(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        };

        SectorDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            schedule_from: self.from.trim().to_owned(),
            schedule_to: self.to.trim().to_owned(),
            coordinates,
        }
    }
}

pub(crate) struct App {
    pub service: Arc<SectorService>,
    pub store: SectorStore,

    pub screen: Screen,
    pub sector_list_index: usize,

    pub form: SectorForm,

    pub position_input: String,
    pub position: Option<Position>,

    pub is_loading: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<SectorService>, position: Option<Position>) -> Self {
        let position_input = position
            .map(|pos| format!("{}, {}", pos.lat, pos.lng))
            .unwrap_or_default();
        Self {
            service,
            store: SectorStore::new(),
            screen: Screen::Sectors,
            sector_list_index: 0,
            form: SectorForm::default(),
            position_input,
            position,
            is_loading: false,
            error_message: None,
            info_message: None,
        }
    }

    /// Sectors open near the current position, evaluated against the local clock.
    pub(crate) fn available_now(&self) -> Vec<&Sector> {
        let Some(position) = self.position else {
            return Vec::new();
        };
        self.service
            .available(position, self.store.sectors(), now_minutes())
    }

    pub(crate) fn apply_position_input(&mut self) {
        if let Some(position) = parse_position(&self.position_input) {
            self.position = Some(position);
            self.error_message = None;
        } else {
            self.error_message = Some("Position must look like `4.7110, -74.0721`".into());
        }
    }
}

/// Parse `lat,lng` (whitespace around either part allowed).
pub(crate) fn parse_position(input: &str) -> Option<Position> {
    let (lat, lng) = input.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    (lat.is_finite() && lng.is_finite()).then_some(Coordinates::new(lat, lng))
}
