//! Form view state and its pure transitions.
//!
//! The rendering layer holds one [`FormState`] and applies transitions in
//! response to user input and API outcomes; no transition performs I/O.
//! States: idle, submitting, error. Edit mode is tracked separately so an
//! error during an update stays in edit mode for retry.

use crate::model::{AddressInput, AddressPayload, AddressRecord, Category};

/// A map coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Initial map position before any user or device input.
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    latitude: 20.536846,
    longitude: 76.180870,
};

/// The in-progress, unsaved field values for the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub house_number: String,
    pub road: String,
    pub category: Category,
    pub location: Coordinate,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            house_number: String::new(),
            road: String::new(),
            category: Category::Home,
            location: DEFAULT_LOCATION,
        }
    }
}

/// Whether the next submit creates a new record or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing(i64),
}

/// Lifecycle of the current operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Error(String),
}

/// The complete client view state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub draft: Draft,
    pub mode: Mode,
    pub addresses: Vec<AddressRecord>,
    pub search: String,
    pub phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            mode: Mode::Creating,
            addresses: Vec::new(),
            search: String::new(),
            phase: Phase::Idle,
        }
    }

    // ==================
    // Draft edits
    // ==================

    pub fn set_house_number(&mut self, value: impl Into<String>) {
        self.draft.house_number = value.into();
    }

    pub fn set_road(&mut self, value: impl Into<String>) {
        self.draft.road = value.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Set the draft coordinate, from a map click or device location.
    pub fn set_location(&mut self, location: Coordinate) {
        self.draft.location = location;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    // ==================
    // Mode transitions
    // ==================

    /// Copy a cached record's fields into the draft and enter edit mode.
    pub fn start_edit(&mut self, record: &AddressRecord) {
        self.draft = Draft {
            house_number: record.house_number.clone(),
            road: record.road.clone(),
            category: record.category,
            location: Coordinate {
                latitude: record.latitude,
                longitude: record.longitude,
            },
        };
        self.mode = Mode::Editing(record.id);
        self.phase = Phase::Idle;
    }

    /// Discard the draft and return to create mode.
    pub fn cancel_edit(&mut self) {
        self.reset_draft();
        self.mode = Mode::Creating;
        self.phase = Phase::Idle;
    }

    /// Clear the draft fields back to defaults, keeping the selected
    /// location.
    fn reset_draft(&mut self) {
        self.draft = Draft {
            location: self.draft.location,
            ..Draft::default()
        };
    }

    // ==================
    // Operation outcomes
    // ==================

    pub fn begin_submit(&mut self) {
        self.phase = Phase::Submitting;
    }

    /// The save succeeded: clear the draft and exit edit mode.
    ///
    /// The selected location is kept so consecutive entries near each
    /// other need no re-picking.
    pub fn submit_saved(&mut self) {
        self.reset_draft();
        self.mode = Mode::Creating;
        self.phase = Phase::Idle;
    }

    /// Replace the cached list with a fresh fetch.
    pub fn addresses_loaded(&mut self, addresses: Vec<AddressRecord>) {
        self.addresses = addresses;
        self.phase = Phase::Idle;
    }

    /// Any operation failed: record the message, leave draft and cache
    /// untouched so the user can retry.
    pub fn operation_failed(&mut self, message: String) {
        self.phase = Phase::Error(message);
    }

    // ==================
    // Views
    // ==================

    /// Build the submit payload from the draft and selected coordinate.
    pub fn draft_payload(&self) -> AddressPayload {
        AddressPayload::from_input(&AddressInput {
            house_number: self.draft.house_number.clone(),
            road: self.draft.road.clone(),
            category: self.draft.category,
            latitude: self.draft.location.latitude,
            longitude: self.draft.location.longitude,
        })
    }

    /// The cached records whose houseNumber, road, or category contains
    /// the search string, case-insensitively.
    ///
    /// An empty query returns the whole cache. Purely a view; the cache
    /// is never mutated.
    pub fn filtered(&self) -> Vec<&AddressRecord> {
        let query = self.search.to_lowercase();
        self.addresses
            .iter()
            .filter(|record| {
                record.house_number.to_lowercase().contains(&query)
                    || record.road.to_lowercase().contains(&query)
                    || record.category.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
