//! # Address Client Core
//!
//! The non-presentation half of the address form: a typed HTTP client for
//! the four API endpoints, and an explicit view-state struct with pure
//! transitions (no I/O) that a rendering layer drives.
//!
//! Map rendering, geolocation permission UX, and reverse geocoding live
//! outside this core; they only ever feed a coordinate into the draft via
//! [`FormState::set_location`], and the form degrades to manual coordinate
//! entry without them.
//!
//! Network failures are never fatal: every operation on [`AddressClient`]
//! catches the failure into the state's error phase and leaves the draft
//! and cache usable for a manual retry.

pub mod api;
pub mod state;

pub use api::{AddressApiClient, AddressApiClientConfig, ClientError};
pub use state::{Coordinate, Draft, FormState, Mode, Phase, DEFAULT_LOCATION};

use crate::model::AddressRecord;

/// The address form: API client plus view state.
///
/// Each operation performs the network call, then applies the matching
/// pure transition to [`FormState`].
#[derive(Debug)]
pub struct AddressClient {
    api: AddressApiClient,
    pub state: FormState,
}

impl AddressClient {
    pub fn new(api: AddressApiClient) -> Self {
        Self {
            api,
            state: FormState::new(),
        }
    }

    /// Fetch the full list and replace the cache.
    ///
    /// Called on startup and after every successful mutation; a full
    /// refresh, no incremental patching. On failure the cache is left
    /// unchanged and the error phase is set.
    pub async fn load_addresses(&mut self) {
        match self.api.list().await {
            Ok(addresses) => self.state.addresses_loaded(addresses),
            Err(err) => self.state.operation_failed(format!("Error fetching addresses: {err}")),
        }
    }

    /// Create or update from the current draft, depending on the mode.
    ///
    /// On success the draft is cleared, edit mode exits, and the list is
    /// reloaded. On failure the draft is left intact so the user can retry.
    pub async fn submit(&mut self) {
        self.state.begin_submit();

        let payload = self.state.draft_payload();
        let saved: Result<AddressRecord, ClientError> = match self.state.mode {
            Mode::Editing(id) => self.api.update(id, &payload).await,
            Mode::Creating => self.api.create(&payload).await,
        };

        match saved {
            Ok(_) => {
                self.state.submit_saved();
                self.load_addresses().await;
            }
            Err(err) => self
                .state
                .operation_failed(format!("Error saving address: {err}")),
        }
    }

    /// Delete by id, then reload the list.
    ///
    /// On failure the cache is unchanged.
    pub async fn remove(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => self.load_addresses().await,
            Err(err) => self
                .state
                .operation_failed(format!("Error deleting address: {err}")),
        }
    }
}
