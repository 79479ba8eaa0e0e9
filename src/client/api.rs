//! HTTP client for the address API
//!
//! Provides a typed client for the four CRUD endpoints.
//!
//! # Example
//!
//! ```ignore
//! let client = AddressApiClient::new("http://localhost:5000")?;
//! let addresses = client.list().await?;
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{AddressPayload, AddressRecord};

/// Errors from the client side of an API call.
///
/// `Network` covers calls that never completed (connectivity, timeout);
/// `Api` covers completed calls the server rejected.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Deserialization(String),
}

/// Configuration for [`AddressApiClient`]
#[derive(Debug, Clone)]
pub struct AddressApiClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for AddressApiClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
        }
    }
}

/// Typed HTTP client for the address API
#[derive(Debug, Clone)]
pub struct AddressApiClient {
    client: Client,
    base_url: String,
}

/// Wire shape of the create/update success body.
#[derive(Debug, Deserialize)]
struct SavedResponse {
    address: AddressRecord,
}

impl AddressApiClient {
    /// Create a new client with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_config(base_url, AddressApiClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        base_url: impl Into<String>,
        config: AddressApiClientConfig,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch every address.
    ///
    /// GET /api/addresses
    pub async fn list(&self) -> Result<Vec<AddressRecord>, ClientError> {
        let url = format!("{}/api/addresses", self.base_url);
        debug!(url = %url, "fetching addresses");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// Create a new address and return the stored record with its id.
    ///
    /// POST /api/addresses
    pub async fn create(&self, payload: &AddressPayload) -> Result<AddressRecord, ClientError> {
        let url = format!("{}/api/addresses", self.base_url);
        debug!(url = %url, "creating address");

        let response = self.client.post(&url).json(payload).send().await?;
        let response = Self::check_status(response).await?;

        let saved: SavedResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        Ok(saved.address)
    }

    /// Replace all fields of the address at `id`.
    ///
    /// PUT /api/addresses/{id}
    pub async fn update(
        &self,
        id: i64,
        payload: &AddressPayload,
    ) -> Result<AddressRecord, ClientError> {
        let url = format!("{}/api/addresses/{}", self.base_url, id);
        debug!(url = %url, "updating address");

        let response = self.client.put(&url).json(payload).send().await?;
        let response = Self::check_status(response).await?;

        let saved: SavedResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))?;
        Ok(saved.address)
    }

    /// Delete the address at `id`.
    ///
    /// DELETE /api/addresses/{id}
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = format!("{}/api/addresses/{}", self.base_url, id);
        debug!(url = %url, "deleting address");

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
