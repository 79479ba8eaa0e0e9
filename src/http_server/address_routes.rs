//! Address HTTP Routes
//!
//! The four CRUD endpoints over the address store. Create and update run
//! the same required-field validation before touching the store; update
//! and delete translate a zero affected-row count into 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::model::{validate, AddressPayload, AddressRecord};
use crate::store::{AddressStore, StoreError};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Address state shared across handlers
#[derive(Debug)]
pub struct AddressState {
    pub store: AddressStore,
}

impl AddressState {
    pub fn new(store: AddressStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct AddressSavedResponse {
    pub message: String,
    pub address: AddressRecord,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Address Routes
// ==================

/// Create address routes
pub fn address_routes(state: Arc<AddressState>) -> Router {
    Router::new()
        .route("/addresses", post(create_address_handler))
        .route("/addresses", get(list_addresses_handler))
        .route("/addresses/{id}", put(update_address_handler))
        .route("/addresses/{id}", delete(delete_address_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_address_handler(
    State(state): State<Arc<AddressState>>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<(StatusCode, Json<AddressSavedResponse>)> {
    let input = validate(&payload)?;

    let id = state.store.insert(&input).await?;
    // Echo the stored row back so the client cache sees the assigned id.
    let address = state
        .store
        .fetch_by_id(id)
        .await?
        .ok_or(ApiError::Persistence(StoreError::Database(
            sqlx::Error::RowNotFound,
        )))?;

    tracing::info!(id, "address created");
    Ok((
        StatusCode::CREATED,
        Json(AddressSavedResponse {
            message: "Address saved successfully".to_string(),
            address,
        }),
    ))
}

async fn list_addresses_handler(
    State(state): State<Arc<AddressState>>,
) -> ApiResult<Json<Vec<AddressRecord>>> {
    let addresses = state.store.list_all().await?;
    Ok(Json(addresses))
}

async fn update_address_handler(
    State(state): State<Arc<AddressState>>,
    Path(id): Path<i64>,
    Json(payload): Json<AddressPayload>,
) -> ApiResult<Json<AddressSavedResponse>> {
    let input = validate(&payload)?;

    let affected = state.store.update_by_id(id, &input).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    let address = state
        .store
        .fetch_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(id, "address updated");
    Ok(Json(AddressSavedResponse {
        message: "Address updated successfully".to_string(),
        address,
    }))
}

async fn delete_address_handler(
    State(state): State<Arc<AddressState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = state.store.delete_by_id(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "address deleted");
    Ok(Json(MessageResponse {
        message: "Address deleted successfully".to_string(),
    }))
}
