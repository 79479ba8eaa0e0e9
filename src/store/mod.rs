//! # Address Store
//!
//! Durable persistence for [`AddressRecord`](crate::model::AddressRecord)
//! rows. One SQLite table, five operations, no business logic.
//!
//! Every statement binds its parameters; user input is never concatenated
//! into SQL. Storage failures surface as an opaque [`StoreError`] and are
//! never retried here.
//!
//! Concurrent updates to the same id race and the last write wins; no
//! conflict is detected or reported. The pool makes each request's
//! operation independently safe without serializing unrelated requests.

mod address_store;
mod database;

pub use address_store::AddressStore;
pub use database::Database;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque persistence failure, propagated to the caller without retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
