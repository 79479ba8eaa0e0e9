//! # Address HTTP Server
//!
//! The stateless HTTP surface over the address store: four CRUD endpoints
//! plus a health check, combined into a single Axum router.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/addresses` - Create an address
//! - `GET /api/addresses` - List all addresses
//! - `PUT /api/addresses/{id}` - Replace all fields of an address
//! - `DELETE /api/addresses/{id}` - Delete an address

pub mod address_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use address_routes::{address_routes, AddressState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
