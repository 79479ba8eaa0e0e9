//! addressbook - a minimal, self-hostable delivery-address service
//!
//! One relational table of delivery addresses, a four-endpoint HTTP API
//! over it, and the non-presentation core of the form client that
//! consumes it.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod model;
pub mod store;
