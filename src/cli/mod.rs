//! CLI module for the address service
//!
//! Provides the command-line interface:
//! - init: Create the database and apply migrations
//! - serve: Boot the HTTP server and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, Config};
pub use errors::{CliError, CliResult};
