//! CLI argument definitions using clap
//!
//! Commands:
//! - addressbook init --config <path>
//! - addressbook serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// addressbook - a minimal, self-hostable delivery-address service
#[derive(Parser, Debug)]
#[command(name = "addressbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and apply migrations
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./addressbook.json")]
        config: PathBuf,
    },

    /// Start the address API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./addressbook.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
