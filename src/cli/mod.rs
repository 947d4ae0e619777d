//! CLI module for the Keyvault API
//!
//! Provides subcommands for running:
//! - `serve`: the API server
//! - `ui`: the static browser UI used to exercise the API

pub mod serve;
pub mod ui;

use clap::{Parser, Subcommand};

/// Keyvault API - hashed in-memory API key service
#[derive(Parser)]
#[command(name = "keyvault-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Serve the browser UI
    Ui(ui::UiArgs),
}
