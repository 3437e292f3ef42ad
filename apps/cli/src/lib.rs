//! # inventario-cli: Interactive Inventory Menu
//!
//! Text front end for the inventory manager.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  main.rs ── init_tracing, AppConfig, Database::new                     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  menu::run ──► menu::dispatch ──► operations::{register, view, ...}    │
//! │                                        │              │                 │
//! │                                        ▼              ▼                 │
//! │                               prompt / render     inventario-db        │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                                 Terminal trait                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Data file location and log defaults
//! - [`error`] - CLI error type
//! - [`terminal`] - Console abstraction and the colored stdout terminal
//! - [`prompt`] - Re-prompting input helpers
//! - [`render`] - Fixed-width product table
//! - [`operations`] - The six record operations
//! - [`menu`] - Main menu loop

pub mod config;
pub mod error;
pub mod menu;
pub mod operations;
pub mod prompt;
pub mod render;
pub mod terminal;

use tracing_subscriber::EnvFilter;

pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use terminal::{StdTerminal, Terminal, Tone};

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays reserved for the menu.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every query
/// - `RUST_LOG=inventario_db=debug` - Storage layer only
/// - Default: `default_filter`
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
