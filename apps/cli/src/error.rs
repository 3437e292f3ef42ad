//! # CLI Error Type
//!
//! Unified error type for the menu and record operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Menu                               │
//! │                                                                         │
//! │  Non-numeric quantity/price  → handled inside the prompt loop          │
//! │  Unknown id                  → normal "not found" outcome              │
//! │  Invalid menu selection      → message, loop again                     │
//! │                                                                         │
//! │  CliError::Db        → reported by the dispatcher, menu continues      │
//! │  CliError::Cancelled → input ended, dispatcher stops cleanly           │
//! │  CliError::Io        → terminal broken, propagates out of main         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventario_db::DbError;
use thiserror::Error;

/// Errors surfaced by record operations and the dispatcher.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storage layer failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// Terminal read/write failure.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was waiting.
    #[error("Input closed")]
    Cancelled,
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
