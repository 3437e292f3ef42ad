//! # inventario-core: Pure Domain Logic for Inventario
//!
//! This crate holds the types every other layer agrees on, plus the
//! text-to-number coercion the menu uses for quantities, prices and ids.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   apps/cli (menu, prompts, table rendering)                            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   inventario-db (SQLite, productos table)                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   inventario-core (THIS CRATE)                                         │
//! │   Product · ProductDraft · SearchCriterion · parse_*                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, SearchCriterion)
//! - [`error`] - Validation error type
//! - [`validation`] - Coercion of free text into numbers
//!
//! ## Example Usage
//!
//! ```rust
//! use inventario_core::validation::{parse_price, parse_quantity};
//!
//! assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
//! assert!(parse_quantity("twelve").is_err());
//! assert_eq!(parse_price("0.5").unwrap(), 0.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
