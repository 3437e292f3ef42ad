//! # Repository Module
//!
//! Database repository implementations for Inventario.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Record Operation                                                      │
//! │       │                                                                 │
//! │       │  db.products().find_low_stock(10)                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── insert(&self, draft)            → id                              │
//! │  ├── get_by_id(&self, id)            → Option<Product>                 │
//! │  ├── list_all(&self)                 → Vec<Product>                    │
//! │  ├── update(&self, id, draft)                                          │
//! │  ├── delete(&self, id)               → bool                            │
//! │  ├── find(&self, criterion)          → Vec<Product>                    │
//! │  └── find_low_stock(&self, t)        → Vec<Product>                    │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                             │
//! │       ▼                                                                 │
//! │  SQLite (productos)                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD, search and stock report

pub mod product;
