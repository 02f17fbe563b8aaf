//! # Repository Module
//!
//! Database repository implementations for the cashier backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.db.transactions().checkout(&items, policy)              │
//! │       ▼                                                                 │
//! │  TransactionRepository                                                 │
//! │  ├── checkout(&self, items, policy)                                    │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── report(&self)                                                     │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`](category::CategoryRepository) - Category CRUD
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and name filter
//! - [`TransactionRepository`](transaction::TransactionRepository) - Checkout, lookup, report

pub mod category;
pub mod product;
pub mod transaction;
