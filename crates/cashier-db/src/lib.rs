//! # cashier-db: Database Layer for the Cashier Backend
//!
//! SQLite storage for categories, products and sales transactions, using
//! sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashier Data Flow                                │
//! │                                                                         │
//! │  POST /api/transactions/checkout                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     cashier-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐  ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories   │  │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                 │  │  (embedded)  │  │   │
//! │  │   │               │    │ CategoryRepo    │  │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo     │  │ 001_init.sql │  │   │
//! │  │   │               │    │ TransactionRepo │  │              │  │   │
//! │  │   └───────────────┘    └─────────────────┘  └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (DB_PATH)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cashier_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./cashier.db")).await?;
//!
//! let products = db.products().list(None).await?;
//! let report = db.transactions().report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
pub use repository::transaction::TransactionRepository;
