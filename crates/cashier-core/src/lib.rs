//! # cashier-core: Pure Business Logic for the Cashier Backend
//!
//! Domain types, money arithmetic, checkout tallying and validation, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashier Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    /api/categories  /api/products  /api/transactions/...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cashier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ checkout  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Tally    │  │   rules   │  │   │
//! │  │   │Transaction│  │           │  │  Policy   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cashier-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, Product, Transaction, Report)
//! - [`money`] - Money type with integer arithmetic
//! - [`checkout`] - Pricing of checkout lines and the running total
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use cashier_core::{CheckoutPolicy, CheckoutTally, Product};
//!
//! let kopi = Product { id: 1, name: "Kopi".into(), price: 10, stock: 5 };
//!
//! let mut tally = CheckoutTally::default();
//! tally.add_line(&kopi, 2, CheckoutPolicy::default()).unwrap();
//!
//! assert_eq!(tally.total().amount(), 20);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutPolicy, CheckoutTally, PendingDetail};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single checkout.
pub const MAX_CHECKOUT_ITEMS: usize = 100;

/// Maximum quantity of a single checkout line.
///
/// Catches typos such as 10000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 9_999;

/// Maximum unit price accepted on create/update.
///
/// `MAX_PRICE × MAX_ITEM_QUANTITY × MAX_CHECKOUT_ITEMS` fits in an `i64`.
pub const MAX_PRICE: i64 = 1_000_000_000_000;

/// Maximum stock level accepted on create/update.
pub const MAX_STOCK: i64 = 1_000_000_000;
