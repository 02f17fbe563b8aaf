//! Shared router state.

use cashier_core::CheckoutPolicy;
use cashier_db::Database;

/// State handed to every handler. Cloned per request; the pool inside
/// `Database` is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub policy: CheckoutPolicy,
}

impl AppState {
    pub fn new(db: Database, policy: CheckoutPolicy) -> Self {
        AppState { db, policy }
    }
}
