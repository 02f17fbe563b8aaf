//! HTTP handlers, one module per resource.

pub mod category;
pub mod health;
pub mod product;
pub mod transaction;
