//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - brand(id, name)
//! - model(id, name, brand_id)
//! - windshield(id, type, year, stock, brand_id, model_id)
//!
//! Foreign keys cascade on delete: removing a brand removes its models and
//! every part record referencing either.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, InventoryStore};
