//! # Glasstock - vehicle glass inventory store
//!
//! A small data-access layer for an auto-glass inventory: brands, the models
//! they make, and glass part records (windshields, door glass, vents, quarter
//! glass, back glass) with a stock count per model year.
//!
//! Glasstock provides:
//! - A single-file SQLite store with cascade-deleting foreign keys
//! - Typed insert and lookup operations for brands, models and parts
//! - A closed [`PartLocation`] enumeration validated at the boundary
//! - A small CLI for managing the inventory from the terminal

pub mod config;
pub mod part;
pub mod record;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use part::PartLocation;
pub use record::{Brand, Model, ModelWithBrand, WindshieldRecord};
pub use storage::{DbStats, InventoryStore};

/// Result type alias for Glasstock operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Glasstock operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database handle could not be established.
    #[error("cannot open database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// A unique constraint rejected the insert.
    #[error("record already exists")]
    Duplicate,

    /// Reserved for callers that require a row to exist. Lookups return an
    /// empty Vec instead of raising this.
    #[error("row not found")]
    NotFound,

    #[error("unknown part location: {0}")]
    UnknownPartLocation(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
