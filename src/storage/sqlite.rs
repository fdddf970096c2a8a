//! SQLite-backed inventory store

use std::path::Path;

use rusqlite::{Connection, params};

use super::schema;
use crate::part::PartLocation;
use crate::record::{Brand, Model, ModelWithBrand, WindshieldRecord};
use crate::{Error, Result};

/// SQLite-backed store for the glass inventory.
///
/// Owns a single connection; callers hold an explicit instance rather than a
/// process-wide handle. All operations are synchronous single statements;
/// only [`migrate`](Self::migrate) runs inside a transaction.
pub struct InventoryStore {
    conn: Connection,
}

impl InventoryStore {
    /// Open a database file (creates if it doesn't exist) and run the
    /// idempotent schema migration.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(Error::Connection)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::Connection)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // Cascade deletes depend on this; the pragma is per-connection.
        conn.pragma_update(None, "foreign_keys", true)?;
        let mut store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Create the brand, model and windshield tables plus indexes.
    ///
    /// Runs as one transaction: a failure rolls everything back and leaves no
    /// partial schema behind. Safe to call on an already-migrated database.
    pub fn migrate(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(schema::CREATE_BRAND_TABLE, [])?;
        tracing::info!("brand table ready");

        tx.execute(schema::CREATE_MODEL_TABLE, [])?;
        tracing::info!("model table ready");

        tx.execute(schema::CREATE_WINDSHIELD_TABLE, [])?;
        tracing::info!("windshield table ready");

        for stmt in schema::CREATE_INDEXES {
            tx.execute(stmt, [])?;
        }
        tracing::info!("indexes ready");

        tx.commit().map_err(|e| {
            tracing::error!("schema migration failed: {e}");
            Error::Storage(e)
        })
    }

    // ========== Insert Operations ==========

    /// Insert a new brand, returning its id.
    ///
    /// A name collision yields [`Error::Duplicate`].
    pub fn create_brand(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO brand (name) VALUES (?1)", [name])
            .map_err(classify_insert_error)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a new model tied to `brand_id`, returning its id.
    ///
    /// The brand is not checked up front; a dangling `brand_id` fails the
    /// foreign-key constraint and surfaces as [`Error::Storage`].
    pub fn create_model(&self, name: &str, brand_id: i64) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO model (name, brand_id) VALUES (?1, ?2)",
                params![name, brand_id],
            )
            .map_err(classify_insert_error)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a new part record, returning its id
    pub fn create_windshield(
        &self,
        location: PartLocation,
        year: &str,
        stock: i64,
        brand_id: i64,
        model_id: i64,
    ) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO windshield (type, year, stock, brand_id, model_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![location.as_str(), year, stock, brand_id, model_id],
            )
            .map_err(classify_insert_error)?;
        Ok(self.conn.last_insert_rowid())
    }

    // ========== Update Operations ==========

    /// Overwrite the stock count for the part record matching `id`.
    ///
    /// Returns the number of rows changed. An id that matches nothing is not
    /// an error: the call succeeds with 0, and no row is created.
    pub fn update_stock(&self, id: i64, stock: i64) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE windshield SET stock = ?1 WHERE id = ?2",
            params![stock, id],
        )?;
        Ok(changed)
    }

    // ========== Lookup Operations ==========

    /// All brands. Empty table gives an empty Vec, never an error.
    pub fn all_brands(&self) -> Result<Vec<Brand>> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM brand")?;
        let brands = stmt
            .query_map([], |row| self.row_to_brand(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(brands)
    }

    /// All models belonging to the brand with this id
    pub fn find_models_by_brand_id(&self, brand_id: i64) -> Result<Vec<Model>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, brand_id FROM model WHERE brand_id = ?1")?;
        let models = stmt
            .query_map([brand_id], |row| self.row_to_model(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(models)
    }

    /// All models belonging to the named brand, with the brand name attached
    pub fn find_models_by_brand_name(&self, name: &str) -> Result<Vec<ModelWithBrand>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.name, m.brand_id, b.name AS brand_name \
             FROM model m \
             JOIN brand b ON m.brand_id = b.id \
             WHERE b.name = ?1",
        )?;
        let models = stmt
            .query_map([name], |row| {
                Ok(ModelWithBrand {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    brand_id: row.get(2)?,
                    brand_name: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(models)
    }

    /// All part records for the model with this id
    pub fn find_windshields_by_model_id(&self, model_id: i64) -> Result<Vec<WindshieldRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, type, year, stock, brand_id, model_id \
             FROM windshield WHERE model_id = ?1",
        )?;
        let records = stmt
            .query_map([model_id], |row| self.row_to_windshield(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    // ========== Counts ==========

    /// Count all brands
    pub fn count_brands(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM brand", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all models
    pub fn count_models(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM model", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all part records
    pub fn count_windshields(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM windshield", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Total stock across all part records
    pub fn total_stock(&self) -> Result<i64> {
        let total: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(stock), 0) FROM windshield",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            brands: self.count_brands()?,
            models: self.count_models()?,
            parts: self.count_windshields()?,
            total_stock: self.total_stock()?,
        })
    }

    // ========== Row Helpers ==========

    fn row_to_brand(&self, row: &rusqlite::Row) -> rusqlite::Result<Brand> {
        Ok(Brand {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn row_to_model(&self, row: &rusqlite::Row) -> rusqlite::Result<Model> {
        Ok(Model {
            id: row.get(0)?,
            name: row.get(1)?,
            brand_id: row.get(2)?,
        })
    }

    fn row_to_windshield(&self, row: &rusqlite::Row) -> rusqlite::Result<WindshieldRecord> {
        let location_str: String = row.get(1)?;
        let location: PartLocation = location_str.parse().map_err(|e: Error| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(WindshieldRecord {
            id: row.get(0)?,
            location,
            year: row.get(2)?,
            stock: row.get(3)?,
            brand_id: row.get(4)?,
            model_id: row.get(5)?,
        })
    }
}

/// Map a unique-constraint violation to [`Error::Duplicate`]; anything else,
/// including foreign-key failures, passes through as [`Error::Storage`].
fn classify_insert_error(err: rusqlite::Error) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Error::Duplicate
        }
        _ => Error::Storage(err),
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub brands: usize,
    pub models: usize,
    pub parts: usize,
    pub total_stock: i64,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Inventory Statistics:")?;
        writeln!(f, "  Brands: {}", self.brands)?;
        writeln!(f, "  Models: {}", self.models)?;
        writeln!(f, "  Part records: {}", self.parts)?;
        writeln!(f, "  Total stock: {}", self.total_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_corolla() -> (InventoryStore, i64, i64) {
        let store = InventoryStore::open_in_memory().unwrap();
        let brand_id = store.create_brand("Toyota").unwrap();
        let model_id = store.create_model("Corolla", brand_id).unwrap();
        (store, brand_id, model_id)
    }

    #[test]
    fn test_brand_round_trip() {
        let store = InventoryStore::open_in_memory().unwrap();
        let id = store.create_brand("Toyota").unwrap();

        let brands = store.all_brands().unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].id, id);
        assert_eq!(brands[0].name, "Toyota");
    }

    #[test]
    fn test_duplicate_brand_is_rejected() {
        let store = InventoryStore::open_in_memory().unwrap();
        store.create_brand("Toyota").unwrap();

        let err = store.create_brand("Toyota").unwrap_err();
        assert!(matches!(err, Error::Duplicate));
        assert_eq!(store.count_brands().unwrap(), 1);
    }

    #[test]
    fn test_model_with_missing_brand_fails_fk() {
        let store = InventoryStore::open_in_memory().unwrap();

        let err = store.create_model("Corolla", 999).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(store.count_models().unwrap(), 0);
    }

    #[test]
    fn test_duplicate_model_name_is_rejected() {
        let (store, brand_id, _) = store_with_corolla();

        let err = store.create_model("Corolla", brand_id).unwrap_err();
        assert!(matches!(err, Error::Duplicate));
        assert_eq!(store.count_models().unwrap(), 1);
    }

    #[test]
    fn test_windshield_round_trip() {
        let (store, brand_id, model_id) = store_with_corolla();
        let id = store
            .create_windshield(PartLocation::Windshield, "2019", 4, brand_id, model_id)
            .unwrap();

        let parts = store.find_windshields_by_model_id(model_id).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].id, id);
        assert_eq!(parts[0].location, PartLocation::Windshield);
        assert_eq!(parts[0].year, "2019");
        assert_eq!(parts[0].stock, 4);
    }

    #[test]
    fn test_update_stock() {
        let (store, brand_id, model_id) = store_with_corolla();
        let id = store
            .create_windshield(PartLocation::FrontLeftDoor, "2019", 4, brand_id, model_id)
            .unwrap();

        let changed = store.update_stock(id, 7).unwrap();
        assert_eq!(changed, 1);

        let parts = store.find_windshields_by_model_id(model_id).unwrap();
        assert_eq!(parts[0].stock, 7);
    }

    #[test]
    fn test_update_stock_on_missing_row_is_a_noop() {
        let (store, _, model_id) = store_with_corolla();

        let changed = store.update_stock(999, 7).unwrap();
        assert_eq!(changed, 0);
        assert!(store.find_windshields_by_model_id(model_id).unwrap().is_empty());
        assert_eq!(store.count_windshields().unwrap(), 0);
    }

    #[test]
    fn test_brand_without_models_gives_empty_vec() {
        let store = InventoryStore::open_in_memory().unwrap();
        let brand_id = store.create_brand("Toyota").unwrap();

        let models = store.find_models_by_brand_id(brand_id).unwrap();
        assert!(models.is_empty());
    }

    #[test]
    fn test_models_by_brand_name_carries_brand() {
        let (store, brand_id, model_id) = store_with_corolla();

        let models = store.find_models_by_brand_name("Toyota").unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, model_id);
        assert_eq!(models[0].brand_id, brand_id);
        assert_eq!(models[0].brand_name, "Toyota");

        assert!(store.find_models_by_brand_name("Honda").unwrap().is_empty());
    }

    #[test]
    fn test_deleting_brand_cascades() {
        let (store, brand_id, model_id) = store_with_corolla();
        store
            .create_windshield(PartLocation::Back, "2019", 2, brand_id, model_id)
            .unwrap();

        // No delete operation is exposed; act on the storage directly.
        store
            .conn
            .execute("DELETE FROM brand WHERE id = ?1", [brand_id])
            .unwrap();

        assert_eq!(store.count_brands().unwrap(), 0);
        assert_eq!(store.count_models().unwrap(), 0);
        assert_eq!(store.count_windshields().unwrap(), 0);
    }

    #[test]
    fn test_stats() {
        let (store, brand_id, model_id) = store_with_corolla();
        store
            .create_windshield(PartLocation::Windshield, "2019", 4, brand_id, model_id)
            .unwrap();
        store
            .create_windshield(PartLocation::RearLeftQuarter, "2020", 3, brand_id, model_id)
            .unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.brands, 1);
        assert_eq!(stats.models, 1);
        assert_eq!(stats.parts, 2);
        assert_eq!(stats.total_stock, 7);
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let mut store = InventoryStore::open_in_memory().unwrap();
        store.create_brand("Toyota").unwrap();

        store.migrate().unwrap();
        assert_eq!(store.count_brands().unwrap(), 1);
    }

    #[test]
    fn test_reopen_preserves_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        {
            let store = InventoryStore::open(&path).unwrap();
            store.create_brand("Toyota").unwrap();
        }

        let store = InventoryStore::open(&path).unwrap();
        let brands = store.all_brands().unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].name, "Toyota");
    }
}
