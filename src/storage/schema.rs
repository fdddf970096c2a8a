//! Database schema definitions

/// SQL to create the brand table
pub const CREATE_BRAND_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS brand (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
)
"#;

/// SQL to create the model table.
/// `UNIQUE(id, brand_id)` is carried over from the legacy schema; it is
/// subsumed by the primary key but kept so existing databases stay compatible.
pub const CREATE_MODEL_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS model (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL,
    brand_id INTEGER NOT NULL,
    UNIQUE(id, brand_id),
    FOREIGN KEY(brand_id) REFERENCES brand(id) ON DELETE CASCADE
)
"#;

/// SQL to create the windshield table.
/// `type` holds a PartLocation code; `UNIQUE(id, model_id)` is legacy like
/// the model table's pair constraint.
pub const CREATE_WINDSHIELD_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS windshield (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL,
    year TEXT NOT NULL,
    stock INTEGER NOT NULL,
    brand_id INTEGER NOT NULL,
    model_id INTEGER NOT NULL,
    UNIQUE(id, model_id),
    FOREIGN KEY(model_id) REFERENCES model(id) ON DELETE CASCADE,
    FOREIGN KEY(brand_id) REFERENCES brand(id) ON DELETE CASCADE
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_model_brand ON model(brand_id)",
    "CREATE INDEX IF NOT EXISTS idx_windshield_model ON windshield(model_id)",
    "CREATE INDEX IF NOT EXISTS idx_windshield_brand ON windshield(brand_id)",
];
