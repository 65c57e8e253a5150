//! SQL DDL for initializing the store.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `credentials`: `id` AUTOINCREMENT, `username` and `password` both UNIQUE
/// - `pictures`: `id` supplied by the caller, `name` UNIQUE, optional blob
/// - `pictures.owner` holds the username a picture is shown to after login
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS credentials (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username VARCHAR(100) NOT NULL UNIQUE,
    password CHAR(50) NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS pictures (
    id INTEGER PRIMARY KEY,
    name CHAR(50) NOT NULL UNIQUE,
    data BLOB NULL,
    owner TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_pictures_owner ON pictures(owner);
"#;
