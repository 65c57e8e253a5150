//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool setup and the credential store
//! - `pictures.rs`: the picture store

pub mod models;
pub mod pictures;
pub mod schema;
pub mod sqlite;

pub use models::{DbCredential, DbPicture, InsertOutcome, NewPicture};
pub use pictures::PicturesStorage;
pub use schema::SQLITE_INIT;
pub use sqlite::{CredentialsStorage, SqlitePool, connect};
