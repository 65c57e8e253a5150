use crate::db::models::{DbCredential, InsertOutcome};
use crate::db::schema::SQLITE_INIT;
use crate::error::GateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the database at `database_url` and apply the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, GateError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), GateError> {
    // execute multiple statements one by one (sqlx::query runs a single statement)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct CredentialsStorage {
    pool: SqlitePool,
}

impl CredentialsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<DbCredential>, GateError> {
        let row = sqlx::query_as::<_, DbCredential>(
            "SELECT id, username, password FROM credentials WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Exact, case-sensitive match on both columns.
    pub async fn find_by_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<DbCredential>, GateError> {
        let row = sqlx::query_as::<_, DbCredential>(
            "SELECT id, username, password FROM credentials WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert a new credential. A username collision detected by the store
    /// (e.g. a concurrent registration winning the race) is reported as
    /// `UsernameTaken`; every other failure propagates.
    pub async fn insert(&self, username: &str, password: &str) -> Result<InsertOutcome, GateError> {
        let res = sqlx::query("INSERT INTO credentials (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await;

        match res {
            Ok(done) => Ok(InsertOutcome::Created(done.last_insert_rowid())),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.message().contains("credentials.username") =>
            {
                debug!(username, "username uniqueness rejected by store");
                Ok(InsertOutcome::UsernameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> Result<i64, GateError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM credentials")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}
