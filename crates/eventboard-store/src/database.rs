//! Database bootstrap: open the SQLite file and apply the bundled schema.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use crate::accessor::SqliteStore;

/// Embedded schema, applied idempotently on every open.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// An open, schema-initialised database.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the database file at `path` with foreign
    /// keys enabled, then applies the schema.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the file cannot be opened or the schema
    /// cannot be applied.
    pub async fn open(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, sqlx::Error> {
        let path = path.as_ref();
        let is_new = !path.exists();

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await.inspect(|_| {
            if is_new {
                info!(path = %path.display(), "initialised new database");
            }
        })
    }

    /// Applies the schema to an existing pool.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if a migration fails.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        MIGRATOR.run(&pool).await?;
        Ok(Self { pool })
    }

    /// Storage accessor over this database.
    #[must_use]
    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }
}
