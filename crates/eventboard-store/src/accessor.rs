//! Thin accessor over the SQLite pool.
//!
//! Every statement goes through one of three primitives and takes its
//! values as positional [`SqlParam`]s, so caller input is always bound and
//! never spliced into SQL text.

use chrono::{DateTime, NaiveDate, Utc};
use eventboard_core::error::DomainError;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Arguments, FromRow, SqlitePool};
use tracing::error;

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Integer(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Shared handle for running parameterized statements.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wraps an open pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Runs a query and returns every row, in the order the engine yields them.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if binding or execution fails.
    pub async fn fetch_all<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_failure("query", &e))
    }

    /// Runs a query and returns its first row, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if binding or execution fails.
    pub async fn fetch_one<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_failure("query", &e))
    }

    /// Runs a mutating statement and returns the rowid of the last inserted row.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if binding or execution fails.
    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<i64, DomainError> {
        let result = sqlx::query_with(sql, arguments(params)?)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_failure("execute", &e))?;
        Ok(result.last_insert_rowid())
    }
}

fn arguments(params: &[SqlParam]) -> Result<SqliteArguments<'_>, DomainError> {
    let mut args = SqliteArguments::default();
    for param in params {
        let bound = match param {
            SqlParam::Integer(value) => args.add(*value),
            SqlParam::Text(value) => args.add(value.as_str()),
            SqlParam::Timestamp(value) => args.add(*value),
            SqlParam::Date(value) => args.add(*value),
        };
        bound.map_err(|e| {
            error!(error = %e, "failed to bind query parameter");
            DomainError::Infrastructure(format!("parameter binding failed: {e}"))
        })?;
    }
    Ok(args)
}

fn storage_failure(operation: &str, err: &sqlx::Error) -> DomainError {
    error!(operation, error = %err, "database {operation} failed");
    DomainError::Infrastructure(format!("database {operation} failed: {err}"))
}
