//! Eventboard Store — SQLite persistence.
//!
//! [`database::Database`] opens the file and applies the schema,
//! [`accessor::SqliteStore`] runs parameterized statements, and
//! [`sqlite_repository::SqliteRepository`] implements the repository traits
//! from `eventboard-core` on top of the two.

pub mod accessor;
pub mod database;
pub mod event_query;
mod rows;
pub mod sqlite_repository;

pub use accessor::{SqlParam, SqliteStore};
pub use database::Database;
pub use sqlite_repository::SqliteRepository;
